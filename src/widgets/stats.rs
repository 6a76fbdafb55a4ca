//! Stats row: three equal cards under the speedometer.
//!
//! Each card stacks an icon (tone color), the value (bold, text color) and
//! the title (sub-text color), left-aligned inside the card padding.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};
use fleet_common::config::{PADDING_X, STAT_CARD_COUNT, STAT_CARD_GAP, STAT_CARD_HEIGHT, STAT_CARD_WIDTH, STATS_Y};
use fleet_common::stats::StatCard;
use fleet_common::theme::Theme;

use super::primitives::{ICON_SIZE, draw_card, draw_icon};
use crate::styles::{LEFT_TOP, SMALL_FONT, STAT_VALUE_FONT};

/// Inner padding of a stat card.
const CARD_PADDING: i32 = 12;

/// Gap between the icon and the value.
const ICON_GAP: i32 = 12;

/// Gap between the value and the title.
const VALUE_GAP: i32 = 4;

/// Screen area of stat card `index` (0-based, left to right).
pub const fn stat_card_area(index: usize) -> Rectangle {
    let x = PADDING_X + index as u32 * (STAT_CARD_WIDTH + STAT_CARD_GAP);
    Rectangle::new(
        Point::new(x as i32, STATS_Y as i32),
        Size::new(STAT_CARD_WIDTH, STAT_CARD_HEIGHT),
    )
}

/// Draw all stat cards.
pub fn draw_stats<D>(
    display: &mut D,
    theme: &Theme,
    cards: &[StatCard; STAT_CARD_COUNT],
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (index, card) in cards.iter().enumerate() {
        draw_stat_card(display, theme, stat_card_area(index), card);
    }
}

fn draw_stat_card<D>(
    display: &mut D,
    theme: &Theme,
    area: Rectangle,
    card: &StatCard,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_card(display, area, theme.card);

    let icon_origin = area.top_left + Point::new(CARD_PADDING, CARD_PADDING);
    draw_icon(display, card.icon, icon_origin, card.tone.color(theme));

    let value_pos = icon_origin + Point::new(0, ICON_SIZE as i32 + ICON_GAP);
    Text::with_text_style(
        card.value,
        value_pos,
        MonoTextStyle::new(STAT_VALUE_FONT, theme.text),
        LEFT_TOP,
    )
    .draw(display)
    .ok();

    let title_pos = value_pos + Point::new(0, STAT_VALUE_FONT.character_size.height as i32 + VALUE_GAP);
    Text::with_text_style(
        card.title,
        title_pos,
        MonoTextStyle::new(SMALL_FONT, theme.sub_text),
        LEFT_TOP,
    )
    .draw(display)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDisplay;
    use fleet_common::config::{CONTENT_WIDTH, SCREEN_HEIGHT};
    use fleet_common::stats::dashboard_stats;

    #[test]
    fn test_cards_fill_content_width() {
        let first = stat_card_area(0);
        let last = stat_card_area(STAT_CARD_COUNT - 1);
        assert_eq!(first.top_left.x, PADDING_X as i32);

        let right = last.top_left.x + last.size.width as i32;
        let content_right = (PADDING_X + CONTENT_WIDTH) as i32;
        assert!(right <= content_right);
        assert!(content_right - right < STAT_CARD_COUNT as i32);
        assert!(last.top_left.y + (last.size.height as i32) < SCREEN_HEIGHT as i32);
    }

    #[test]
    fn test_cards_do_not_overlap() {
        for i in 1..STAT_CARD_COUNT {
            let prev = stat_card_area(i - 1);
            let next = stat_card_area(i);
            assert!(prev.top_left.x + prev.size.width as i32 <= next.top_left.x);
        }
    }

    #[test]
    fn test_text_fits_inside_card() {
        for card in dashboard_stats() {
            let value_width = card.value.chars().count() as u32 * STAT_VALUE_FONT.character_size.width;
            let title_width = card.title.chars().count() as u32 * SMALL_FONT.character_size.width;
            let inner = STAT_CARD_WIDTH - CARD_PADDING as u32;
            assert!(value_width <= inner, "{} value too wide", card.title);
            assert!(title_width <= inner, "{} title too wide", card.title);
        }
    }

    #[test]
    fn test_icons_use_tone_colors() {
        let theme = Theme::LIGHT;
        let mut display = TestDisplay::new(theme.background);
        draw_stats(&mut display, &theme, dashboard_stats());

        assert!(display.count_in(&stat_card_area(0), theme.success) > 0);
        assert!(display.count_in(&stat_card_area(1), theme.warning) > 0);
        assert!(display.count_in(&stat_card_area(2), theme.accent) > 0);
        assert!(display.count_in(&stat_card_area(1), theme.text) > 0);
        assert!(display.count_in(&stat_card_area(1), theme.sub_text) > 0);
    }
}
