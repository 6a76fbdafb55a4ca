//! Login screen (auth group).
//!
//! There is no authentication: the button (or `Enter`) just replaces the
//! navigation stack with the dashboard.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{ContainsPoint, Rectangle},
    text::Text,
};
use fleet_common::colors::WHITE;
use fleet_common::config::{CENTER_X, CENTER_Y, CONTENT_WIDTH, PADDING_X};
use fleet_common::theme::Theme;

use crate::styles::{BODY_FONT, CENTERED, CENTERED_MIDDLE, TITLE_FONT};
use crate::widgets::primitives::draw_card;

// =============================================================================
// Layout Constants
// =============================================================================

const TITLE_POS: Point = Point::new(CENTER_X, CENTER_Y - 80);
const SUBTITLE_POS: Point = Point::new(CENTER_X, CENTER_Y - 50);
const HINT_POS: Point = Point::new(CENTER_X, CENTER_Y + 70);

const BUTTON_HEIGHT: u32 = 52;

/// Sign-in button area, full content width.
pub const SIGN_IN_BUTTON: Rectangle = Rectangle::new(
    Point::new(PADDING_X as i32, CENTER_Y - (BUTTON_HEIGHT / 2) as i32),
    Size::new(CONTENT_WIDTH, BUTTON_HEIGHT),
);

pub const TITLE: &str = "Fleet Management";
pub const SUBTITLE: &str = "Sign in to continue";
pub const HINT: &str = "Press ENTER to sign in";

/// Draw the login screen.
pub fn draw_login<D>(
    display: &mut D,
    theme: &Theme,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(TITLE, TITLE_POS, MonoTextStyle::new(TITLE_FONT, theme.text), CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        SUBTITLE,
        SUBTITLE_POS,
        MonoTextStyle::new(BODY_FONT, theme.sub_text),
        CENTERED,
    )
    .draw(display)
    .ok();

    draw_card(display, SIGN_IN_BUTTON, theme.accent);
    Text::with_text_style(
        "Sign In",
        SIGN_IN_BUTTON.center(),
        MonoTextStyle::new(BODY_FONT, WHITE),
        CENTERED_MIDDLE,
    )
    .draw(display)
    .ok();

    Text::with_text_style(HINT, HINT_POS, MonoTextStyle::new(BODY_FONT, theme.sub_text), CENTERED)
        .draw(display)
        .ok();
}

/// Whether a click at `point` lands on the sign-in button.
#[inline]
pub fn sign_in_contains(point: Point) -> bool {
    SIGN_IN_BUTTON.contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDisplay;
    use fleet_common::config::SCREEN_WIDTH;

    #[test]
    fn test_title_fits_screen() {
        let width = TITLE.len() as u32 * TITLE_FONT.character_size.width;
        assert!(width <= SCREEN_WIDTH);
    }

    #[test]
    fn test_button_hit_test() {
        assert!(sign_in_contains(SIGN_IN_BUTTON.center()));
        assert!(!sign_in_contains(Point::new(0, 0)));
    }

    #[test]
    fn test_draws_button_in_accent() {
        let theme = Theme::DARK;
        let mut display = TestDisplay::new(theme.background);
        draw_login(&mut display, &theme);

        assert!(display.count_in(&SIGN_IN_BUTTON, theme.accent) > 0);
        assert!(display.count_in(&SIGN_IN_BUTTON, WHITE) > 0);
        assert!(!display.points_with(theme.sub_text).is_empty());
    }
}
