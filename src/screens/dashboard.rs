//! Dashboard screen.
//!
//! ```text
//! ┌────────────────────────────┐
//! │ Fleet Management       ( ) │  header (static)
//! │ Dashboard                  │
//! │ ┌────────────────────────┐ │
//! │ │          map           │ │  fades in at 200ms
//! │ └────────────────────────┘ │
//! │ ┌────────────────────────┐ │
//! │ │      speedometer       │ │  fades in at 300ms
//! │ └────────────────────────┘ │
//! │ ┌──────┐ ┌──────┐ ┌──────┐ │
//! │ │ stat │ │ stat │ │ stat │ │  fades in at 400ms
//! │ └──────┘ └──────┘ └──────┘ │
//! └────────────────────────────┘
//! ```
//!
//! Each section is drawn through a target translated by its entrance
//! offset, with the theme faded toward the background by its entrance
//! progress.

use embedded_graphics::draw_target::{DrawTargetExt, Translated};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use fleet_common::animations::{FadeInDown, MAP_ENTRANCE, SPEEDOMETER_ENTRANCE, STATS_ENTRANCE};
use fleet_common::gauge::GaugeConfig;
use fleet_common::location::LocationState;
use fleet_common::stats::dashboard_stats;
use fleet_common::theme::Theme;

use crate::widgets::{draw_header, draw_map, draw_speedometer, draw_stats};

/// Everything the dashboard shows for one frame.
#[derive(Clone, Copy, Debug)]
pub struct DashboardView<'a> {
    pub gauge: &'a GaugeConfig,
    /// Displayed needle angle (spring output), degrees.
    pub needle_angle: f32,
    /// Raw mock speed shown in the readout.
    pub speed: f32,
    pub location: &'a LocationState,
}

/// Draw the dashboard `elapsed_ms` after it was mounted.
pub fn draw_dashboard<D>(
    display: &mut D,
    theme: &Theme,
    view: &DashboardView<'_>,
    elapsed_ms: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_header(display, theme);

    draw_section(display, theme, &MAP_ENTRANCE, elapsed_ms, |target, theme| {
        draw_map(target, theme, view.location);
    });
    draw_section(display, theme, &SPEEDOMETER_ENTRANCE, elapsed_ms, |target, theme| {
        draw_speedometer(target, theme, view.gauge, view.needle_angle, view.speed);
    });
    draw_section(display, theme, &STATS_ENTRANCE, elapsed_ms, |target, theme| {
        draw_stats(target, theme, dashboard_stats());
    });
}

/// Whether every section has finished entering.
#[inline]
pub const fn entrance_done(elapsed_ms: u32) -> bool {
    MAP_ENTRANCE.is_done(elapsed_ms) && SPEEDOMETER_ENTRANCE.is_done(elapsed_ms) && STATS_ENTRANCE.is_done(elapsed_ms)
}

fn draw_section<D, F>(
    display: &mut D,
    theme: &Theme,
    entrance: &FadeInDown,
    elapsed_ms: u32,
    draw: F,
) where
    D: DrawTarget<Color = Rgb565>,
    F: FnOnce(&mut Translated<'_, D>, &Theme),
{
    if !entrance.is_visible(elapsed_ms) {
        return;
    }
    let faded = theme.faded(entrance.progress(elapsed_ms));
    let mut target = display.translated(Point::new(0, entrance.offset_y(elapsed_ms)));
    draw(&mut target, &faded);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDisplay;
    use crate::widgets::map::MAP_AREA;
    use crate::widgets::speedometer::SPEEDOMETER_CARD;
    use crate::widgets::stats::stat_card_area;
    use fleet_common::Coordinate;

    const DEPOT: Coordinate = Coordinate::new(37.7749, -122.4194);

    fn render(
        theme: &Theme,
        elapsed_ms: u32,
    ) -> TestDisplay {
        let location = LocationState::Resolved(DEPOT);
        let view = DashboardView {
            gauge: &GaugeConfig::DEFAULT,
            needle_angle: -7.5,
            speed: 75.0,
            location: &location,
        };
        let mut display = TestDisplay::new(theme.background);
        draw_dashboard(&mut display, theme, &view, elapsed_ms);
        display
    }

    #[test]
    fn test_sections_hidden_before_delay() {
        let theme = Theme::LIGHT;
        let display = render(&theme, 100);

        assert_eq!(display.count_in(&MAP_AREA, theme.map_land), 0);
        assert_eq!(display.count_in(&SPEEDOMETER_CARD, theme.card), 0);
        // Header is not animated
        assert!(!display.points_with(theme.text).is_empty());
    }

    #[test]
    fn test_sections_stagger_in() {
        let theme = Theme::LIGHT;
        // Map and speedometer entering, stats not started
        let display = render(&theme, 350);

        let full = |area: &embedded_graphics::primitives::Rectangle| (area.size.width * area.size.height) as usize;
        assert!(display.count_in(&MAP_AREA, theme.background) < full(&MAP_AREA));
        let stats = stat_card_area(0);
        assert_eq!(display.count_in(&stats, theme.background), full(&stats));
    }

    #[test]
    fn test_all_sections_settled() {
        let theme = Theme::DARK;
        assert!(entrance_done(700));
        assert!(!entrance_done(699));

        let display = render(&theme, 700);
        assert!(display.count_in(&MAP_AREA, theme.map_land) > 0);
        assert!(display.count_in(&SPEEDOMETER_CARD, theme.card) > 0);
        assert!(display.count_in(&stat_card_area(2), theme.card) > 0);
        assert!(display.count_in(&stat_card_area(2), theme.accent) > 0);
    }
}
