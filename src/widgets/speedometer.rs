//! Speedometer card: background arc, needle, hub and speed readout.
//!
//! All geometry comes from [`GaugeConfig`]; this module only converts the
//! sub-pixel results to screen points. The gauge is drawn through a
//! translated target so gauge coordinates (origin at the widget's top-left)
//! can be used as-is.
//!
//! The needle is drawn at the *displayed* angle, which the needle spring
//! moves toward the reading's angle every frame. The readout shows the raw
//! reading.

use core::fmt::Write;

use embedded_graphics::{
    draw_target::DrawTargetExt,
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use fleet_common::config::{
    CONTENT_WIDTH,
    GAUGE_TRACK_WIDTH,
    HUB_RADIUS,
    NEEDLE_WIDTH,
    PADDING_X,
    SPEEDOMETER_CARD_HEIGHT,
    SPEEDOMETER_CARD_Y,
    SPEEDOMETER_PADDING,
    SPEEDOMETER_SIZE,
};
use fleet_common::gauge::{GaugeConfig, NeedleRotation, PointF};
use fleet_common::theme::Theme;
use heapless::String;

use super::primitives::draw_card;
use crate::styles::{BODY_FONT, CENTERED, TITLE_FONT};

// =============================================================================
// Layout Constants
// =============================================================================

/// Speedometer card area on screen.
pub const SPEEDOMETER_CARD: Rectangle = Rectangle::new(
    Point::new(PADDING_X as i32, SPEEDOMETER_CARD_Y as i32),
    Size::new(CONTENT_WIDTH, SPEEDOMETER_CARD_HEIGHT),
);

/// Top-left corner of the gauge widget, centered in the card.
pub const GAUGE_ORIGIN: Point = Point::new(
    (PADDING_X + (CONTENT_WIDTH - SPEEDOMETER_SIZE) / 2) as i32,
    (SPEEDOMETER_CARD_Y + SPEEDOMETER_PADDING) as i32,
);

/// Speed value baseline, below the hub.
const SPEED_OFFSET: Point = Point::new(0, 44);

/// `MPH` baseline, below the speed value.
const UNIT_OFFSET: Point = Point::new(0, 64);

pub const SPEED_UNIT: &str = "MPH";

/// Fits any finite `f32` printed without decimals (39 digits and a sign).
const READOUT_CAPACITY: usize = 48;

// =============================================================================
// Drawing Functions
// =============================================================================

/// Nearest pixel to a sub-pixel gauge point.
#[inline]
fn to_point(p: PointF) -> Point {
    Point::new(p.x.round() as i32, p.y.round() as i32)
}

/// Whole-number speed text under the hub.
fn format_readout(speed: f32) -> String<READOUT_CAPACITY> {
    let mut value = String::new();
    let _ = write!(value, "{speed:.0}");
    value
}

/// Draw the speedometer card.
///
/// `needle_angle` is in degrees, 0 pointing straight up, clockwise-positive.
pub fn draw_speedometer<D>(
    display: &mut D,
    theme: &Theme,
    gauge: &GaugeConfig,
    needle_angle: f32,
    speed: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_card(display, SPEEDOMETER_CARD, theme.card);

    let mut target = display.translated(GAUGE_ORIGIN);
    let center = to_point(gauge.center());

    // Background arc
    let diameter = (gauge.radius() * 2.0).round() as u32;
    Arc::with_center(center, diameter, gauge.start_angle.deg(), gauge.span().deg())
        .into_styled(PrimitiveStyle::with_stroke(theme.gauge_track, GAUGE_TRACK_WIDTH))
        .draw(&mut target)
        .ok();

    // Needle
    let rotation = NeedleRotation {
        angle: needle_angle,
        pivot: gauge.center(),
    };
    let tip = to_point(gauge.needle_tip(&rotation));
    Line::new(center, tip)
        .into_styled(PrimitiveStyle::with_stroke(theme.accent, NEEDLE_WIDTH))
        .draw(&mut target)
        .ok();

    // Hub
    Circle::with_center(center, HUB_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_fill(theme.accent))
        .draw(&mut target)
        .ok();

    // Readout
    let value = format_readout(speed);
    Text::with_text_style(
        &value,
        center + SPEED_OFFSET,
        MonoTextStyle::new(TITLE_FONT, theme.text),
        CENTERED,
    )
    .draw(&mut target)
    .ok();
    Text::with_text_style(
        SPEED_UNIT,
        center + UNIT_OFFSET,
        MonoTextStyle::new(BODY_FONT, theme.sub_text),
        CENTERED,
    )
    .draw(&mut target)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDisplay;

    fn screen_center() -> Point {
        GAUGE_ORIGIN + Point::new(100, 100)
    }

    #[test]
    fn test_gauge_centered_in_card() {
        let card_center_x = SPEEDOMETER_CARD.center().x;
        assert!((screen_center().x - card_center_x).abs() <= 1);
        assert_eq!(GAUGE_ORIGIN.y, SPEEDOMETER_CARD.top_left.y + SPEEDOMETER_PADDING as i32);
    }

    #[test]
    fn test_hub_and_needle() {
        let theme = Theme::LIGHT;
        let mut display = TestDisplay::new(theme.background);
        draw_speedometer(&mut display, &theme, &GaugeConfig::DEFAULT, 0.0, 80.0);

        let c = screen_center();
        assert_eq!(display.pixel(c.x, c.y), theme.accent);
        // Needle points straight up at 0 degrees
        assert_eq!(display.pixel(c.x, c.y - 30), theme.accent);
        assert_ne!(display.pixel(c.x + 30, c.y), theme.accent);
    }

    #[test]
    fn test_needle_follows_angle() {
        let theme = Theme::DARK;
        let mut display = TestDisplay::new(theme.background);
        draw_speedometer(&mut display, &theme, &GaugeConfig::DEFAULT, 90.0, 80.0);

        let c = screen_center();
        assert_eq!(display.pixel(c.x + 30, c.y), theme.accent);
        assert_ne!(display.pixel(c.x, c.y - 30), theme.accent);
    }

    #[test]
    fn test_track_drawn_at_radius() {
        let theme = Theme::LIGHT;
        let mut display = TestDisplay::new(theme.background);
        draw_speedometer(&mut display, &theme, &GaugeConfig::DEFAULT, -120.0, 0.0);

        let c = screen_center();
        // 0 degrees (3 o'clock) is inside the 240 degree sweep
        assert_eq!(display.pixel(c.x + 80, c.y), theme.gauge_track);
        // 180 degrees (9 o'clock) is in the gap
        assert_eq!(display.pixel(c.x - 80, c.y), theme.card);
    }

    #[test]
    fn test_readout_drawn() {
        let theme = Theme::LIGHT;
        let mut display = TestDisplay::new(theme.background);
        draw_speedometer(&mut display, &theme, &GaugeConfig::DEFAULT, 0.0, 75.0);

        assert!(display.count_in(&SPEEDOMETER_CARD, theme.text) > 0);
        assert!(display.count_in(&SPEEDOMETER_CARD, theme.sub_text) > 0);
    }

    #[test]
    fn test_readout_text() {
        assert_eq!(format_readout(75.0).as_str(), "75");
        assert_eq!(format_readout(-10.0).as_str(), "-10");

        let largest = format_readout(f32::MAX);
        assert_eq!(largest.len(), 39);
        assert!(largest.starts_with("34028234"));
        assert_eq!(format_readout(-f32::MAX).len(), 40);
    }
}
