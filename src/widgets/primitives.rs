//! Low-level drawing primitives shared across widgets.
//!
//! These are intentionally simple and focused on a single responsibility.
//! All of them draw with colors passed in by the caller; none of them know
//! about the theme.
//!
//! # Icons
//!
//! Stat card icons are drawn from primitives inside a 24x24 box whose
//! top-left corner is the anchor point:
//!
//! ```text
//!  battery        thermometer     clock
//!  ┌────────┐┐      ╷              .-.
//!  │   /    ││      │             ( ─┐ )
//!  │  /_    ├┘      │              '-'
//!  └────────┘       ●
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle,
    CornerRadii,
    Line,
    PrimitiveStyle,
    PrimitiveStyleBuilder,
    Rectangle,
    RoundedRectangle,
    StrokeAlignment,
};

use fleet_common::config::CARD_RADIUS;
use fleet_common::stats::StatIcon;

/// Icon box edge length.
pub const ICON_SIZE: u32 = 24;

/// Draw a filled card with the standard corner radius.
pub fn draw_card<D>(
    display: &mut D,
    area: Rectangle,
    fill: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::new(area, CornerRadii::new(Size::new_equal(CARD_RADIUS)))
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();
}

/// Draw the icon for a stat card with its top-left corner at `origin`.
pub fn draw_icon<D>(
    display: &mut D,
    icon: StatIcon,
    origin: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match icon {
        StatIcon::BatteryCharging => draw_battery_icon(display, origin, color),
        StatIcon::Thermometer => draw_thermometer_icon(display, origin, color),
        StatIcon::Time => draw_clock_icon(display, origin, color),
    }
}

/// Battery body with terminal nub and a lightning bolt.
fn draw_battery_icon<D>(
    display: &mut D,
    origin: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let outline = PrimitiveStyle::with_stroke(color, 2);
    Rectangle::new(origin + Point::new(1, 6), Size::new(19, 12))
        .into_styled(outline)
        .draw(display)
        .ok();
    Rectangle::new(origin + Point::new(20, 9), Size::new(3, 6))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();

    let bolt = PrimitiveStyle::with_stroke(color, 1);
    Line::new(origin + Point::new(12, 8), origin + Point::new(8, 12))
        .into_styled(bolt)
        .draw(display)
        .ok();
    Line::new(origin + Point::new(8, 12), origin + Point::new(12, 12))
        .into_styled(bolt)
        .draw(display)
        .ok();
    Line::new(origin + Point::new(12, 12), origin + Point::new(8, 16))
        .into_styled(bolt)
        .draw(display)
        .ok();
}

/// Thermometer stem with a round bulb at the bottom.
fn draw_thermometer_icon<D>(
    display: &mut D,
    origin: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::new(origin + Point::new(9, 1), Size::new(6, 16)),
        Size::new_equal(3),
    )
    .into_styled(PrimitiveStyle::with_stroke(color, 2))
    .draw(display)
    .ok();
    Circle::new(origin + Point::new(6, 13), 11)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Clock face with hands at three o'clock.
fn draw_clock_icon<D>(
    display: &mut D,
    origin: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::new(origin + Point::new(2, 2), 20)
        .into_styled(PrimitiveStyle::with_stroke(color, 2))
        .draw(display)
        .ok();

    let hands = PrimitiveStyle::with_stroke(color, 2);
    let center = origin + Point::new(12, 12);
    Line::new(center, center + Point::new(0, -6))
        .into_styled(hands)
        .draw(display)
        .ok();
    Line::new(center, center + Point::new(5, 0))
        .into_styled(hands)
        .draw(display)
        .ok();
}

/// Location marker: filled dot with a contrasting ring.
pub fn draw_marker<D>(
    display: &mut D,
    center: Point,
    fill: Rgb565,
    ring: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(ring)
        .stroke_width(3)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    Circle::with_center(center, 16).into_styled(style).draw(display).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
