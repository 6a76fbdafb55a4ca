//! Map card with the current-location marker.
//!
//! There are no map tiles: the card is a land-colored rounded rectangle with
//! a street grid, and the marker is placed by projecting the coordinate into
//! the card through a [`MapRegion`] centered on the fix.
//!
//! The card is only drawn once a location has resolved. While the fetch is
//! pending a "Locating..." hint is shown; after a denial or failure the area
//! stays empty.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use fleet_common::config::{CARD_RADIUS, CONTENT_WIDTH, MAP_HEIGHT, MAP_Y, PADDING_X};
use fleet_common::location::{Coordinate, LocationState, MapRegion};
use fleet_common::theme::Theme;

use super::primitives::{draw_card, draw_marker};
use crate::styles::{BODY_FONT, CENTERED, CENTERED_MIDDLE, SMALL_FONT};

/// Map card area on screen.
pub const MAP_AREA: Rectangle = Rectangle::new(
    Point::new(PADDING_X as i32, MAP_Y as i32),
    Size::new(CONTENT_WIDTH, MAP_HEIGHT),
);

/// Street grid spacing.
const STREET_SPACING: u32 = 48;

/// Marker label, shown above the pin.
pub const MARKER_TITLE: &str = "Current Location";

/// Gap between the marker center and the label baseline.
const LABEL_GAP: i32 = 14;

/// Draw the map card for the current location state.
pub fn draw_map<D>(
    display: &mut D,
    theme: &Theme,
    location: &LocationState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match location {
        LocationState::Resolved(coord) => {
            draw_card(display, MAP_AREA, theme.map_land);
            draw_streets(display, theme.background);

            let region = MapRegion::around(*coord);
            if let Some(pin) = marker_position(&region, *coord) {
                draw_marker(display, pin, theme.accent, theme.background);
                Text::with_text_style(
                    MARKER_TITLE,
                    pin - Point::new(0, LABEL_GAP),
                    MonoTextStyle::new(SMALL_FONT, theme.text),
                    CENTERED,
                )
                .draw(display)
                .ok();
            }
        }
        LocationState::Pending => {
            Text::with_text_style(
                "Locating...",
                MAP_AREA.center(),
                MonoTextStyle::new(BODY_FONT, theme.sub_text),
                CENTERED_MIDDLE,
            )
            .draw(display)
            .ok();
        }
        LocationState::Denied | LocationState::Failed(_) => {}
    }
}

/// Screen position of `coord` inside the map card.
pub fn marker_position(
    region: &MapRegion,
    coord: Coordinate,
) -> Option<Point> {
    region
        .project(coord, MAP_AREA.size.width, MAP_AREA.size.height)
        .map(|(x, y)| MAP_AREA.top_left + Point::new(x, y))
}

/// Straight streets, kept clear of the rounded corners.
fn draw_streets<D>(
    display: &mut D,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 2);
    let left = MAP_AREA.top_left.x;
    let top = MAP_AREA.top_left.y;
    let right = left + MAP_AREA.size.width as i32 - 1;
    let bottom = top + MAP_AREA.size.height as i32 - 1;
    let inset = CARD_RADIUS as i32;

    for x in (left + STREET_SPACING as i32..right).step_by(STREET_SPACING as usize) {
        Line::new(Point::new(x, top + inset), Point::new(x, bottom - inset))
            .into_styled(style)
            .draw(display)
            .ok();
    }
    for y in (top + STREET_SPACING as i32..bottom).step_by(STREET_SPACING as usize) {
        Line::new(Point::new(left + inset, y), Point::new(right - inset, y))
            .into_styled(style)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
