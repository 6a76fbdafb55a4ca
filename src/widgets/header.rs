//! Dashboard header: greeting, title and the avatar logout button.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │  Fleet Management             ( )  │
//! │  Dashboard                    ( )  │  104px
//! └────────────────────────────────────┘
//! ```
//!
//! Fixed positions are `const` like the rest of the layout. The avatar is a
//! hit target; [`avatar_contains`] maps a click to the logout action.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, ContainsPoint, PrimitiveStyle},
    text::Text,
};
use fleet_common::colors::{AVATAR, WHITE};
use fleet_common::config::{AVATAR_SIZE, PADDING_X, SCREEN_WIDTH};
use fleet_common::theme::Theme;

use crate::styles::{BODY_FONT, CENTERED_MIDDLE, LEFT_ALIGNED, SMALL_FONT, TITLE_FONT};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Baseline of the "Fleet Management" greeting.
const GREETING_POS: Point = Point::new(PADDING_X as i32, 52);

/// Baseline of the "Dashboard" title.
const TITLE_POS: Point = Point::new(PADDING_X as i32, 82);

/// Vertical middle of the text block; the avatar is centered on it.
const AVATAR_CENTER_Y: i32 = 62;

/// Avatar circle, right-aligned inside the horizontal padding.
pub const AVATAR_BOUNDS: Circle = Circle::new(
    Point::new(
        (SCREEN_WIDTH - PADDING_X - AVATAR_SIZE) as i32,
        AVATAR_CENTER_Y - (AVATAR_SIZE / 2) as i32,
    ),
    AVATAR_SIZE,
);

pub const GREETING: &str = "Fleet Management";
pub const TITLE: &str = "Dashboard";

/// Avatar fill style. Fixed color, same in both themes.
const AVATAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(AVATAR);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header text and avatar.
pub fn draw_header<D>(
    display: &mut D,
    theme: &Theme,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(
        GREETING,
        GREETING_POS,
        MonoTextStyle::new(BODY_FONT, theme.sub_text),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    Text::with_text_style(TITLE, TITLE_POS, MonoTextStyle::new(TITLE_FONT, theme.text), LEFT_ALIGNED)
        .draw(display)
        .ok();

    AVATAR_BOUNDS.into_styled(AVATAR_STYLE).draw(display).ok();
    Text::with_text_style(
        "FM",
        AVATAR_BOUNDS.center(),
        MonoTextStyle::new(SMALL_FONT, WHITE),
        CENTERED_MIDDLE,
    )
    .draw(display)
    .ok();
}

/// Whether a click at `point` lands on the avatar.
#[inline]
pub fn avatar_contains(point: Point) -> bool {
    AVATAR_BOUNDS.contains(point)
}

// =============================================================================
// Unit Tests
// =============================================================================
