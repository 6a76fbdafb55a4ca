//! Static text alignment styles and fonts.
//!
//! Text colors come from the resolved theme at draw time, so only alignments
//! and font references are `const` here. Callers build the style with
//! `MonoTextStyle::new(FONT, theme.text)`; just the color varies and the font
//! reference is shared.
//!
//! # Fonts
//!
//! | Use | Font |
//! |-----|------|
//! | Screen title | `ProFont` 24pt |
//! | Speed value | `ProFont` 24pt |
//! | Greeting, unit, hints | 7x13 |
//! | Stat values | 9x18 bold, ISO 8859-1 (has `°`) |
//! | Stat titles, log lines, map label | 6x10 |

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_7X13},
        iso_8859_1::FONT_9X18_BOLD,
    },
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text, baseline at the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text, baseline at the anchor point.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Left-aligned text with the anchor on the top edge. Used for stacked lines.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Centered text with the anchor on the vertical middle.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Large bold font for the screen title and speed value.
pub const TITLE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium font for the greeting, `MPH` unit and hints.
pub const BODY_FONT: &MonoFont = &FONT_7X13;

/// Stat card values. Latin-1 so the degree sign renders.
pub const STAT_VALUE_FONT: &MonoFont = &FONT_9X18_BOLD;

/// Small font for stat titles, log lines and the map label.
pub const SMALL_FONT: &MonoFont = &FONT_6X10;

/// Height of one log line.
pub const LOG_LINE_HEIGHT: u32 = SMALL_FONT.character_size.height + 4;
