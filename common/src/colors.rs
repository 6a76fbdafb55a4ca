//! Color constants for the fleet dashboard.
//!
//! Palette values are written as 24-bit hex (the way designers hand them
//! over) and narrowed to `Rgb565` at compile time with [`hex`]. Rgb565 keeps
//! 5 bits of red, 6 of green and 5 of blue, so the low bits of each channel
//! are dropped.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Narrow a `0xRRGGBB` value to `Rgb565`.
pub const fn hex(rgb: u32) -> Rgb565 {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Map grid lines in dark mode, text on bright badges.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Light background, dark-mode text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Brand / Status Colors (same in both themes)
// =============================================================================

/// Accent blue `#007AFF`. Needle, hub, drive-time icon.
pub const ACCENT: Rgb565 = hex(0x007AFF);

/// Success green `#34C759`. Battery icon.
pub const SUCCESS: Rgb565 = hex(0x34C759);

/// Warning orange `#FF9500`. Temperature icon.
pub const WARNING: Rgb565 = hex(0xFF9500);

/// Danger red `#FF3B30`. Map marker.
pub const DANGER: Rgb565 = hex(0xFF3B30);

// =============================================================================
// Neutral Palette
// =============================================================================

/// Near-black `#1a1a1a`. Dark background, light-mode text.
pub const INK: Rgb565 = hex(0x1A1A1A);

/// `#2a2a2a`. Dark-mode card.
pub const CARD_DARK: Rgb565 = hex(0x2A2A2A);

/// `#f5f5f5`. Light-mode card.
pub const CARD_LIGHT: Rgb565 = hex(0xF5F5F5);

/// `#333`. Dark-mode gauge track.
pub const TRACK_DARK: Rgb565 = hex(0x333333);

/// `#ddd`. Light-mode gauge track.
pub const TRACK_LIGHT: Rgb565 = hex(0xDDDDDD);

/// `#999`. Dark-mode secondary text.
pub const SUBTEXT_DARK: Rgb565 = hex(0x999999);

/// `#666`. Light-mode secondary text.
pub const SUBTEXT_LIGHT: Rgb565 = hex(0x666666);

/// Map land tint (light).
pub const MAP_LAND_LIGHT: Rgb565 = hex(0xE8F0E0);

/// Map land tint (dark).
pub const MAP_LAND_DARK: Rgb565 = hex(0x24302A);

/// Avatar placeholder fill.
pub const AVATAR: Rgb565 = hex(0x8E8E93);
