//! Display, layout and gauge configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Section positions are derived at compile time from the paddings and
//! heights below, so drawing code never recomputes them per frame. `const`
//! assertions reject layouts that would spill off the screen.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Fleet Management         (o) │  header
//! │ Dashboard                    │
//! ├──────────────────────────────┤
//! │            map               │  200px
//! ├──────────────────────────────┤
//! │        speedometer           │  200px gauge + padding
//! ├─────────┬─────────┬──────────┤
//! │ battery │  temp   │  drive   │  stat cards
//! └─────────┴─────────┴──────────┘
//! ```

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (portrait phone viewport).
pub const SCREEN_WIDTH: u32 = 360;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 740;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Gauge Configuration
// =============================================================================

/// Speedometer widget diameter in pixels.
pub const SPEEDOMETER_SIZE: u32 = 200;

/// Arc radius as a fraction of the widget diameter.
pub const GAUGE_RADIUS_FRACTION: f32 = 0.4;

/// Needle length as a fraction of the widget diameter.
pub const NEEDLE_LENGTH_FRACTION: f32 = 0.4;

/// Arc start angle in degrees (from +x, clockwise-positive).
pub const GAUGE_START_ANGLE: f32 = -120.0;

/// Arc end angle in degrees.
pub const GAUGE_END_ANGLE: f32 = 120.0;

/// Top of the speed scale.
pub const MAX_SPEED: f32 = 160.0;

/// Speed shown until a real source exists.
pub const MOCK_SPEED: f32 = 75.0;

/// Arc stroke width in pixels.
pub const GAUGE_TRACK_WIDTH: u32 = 10;

/// Needle stroke width in pixels.
pub const NEEDLE_WIDTH: u32 = 3;

/// Center dot radius in pixels.
pub const HUB_RADIUS: u32 = 8;

const _: () = assert!(GAUGE_START_ANGLE < GAUGE_END_ANGLE);
const _: () = assert!(MOCK_SPEED >= 0.0 && MOCK_SPEED <= MAX_SPEED);

// =============================================================================
// Map Configuration
// =============================================================================

/// Latitude span of the initial map region.
pub const MAP_LATITUDE_DELTA: f64 = 0.0922;

/// Longitude span of the initial map region.
pub const MAP_LONGITUDE_DELTA: f64 = 0.0421;

// =============================================================================
// Layout Constants
// =============================================================================

/// Horizontal padding of header and content.
pub const PADDING_X: u32 = 24;

/// Width available to content sections.
pub const CONTENT_WIDTH: u32 = SCREEN_WIDTH - 2 * PADDING_X;

/// Header height (status bar inset, two text lines, bottom padding).
pub const HEADER_HEIGHT: u32 = 104;

/// Vertical gap between content sections.
pub const SECTION_GAP: u32 = 24;

/// Corner radius of cards.
pub const CARD_RADIUS: u32 = 16;

/// Avatar diameter in the header.
pub const AVATAR_SIZE: u32 = 40;

/// Map card top edge.
pub const MAP_Y: u32 = HEADER_HEIGHT;

/// Map card height.
pub const MAP_HEIGHT: u32 = 200;

/// Padding around the gauge inside its card.
pub const SPEEDOMETER_PADDING: u32 = 20;

/// Speedometer card top edge.
pub const SPEEDOMETER_CARD_Y: u32 = MAP_Y + MAP_HEIGHT + SECTION_GAP;

/// Speedometer card height.
pub const SPEEDOMETER_CARD_HEIGHT: u32 = SPEEDOMETER_SIZE + 2 * SPEEDOMETER_PADDING;

/// Stats row top edge.
pub const STATS_Y: u32 = SPEEDOMETER_CARD_Y + SPEEDOMETER_CARD_HEIGHT + SECTION_GAP;

/// Stat card height.
pub const STAT_CARD_HEIGHT: u32 = 110;

/// Number of stat cards in the row.
pub const STAT_CARD_COUNT: usize = 3;

/// Stat card width (31% of the content width).
pub const STAT_CARD_WIDTH: u32 = CONTENT_WIDTH * 31 / 100;

/// Gap between stat cards.
pub const STAT_CARD_GAP: u32 = (CONTENT_WIDTH - STAT_CARD_WIDTH * STAT_CARD_COUNT as u32) / (STAT_CARD_COUNT as u32 - 1);

const _: () = assert!(STATS_Y + STAT_CARD_HEIGHT + SECTION_GAP <= SCREEN_HEIGHT);
const _: () = assert!(SPEEDOMETER_SIZE <= CONTENT_WIDTH);
const _: () = assert!(STAT_CARD_WIDTH * STAT_CARD_COUNT as u32 <= CONTENT_WIDTH);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_do_not_overlap() {
        assert!(MAP_Y >= HEADER_HEIGHT);
        assert!(SPEEDOMETER_CARD_Y >= MAP_Y + MAP_HEIGHT);
        assert!(STATS_Y >= SPEEDOMETER_CARD_Y + SPEEDOMETER_CARD_HEIGHT);
    }

    #[test]
    fn test_stat_row_fills_content_width() {
        let used = STAT_CARD_WIDTH * STAT_CARD_COUNT as u32 + STAT_CARD_GAP * (STAT_CARD_COUNT as u32 - 1);
        assert!(used <= CONTENT_WIDTH);
        assert!(CONTENT_WIDTH - used < STAT_CARD_COUNT as u32);
    }

    #[test]
    fn test_gauge_fits_card() {
        assert_eq!(SPEEDOMETER_CARD_HEIGHT, SPEEDOMETER_SIZE + 40);
    }
}
