//! Log viewer page.
//!
//! Shows the newest entries of the on-screen log buffer, one per line,
//! colored by level:
//!
//! ```text
//! Logs
//! [I] 00012 dashboard mounted
//! [I] 00415 location resolved 37.7749,-122.4194
//! [W] 03120 speed 165 beyond gauge range
//! ...
//! Y: back
//! ```

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, text::Text};
use fleet_common::config::{HEADER_HEIGHT, PADDING_X, SCREEN_HEIGHT};
use fleet_common::log::{LOG_MSG_LEN, LogBuffer, LogEntry};
use fleet_common::theme::Theme;
use heapless::String;

use crate::styles::{BODY_FONT, LEFT_ALIGNED, LEFT_TOP, LOG_LINE_HEIGHT, SMALL_FONT, TITLE_FONT};

// =============================================================================
// Layout Constants
// =============================================================================

const TITLE_POS: Point = Point::new(PADDING_X as i32, 82);

/// Top of the first log line.
const LOG_Y: i32 = HEADER_HEIGHT as i32;

/// Space kept free at the bottom for the footer hint.
const FOOTER_HEIGHT: u32 = 32;

const FOOTER_POS: Point = Point::new(PADDING_X as i32, (SCREEN_HEIGHT - FOOTER_HEIGHT / 2) as i32);

/// Lines that fit between the title and the footer.
pub const VISIBLE_LINES: usize = ((SCREEN_HEIGHT - HEADER_HEIGHT - FOOTER_HEIGHT) / LOG_LINE_HEIGHT) as usize;

/// `[L] ttttt ` prefix plus the message.
const LINE_CAPACITY: usize = LOG_MSG_LEN + 12;

/// Format one entry as `[L] 00000 message`.
pub fn format_entry(entry: &LogEntry) -> String<LINE_CAPACITY> {
    let mut line: String<LINE_CAPACITY> = String::new();
    let _ = write!(
        line,
        "[{}] {:05} {}",
        entry.level.prefix(),
        entry.display_timestamp(),
        entry.message
    );
    line
}

/// Draw the log page.
pub fn draw_logs_page<D>(
    display: &mut D,
    theme: &Theme,
    buffer: &LogBuffer,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Logs", TITLE_POS, MonoTextStyle::new(TITLE_FONT, theme.text), LEFT_ALIGNED)
        .draw(display)
        .ok();

    if buffer.is_empty() {
        Text::with_text_style(
            "No log entries",
            Point::new(PADDING_X as i32, LOG_Y),
            MonoTextStyle::new(BODY_FONT, theme.sub_text),
            LEFT_TOP,
        )
        .draw(display)
        .ok();
    }

    for (row, entry) in buffer.latest(VISIBLE_LINES).enumerate() {
        let y = LOG_Y + (row as u32 * LOG_LINE_HEIGHT) as i32;
        let line = format_entry(entry);
        Text::with_text_style(
            &line,
            Point::new(PADDING_X as i32 / 2, y),
            MonoTextStyle::new(SMALL_FONT, entry.level.color(theme)),
            LEFT_TOP,
        )
        .draw(display)
        .ok();
    }

    Text::with_text_style(
        "Y: back",
        FOOTER_POS,
        MonoTextStyle::new(BODY_FONT, theme.sub_text),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
}
