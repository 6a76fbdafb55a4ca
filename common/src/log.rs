//! Log buffer with levels and timestamps for the on-screen log viewer.
//!
//! A fixed-size ring of recent entries. When full, the oldest entry is
//! dropped. Messages longer than [`LOG_MSG_LEN`] are truncated on a char
//! boundary.
//!
//! # Log Levels
//!
//! - `Trace`, `Debug`: sub-text color
//! - `Info`: success color
//! - `Warn`: warning color
//! - `Error`: danger color

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::theme::Theme;

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 32;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Display color for this level under `theme`.
    pub const fn color(
        self,
        theme: &Theme,
    ) -> Rgb565 {
        match self {
            Self::Trace | Self::Debug => theme.sub_text,
            Self::Info => theme.success,
            Self::Warn => theme.warning,
            Self::Error => theme.danger,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Truncated to `LOG_MSG_LEN` characters.
    pub message: String<LOG_MSG_LEN>,
    /// Milliseconds since startup.
    pub timestamp_ms: u32,
}

impl LogEntry {
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }

    /// Timestamp folded to five digits for display.
    #[inline]
    pub const fn display_timestamp(&self) -> u32 {
        self.timestamp_ms % 100_000
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::new(LogLevel::Info, "", 0)
    }
}

/// Circular buffer of log entries.
#[derive(Clone, Debug)]
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
    written: u32,
}

impl LogBuffer {
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    timestamp_ms: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
            written: 0,
        }
    }

    /// Push a new entry. The oldest entry is dropped if the buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        self.entries[self.head] = entry;
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
        self.written = self.written.wrapping_add(1);
    }

    /// Shorthand for `push(LogEntry::new(..))`.
    pub fn record(
        &mut self,
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) {
        self.push(LogEntry::new(level, message, timestamp_ms));
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Entries pushed since creation (wrapping). Changes whenever the
    /// visible contents change, even once the ring is full.
    #[inline]
    pub const fn written(&self) -> u32 {
        self.written
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }

    /// The newest `n` entries, oldest first.
    pub fn latest(
        &self,
        n: usize,
    ) -> impl Iterator<Item = &LogEntry> {
        self.iter().skip(self.count.saturating_sub(n))
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LogBufferIter<'_> {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeMode};

    #[test]
    fn test_empty_buffer() {
        let buffer = LogBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.iter().count(), 0);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut buffer = LogBuffer::new();
        buffer.record(LogLevel::Info, "first", 1);
        buffer.record(LogLevel::Warn, "second", 2);

        let messages: Vec<&str> = buffer.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_wraps_and_drops_oldest() {
        let mut buffer = LogBuffer::new();
        for i in 0..(LOG_ENTRIES as u32 + 5) {
            buffer.record(LogLevel::Debug, "x", i);
        }
        assert_eq!(buffer.len(), LOG_ENTRIES);
        assert_eq!(buffer.written(), LOG_ENTRIES as u32 + 5);

        let stamps: Vec<u32> = buffer.iter().map(|e| e.timestamp_ms).collect();
        assert_eq!(stamps.first(), Some(&5));
        assert_eq!(stamps.last(), Some(&(LOG_ENTRIES as u32 + 4)));
    }

    #[test]
    fn test_latest_returns_tail() {
        let mut buffer = LogBuffer::new();
        for i in 0..10 {
            buffer.record(LogLevel::Info, "x", i);
        }
        let stamps: Vec<u32> = buffer.latest(3).map(|e| e.timestamp_ms).collect();
        assert_eq!(stamps, [7, 8, 9]);
        assert_eq!(buffer.latest(100).count(), 10);
    }

    #[test]
    fn test_message_truncated() {
        let long = "a".repeat(LOG_MSG_LEN + 10);
        let entry = LogEntry::new(LogLevel::Error, &long, 0);
        assert_eq!(entry.message.len(), LOG_MSG_LEN);
    }

    #[test]
    fn test_multibyte_truncation_keeps_char_boundary() {
        let long = "°".repeat(LOG_MSG_LEN);
        let entry = LogEntry::new(LogLevel::Info, &long, 0);
        assert!(entry.message.chars().all(|c| c == '°'));
        assert!(entry.message.len() <= LOG_MSG_LEN);
    }

    #[test]
    fn test_display_timestamp_wraps() {
        let entry = LogEntry::new(LogLevel::Info, "x", 123_456);
        assert_eq!(entry.display_timestamp(), 23_456);
    }

    #[test]
    fn test_level_prefix_and_color() {
        let theme = Theme::resolve(ThemeMode::Light);
        assert_eq!(LogLevel::Warn.prefix(), 'W');
        assert_eq!(LogLevel::Error.color(&theme), theme.danger);
        assert_eq!(LogLevel::Trace.color(&theme), theme.sub_text);
        assert!(LogLevel::Error > LogLevel::Info);
    }
}
