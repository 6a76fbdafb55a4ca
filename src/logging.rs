//! Tracing setup.
//!
//! Events go to two places:
//!
//! - stderr, through the usual `tracing_subscriber::fmt` layer
//! - the on-screen [`LogBuffer`], through [`ScreenLog`], so the log page can
//!   show what happened without a terminal
//!
//! The filter comes from `RUST_LOG` when set, otherwise `info` (or `debug`
//! with `-v`).

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::Context as _;
use fleet_common::log::{LogBuffer, LogLevel};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, registry};

/// Shared handle to the on-screen log.
pub type LogSink = Arc<Mutex<LogBuffer>>;

/// Create an empty sink.
pub fn new_sink() -> LogSink {
    Arc::new(Mutex::new(LogBuffer::new()))
}

/// Install the global subscriber and return the sink it writes to.
pub fn init(verbose: bool) -> anyhow::Result<LogSink> {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let sink = new_sink();
    registry()
        .with(filter)
        .with(tracing_fmt::layer().with_writer(std::io::stderr))
        .with(ScreenLog::new(Arc::clone(&sink)))
        .try_init()
        .context("tracing init failed")?;
    Ok(sink)
}

/// Layer copying events into a [`LogSink`].
///
/// Never blocks: an event that arrives while the buffer is locked (for
/// example, emitted while the log page is drawing) is dropped from the
/// screen copy only.
pub struct ScreenLog {
    sink: LogSink,
    started: Instant,
}

impl ScreenLog {
    pub fn new(sink: LogSink) -> Self {
        Self {
            sink,
            started: Instant::now(),
        }
    }
}

impl<S> Layer<S> for ScreenLog
where
    S: Subscriber,
{
    fn on_event(
        &self,
        event: &Event<'_>,
        _ctx: Context<'_, S>,
    ) {
        let mut line = LineVisitor::default();
        event.record(&mut line);

        let timestamp_ms = u32::try_from(self.started.elapsed().as_millis()).unwrap_or(u32::MAX);
        if let Ok(mut buffer) = self.sink.try_lock() {
            buffer.record(level_of(event.metadata().level()), &line.text, timestamp_ms);
        }
    }
}

fn level_of(level: &Level) -> LogLevel {
    match *level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}

/// Flattens an event into `message key=value ...`.
#[derive(Default)]
struct LineVisitor {
    text: String,
}

impl LineVisitor {
    fn separate(&mut self) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(
        &mut self,
        field: &Field,
        value: &str,
    ) {
        self.separate();
        if field.name() == "message" {
            self.text.push_str(value);
        } else {
            let _ = write!(self.text, "{}={value}", field.name());
        }
    }

    fn record_debug(
        &mut self,
        field: &Field,
        value: &dyn fmt::Debug,
    ) {
        self.separate();
        if field.name() == "message" {
            let _ = write!(self.text, "{value:?}");
        } else {
            let _ = write!(self.text, "{}={value:?}", field.name());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
