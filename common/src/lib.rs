//! Shared types, gauge geometry and navigation for the fleet dashboard.
//!
//! Everything here is platform-agnostic and allocation-free:
//!
//! - [`gauge`]: speedometer arc and needle geometry, SVG path strings
//! - [`theme`]: light/dark color palettes
//! - [`colors`]: RGB565 color constants
//! - [`config`]: screen layout and gauge constants
//! - [`routes`]: route table and bounded navigation stack
//! - [`shell`]: root shell with the one-shot readiness hook
//! - [`location`]: one-shot location fetch and map projection
//! - [`stats`]: stat card content
//! - [`animations`]: entrance fades, needle spring, screen transitions
//! - [`log`]: ring buffer behind the on-screen log viewer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. Timing is passed in as plain
//! milliseconds so nothing depends on `std::time`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod gauge;
pub mod location;
pub mod log;
pub mod routes;
pub mod shell;
pub mod stats;
pub mod theme;

// Re-export commonly used items
pub use config::*;
pub use gauge::{ArcPath, GaugeConfig, NeedleRotation, PointF, RangePolicy};
pub use location::{Coordinate, LocationProvider, LocationState, MapRegion};
pub use log::{LogBuffer, LogEntry, LogLevel};
pub use routes::{Route, Transition};
pub use shell::{Host, RootShell};
pub use theme::{Theme, ThemeMode};
