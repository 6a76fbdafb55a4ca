//! Widget components for the dashboard screen.
//!
//! - [`header`]: greeting, title and avatar logout button
//! - [`map`]: map card with the location marker
//! - [`speedometer`]: gauge arc, needle and readout
//! - [`stats`]: row of three stat cards
//! - [`primitives`]: cards, icons and the marker pin
//!
//! Every draw function takes the resolved [`Theme`](fleet_common::theme::Theme)
//! as a parameter and is generic over `DrawTarget<Color = Rgb565>`, so the
//! same code renders into the simulator display, a translated sub-target
//! during entrance animations, or the in-memory display used by tests.

pub mod header;
pub mod map;
pub mod primitives;
pub mod speedometer;
pub mod stats;

pub use header::{avatar_contains, draw_header};
pub use map::draw_map;
pub use speedometer::draw_speedometer;
pub use stats::draw_stats;
