//! Desktop application configuration.
//!
//! Screen layout and gauge constants live in `fleet_common::config`; this
//! module holds what only the desktop renderer needs: frame pacing, window
//! setup, input steps and the simulated location source.

use std::time::Duration;

use fleet_common::Coordinate;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frame time in milliseconds, for the simulated clock used by snapshots.
pub const FRAME_MS: u32 = FRAME_TIME.as_millis() as u32;

/// Simulated time at which headless snapshots are taken. Every entrance
/// animation has finished and the needle spring has settled by then.
pub const SNAPSHOT_AT_MS: u32 = 2_000;

/// How long a snapshot waits for the location thread before giving up.
pub const SNAPSHOT_LOCATION_WAIT: Duration = Duration::from_secs(1);

// =============================================================================
// Window Configuration
// =============================================================================

#[cfg_attr(not(feature = "window"), allow(dead_code))]
pub const WINDOW_TITLE: &str = "Fleet Dashboard";

/// Default pixel scale for the window and PNG snapshots.
pub const DEFAULT_SCALE: u32 = 1;

// =============================================================================
// Input Configuration
// =============================================================================

/// Mock speed change per Up/Down key press.
pub const SPEED_STEP: f32 = 5.0;

// =============================================================================
// Simulated Location
// =============================================================================

/// Position reported by the simulated provider unless overridden.
pub const DEFAULT_POSITION: Coordinate = Coordinate::new(37.7749, -122.4194);

/// Delay before the simulated provider answers, so the map visibly loads.
pub const LOCATION_LATENCY: Duration = Duration::from_millis(400);

const _: () = assert!(SNAPSHOT_AT_MS % FRAME_MS == 0, "snapshot time must land on a frame");
