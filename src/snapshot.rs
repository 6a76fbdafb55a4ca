//! Headless snapshots.
//!
//! Runs the app on a simulated clock (one frame per [`FRAME_MS`]) up to
//! [`SNAPSHOT_AT_MS`], so the entrance animations have played and the
//! needle has swept to its reading, rendering into a [`SimulatorDisplay`]
//! that is then written as PNG.

use std::path::Path;

use anyhow::Context as _;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use fleet_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tracing::{debug, info};

use crate::app::App;
use crate::config::{FRAME_MS, FRAME_TIME, SNAPSHOT_AT_MS, SNAPSHOT_LOCATION_WAIT};

/// Run `app` frame by frame up to the snapshot time.
pub fn capture(app: &mut App) -> SimulatorDisplay<Rgb565> {
    app.wait_for_location(SNAPSHOT_LOCATION_WAIT);

    let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let dt_s = FRAME_TIME.as_secs_f32();
    for frame in 0..=SNAPSHOT_AT_MS / FRAME_MS {
        let now_ms = frame * FRAME_MS;
        app.tick(now_ms, dt_s);
        app.render(&mut display, now_ms);
    }

    let render = app.render_state();
    debug!(
        drawn = render.drawn(),
        skipped = render.skipped(),
        location = ?app.location(),
        needle = app.needle_angle(),
        "snapshot frames"
    );
    display
}

/// Write `display` to `path` as PNG at `scale` pixels per display pixel.
pub fn save_png(
    display: &SimulatorDisplay<Rgb565>,
    path: &Path,
    scale: u32,
) -> anyhow::Result<()> {
    let settings = OutputSettingsBuilder::new().scale(scale).build();
    display
        .to_rgb_output_image(&settings)
        .save_png(path)
        .with_context(|| format!("writing snapshot to {}", path.display()))?;
    info!(path = %path.display(), scale, "snapshot saved");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Settings;
    use crate::location::SimulatedLocation;
    use crate::logging::new_sink;
    use crate::widgets::map::MAP_AREA;
    use fleet_common::gauge::GaugeConfig;
    use fleet_common::location::{Coordinate, LocationState};
    use fleet_common::theme::{Theme, ThemeMode};

    const DEPOT: Coordinate = Coordinate::new(37.7749, -122.4194);

    fn app(
        theme: ThemeMode,
        denied: bool,
    ) -> App {
        let settings = Settings {
            theme,
            speed: 75.0,
            gauge: GaugeConfig::DEFAULT,
        };
        let provider = SimulatedLocation::new(DEPOT).with_denied(denied);
        App::new(settings, provider, new_sink(), 0)
    }

    #[test]
    fn test_capture_settles_dashboard() {
        let mut app = app(ThemeMode::Dark, false);
        let display = capture(&mut app);

        assert_eq!(app.location(), LocationState::Resolved(DEPOT));
        assert!((app.needle_angle() - -7.5).abs() < 0.05);
        assert_eq!(display.get_pixel(Point::zero()), Theme::DARK.background);
        assert_eq!(display.get_pixel(MAP_AREA.center() + Point::new(0, 60)), Theme::DARK.map_land);
    }

    #[test]
    fn test_denied_location_leaves_map_empty() {
        let mut app = app(ThemeMode::Light, true);
        let display = capture(&mut app);

        assert_eq!(app.location(), LocationState::Denied);
        assert_eq!(display.get_pixel(MAP_AREA.center()), Theme::LIGHT.background);
    }

    #[test]
    fn test_save_png() {
        let mut app = app(ThemeMode::Light, false);
        let display = capture(&mut app);

        let path = std::env::temp_dir().join(format!("fleet-dashboard-{}.png", std::process::id()));
        save_png(&display, &path, 1).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
