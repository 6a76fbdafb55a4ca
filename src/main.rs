// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::float_cmp)] // Exact angles in tests come from exact inputs

//! Fleet management dashboard.
//!
//! Renders the fleet dashboard (header, map card with the current location,
//! speedometer, vehicle stats) with `embedded-graphics`, in one of three
//! modes:
//!
//! - `--svg FILE`: write the speedometer as an SVG document and exit
//! - `--snapshot FILE`: render the settled dashboard headless to PNG and exit
//! - otherwise: open an interactive window (needs the `window` feature)
//!
//! # Modules
//!
//! - [`app`]: navigation, input, animation and frame logic
//! - [`screens`] / [`widgets`]: drawing, one function per screen or card
//! - [`location`]: background one-shot location fetch
//! - [`render`]: skips frames identical to the previous one
//! - [`logging`]: tracing setup, mirrored into the on-screen log page
//! - [`svg`], [`snapshot`]: headless outputs
//!
//! Geometry, theme, navigation and the other platform-independent pieces
//! live in the `fleet-common` crate.

mod app;
mod cli;
mod config;
mod location;
mod logging;
mod render;
mod screens;
mod snapshot;
mod styles;
mod svg;
#[cfg(test)]
mod testing;
mod widgets;

use clap::Parser;
use fleet_common::shell::Host;
use tracing::info;

use app::{App, Settings};
use cli::Args;

/// The desktop process hosting the app.
struct DesktopHost;

impl Host for DesktopHost {
    fn framework_ready(&mut self) {
        info!("framework ready");
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log = logging::init(args.verbose)?;

    let settings = Settings {
        theme: args.theme.into(),
        speed: args.speed,
        gauge: args.gauge(),
    };
    info!(
        theme = settings.theme.name(),
        speed = settings.speed,
        max_speed = settings.gauge.max_reading,
        policy = ?settings.gauge.policy,
        "starting"
    );

    if let Some(path) = &args.svg {
        return svg::export(&settings.gauge, settings.speed, settings.theme, path, &mut DesktopHost);
    }

    let mut app = App::new(settings, args.location(), log, 0);

    if let Some(path) = &args.snapshot {
        let display = snapshot::capture(&mut app);
        // Headless: ready once the simulated frames are done, before the PNG is written
        app.notify_ready(&mut DesktopHost);
        return snapshot::save_png(&display, path, args.scale);
    }

    run_window(app, &args)
}

#[cfg(feature = "window")]
fn run_window(
    mut app: App,
    args: &Args,
) -> anyhow::Result<()> {
    use std::thread;
    use std::time::Instant;

    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;
    use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
    use fleet_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    use crate::app::Action;
    use crate::config::{FRAME_TIME, WINDOW_TITLE};

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let started = Instant::now();
    let now_ms = || u32::try_from(started.elapsed().as_millis()).unwrap_or(u32::MAX);

    // First frame opens the window; events can only be read after it
    app.render(&mut display, now_ms());
    window.update(&display);
    app.notify_ready(&mut DesktopHost);

    let mut last_frame = Instant::now();
    loop {
        let frame_start = Instant::now();
        let now = now_ms();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    let render = app.render_state();
                    info!(drawn = render.drawn(), skipped = render.skipped(), "window closed");
                    return Ok(());
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    if let Some(action) = Action::from_key_name(&keycode.name()) {
                        app.apply(action, now);
                    }
                }
                SimulatorEvent::MouseButtonDown { point, .. } => app.click(point, now),
                _ => {}
            }
        }

        app.tick(now, frame_start.duration_since(last_frame).as_secs_f32());
        last_frame = frame_start;

        app.render(&mut display, now);
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(not(feature = "window"))]
fn run_window(
    _app: App,
    _args: &Args,
) -> anyhow::Result<()> {
    anyhow::bail!("built without the `window` feature; use --snapshot <png> or --svg <file>, or rebuild with --features window")
}
