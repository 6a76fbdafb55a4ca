//! Application state and frame logic.
//!
//! [`App`] owns everything that changes while the dashboard runs: the
//! navigation shell, theme, mock speed, needle spring, location fetch and
//! the running screen transition. The entry point feeds it input
//! ([`App::apply`], [`App::click`]), advances it once per frame
//! ([`App::tick`]) and asks it to render ([`App::render`]).
//!
//! Time is passed in as milliseconds since startup so headless snapshots can
//! run on a simulated clock.
//!
//! # Controls
//!
//! | Key | Action | Where |
//! |-----|--------|-------|
//! | `L` / avatar click | Logout | Dashboard, Logs |
//! | `Enter` / button click | Sign in | Login |
//! | `Up` / `Down` | Mock speed ±5 | Dashboard |
//! | `T` | Toggle light/dark | Anywhere |
//! | `Y` | Dashboard ↔ Logs | Dashboard, Logs |

use std::sync::PoisonError;
use std::time::Duration;

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use fleet_common::animations::{NeedleSpring, ScreenTransition};
use fleet_common::config::SCREEN_WIDTH;
use fleet_common::gauge::GaugeConfig;
use fleet_common::location::LocationState;
use fleet_common::routes::Route;
use fleet_common::shell::{Host, Navigation, RootShell};
use fleet_common::theme::{Theme, ThemeMode};
use tracing::{debug, info, warn};

use crate::config::SPEED_STEP;
use crate::location::{LocationFetch, SimulatedLocation};
use crate::logging::LogSink;
use crate::render::{FrameKey, RenderState};
use crate::screens::dashboard::entrance_done;
use crate::screens::login::sign_in_contains;
use crate::screens::{DashboardView, draw_dashboard, draw_login, draw_logs_page};
use crate::widgets::avatar_contains;

/// User input, independent of the input device.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Logout,
    SignIn,
    SpeedUp,
    SpeedDown,
    ToggleTheme,
    ToggleLogs,
}

impl Action {
    /// Map an SDL key name (`Keycode::name()`) to an action.
    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "L" => Some(Self::Logout),
            "Return" | "Keypad Enter" => Some(Self::SignIn),
            "Up" => Some(Self::SpeedUp),
            "Down" => Some(Self::SpeedDown),
            "T" => Some(Self::ToggleTheme),
            "Y" => Some(Self::ToggleLogs),
            _ => None,
        }
    }
}

/// Startup choices.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub theme: ThemeMode,
    pub speed: f32,
    pub gauge: GaugeConfig,
}

pub struct App {
    shell: RootShell,
    theme_mode: ThemeMode,
    speed: f32,
    gauge: GaugeConfig,
    needle: NeedleSpring,
    provider: SimulatedLocation,
    location: LocationFetch,
    log: LogSink,
    /// When the dashboard was last mounted; drives the entrance animations.
    mounted_ms: u32,
    transition: Option<ScreenTransition>,
    render: RenderState,
}

impl App {
    /// Start on the dashboard and kick off the location fetch.
    pub fn new(
        settings: Settings,
        provider: SimulatedLocation,
        log: LogSink,
        now_ms: u32,
    ) -> Self {
        let mut app = Self {
            shell: RootShell::new(),
            theme_mode: settings.theme,
            speed: settings.speed,
            gauge: settings.gauge,
            needle: NeedleSpring::at_rest(settings.gauge.start_angle),
            provider,
            location: LocationFetch::settled(LocationState::Pending),
            log,
            mounted_ms: now_ms,
            transition: None,
            render: RenderState::new(),
        };
        app.mount_dashboard(now_ms);
        app
    }

    #[inline]
    pub fn route(&self) -> Route {
        self.shell.route()
    }

    #[inline]
    pub const fn needle_angle(&self) -> f32 {
        self.needle.angle()
    }

    #[inline]
    pub const fn location(&self) -> LocationState {
        self.location.state()
    }

    #[inline]
    pub const fn render_state(&self) -> &RenderState {
        &self.render
    }

    /// Angle the needle is moving toward.
    #[inline]
    pub fn target_angle(&self) -> f32 {
        self.gauge.needle_angle(self.speed)
    }

    /// Tell the host the app is up. Only the first call has an effect.
    pub fn notify_ready<H>(
        &mut self,
        host: &mut H,
    ) -> bool
    where
        H: Host + ?Sized,
    {
        self.shell.on_ready(host)
    }

    /// Block until the location fetch answers or `timeout` passes.
    pub fn wait_for_location(
        &mut self,
        timeout: Duration,
    ) -> LocationState {
        self.location.wait(timeout)
    }

    pub fn apply(
        &mut self,
        action: Action,
        now_ms: u32,
    ) {
        let route = self.route();
        match action {
            Action::Logout if route != Route::Login => {
                let nav = self.shell.logout();
                info!("logged out");
                self.start_transition(nav, now_ms);
            }
            Action::SignIn if route == Route::Login => {
                let nav = self.shell.sign_in();
                info!("signed in");
                self.start_transition(nav, now_ms);
                self.mount_dashboard(now_ms);
            }
            Action::SpeedUp if route == Route::Dashboard => self.set_speed(self.speed + SPEED_STEP),
            Action::SpeedDown if route == Route::Dashboard => self.set_speed(self.speed - SPEED_STEP),
            Action::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggle();
                info!(theme = self.theme_mode.name(), "theme changed");
            }
            Action::ToggleLogs if route == Route::Dashboard => match self.shell.open_logs() {
                Ok(nav) => self.start_transition(nav, now_ms),
                Err(err) => warn!(%err, "cannot open logs"),
            },
            Action::ToggleLogs if route == Route::Logs => {
                if let Some(nav) = self.shell.back() {
                    self.start_transition(nav, now_ms);
                }
            }
            _ => debug!(?action, ?route, "action ignored"),
        }
    }

    /// Handle a click at `point` in screen coordinates.
    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    pub fn click(
        &mut self,
        point: Point,
        now_ms: u32,
    ) {
        match self.route() {
            Route::Dashboard if avatar_contains(point) => self.apply(Action::Logout, now_ms),
            Route::Login if sign_in_contains(point) => self.apply(Action::SignIn, now_ms),
            _ => {}
        }
    }

    /// Advance animations and pick up the location answer.
    pub fn tick(
        &mut self,
        now_ms: u32,
        dt_s: f32,
    ) {
        self.location.poll();
        let target = self.target_angle();
        self.needle.step(target, dt_s);

        if self.transition.is_some_and(|t| t.is_done(now_ms)) {
            self.transition = None;
        }
    }

    /// Whether the next frame can differ from the last one on its own.
    pub fn is_animating(
        &self,
        now_ms: u32,
    ) -> bool {
        self.transition.is_some()
            || !self.needle.is_at_rest(self.target_angle())
            || (self.route() == Route::Dashboard && !entrance_done(now_ms.saturating_sub(self.mounted_ms)))
    }

    pub fn frame_key(&self) -> FrameKey {
        FrameKey {
            route: self.route(),
            theme: self.theme_mode,
            needle_angle: self.needle.angle(),
            speed: self.speed,
            location: self.location.state(),
            log_written: self.log.lock().unwrap_or_else(PoisonError::into_inner).written(),
        }
    }

    /// Draw the frame if it changed. Returns whether anything was drawn.
    pub fn render<D>(
        &mut self,
        display: &mut D,
        now_ms: u32,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let key = self.frame_key();
        let animating = self.is_animating(now_ms);
        let dirty = self.render.needs_redraw(key, animating);
        if dirty {
            self.draw(display, now_ms);
        }
        self.render.end_frame();
        dirty
    }

    /// Clear and draw the current route, applying the running transition.
    pub fn draw<D>(
        &self,
        display: &mut D,
        now_ms: u32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut theme = Theme::resolve(self.theme_mode);
        display.clear(theme.background).ok();

        let mut offset_x = 0;
        if let Some(transition) = &self.transition {
            theme = theme.faded(transition.opacity(now_ms));
            offset_x = transition.offset_x(now_ms, SCREEN_WIDTH);
        }

        let mut target = display.translated(Point::new(offset_x, 0));
        match self.route() {
            Route::Login => draw_login(&mut target, &theme),
            Route::Dashboard => {
                let location = self.location.state();
                let view = DashboardView {
                    gauge: &self.gauge,
                    needle_angle: self.needle.angle(),
                    speed: self.speed,
                    location: &location,
                };
                draw_dashboard(&mut target, &theme, &view, now_ms.saturating_sub(self.mounted_ms));
            }
            Route::Logs => {
                let buffer = self.log.lock().unwrap_or_else(PoisonError::into_inner);
                draw_logs_page(&mut target, &theme, &buffer);
            }
        }
    }

    fn set_speed(
        &mut self,
        speed: f32,
    ) {
        self.speed = speed.max(0.0);
        if self.speed > self.gauge.max_reading {
            warn!(speed = self.speed, max = self.gauge.max_reading, "speed beyond gauge range");
        } else {
            debug!(speed = self.speed, "speed changed");
        }
    }

    fn start_transition(
        &mut self,
        nav: Navigation,
        now_ms: u32,
    ) {
        debug!(from = nav.from.path(), to = nav.to.path(), "navigate");
        self.transition = Some(ScreenTransition::new(nav.transition, now_ms));
    }

    fn mount_dashboard(
        &mut self,
        now_ms: u32,
    ) {
        self.mounted_ms = now_ms;
        self.needle = NeedleSpring::at_rest(self.gauge.start_angle);
        self.location = LocationFetch::spawn(self.provider);
        info!(speed = self.speed, "dashboard mounted");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
