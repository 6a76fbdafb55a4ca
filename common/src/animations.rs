//! Animation effects for the dashboard.
//!
//! - **Entrance**: sections fade in while sliding down into place, staggered
//!   by a per-section delay ([`FadeInDown`])
//! - **Needle spring**: the drawn needle angle chases the target angle with a
//!   damped spring instead of jumping ([`NeedleSpring`])
//! - **Screen transitions**: fade or slide-from-right progress when the route
//!   changes ([`ScreenTransition`])
//!
//! # Opacity Without Alpha
//!
//! `Rgb565` has no alpha channel. A fading element is drawn with its color
//! blended from the background toward the final color ([`blend_rgb565`]),
//! which looks the same on an opaque background.
//!
//! All timing is in milliseconds since an arbitrary start so the same code
//! runs against `std::time::Instant` on the host and a frame counter in tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;

use crate::routes::Transition;

// =============================================================================
// Entrance Constants
// =============================================================================

/// Entrance animation length.
pub const ENTRANCE_DURATION_MS: u32 = 300;

/// Distance a section travels while entering.
pub const ENTRANCE_OFFSET_PX: i32 = 24;

/// Map card entrance.
pub const MAP_ENTRANCE: FadeInDown = FadeInDown::new(200);

/// Speedometer card entrance.
pub const SPEEDOMETER_ENTRANCE: FadeInDown = FadeInDown::new(300);

/// Stats row entrance.
pub const STATS_ENTRANCE: FadeInDown = FadeInDown::new(400);

/// Screen transition length.
pub const TRANSITION_DURATION_MS: u32 = 250;

// =============================================================================
// Spring Constants
// =============================================================================

const SPRING_STIFFNESS: f32 = 100.0;
const SPRING_DAMPING: f32 = 10.0;
const SPRING_MASS: f32 = 1.0;

/// Angle/velocity below which the spring snaps to rest.
const SPRING_REST_THRESHOLD: f32 = 0.01;

// =============================================================================
// Easing
// =============================================================================

/// Cubic ease-out on `t` in `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

// =============================================================================
// FadeInDown
// =============================================================================

/// Delayed fade + slide-down entrance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FadeInDown {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub offset_px: i32,
}

impl FadeInDown {
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            duration_ms: ENTRANCE_DURATION_MS,
            offset_px: ENTRANCE_OFFSET_PX,
        }
    }

    /// Eased progress in `[0, 1]` at `elapsed_ms` after mount.
    pub fn progress(
        &self,
        elapsed_ms: u32,
    ) -> f32 {
        if elapsed_ms <= self.delay_ms {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = (elapsed_ms - self.delay_ms) as f32 / self.duration_ms as f32;
        ease_out_cubic(t)
    }

    /// Vertical offset: `-offset_px` before start, 0 when done.
    pub fn offset_y(
        &self,
        elapsed_ms: u32,
    ) -> i32 {
        let remaining = 1.0 - self.progress(elapsed_ms);
        -libm::roundf(self.offset_px as f32 * remaining) as i32
    }

    /// Whether the section should be drawn at all.
    #[inline]
    pub fn is_visible(
        &self,
        elapsed_ms: u32,
    ) -> bool {
        elapsed_ms > self.delay_ms
    }

    #[inline]
    pub const fn is_done(
        &self,
        elapsed_ms: u32,
    ) -> bool {
        elapsed_ms >= self.delay_ms + self.duration_ms
    }
}

// =============================================================================
// Screen Transition
// =============================================================================

/// Progress of a route change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScreenTransition {
    pub kind: Transition,
    pub started_ms: u32,
}

impl ScreenTransition {
    pub const fn new(
        kind: Transition,
        started_ms: u32,
    ) -> Self {
        Self { kind, started_ms }
    }

    pub fn progress(
        &self,
        now_ms: u32,
    ) -> f32 {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        ease_out_cubic(elapsed as f32 / TRANSITION_DURATION_MS as f32)
    }

    #[inline]
    pub fn is_done(
        &self,
        now_ms: u32,
    ) -> bool {
        now_ms.saturating_sub(self.started_ms) >= TRANSITION_DURATION_MS
    }

    /// Horizontal offset of the incoming screen for a `width`-wide display.
    pub fn offset_x(
        &self,
        now_ms: u32,
        width: u32,
    ) -> i32 {
        match self.kind {
            Transition::Fade => 0,
            Transition::SlideFromRight => libm::roundf(width as f32 * (1.0 - self.progress(now_ms))) as i32,
        }
    }

    /// Opacity of the incoming screen (1.0 for slides).
    pub fn opacity(
        &self,
        now_ms: u32,
    ) -> f32 {
        match self.kind {
            Transition::Fade => self.progress(now_ms),
            Transition::SlideFromRight => 1.0,
        }
    }
}

// =============================================================================
// Needle Spring
// =============================================================================

/// Damped spring driving the displayed needle angle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NeedleSpring {
    angle: f32,
    velocity: f32,
}

impl NeedleSpring {
    /// Spring at rest on `angle`.
    pub const fn at_rest(angle: f32) -> Self {
        Self { angle, velocity: 0.0 }
    }

    #[inline]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn is_at_rest(
        &self,
        target: f32,
    ) -> bool {
        self.velocity == 0.0 && self.angle == target
    }

    /// Advance by `dt_s` seconds toward `target`. Returns the new angle.
    pub fn step(
        &mut self,
        target: f32,
        dt_s: f32,
    ) -> f32 {
        let displacement = self.angle - target;
        let force = -SPRING_STIFFNESS * displacement - SPRING_DAMPING * self.velocity;
        self.velocity += force / SPRING_MASS * dt_s;
        self.angle += self.velocity * dt_s;

        if libm::fabsf(self.angle - target) < SPRING_REST_THRESHOLD
            && libm::fabsf(self.velocity) < SPRING_REST_THRESHOLD
        {
            self.angle = target;
            self.velocity = 0.0;
        }
        self.angle
    }
}

// =============================================================================
// Color Blending
// =============================================================================

/// Blend two Rgb565 colors: `t = 0` gives `from`, `t = 1` gives `to`.
///
/// Works on the raw 5-6-5 channels with 8-bit fixed-point weights.
pub fn blend_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;
    if t_fixed >= 256 {
        return to;
    }

    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let mix = |shift: u16, mask: u16| -> u8 {
        let a = i32::from((from_raw >> shift) & mask);
        let b = i32::from((to_raw >> shift) & mask);
        (a + (((b - a) * t_fixed) >> 8)) as u8
    };

    Rgb565::new(mix(11, 0x1F), mix(5, 0x3F), mix(0, 0x1F))
}

// =============================================================================
// Unit Tests
// =============================================================================
