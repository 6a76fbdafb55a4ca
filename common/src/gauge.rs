//! Speedometer gauge geometry.
//!
//! Pure functions that turn a speed reading into drawable primitives for a
//! fixed-size circular gauge:
//!
//! - [`GaugeConfig::arc_path`]: endpoints, radius and flags of the background arc
//! - [`GaugeConfig::needle`]: rotation of the needle about the gauge center
//!
//! # Coordinate System
//!
//! Screen coordinates: origin top-left, y grows downward. Arc angles are
//! measured from the positive x-axis and grow clockwise, so `-90°` is straight
//! up. The needle is a vertical stroke from the center pointing up, rotated by
//! [`NeedleRotation::angle`] degrees (positive = clockwise), matching the SVG
//! `rotate(a cx cy)` transform.
//!
//! ```text
//!            -90°
//!        .-~~~~~~~-.
//!  -120° /         \
//!       |     +     |  0°
//!  +120° \         /
//!        '-.......-'
//!            +90°
//! ```
//!
//! # Output Formats
//!
//! Both results are plain structs for pixel renderers and can be rendered
//! to SVG strings (`heapless::String`, no allocation):
//!
//! - Arc: `M sx sy A r r 0 large sweep ex ey`
//! - Needle: `rotate(angle cx cy)`
//!
//! Numbers are written with two decimals.

use core::fmt::Write;

use heapless::String;
use thiserror::Error;

use crate::config::{
    GAUGE_END_ANGLE,
    GAUGE_RADIUS_FRACTION,
    GAUGE_START_ANGLE,
    MAX_SPEED,
    NEEDLE_LENGTH_FRACTION,
    SPEEDOMETER_SIZE,
};

/// Capacity of an SVG arc path string.
pub const PATH_CAPACITY: usize = 96;

/// Capacity of an SVG rotate transform string.
pub const TRANSFORM_CAPACITY: usize = 48;

/// Angular span above which SVG needs the large-arc flag.
const HALF_TURN_DEG: f32 = 180.0;

/// SVG string did not fit its fixed-capacity buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("svg output exceeds {capacity} bytes")]
pub struct SvgError {
    pub capacity: usize,
}

/// A point with sub-pixel precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }
}

/// What to do with readings outside `[0, max_reading]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Pin the reading to the gauge range so the needle never leaves the arc.
    #[default]
    Clamp,
    /// Map the reading linearly even past the ends of the arc.
    Overshoot,
}

/// Background arc of the gauge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    pub start: PointF,
    pub end: PointF,
    pub radius: f32,
    /// Set when the swept angle exceeds 180 degrees.
    pub large_arc: bool,
    /// Always clockwise (positive angle direction).
    pub sweep: bool,
}

impl ArcPath {
    /// Render as an SVG path `d` attribute.
    pub fn to_svg(&self) -> Result<String<PATH_CAPACITY>, SvgError> {
        let mut d: String<PATH_CAPACITY> = String::new();
        write!(
            d,
            "M {:.2} {:.2} A {:.2} {:.2} 0 {} {} {:.2} {:.2}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.end.x,
            self.end.y,
        )
        .map_err(|_| SvgError {
            capacity: PATH_CAPACITY,
        })?;
        Ok(d)
    }
}

/// Needle rotation about the gauge center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeedleRotation {
    /// Degrees, clockwise-positive. 0 points straight up.
    pub angle: f32,
    pub pivot: PointF,
}

impl NeedleRotation {
    /// Render as an SVG `transform` attribute.
    pub fn to_svg_transform(&self) -> Result<String<TRANSFORM_CAPACITY>, SvgError> {
        let mut t: String<TRANSFORM_CAPACITY> = String::new();
        write!(
            t,
            "rotate({:.2} {:.2} {:.2})",
            self.angle,
            self.pivot.x,
            self.pivot.y,
        )
        .map_err(|_| SvgError {
            capacity: TRANSFORM_CAPACITY,
        })?;
        Ok(t)
    }
}

/// Fixed gauge configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeConfig {
    /// Widget diameter `D` in pixels.
    pub size: f32,
    /// Arc radius as a fraction of `size`.
    pub radius_fraction: f32,
    /// Needle length as a fraction of `size`.
    pub needle_length_fraction: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub max_reading: f32,
    pub policy: RangePolicy,
}

impl GaugeConfig {
    /// 200px gauge, 240 degree sweep, 0..160 range, clamped.
    pub const DEFAULT: Self = Self {
        size: SPEEDOMETER_SIZE as f32,
        radius_fraction: GAUGE_RADIUS_FRACTION,
        needle_length_fraction: NEEDLE_LENGTH_FRACTION,
        start_angle: GAUGE_START_ANGLE,
        end_angle: GAUGE_END_ANGLE,
        max_reading: MAX_SPEED,
        policy: RangePolicy::Clamp,
    };

    /// Default geometry for a gauge of diameter `size`.
    pub const fn with_size(size: f32) -> Self {
        Self { size, ..Self::DEFAULT }
    }

    #[must_use]
    pub const fn with_policy(
        self,
        policy: RangePolicy,
    ) -> Self {
        Self { policy, ..self }
    }

    #[must_use]
    pub const fn with_max_reading(
        self,
        max_reading: f32,
    ) -> Self {
        Self { max_reading, ..self }
    }

    #[inline]
    pub fn center(&self) -> PointF {
        PointF::new(self.size / 2.0, self.size / 2.0)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * self.radius_fraction
    }

    #[inline]
    pub fn needle_length(&self) -> f32 {
        self.size * self.needle_length_fraction
    }

    /// Angular span of the arc in degrees.
    #[inline]
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Point on the arc circle at `angle_deg`.
    pub fn point_at(
        &self,
        angle_deg: f32,
    ) -> PointF {
        let center = self.center();
        let radius = self.radius();
        let theta = angle_deg.to_radians();
        PointF::new(
            center.x + radius * libm::cosf(theta),
            center.y + radius * libm::sinf(theta),
        )
    }

    /// Background arc from `start_angle` to `end_angle`.
    pub fn arc_path(&self) -> ArcPath {
        ArcPath {
            start: self.point_at(self.start_angle),
            end: self.point_at(self.end_angle),
            radius: self.radius(),
            large_arc: is_large_arc(self.span()),
            sweep: true,
        }
    }

    /// Needle angle in degrees for `reading`, honoring the range policy.
    ///
    /// A NaN reading counts as 0. Infinite readings are pinned to the range
    /// under either policy, so the result is always finite.
    pub fn needle_angle(
        &self,
        reading: f32,
    ) -> f32 {
        let reading = if reading.is_nan() { 0.0 } else { reading };
        let reading = match self.policy {
            RangePolicy::Overshoot if reading.is_finite() => reading,
            RangePolicy::Clamp | RangePolicy::Overshoot => reading.clamp(0.0, self.max_reading),
        };
        reading_to_angle(reading, self.max_reading, self.start_angle, self.end_angle)
    }

    pub fn needle(
        &self,
        reading: f32,
    ) -> NeedleRotation {
        NeedleRotation {
            angle: self.needle_angle(reading),
            pivot: self.center(),
        }
    }

    /// End point of the needle after applying `rotation`.
    pub fn needle_tip(
        &self,
        rotation: &NeedleRotation,
    ) -> PointF {
        let length = self.needle_length();
        let theta = rotation.angle.to_radians();
        PointF::new(
            rotation.pivot.x + length * libm::sinf(theta),
            rotation.pivot.y - length * libm::cosf(theta),
        )
    }
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Linear map of `reading` in `[0, max_reading]` onto `[start, end]` degrees.
///
/// `max_reading` must be positive. No clamping.
#[inline]
pub fn reading_to_angle(
    reading: f32,
    max_reading: f32,
    start: f32,
    end: f32,
) -> f32 {
    start + (reading / max_reading) * (end - start)
}

/// SVG large-arc flag for a sweep of `span_deg` degrees.
#[inline]
pub fn is_large_arc(span_deg: f32) -> bool {
    libm::fabsf(span_deg) > HALF_TURN_DEG
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.01;

    fn approx(
        a: f32,
        b: f32,
    ) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_needle_angle_at_zero() {
        assert_eq!(GaugeConfig::DEFAULT.needle_angle(0.0), -120.0);
    }

    #[test]
    fn test_needle_angle_at_max() {
        assert_eq!(GaugeConfig::DEFAULT.needle_angle(160.0), 120.0);
    }

    #[test]
    fn test_needle_angle_at_half() {
        assert_eq!(GaugeConfig::DEFAULT.needle_angle(80.0), 0.0);
    }

    #[test]
    fn test_needle_angle_mock_speed() {
        assert_eq!(GaugeConfig::DEFAULT.needle_angle(75.0), -7.5);
    }

    #[test]
    fn test_needle_angle_monotonic() {
        let gauge = GaugeConfig::DEFAULT;
        let mut prev = gauge.needle_angle(0.0);
        for i in 1..=160 {
            let angle = gauge.needle_angle(i as f32);
            assert!(angle > prev, "angle must increase at speed {i}");
            prev = angle;
        }
    }

    #[test]
    fn test_clamp_policy_pins_out_of_range() {
        let gauge = GaugeConfig::DEFAULT;
        assert_eq!(gauge.needle_angle(-20.0), -120.0);
        assert_eq!(gauge.needle_angle(200.0), 120.0);
    }

    #[test]
    fn test_overshoot_policy_extends_past_arc() {
        let gauge = GaugeConfig::DEFAULT.with_policy(RangePolicy::Overshoot);
        assert_eq!(gauge.needle_angle(-20.0), -150.0);
        assert_eq!(gauge.needle_angle(200.0), 180.0);
        // In-range readings are unaffected by the policy
        assert_eq!(gauge.needle_angle(75.0), -7.5);
    }

    #[test]
    fn test_nan_reading_reads_as_zero() {
        let gauge = GaugeConfig::DEFAULT;
        assert_eq!(gauge.needle_angle(f32::NAN), -120.0);
        assert_eq!(gauge.with_policy(RangePolicy::Overshoot).needle_angle(f32::NAN), -120.0);
    }

    #[test]
    fn test_infinite_reading_pinned_under_both_policies() {
        for policy in [RangePolicy::Clamp, RangePolicy::Overshoot] {
            let gauge = GaugeConfig::DEFAULT.with_policy(policy);
            assert_eq!(gauge.needle_angle(f32::INFINITY), 120.0);
            assert_eq!(gauge.needle_angle(f32::NEG_INFINITY), -120.0);

            let tip = gauge.needle_tip(&gauge.needle(f32::INFINITY));
            assert!(tip.x.is_finite() && tip.y.is_finite());
        }
    }

    #[test]
    fn test_default_policy_is_clamp() {
        assert_eq!(RangePolicy::default(), RangePolicy::Clamp);
        assert_eq!(GaugeConfig::default().policy, RangePolicy::Clamp);
    }

    #[test]
    fn test_custom_max_reading() {
        let gauge = GaugeConfig::DEFAULT.with_max_reading(240.0);
        assert_eq!(gauge.needle_angle(120.0), 0.0);
        assert_eq!(gauge.needle_angle(240.0), 120.0);
    }

    #[test]
    fn test_center_and_radius() {
        let gauge = GaugeConfig::with_size(200.0);
        assert_eq!(gauge.center(), PointF::new(100.0, 100.0));
        assert!(approx(gauge.radius(), 80.0));
    }

    #[test]
    fn test_arc_endpoints_200px() {
        let arc = GaugeConfig::with_size(200.0).arc_path();
        assert!(approx(arc.start.x, 60.0), "start.x = {}", arc.start.x);
        assert!(approx(arc.start.y, 30.72), "start.y = {}", arc.start.y);
        assert!(approx(arc.end.x, 60.0), "end.x = {}", arc.end.x);
        assert!(approx(arc.end.y, 169.28), "end.y = {}", arc.end.y);
    }

    #[test]
    fn test_arc_endpoints_deterministic() {
        let gauge = GaugeConfig::with_size(200.0);
        let a = gauge.arc_path();
        let b = gauge.arc_path();
        assert_eq!(a.start.x.to_bits(), b.start.x.to_bits());
        assert_eq!(a.start.y.to_bits(), b.start.y.to_bits());
        assert_eq!(a.end.x.to_bits(), b.end.x.to_bits());
        assert_eq!(a.end.y.to_bits(), b.end.y.to_bits());
    }

    #[test]
    fn test_large_arc_flag_for_240_sweep() {
        let arc = GaugeConfig::DEFAULT.arc_path();
        assert!(arc.large_arc);
        assert!(arc.sweep);
    }

    #[test]
    fn test_large_arc_flag_small_spans() {
        assert!(!is_large_arc(90.0));
        assert!(!is_large_arc(180.0));
        assert!(is_large_arc(180.5));
        assert!(is_large_arc(-240.0));

        let gauge = GaugeConfig {
            start_angle: -60.0,
            end_angle: 60.0,
            ..GaugeConfig::DEFAULT
        };
        assert!(!gauge.arc_path().large_arc);
    }

    #[test]
    fn test_arc_svg_path() {
        let d = GaugeConfig::with_size(200.0).arc_path().to_svg().unwrap();
        assert_eq!(d.as_str(), "M 60.00 30.72 A 80.00 80.00 0 1 1 60.00 169.28");
    }

    #[test]
    fn test_needle_svg_transform() {
        let t = GaugeConfig::DEFAULT.needle(75.0).to_svg_transform().unwrap();
        assert_eq!(t.as_str(), "rotate(-7.50 100.00 100.00)");
    }

    #[test]
    fn test_needle_tip_straight_up_at_half_range() {
        let gauge = GaugeConfig::DEFAULT;
        let tip = gauge.needle_tip(&gauge.needle(80.0));
        assert!(approx(tip.x, 100.0));
        assert!(approx(tip.y, 20.0));
    }

    #[test]
    fn test_needle_tip_rotates_clockwise() {
        let gauge = GaugeConfig::DEFAULT.with_policy(RangePolicy::Overshoot);
        // 90 degrees clockwise from up points right
        let rotation = NeedleRotation {
            angle: 90.0,
            pivot: gauge.center(),
        };
        let tip = gauge.needle_tip(&rotation);
        assert!(approx(tip.x, 180.0));
        assert!(approx(tip.y, 100.0));
    }

    #[test]
    fn test_needle_tip_keeps_length() {
        let gauge = GaugeConfig::DEFAULT;
        for speed in [0.0, 40.0, 75.0, 120.0, 160.0] {
            let rotation = gauge.needle(speed);
            let tip = gauge.needle_tip(&rotation);
            let dx = tip.x - rotation.pivot.x;
            let dy = tip.y - rotation.pivot.y;
            assert!(approx(libm::sqrtf(dx * dx + dy * dy), 80.0));
        }
    }
}
