//! Command-line options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fleet_common::config::{MAX_SPEED, MOCK_SPEED};
use fleet_common::gauge::{GaugeConfig, RangePolicy};
use fleet_common::location::Coordinate;
use fleet_common::theme::ThemeMode;

use crate::config::{DEFAULT_POSITION, DEFAULT_SCALE, LOCATION_LATENCY};
use crate::location::SimulatedLocation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeArg {
    #[default]
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyArg {
    /// Pin out-of-range speeds to the ends of the arc
    #[default]
    Clamp,
    /// Let the needle swing past the ends of the arc
    Overshoot,
}

impl From<PolicyArg> for RangePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Clamp => Self::Clamp,
            PolicyArg::Overshoot => Self::Overshoot,
        }
    }
}

/// Fleet management dashboard: speedometer, map and vehicle stats.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Color scheme
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    pub theme: ThemeArg,

    /// Mock vehicle speed in MPH
    #[arg(long, default_value_t = MOCK_SPEED, allow_negative_numbers = true, value_parser = parse_speed)]
    pub speed: f32,

    /// Top of the speedometer scale
    #[arg(long, default_value_t = MAX_SPEED, value_parser = parse_max_speed)]
    pub max_speed: f32,

    /// What the needle does with speeds outside 0..max-speed
    #[arg(long, value_enum, default_value_t = PolicyArg::Clamp)]
    pub range_policy: PolicyArg,

    /// Simulated latitude
    #[arg(long, default_value_t = DEFAULT_POSITION.latitude, allow_negative_numbers = true)]
    pub lat: f64,

    /// Simulated longitude
    #[arg(long, default_value_t = DEFAULT_POSITION.longitude, allow_negative_numbers = true)]
    pub lon: f64,

    /// Deny the location permission prompt
    #[arg(long)]
    pub deny_location: bool,

    /// Render the dashboard headless to this PNG file and exit
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Write the speedometer as an SVG document to this file and exit
    #[arg(long, value_name = "FILE")]
    pub svg: Option<PathBuf>,

    /// Pixel scale for the window and PNG snapshots
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn gauge(&self) -> GaugeConfig {
        GaugeConfig::DEFAULT
            .with_max_reading(self.max_speed)
            .with_policy(self.range_policy.into())
    }

    pub fn location(&self) -> SimulatedLocation {
        SimulatedLocation::new(Coordinate::new(self.lat, self.lon))
            .with_denied(self.deny_location)
            .with_latency(LOCATION_LATENCY)
    }
}

fn parse_speed(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|err| format!("{err}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(String::from("must be a finite number"))
    }
}

fn parse_max_speed(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|err| format!("{err}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(String::from("must be a positive number"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["fleet-dashboard"]);
        assert_eq!(args.theme, ThemeArg::Light);
        assert_eq!(args.speed, 75.0);
        assert_eq!(args.gauge(), GaugeConfig::DEFAULT);
        assert!(!args.deny_location);
        assert!(args.snapshot.is_none());
        assert_eq!(args.location().coordinate, DEFAULT_POSITION);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "fleet-dashboard",
            "--theme",
            "dark",
            "--speed",
            "-10",
            "--max-speed",
            "200",
            "--range-policy",
            "overshoot",
            "--lon",
            "-0.1276",
            "--deny-location",
            "--svg",
            "gauge.svg",
        ]);
        assert_eq!(ThemeMode::from(args.theme), ThemeMode::Dark);
        assert_eq!(args.speed, -10.0);

        let gauge = args.gauge();
        assert_eq!(gauge.max_reading, 200.0);
        assert_eq!(gauge.policy, RangePolicy::Overshoot);

        let location = args.location();
        assert!(location.denied);
        assert_eq!(location.coordinate.longitude, -0.1276);
        assert_eq!(args.svg, Some(PathBuf::from("gauge.svg")));
    }

    #[test]
    fn test_rejects_non_positive_max_speed() {
        assert!(Args::try_parse_from(["fleet-dashboard", "--max-speed", "0"]).is_err());
        assert!(Args::try_parse_from(["fleet-dashboard", "--max-speed", "abc"]).is_err());
    }

    #[test]
    fn test_rejects_non_finite_speed() {
        for value in ["NaN", "inf", "-inf", "infinity"] {
            assert!(Args::try_parse_from(["fleet-dashboard", "--speed", value]).is_err(), "{value}");
        }
        let args = Args::parse_from(["fleet-dashboard", "--speed", "200"]);
        assert_eq!(args.gauge().needle_angle(args.speed), 120.0);
    }

    #[test]
    fn test_scale_range() {
        assert!(Args::try_parse_from(["fleet-dashboard", "--scale", "0"]).is_err());
        assert_eq!(Args::parse_from(["fleet-dashboard", "--scale", "2"]).scale, 2);
    }
}
