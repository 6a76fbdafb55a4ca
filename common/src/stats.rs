//! Static stat cards shown under the speedometer.

use embedded_graphics::pixelcolor::Rgb565;

use crate::config::STAT_CARD_COUNT;
use crate::theme::Theme;

/// Icon drawn in a stat card header.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatIcon {
    BatteryCharging,
    Thermometer,
    Time,
}

/// Semantic color of a stat card icon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Success,
    Warning,
    Accent,
}

impl Tone {
    pub const fn color(
        self,
        theme: &Theme,
    ) -> Rgb565 {
        match self {
            Self::Success => theme.success,
            Self::Warning => theme.warning,
            Self::Accent => theme.accent,
        }
    }
}

/// One card in the stats row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatCard {
    pub icon: StatIcon,
    pub title: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

/// Battery, temperature and drive time, left to right.
pub const DASHBOARD_STATS: [StatCard; STAT_CARD_COUNT] = [
    StatCard {
        icon: StatIcon::BatteryCharging,
        title: "Battery",
        value: "80%",
        tone: Tone::Success,
    },
    StatCard {
        icon: StatIcon::Thermometer,
        title: "Temperature",
        value: "72°F",
        tone: Tone::Warning,
    },
    StatCard {
        icon: StatIcon::Time,
        title: "Drive Time",
        value: "2.5h",
        tone: Tone::Accent,
    },
];

/// Cards for the dashboard stats row, left to right.
#[inline]
pub const fn dashboard_stats() -> &'static [StatCard; STAT_CARD_COUNT] {
    &DASHBOARD_STATS
}
