//! Light/dark theme resolution.
//!
//! The host decides the mode once (system setting, CLI flag, key toggle) and
//! passes the resolved [`Theme`] into every draw call. Widgets never query
//! the environment themselves.

use embedded_graphics::pixelcolor::Rgb565;

use crate::animations::blend_rgb565;
use crate::colors::{
    ACCENT,
    CARD_DARK,
    CARD_LIGHT,
    DANGER,
    INK,
    MAP_LAND_DARK,
    MAP_LAND_LIGHT,
    SUBTEXT_DARK,
    SUBTEXT_LIGHT,
    SUCCESS,
    TRACK_DARK,
    TRACK_LIGHT,
    WARNING,
    WHITE,
};

/// External appearance signal.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Flip between light and dark.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolved palette for one render pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Rgb565,
    pub text: Rgb565,
    pub sub_text: Rgb565,
    pub card: Rgb565,
    pub gauge_track: Rgb565,
    pub map_land: Rgb565,
    pub accent: Rgb565,
    pub success: Rgb565,
    pub warning: Rgb565,
    pub danger: Rgb565,
}

impl Theme {
    pub const LIGHT: Self = Self {
        mode: ThemeMode::Light,
        background: WHITE,
        text: INK,
        sub_text: SUBTEXT_LIGHT,
        card: CARD_LIGHT,
        gauge_track: TRACK_LIGHT,
        map_land: MAP_LAND_LIGHT,
        accent: ACCENT,
        success: SUCCESS,
        warning: WARNING,
        danger: DANGER,
    };

    pub const DARK: Self = Self {
        mode: ThemeMode::Dark,
        background: INK,
        text: WHITE,
        sub_text: SUBTEXT_DARK,
        card: CARD_DARK,
        gauge_track: TRACK_DARK,
        map_land: MAP_LAND_DARK,
        accent: ACCENT,
        success: SUCCESS,
        warning: WARNING,
        danger: DANGER,
    };

    /// Palette for `mode`.
    pub const fn resolve(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }

    /// Palette seen through an opacity of `t` over the background.
    ///
    /// `t = 0` collapses every role to the background color, `t = 1` returns
    /// the palette unchanged.
    pub fn faded(
        &self,
        t: f32,
    ) -> Self {
        if t >= 1.0 {
            return *self;
        }
        let bg = self.background;
        let fade = |color: Rgb565| blend_rgb565(bg, color, t);
        Self {
            mode: self.mode,
            background: bg,
            text: fade(self.text),
            sub_text: fade(self.sub_text),
            card: fade(self.card),
            gauge_track: fade(self.gauge_track),
            map_land: fade(self.map_land),
            accent: fade(self.accent),
            success: fade(self.success),
            warning: fade(self.warning),
            danger: fade(self.danger),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::resolve(ThemeMode::default())
    }
}
