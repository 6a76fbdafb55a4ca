//! Render state tracking for skipping identical frames.
//!
//! The window loop runs at a fixed rate, but once the entrance animations
//! have finished and the needle has settled, most frames are identical to
//! the previous one. Every frame the app builds a [`FrameKey`] describing
//! what it is about to show; the frame is only redrawn when the key changes
//! or something is still animating.
//!
//! # Update Strategy
//!
//! | Situation | Strategy |
//! |-----------|----------|
//! | First frame | Full clear and redraw |
//! | Animation running (entrance, transition, needle spring) | Redraw every frame |
//! | Key changed (route, theme, speed, location, logs) | Full clear and redraw |
//! | Key unchanged, nothing animating | Skip |
//!
//! Screens always draw onto a display freshly cleared to the theme
//! background, so a redraw is always a full one.

use fleet_common::location::LocationState;
use fleet_common::routes::Route;
use fleet_common::theme::ThemeMode;

/// Everything that determines the pixels of a settled frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameKey {
    pub route: Route,
    pub theme: ThemeMode,
    /// Displayed needle angle, degrees.
    pub needle_angle: f32,
    pub speed: f32,
    pub location: LocationState,
    /// [`LogBuffer::written`](fleet_common::log::LogBuffer::written) counter.
    pub log_written: u32,
}

/// Tracks the last drawn frame.
#[derive(Debug)]
pub struct RenderState {
    prev: Option<FrameKey>,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Frames drawn since startup.
    drawn: u32,

    /// Frames skipped since startup.
    skipped: u32,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            prev: None,
            first_frame: true,
            drawn: 0,
            skipped: 0,
        }
    }

    /// Decide whether the frame described by `key` must be drawn.
    ///
    /// Records `key` as the last drawn frame when it returns `true`.
    pub fn needs_redraw(
        &mut self,
        key: FrameKey,
        animating: bool,
    ) -> bool {
        let dirty = self.first_frame || animating || self.prev != Some(key);
        if dirty {
            self.prev = Some(key);
            self.drawn = self.drawn.wrapping_add(1);
        } else {
            self.skipped = self.skipped.wrapping_add(1);
        }
        dirty
    }

    #[inline]
    pub const fn drawn(&self) -> u32 {
        self.drawn
    }

    #[inline]
    pub const fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Reset per-frame state.
    #[inline]
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> FrameKey {
        FrameKey {
            route: Route::Dashboard,
            theme: ThemeMode::Light,
            needle_angle: -7.5,
            speed: 75.0,
            location: LocationState::Pending,
            log_written: 3,
        }
    }

    #[test]
    fn test_first_frame_draws() {
        let mut state = RenderState::new();
        assert!(state.first_frame);
        assert!(state.needs_redraw(key(), false));
        state.end_frame();
        assert!(!state.first_frame);
    }

    #[test]
    fn test_unchanged_frame_skipped() {
        let mut state = RenderState::new();
        state.needs_redraw(key(), false);
        state.end_frame();

        assert!(!state.needs_redraw(key(), false));
        assert!(!state.needs_redraw(key(), false));
        assert_eq!(state.drawn(), 1);
        assert_eq!(state.skipped(), 2);
    }

    #[test]
    fn test_animating_always_draws() {
        let mut state = RenderState::new();
        state.needs_redraw(key(), false);
        state.end_frame();
        assert!(state.needs_redraw(key(), true));
    }

    #[test]
    fn test_key_change_draws() {
        let mut state = RenderState::new();
        state.needs_redraw(key(), false);
        state.end_frame();

        let themed = FrameKey {
            theme: ThemeMode::Dark,
            ..key()
        };
        assert!(state.needs_redraw(themed, false));
        assert!(!state.needs_redraw(themed, false));

        let logged = FrameKey {
            log_written: 4,
            ..themed
        };
        assert!(state.needs_redraw(logged, false));
    }
}
