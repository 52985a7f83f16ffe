//! Terminal player state
//!
//! Holds what the interactive host needs on top of the [`ReplaySession`]:
//! speed multiplier, world mapping, overlay flags and terminal size.
//!
//! [`ReplaySession`]: crate::player::ReplaySession

use crate::config::PlaybackConfig;
use crate::player::AxisMapping;

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep playing/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Host-side state for the terminal player.
#[derive(Debug)]
pub struct PlayerState {
    /// Playback speed multiplier applied to wall-clock deltas
    pub speed: f64,
    /// Mapping used for the world-space readout
    pub axis: AxisMapping,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Rows used by the player UI (header, pose, world, separator, progress, status)
    pub const UI_LINES: u16 = 6;

    pub fn new(
        term_cols: u16,
        term_rows: u16,
        playback: &PlaybackConfig,
        axis: AxisMapping,
    ) -> Self {
        Self {
            speed: playback.clamped_speed(),
            axis,
            show_help: false,
            term_cols,
            term_rows,
            needs_render: true,
        }
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }

    /// Increase playback speed (max 16x).
    pub fn speed_up(&mut self) {
        self.speed = (self.speed * 1.5).min(PlaybackConfig::MAX_SPEED);
        self.needs_render = true;
    }

    /// Decrease playback speed (min 0.1x).
    pub fn speed_down(&mut self) {
        self.speed = (self.speed / 1.5).max(PlaybackConfig::MIN_SPEED);
        self.needs_render = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Switch between source and Y-up world readouts.
    pub fn toggle_axis(&mut self) {
        self.axis = match self.axis {
            AxisMapping::Source => AxisMapping::YUp,
            AxisMapping::YUp => AxisMapping::Source,
        };
        self.needs_render = true;
    }

    /// Wall-clock delta scaled by the current speed.
    pub fn scaled_delta(&self, wall_seconds: f64) -> f64 {
        wall_seconds * self.speed
    }
}
