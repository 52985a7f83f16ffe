//! Rendering components for the terminal player.
//!
//! Replay summary, pose readouts, progress bar, status bar and the help
//! overlay.

mod help;
mod progress;
mod status;

pub use help::{help_lines, render_help, HELP_BOX_WIDTH};
pub use progress::{build_progress_bar_chars, format_duration, render_progress_bar};
pub use status::{
    count_digits, format_pose_line, format_replay_line, format_world_line, render_separator_line,
    render_status_bar, render_text_line,
};
