//! Text lines for the terminal player: replay summary, pose readouts and
//! the status/controls bar.

use std::io::{self, Write};

use anyhow::Result;

use crate::player::{AxisMapping, PlaybackState, Pose, WorldPose};
use crate::replay::ReplayHeader;

/// Count digits in a number (for width calculation).
#[inline]
pub fn count_digits(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (n as f64).log10().floor() as usize + 1
    }
}

/// One-line summary of a replay header.
pub fn format_replay_line(header: &ReplayHeader, tick_rate: f64) -> String {
    format!(
        "{}  v{}  style {}  track {}  {} tick  {} frames",
        header.map_name, header.version, header.style, header.track, tick_rate, header.frame_count
    )
}

/// Recorded-space pose readout.
///
/// The frame index is padded to the width of `frame_count` so the line
/// does not jitter during playback.
pub fn format_pose_line(pose: Option<&Pose>, frame_count: usize) -> String {
    let Some(pose) = pose else {
        return "no frames".to_string();
    };
    let width = count_digits(frame_count);
    format!(
        "frame {:>width$} +{:.2}  pos ({:.2}, {:.2}, {:.2})  yaw {:.1}  pitch {:.1}",
        pose.frame_index,
        pose.t,
        pose.position.x,
        pose.position.y,
        pose.position.z,
        pose.yaw,
        pose.pitch,
        width = width
    )
}

/// World-space readout for the active axis mapping.
pub fn format_world_line(world: &WorldPose, axis: AxisMapping) -> String {
    format!(
        "{:<6} pos ({:.2}, {:.2}, {:.2})  rot ({:.3}, {:.3}, {:.3}) rad",
        axis.label(),
        world.position.x,
        world.position.y,
        world.position.z,
        world.rotation.x,
        world.rotation.y,
        world.rotation.z
    )
}

/// Render a plain text line, truncated or padded to the terminal width.
pub fn render_text_line(stdout: &mut io::Stdout, width: u16, row: u16, text: &str) -> Result<()> {
    let mut output = String::with_capacity(width as usize + 16);
    output.push_str(&format!("\x1b[{};1H\x1b[97m ", row + 1));
    let mut visible_len = 1;
    for c in text.chars().take((width as usize).saturating_sub(1)) {
        output.push(c);
        visible_len += 1;
    }
    for _ in visible_len..width as usize {
        output.push(' ');
    }
    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render a separator line.
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1));
    for _ in 0..width {
        output.push('─');
    }
    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    state: PlaybackState,
    speed: f64,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0;

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    visible_len += 1;

    // ▶ ⏸ ⏹ are double-width
    let icon = match state {
        PlaybackState::Playing => "▶  ",
        PlaybackState::Paused => "⏸  ",
        PlaybackState::Stopped => "⏹  ",
    };
    output.push_str(icon);
    visible_len += 4;

    output.push_str(DARK_GREY);
    output.push_str("spd:");
    visible_len += 4;
    output.push_str(WHITE);
    let speed_str = format!("{:.1}x ", speed);
    visible_len += speed_str.len();
    output.push_str(&speed_str);

    output.push_str(DARK_GREY);
    output.push_str("│ ");
    visible_len += 2;

    let play_action = if state == PlaybackState::Playing {
        ":pause "
    } else {
        ":play "
    };
    for (key, action) in [
        ("space", play_action),
        ("r", ":rst "),
        ("←→", ":seek "),
        ("a", ":axis "),
        ("?", ":hlp "),
        ("q", ":quit"),
    ] {
        output.push_str(CYAN);
        output.push_str(key);
        visible_len += key.chars().count();
        output.push_str(DARK_GREY);
        output.push_str(action);
        visible_len += action.len();
    }

    let padding = (width as usize).saturating_sub(visible_len);
    for _ in 0..padding {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}
