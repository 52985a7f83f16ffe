//! Progress bar rendering for the terminal player.

use std::io::{self, Write};

use anyhow::Result;

/// Format a duration in seconds to MM:SS.cc format.
///
/// Replays are short and frame-accurate, so hundredths are shown.
pub fn format_duration(seconds: f64) -> String {
    let centis = (seconds.max(0.0) * 100.0) as u64;
    let mins = centis / 6000;
    let secs = (centis / 100) % 60;
    format!("{:02}:{:02}.{:02}", mins, secs, centis % 100)
}

/// Build the progress bar character array.
///
/// Returns `(bar_chars, filled_count)`; the playhead sits at `filled_count`
/// unless the bar is full.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress bar.
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    current_time: f64,
    total_duration: f64,
) -> Result<()> {
    let current_str = format_duration(current_time);
    let total_str = format_duration(total_duration);
    let time_display = format!(" {}/{}", current_str, total_str);

    let bar_width = (width as usize).saturating_sub(2 + time_display.len());
    let (bar, filled) = build_progress_bar_chars(bar_width, current_time, total_duration);

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str("\x1b[48;5;236m ");

    const GREEN: &str = "\x1b[32m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i < filled {
            output.push('━');
        } else if i == filled {
            output.push_str(WHITE);
            output.push(c);
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    for _ in 0..remaining {
        output.push(' ');
    }

    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;

    Ok(())
}
