//! Interactive terminal player.
//!
//! Draws the replay summary, live pose readouts, a progress bar and a
//! status bar, redrawing at the configured refresh rate while playing.

use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event, execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::Config;

use super::input::handle_event;
use super::render::{
    format_pose_line, format_replay_line, format_world_line, render_help, render_progress_bar,
    render_separator_line, render_status_bar, render_text_line,
};
use super::session::ReplaySession;
use super::state::{InputResult, PlayerState};
use super::AxisMapping;

/// Raw mode plus alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Load a replay file and play it in the terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_replay(path: &Path, config: &Config, axis: AxisMapping) -> Result<()> {
    let mut session = ReplaySession::from_config(&config.playback);
    session.load_path(path)?;
    play_session(&mut session, config, axis)
}

/// Run the interactive player over an already loaded session.
#[cfg(not(tarpaulin_include))]
pub fn play_session(session: &mut ReplaySession, config: &Config, axis: AxisMapping) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut state = PlayerState::new(cols, rows, &config.playback, axis);
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(config.playback.redraw_hz()));

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    let mut last_tick = Instant::now();
    let mut last_layout = (state.term_cols, state.term_rows, state.show_help);
    execute!(stdout, Clear(ClearType::All))?;

    loop {
        if event::poll(frame_time)? {
            if handle_event(event::read()?, &mut state, session) == InputResult::Quit {
                tracing::debug!(elapsed = session.cursor().elapsed(), "player closed");
                return Ok(());
            }
        }

        let now = Instant::now();
        let wall = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        if session.cursor().is_playing() {
            session.tick(state.scaled_delta(wall));
            if session.is_finished() {
                session.pause();
            }
            state.needs_render = true;
        }

        let layout = (state.term_cols, state.term_rows, state.show_help);
        if layout != last_layout {
            execute!(stdout, Clear(ClearType::All))?;
            last_layout = layout;
            state.needs_render = true;
        }

        if state.needs_render {
            render(&mut stdout, &state, session)?;
            stdout.flush()?;
            state.needs_render = false;
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn render(stdout: &mut io::Stdout, state: &PlayerState, session: &ReplaySession) -> Result<()> {
    let (cols, rows) = (state.term_cols, state.term_rows);
    if state.show_help {
        return render_help(stdout, cols, rows);
    }
    let Some(replay) = session.replay() else {
        return Ok(());
    };

    let top = rows.saturating_sub(PlayerState::UI_LINES) / 2;
    let pose = session.pose();

    let summary = format_replay_line(replay.header(), session.cursor().tick_rate());
    render_text_line(stdout, cols, top, &summary)?;
    render_text_line(
        stdout,
        cols,
        top + 1,
        &format_pose_line(pose.as_ref(), replay.frame_count()),
    )?;
    let world = pose
        .map(|pose| format_world_line(&pose.to_world(state.axis), state.axis))
        .unwrap_or_default();
    render_text_line(stdout, cols, top + 2, &world)?;
    render_separator_line(stdout, cols, top + 3)?;
    render_progress_bar(
        stdout,
        cols,
        top + 4,
        session.cursor().elapsed(),
        session.duration(),
    )?;
    render_status_bar(stdout, cols, top + 5, session.state(), state.speed)?;
    Ok(())
}
