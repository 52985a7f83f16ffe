//! Keyboard input handling for the terminal player.
//!
//! Handles playback controls, seeking, speed and overlay toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::session::ReplaySession;
use crate::player::state::{InputResult, PlayerState};

/// Seconds moved by the arrow keys.
pub const SEEK_STEP: f64 = 5.0;

/// Key map shown in the help overlay, grouped by section.
///
/// Keep in step with the match in [`handle_key_event`].
pub const KEY_BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Playback",
        &[
            ("Space", "Play / Pause"),
            ("r / Home", "Rewind and stop"),
            ("End", "Jump to end"),
            ("<-/->", "Seek -/+5s"),
            (", / .", "Step one frame back/forward"),
            ("+/-", "Speed up / down"),
        ],
    ),
    ("View", &[("a", "Toggle source / y-up axes")]),
    (
        "General",
        &[("?", "Show this help"), ("q / Esc", "Quit player")],
    ),
];

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut PlayerState,
    session: &mut ReplaySession,
) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }

        KeyCode::Char('?') => state.toggle_help(),
        KeyCode::Char('a') => state.toggle_axis(),

        // === Playback controls ===
        KeyCode::Char(' ') => session.toggle(),
        KeyCode::Char('r') | KeyCode::Home => session.reset(),
        KeyCode::End => session.seek_by(f64::INFINITY),
        KeyCode::Char('+') | KeyCode::Char('=') => state.speed_up(),
        KeyCode::Char('-') | KeyCode::Char('_') => state.speed_down(),

        // === Seeking ===
        KeyCode::Left => session.seek_by(-SEEK_STEP),
        KeyCode::Right => session.seek_by(SEEK_STEP),
        KeyCode::Char(',') => {
            session.pause();
            session.seek_by(-session.cursor().sample_interval());
        }
        KeyCode::Char('.') => {
            session.pause();
            session.seek_by(session.cursor().sample_interval());
        }

        _ => return InputResult::Continue,
    }

    state.needs_render = true;
    InputResult::Continue
}
