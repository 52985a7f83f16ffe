//! Input handling for the terminal player.
//!
//! Dispatches crossterm events to the keyboard handler and tracks
//! terminal resizes. Mouse and focus events are ignored.

mod keyboard;

pub use keyboard::{handle_key_event, KEY_BINDINGS};

use crossterm::event::{Event, KeyEventKind};

use crate::player::session::ReplaySession;
use crate::player::state::{InputResult, PlayerState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    state: &mut PlayerState,
    session: &mut ReplaySession,
) -> InputResult {
    match event {
        // Windows reports both press and release; only act once
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key_event(key, state, session)
        }
        Event::Resize(new_cols, new_rows) => {
            state.handle_resize(new_cols, new_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
