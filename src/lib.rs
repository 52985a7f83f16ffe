//! srp - Shavit Replay Player
//!
//! Decodes replay files written by the shavit bhop timer and plays them
//! back as interpolated poses.
//!
//! - [`replay`]: versioned binary decoder producing a [`Replay`]
//! - [`player`]: playback cursor, host session and the terminal player
//! - [`config`]: persisted settings
//!
//! ```no_run
//! let bytes = std::fs::read("run.replay").unwrap();
//! let replay = srp::decode(&bytes).unwrap();
//! let cursor = srp::PlaybackCursor::for_replay(&replay, 100.0);
//! println!("{} frames, {:.2}s", replay.frame_count(), cursor.duration(&replay));
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod replay;

pub use config::Config;
pub use player::{PlaybackCursor, PlaybackState, Pose, ReplaySession};
pub use replay::{decode, DecodeError, DecodeWarning, Frame, Replay, ReplayHeader, Vec3};
