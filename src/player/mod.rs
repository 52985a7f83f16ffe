//! Replay playback
//!
//! Turns decoded frames into poses over time and hosts them in a terminal.
//!
//! # Architecture
//!
//! - `pose`: interpolated poses and the consumer axis mapping
//! - `cursor`: the time-to-frame state machine ([`PlaybackCursor`])
//! - `session`: host-owned replay plus cursor ([`ReplaySession`])
//! - `headless`: fixed-rate JSON pose output
//! - `native`: interactive terminal player
//! - `state`, `input/`, `render/`: terminal player state, keys and drawing
//!
//! # Usage
//!
//! ```no_run
//! use srp::player::{AxisMapping, ReplaySession};
//! use std::path::Path;
//!
//! let mut session = ReplaySession::new(100.0);
//! session.load_path(Path::new("run.replay")).unwrap();
//! session.play();
//! if let Some(pose) = session.tick(1.0 / 60.0) {
//!     let world = pose.to_world(AxisMapping::YUp);
//!     println!("{:?}", world.position);
//! }
//! ```

mod cursor;
mod headless;
pub(crate) mod input;
mod native;
mod pose;
pub mod render;
mod session;
pub mod state;

pub use cursor::{sample, PlaybackCursor, PlaybackState};
pub use headless::{run_headless, ExitSignal, HeadlessOptions};
pub use native::{play_replay, play_session};
pub use pose::{lerp, AxisMapping, Pose, WorldPose};
pub use session::ReplaySession;
pub use state::{InputResult, PlayerState};
