//! Host-owned playback context.
//!
//! Holds the currently loaded replay together with its cursor. A replay is
//! only installed after it decoded completely, so a bad file leaves
//! whatever was loaded before untouched.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::PlaybackConfig;
use crate::replay::{self, DecodeError, Replay};

use super::cursor::{PlaybackCursor, PlaybackState};
use super::pose::Pose;

/// Current replay plus playback position.
#[derive(Debug, Clone)]
pub struct ReplaySession {
    replay: Option<Replay>,
    cursor: PlaybackCursor,
    autoplay: bool,
}

impl ReplaySession {
    /// Empty session; unusable tick rates fall back to `fallback_tick_rate`.
    pub fn new(fallback_tick_rate: f64) -> Self {
        Self {
            replay: None,
            cursor: PlaybackCursor::new(fallback_tick_rate),
            autoplay: false,
        }
    }

    pub fn from_config(config: &PlaybackConfig) -> Self {
        Self {
            autoplay: config.autoplay,
            ..Self::new(config.fallback_tick_rate)
        }
    }

    /// Decode `bytes` and make the result the current replay.
    ///
    /// On error the session is left exactly as it was.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<&Replay, DecodeError> {
        let replay = replay::decode(bytes)?;
        Ok(self.install(replay))
    }

    /// Read a file fully, then decode it.
    pub fn load_path(&mut self, path: &Path) -> Result<&Replay> {
        let bytes = fs::read(path).with_context(|| format!("Failed to read replay: {:?}", path))?;
        self.load_bytes(&bytes)
            .with_context(|| format!("Failed to decode replay: {:?}", path))
    }

    /// Make an already decoded replay current.
    pub fn install(&mut self, replay: Replay) -> &Replay {
        self.cursor.load(&replay);
        tracing::info!(
            map = %replay.header().map_name,
            frames = replay.frame_count(),
            tick_rate = self.cursor.tick_rate(),
            "replay loaded"
        );
        if self.autoplay {
            self.cursor.play();
        }
        self.replay.insert(replay)
    }

    pub fn replay(&self) -> Option<&Replay> {
        self.replay.as_ref()
    }

    pub fn cursor(&self) -> &PlaybackCursor {
        &self.cursor
    }

    /// Start playing. A replay that already ran to its end starts over.
    pub fn play(&mut self) {
        if self.replay.is_none() {
            return;
        }
        if !self.cursor.is_playing() && self.is_finished() {
            self.cursor.reset();
        }
        self.cursor.play();
    }

    pub fn pause(&mut self) {
        self.cursor.pause();
    }

    pub fn toggle(&mut self) {
        if self.cursor.is_playing() {
            self.cursor.pause();
        } else {
            self.play();
        }
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Move the playback time by `seconds`, clamped to the replay's range.
    pub fn seek_by(&mut self, seconds: f64) {
        let Some(replay) = &self.replay else {
            return;
        };
        let target = (self.cursor.elapsed() + seconds).min(self.cursor.duration(replay));
        self.cursor.seek(target);
    }

    pub fn state(&self) -> PlaybackState {
        self.cursor.state()
    }

    /// Total playable time of the current replay.
    pub fn duration(&self) -> f64 {
        self.replay
            .as_ref()
            .map_or(0.0, |replay| self.cursor.duration(replay))
    }

    /// Advance by `delta` seconds and return the pose for the new instant.
    ///
    /// `None` when nothing is loaded or the replay has no frames.
    pub fn tick(&mut self, delta: f64) -> Option<Pose> {
        let replay = self.replay.as_ref()?;
        self.cursor.advance(replay, delta)
    }

    /// Pose at the current time, without advancing.
    pub fn pose(&self) -> Option<Pose> {
        self.replay.as_ref().and_then(|replay| self.cursor.pose(replay))
    }

    pub fn is_finished(&self) -> bool {
        self.replay
            .as_ref()
            .map_or(true, |replay| self.cursor.is_finished(replay))
    }
}
