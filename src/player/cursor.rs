//! Playback cursor: maps elapsed wall-clock time onto the frame sequence.
//!
//! The cursor never owns or mutates a [`Replay`]; callers pass the record
//! in on every query. One owner drives it from a single tick loop.
//!
//! # End of replay
//!
//! With two or more frames the start index is clamped to `frame_count - 2`
//! so the next index always exists, and the fraction is clamped to [0, 1].
//! Playback therefore reaches the final sample exactly and then holds it.
//! A single frame is returned unchanged for any time. An empty replay
//! yields no pose at all.

use crate::replay::{Frame, Replay, Vec3, DEFAULT_TICK_RATE};

use super::pose::{lerp, Pose};

/// Play state of a [`PlaybackCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// At time zero, not advancing.
    #[default]
    Stopped,
    Playing,
    /// Holding the current time.
    Paused,
}

/// Time-based playback position over a replay's frames.
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    state: PlaybackState,
    elapsed: f64,
    sample_interval: f64,
    fallback_tick_rate: f64,
}

impl PlaybackCursor {
    /// Create a cursor with no replay loaded yet.
    ///
    /// `fallback_tick_rate` replaces unusable tick rates; values not
    /// greater than 1 are themselves replaced by [`DEFAULT_TICK_RATE`].
    pub fn new(fallback_tick_rate: f64) -> Self {
        let fallback_tick_rate = if fallback_tick_rate > 1.0 && fallback_tick_rate.is_finite() {
            fallback_tick_rate
        } else {
            DEFAULT_TICK_RATE
        };

        Self {
            state: PlaybackState::Stopped,
            elapsed: 0.0,
            sample_interval: 1.0 / fallback_tick_rate,
            fallback_tick_rate,
        }
    }

    /// Create a cursor already loaded with `replay`.
    pub fn for_replay(replay: &Replay, fallback_tick_rate: f64) -> Self {
        let mut cursor = Self::new(fallback_tick_rate);
        cursor.load(replay);
        cursor
    }

    /// Switch to a new replay: stop, rewind and recompute the sample interval.
    pub fn load(&mut self, replay: &Replay) {
        let tick_rate = replay.header().effective_tick_rate(self.fallback_tick_rate);
        self.sample_interval = 1.0 / tick_rate;
        self.reset();
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    /// Pause if playing. A stopped cursor stays stopped.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn reset(&mut self) {
        self.state = PlaybackState::Stopped;
        self.elapsed = 0.0;
    }

    /// Jump to `seconds`, keeping the play state.
    ///
    /// A stopped cursor moved away from zero becomes paused, since
    /// `Stopped` always means time zero.
    pub fn seek(&mut self, seconds: f64) {
        self.elapsed = if seconds.is_nan() { 0.0 } else { seconds.max(0.0) };
        if self.state == PlaybackState::Stopped && self.elapsed > 0.0 {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Seconds between two recorded frames.
    pub fn sample_interval(&self) -> f64 {
        self.sample_interval
    }

    pub fn tick_rate(&self) -> f64 {
        1.0 / self.sample_interval
    }

    /// Time at which the final frame is reached.
    pub fn duration(&self, replay: &Replay) -> f64 {
        replay.frame_count().saturating_sub(1) as f64 * self.sample_interval
    }

    pub fn is_finished(&self, replay: &Replay) -> bool {
        self.elapsed >= self.duration(replay)
    }

    /// Move time forward by `delta` seconds while playing and return the
    /// pose for the resulting instant.
    ///
    /// Not playing, the time is left alone and the current pose comes back.
    /// Negative deltas are ignored so time never runs backwards.
    pub fn advance(&mut self, replay: &Replay, delta: f64) -> Option<Pose> {
        if self.is_playing() {
            self.elapsed += delta.max(0.0);
        }
        self.pose(replay)
    }

    /// Pose at the current time, without advancing.
    pub fn pose(&self, replay: &Replay) -> Option<Pose> {
        sample(
            replay.frames(),
            self.elapsed / self.sample_interval,
            replay.zone_offset(),
        )
    }
}

/// Interpolate `frames` at fractional index `raw_index`.
pub fn sample(frames: &[Frame], raw_index: f64, zone_offset: [f32; 2]) -> Option<Pose> {
    let (index, next, t) = match frames.len() {
        0 => return None,
        1 => (0, 0, 0.0),
        n => {
            let index = raw_index.floor().clamp(0.0, (n - 2) as f64);
            let t = (raw_index - index).clamp(0.0, 1.0);
            (index as usize, index as usize + 1, t as f32)
        }
    };

    let a = &frames[index];
    let b = &frames[next];

    Some(Pose {
        position: Vec3::new(
            lerp(a.origin.x, b.origin.x, t),
            lerp(a.origin.y, b.origin.y, t),
            lerp(a.origin.z, b.origin.z, t),
        ),
        yaw: lerp(a.yaw, b.yaw, t),
        pitch: lerp(a.pitch, b.pitch, t),
        frame_index: index,
        t,
        zone_offset,
    })
}
