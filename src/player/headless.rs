//! Headless playback: drive a session at a fixed rate and emit one JSON
//! line per sampled pose.

use std::io::Write;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::config::PlaybackConfig;
use crate::replay::Vec3;

use super::session::ReplaySession;
use super::AxisMapping;

/// Shared flag set from the Ctrl-C handler.
#[derive(Clone, Default)]
pub struct ExitSignal {
    flag: Arc<AtomicBool>,
}

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request_exit(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_exit_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    pub fn install_ctrlc_handler(&self) -> Result<()> {
        let signal = self.clone();
        ctrlc::set_handler(move || signal.request_exit())?;
        Ok(())
    }
}

/// How a headless run advances time.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessOptions {
    /// Samples per second of wall-clock time.
    pub refresh_hz: u32,
    /// Playback speed multiplier.
    pub speed: f64,
    pub axis: AxisMapping,
    /// Sleep between samples. Off, the run completes as fast as it can.
    pub realtime: bool,
}

impl HeadlessOptions {
    /// Real-time options from the playback settings.
    pub fn from_config(playback: &PlaybackConfig, axis: AxisMapping) -> Self {
        Self {
            refresh_hz: playback.redraw_hz(),
            speed: playback.clamped_speed(),
            axis,
            realtime: true,
        }
    }
}

#[derive(Serialize)]
struct PoseSample {
    elapsed: f64,
    frame: usize,
    t: f32,
    position: Vec3,
    rotation: Vec3,
}

/// Play the loaded replay from the start, writing one pose per line until
/// the end is reached or `exit` is raised. Returns the number of lines.
pub fn run_headless<W: Write>(
    session: &mut ReplaySession,
    options: HeadlessOptions,
    out: &mut W,
    exit: &ExitSignal,
) -> Result<usize> {
    let step_wall = 1.0 / f64::from(options.refresh_hz.max(1));
    let mut step = step_wall * options.speed;
    if !(step > 0.0) {
        step = step_wall;
    }

    session.reset();
    session.play();

    let mut written = 0;
    while !exit.is_exit_requested() {
        let Some(pose) = session.pose() else {
            break;
        };
        let world = pose.to_world(options.axis);
        let sample = PoseSample {
            elapsed: session.cursor().elapsed(),
            frame: pose.frame_index,
            t: pose.t,
            position: world.position,
            rotation: world.rotation,
        };
        serde_json::to_writer(&mut *out, &sample)?;
        writeln!(out)?;
        written += 1;

        if session.is_finished() {
            break;
        }
        session.tick(step);
        if options.realtime {
            thread::sleep(Duration::from_secs_f64(step_wall));
        }
    }

    out.flush()?;
    tracing::debug!(samples = written, "headless playback done");
    Ok(written)
}
