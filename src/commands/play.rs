//! Play command handler

use anyhow::Result;
use std::io;
use std::path::Path;

use srp::player::{self, AxisMapping, ExitSignal, HeadlessOptions};
use srp::{Config, ReplaySession};

/// Play a replay, either in the terminal UI or as headless JSON lines.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: &Path,
    headless: bool,
    fast: bool,
    axis: AxisMapping,
    config: &Config,
) -> Result<()> {
    if !headless {
        return player::play_replay(file, config, axis);
    }

    let mut session = ReplaySession::from_config(&config.playback);
    session.load_path(file)?;

    let exit = ExitSignal::new();
    exit.install_ctrlc_handler()?;

    let options = HeadlessOptions {
        realtime: !fast,
        ..HeadlessOptions::from_config(&config.playback, axis)
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    player::run_headless(&mut session, options, &mut out, &exit)?;
    Ok(())
}
