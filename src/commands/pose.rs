//! Pose command handler

use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;

use srp::player::{AxisMapping, Pose, WorldPose};
use srp::{Config, ReplaySession};

#[derive(Serialize)]
struct PoseReport {
    elapsed: f64,
    duration: f64,
    axis: AxisMapping,
    pose: Pose,
    world: WorldPose,
}

/// Evaluate the cursor `seconds` into playback: reset, play, advance once.
pub fn handle(
    file: &Path,
    seconds: f64,
    axis: AxisMapping,
    json: bool,
    config: &Config,
) -> Result<()> {
    let mut session = ReplaySession::from_config(&config.playback);
    session.load_path(file)?;
    session.reset();
    session.play();

    let Some(pose) = session.tick(seconds) else {
        bail!("Replay has no frames: {:?}", file);
    };
    let report = PoseReport {
        elapsed: session.cursor().elapsed(),
        duration: session.duration(),
        axis,
        pose,
        world: pose.to_world(axis),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let p = report.pose;
    let w = report.world;
    println!("time:      {:.3}s / {:.3}s", report.elapsed, report.duration);
    println!("frame:     {} (+{:.3})", p.frame_index, p.t);
    println!(
        "position:  ({:.3}, {:.3}, {:.3})",
        p.position.x, p.position.y, p.position.z
    );
    println!("angles:    yaw {:.3}  pitch {:.3}", p.yaw, p.pitch);
    println!(
        "world:     ({:.3}, {:.3}, {:.3}) [{}]",
        w.position.x,
        w.position.y,
        w.position.z,
        axis.label()
    );
    println!(
        "rotation:  ({:.4}, {:.4}, {:.4}) rad",
        w.rotation.x, w.rotation.y, w.rotation.z
    );
    Ok(())
}
