//! Frames command handler

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use srp::{decode, Frame};

#[derive(Serialize)]
struct IndexedFrame<'a> {
    index: usize,
    #[serde(flatten)]
    frame: &'a Frame,
}

/// Print frames `from..to` of a replay. Bounds past the end are clamped.
pub fn handle(file: &Path, from: Option<usize>, to: Option<usize>, json: bool) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("Failed to read replay: {:?}", file))?;
    let replay = decode(&bytes).with_context(|| format!("Failed to decode replay: {:?}", file))?;

    let count = replay.frame_count();
    let start = from.unwrap_or(0).min(count);
    let end = to.unwrap_or(count).min(count);
    if start > end {
        bail!("--from ({}) must not be after --to ({})", start, end);
    }

    let frames = replay.frames()[start..end]
        .iter()
        .enumerate()
        .map(|(i, frame)| IndexedFrame {
            index: start + i,
            frame,
        });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let frames: Vec<_> = frames.collect();
        serde_json::to_writer_pretty(&mut out, &frames)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = count.to_string().len().max(5);
    writeln!(
        out,
        "{:>width$}  {:>10} {:>10} {:>10}  {:>8} {:>8}  {:>8}",
        "frame",
        "x",
        "y",
        "z",
        "pitch",
        "yaw",
        "buttons",
        width = width
    )?;
    for entry in frames {
        let frame = entry.frame;
        writeln!(
            out,
            "{:>width$}  {:>10.3} {:>10.3} {:>10.3}  {:>8.3} {:>8.3}  {:08x}",
            entry.index,
            frame.origin.x,
            frame.origin.y,
            frame.origin.z,
            frame.pitch,
            frame.yaw,
            frame.buttons,
            width = width
        )?;
    }
    Ok(())
}
