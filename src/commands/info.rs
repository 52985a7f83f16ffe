//! Info command handler

use anyhow::{bail, Context, Result};
use humansize::{format_size, DECIMAL};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use srp::config::PlaybackConfig;
use srp::{decode, ReplayHeader};

#[derive(Serialize)]
struct FileInfo<'a> {
    file: &'a Path,
    size: u64,
    header: ReplayHeader,
}

fn read_header(path: &Path) -> Result<(u64, ReplayHeader)> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read replay: {:?}", path))?;
    let replay = decode(&bytes).with_context(|| format!("Failed to decode replay: {:?}", path))?;
    Ok((bytes.len() as u64, replay.header().clone()))
}

/// Decode every file in parallel and print a summary for each one.
///
/// Files that fail are reported on stderr; the others still print, and
/// the command fails at the end.
pub fn handle(files: &[PathBuf], json: bool, playback: &PlaybackConfig) -> Result<()> {
    let results: Vec<(&PathBuf, Result<(u64, ReplayHeader)>)> = files
        .par_iter()
        .map(|path| (path, read_header(path)))
        .collect();

    let mut failed = 0;
    let mut infos = Vec::new();
    for (path, result) in results {
        match result {
            Ok((size, header)) => infos.push(FileInfo {
                file: path,
                size,
                header,
            }),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                failed += 1;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        for (i, info) in infos.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", format_info(info, playback.fallback_tick_rate));
        }
    }

    if failed > 0 {
        bail!("{} of {} files could not be decoded", failed, files.len());
    }
    Ok(())
}

fn format_info(info: &FileInfo, fallback_tick_rate: f64) -> String {
    let header = &info.header;
    let mut out = format!("{}\n", info.file.display());

    let mut field = |name: &str, value: String| {
        out.push_str(&format!("  {:<12} {}\n", format!("{}:", name), value));
    };

    field("version", header.version.to_string());
    field("map", header.map_name.clone());
    field("style", header.style.to_string());
    field("track", header.track.to_string());
    field("frames", header.frame_count.to_string());
    let effective = header.effective_tick_rate(fallback_tick_rate);
    let tick_rate = match header.tick_rate {
        Some(rate) if f64::from(rate) == effective => effective.to_string(),
        Some(rate) => format!("{} (stored {})", effective, rate),
        None => format!("{} (default)", effective),
    };
    field("tick rate", tick_rate);
    field("finish time", format!("{:.3}s", header.finish_time));
    let author = match (&header.author_text, header.author_id) {
        (Some(text), _) => text.clone(),
        (None, Some(id)) => id.to_string(),
        (None, None) => "-".to_string(),
    };
    field("author", author);
    field(
        "zone offset",
        format!("({:.2}, {:.2})", header.zone_offset[0], header.zone_offset[1]),
    );
    field("size", format_size(info.size, DECIMAL));
    for warning in &header.warnings {
        field("warning", warning.to_string());
    }
    out
}
