//! shavit-bhoptimer replay decoder
//!
//! Turns the raw bytes of a replay file into an immutable [`Replay`].
//! The on-disk layout depends on the format version declared in the header
//! line; see [`plan`] for which fields each version carries.
//!
//! ```text
//! <version>:{SHAVITREPLAYFORMAT}{FINAL}\n
//! [map name, style, track, pre frames]          v3+
//! frame count, finish time
//! author id (v4+) | author text (v1-3)
//! [post frames, tick rate]                      v5+
//! [zone offset x, y]                            v8+
//! frame * frame count                           24 / 32 (v2+) / 40 (v6+) bytes
//! ```
//!
//! Decoding is all-or-nothing: either a complete record comes back or a
//! [`DecodeError`] describing where the buffer stopped making sense.

mod error;
mod header;
pub mod plan;
mod reader;

use serde::Serialize;

pub use error::{DecodeError, DecodeWarning};
pub use header::parse_header_line;

use plan::{FrameOp, HeaderOp};
use reader::ByteReader;

/// Literal that must follow the version token in the header line.
pub const FORMAT_TAG: &str = "{SHAVITREPLAYFORMAT}{FINAL}";

/// Samples per second assumed when a replay carries no usable tick rate.
pub const DEFAULT_TICK_RATE: f64 = 100.0;

/// Point in recorded (source engine) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One recorded sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub origin: Vec3,
    /// Degrees, conventionally within [-90, 90].
    pub pitch: f32,
    /// Degrees, wraps at 360.
    pub yaw: f32,
    /// Held input buttons; opaque to playback.
    pub buttons: i32,
}

/// Everything a replay carries besides its frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayHeader {
    pub version: u32,
    /// Empty before version 3.
    pub map_name: String,
    pub style: u8,
    pub track: u8,
    pub pre_frames: i32,
    pub post_frames: i32,
    /// Playable frames, after any legacy pre/post adjustment.
    pub frame_count: usize,
    /// Seconds; informational only.
    pub finish_time: f32,
    pub author_id: Option<i64>,
    /// Raw textual author of version 1-3 files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_text: Option<String>,
    /// Stored tick rate (version 5+), as found on disk.
    pub tick_rate: Option<f32>,
    /// Planar (x, y) translation into world space; zero before version 8.
    pub zone_offset: [f32; 2],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DecodeWarning>,
}

impl ReplayHeader {
    /// Tick rate to play back at, substituting `fallback` when the stored
    /// one is missing or not greater than 1.
    pub fn effective_tick_rate(&self, fallback: f64) -> f64 {
        match self.tick_rate {
            Some(rate) if rate > 1.0 && rate.is_finite() => f64::from(rate),
            _ => fallback,
        }
    }
}

/// A fully decoded replay.
///
/// Immutable once built: `frames().len()` always equals `header().frame_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    header: ReplayHeader,
    frames: Vec<Frame>,
}

impl Replay {
    pub fn header(&self) -> &ReplayHeader {
        &self.header
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn version(&self) -> u32 {
        self.header.version
    }

    pub fn zone_offset(&self) -> [f32; 2] {
        self.header.zone_offset
    }

    pub fn warnings(&self) -> &[DecodeWarning] {
        &self.header.warnings
    }

    /// Build a replay directly from samples, e.g. for synthetic playback.
    pub fn from_frames(
        frames: Vec<Frame>,
        tick_rate: Option<f32>,
        zone_offset: [f32; 2],
    ) -> Self {
        let header = ReplayHeader {
            version: plan::NEWEST_VERSION,
            map_name: String::new(),
            style: 0,
            track: 0,
            pre_frames: 0,
            post_frames: 0,
            frame_count: frames.len(),
            finish_time: 0.0,
            author_id: None,
            author_text: None,
            tick_rate,
            zone_offset,
            warnings: Vec::new(),
        };
        Self { header, frames }
    }
}

/// Header values gathered while walking the plan.
#[derive(Debug, Default)]
struct HeaderFields {
    map_name: String,
    style: u8,
    track: u8,
    pre_frames: i32,
    post_frames: i32,
    raw_frame_count: i32,
    frame_count: i64,
    finish_time: f32,
    author_id: Option<i64>,
    author_text: Option<String>,
    tick_rate: Option<f32>,
    zone_offset: [f32; 2],
}

impl HeaderFields {
    fn apply(&mut self, op: HeaderOp, reader: &mut ByteReader<'_>) -> Result<(), DecodeError> {
        match op {
            HeaderOp::MapName => {
                self.map_name = reader.read_cstring(plan::MAP_NAME_LEN, "map_name")?;
            }
            HeaderOp::Style => self.style = reader.read_u8("style")?,
            HeaderOp::Track => self.track = reader.read_u8("track")?,
            HeaderOp::PreFrames => self.pre_frames = reader.read_i32("pre_frames")?,
            HeaderOp::FrameCount => {
                self.raw_frame_count = reader.read_i32("frame_count")?;
                self.frame_count = i64::from(self.raw_frame_count);
            }
            HeaderOp::FinishTime => self.finish_time = reader.read_f32("finish_time")?,
            HeaderOp::TrimPreFrames => self.frame_count -= i64::from(self.pre_frames),
            HeaderOp::AuthorText => {
                let text = reader.read_cstring(plan::AUTHOR_TEXT_LEN, "author_text")?;
                self.author_id = parse_legacy_author(&text);
                self.author_text = Some(text);
            }
            HeaderOp::AuthorId => {
                self.author_id = Some(i64::from(reader.read_i32("author_id")?));
            }
            HeaderOp::PostFrames => self.post_frames = reader.read_i32("post_frames")?,
            HeaderOp::TickRate => self.tick_rate = Some(reader.read_f32("tick_rate")?),
            HeaderOp::TrimPostFrames => self.frame_count -= i64::from(self.post_frames),
            HeaderOp::ZoneOffset => {
                self.zone_offset = [
                    reader.read_f32("zone_offset.x")?,
                    reader.read_f32("zone_offset.y")?,
                ];
            }
        }
        Ok(())
    }
}

/// Extract the digits of a legacy author string and parse them as one number.
///
/// `"STEAM_0:1:2345"` becomes `12345`. Returns `None` when there are no
/// digits or the number does not fit.
pub fn parse_legacy_author(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Decode a complete replay buffer.
pub fn decode(bytes: &[u8]) -> Result<Replay, DecodeError> {
    let mut reader = ByteReader::new(bytes);
    let version = header::read_header_line(&mut reader)?;
    let mut warnings = Vec::new();

    if version > plan::NEWEST_VERSION {
        tracing::warn!(version, "replay version is newer than any known layout");
        warnings.push(DecodeWarning::UnknownVersion { version });
    }

    let mut fields = HeaderFields::default();
    for op in plan::header_ops(version) {
        fields.apply(op, &mut reader)?;
    }

    let frame_count = usize::try_from(fields.frame_count).map_err(|_| {
        DecodeError::InvalidFrameCount {
            raw: fields.raw_frame_count,
            pre_frames: fields.pre_frames,
            post_frames: fields.post_frames,
        }
    })?;

    if let Some(rate) = fields.tick_rate {
        if !(rate > 1.0 && rate.is_finite()) {
            tracing::warn!(tick_rate = rate, "replay tick rate is not usable");
            warnings.push(DecodeWarning::InvalidTickRate { found: rate });
        }
    }

    let stride = plan::frame_stride(version);
    tracing::debug!(
        version,
        map = %fields.map_name,
        frame_count,
        stride,
        header_len = reader.offset(),
        "decoded replay header"
    );

    let frames = read_frames(&mut reader, version, frame_count, stride)?;

    if reader.remaining() > 0 {
        tracing::debug!(trailing = reader.remaining(), "ignoring trailing bytes");
    }

    let header = ReplayHeader {
        version,
        map_name: fields.map_name,
        style: fields.style,
        track: fields.track,
        pre_frames: fields.pre_frames,
        post_frames: fields.post_frames,
        frame_count,
        finish_time: fields.finish_time,
        author_id: fields.author_id,
        author_text: fields.author_text,
        tick_rate: fields.tick_rate,
        zone_offset: fields.zone_offset,
        warnings,
    };

    Ok(Replay { header, frames })
}

fn read_frames(
    reader: &mut ByteReader<'_>,
    version: u32,
    count: usize,
    stride: usize,
) -> Result<Vec<Frame>, DecodeError> {
    // Never trust the stored count for the allocation size
    let mut frames = Vec::with_capacity(count.min(reader.remaining() / stride));
    for index in 0..count {
        let frame = read_frame(reader, version).map_err(|e| e.in_frame(index))?;
        frames.push(frame);
    }
    Ok(frames)
}

fn read_frame(reader: &mut ByteReader<'_>, version: u32) -> Result<Frame, DecodeError> {
    let mut frame = Frame {
        origin: Vec3::default(),
        pitch: 0.0,
        yaw: 0.0,
        buttons: 0,
    };

    for op in plan::frame_ops(version) {
        match op {
            FrameOp::Origin => {
                frame.origin = Vec3::new(
                    reader.read_f32("frame.origin.x")?,
                    reader.read_f32("frame.origin.y")?,
                    reader.read_f32("frame.origin.z")?,
                );
            }
            FrameOp::Angles => {
                frame.pitch = reader.read_f32("frame.pitch")?;
                frame.yaw = reader.read_f32("frame.yaw")?;
            }
            FrameOp::Buttons => frame.buttons = reader.read_i32("frame.buttons")?,
            FrameOp::Discard(names) => {
                for name in names {
                    reader.skip(4, name)?;
                }
            }
        }
    }

    Ok(frame)
}
