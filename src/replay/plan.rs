//! Version-gated decode plan.
//!
//! The replay layout grew one optional field at a time across format
//! revisions. Rather than scattering `if version >= N` checks through the
//! decoder, every threshold is declared once in the two tables below:
//! [`HEADER_PLAN`] lists the header reads (and the legacy frame-count
//! adjustments) in on-disk order, [`FRAME_PLAN`] lists the per-frame reads.
//! The decoder walks whichever steps apply to the file's version.

/// Newest layout this decoder knows about. Later versions reuse it.
pub const NEWEST_VERSION: u32 = 8;

/// Half-open range of format versions a step applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Versions {
    since: u32,
    before: Option<u32>,
}

impl Versions {
    /// Every version from `since` onwards.
    pub const fn since(since: u32) -> Self {
        Self {
            since,
            before: None,
        }
    }

    /// Versions in `since..before`.
    pub const fn between(since: u32, before: u32) -> Self {
        Self {
            since,
            before: Some(before),
        }
    }

    pub fn contains(&self, version: u32) -> bool {
        version >= self.since && self.before.map_or(true, |before| version < before)
    }
}

/// One entry of a decode plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<Op> {
    pub op: Op,
    pub versions: Versions,
}

const fn step<Op>(op: Op, versions: Versions) -> Step<Op> {
    Step { op, versions }
}

/// Header operations, in the order they occur on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOp {
    /// Zero-terminated map name, at most [`MAP_NAME_LEN`] bytes.
    MapName,
    Style,
    Track,
    PreFrames,
    FrameCount,
    FinishTime,
    /// Subtract the pre-run frames from the stored frame count.
    TrimPreFrames,
    /// Legacy textual author (SteamID2 style), at most [`AUTHOR_TEXT_LEN`] bytes.
    AuthorText,
    AuthorId,
    PostFrames,
    TickRate,
    /// Subtract the post-run frames from the stored frame count.
    TrimPostFrames,
    /// Two 32-bit floats: planar x/y translation.
    ZoneOffset,
}

pub const MAP_NAME_LEN: usize = 256;
pub const AUTHOR_TEXT_LEN: usize = 32;

/// Header layout for every known version.
///
/// The two trim steps are separate on purpose: versions 5 and 6 subtract
/// the pre-run frames right after the count is read and the post-run
/// frames only once they are known. From version 7 the stored count is
/// already the playable range.
pub const HEADER_PLAN: &[Step<HeaderOp>] = &[
    step(HeaderOp::MapName, Versions::since(3)),
    step(HeaderOp::Style, Versions::since(3)),
    step(HeaderOp::Track, Versions::since(3)),
    step(HeaderOp::PreFrames, Versions::since(3)),
    step(HeaderOp::FrameCount, Versions::since(1)),
    step(HeaderOp::FinishTime, Versions::since(1)),
    step(HeaderOp::TrimPreFrames, Versions::between(1, 7)),
    step(HeaderOp::AuthorText, Versions::between(1, 4)),
    step(HeaderOp::AuthorId, Versions::since(4)),
    step(HeaderOp::PostFrames, Versions::since(5)),
    step(HeaderOp::TickRate, Versions::since(5)),
    step(HeaderOp::TrimPostFrames, Versions::between(5, 7)),
    step(HeaderOp::ZoneOffset, Versions::since(8)),
];

/// Per-frame operations, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOp {
    /// Three 32-bit floats.
    Origin,
    /// Pitch then yaw, 32-bit floats.
    Angles,
    /// 32-bit button mask.
    Buttons,
    /// 32-bit integers read only to keep the stride; values are dropped.
    Discard(&'static [&'static str]),
}

impl FrameOp {
    /// Bytes consumed by this operation.
    pub const fn width(&self) -> usize {
        match self {
            FrameOp::Origin => 12,
            FrameOp::Angles => 8,
            FrameOp::Buttons => 4,
            FrameOp::Discard(fields) => 4 * fields.len(),
        }
    }
}

pub const FRAME_PLAN: &[Step<FrameOp>] = &[
    step(FrameOp::Origin, Versions::since(1)),
    step(FrameOp::Angles, Versions::since(1)),
    step(FrameOp::Buttons, Versions::since(1)),
    step(
        FrameOp::Discard(&["frame.flags", "frame.movetype"]),
        Versions::since(2),
    ),
    step(
        FrameOp::Discard(&["frame.mouse_xy", "frame.velocity"]),
        Versions::since(6),
    ),
];

/// Header operations that apply to `version`, in read order.
pub fn header_ops(version: u32) -> impl Iterator<Item = HeaderOp> {
    applicable(HEADER_PLAN, version)
}

/// Frame operations that apply to `version`, in read order.
pub fn frame_ops(version: u32) -> impl Iterator<Item = FrameOp> {
    applicable(FRAME_PLAN, version)
}

/// Size of one frame record for `version`.
pub fn frame_stride(version: u32) -> usize {
    frame_ops(version).map(|op| op.width()).sum()
}

fn applicable<Op: Copy + 'static>(
    plan: &'static [Step<Op>],
    version: u32,
) -> impl Iterator<Item = Op> {
    plan.iter()
        .filter(move |s| s.versions.contains(version))
        .map(|s| s.op)
}
