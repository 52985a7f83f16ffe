//! Replay decoding errors and warnings.

use serde::Serialize;

/// Errors that reject a replay buffer outright.
///
/// No partially decoded record is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Unrecognized replay format: header tag {found:?} (expected \"{expected}\")", expected = super::FORMAT_TAG)]
    Format { found: String },

    #[error("Invalid replay version token {token:?}")]
    Version { token: String },

    #[error(
        "Truncated replay: {field} needs {needed} byte(s) at offset {offset}, only {available} left{}",
        frame_suffix(.frame)
    )]
    Truncated {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
        frame: Option<usize>,
    },

    #[error("Invalid frame count: raw {raw} minus pre {pre_frames} / post {post_frames} frames is negative")]
    InvalidFrameCount {
        raw: i32,
        pre_frames: i32,
        post_frames: i32,
    },
}

fn frame_suffix(frame: &Option<usize>) -> String {
    frame.map(|i| format!(" (frame #{i})")).unwrap_or_default()
}

impl DecodeError {
    /// Byte offset the error refers to, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Truncated { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Attach a frame index to a truncation raised while reading a frame.
    pub(crate) fn in_frame(self, index: usize) -> Self {
        match self {
            Self::Truncated {
                field,
                offset,
                needed,
                available,
                ..
            } => Self::Truncated {
                field,
                offset,
                needed,
                available,
                frame: Some(index),
            },
            other => other,
        }
    }
}

/// Non-fatal conditions noticed while decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeWarning {
    /// Stored tick rate is not usable; playback substitutes a default.
    InvalidTickRate { found: f32 },
    /// Version is newer than any known layout; decoded with the newest one.
    UnknownVersion { version: u32 },
}

impl std::fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTickRate { found } => {
                write!(f, "tick rate {found} is not usable, falling back to default")
            }
            Self::UnknownVersion { version } => write!(
                f,
                "unknown replay version {version}, decoded with version {} layout",
                super::plan::NEWEST_VERSION
            ),
        }
    }
}
