//! Interpolated poses and their mapping into consumer world space.

use serde::{Deserialize, Serialize};

use crate::replay::Vec3;

/// Linear interpolation: `a + (b - a) * t`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position and orientation for one instant of playback, in recorded space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub position: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// Frame the interpolation starts from.
    pub frame_index: usize,
    /// Fraction of the way to the next frame, in [0, 1].
    pub t: f32,
    /// Replay zone offset, forwarded untouched.
    pub zone_offset: [f32; 2],
}

/// How recorded coordinates are laid out in the consumer's world.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AxisMapping {
    /// Keep the recorded Z-up axes.
    #[default]
    Source,
    /// Y-up renderer: recorded Z becomes Y, recorded Y becomes -Z.
    YUp,
}

impl AxisMapping {
    /// Name as written in config files and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            AxisMapping::Source => "source",
            AxisMapping::YUp => "y-up",
        }
    }
}

/// A pose placed in consumer world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldPose {
    pub position: Vec3,
    /// Euler angles in radians (x, y, z), applied in YXZ order for `YUp`.
    pub rotation: Vec3,
}

impl Pose {
    /// Apply the zone offset and the axis remapping.
    ///
    /// The offset is added to recorded x/y before any remapping, so both
    /// mappings translate exactly by the offset.
    pub fn to_world(&self, mapping: AxisMapping) -> WorldPose {
        let [zx, zy] = self.zone_offset;
        let x = self.position.x + zx;
        let y = self.position.y + zy;
        let z = self.position.z;

        match mapping {
            AxisMapping::Source => WorldPose {
                position: Vec3::new(x, y, z),
                rotation: Vec3::new(self.pitch.to_radians(), self.yaw.to_radians(), 0.0),
            },
            AxisMapping::YUp => WorldPose {
                position: Vec3::new(x, z, -y),
                rotation: Vec3::new(
                    (-self.pitch).to_radians(),
                    (self.yaw - 90.0).to_radians(),
                    0.0,
                ),
            },
        }
    }
}
