//! Observable skeleton state: root transform plus two legs with hip and knee joints.
//! All angles are in degrees. Written by the driver, read by renderers/adapters.

use serde::{Deserialize, Serialize};

use crate::vec3::Point3;

/// Hip and knee rotation of one leg (degrees about the lateral axis).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegPose {
    pub hip: f32,
    /// Always >= 0: knees only fold one way.
    pub knee: f32,
}

/// The four articulated joints of the figure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
}

impl Joint {
    pub const ALL: [Joint; 4] = [
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
    ];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigurePose {
    /// Base of the torso in world space.
    pub position: Point3,
    /// Unit facing direction (or zero when the path gives no direction).
    pub forward: Point3,
    /// Forward lean of the torso, clamped to the configured maximum.
    pub lean: f32,
    pub left: LegPose,
    pub right: LegPose,
}

impl Default for FigurePose {
    fn default() -> Self {
        Self {
            position: Point3::ZERO,
            forward: Point3::FORWARD,
            lean: 0.0,
            left: LegPose::default(),
            right: LegPose::default(),
        }
    }
}

impl FigurePose {
    pub fn joint_angle(&self, joint: Joint) -> f32 {
        match joint {
            Joint::LeftHip => self.left.hip,
            Joint::RightHip => self.right.hip,
            Joint::LeftKnee => self.left.knee,
            Joint::RightKnee => self.right.knee,
        }
    }

    /// Yaw about +Y that turns the default facing (+Z) into `forward`.
    pub fn heading_degrees(&self) -> f32 {
        self.forward.x.atan2(self.forward.z).to_degrees()
    }
}
