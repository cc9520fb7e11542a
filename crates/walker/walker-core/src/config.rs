//! Tunables for the walk cycle and the session controls.
//!
//! Every struct deserializes from partial JSON; absent fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Constants mapping measured speed to lean and joint angles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitConfig {
    /// Peak hip rotation in degrees.
    pub hip_swing_deg: f32,
    /// Peak knee fold in degrees.
    pub knee_bend_deg: f32,
    /// Degrees of lean per unit of distance moved in one tick.
    pub lean_gain: f32,
    pub lean_max_deg: f32,
    /// Phase advance per unit distance, before the cadence multiplier.
    pub stride_factor: f32,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self {
            hip_swing_deg: 30.0,
            knee_bend_deg: 20.0,
            lean_gain: 5.0,
            lean_max_deg: 15.0,
            stride_factor: 2.0,
        }
    }
}

/// Step sizes and floors applied by [`crate::SessionCommand`]s.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub speed_step: f32,
    pub speed_floor: f32,
    pub cadence_step: f32,
    pub cadence_floor: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            speed_step: 0.01,
            speed_floor: 0.01,
            cadence_step: 0.1,
            cadence_floor: 0.1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub gait: GaitConfig,
    pub controls: ControlConfig,
}

impl WalkerConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
