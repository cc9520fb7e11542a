//! Gait accumulators.
//!
//! Two independent continuous counters with different wrap rules:
//! - `path_param` in [0,1]: advanced by scaled wall-clock time, hard reset to 0 once it exceeds 1.
//! - `gait_phase` in [0, 2pi): advanced by measured travel distance, wrapped modulo 2pi.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_STEP: f32 = 0.01;
pub const DEFAULT_LEG_CADENCE: f32 = 0.3;
pub const DEFAULT_OVERALL_SPEED: f32 = 0.5;

/// Hard reset: anything past the end of the path restarts the loop at 0.
#[inline]
pub fn wrap_path_param(t: f32) -> f32 {
    if t > 1.0 {
        0.0
    } else {
        t
    }
}

/// Continuous modulo wrap into [0, 2pi).
#[inline]
pub fn wrap_gait_phase(phase: f32) -> f32 {
    if phase >= TAU {
        phase.rem_euclid(TAU)
    } else {
        phase
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaitState {
    pub path_param: f32,
    /// Path-specific calibration loaded with the control points.
    pub time_step: f32,
    pub gait_phase: f32,
    /// Multiplier on how fast the legs cycle per unit distance.
    pub leg_cadence: f32,
    /// Multiplier on how fast the path is traversed.
    pub overall_speed: f32,
    /// Distance moved during the last non-degenerate tick.
    #[serde(default)]
    pub last_speed: f32,
}

impl Default for GaitState {
    fn default() -> Self {
        Self {
            path_param: 0.0,
            time_step: DEFAULT_TIME_STEP,
            gait_phase: 0.0,
            leg_cadence: DEFAULT_LEG_CADENCE,
            overall_speed: DEFAULT_OVERALL_SPEED,
            last_speed: 0.0,
        }
    }
}

impl GaitState {
    pub fn with_time_step(time_step: f32) -> Self {
        Self {
            time_step,
            ..Self::default()
        }
    }

    /// Advance the path parameter; returns true when it wrapped back to 0.
    pub fn advance_path_param(&mut self, delta: f32) -> bool {
        let next = self.path_param + delta;
        self.path_param = wrap_path_param(next);
        self.path_param != next
    }

    pub fn advance_gait_phase(&mut self, delta: f32) {
        self.gait_phase = wrap_gait_phase(self.gait_phase + delta);
    }

    /// Restart both accumulators; multipliers and calibration are kept.
    pub fn rewind(&mut self) {
        self.path_param = 0.0;
        self.gait_phase = 0.0;
        self.last_speed = 0.0;
    }
}
