//! Per-frame walk driver.
//!
//! Each tick advances the path parameter by scaled wall-clock time, then measures how far the
//! figure actually moved. That distance, not elapsed time, drives lean and the leg cycle, so the
//! legs stop when the figure stops.

use std::f32::consts::PI;

use crate::config::GaitConfig;
use crate::gait::GaitState;
use crate::path::{evaluate, tangent, ControlPath};
use crate::pose::{FigurePose, LegPose};

/// Advance one frame using the default [`GaitConfig`].
pub fn advance(pose: &mut FigurePose, gait: &mut GaitState, path: &ControlPath, delta_time: f32) {
    advance_with(pose, gait, path, delta_time, &GaitConfig::default());
}

/// Advance one frame. Degenerate paths leave `pose` and `gait` untouched.
///
/// Multipliers on `gait` are used as given; keeping them positive is the caller's job.
pub fn advance_with(
    pose: &mut FigurePose,
    gait: &mut GaitState,
    path: &ControlPath,
    delta_time: f32,
    cfg: &GaitConfig,
) {
    if path.is_degenerate() {
        return;
    }

    let delta = delta_time * gait.overall_speed * gait.time_step;
    if gait.advance_path_param(delta) {
        log::debug!("path parameter wrapped to start of loop");
    }

    let position = evaluate(path, gait.path_param);
    let speed = pose.position.distance(position);
    gait.last_speed = speed;

    pose.position = position;
    pose.forward = tangent(path, gait.path_param);
    pose.lean = (speed * cfg.lean_gain).max(0.0).min(cfg.lean_max_deg.max(0.0));

    gait.advance_gait_phase(speed * gait.leg_cadence * cfg.stride_factor);

    pose.left = leg_pose(gait.gait_phase, cfg);
    pose.right = leg_pose(gait.gait_phase + PI, cfg);
}

/// Hip swings sinusoidally; the knee folds only while `sin(phase)` is negative.
#[inline]
fn leg_pose(phase: f32, cfg: &GaitConfig) -> LegPose {
    let s = phase.sin();
    LegPose {
        hip: s * cfg.hip_swing_deg,
        knee: (-s).max(0.0) * cfg.knee_bend_deg,
    }
}
