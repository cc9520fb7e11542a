//! Session: owns one path, its gait accumulators and the figure pose.
//!
//! Hosts keep a single `Session` per walking figure, feed it [`SessionCommand`]s and wall-clock
//! deltas, and read back [`FigurePose`] for display.

use crate::config::WalkerConfig;
use crate::driver::advance_with;
use crate::gait::GaitState;
use crate::inputs::SessionCommand;
use crate::loader::LoadedPath;
use crate::path::ControlPath;
use crate::pose::FigurePose;

#[derive(Clone, Debug)]
pub struct Session {
    cfg: WalkerConfig,
    path: ControlPath,
    gait: GaitState,
    pose: FigurePose,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LoadedPath::default_loop(), WalkerConfig::default())
    }
}

impl Session {
    pub fn new(loaded: LoadedPath, cfg: WalkerConfig) -> Self {
        if loaded.path.is_degenerate() {
            log::warn!(
                "session path has {} control points; the figure will not move",
                loaded.path.len()
            );
        }
        Self {
            cfg,
            gait: GaitState::with_time_step(loaded.time_step),
            path: loaded.path,
            pose: FigurePose::default(),
        }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.cfg
    }

    pub fn path(&self) -> &ControlPath {
        &self.path
    }

    pub fn gait(&self) -> &GaitState {
        &self.gait
    }

    pub fn gait_mut(&mut self) -> &mut GaitState {
        &mut self.gait
    }

    pub fn pose(&self) -> &FigurePose {
        &self.pose
    }

    /// Advance the figure by `delta_time` seconds of wall-clock time.
    pub fn tick(&mut self, delta_time: f32) {
        advance_with(
            &mut self.pose,
            &mut self.gait,
            &self.path,
            delta_time,
            &self.cfg.gait,
        );
    }

    pub fn apply(&mut self, cmd: SessionCommand) {
        let controls = &self.cfg.controls;
        match cmd {
            SessionCommand::SpeedUp => {
                self.gait.overall_speed += controls.speed_step;
            }
            SessionCommand::SlowDown => {
                self.gait.overall_speed =
                    (self.gait.overall_speed - controls.speed_step).max(controls.speed_floor);
            }
            SessionCommand::CadenceUp => {
                self.gait.leg_cadence += controls.cadence_step;
            }
            SessionCommand::CadenceDown => {
                self.gait.leg_cadence =
                    (self.gait.leg_cadence - controls.cadence_step).max(controls.cadence_floor);
            }
            SessionCommand::SetOverallSpeed { value } => {
                self.gait.overall_speed = value.max(controls.speed_floor);
            }
            SessionCommand::SetLegCadence { value } => {
                self.gait.leg_cadence = value.max(controls.cadence_floor);
            }
            SessionCommand::Reset => {
                self.gait.rewind();
                log::info!("animation reset");
                return;
            }
        }
        log::info!(
            "overall speed {:.2}, leg cadence {:.2}",
            self.gait.overall_speed,
            self.gait.leg_cadence
        );
    }

    pub fn apply_all<I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = SessionCommand>,
    {
        for cmd in cmds {
            self.apply(cmd);
        }
    }

    /// Swap in a new path and calibration. Accumulators restart; multipliers and pose are kept.
    pub fn replace_path(&mut self, loaded: LoadedPath) {
        self.path = loaded.path;
        self.gait.time_step = loaded.time_step;
        self.gait.rewind();
    }
}
