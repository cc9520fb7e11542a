use bevy::prelude::*;
use walker_core::{Session, SessionCommand};

/// The walking figure's session (path, gait accumulators, pose).
#[derive(Resource)]
pub struct WalkerSession(pub Session);

/// Commands applied at the start of the next fixed tick, then cleared.
#[derive(Resource, Default)]
pub struct PendingCommands(pub Vec<SessionCommand>);

/// Fixed timestep handed to `Session::tick` (seconds per tick).
#[derive(Resource)]
pub struct FixedDt(pub f32);

impl Default for FixedDt {
    fn default() -> Self {
        Self(1.0 / 60.0)
    }
}
