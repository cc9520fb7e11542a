use bevy::prelude::*;
use walker_core::Session;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{WalkerJoint, WalkerRoot};
pub use resources::{FixedDt, PendingCommands, WalkerSession};
pub use systems::{advance_walker_system, apply_pose_system, root_transform};

/// Ticks a [`WalkerSession`] on `FixedUpdate` and writes the pose into tagged transforms.
///
/// A `WalkerSession` inserted before the plugin is kept; otherwise the default loop is used.
pub struct WalkerPlugin;

impl Plugin for WalkerPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<WalkerSession>() {
            app.insert_resource(WalkerSession(Session::default()));
        }
        app.init_resource::<FixedDt>()
            .init_resource::<PendingCommands>()
            .add_systems(
                FixedUpdate,
                (advance_walker_system, apply_pose_system).chain(),
            );
    }
}
