use bevy::prelude::*;
use walker_core::FigurePose;

use crate::components::{WalkerJoint, WalkerRoot};
use crate::resources::{FixedDt, PendingCommands, WalkerSession};

/// Root transform for a pose: yaw toward `forward`, then lean about the lateral axis.
pub fn root_transform(pose: &FigurePose) -> Transform {
    let p = pose.position;
    let rotation = Quat::from_rotation_y(pose.heading_degrees().to_radians())
        * Quat::from_rotation_x(pose.lean.to_radians());
    Transform {
        translation: Vec3::new(p.x, p.y, p.z),
        rotation,
        ..Transform::default()
    }
}

/// Drain pending commands into the session, then advance it by one fixed step.
pub fn advance_walker_system(
    mut session: ResMut<WalkerSession>,
    dt: Res<FixedDt>,
    mut pending: ResMut<PendingCommands>,
) {
    if !pending.0.is_empty() {
        log::debug!("applying {} walker command(s)", pending.0.len());
        let cmds = std::mem::take(&mut pending.0);
        session.0.apply_all(cmds);
    }
    session.0.tick(dt.0);
}

/// Copy the current pose onto `WalkerRoot` and `WalkerJoint` transforms. Scale is left alone.
pub fn apply_pose_system(
    session: Res<WalkerSession>,
    mut roots: Query<&mut Transform, With<WalkerRoot>>,
    mut joints: Query<(&WalkerJoint, &mut Transform), Without<WalkerRoot>>,
) {
    let pose = session.0.pose();
    let target = root_transform(pose);
    for mut tf in roots.iter_mut() {
        tf.translation = target.translation;
        tf.rotation = target.rotation;
    }
    for (joint, mut tf) in joints.iter_mut() {
        tf.rotation = Quat::from_rotation_x(pose.joint_angle(joint.0).to_radians());
    }
}
