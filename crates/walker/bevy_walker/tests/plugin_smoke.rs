use bevy::prelude::*;
use bevy_walker::{
    root_transform, FixedDt, PendingCommands, WalkerJoint, WalkerPlugin, WalkerRoot,
    WalkerSession,
};
use walker_core::{Joint, Session, SessionCommand, WalkerConfig};

fn app_with_plugin() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(WalkerPlugin);
    app
}

#[test]
fn plugin_inserts_session_resources() {
    let app = app_with_plugin();
    assert!(app.world().get_resource::<WalkerSession>().is_some());
    assert!(app.world().get_resource::<PendingCommands>().is_some());
    let dt = app.world().resource::<FixedDt>();
    assert!((dt.0 - 1.0 / 60.0).abs() < 1e-9);
}

#[test]
fn plugin_keeps_a_preinserted_session() {
    let mut app = App::new();
    let mut session = Session::default();
    session.apply(SessionCommand::SetOverallSpeed { value: 3.0 });
    app.insert_resource(WalkerSession(session));
    app.add_plugins(MinimalPlugins).add_plugins(WalkerPlugin);

    let speed = app.world().resource::<WalkerSession>().0.gait().overall_speed;
    assert!((speed - 3.0).abs() < 1e-6);
}

/// it should advance the session on FixedUpdate and mirror the pose onto tagged transforms
#[test]
fn fixed_update_moves_root_and_joints() {
    let mut app = app_with_plugin();
    let root = app.world_mut().spawn((WalkerRoot, Transform::default())).id();
    let hip = app
        .world_mut()
        .spawn((WalkerJoint(Joint::LeftHip), Transform::default()))
        .id();
    let knee = app
        .world_mut()
        .spawn((WalkerJoint(Joint::RightKnee), Transform::from_scale(Vec3::splat(2.0))))
        .id();

    for _ in 0..30 {
        app.world_mut().run_schedule(FixedUpdate);
    }

    let session = &app.world().resource::<WalkerSession>().0;
    assert!(session.gait().path_param > 0.0);
    let pose = session.pose().clone();

    let root_tf = app.world().get::<Transform>(root).expect("root transform");
    let expected = root_transform(&pose);
    assert_eq!(root_tf.translation, expected.translation);
    assert!(root_tf.rotation.angle_between(expected.rotation) < 1e-5);
    assert!((root_tf.translation.length() - 3.0).abs() < 0.2);

    let hip_tf = app.world().get::<Transform>(hip).expect("hip transform");
    let expected_hip = Quat::from_rotation_x(pose.left.hip.to_radians());
    assert!(hip_tf.rotation.angle_between(expected_hip) < 1e-5);

    let knee_tf = app.world().get::<Transform>(knee).expect("knee transform");
    assert_eq!(knee_tf.scale, Vec3::splat(2.0));
    let expected_knee = Quat::from_rotation_x(pose.right.knee.to_radians());
    assert!(knee_tf.rotation.angle_between(expected_knee) < 1e-5);
}

#[test]
fn pending_commands_are_applied_once() {
    let mut app = app_with_plugin();
    app.world_mut()
        .resource_mut::<PendingCommands>()
        .0
        .extend([SessionCommand::SpeedUp, SessionCommand::CadenceUp]);

    app.world_mut().run_schedule(FixedUpdate);
    app.world_mut().run_schedule(FixedUpdate);

    assert!(app.world().resource::<PendingCommands>().0.is_empty());
    let gait = app.world().resource::<WalkerSession>().0.gait().clone();
    assert!((gait.overall_speed - 0.51).abs() < 1e-6);
    assert!((gait.leg_cadence - 0.4).abs() < 1e-6);
}

#[test]
fn fixture_path_session_runs_in_the_app() -> anyhow::Result<()> {
    let loaded = walker_core::load_path_file(walker_test_fixtures::paths::path("hill-catmull")?)?;
    let mut app = App::new();
    app.insert_resource(WalkerSession(Session::new(loaded, WalkerConfig::default())));
    app.add_plugins(MinimalPlugins).add_plugins(WalkerPlugin);
    app.world_mut().insert_resource(FixedDt(0.5));
    let root = app.world_mut().spawn((WalkerRoot, Transform::default())).id();

    for _ in 0..20 {
        app.world_mut().run_schedule(FixedUpdate);
    }
    let root_tf = app.world().get::<Transform>(root).expect("root transform");
    // The hill path runs along +X between x = -4 and x = 4.
    assert!(root_tf.translation.x > -4.0 - 1e-4 && root_tf.translation.x < 4.0 + 1e-4);
    assert!(root_tf.translation.y >= -1e-4);
    Ok(())
}
