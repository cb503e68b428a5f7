//! Systems moving data between the ECS and the session.

use bevy::prelude::*;
use log::info;

use crate::components::{PickupLink, PlayerBall};
use crate::input::ButtonEdge;
use crate::session::Session;

use super::{SessionSetupError, SessionSignal};

/// Resource holding the running level.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct SessionHandle(
    /// The simulation.
    pub Session,
);

/// Raw control input written by whatever reads the devices.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// Movement axis; `y` is forward, `x` is right.
    pub move_axis: Vec2,
    /// Whether the jump button is held.
    pub jump_held: bool,
}

/// Presentation camera vectors used for camera-relative movement.
///
/// Absent means movement uses world axes.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Camera forward direction.
    pub forward: Vec3,
    /// Camera right direction.
    pub right: Vec3,
}

/// Camera offset from the running screen shake, for the camera rig to add.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Deref)]
pub struct ShakeOffset(
    /// Offset along the camera's right and up axes.
    pub Vec2,
);

fn report_missing(commands: &mut Commands, reported: &mut bool, what: &'static str) {
    if *reported {
        return;
    }
    *reported = true;
    commands.trigger(SessionSetupError::MissingDependency(what));
}

/// Spawns entities for the player and every pickup.
pub fn spawn_level_system(mut commands: Commands, handle: Option<Res<SessionHandle>>) {
    let Some(session) = handle else {
        commands.trigger(SessionSetupError::MissingDependency("SessionHandle"));
        return;
    };
    let player = session.player();
    commands.spawn((
        PlayerBall,
        Name::new("PlayerBall"),
        Transform::from_translation(player.body().position)
            .with_scale(Vec3::splat(player.current_display_size())),
    ));
    for pickup in session.pickups().iter() {
        commands.spawn((
            PickupLink(pickup.id()),
            Name::new(pickup.id().to_string()),
            Transform::from_translation(pickup.position())
                .with_scale(Vec3::splat(pickup.scale())),
        ));
    }
    info!("spawned player and {} pickups", session.pickups().len());
}

/// Copies [`ControlInput`] into the session, turning the held jump button
/// into a one-shot request on its rising edge.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn apply_control_input_system(
    input: Res<ControlInput>,
    handle: Option<ResMut<SessionHandle>>,
    mut jump_edge: Local<ButtonEdge>,
) {
    let Some(mut session) = handle else {
        return;
    };
    session.set_move_axis(input.move_axis);
    if jump_edge.rising(input.jump_held) {
        session.request_jump();
    }
}

/// Runs one physics tick on the fixed clock.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn physics_step_system(
    mut commands: Commands,
    time: Res<Time>,
    camera: Option<Res<CameraView>>,
    handle: Option<ResMut<SessionHandle>>,
    mut reported: Local<bool>,
) {
    let Some(mut session) = handle else {
        report_missing(&mut commands, &mut reported, "SessionHandle");
        return;
    };
    let view = camera.map(|view| (view.forward, view.right));
    session.fixed_step(view, time.delta_secs());
}

/// Runs one presentation tick on the frame clock.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn frame_step_system(time: Res<Time>, handle: Option<ResMut<SessionHandle>>) {
    if let Some(mut session) = handle {
        session.frame_step(time.delta_secs());
    }
}

/// Triggers a [`SessionSignal`] for every event the session produced.
pub fn dispatch_session_events_system(
    mut commands: Commands,
    handle: Option<ResMut<SessionHandle>>,
) {
    let Some(mut session) = handle else {
        return;
    };
    for event in session.drain_events() {
        commands.trigger(SessionSignal(event));
    }
}

/// Writes session state onto entity transforms and the shake offset.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn sync_transforms_system(
    mut commands: Commands,
    handle: Option<Res<SessionHandle>>,
    mut shake: ResMut<ShakeOffset>,
    mut balls: Query<&mut Transform, (With<PlayerBall>, Without<PickupLink>)>,
    mut pickups: Query<(&PickupLink, &mut Transform), Without<PlayerBall>>,
    mut reported: Local<bool>,
) {
    let Some(session) = handle else {
        return;
    };
    shake.0 = session.shake_offset();

    let player = session.player();
    let mut found = false;
    for mut transform in &mut balls {
        found = true;
        transform.translation = player.body().position;
        transform.rotation = player.body().orientation;
        transform.scale = Vec3::splat(player.current_display_size());
    }
    if !found {
        report_missing(&mut commands, &mut reported, "PlayerBall entity");
    }

    for (link, mut transform) in &mut pickups {
        let Some(record) = session.pickups().get(**link) else {
            continue;
        };
        transform.translation = record.position();
        transform.scale = Vec3::splat(record.scale());
    }
}
