//! Bevy plugin wiring the session into the schedules.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, error, info};
use thiserror::Error;

use crate::config::RollerConfig;
use crate::session::{Session, SessionEvent};

use super::systems::{
    apply_control_input_system, dispatch_session_events_system, frame_step_system,
    physics_step_system, spawn_level_system, sync_transforms_system, ControlInput, SessionHandle,
    ShakeOffset,
};

/// Event raised when the session cannot be wired up as configured.
///
/// None of these stop the app: the affected feature is skipped or defaults
/// are used instead.
#[derive(Event, Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionSetupError {
    /// A resource or entity the systems rely on is absent.
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),
    /// The supplied configuration failed validation; defaults are in use.
    #[error("invalid configuration, using defaults: {0}")]
    InvalidConfig(String),
}

/// Observer event carrying one [`SessionEvent`].
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SessionSignal(
    /// What happened.
    pub SessionEvent,
);

/// Trigger this to start a new round.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestartRound;

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_setup_error(event: On<SessionSetupError>) {
    error!("session setup: {}", event.event());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_session_signal(event: On<SessionSignal>) {
    match event.event().0 {
        SessionEvent::RoundEnded(outcome) => info!("round ended: {outcome:?}"),
        SessionEvent::Grew { size, shake } => info!("grew to {size:.2} (shake {shake:.2})"),
        other => debug!("{other:?}"),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn restart_round(_event: On<RestartRound>, handle: Option<ResMut<SessionHandle>>) {
    if let Some(mut session) = handle {
        session.restart_round();
    }
}

/// Installs the session, its resources and the systems driving it.
///
/// Reads a [`RollerConfig`] resource if one was inserted before the plugin
/// is added, and falls back to defaults otherwise.
#[derive(Debug, Default)]
pub struct RollerPlugin;

impl Plugin for RollerPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_setup_error);
        app.add_observer(log_session_signal);
        app.add_observer(restart_round);

        let requested = app
            .world()
            .get_resource::<RollerConfig>()
            .cloned()
            .unwrap_or_default();
        let config = match requested.validate() {
            Ok(()) => requested,
            Err(err) => {
                app.world_mut()
                    .trigger(SessionSetupError::InvalidConfig(err.to_string()));
                RollerConfig::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_seconds(f64::from(
            config.physics.fixed_timestep,
        )));
        app.insert_resource(SessionHandle(Session::new(&config)));
        app.insert_resource(config);
        app.init_resource::<ControlInput>();
        app.init_resource::<ShakeOffset>();

        app.add_systems(Startup, spawn_level_system);
        app.add_systems(FixedUpdate, physics_step_system);
        app.add_systems(
            Update,
            (
                apply_control_input_system,
                frame_step_system,
                dispatch_session_events_system,
            )
                .chain(),
        );
        app.add_systems(PostUpdate, sync_transforms_system);
    }
}
