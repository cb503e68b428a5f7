//! Bevy integration for the level simulation.
//!
//! The [`Session`](crate::Session) stays the source of truth. This module
//! feeds it from ECS resources on the fixed and frame schedules, turns its
//! events into observer triggers, and copies its state back onto entity
//! transforms.

mod plugin;
mod systems;

pub use plugin::{RestartRound, RollerPlugin, SessionSetupError, SessionSignal};
pub use systems::{
    apply_control_input_system, dispatch_session_events_system, frame_step_system,
    physics_step_system, spawn_level_system, sync_transforms_system, CameraView, ControlInput,
    SessionHandle, ShakeOffset,
};
