#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate for a rolling ball that grows by collecting pickups.
//!
//! The simulation core ([`Session`], [`Player`] and the controllers they
//! drive) is plain Rust with no engine types. [`RollerPlugin`] hosts it in a
//! Bevy app, running physics on `FixedUpdate` and presentation on `Update`.
pub mod animator;
pub mod body;
pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod easing;
pub mod ground;
pub mod growth;
pub mod input;
pub mod jump;
pub mod level;
pub mod locomotion;
pub mod logging;
pub mod physics;
pub mod pickup;
pub mod player;
pub mod round;
pub mod session;
pub mod session_sync;
pub mod shake;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use animator::{AnimatorState, GrowthAnimator};
pub use body::Body;
pub use camera::{CameraBasis, CameraRig};
pub use components::{PickupLink, PlayerBall};
pub use config::{ConfigError, PhysicsSettings, RollerConfig};
pub use easing::{Ease, Tween, COMPLETION_EPSILON};
pub use ground::{GroundProbe, GroundSensor, GroundSettings, LayerMask, Platform, RayHit, Terrain};
pub use growth::{GrowthChange, GrowthModel, GrowthSettings};
pub use input::{ButtonEdge, InputSample};
pub use jump::{JumpController, JumpOutcome, JumpSettings};
pub use level::LevelLayout;
pub use locomotion::{Locomotion, LocomotionSettings, Motion};
pub use logging::init as init_logging;
pub use physics::{jump_launch_velocity, rolling_angular_speed};
pub use pickup::{
    resolve_overlap, AnchorPose, Collectible, Collector, DespawnSettings, PickupField,
    PickupFieldError, PickupId, PickupOutcome, PickupRecord, PickupRegistry, PickupSpawn,
    PickupState,
};
pub use player::{Player, PlayerTick};
pub use round::{RoundClock, RoundOutcome, RoundSettings};
pub use session::{Session, SessionEvent};
pub use session_sync::{
    CameraView, ControlInput, RestartRound, RollerPlugin, SessionHandle, SessionSetupError,
    SessionSignal, ShakeOffset,
};
pub use shake::{ScreenShake, ShakeSettings};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use roller::prelude::*;
    //! ```

    pub use crate::pickup::{Collectible, Collector};
    pub use crate::ControlInput;
    pub use crate::RollerConfig;
    pub use crate::RollerPlugin;
    pub use crate::Session;
    pub use crate::SessionEvent;
    pub use glam::{Vec2, Vec3};
}
