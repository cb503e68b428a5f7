//! Default tuning values shared across the simulation.
//!
//! Every value here is the default for a field of
//! [`RollerConfig`](crate::config::RollerConfig); a config file overrides
//! them per session.

/// Downward acceleration applied by the integrator, in units per second².
pub const GRAVITY: f32 = -9.81;
/// Fixed physics timestep in seconds.
pub const FIXED_TIMESTEP: f32 = 0.02;
/// Maximum falling speed.
pub const TERMINAL_VELOCITY: f32 = 50.0;
/// Fraction of angular velocity removed per second while rolling.
pub const ANGULAR_DAMPING: f32 = 0.05;
/// Rate per second at which ground contact pulls spin toward rolling without
/// slip.
pub const ROLLING_GRIP: f32 = 20.0;
/// Bodies falling below this height are returned to the spawn point.
pub const KILL_PLANE: f32 = -50.0;

/// Target horizontal speed while input is held.
pub const MOVE_SPEED: f32 = 10.0;
/// Largest horizontal velocity change per second.
pub const ACCELERATION: f32 = 40.0;
/// Interpolation rate toward rest when no input is held.
pub const DECELERATION: f32 = 5.0;
/// Hard cap on horizontal speed.
pub const MAX_SPEED: f32 = 15.0;
/// Scales rolling spin relative to rolling without slip.
pub const SPIN_MULTIPLIER: f32 = 1.0;
/// Cap on angular speed in radians per second.
pub const MAX_ANGULAR_SPEED: f32 = 50.0;

/// Apex height of a jump above the launch point.
pub const JUMP_HEIGHT: f32 = 2.0;

/// Extra ray length beyond the body radius when probing for ground.
pub const GROUND_CHECK_BUFFER: f32 = 0.1;
/// Layer bits treated as ground by default.
pub const GROUND_LAYERS: u32 = 0b1;

/// Size of the player before any pickups.
pub const BASE_SIZE: f32 = 1.0;
/// Upper bound of the gating size.
pub const MAX_SIZE: f32 = 10.0;
/// Size gained per point.
pub const GROWTH_RATE: f32 = 0.1;
/// Mass gained per point.
pub const MASS_GROWTH_RATE: f32 = 0.1;
/// Seconds the display size takes to reach a new target.
pub const GROWTH_DURATION: f32 = 0.5;
/// Body radius per unit of size; a unit sphere has radius 0.5.
pub const RADIUS_PER_SIZE: f32 = 0.5;

/// Shake intensity used when a growth event carries no override.
pub const DEFAULT_SHAKE_INTENSITY: f32 = 0.2;
/// Seconds a screen shake lasts.
pub const SHAKE_DURATION: f32 = 0.25;
/// Oscillation frequency of the shake offset in hertz.
pub const SHAKE_FREQUENCY: f32 = 25.0;

/// Seconds a held pickup stays attached before shrinking away.
pub const DESPAWN_DELAY: f32 = 8.0;
/// Seconds the shrink-to-zero animation takes.
pub const DESPAWN_DURATION: f32 = 0.5;

/// Length of a round in seconds.
pub const ROUND_DURATION: f32 = 120.0;
/// Size the player must reach to win the round.
pub const ROUND_TARGET_SIZE: f32 = 5.0;

/// Smallest radius used in divisions.
pub const MIN_RADIUS: f32 = 1e-3;
