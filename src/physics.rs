//! Physics helper functions.
//!
//! Closed-form helpers used by the jump and locomotion controllers. They take
//! plain scalars so they can be exercised directly in unit tests.

use crate::MIN_RADIUS;

/// Computes the launch speed that makes a jump peak at `height`.
///
/// Uses `v = sqrt(2·|g|·h)`, so the apex does not depend on the frame rate.
/// Non-positive or non-finite heights and gravities yield `0.0`.
///
/// # Examples
///
/// ```
/// use roller::jump_launch_velocity;
/// let v = jump_launch_velocity(-9.81, 2.0);
/// assert!((v * v / (2.0 * 9.81) - 2.0).abs() < 1e-5);
/// assert_eq!(jump_launch_velocity(-9.81, 0.0), 0.0);
/// ```
#[must_use]
pub fn jump_launch_velocity(gravity: f32, height: f32) -> f32 {
    let g = gravity.abs();
    if !g.is_finite() || !height.is_finite() || height <= 0.0 {
        return 0.0;
    }
    (2.0 * g * height).sqrt()
}

/// Angular speed in radians per second for a ball of `radius` travelling at
/// `speed`, scaled by `spin_multiplier`.
///
/// A multiplier of one is rolling without slip.
///
/// # Examples
///
/// ```
/// use roller::rolling_angular_speed;
/// assert!((rolling_angular_speed(5.0, 0.5, 1.0) - 10.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn rolling_angular_speed(speed: f32, radius: f32, spin_multiplier: f32) -> f32 {
    speed / radius.max(MIN_RADIUS) * spin_multiplier
}

/// Linear-interpolation factor applied per tick when coasting to rest.
///
/// The factor is clamped to `[0, 1]` so large steps stop the body instead of
/// reversing it.
#[must_use]
pub fn decay_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// Moment of inertia of a solid sphere.
#[must_use]
pub fn sphere_inertia(mass: f32, radius: f32) -> f32 {
    0.4 * mass * radius * radius
}
