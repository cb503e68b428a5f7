//! Camera-relative rolling locomotion.
//!
//! Input is turned into a velocity target on the ground plane and reached
//! through bounded per-tick velocity changes. The vertical component of the
//! body's velocity belongs to gravity and the jump controller and is never
//! touched here.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::camera::CameraBasis;
use crate::physics::{decay_factor, rolling_angular_speed};
use crate::vector_math::{clamp_magnitude, sanitize_axis};
use crate::{
    ACCELERATION, DECELERATION, MAX_ANGULAR_SPEED, MAX_SPEED, MOVE_SPEED, SPIN_MULTIPLIER,
};

/// Locomotion tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionSettings {
    /// Target ground speed at full input.
    pub move_speed: f32,
    /// Largest velocity change per second while driving.
    pub acceleration: f32,
    /// Coasting decay rate with no input.
    pub deceleration: f32,
    /// Hard cap on ground speed.
    pub max_speed: f32,
    /// Rolling spin relative to rolling without slip.
    pub spin_multiplier: f32,
    /// Cap on angular speed in radians per second.
    pub max_angular_speed: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            max_speed: MAX_SPEED,
            spin_multiplier: SPIN_MULTIPLIER,
            max_angular_speed: MAX_ANGULAR_SPEED,
        }
    }
}

/// What a locomotion step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// No input; the body coasted toward rest.
    Coasting,
    /// Input drove the body toward the target velocity.
    Driving,
}

/// Drives the body from the movement axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Locomotion {
    settings: LocomotionSettings,
}

impl Locomotion {
    /// Creates a controller.
    #[must_use]
    pub const fn new(settings: LocomotionSettings) -> Self {
        Self { settings }
    }

    /// Tuning in use.
    #[must_use]
    pub const fn settings(&self) -> &LocomotionSettings {
        &self.settings
    }

    /// Runs one physics tick.
    ///
    /// `radius` is the current display radius of the ball; rolling spin is
    /// derived from it so a bigger ball turns more slowly at the same speed.
    pub fn step(
        &self,
        body: &mut Body,
        move_axis: Vec2,
        basis: CameraBasis,
        radius: f32,
        dt: f32,
    ) -> Motion {
        let axis = sanitize_axis(move_axis);
        let current = body.horizontal_velocity();
        let direction = if axis == Vec2::ZERO {
            None
        } else {
            // Rescaled so tiny axes keep their direction through normalisation.
            let scaled = axis / axis.abs().max_element();
            (basis.forward * scaled.y + basis.right * scaled.x).try_normalize()
        };
        let Some(direction) = direction else {
            let factor = decay_factor(self.settings.deceleration, dt);
            body.set_horizontal_velocity(current.lerp(Vec3::ZERO, factor));
            return Motion::Coasting;
        };

        let desired = direction * self.settings.move_speed;
        let change = clamp_magnitude(desired - current, self.settings.acceleration * dt);
        let planar = clamp_magnitude(current + change, self.settings.max_speed);
        body.set_horizontal_velocity(planar);
        self.spin(body, planar, radius, dt);
        Motion::Driving
    }

    fn spin(&self, body: &mut Body, planar: Vec3, radius: f32, dt: f32) {
        let Some(heading) = planar.try_normalize() else {
            return;
        };
        let axis = Vec3::Y.cross(heading);
        let speed = self.rolling_speed(planar.length(), radius);
        body.angular_velocity = clamp_magnitude(body.angular_velocity + axis * speed * dt, speed);
    }

    /// Spin about `Y × heading` that rolls a ball of `radius` without slip at
    /// ground `speed`, capped at `max_angular_speed`.
    #[must_use]
    pub fn rolling_spin(&self, planar_velocity: Vec3, radius: f32) -> Vec3 {
        let Some(heading) = planar_velocity.try_normalize() else {
            return Vec3::ZERO;
        };
        Vec3::Y.cross(heading) * self.rolling_speed(planar_velocity.length(), radius)
    }

    fn rolling_speed(&self, speed: f32, radius: f32) -> f32 {
        rolling_angular_speed(speed, radius, self.settings.spin_multiplier)
            .min(self.settings.max_angular_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn moving_body() -> Body {
        let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
        body.linear_velocity = Vec3::new(4.0, -3.0, 0.0);
        body
    }

    #[rstest]
    fn coasting_keeps_vertical_velocity(mut moving_body: Body) {
        let motion = Locomotion::default().step(
            &mut moving_body,
            Vec2::ZERO,
            CameraBasis::WORLD,
            0.5,
            0.1,
        );
        assert_eq!(motion, Motion::Coasting);
        assert_relative_eq!(moving_body.linear_velocity.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(moving_body.linear_velocity.y, -3.0);
    }

    #[rstest]
    fn non_finite_input_coasts(mut moving_body: Body) {
        let motion = Locomotion::default().step(
            &mut moving_body,
            Vec2::new(f32::NAN, 1.0),
            CameraBasis::WORLD,
            0.5,
            0.1,
        );
        assert_eq!(motion, Motion::Coasting);
    }

    #[rstest]
    fn change_is_bounded_by_acceleration() {
        let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
        Locomotion::default().step(&mut body, Vec2::Y, CameraBasis::WORLD, 0.5, 0.02);
        assert_relative_eq!(body.linear_velocity.z, -0.8, epsilon = 1e-5);
        assert_relative_eq!(body.linear_velocity.x, 0.0);
    }

    #[rstest]
    fn tiny_input_still_drives() {
        let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
        let motion = Locomotion::default().step(
            &mut body,
            Vec2::new(1e-20, 0.0),
            CameraBasis::WORLD,
            0.5,
            0.02,
        );
        assert_eq!(motion, Motion::Driving);
        assert!(body.linear_velocity.x > 0.0);
    }

    #[rstest]
    fn spin_never_outruns_rolling_contact() {
        let locomotion = Locomotion::default();
        let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
        for _ in 0..500 {
            locomotion.step(&mut body, Vec2::Y, CameraBasis::WORLD, 0.5, 0.02);
        }
        let rolling = locomotion.rolling_spin(body.horizontal_velocity(), 0.5);
        assert_relative_eq!(body.angular_velocity.length(), rolling.length(), epsilon = 1e-3);
    }

    #[rstest]
    fn forward_roll_spins_about_negative_x() {
        let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
        Locomotion::default().step(&mut body, Vec2::Y, CameraBasis::WORLD, 0.5, 0.02);
        assert!(body.angular_velocity.x < 0.0);
        assert_relative_eq!(body.angular_velocity.y, 0.0);
    }
}
