//! Rigid-body state of the rolling ball.

use glam::{Quat, Vec3};

use crate::physics::sphere_inertia;
use crate::vector_math::{horizontal, with_horizontal};

/// Physical state owned by the simulation.
///
/// Locomotion and jump mutate the velocities each physics tick; the session
/// integrator advances position and orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Centre of the sphere in world space.
    pub position: Vec3,
    /// Linear velocity in units per second.
    pub linear_velocity: Vec3,
    /// Angular velocity as a scaled axis, radians per second.
    pub angular_velocity: Vec3,
    /// Accumulated rolling orientation.
    pub orientation: Quat,
    mass: f32,
    inertia: f32,
}

impl Body {
    /// Creates a body at rest.
    #[must_use]
    pub fn new(position: Vec3, mass: f32, radius: f32) -> Self {
        Self {
            position,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            mass,
            inertia: sphere_inertia(mass, radius),
        }
    }

    /// Current mass.
    #[must_use]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Moment of inertia about any axis through the centre.
    #[must_use]
    pub const fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Updates mass and radius together so the inertia stays consistent.
    pub fn set_mass_properties(&mut self, mass: f32, radius: f32) {
        self.mass = mass;
        self.inertia = sphere_inertia(mass, radius);
    }

    /// Ground-plane part of the linear velocity.
    #[must_use]
    pub const fn horizontal_velocity(&self) -> Vec3 {
        horizontal(self.linear_velocity)
    }

    /// Replaces the ground-plane velocity, keeping the vertical component.
    pub const fn set_horizontal_velocity(&mut self, planar: Vec3) {
        self.linear_velocity = with_horizontal(self.linear_velocity, planar);
    }

    /// Teleports the body and clears all motion.
    pub fn reset_at(&mut self, position: Vec3) {
        self.position = position;
        self.linear_velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
        self.orientation = Quat::IDENTITY;
    }
}
