//! The rolling player: body, controllers, growth and held pickups.
//!
//! [`Player`] is the aggregate the rest of the game talks to. It owns its
//! body and growth state outright and remembers which pickups it holds, but
//! the pickup records themselves stay with the level.

use glam::Vec3;
use log::warn;

use crate::animator::GrowthAnimator;
use crate::body::Body;
use crate::camera::CameraBasis;
use crate::config::RollerConfig;
use crate::ground::{GroundProbe, GroundSensor};
use crate::growth::{GrowthChange, GrowthModel};
use crate::input::InputSample;
use crate::jump::{JumpController, JumpOutcome};
use crate::locomotion::{Locomotion, Motion};
use crate::pickup::{AnchorPose, Collectible, Collector, PickupRegistry};

/// Summary of one physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTick {
    /// Grounded state sampled at the start of the tick.
    pub grounded: bool,
    /// What the jump controller did.
    pub jump: JumpOutcome,
    /// What locomotion did.
    pub motion: Motion,
}

/// Player-controlled rolling ball.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    body: Body,
    growth: GrowthModel,
    animator: GrowthAnimator,
    registry: PickupRegistry,
    sensor: GroundSensor,
    jump: JumpController,
    locomotion: Locomotion,
    input: InputSample,
    anchor_offset: Option<Vec3>,
    spawn: Vec3,
}

impl Player {
    /// Creates a player at `spawn` with base size and zero points.
    #[must_use]
    pub fn new(spawn: Vec3, config: &RollerConfig) -> Self {
        let growth = GrowthModel::new(config.growth);
        let base = growth.target_size();
        let radius = base * config.growth.radius_per_size;
        Self {
            body: Body::new(spawn, growth.mass(), radius),
            animator: GrowthAnimator::new(base, config.growth.duration, config.growth.ease),
            growth,
            registry: PickupRegistry::new(),
            sensor: GroundSensor::new(config.ground),
            jump: JumpController::new(config.jump, config.physics.gravity),
            locomotion: Locomotion::new(config.locomotion),
            input: InputSample::default(),
            anchor_offset: Some(Vec3::ZERO),
            spawn,
        }
    }

    /// Removes the pickup anchor, which disables collecting.
    #[must_use]
    pub const fn without_pickup_anchor(mut self) -> Self {
        self.anchor_offset = None;
        self
    }

    /// Runs the physics-clock controllers: ground sensor, then jump, then
    /// locomotion.
    pub fn fixed_step<P: GroundProbe + ?Sized>(
        &mut self,
        probe: &P,
        basis: CameraBasis,
        dt: f32,
    ) -> PlayerTick {
        let radius = self.radius();
        let grounded = self.sensor.sample(probe, self.body.position, radius);
        let jump = self.jump.step(&mut self.body, &mut self.input, grounded);
        let motion =
            self.locomotion
                .step(&mut self.body, self.input.move_axis, basis, radius, dt);
        PlayerTick {
            grounded,
            jump,
            motion,
        }
    }

    /// Runs the presentation-clock work and returns the displayed size.
    pub fn frame_step(&mut self, dt: f32) -> f32 {
        let displayed = self.animator.advance(dt);
        self.body.set_mass_properties(self.growth.mass(), self.radius());
        displayed
    }

    /// Adds points, updating mass at once and retargeting the display size.
    ///
    /// The returned shake is not played here; [`Session::add_points`](crate::Session::add_points)
    /// plays it.
    pub fn add_points(&mut self, points: f32, shake_override: Option<f32>) -> GrowthChange {
        let change = self.growth.add_points(points, shake_override);
        self.body.set_mass_properties(change.mass, self.radius());
        self.animator.retarget(change.size);
        change
    }

    /// Gating size, updated instantly when points arrive.
    #[must_use]
    pub fn current_size(&self) -> f32 {
        self.growth.target_size()
    }

    /// Animated size used for the visual scale and the collider.
    #[must_use]
    pub const fn current_display_size(&self) -> f32 {
        self.animator.displayed()
    }

    /// Collider radius at the displayed size.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.animator.displayed() * self.growth.settings().radius_per_size
    }

    /// Resets every held pickup found in `pickups` and forgets them all.
    pub fn drop_all_pickups<'a, C, I>(&mut self, pickups: I) -> usize
    where
        C: Collectible + 'a,
        I: IntoIterator<Item = &'a mut C>,
    {
        self.registry.drop_all(pickups)
    }

    /// Number of pickups currently held.
    #[must_use]
    pub fn pickup_count(&self) -> usize {
        self.registry.count()
    }

    /// Held pickup ids.
    #[must_use]
    pub const fn registry(&self) -> &PickupRegistry {
        &self.registry
    }

    /// Rigid-body state.
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Rigid-body state for the integrator.
    pub const fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Growth laws and point total.
    #[must_use]
    pub const fn growth(&self) -> &GrowthModel {
        &self.growth
    }

    /// Display-size animator.
    #[must_use]
    pub const fn animator(&self) -> &GrowthAnimator {
        &self.animator
    }

    /// Ground sensor state.
    #[must_use]
    pub const fn sensor(&self) -> &GroundSensor {
        &self.sensor
    }

    /// Pending input for the next physics tick.
    pub const fn input_mut(&mut self) -> &mut InputSample {
        &mut self.input
    }

    /// Spawn point.
    #[must_use]
    pub const fn spawn(&self) -> Vec3 {
        self.spawn
    }

    /// Returns to the spawn point at base size with no points or input.
    ///
    /// Held pickups are not touched; drop them first.
    pub fn reset(&mut self) {
        self.growth.reset();
        let base = self.growth.target_size();
        self.animator.snap(base);
        self.body.reset_at(self.spawn);
        self.body.set_mass_properties(self.growth.mass(), self.radius());
        self.input.clear();
    }
}

impl Collector for Player {
    fn can_pickup(&self, size_requirement: f32) -> bool {
        self.current_size() >= size_requirement
    }

    fn collector_size(&self) -> f32 {
        self.current_size()
    }

    fn pickup_anchor(&self) -> Option<AnchorPose> {
        let offset = self.anchor_offset?;
        let scale = self.current_display_size();
        Some(AnchorPose {
            position: self.body.position + self.body.orientation * (offset * scale),
            rotation: self.body.orientation,
            scale,
        })
    }

    fn on_pickup_success<P: Collectible>(&mut self, pickup: &P) -> GrowthChange {
        let id = pickup.pickup_id();
        if !self.registry.claim(id) {
            warn!("{id} is already held; its points are not counted again");
            return self.add_points(0.0, None);
        }
        self.add_points(pickup.point_value(), Some(pickup.screen_shake_intensity()))
    }
}
