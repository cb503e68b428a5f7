//! Whole-level simulation.
//!
//! [`Session`] is the single source of truth for a level: the player, the
//! pickups, the terrain and the round. The engine feeds it input, camera
//! vectors and the two clocks, then reads positions back out. It also stands
//! in for the physics backend, integrating gravity and resolving contact with
//! the tops of platforms.

use glam::{Quat, Vec2, Vec3};
use hashbrown::HashSet;
use log::{debug, info, warn};

use crate::camera::CameraRig;
use crate::config::RollerConfig;
use crate::ground::{GroundProbe, LayerMask, Terrain};
use crate::growth::GrowthChange;
use crate::jump::JumpOutcome;
use crate::locomotion::Locomotion;
use crate::physics::decay_factor;
use crate::pickup::{
    resolve_overlap, Collectible, Collector, PickupField, PickupId, PickupOutcome,
};
use crate::player::Player;
use crate::round::{RoundClock, RoundOutcome};
use crate::shake::ScreenShake;

/// Something that happened during a step, for the engine to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A pickup is now held.
    PickupCollected {
        /// Pickup taken.
        id: PickupId,
        /// Points it granted.
        points: f32,
    },
    /// The player touched a pickup it is too small for.
    PickupRejected {
        /// Pickup that refused.
        id: PickupId,
        /// Size it needs.
        required: f32,
        /// Size the player had.
        actual: f32,
    },
    /// The gating size strictly increased.
    Grew {
        /// New gating size.
        size: f32,
        /// Shake intensity played.
        shake: f32,
    },
    /// The player left the ground.
    Jumped {
        /// Launch speed.
        velocity: f32,
    },
    /// The round was decided.
    RoundEnded(RoundOutcome),
}

/// A running level.
#[derive(Debug, Clone)]
pub struct Session {
    config: RollerConfig,
    player: Player,
    pickups: PickupField,
    terrain: Terrain,
    camera: CameraRig,
    shake: ScreenShake,
    round: RoundClock,
    touching: HashSet<PickupId>,
    events: Vec<SessionEvent>,
    anchor_warned: bool,
}

impl Session {
    /// Builds the level described by `config`.
    #[must_use]
    pub fn new(config: &RollerConfig) -> Self {
        let level = &config.level;
        Self::with_player(config, Player::new(level.spawn, config))
    }

    /// Builds the level around an already configured player.
    #[must_use]
    pub fn with_player(config: &RollerConfig, player: Player) -> Self {
        let level = &config.level;
        info!(
            "session ready: {} platforms, {} pickups",
            level.platforms.len(),
            level.pickups.len()
        );
        Self {
            player,
            pickups: PickupField::from_spawns(&level.pickups),
            terrain: Terrain::new(level.platforms.clone()),
            camera: CameraRig::default(),
            shake: ScreenShake::new(config.shake),
            round: RoundClock::new(config.round),
            touching: HashSet::new(),
            events: Vec::new(),
            anchor_warned: false,
            config: config.clone(),
        }
    }

    /// Sets the movement axis for the coming physics ticks.
    pub const fn set_move_axis(&mut self, axis: Vec2) {
        self.player.input_mut().move_axis = axis;
    }

    /// Queues a one-shot jump request for the next physics tick.
    pub const fn request_jump(&mut self) {
        self.player.input_mut().request_jump();
    }

    /// Grants points to the player outside of a pickup.
    ///
    /// A strict size increase plays the camera shake (`shake_override` or
    /// the configured default) and reports [`SessionEvent::Grew`].
    pub fn add_points(&mut self, points: f32, shake_override: Option<f32>) -> GrowthChange {
        let change = self.player.add_points(points, shake_override);
        Self::record_growth(&mut self.shake, &mut self.events, &change);
        change
    }

    /// Runs one physics tick.
    ///
    /// `camera` carries the presentation camera's forward and right vectors,
    /// or `None` when there is no camera. Non-positive or non-finite `dt`
    /// leaves everything untouched.
    pub fn fixed_step(&mut self, camera: Option<(Vec3, Vec3)>, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        if self.round.is_decided() {
            self.player.input_mut().clear();
        }
        let basis = self.camera.resolve(camera);
        let tick = self.player.fixed_step(&self.terrain, basis, dt);
        if let JumpOutcome::Launched(velocity) = tick.jump {
            debug!("jumped at {velocity:.2} u/s");
            self.events.push(SessionEvent::Jumped { velocity });
        }
        self.integrate(dt);
        self.detect_overlaps();
    }

    /// Runs one presentation tick.
    pub fn frame_step(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        self.player.frame_step(dt);
        let anchor = self.player.pickup_anchor();
        let despawn = self.config.despawn;
        for pickup in self.pickups.iter_mut() {
            if let Some(pose) = anchor.as_ref() {
                pickup.follow(pose);
            }
            pickup.advance(dt, &despawn);
        }
        self.shake.advance(dt);
        if let Some(outcome) = self.round.advance(dt, self.player.current_size()) {
            info!(
                "round {outcome:?} at size {:.2} with {:.1}s left",
                self.player.current_size(),
                self.round.remaining()
            );
            self.events.push(SessionEvent::RoundEnded(outcome));
        }
    }

    /// Starts a new round: every pickup goes home, the player returns to the
    /// spawn point at base size, and the clock restarts.
    pub fn restart_round(&mut self) {
        let dropped = self.player.drop_all_pickups(self.pickups.iter_mut());
        for pickup in self.pickups.iter_mut() {
            pickup.respawn();
        }
        self.player.reset();
        self.round.restart();
        self.shake = ScreenShake::new(self.config.shake);
        self.touching.clear();
        info!("round restarted; {dropped} held pickups returned");
    }

    /// Takes the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The player, for direct manipulation.
    pub const fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Pickups in the level.
    #[must_use]
    pub const fn pickups(&self) -> &PickupField {
        &self.pickups
    }

    /// Level geometry.
    #[must_use]
    pub const fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Round state.
    #[must_use]
    pub const fn round(&self) -> &RoundClock {
        &self.round
    }

    /// Camera offset from the running shake.
    #[must_use]
    pub const fn shake_offset(&self) -> Vec2 {
        self.shake.offset()
    }

    /// Configuration the session was built from.
    #[must_use]
    pub const fn config(&self) -> &RollerConfig {
        &self.config
    }

    fn integrate(&mut self, dt: f32) {
        let physics = self.config.physics;
        let radius = self.player.radius();
        let spawn = self.player.spawn();
        let grounded = self.player.sensor().is_grounded();
        let locomotion = Locomotion::new(self.config.locomotion);
        let body = self.player.body_mut();

        body.linear_velocity.y =
            (body.linear_velocity.y + physics.gravity * dt).max(-physics.terminal_velocity);
        let previous = body.position;
        body.position += body.linear_velocity * dt;

        let origin = Vec3::new(body.position.x, previous.y, body.position.z);
        let reach = (previous.y - body.position.y).max(0.0) + radius;
        if let Some(hit) = self.terrain.cast_down(origin, reach, LayerMask::ALL) {
            let rest = hit.point.y + radius;
            if body.position.y < rest {
                body.position.y = rest;
                body.linear_velocity.y = body.linear_velocity.y.max(0.0);
            }
        }

        let spin = body.angular_velocity;
        if let Some(axis) = spin.try_normalize() {
            let turn = Quat::from_axis_angle(axis, spin.length() * dt);
            body.orientation = (turn * body.orientation).normalize();
        }
        body.angular_velocity *= 1.0 - decay_factor(physics.angular_damping, dt);
        if grounded {
            let rolling = locomotion.rolling_spin(body.horizontal_velocity(), radius);
            body.angular_velocity = body
                .angular_velocity
                .lerp(rolling, decay_factor(physics.rolling_grip, dt));
        }

        if body.position.y < physics.kill_plane {
            warn!("player fell below {:.1}; respawning", physics.kill_plane);
            body.reset_at(spawn);
        }
    }

    fn record_growth(
        shake: &mut ScreenShake,
        events: &mut Vec<SessionEvent>,
        change: &GrowthChange,
    ) {
        if let Some(intensity) = change.shake {
            shake.trigger(intensity);
            events.push(SessionEvent::Grew {
                size: change.size,
                shake: intensity,
            });
        }
    }

    fn detect_overlaps(&mut self) {
        let center = self.player.body().position;
        let radius = self.player.radius();
        for pickup in self.pickups.iter_mut() {
            let key = pickup.pickup_id();
            if !pickup.overlaps(center, radius) {
                self.touching.remove(&key);
                continue;
            }
            let entered = self.touching.insert(key);
            match resolve_overlap(&mut self.player, pickup) {
                PickupOutcome::Collected { id, points, growth } => {
                    info!("collected {id} for {points} points; size {:.2}", growth.size);
                    self.events.push(SessionEvent::PickupCollected { id, points });
                    Self::record_growth(&mut self.shake, &mut self.events, &growth);
                }
                PickupOutcome::Rejected {
                    id,
                    required,
                    actual,
                } if entered => {
                    self.events.push(SessionEvent::PickupRejected {
                        id,
                        required,
                        actual,
                    });
                }
                PickupOutcome::Disabled { id } if !self.anchor_warned => {
                    warn!("player has no pickup anchor; cannot collect {id}");
                    self.anchor_warned = true;
                }
                PickupOutcome::Rejected { .. }
                | PickupOutcome::Disabled { .. }
                | PickupOutcome::Ignored { .. } => {}
            }
        }
    }
}
