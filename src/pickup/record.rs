//! Pickup records and their lifecycle.

use std::fmt;

use glam::{Quat, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};

use super::capability::Collectible;
use crate::easing::{Ease, Tween};
use crate::{DESPAWN_DELAY, DESPAWN_DURATION};

/// Stable identifier of a pickup within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickupId(pub u32);

impl fmt::Display for PickupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pickup#{}", self.0)
    }
}

/// Authored description of a pickup placed in a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupSpawn {
    /// Resting position.
    pub position: Vec3,
    /// Smallest collector size that can take it.
    pub size_requirement: f32,
    /// Points granted on collection.
    pub point_value: f32,
    /// Shake intensity played if collecting it grows the collector.
    pub shake_intensity: f32,
    /// Radius of its trigger volume.
    #[serde(default = "default_pickup_radius")]
    pub radius: f32,
}

const fn default_pickup_radius() -> f32 {
    0.3
}

/// Held-pickup despawn tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DespawnSettings {
    /// Whether held pickups shrink away at all; `false` keeps them attached
    /// until the round restarts.
    pub enabled: bool,
    /// Seconds after pickup before shrinking starts.
    pub delay: f32,
    /// Seconds the shrink takes.
    pub duration: f32,
    /// Shrink curve.
    pub ease: Ease,
}

impl Default for DespawnSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            delay: DESPAWN_DELAY,
            duration: DESPAWN_DURATION,
            ease: Ease::default(),
        }
    }
}

/// Lifecycle of a pickup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickupState {
    /// In the level, waiting for a large enough collector.
    Available,
    /// Attached to a collector.
    Held {
        /// Seconds since collection.
        held_for: f32,
    },
    /// Shrinking to nothing while still attached.
    Despawning(Tween),
    /// Out of the simulation until reset.
    Inactive,
}

/// World-space frame that held pickups are attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPose {
    /// Anchor origin.
    pub position: Vec3,
    /// Anchor rotation.
    pub rotation: Quat,
    /// Uniform scale of the anchor's parent.
    pub scale: f32,
}

impl AnchorPose {
    fn to_local(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.position) / self.scale.max(f32::EPSILON)
    }

    fn to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * (local * self.scale)
    }
}

/// A pickup in the level.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupRecord {
    id: PickupId,
    size_requirement: f32,
    point_value: f32,
    shake_intensity: f32,
    radius: f32,
    position: Vec3,
    home: Vec3,
    original_scale: f32,
    scale: f32,
    collider_enabled: bool,
    kinematic: bool,
    local_offset: Option<Vec3>,
    state: PickupState,
}

impl PickupRecord {
    /// Creates an available pickup from its authored description.
    #[must_use]
    pub const fn spawn(id: PickupId, spawn: &PickupSpawn) -> Self {
        Self {
            id,
            size_requirement: spawn.size_requirement,
            point_value: spawn.point_value,
            shake_intensity: spawn.shake_intensity,
            radius: spawn.radius,
            position: spawn.position,
            home: spawn.position,
            original_scale: 1.0,
            scale: 1.0,
            collider_enabled: true,
            kinematic: false,
            local_offset: None,
            state: PickupState::Available,
        }
    }

    /// Identifier.
    #[must_use]
    pub const fn id(&self) -> PickupId {
        self.id
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PickupState {
        self.state
    }

    /// Whether a collector may still take it.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.state, PickupState::Available)
    }

    /// Whether it is attached to a collector (held or shrinking).
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.local_offset.is_some()
    }

    /// World position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Authored resting position.
    #[must_use]
    pub const fn home(&self) -> Vec3 {
        self.home
    }

    /// Uniform visual scale.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Trigger radius at the current scale.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius * self.scale
    }

    /// Whether its trigger takes part in overlap checks.
    #[must_use]
    pub const fn collider_enabled(&self) -> bool {
        self.collider_enabled
    }

    /// Whether physics treats it as kinematic.
    #[must_use]
    pub const fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    /// Whether a sphere at `center` with `radius` touches its trigger.
    #[must_use]
    pub fn overlaps(&self, center: Vec3, radius: f32) -> bool {
        self.collider_enabled && center.distance(self.position) <= radius + self.radius()
    }

    /// Attaches to `anchor`, going Available → Held.
    ///
    /// Disables the collider and freezes physics. Returns `false` if the
    /// pickup was not available.
    pub fn attach(&mut self, anchor: &AnchorPose) -> bool {
        if !self.is_available() {
            return false;
        }
        self.local_offset = Some(anchor.to_local(self.position));
        self.collider_enabled = false;
        self.kinematic = true;
        self.state = PickupState::Held { held_for: 0.0 };
        true
    }

    /// Moves an attached pickup along with its anchor.
    pub fn follow(&mut self, anchor: &AnchorPose) {
        if let Some(local) = self.local_offset {
            self.position = anchor.to_world(local);
        }
    }

    /// Advances the despawn lifecycle by `dt`.
    ///
    /// Returns the new state when a transition happened.
    pub fn advance(&mut self, dt: f32, settings: &DespawnSettings) -> Option<PickupState> {
        match &mut self.state {
            PickupState::Held { held_for } => {
                *held_for += dt.max(0.0);
                if !settings.enabled || *held_for < settings.delay {
                    return None;
                }
                self.state = PickupState::Despawning(Tween::new(
                    self.scale,
                    0.0,
                    settings.duration,
                    settings.ease,
                ));
            }
            PickupState::Despawning(tween) => {
                self.scale = tween.advance(dt);
                if !tween.is_finished() {
                    return None;
                }
                self.scale = 0.0;
                self.local_offset = None;
                self.state = PickupState::Inactive;
                debug!("{} despawned", self.id);
            }
            PickupState::Available | PickupState::Inactive => return None,
        }
        Some(self.state)
    }

    /// Returns to Available where it currently is.
    ///
    /// Cancels any despawn, restores the original scale, re-enables the
    /// collider and physics, and detaches.
    pub fn reset(&mut self) {
        self.state = PickupState::Available;
        self.scale = self.original_scale;
        self.collider_enabled = true;
        self.kinematic = false;
        self.local_offset = None;
    }

    /// Resets and moves back to the authored position.
    pub fn respawn(&mut self) {
        self.reset();
        self.position = self.home;
    }
}

impl Collectible for PickupRecord {
    fn pickup_id(&self) -> PickupId {
        self.id()
    }

    fn size_requirement(&self) -> f32 {
        self.size_requirement
    }

    fn point_value(&self) -> f32 {
        self.point_value
    }

    fn screen_shake_intensity(&self) -> f32 {
        self.shake_intensity
    }

    fn reset_pickup(&mut self) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn pickup() -> PickupRecord {
        PickupRecord::spawn(
            PickupId(7),
            &PickupSpawn {
                position: Vec3::new(1.0, 0.0, 0.0),
                size_requirement: 1.0,
                point_value: 2.0,
                shake_intensity: 0.3,
                radius: 0.5,
            },
        )
    }

    fn anchor() -> AnchorPose {
        AnchorPose {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }

    #[rstest]
    fn attach_only_once(mut pickup: PickupRecord) {
        assert!(pickup.attach(&anchor()));
        assert!(!pickup.collider_enabled());
        assert!(pickup.is_kinematic());
        assert!(!pickup.attach(&anchor()));
    }

    #[rstest]
    fn held_pickup_rides_the_anchor(mut pickup: PickupRecord) {
        pickup.attach(&anchor());
        let turned = AnchorPose {
            position: Vec3::new(0.0, 0.0, 5.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            scale: 2.0,
        };
        pickup.follow(&turned);
        assert_relative_eq!(pickup.position().x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(pickup.position().z, 3.0, epsilon = 1e-5);
    }

    #[rstest]
    fn despawn_runs_to_inactive(mut pickup: PickupRecord) {
        let settings = DespawnSettings {
            enabled: true,
            delay: 1.0,
            duration: 0.5,
            ease: Ease::Linear,
        };
        pickup.attach(&anchor());
        assert_eq!(pickup.advance(0.5, &settings), None);
        assert!(matches!(
            pickup.advance(0.5, &settings),
            Some(PickupState::Despawning(_))
        ));
        pickup.advance(0.25, &settings);
        assert_relative_eq!(pickup.scale(), 0.5, epsilon = 1e-5);
        assert_eq!(pickup.advance(0.25, &settings), Some(PickupState::Inactive));
        assert_eq!(pickup.scale(), 0.0);
        assert!(!pickup.collider_enabled());
    }

    #[rstest]
    fn disabled_despawn_keeps_pickup_held(mut pickup: PickupRecord) {
        let settings = DespawnSettings {
            enabled: false,
            ..DespawnSettings::default()
        };
        pickup.attach(&anchor());
        assert_eq!(pickup.advance(100.0, &settings), None);
        assert!(matches!(pickup.state(), PickupState::Held { .. }));
    }

    #[rstest]
    fn reset_restores_everything(mut pickup: PickupRecord) {
        let settings = DespawnSettings {
            enabled: true,
            delay: 0.0,
            duration: 1.0,
            ease: Ease::Linear,
        };
        pickup.attach(&anchor());
        pickup.advance(0.0, &settings);
        pickup.advance(0.5, &settings);
        pickup.reset();
        assert!(pickup.is_available());
        assert_eq!(pickup.scale(), 1.0);
        assert!(pickup.collider_enabled());
        assert!(!pickup.is_kinematic());
        assert!(!pickup.is_attached());
    }
}
