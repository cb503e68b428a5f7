//! ECS components linking Bevy entities to the simulation.
use bevy::prelude::*;

use crate::pickup::PickupId;

/// Marks the entity that shows the player ball.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerBall;

/// Links an entity to the pickup record it shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Deref)]
pub struct PickupLink(
    /// Pickup shown by this entity.
    pub PickupId,
);
