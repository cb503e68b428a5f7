//! Pickups: records, lifecycle, capabilities and ownership.
//!
//! The level owns every [`PickupRecord`] through a [`PickupField`]. A
//! collector only remembers which ids it holds in a [`PickupRegistry`], and
//! the two sides meet through the [`Collector`] and [`Collectible`] traits.

mod capability;
mod field;
mod record;
mod registry;

pub use capability::{resolve_overlap, Collectible, Collector, PickupOutcome};
pub use field::{PickupField, PickupFieldError};
pub use record::{AnchorPose, DespawnSettings, PickupId, PickupRecord, PickupSpawn, PickupState};
pub use registry::PickupRegistry;
