//! Capability traits connecting collectors and pickups.
//!
//! A collector never looks a pickup up by type name, and a pickup never
//! searches for "the player": both sides meet through these traits, resolved
//! at compile time.

use log::debug;

use super::record::{AnchorPose, PickupId, PickupRecord};
use crate::growth::GrowthChange;

/// Something that can be picked up.
pub trait Collectible {
    /// Identifier.
    fn pickup_id(&self) -> PickupId;
    /// Smallest collector size that can take it.
    fn size_requirement(&self) -> f32;
    /// Points granted on collection.
    fn point_value(&self) -> f32;
    /// Shake intensity if collecting it grows the collector.
    fn screen_shake_intensity(&self) -> f32;
    /// Returns it to the available state.
    fn reset_pickup(&mut self);
}

/// Something that picks things up.
pub trait Collector {
    /// Whether the collector is big enough for `size_requirement`.
    fn can_pickup(&self, size_requirement: f32) -> bool;
    /// Size compared against requirements.
    fn collector_size(&self) -> f32;
    /// Frame that collected pickups attach to; `None` if the collector has
    /// no anchor, which disables collecting.
    fn pickup_anchor(&self) -> Option<AnchorPose>;
    /// Registers `pickup` as held and applies its reward.
    fn on_pickup_success<P: Collectible>(&mut self, pickup: &P) -> GrowthChange;
}

/// Result of a collector overlapping a pickup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickupOutcome {
    /// The pickup is now held.
    Collected {
        /// Pickup taken.
        id: PickupId,
        /// Points it granted.
        points: f32,
        /// Growth caused by the points.
        growth: GrowthChange,
    },
    /// The collector was too small; nothing changed.
    Rejected {
        /// Pickup that refused.
        id: PickupId,
        /// Size it needs.
        required: f32,
        /// Size the collector had.
        actual: f32,
    },
    /// The pickup was not available.
    Ignored {
        /// Pickup that was skipped.
        id: PickupId,
    },
    /// The collector has no pickup anchor.
    Disabled {
        /// Pickup that could not be attached.
        id: PickupId,
    },
}

/// Runs the pickup check for one overlap.
///
/// Non-available pickups are ignored. Otherwise the collector's size is
/// compared with the requirement; on success the pickup attaches to the
/// collector's anchor and the collector is told about it.
pub fn resolve_overlap<C: Collector>(collector: &mut C, pickup: &mut PickupRecord) -> PickupOutcome {
    let id = pickup.id();
    if !pickup.is_available() {
        return PickupOutcome::Ignored { id };
    }
    let required = pickup.size_requirement();
    if !collector.can_pickup(required) {
        let actual = collector.collector_size();
        debug!("{id} needs size {required}, collector has {actual}");
        return PickupOutcome::Rejected {
            id,
            required,
            actual,
        };
    }
    let Some(anchor) = collector.pickup_anchor() else {
        return PickupOutcome::Disabled { id };
    };
    pickup.attach(&anchor);
    let growth = collector.on_pickup_success(&*pickup);
    PickupOutcome::Collected {
        id,
        points: pickup.point_value(),
        growth,
    }
}
