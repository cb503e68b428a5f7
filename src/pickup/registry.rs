//! Pickups claimed by one collector.

use hashbrown::HashSet;

use super::capability::Collectible;
use super::record::PickupId;

/// Ordered set of pickup ids a collector currently holds.
///
/// The registry does not own the records; the level does. It only remembers
/// which ones to hand back on [`drop_all`](Self::drop_all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickupRegistry {
    held: Vec<PickupId>,
    members: HashSet<PickupId>,
}

impl PickupRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` as held. Returns `false` if it already was.
    pub fn claim(&mut self, id: PickupId) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.held.push(id);
        true
    }

    /// Whether `id` is held.
    #[must_use]
    pub fn contains(&self, id: PickupId) -> bool {
        self.members.contains(&id)
    }

    /// Number of held pickups.
    #[must_use]
    pub fn count(&self) -> usize {
        self.held.len()
    }

    /// Whether nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Held ids in claim order.
    #[must_use]
    pub fn ids(&self) -> &[PickupId] {
        &self.held
    }

    /// Forgets `id` without touching its record.
    pub fn release(&mut self, id: PickupId) -> bool {
        if !self.members.remove(&id) {
            return false;
        }
        self.held.retain(|held| *held != id);
        true
    }

    /// Resets every held pickup found in `pickups` and empties the registry.
    ///
    /// Returns how many records were reset. Ids with no matching record are
    /// dropped as well.
    pub fn drop_all<'a, C, I>(&mut self, pickups: I) -> usize
    where
        C: Collectible + 'a,
        I: IntoIterator<Item = &'a mut C>,
    {
        let mut reset = 0;
        for pickup in pickups {
            if self.members.contains(&pickup.pickup_id()) {
                pickup.reset_pickup();
                reset += 1;
            }
        }
        self.held.clear();
        self.members.clear();
        reset
    }
}
