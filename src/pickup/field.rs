//! Level-owned storage for pickup records.

use hashbrown::HashMap;
use thiserror::Error;

use super::record::{PickupId, PickupRecord, PickupSpawn};

/// Errors raised while populating a [`PickupField`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickupFieldError {
    /// Two records share an id.
    #[error("duplicate {0}")]
    DuplicateId(PickupId),
}

/// Every pickup in the level, in spawn order, with id lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickupField {
    records: Vec<PickupRecord>,
    index: HashMap<PickupId, usize>,
}

impl PickupField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns one available record per entry, numbering ids from one.
    #[must_use]
    pub fn from_spawns(spawns: &[PickupSpawn]) -> Self {
        let mut field = Self::new();
        for (id, spawn) in (1..).zip(spawns) {
            let record = PickupRecord::spawn(PickupId(id), spawn);
            field.index.insert(record.id(), field.records.len());
            field.records.push(record);
        }
        field
    }

    /// Adds a record.
    ///
    /// # Errors
    /// Returns [`PickupFieldError::DuplicateId`] if the id is taken.
    pub fn insert(&mut self, record: PickupRecord) -> Result<(), PickupFieldError> {
        let id = record.id();
        if self.index.contains_key(&id) {
            return Err(PickupFieldError::DuplicateId(id));
        }
        self.index.insert(id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: PickupId) -> Option<&PickupRecord> {
        self.index.get(&id).and_then(|slot| self.records.get(*slot))
    }

    /// Looks up a record by id for mutation.
    pub fn get_mut(&mut self, id: PickupId) -> Option<&mut PickupRecord> {
        let slot = *self.index.get(&id)?;
        self.records.get_mut(slot)
    }

    /// Records in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &PickupRecord> {
        self.records.iter()
    }

    /// Mutable records in spawn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PickupRecord> {
        self.records.iter_mut()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the level has no pickups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rstest::rstest;

    fn spawn_at(x: f32) -> PickupSpawn {
        PickupSpawn {
            position: Vec3::new(x, 0.0, 0.0),
            size_requirement: 1.0,
            point_value: 1.0,
            shake_intensity: 0.1,
            radius: 0.3,
        }
    }

    #[rstest]
    fn ids_follow_spawn_order() {
        let field = PickupField::from_spawns(&[spawn_at(0.0), spawn_at(4.0)]);
        assert_eq!(field.len(), 2);
        let second = field.get(PickupId(2)).expect("second pickup");
        assert_eq!(second.position().x, 4.0);
        assert!(field.get(PickupId(3)).is_none());
    }

    #[rstest]
    fn duplicate_ids_are_refused() {
        let mut field = PickupField::from_spawns(&[spawn_at(0.0)]);
        let clash = PickupRecord::spawn(PickupId(1), &spawn_at(9.0));
        assert_eq!(
            field.insert(clash),
            Err(PickupFieldError::DuplicateId(PickupId(1)))
        );
        assert!(field
            .insert(PickupRecord::spawn(PickupId(5), &spawn_at(9.0)))
            .is_ok());
        assert_eq!(field.len(), 2);
    }
}
