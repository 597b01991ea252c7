//! Entity store - the ordered list of creatures.
//!
//! Positions are the only identity. Removing a creature shifts later
//! creatures down by one but never renames them, so "Insect 2" can sit at
//! index 0 after its siblings are gone.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::creature::{Creature, CreatureRole};
use crate::core::error::StoreError;

/// Ordered creature list.
///
/// Backed by `im::Vector` so snapshots of a session are O(1) clones.
///
/// ## Example
///
/// ```
/// use ccg_counters::entities::EntityStore;
///
/// let mut store = EntityStore::new();
/// let bear = store.add("Grizzly Bears", 1).unwrap();
///
/// store.increment(bear, -5).unwrap();
/// assert_eq!(store.get(bear).unwrap().counters(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStore {
    creatures: Vector<Creature>,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a creature. Returns its index.
    pub fn push(&mut self, creature: Creature) -> usize {
        self.creatures.push_back(creature);
        self.creatures.len() - 1
    }

    /// Append several creatures in order.
    pub fn extend(&mut self, creatures: impl IntoIterator<Item = Creature>) {
        for creature in creatures {
            self.creatures.push_back(creature);
        }
    }

    /// Add a custom 0/0 creature by name.
    ///
    /// Blank names are ignored and return `None`.
    pub fn add(&mut self, name: &str, starting_counters: i64) -> Option<usize> {
        if name.trim().is_empty() {
            warn!("ignoring creature with blank name");
            return None;
        }
        let index = self.push(Creature::new(name, CreatureRole::Custom, 0, 0).with_counters(starting_counters));
        debug!(index, name, starting_counters, "added creature");
        Some(index)
    }

    /// Get a creature by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Creature, StoreError> {
        let len = self.creatures.len();
        if index >= len {
            warn!(index, len, "stale creature index");
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        Ok(&mut self.creatures[index])
    }

    /// Add `delta` counters to one creature, clamping at zero.
    ///
    /// Returns the new count.
    pub fn increment(&mut self, index: usize, delta: i64) -> Result<i64, StoreError> {
        let creature = self.get_mut(index)?;
        let counters = creature.add_counters(delta);
        debug!(index, delta, counters, "adjusted counters");
        Ok(counters)
    }

    /// Remove `amount` counters from one creature, clamping at zero.
    pub fn decrement(&mut self, index: usize, amount: i64) -> Result<i64, StoreError> {
        self.increment(index, amount.saturating_neg())
    }

    /// Remove the creature at `index`. Later creatures shift down.
    pub fn remove(&mut self, index: usize) -> Result<Creature, StoreError> {
        let len = self.creatures.len();
        if index >= len {
            warn!(index, len, "stale creature index");
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        let removed = self.creatures.remove(index);
        debug!(index, name = %removed.name, "removed creature");
        Ok(removed)
    }

    /// Remove every creature.
    pub fn clear(&mut self) {
        self.creatures.clear();
    }

    /// Add `amount` counters to every creature matching `predicate`.
    ///
    /// Returns how many creatures were affected.
    pub fn apply_bonus<F>(&mut self, amount: i64, predicate: F) -> usize
    where
        F: Fn(&Creature) -> bool,
    {
        let mut affected = 0;
        for creature in self.creatures.iter_mut() {
            if predicate(creature) {
                creature.add_counters(amount);
                affected += 1;
            }
        }
        affected
    }

    /// Check if any creature has a role.
    #[must_use]
    pub fn has_role(&self, role: CreatureRole) -> bool {
        self.creatures.iter().any(|c| c.is(role))
    }

    /// Count creatures with a role.
    #[must_use]
    pub fn count_role(&self, role: CreatureRole) -> usize {
        self.creatures.iter().filter(|c| c.is(role)).count()
    }

    /// Number of creatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Iterate in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }
}
