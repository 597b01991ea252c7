//! The set of modifiers a user has toggled on.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::descriptor::{ModifierDescriptor, ModifierId};

/// Modifier ids currently toggled on.
///
/// Plain set semantics. Ids that are not registered may sit in the set;
/// resolution walks the registry, so they are simply never consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveModifierSet {
    ids: FxHashSet<ModifierId>,
}

impl ActiveModifierSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an id on or off. Returns whether it is now active.
    pub fn toggle(&mut self, id: impl Into<ModifierId>) -> bool {
        let id = id.into();
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Turn an id on.
    pub fn insert(&mut self, id: impl Into<ModifierId>) {
        self.ids.insert(id.into());
    }

    /// Turn an id off.
    pub fn remove(&mut self, id: &ModifierId) {
        self.ids.remove(id);
    }

    /// Check if an id is toggled on.
    #[must_use]
    pub fn contains(&self, id: &ModifierId) -> bool {
        self.ids.contains(id)
    }

    /// Check if a descriptor applies: toggled on, and its prerequisite too.
    #[must_use]
    pub fn applies(&self, descriptor: &ModifierDescriptor) -> bool {
        self.contains(&descriptor.id)
            && descriptor
                .requires
                .as_ref()
                .map_or(true, |required| self.contains(required))
    }

    /// Number of toggled ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is toggled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Turn everything off.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Iterate over toggled ids (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &ModifierId> {
        self.ids.iter()
    }
}

impl<I: Into<ModifierId>> FromIterator<I> for ActiveModifierSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
