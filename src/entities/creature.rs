//! Creature records.
//!
//! A `Creature` is a name, a role, base stats, and a counter count that
//! never drops below zero. Creatures have no identity beyond their
//! position in the store, so two records may share a name.

use serde::{Deserialize, Serialize};

/// Why a creature is in the store.
///
/// Combat bonuses select creatures by role, never by name, so a custom
/// creature called "Insect King" is not mistaken for a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureRole {
    /// The creature whose entry drives the session. At most one at a time.
    Primary,
    /// Created as a side effect of the primary's entry.
    Token,
    /// Created by a token-maker modifier. Not an insect.
    ExtraToken,
    /// Added by hand.
    Custom,
}

impl CreatureRole {
    /// The primary and its entry tokens are insects; attack bonuses target them.
    #[must_use]
    pub const fn is_insect(self) -> bool {
        matches!(self, CreatureRole::Primary | CreatureRole::Token)
    }
}

/// A creature on the battlefield.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Creature {
    /// Display name. Not unique.
    pub name: String,
    /// Role tag.
    pub role: CreatureRole,
    /// Printed power.
    pub base_power: i64,
    /// Printed toughness.
    pub base_toughness: i64,
    counters: i64,
}

impl Creature {
    /// Create a creature with no counters.
    #[must_use]
    pub fn new(name: impl Into<String>, role: CreatureRole, base_power: i64, base_toughness: i64) -> Self {
        Self {
            name: name.into(),
            role,
            base_power,
            base_toughness,
            counters: 0,
        }
    }

    /// Set the starting counter count (builder pattern). Negative becomes 0.
    #[must_use]
    pub fn with_counters(mut self, counters: i64) -> Self {
        self.counters = counters.max(0);
        self
    }

    /// Current +1/+1 counters.
    #[must_use]
    pub fn counters(&self) -> i64 {
        self.counters
    }

    /// Add `delta` counters, clamping at zero. Returns the new count.
    pub fn add_counters(&mut self, delta: i64) -> i64 {
        self.counters = self.counters.saturating_add(delta).max(0);
        self.counters
    }

    /// Power including counters.
    #[must_use]
    pub fn power(&self) -> i64 {
        self.base_power.saturating_add(self.counters)
    }

    /// Toughness including counters.
    #[must_use]
    pub fn toughness(&self) -> i64 {
        self.base_toughness.saturating_add(self.counters)
    }

    /// Check the role tag.
    #[must_use]
    pub fn is(&self, role: CreatureRole) -> bool {
        self.role == role
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: +{}/+{}", self.name, self.counters, self.counters)
    }
}
