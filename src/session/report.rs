//! What the two events did.

use serde::{Deserialize, Serialize};

use crate::resolution::Resolution;

/// Result of the primary creature entering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonReport {
    /// Store index of the new primary creature.
    pub primary_index: usize,
    /// How the primary's counters were derived.
    pub primary: Resolution,
    /// Tokens created, one per point of X.
    pub token_count: usize,
    /// How each token's counters were derived.
    pub token: Resolution,
    /// Tokens created by token makers.
    pub extra_token_count: usize,
    /// True if a token group hit the per-event cap.
    pub capped: bool,
    /// The log entry written for this event.
    pub entry: String,
}

impl SummonReport {
    /// Creatures added to the store.
    #[must_use]
    pub fn created(&self) -> usize {
        1 + self.token_count + self.extra_token_count
    }
}

/// Result of an attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    /// Bonus for every insect (primary and tokens).
    pub attack: Resolution,
    /// Bonus for every creature, when equipment is active.
    pub equipment: Option<Resolution>,
    /// Creatures that received the attack bonus.
    pub insects_affected: usize,
    /// Creatures that received the equipment bonus.
    pub creatures_affected: usize,
    /// The log entry written for this event.
    pub entry: String,
}

impl CombatReport {
    /// Equipment bonus value, 0 when no equipment is active.
    #[must_use]
    pub fn equipment_bonus(&self) -> i64 {
        self.equipment.as_ref().map_or(0, |r| r.value)
    }
}
