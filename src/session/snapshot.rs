//! Binary session snapshots.
//!
//! The calculator keeps everything in memory. A host that wants sessions
//! to survive a restart can capture a `SessionSnapshot`, store the bytes,
//! and hand them back to [`Session::restore`](super::Session::restore).
//! The snapshot carries the registry too, so a restored session resolves
//! exactly as the saved session did.

use serde::{Deserialize, Serialize};

use crate::core::{SessionConfig, SessionError};
use crate::entities::EntityStore;
use crate::log::ActionLog;
use crate::modifiers::{ActiveModifierSet, ModifierDescriptor};

/// Complete session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Registry contents in declaration order.
    pub modifiers: Vec<ModifierDescriptor>,
    /// Toggled modifiers.
    pub active: ActiveModifierSet,
    /// Session tunables.
    pub config: SessionConfig,
    /// Current X.
    pub base: i64,
    /// Creatures.
    pub store: EntityStore,
    /// Log entries.
    pub log: ActionLog,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`SessionSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
