//! # ccg-counters
//!
//! Deterministic +1/+1 counter bookkeeping for a card game table.
//!
//! A user enters a base quantity X, toggles the support cards in play,
//! and fires one of two events: the primary creature entering (which also
//! creates X tokens) or an attack. Every counter quantity goes through one
//! pipeline, and every event leaves a readable derivation in the log.
//!
//! ## Design Principles
//!
//! 1. **One Pipeline**: Additive effects first, then multipliers, both in
//!    registry order, rounding up. Primary and token quantities resolve
//!    the same way.
//!
//! 2. **Pure Resolution**: `CounterResolver` reads the registry and active
//!    set and returns a value plus steps. Sessions apply and log results.
//!
//! 3. **Explicit State**: A `Session` owns everything one user drives.
//!    No globals.
//!
//! 4. **Roles, Not Names**: Combat bonuses target creatures by role tag.
//!
//! ## Modules
//!
//! - `core`: Configuration, input parsing, errors
//! - `modifiers`: Descriptors, registry, active set
//! - `resolution`: The counter pipeline
//! - `entities`: Creatures and the entity store
//! - `log`: Prepend-ordered action log
//! - `session`: Session controller, identity gate, snapshots

pub mod core;
pub mod modifiers;
pub mod resolution;
pub mod entities;
pub mod log;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    parse_base, CalculatorConfig, ConfigError, CreatureTemplate, RegistryError, SessionConfig,
    SessionError, StoreError,
};

pub use crate::modifiers::{
    ActiveModifierSet, ModifierDescriptor, ModifierId, ModifierKind, ModifierRegistry,
};

pub use crate::resolution::{CounterResolver, Resolution, ResolutionEvent, Step, StepOp};

pub use crate::entities::{Creature, CreatureRole, EntityStore};

pub use crate::log::{ActionLog, Trace};

pub use crate::session::{
    CombatReport, IdentityProvider, Session, SessionSnapshot, StaticIdentity, SummonReport,
};
