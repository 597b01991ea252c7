//! Creature records and the store that holds them.
//!
//! - `Creature`: name, role, base stats, counters (never negative)
//! - `CreatureRole`: primary, token, or custom
//! - `EntityStore`: ordered list with index-based mutation

pub mod creature;
pub mod store;

pub use creature::{Creature, CreatureRole};
pub use store::EntityStore;
