//! Modifier system: descriptors, registry, and the active set.
//!
//! ## Key Types
//!
//! - `ModifierId`: Identifier the user toggles
//! - `ModifierKind`: Additive, multiplier, flat-add, triggered bonus, token maker
//! - `ModifierDescriptor`: Static effect data
//! - `ModifierRegistry`: Ordered descriptor table
//! - `ActiveModifierSet`: Ids currently toggled on
//!
//! Registry order is resolution order. Descriptors are validated on
//! registration, so everything downstream can trust their shape.

pub mod active;
pub mod descriptor;
pub mod registry;

pub use active::ActiveModifierSet;
pub use descriptor::{ModifierDescriptor, ModifierId, ModifierKind};
pub use registry::{ids, ModifierRegistry};
