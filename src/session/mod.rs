//! Sessions: the explicit state object an application controller owns.
//!
//! A `Session` bundles the registry, the active modifier set, the creature
//! store and the log, and exposes every user action:
//!
//! - toggle modifiers and set X
//! - summon the primary creature (entry event)
//! - attack (combat event)
//! - add, adjust, remove and clear creatures
//! - clear the log
//!
//! Sessions only open behind an [`IdentityProvider`] check.
//!
//! ## Example Usage
//!
//! ```
//! use ccg_counters::core::CalculatorConfig;
//! use ccg_counters::modifiers::ids;
//! use ccg_counters::session::{Session, StaticIdentity};
//!
//! let mut session = Session::open(&StaticIdentity::authenticated(), CalculatorConfig::default()).unwrap();
//! session.set_base_text("3");
//! session.summon().unwrap();
//!
//! session.toggle(ids::HARDENED_SCALES);
//! let combat = session.attack();
//! assert_eq!(combat.attack.value, 2);
//!
//! // Vrestin entered with 3 and got +2 in combat.
//! assert_eq!(session.creatures().get(0).unwrap().counters(), 5);
//! ```

mod identity;
mod report;
#[allow(clippy::module_inception)]
mod session;
mod snapshot;

pub use identity::{IdentityProvider, StaticIdentity};
pub use report::{CombatReport, SummonReport};
pub use session::Session;
pub use snapshot::SessionSnapshot;
