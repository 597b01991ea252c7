//! The action log.
//!
//! Each user action that changes counters leaves one pre-formatted,
//! multi-line entry. Entries are prepended, so index 0 is always the
//! newest, and only an explicit clear removes them.

mod action_log;
mod trace;

pub use action_log::{ActionLog, ENTRY_SEPARATOR};
pub use trace::Trace;
