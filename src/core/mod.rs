//! Core plumbing: configuration, input parsing, and error types.
//!
//! Nothing here knows about counters. The modifier, resolution, entity
//! and session modules build on these pieces.

pub mod config;
pub mod error;
pub mod input;

pub use config::{CalculatorConfig, CreatureTemplate, SessionConfig, DEFAULT_MAX_TOKENS_PER_EVENT};
pub use error::{ConfigError, RegistryError, SessionError, StoreError};
pub use input::{parse_base, DEFAULT_MAX_BASE};
