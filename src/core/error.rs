//! Error types.
//!
//! Only caller contract violations and configuration problems are errors.
//! Bad numeric input and repeated summons are recovered locally and never
//! reach these types.

use std::path::PathBuf;

use thiserror::Error;

use crate::modifiers::ModifierId;

/// A modifier descriptor failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("modifier id must not be empty")]
    EmptyId,
    #[error("modifier '{0}' has an empty name")]
    EmptyName(ModifierId),
    #[error("modifier '{id}' has negative magnitude {magnitude}")]
    NegativeMagnitude { id: ModifierId, magnitude: i64 },
    #[error("modifier '{id}' has divisor {divisor}; divisors must be positive")]
    InvalidDivisor { id: ModifierId, divisor: i64 },
    #[error("modifier '{0}' is already registered")]
    DuplicateId(ModifierId),
    #[error("modifier '{id}' requires unknown modifier '{requires}'")]
    UnknownPrerequisite { id: ModifierId, requires: ModifierId },
}

/// An entity store operation referenced a position that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("creature index {index} is out of range (store has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Loading a configuration file failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
        path: PathBuf,
    },
    #[error("invalid field {field}: {message}")]
    InvalidField { field: String, message: String },
    #[error("invalid config: {0}")]
    Invalid(#[from] RegistryError),
}

/// Opening or restoring a session failed.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("identity provider did not authenticate the session")]
    Unauthenticated,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("session config is invalid: {0}")]
    Config(#[from] ConfigError),
    #[error("snapshot registry is invalid: {0}")]
    Registry(#[from] RegistryError),
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}
