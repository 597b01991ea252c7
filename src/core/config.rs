//! Session configuration.
//!
//! Configuration is optional: `CalculatorConfig::default()` gives the
//! built-in support cards and the stock creature templates. A TOML file
//! can add custom modifiers and tune the session:
//!
//! ```toml
//! [session]
//! max_base = 500
//! log_capacity = 50
//!
//! [[modifier]]
//! id = "doubling_season"
//! name = "Doubling Season"
//! kind = "multiplier"
//! magnitude = 2
//! ```
//!
//! Custom modifiers go through the same validation as any other
//! registration, so a malformed entry is rejected before it reaches the
//! registry.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, RegistryError};
use super::input::DEFAULT_MAX_BASE;
use crate::entities::{Creature, CreatureRole};
use crate::modifiers::{ModifierDescriptor, ModifierRegistry};

/// Default cap on each token group created by one entry event.
pub const DEFAULT_MAX_TOKENS_PER_EVENT: usize = 100_000;

/// Name and printed stats used when the session creates a creature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    /// Name, or name prefix for numbered tokens.
    pub name: String,
    /// Printed power.
    #[serde(default)]
    pub power: i64,
    /// Printed toughness.
    #[serde(default)]
    pub toughness: i64,
}

impl CreatureTemplate {
    /// Create a template.
    #[must_use]
    pub fn new(name: impl Into<String>, power: i64, toughness: i64) -> Self {
        Self {
            name: name.into(),
            power,
            toughness,
        }
    }

    /// Instantiate with a role and counters.
    #[must_use]
    pub fn spawn(&self, role: CreatureRole, counters: i64) -> Creature {
        Creature::new(self.name.clone(), role, self.power, self.toughness).with_counters(counters)
    }

    /// Instantiate as the `n`th numbered token: `"<name> <n>"`.
    #[must_use]
    pub fn spawn_numbered(&self, role: CreatureRole, n: usize, counters: i64) -> Creature {
        Creature::new(format!("{} {n}", self.name), role, self.power, self.toughness)
            .with_counters(counters)
    }
}

/// Session tunables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Upper bound for the parsed base quantity.
    pub max_base: i64,
    /// Upper bound for each group of tokens one entry event creates.
    pub max_tokens_per_event: usize,
    /// Keep at most this many log entries. Unbounded when absent.
    pub log_capacity: Option<usize>,
    /// Register the built-in support cards before custom ones.
    pub include_builtin: bool,
    /// Base of the per-token entry resolution.
    pub token_entry_base: i64,
    /// Base of the attack channel in combat.
    pub combat_base: i64,
    /// The creature whose entry drives the session.
    pub primary: CreatureTemplate,
    /// Tokens created by the primary's entry, one per point of X.
    pub token: CreatureTemplate,
    /// Tokens created by token-maker modifiers.
    pub extra_token: CreatureTemplate,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_base: DEFAULT_MAX_BASE,
            max_tokens_per_event: DEFAULT_MAX_TOKENS_PER_EVENT,
            log_capacity: None,
            include_builtin: true,
            token_entry_base: 0,
            combat_base: 1,
            primary: CreatureTemplate::new("Vrestin", 0, 0),
            token: CreatureTemplate::new("Insect", 1, 1),
            extra_token: CreatureTemplate::new("Beetle Token", 1, 1),
        }
    }
}

impl SessionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, message: &str| ConfigError::InvalidField {
            field: field.to_string(),
            message: message.to_string(),
        };

        if self.max_base < 0 {
            return Err(invalid("session.max_base", "must not be negative"));
        }
        if self.token_entry_base < 0 {
            return Err(invalid("session.token_entry_base", "must not be negative"));
        }
        if self.combat_base < 0 {
            return Err(invalid("session.combat_base", "must not be negative"));
        }
        if self.max_tokens_per_event == 0 {
            return Err(invalid("session.max_tokens_per_event", "must be at least 1"));
        }
        if self.log_capacity == Some(0) {
            return Err(invalid("session.log_capacity", "must be at least 1"));
        }
        for (field, template) in [
            ("session.primary.name", &self.primary),
            ("session.token.name", &self.token),
            ("session.extra_token.name", &self.extra_token),
        ] {
            if template.name.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }
        Ok(())
    }
}

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Session tunables.
    #[serde(default)]
    pub session: SessionConfig,
    /// Custom modifiers, appended after the built-in table.
    #[serde(default, rename = "modifier")]
    pub modifiers: Vec<ModifierDescriptor>,
}

impl CalculatorConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse(&content, path.to_path_buf())
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, PathBuf::from("<inline>"))
    }

    fn parse(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|source| ConfigError::Parse { source, path })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate without building anything the caller keeps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;
        self.build_registry()?;
        Ok(())
    }

    /// Build the modifier registry: built-ins (if enabled), then custom
    /// modifiers in file order.
    pub fn build_registry(&self) -> Result<ModifierRegistry, RegistryError> {
        let mut registry = if self.session.include_builtin {
            ModifierRegistry::builtin()
        } else {
            ModifierRegistry::new()
        };
        for descriptor in &self.modifiers {
            registry.register(descriptor.clone())?;
        }
        Ok(registry)
    }
}
