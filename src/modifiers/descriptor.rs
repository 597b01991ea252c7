//! Modifier descriptors - static effect data.
//!
//! A `ModifierDescriptor` describes what a support card does to a counter
//! quantity: which kind of effect it is and how large. Descriptors are
//! registered once at session start and never mutated.

use serde::{Deserialize, Serialize};

/// Identifier for a modifier (e.g. `"hardened_scales"`).
///
/// Ids are what the user toggles on and off. Display names live on the
/// descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierId(pub String);

impl ModifierId {
    /// Create a new modifier ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModifierId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModifierId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ModifierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a modifier does to a running total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Adds `magnitude` to the running total.
    Additive,
    /// Multiplies the running total by `magnitude / divisor`, rounding up.
    Multiplier,
    /// Contributes `magnitude` to the equipment channel's base.
    FlatAdd,
    /// Adds `magnitude` during entry events only.
    TriggeredBonus,
    /// Creates `magnitude` extra tokens per counter on the primary creature.
    TokenMaker,
}

impl ModifierKind {
    /// Lowercase label used in configuration and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ModifierKind::Additive => "additive",
            ModifierKind::Multiplier => "multiplier",
            ModifierKind::FlatAdd => "flat_add",
            ModifierKind::TriggeredBonus => "triggered_bonus",
            ModifierKind::TokenMaker => "token_maker",
        }
    }
}

impl std::fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn default_divisor() -> i64 {
    1
}

/// Static modifier definition.
///
/// ## Example
///
/// ```
/// use ccg_counters::modifiers::{ModifierDescriptor, ModifierKind};
///
/// let scales = ModifierDescriptor::new("hardened_scales", "Hardened Scales", ModifierKind::Additive, 1);
/// assert_eq!(scales.magnitude, 1);
///
/// let half_again = ModifierDescriptor::new("half_again", "Half Again", ModifierKind::Multiplier, 3)
///     .with_divisor(2);
/// assert_eq!(half_again.factor_label(), "3/2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierDescriptor {
    /// Unique identifier.
    pub id: ModifierId,

    /// Display name used in derivation steps.
    pub name: String,

    /// Effect kind.
    pub kind: ModifierKind,

    /// Effect size. Never negative.
    pub magnitude: i64,

    /// Denominator for multipliers. Always positive; 1 for whole factors.
    #[serde(default = "default_divisor")]
    pub divisor: i64,

    /// Another modifier that must also be active for this one to count.
    #[serde(default)]
    pub requires: Option<ModifierId>,
}

impl ModifierDescriptor {
    /// Create a new descriptor with divisor 1 and no prerequisite.
    #[must_use]
    pub fn new(
        id: impl Into<ModifierId>,
        name: impl Into<String>,
        kind: ModifierKind,
        magnitude: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            magnitude,
            divisor: 1,
            requires: None,
        }
    }

    /// Set the multiplier denominator (builder pattern).
    #[must_use]
    pub fn with_divisor(mut self, divisor: i64) -> Self {
        self.divisor = divisor;
        self
    }

    /// Require another modifier to be active (builder pattern).
    #[must_use]
    pub fn with_requires(mut self, id: impl Into<ModifierId>) -> Self {
        self.requires = Some(id.into());
        self
    }

    /// Check if this modifier is of a given kind.
    #[must_use]
    pub fn is(&self, kind: ModifierKind) -> bool {
        self.kind == kind
    }

    /// True for a multiplier of exactly two.
    #[must_use]
    pub fn is_doubler(&self) -> bool {
        self.kind == ModifierKind::Multiplier && self.magnitude == 2 * self.divisor
    }

    /// Factor as written in steps: `"2"` or `"3/2"`.
    #[must_use]
    pub fn factor_label(&self) -> String {
        if self.divisor == 1 {
            self.magnitude.to_string()
        } else {
            format!("{}/{}", self.magnitude, self.divisor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let city = ModifierDescriptor::new("citys_blessing", "City's Blessing", ModifierKind::FlatAdd, 1)
            .with_requires("anduril");

        assert_eq!(city.id, ModifierId::new("citys_blessing"));
        assert_eq!(city.requires, Some(ModifierId::new("anduril")));
        assert_eq!(city.divisor, 1);
        assert!(city.is(ModifierKind::FlatAdd));
    }

    #[test]
    fn test_is_doubler() {
        let doubler = ModifierDescriptor::new("a", "A", ModifierKind::Multiplier, 2);
        let tripler = ModifierDescriptor::new("b", "B", ModifierKind::Multiplier, 3);
        let four_halves = ModifierDescriptor::new("c", "C", ModifierKind::Multiplier, 4).with_divisor(2);
        let additive = ModifierDescriptor::new("d", "D", ModifierKind::Additive, 2);

        assert!(doubler.is_doubler());
        assert!(!tripler.is_doubler());
        assert!(four_halves.is_doubler());
        assert!(!additive.is_doubler());
    }

    #[test]
    fn test_factor_label() {
        let whole = ModifierDescriptor::new("a", "A", ModifierKind::Multiplier, 3);
        let frac = ModifierDescriptor::new("b", "B", ModifierKind::Multiplier, 3).with_divisor(2);

        assert_eq!(whole.factor_label(), "3");
        assert_eq!(frac.factor_label(), "3/2");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ModifierKind::TriggeredBonus).unwrap();
        assert_eq!(json, "\"triggered_bonus\"");

        let kind: ModifierKind = serde_json::from_str("\"flat_add\"").unwrap();
        assert_eq!(kind, ModifierKind::FlatAdd);
    }

    #[test]
    fn test_descriptor_defaults_on_deserialize() {
        let json = r#"{"id":"x","name":"X","kind":"multiplier","magnitude":2}"#;
        let descriptor: ModifierDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(descriptor.divisor, 1);
        assert_eq!(descriptor.requires, None);
        assert_eq!(descriptor.id.as_str(), "x");
    }
}
