//! Modifier registry.
//!
//! The `ModifierRegistry` stores every modifier a session knows about, in
//! declaration order. That order is the order resolution applies effects
//! in, so the registry is a `Vec` with a hash index beside it rather than
//! a bare map.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::descriptor::{ModifierDescriptor, ModifierId, ModifierKind};
use crate::core::error::RegistryError;

/// Ids of the built-in support cards.
pub mod ids {
    pub const HARDENED_SCALES: &str = "hardened_scales";
    pub const BRANCHING_EVOLUTION: &str = "branching_evolution";
    pub const KAMI: &str = "kami";
    pub const INNKEEPER: &str = "innkeeper";
    pub const OZOLITH: &str = "ozolith";
    pub const CONCLAVE_MENTOR: &str = "conclave_mentor";
    pub const ANDURIL: &str = "anduril";
    pub const CITYS_BLESSING: &str = "citys_blessing";
    pub const UNICORN: &str = "unicorn";
    pub const CRAWLER: &str = "crawler";
    pub const HORNBEETLE: &str = "hornbeetle";
}

/// Ordered registry of modifier descriptors.
///
/// ## Example
///
/// ```
/// use ccg_counters::modifiers::{ModifierRegistry, ModifierDescriptor, ModifierKind};
///
/// let mut registry = ModifierRegistry::new();
/// registry
///     .register(ModifierDescriptor::new("scales", "Hardened Scales", ModifierKind::Additive, 1))
///     .unwrap();
///
/// assert_eq!(registry.get(&"scales".into()).unwrap().name, "Hardened Scales");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModifierRegistry {
    descriptors: Vec<ModifierDescriptor>,
    index: FxHashMap<ModifierId, usize>,
}

impl ModifierRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in support card table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for descriptor in builtin_descriptors() {
            registry.insert_unchecked(descriptor);
        }
        registry
    }

    /// Build a registry from descriptors, validating each in order.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ModifierDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Validate a descriptor and append it.
    ///
    /// A prerequisite must already be registered, so `requires` never
    /// points forward.
    pub fn register(&mut self, descriptor: ModifierDescriptor) -> Result<(), RegistryError> {
        self.validate(&descriptor)?;
        debug!(id = %descriptor.id, kind = %descriptor.kind, magnitude = descriptor.magnitude, "registered modifier");
        self.insert_unchecked(descriptor);
        Ok(())
    }

    fn validate(&self, descriptor: &ModifierDescriptor) -> Result<(), RegistryError> {
        if descriptor.id.as_str().trim().is_empty() {
            return Err(RegistryError::EmptyId);
        }
        if descriptor.name.trim().is_empty() {
            return Err(RegistryError::EmptyName(descriptor.id.clone()));
        }
        if descriptor.magnitude < 0 {
            return Err(RegistryError::NegativeMagnitude {
                id: descriptor.id.clone(),
                magnitude: descriptor.magnitude,
            });
        }
        if descriptor.divisor <= 0 {
            return Err(RegistryError::InvalidDivisor {
                id: descriptor.id.clone(),
                divisor: descriptor.divisor,
            });
        }
        if self.contains(&descriptor.id) {
            return Err(RegistryError::DuplicateId(descriptor.id.clone()));
        }
        if let Some(requires) = &descriptor.requires {
            if !self.contains(requires) {
                return Err(RegistryError::UnknownPrerequisite {
                    id: descriptor.id.clone(),
                    requires: requires.clone(),
                });
            }
        }
        Ok(())
    }

    fn insert_unchecked(&mut self, descriptor: ModifierDescriptor) {
        self.index.insert(descriptor.id.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
    }

    /// Get a descriptor by id.
    #[must_use]
    pub fn get(&self, id: &ModifierId) -> Option<&ModifierDescriptor> {
        self.index.get(id).map(|&i| &self.descriptors[i])
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: &ModifierId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of registered modifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// All descriptors in declaration order.
    #[must_use]
    pub fn descriptors(&self) -> &[ModifierDescriptor] {
        &self.descriptors
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ModifierDescriptor> {
        self.descriptors.iter()
    }

    /// Descriptors of one kind, in declaration order.
    pub fn of_kind(&self, kind: ModifierKind) -> impl Iterator<Item = &ModifierDescriptor> {
        self.descriptors.iter().filter(move |d| d.kind == kind)
    }
}

fn builtin_descriptors() -> Vec<ModifierDescriptor> {
    use ModifierKind::*;

    vec![
        ModifierDescriptor::new(ids::HARDENED_SCALES, "Hardened Scales", Additive, 1),
        ModifierDescriptor::new(ids::BRANCHING_EVOLUTION, "Branching Evolution", Multiplier, 2),
        ModifierDescriptor::new(ids::KAMI, "Kami of Whispered Hopes", Multiplier, 2),
        ModifierDescriptor::new(ids::INNKEEPER, "Innkeeper's Talent", Multiplier, 2),
        ModifierDescriptor::new(ids::OZOLITH, "Ozolith, the Shattered Spire", Additive, 1),
        ModifierDescriptor::new(ids::CONCLAVE_MENTOR, "Conclave Mentor", Additive, 1),
        ModifierDescriptor::new(ids::ANDURIL, "Andúril Equipped", FlatAdd, 1),
        ModifierDescriptor::new(ids::CITYS_BLESSING, "City's Blessing (10+ permanents)", FlatAdd, 1)
            .with_requires(ids::ANDURIL),
        ModifierDescriptor::new(ids::UNICORN, "Good-Fortune Unicorn (ETB trigger)", TriggeredBonus, 1),
        ModifierDescriptor::new(ids::CRAWLER, "Duskshell Crawler (ETB trigger)", TriggeredBonus, 1),
        ModifierDescriptor::new(ids::HORNBEETLE, "Iridescent Hornbeetle (token maker)", TokenMaker, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn additive(id: &str) -> ModifierDescriptor {
        ModifierDescriptor::new(id, id.to_uppercase(), ModifierKind::Additive, 1)
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ModifierRegistry::new();
        registry.register(additive("a")).unwrap();

        assert!(registry.get(&"a".into()).is_some());
        assert!(registry.get(&"missing".into()).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let registry =
            ModifierRegistry::from_descriptors(["c", "a", "b"].map(additive)).unwrap();

        let order: Vec<_> = registry.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = ModifierRegistry::new();
        registry.register(additive("a")).unwrap();

        let err = registry.register(additive("a")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("a".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_shape_validation() {
        let mut registry = ModifierRegistry::new();

        assert_eq!(
            registry.register(additive("  ")).unwrap_err(),
            RegistryError::EmptyId
        );
        assert!(matches!(
            registry.register(ModifierDescriptor::new("x", "", ModifierKind::Additive, 1)),
            Err(RegistryError::EmptyName(_))
        ));
        assert!(matches!(
            registry.register(ModifierDescriptor::new("x", "X", ModifierKind::Additive, -1)),
            Err(RegistryError::NegativeMagnitude { magnitude: -1, .. })
        ));
        assert!(matches!(
            registry.register(
                ModifierDescriptor::new("x", "X", ModifierKind::Multiplier, 3).with_divisor(0)
            ),
            Err(RegistryError::InvalidDivisor { divisor: 0, .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_prerequisite_must_exist() {
        let mut registry = ModifierRegistry::new();
        let blessing = ModifierDescriptor::new("city", "City", ModifierKind::FlatAdd, 1)
            .with_requires("sword");

        assert!(matches!(
            registry.register(blessing.clone()),
            Err(RegistryError::UnknownPrerequisite { .. })
        ));

        registry
            .register(ModifierDescriptor::new("sword", "Sword", ModifierKind::FlatAdd, 1))
            .unwrap();
        registry.register(blessing).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_builtin_table() {
        let registry = ModifierRegistry::builtin();

        assert_eq!(registry.len(), 11);
        assert_eq!(registry.of_kind(ModifierKind::Multiplier).count(), 3);
        assert_eq!(registry.of_kind(ModifierKind::Additive).count(), 3);
        assert_eq!(registry.of_kind(ModifierKind::TriggeredBonus).count(), 2);

        let city = registry.get(&ids::CITYS_BLESSING.into()).unwrap();
        assert_eq!(city.requires, Some(ids::ANDURIL.into()));
    }

    #[test]
    fn test_builtin_is_valid() {
        let rebuilt =
            ModifierRegistry::from_descriptors(ModifierRegistry::builtin().descriptors().to_vec());
        assert!(rebuilt.is_ok());
    }
}
