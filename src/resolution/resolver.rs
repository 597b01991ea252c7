//! Counter resolution - the additive-then-multiplicative pipeline.
//!
//! `CounterResolver` turns a base quantity and an active modifier set into
//! a final quantity plus the steps that produced it. It reads the registry
//! and the active set and touches nothing else: logging the result and
//! applying it to creatures is the caller's job.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::step::{Resolution, Step, StepOp};
use crate::modifiers::{ActiveModifierSet, ModifierKind, ModifierRegistry};

/// The event a quantity is being resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionEvent {
    /// A creature enters. Triggered bonuses join the additive pass.
    Entry,
    /// An attack. Only additive and multiplier modifiers apply.
    Combat,
}

/// Resolves counter quantities against a registry.
pub struct CounterResolver;

impl CounterResolver {
    /// Resolve with additive then multiplier modifiers.
    ///
    /// Negative bases are treated as 0.
    ///
    /// ```
    /// use ccg_counters::modifiers::{ids, ActiveModifierSet, ModifierRegistry};
    /// use ccg_counters::resolution::CounterResolver;
    ///
    /// let registry = ModifierRegistry::builtin();
    /// // Toggle order doesn't matter: additives always go first.
    /// let active: ActiveModifierSet = [ids::BRANCHING_EVOLUTION, ids::HARDENED_SCALES]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let resolution = CounterResolver::resolve(&registry, 3, &active);
    /// assert_eq!(resolution.value, 8);
    /// assert_eq!(
    ///     resolution.step_lines(),
    ///     vec!["Hardened Scales adds +1 -> 4", "Branching Evolution doubles -> 8"]
    /// );
    /// ```
    #[must_use]
    pub fn resolve(registry: &ModifierRegistry, base: i64, active: &ActiveModifierSet) -> Resolution {
        Self::resolve_event(registry, ResolutionEvent::Combat, base, active)
    }

    /// Resolve for a specific event.
    ///
    /// For [`ResolutionEvent::Entry`], triggered bonuses are applied in the
    /// additive pass at their declaration position.
    #[must_use]
    pub fn resolve_event(
        registry: &ModifierRegistry,
        event: ResolutionEvent,
        base: i64,
        active: &ActiveModifierSet,
    ) -> Resolution {
        let base = base.max(0);
        let mut resolution = Resolution::unmodified(base);
        let mut value = base;

        // Additive pass
        for descriptor in registry.iter().filter(|d| active.applies(d)) {
            let op = match (descriptor.kind, event) {
                (ModifierKind::Additive, _) => StepOp::Add(descriptor.magnitude),
                (ModifierKind::TriggeredBonus, ResolutionEvent::Entry) => {
                    StepOp::Trigger(descriptor.magnitude)
                }
                _ => continue,
            };
            value = value.saturating_add(descriptor.magnitude);
            resolution.steps.push(Step {
                modifier: descriptor.id.clone(),
                name: descriptor.name.clone(),
                op,
                value,
            });
        }

        // Multiplier pass
        for descriptor in registry
            .of_kind(ModifierKind::Multiplier)
            .filter(|d| active.applies(d))
        {
            value = scale_ceil(value, descriptor.magnitude, descriptor.divisor);
            resolution.steps.push(Step {
                modifier: descriptor.id.clone(),
                name: descriptor.name.clone(),
                op: StepOp::Multiply {
                    magnitude: descriptor.magnitude,
                    divisor: descriptor.divisor,
                },
                value,
            });
        }

        resolution.value = value;
        trace!(?event, base, value, steps = resolution.steps.len(), "resolved");
        resolution
    }

    /// Base of the equipment channel: the sum of active flat-add magnitudes.
    ///
    /// Zero when no flat-add modifier applies.
    #[must_use]
    pub fn flat_base(registry: &ModifierRegistry, active: &ActiveModifierSet) -> i64 {
        Self::sum_of_kind(registry, ModifierKind::FlatAdd, active)
    }

    /// Extra tokens created per counter on the entering primary creature.
    #[must_use]
    pub fn tokens_per_counter(registry: &ModifierRegistry, active: &ActiveModifierSet) -> i64 {
        Self::sum_of_kind(registry, ModifierKind::TokenMaker, active)
    }

    fn sum_of_kind(registry: &ModifierRegistry, kind: ModifierKind, active: &ActiveModifierSet) -> i64 {
        registry
            .of_kind(kind)
            .filter(|d| active.applies(d))
            .fold(0i64, |sum, d| sum.saturating_add(d.magnitude))
    }
}

/// `ceil(value * magnitude / divisor)` for non-negative inputs, saturating.
fn scale_ceil(value: i64, magnitude: i64, divisor: i64) -> i64 {
    let product = value.saturating_mul(magnitude);
    product / divisor + i64::from(product % divisor != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::{ids, ModifierDescriptor};

    fn active(ids: &[&str]) -> ActiveModifierSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_no_modifiers() {
        let registry = ModifierRegistry::builtin();
        let resolution = CounterResolver::resolve(&registry, 2, &ActiveModifierSet::new());

        assert_eq!(resolution.value, 2);
        assert!(resolution.steps.is_empty());
    }

    #[test]
    fn test_single_additive() {
        let registry = ModifierRegistry::builtin();
        let resolution = CounterResolver::resolve(&registry, 3, &active(&[ids::HARDENED_SCALES]));

        assert_eq!(resolution.value, 4);
        assert_eq!(resolution.steps.len(), 1);
        let line = resolution.steps[0].to_string();
        assert!(line.contains("+1"));
        assert!(line.contains('4'));
    }

    #[test]
    fn test_additive_before_multiplier() {
        let registry = ModifierRegistry::builtin();
        let resolution = CounterResolver::resolve(
            &registry,
            3,
            &active(&[ids::BRANCHING_EVOLUTION, ids::HARDENED_SCALES]),
        );

        assert_eq!(resolution.value, 8);
    }

    #[test]
    fn test_additive_declared_after_multiplier_still_first() {
        // Ozolith is declared after three doublers in the builtin table.
        let registry = ModifierRegistry::builtin();
        let resolution = CounterResolver::resolve(&registry, 1, &active(&[ids::KAMI, ids::OZOLITH]));

        assert_eq!(resolution.value, 4);
        assert_eq!(
            resolution.step_lines(),
            vec![
                "Ozolith, the Shattered Spire adds +1 -> 2",
                "Kami of Whispered Hopes doubles -> 4",
            ]
        );
    }

    #[test]
    fn test_all_doublers_stack() {
        let registry = ModifierRegistry::builtin();
        let resolution = CounterResolver::resolve(
            &registry,
            1,
            &active(&[ids::BRANCHING_EVOLUTION, ids::KAMI, ids::INNKEEPER]),
        );

        assert_eq!(resolution.value, 8);
        assert_eq!(resolution.steps.len(), 3);
    }

    #[test]
    fn test_negative_base_clamps_to_zero() {
        let registry = ModifierRegistry::builtin();
        let resolution = CounterResolver::resolve(&registry, -7, &active(&[ids::KAMI]));

        assert_eq!(resolution.base, 0);
        assert_eq!(resolution.value, 0);
    }

    #[test]
    fn test_triggered_bonus_only_on_entry() {
        let registry = ModifierRegistry::builtin();
        let set = active(&[ids::UNICORN, ids::CRAWLER]);

        let combat = CounterResolver::resolve_event(&registry, ResolutionEvent::Combat, 2, &set);
        let entry = CounterResolver::resolve_event(&registry, ResolutionEvent::Entry, 2, &set);

        assert_eq!(combat.value, 2);
        assert_eq!(entry.value, 4);
        assert_eq!(entry.steps[0].to_string(), "Good-Fortune Unicorn (ETB trigger) triggers +1 -> 3");
    }

    #[test]
    fn test_triggered_bonus_is_doubled() {
        let registry = ModifierRegistry::builtin();
        let set = active(&[ids::UNICORN, ids::BRANCHING_EVOLUTION]);

        let entry = CounterResolver::resolve_event(&registry, ResolutionEvent::Entry, 0, &set);
        assert_eq!(entry.value, 2);
    }

    #[test]
    fn test_ceiling_rounding() {
        let mut registry = ModifierRegistry::new();
        registry
            .register(
                ModifierDescriptor::new("half_again", "Half Again", ModifierKind::Multiplier, 3)
                    .with_divisor(2),
            )
            .unwrap();

        let resolution = CounterResolver::resolve(&registry, 5, &active(&["half_again"]));
        // 7.5 rounds up, not down or to even.
        assert_eq!(resolution.value, 8);
        assert_eq!(resolution.steps[0].to_string(), "Half Again multiplies x3/2 -> 8");

        let exact = CounterResolver::resolve(&registry, 4, &active(&["half_again"]));
        assert_eq!(exact.value, 6);
    }

    #[test]
    fn test_prerequisite_gates_modifier() {
        let registry = ModifierRegistry::builtin();

        assert_eq!(CounterResolver::flat_base(&registry, &active(&[ids::CITYS_BLESSING])), 0);
        assert_eq!(CounterResolver::flat_base(&registry, &active(&[ids::ANDURIL])), 1);
        assert_eq!(
            CounterResolver::flat_base(&registry, &active(&[ids::ANDURIL, ids::CITYS_BLESSING])),
            2
        );
    }

    #[test]
    fn test_flat_add_ignored_by_pipeline() {
        let registry = ModifierRegistry::builtin();
        let resolution = CounterResolver::resolve(&registry, 3, &active(&[ids::ANDURIL, ids::HORNBEETLE]));

        assert_eq!(resolution.value, 3);
        assert!(resolution.is_unmodified());
    }

    #[test]
    fn test_tokens_per_counter() {
        let registry = ModifierRegistry::builtin();
        assert_eq!(CounterResolver::tokens_per_counter(&registry, &ActiveModifierSet::new()), 0);
        assert_eq!(CounterResolver::tokens_per_counter(&registry, &active(&[ids::HORNBEETLE])), 1);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let registry = ModifierRegistry::builtin();
        let resolution = CounterResolver::resolve(
            &registry,
            i64::MAX,
            &active(&[ids::HARDENED_SCALES, ids::KAMI]),
        );

        assert_eq!(resolution.value, i64::MAX);
    }

    #[test]
    fn test_scale_ceil() {
        assert_eq!(scale_ceil(0, 3, 2), 0);
        assert_eq!(scale_ceil(1, 1, 2), 1);
        assert_eq!(scale_ceil(3, 1, 2), 2);
        assert_eq!(scale_ceil(4, 2, 1), 8);
    }
}
