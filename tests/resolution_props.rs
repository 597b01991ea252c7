//! Property-based tests for counter resolution.

use proptest::prelude::*;

use ccg_counters::core::{parse_base, CalculatorConfig, DEFAULT_MAX_BASE};
use ccg_counters::modifiers::{ActiveModifierSet, ModifierKind, ModifierRegistry};
use ccg_counters::resolution::{CounterResolver, ResolutionEvent};
use ccg_counters::session::{Session, StaticIdentity};

/// Pick a subset of the builtin modifiers from a bitmask.
fn active_from_mask(registry: &ModifierRegistry, mask: u16) -> ActiveModifierSet {
    registry
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, d)| d.id.clone())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Same inputs, same value and steps.
    #[test]
    fn prop_resolution_is_deterministic(base in -1_000i64..100_000, mask in 0u16..(1 << 11)) {
        let registry = ModifierRegistry::builtin();
        let active = active_from_mask(&registry, mask);

        for event in [ResolutionEvent::Entry, ResolutionEvent::Combat] {
            let first = CounterResolver::resolve_event(&registry, event, base, &active);
            let second = CounterResolver::resolve_event(&registry, event, base, &active);
            prop_assert_eq!(first, second);
        }
    }

    /// Final value equals (base + additive sum) * multiplier product.
    #[test]
    fn prop_additives_before_multipliers(base in 0i64..10_000, mask in 0u16..(1 << 11)) {
        let registry = ModifierRegistry::builtin();
        let active = active_from_mask(&registry, mask);

        let additive: i64 = registry
            .of_kind(ModifierKind::Additive)
            .filter(|d| active.applies(d))
            .map(|d| d.magnitude)
            .sum();
        let product: i64 = registry
            .of_kind(ModifierKind::Multiplier)
            .filter(|d| active.applies(d))
            .map(|d| d.magnitude)
            .product();

        let resolution = CounterResolver::resolve(&registry, base, &active);
        prop_assert_eq!(resolution.value, (base + additive) * product);
    }

    /// Negative bases resolve exactly like 0.
    #[test]
    fn prop_negative_base_is_zero(base in i64::MIN..0, mask in 0u16..(1 << 11)) {
        let registry = ModifierRegistry::builtin();
        let active = active_from_mask(&registry, mask);

        let negative = CounterResolver::resolve(&registry, base, &active);
        let zero = CounterResolver::resolve(&registry, 0, &active);
        prop_assert_eq!(negative.value, zero.value);
        prop_assert_eq!(negative.steps, zero.steps);
    }

    /// Fractional multipliers always round up.
    #[test]
    fn prop_fractional_multiplier_rounds_up(base in 0i64..1_000_000, num in 1i64..10, den in 1i64..10) {
        let config = CalculatorConfig::from_toml_str(&format!(
            "[session]\ninclude_builtin = false\n\n[[modifier]]\nid = \"m\"\nname = \"M\"\nkind = \"multiplier\"\nmagnitude = {num}\ndivisor = {den}\n"
        ))
        .unwrap();
        let registry = config.build_registry().unwrap();
        let active: ActiveModifierSet = ["m"].into_iter().collect();

        let value = CounterResolver::resolve(&registry, base, &active).value;
        prop_assert!(value * den >= base * num);
        prop_assert!((value - 1) * den < base * num || base * num == 0);
    }

    /// Parsed input is always within bounds.
    #[test]
    fn prop_parse_base_in_range(text in ".{0,24}") {
        let base = parse_base(&text, DEFAULT_MAX_BASE);
        prop_assert!((0..=DEFAULT_MAX_BASE).contains(&base));
    }

    /// No sequence of counter edits drives a creature negative.
    #[test]
    fn prop_counters_never_negative(deltas in prop::collection::vec(-20i64..20, 0..40)) {
        let mut session = Session::open(&StaticIdentity::authenticated(), CalculatorConfig::default()).unwrap();
        let index = session.add_creature("Bear").unwrap();

        for delta in deltas {
            let counters = session.increment(index, delta).unwrap();
            prop_assert!(counters >= 0);
        }
    }
}
