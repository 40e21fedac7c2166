//! Property-based tests for registry invariants.

use hydration::{derived_type_key, TypeRegistry};
use proptest::prelude::*;

#[derive(Default, Debug, PartialEq)]
struct Sample {
    value: u64,
}

#[derive(Default, Debug, PartialEq)]
struct Replacement {
    value: i64,
}

proptest! {
    #[test]
    fn any_explicit_key_round_trips(key in "[A-Za-z0-9_.]{1,64}") {
        let registry = TypeRegistry::new();
        registry.register_with_key::<Sample>(key.clone());

        prop_assert!(registry.knows_type_key(&key));
        let resolved = registry.try_resolve_with_key::<Sample>(&key);
        prop_assert_eq!(resolved.unwrap().value, 0);
    }

    #[test]
    fn repeated_registration_keeps_a_single_entry(count in 1usize..16) {
        let registry = TypeRegistry::new();
        for _ in 0..count {
            registry.register_with_key::<Sample>("repeated.key");
        }

        prop_assert_eq!(registry.len(), 1);
        prop_assert_eq!(registry.type_keys(), vec!["repeated.key".to_string()]);
    }

    #[test]
    fn last_registration_under_a_key_wins(key in "[A-Za-z0-9_.]{1,64}") {
        let registry = TypeRegistry::new();
        registry.register_with_key::<Sample>(key.clone());
        registry.register_with_key::<Replacement>(key.clone());

        let resolved = registry.try_resolve_with_key::<Replacement>(&key);
        prop_assert_eq!(resolved.unwrap().value, 0);
        prop_assert!(registry.try_resolve_with_key::<Sample>(&key).is_err());
    }
}

#[test]
fn test_derived_keys_are_deterministic() {
    let first = derived_type_key::<Sample>();
    let second = derived_type_key::<Sample>();

    assert_eq!(first, second);
    assert_eq!(first, "property_tests::Sample");
}
