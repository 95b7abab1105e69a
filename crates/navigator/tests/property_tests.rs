use composite::Component;
use composite_navigator::{NavigationError, Navigator};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["A", "B", "C", "D"];

/// Flat scopes of leaves whose names come from a small alphabet, so that
/// repeats and misses are both common
fn flat_scope() -> impl Strategy<Value = Vec<Component>> {
    prop::collection::vec((0..NAMES.len(), any::<i32>()), 0..40).prop_map(|leaves| {
        leaves
            .into_iter()
            .map(|(name, value)| Component::leaf(NAMES[name], value))
            .collect()
    })
}

fn any_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(NAMES.to_vec())
}

proptest! {
    #[test]
    fn split_reconstructs_scope(scope in flat_scope(), group_size in 1usize..10) {
        let nav = Navigator::new(&scope);
        let windows: Vec<_> = nav.split(group_size).collect();

        prop_assert_eq!(windows.len(), (scope.len() + group_size - 1) / group_size);
        if let Some((last, full)) = windows.split_last() {
            prop_assert!(full.iter().all(|w| w.len() == group_size));
            prop_assert!(last.len() >= 1 && last.len() <= group_size);
        }

        let rejoined: Vec<&Component> = windows.iter().flat_map(|w| w.scope()).collect();
        let original: Vec<&Component> = scope.iter().collect();
        prop_assert_eq!(rejoined, original);
    }

    #[test]
    fn split_zero_is_always_empty(scope in flat_scope()) {
        prop_assert_eq!(Navigator::new(&scope).split(0).count(), 0);
    }

    #[test]
    fn extract_never_returns_other_names(scope in flat_scope(), name in any_name()) {
        let nav = Navigator::new(&scope);
        match nav.extract(name) {
            Some(element) => prop_assert_eq!(element.name(), name),
            None => prop_assert!(scope.iter().all(|c| c.name() != name)),
        }
    }

    #[test]
    fn get_values_matches_filtered_scope(scope in flat_scope(), name in any_name()) {
        let nav = Navigator::new(&scope);
        let expected: Vec<i32> = scope
            .iter()
            .filter(|c| c.name() == name)
            .map(|c| match c.value() {
                Some(composite_navigator::Value::Int(v)) => *v,
                _ => unreachable!(),
            })
            .collect();

        prop_assert_eq!(nav.get_values::<i32>(name).unwrap(), expected);
    }

    #[test]
    fn get_value_requires_exactly_one(scope in flat_scope(), name in any_name()) {
        let nav = Navigator::new(&scope);
        let count = scope.iter().filter(|c| c.name() == name).count();

        match nav.get_value::<i32>(name) {
            Ok(value) => {
                prop_assert_eq!(count, 1);
                prop_assert_eq!(Some(value), nav.try_get_value::<i32>(name).unwrap());
            }
            Err(NavigationError::Multiplicity { found, .. }) => {
                prop_assert_ne!(count, 1);
                prop_assert_eq!(found, count);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn descend_into_leaf_is_not_composite(scope in flat_scope(), name in any_name()) {
        let nav = Navigator::new(&scope);
        for child in nav.children(name) {
            prop_assert!(
                matches!(child, Err(NavigationError::NotComposite { .. })),
                "expected NotComposite"
            );
        }
    }
}
