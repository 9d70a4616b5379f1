//! Property-based tests for EnhancedSet laws.
//!
//! These tests verify that EnhancedSet satisfies the algebraic properties
//! expected of a set, and that its ordering guarantees hold.

use enhanced_set::EnhancedSet;
use proptest::prelude::*;
use std::collections::HashSet;

fn set_strategy(max_length: usize) -> impl Strategy<Value = EnhancedSet<i32>> {
    prop::collection::vec(-50..50_i32, 0..max_length).prop_map(EnhancedSet::from)
}

// =============================================================================
// Union Commutativity Law
// Description: A ∪ B equals B ∪ A (as sets, not in order)
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(set_a in set_strategy(30), set_b in set_strategy(30)) {
        prop_assert!(set_a.union(&set_b).equals(&set_b.union(&set_a)));
    }
}

// =============================================================================
// Intersection Commutativity Law
// Description: A ∩ B equals B ∩ A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_commutativity_law(set_a in set_strategy(30), set_b in set_strategy(30)) {
        prop_assert!(set_a.intersect(&set_b).equals(&set_b.intersect(&set_a)));
    }
}

// =============================================================================
// Self Difference Law
// Description: A − A is empty
// =============================================================================

proptest! {
    #[test]
    fn prop_self_difference_law(set in set_strategy(50)) {
        prop_assert!(set.subtract(&set).is_empty());
    }
}

// =============================================================================
// Symmetric Difference Law
// Description: A xor B equals (A ∪ B) − (A ∩ B)
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_law(set_a in set_strategy(30), set_b in set_strategy(30)) {
        let expected = set_a.union(&set_b).subtract(&set_a.intersect(&set_b));
        prop_assert!(set_a.symmetric_diff(&set_b).equals(&expected));
    }
}

// =============================================================================
// Subset Reflexivity Law
// Description: A ⊆ A, and ∅ ⊆ A
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_reflexivity_law(set in set_strategy(50)) {
        let empty: EnhancedSet<i32> = EnhancedSet::new();
        prop_assert!(set.is_subset_of(&set));
        prop_assert!(empty.is_subset_of(&set));
    }
}

// =============================================================================
// Map Identity Law
// Description: A.map(identity) equals A, and keeps A's order
// =============================================================================

proptest! {
    #[test]
    fn prop_map_identity_law(set in set_strategy(50)) {
        let mapped = set.map(|element, _, _| *element);
        prop_assert!(mapped.equals(&set));
        prop_assert!(mapped.iter().eq(set.iter()));
    }
}

// =============================================================================
// Round-trip Law
// Description: rebuilding a set from its elements gives an equal set
// =============================================================================

proptest! {
    #[test]
    fn prop_round_trip_law(set in set_strategy(50)) {
        let elements: Vec<i32> = set.iter().copied().collect();
        let rebuilt = EnhancedSet::from(elements);
        prop_assert!(rebuilt.equals(&set));
        prop_assert!(rebuilt.iter().eq(set.iter()));
    }
}

// =============================================================================
// Insertion Order Law
// Description: iteration yields first occurrences in input order
// =============================================================================

proptest! {
    #[test]
    fn prop_insertion_order_law(elements in prop::collection::vec(-20..20_i32, 0..60)) {
        let set = EnhancedSet::from(elements.clone());

        let mut seen = HashSet::new();
        let expected: Vec<i32> = elements
            .into_iter()
            .filter(|element| seen.insert(*element))
            .collect();

        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
    }
}

// =============================================================================
// Delete Order Law
// Description: deleting an element keeps the relative order of the rest
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_order_law(set in set_strategy(60), target in -50..50_i32) {
        let mut after = set.clone();
        after.delete(&target);

        let expected: Vec<i32> = set.iter().copied().filter(|element| *element != target).collect();
        prop_assert_eq!(after.iter().copied().collect::<Vec<_>>(), expected);
        prop_assert!(!after.has(&target));
    }
}

// =============================================================================
// Native Set Agreement
// Description: algebra agrees with std::collections::HashSet
// =============================================================================

proptest! {
    #[test]
    fn prop_agrees_with_hash_set(set_a in set_strategy(40), set_b in set_strategy(40)) {
        let native_a: HashSet<i32> = set_a.iter().copied().collect();
        let native_b: HashSet<i32> = set_b.iter().copied().collect();

        let union: HashSet<i32> = native_a.union(&native_b).copied().collect();
        let intersection: HashSet<i32> = native_a.intersection(&native_b).copied().collect();
        let difference: HashSet<i32> = native_a.difference(&native_b).copied().collect();
        let symmetric: HashSet<i32> = native_a.symmetric_difference(&native_b).copied().collect();

        prop_assert!(set_a.union(&set_b).equals(&union));
        prop_assert!(set_a.intersect(&set_b).equals(&intersection));
        prop_assert!(set_a.subtract(&set_b).equals(&difference));
        prop_assert!(set_a.xor(&set_b).equals(&symmetric));
        prop_assert_eq!(set_a.is_subset_of(&set_b), native_a.is_subset(&native_b));
        prop_assert_eq!(set_a.is_disjoint_from(&set_b), native_a.is_disjoint(&native_b));
    }
}

// =============================================================================
// Fold Consistency
// Description: reduce and fold agree with iterator sums
// =============================================================================

proptest! {
    #[test]
    fn prop_fold_consistency(set in set_strategy(50)) {
        let expected: i64 = set.iter().map(|element| i64::from(*element)).sum();
        let folded = set.fold(0_i64, |accumulator, element, _, _| accumulator + i64::from(*element));
        prop_assert_eq!(folded, expected);

        let reduced = set.reduce(|accumulator, element, _, _| accumulator.wrapping_add(*element));
        prop_assert_eq!(reduced.is_ok(), !set.is_empty());
    }
}

// =============================================================================
// Vec Model Agreement
// Description: any sequence of add/delete/discard behaves like a Vec that
// keeps first occurrences, across the Empty, Small and Large storage states
// =============================================================================

#[derive(Debug, Clone)]
enum Command {
    Add(i32),
    Delete(i32),
    Discard(Vec<i32>),
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0..24_i32).prop_map(Command::Add),
        2 => (0..24_i32).prop_map(Command::Delete),
        1 => prop::collection::vec(0..24_i32, 0..12).prop_map(Command::Discard),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_agrees_with_vec_model(commands in prop::collection::vec(command_strategy(), 0..120)) {
        let mut set: EnhancedSet<i32> = EnhancedSet::new();
        let mut model: Vec<i32> = Vec::new();

        for command in commands {
            match command {
                Command::Add(element) => {
                    let expected = !model.contains(&element);
                    if expected {
                        model.push(element);
                    }
                    prop_assert_eq!(set.add(element), expected);
                }
                Command::Delete(element) => {
                    let position = model.iter().position(|item| *item == element);
                    if let Some(position) = position {
                        model.remove(position);
                    }
                    prop_assert_eq!(set.delete(&element), position.is_some());
                }
                Command::Discard(elements) => {
                    model.retain(|item| !elements.contains(item));
                    set.discard(&elements);
                }
            }

            prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), model.clone());
            prop_assert_eq!(set.is_empty(), model.is_empty());
            for element in 0..24 {
                prop_assert_eq!(set.has(&element), model.contains(&element));
            }
        }

        let other = EnhancedSet::from([3, 30, 1]);
        let expected: Vec<i32> = model
            .iter()
            .copied()
            .filter(|element| !other.has(element))
            .chain([3, 30, 1].into_iter().filter(|element| !model.contains(element)))
            .collect();
        prop_assert_eq!(set.xor(&other).iter().copied().collect::<Vec<_>>(), expected);
    }
}
