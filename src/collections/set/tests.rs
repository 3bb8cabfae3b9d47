#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::collections::{Array, List};

#[test]
fn test_add_and_remove() {
    let mut set = ListSet::new();

    assert!(set.add("a"));
    assert!(set.add("b"));
    assert!(!set.add("a"), "Adding a present value should be a no-op.");
    assert_eq!(set.size(), 2);

    assert_eq!(set.remove(&"a"), Some("a"));
    assert_eq!(set.remove(&"a"), None);
    assert!(!set.contains(&"a"));
    assert!(set.contains(&"b"));

    assert!(set.add("a"));
    assert_eq!(set.as_slice(), ["b", "a"], "A re-added value should go to the end.");
}

#[test]
fn test_construction_deduplicates() {
    let set = ListSet::from([3, 1, 3, 2, 1]);
    assert_eq!(set.as_slice(), [3, 1, 2], "The first occurrence of each value should be kept.");

    assert_eq!(ListSet::from(List::from([1, 1])).size(), 1);
    assert_eq!(ListSet::from(Array::from([2, 2, 2])).into_list(), List::from([2]));
    assert!(ListSet::<u8>::default().is_empty());
}

#[test]
fn test_set_operations() {
    let a = ListSet::from(['x', 'y', 'z']);
    let b = ListSet::from(['z', 'w', 'x']);

    assert_eq!(
        a.union(&b).as_slice(),
        ['x', 'y', 'z', 'w'],
        "A union should list the receiver's values first."
    );
    assert_eq!(a.intersection(&b).as_slice(), ['x', 'z'], "An intersection should keep the receiver's order.");
    assert_eq!(a.difference(&b).as_slice(), ['y']);
    assert_eq!(b.difference(&a).as_slice(), ['w']);

    assert_eq!(&a | &b, a.union(&b));
    assert_eq!(&a & &b, a.intersection(&b));
    assert_eq!(&a - &b, a.difference(&b));
}

#[test]
fn test_subset_direction() {
    let small = ListSet::from([1, 2]);
    let large = ListSet::from([2, 3, 1]);

    assert!(small.is_subset(&large), "A smaller set should be a subset of a larger one.");
    assert!(!large.is_subset(&small));
    assert!(large.is_superset(&small));
    assert!(!small.is_superset(&large));
    assert!(ListSet::new().is_subset(&small), "The empty set should be a subset of everything.");
}

#[test]
fn test_equality_and_display() {
    assert_eq!(ListSet::from([1, 2]), ListSet::from([2, 1]), "Equality should ignore order.");
    assert_ne!(ListSet::from([1, 2]), ListSet::from([1]));

    let set = ListSet::from(["b", "a"]);
    assert_eq!(set.to_string(), "#{b, a}");
    assert_eq!(format!("{set:?}"), r#"ListSet { contents: {"b", "a"}, size: 2 }"#);
}

fn small_set() -> impl Strategy<Value = ListSet<u8>> {
    prop::collection::vec(0_u8..16, 0..12).prop_map(ListSet::from_iter)
}

proptest! {
    #[test]
    fn union_contains_both(a in small_set(), b in small_set()) {
        let union = a.union(&b);
        prop_assert!(a.is_subset(&union));
        prop_assert!(b.is_subset(&union));
        prop_assert!(union.iter().all(|value| a.contains(value) || b.contains(value)));
    }

    #[test]
    fn intersection_is_in_both(a in small_set(), b in small_set()) {
        let intersection = a.intersection(&b);
        prop_assert!(intersection.is_subset(&a));
        prop_assert!(intersection.is_subset(&b));
        prop_assert_eq!(intersection, b.intersection(&a));
    }

    #[test]
    fn difference_partitions_the_receiver(a in small_set(), b in small_set()) {
        let difference = a.difference(&b);
        prop_assert!(difference.iter().all(|value| !b.contains(value)));
        prop_assert_eq!(difference.union(&a.intersection(&b)), a);
    }

    #[test]
    fn values_stay_unique(values in prop::collection::vec(0_u8..8, 0..32)) {
        let set: ListSet<u8> = values.iter().copied().collect();
        let slice = set.as_slice();
        for (index, value) in slice.iter().enumerate() {
            prop_assert!(!slice[index + 1..].contains(value));
            prop_assert!(values.contains(value));
        }
    }
}
