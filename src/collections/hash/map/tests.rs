#![cfg(test)]

use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;
use proptest::prelude::*;

use super::*;
use crate::collections::{Array, Sequence};
use crate::util::hash::{FixedHash, PassThroughBuilder};

#[test]
fn test_set_is_an_upsert() {
    let mut map: Map<&str, i32> = Map::new();

    assert_eq!(map.set("b", 1), None);
    assert_eq!(map.set("a", 2), None);
    assert_eq!(map.set("b", 3), Some(1), "Setting an existing key should return the old value.");

    assert_eq!(map.size(), 2, "Replacing a value shouldn't add an entry.");
    assert_eq!(map.get("b"), Some(&3));
    assert_eq!(
        map.keys(),
        Array::from([&"b", &"a"]),
        "A replaced key should keep its original position."
    );
    assert_eq!(map.values(), Array::from([&3, &2]));
}

#[test]
fn test_insertion_order_survives_growth() {
    let mut map = Map::<usize, usize>::new();
    for i in (0..100).rev() {
        map.set(i, i * 2);
    }

    assert!(map.cap() >= 100);
    assert_eq!(
        map.keys().iter().map(|key| **key).collect::<Vec<_>>(),
        (0..100).rev().collect::<Vec<_>>(),
        "Rehashing should never reorder entries."
    );
    assert!((0..100).all(|i| map.get(&i) == Some(&(i * 2))));
}

#[test]
fn test_lookup() {
    let map: Map<String, i32> = Map::from([("one".to_string(), 1), ("uno".into(), 1)]);

    assert!(map.contains_key("one"));
    assert!(!map.contains_key("two"));
    assert!(map.contains_value(&1));
    assert!(!map.contains_value(&2));
    assert!(map.contains_entry("uno", &1));
    assert!(!map.contains_entry("uno", &2));
    assert_eq!(map.get_key(&1).map(String::as_str), Some("one"), "get_key should find the first match.");
    assert_eq!(map.get_key(&2), None);
    assert_eq!(map.get_entry("uno"), Some((&"uno".to_string(), &1)));
    assert_eq!(map.get("two"), None);

    let empty: Map<String, i32> = Map::new();
    assert_eq!(empty.get("one"), None, "Lookups on an unallocated Map should be absent.");
    assert!(!empty.contains_key("one"));
}

#[test]
fn test_removal() {
    let mut map: Map<char, u8> = ('a'..='e').zip(0..).collect();

    assert_eq!(map.remove(&'b'), Some(1));
    assert_eq!(map.remove(&'b'), None, "Removing twice should do nothing.");
    assert_eq!(map.remove_entry(&'d'), Some(('d', 3)));
    assert_eq!(map.remove_value(&4), Some(('e', 4)));
    assert_eq!(map.remove_value(&9), None);

    assert_eq!(map.keys(), Array::from([&'a', &'c']), "Removal should keep the remaining order.");
    assert_eq!(map.get(&'c'), Some(&2), "Remaining entries should still be found.");

    map.remove_all();
    assert!(map.is_empty());
    assert_eq!(map.get(&'a'), None);
    map.set('z', 26);
    assert_eq!(map.keys(), Array::from([&'z']));
}

#[test]
fn test_hash_collisions() {
    let mut map = Map::with_cap_and_hasher(6, PassThroughBuilder);
    map.set(FixedHash::new(5, "zero"), 0);
    map.set(FixedHash::new(5, "one"), 1);
    map.set(FixedHash::new(1, "two"), 2);
    map.set(FixedHash::new(5, "three"), 3);
    map.set(FixedHash::new(5, "four"), 4);

    assert_eq!(map.remove(&FixedHash::new(5, "zero")), Some(0));

    for (label, value) in [("one", 1), ("two", 2), ("three", 3), ("four", 4)] {
        let hash = if label == "two" { 1 } else { 5 };
        assert_eq!(
            map.get(&FixedHash::new(hash, label)),
            Some(&value),
            "Map should handle hash collisions so that no entries are lost during removal."
        );
    }

    map.remove(&FixedHash::new(5, "three"));
    assert_eq!(
        map.into_iter().map(|(key, _)| key.label()).collect::<Vec<_>>(),
        ["one", "two", "four"],
        "Hash collisions should be handled in a wrapping manner."
    );
}

#[test]
fn test_from_keys_and_values() {
    let map: Map<_, _> = Map::from_keys_and_values(["x", "y", "x"], [1, 2, 3]).unwrap();
    assert_eq!(map.get("x"), Some(&3), "A later duplicate key should win.");
    assert_eq!(map.size(), 2);

    let error = Map::<&str, i32>::from_keys_and_values(["x"], [1, 2]).unwrap_err();
    assert_eq!(error, LengthMismatch { keys: 1, values: 2 });
    assert_eq!(
        error.to_string(),
        "The number of keys does not equal the number of values (1 != 2)!"
    );
}

#[test]
fn test_equality_ignores_order() {
    let a: Map<_, _> = Map::from([(1, 'a'), (2, 'b')]);
    let b: Map<_, _> = Map::from([(2, 'b'), (1, 'a')]);
    let c: Map<_, _> = Map::from([(1, 'a'), (2, 'c')]);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Map::from([(1, 'a')]));
}

#[test]
fn test_conversions() {
    let std_map = HashMap::from([("k", 1)]);
    let mut map: Map<_, _> = Map::from(std_map);
    assert_eq!(map.get("k"), Some(&1));

    let snapshot = map.to_dictionary();
    map.set("k", 2);
    assert_eq!(snapshot.get("k"), Some(&1), "A Dictionary snapshot shouldn't observe later changes.");

    let moved = map.into_dictionary();
    let mut map = Map::from_dictionary(moved);
    assert_eq!(map.get("k"), Some(&2));

    map.set("j", 3);
    let std_map: HashMap<_, _> = map.into();
    assert_eq!(std_map, HashMap::from([("k", 2), ("j", 3)]), "Every entry should move into a HashMap.");
}

#[test]
fn test_cursors_over_keys_and_values() {
    let map: Map<_, _> = Map::from([('x', 10), ('y', 20)]);
    let keys = map.keys();
    let values = map.values();

    let mut key_cursor = keys.cursor();
    let mut value_cursor = values.cursor();
    while key_cursor.has_next() {
        let (Ok(key), Ok(value)) = (key_cursor.next(), value_cursor.next()) else {
            panic!("Key and value cursors should stay aligned.");
        };
        assert_eq!(map.get(*key), Some(*value));
    }
    assert!(!value_cursor.has_next());
    assert!(key_cursor.next().is_err());
}

#[test]
fn test_display_and_debug() {
    assert_eq!(Map::<&str, i32>::new().to_string(), "{}");

    let mut map = Map::with_hasher(PassThroughBuilder);

    map.set(FixedHash::new(1, 'a'), 1);
    map.set(FixedHash::new(1, 'b'), 2);
    assert_eq!(
        format!("{map:?}"),
        "Map { entries: {FixedHash { hash: 1, label: 'a' }: 1, FixedHash { hash: 1, label: 'b' }: 2}, \
        buckets: [-, 0, 1, -], size: 2, cap: 3, hasher: PassThroughBuilder }"
    );

    let named: Map<_, _> = Map::from([("x", 1), ("y", 2)]);
    assert_eq!(named.to_string(), "{x: 1, y: 2}");
}

#[test]
fn test_for_each() {
    let map: Map<_, _> = Map::from([("a", 1), ("b", 2), ("c", 3)]);

    let mut seen = Vec::new();
    map.for_each(|key, value| seen.push(format!("{key}={value}")));
    assert_eq!(seen, ["a=1", "b=2", "c=3"]);

    let seen = RefCell::new(Vec::new());
    let result = block_on(map.for_each_async(|key, value| {
        let seen = &seen;
        async move {
            if *value > 2 {
                return Err(*key);
            }
            seen.borrow_mut().push(*key);
            Ok(())
        }
    }));
    assert_eq!(result, Err("c"), "The first failing callback should be reported.");
    assert_eq!(*seen.borrow(), ["a", "b"]);
}

#[test]
fn test_values_mut() {
    let mut map: Map<_, _> = Map::from([("a", 1), ("b", 2)]);
    for value in map.values_mut() {
        *value *= 10;
    }
    if let Some(value) = map.get_mut("a") {
        *value += 1;
    }

    assert_eq!(map.values().join_with(","), "11,20");
}

#[test]
fn test_reserve() {
    let mut map: Map<u8, u8> = Map::new();
    map.reserve(10);
    assert!(map.cap() >= 10);

    let cap = map.cap();
    for i in 0..10 {
        map.set(i, i);
    }
    assert_eq!(map.cap(), cap, "Reserved capacity shouldn't need to grow.");
}

#[cfg(feature = "json")]
mod json {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_object_round_trip() {
        let map: Map<_, _> = Map::from([("b", 2), ("a", 1)]);

        let value = map.to_json_value().unwrap();
        assert_eq!(value, json!({"b": 2, "a": 1}));
        assert_eq!(map.to_json_string().unwrap(), r#"{"b":2,"a":1}"#, "Export should keep insertion order.");

        let object = map.to_native_object().unwrap();
        let back: Map<String, i32> = Map::from_native_object(object).unwrap();
        assert_eq!(back.keys().join_with(","), "b,a");
        assert_eq!(back.get("a"), Some(&1));
    }

    #[test]
    fn test_non_string_keys() {
        let map: Map<_, _> = Map::from([(1, "one")]);

        let error = map.to_json_string().unwrap_err();
        assert!(error.is_non_string_key());
        assert_eq!(
            error.to_string(),
            "Key '1' is not a string! JSON objects must have strings for their keys."
        );
    }

    proptest! {
        #[test]
        fn object_round_trip_is_lossless(
            entries in prop::collection::vec(("[a-z]{0,6}", any::<i32>()), 0..24)
        ) {
            let map: Map<String, i32> = entries.into_iter().collect();

            let object = map.to_native_object().unwrap();
            prop_assert_eq!(object.len(), map.size());

            let back: Map<String, i32> = Map::from_native_object(object).unwrap();
            prop_assert_eq!(
                back.iter().collect::<Vec<_>>(),
                map.iter().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_from_json_str() {
        let map: Map<String, Vec<u8>> = Map::from_json_str(r#"{"z": [1], "y": []}"#).unwrap();
        assert_eq!(map.get("z"), Some(&vec![1]));
        assert_eq!(map.keys().join_with(","), "z,y");

        assert!(Map::<String, u8>::from_json_str(r#"{"z": "not a number"}"#).is_err());
        assert!(Map::<String, u8>::from_json_str("not json").is_err());
    }
}

#[derive(Debug, Clone)]
enum Op {
    Set(u8, i32),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0_u8..24, any::<i32>()).prop_map(|(key, value)| Op::Set(key, value)),
        (0_u8..24).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn behaves_like_an_ordered_std_map(ops in prop::collection::vec(op(), 0..200)) {
        let mut map: Map<u8, i32> = Map::new();
        let mut model: Vec<(u8, i32)> = Vec::new();

        for op in ops {
            match op {
                Op::Set(key, value) => {
                    let expected = match model.iter_mut().find(|(k, _)| *k == key) {
                        Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
                        None => {
                            model.push((key, value));
                            None
                        },
                    };
                    prop_assert_eq!(map.set(key, value), expected);
                },
                Op::Remove(key) => {
                    let expected = model
                        .iter()
                        .position(|(k, _)| *k == key)
                        .map(|index| model.remove(index).1);
                    prop_assert_eq!(map.remove(&key), expected);
                },
            }
        }

        prop_assert_eq!(map.size(), model.len());
        prop_assert_eq!(map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), model.clone());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
        let std_map: HashMap<u8, i32> = model.into_iter().collect();
        prop_assert_eq!(map, Map::from(std_map));
    }
}
