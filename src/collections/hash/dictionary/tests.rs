#![cfg(test)]

use super::*;
use crate::collections::{Map, Sequence};

#[test]
fn test_read_surface() {
    let dict: Dictionary<_, _> = Dictionary::from([("x", 10), ("y", 20)]);

    assert_eq!(dict.size(), 2);
    assert_eq!(dict.get("y"), Some(&20));
    assert_eq!(dict.get("z"), None);
    assert_eq!(dict.get_key(&10), Some(&"x"));
    assert!(dict.contains_value(&20));
    assert_eq!(dict.keys().join_with(","), "x,y");
    assert_eq!(dict.values().join_with(","), "10,20");
    assert_eq!(dict.to_string(), "{x: 10, y: 20}");
    assert_eq!(format!("{dict:?}"), r#"{"x": 10, "y": 20}"#);
}

#[test]
fn test_map_round_trip() {
    let map: Map<_, _> = Map::from([(1, "one")]);
    let dict = map.to_dictionary();

    let mut copy = dict.to_map();
    copy.set(2, "two");
    assert_eq!(dict.size(), 1, "A copied Map shouldn't share entries with the Dictionary.");

    let mut moved = dict.into_map();
    moved.remove(&1);
    assert!(moved.is_empty());
    assert_eq!(map, Map::from([(1, "one")]), "The source Map should be untouched by the snapshot.");
}

#[test]
fn test_from_keys_and_values() {
    let dict: Dictionary<_, _> = Dictionary::from_keys_and_values(['a', 'b'], [true, false]).unwrap();
    assert_eq!(dict.get(&'b'), Some(&false));

    assert!(Dictionary::<char, bool>::from_keys_and_values(['a'], []).is_err());
}

#[test]
fn test_iteration() {
    let dict: Dictionary<_, _> = ["c", "a", "b"].into_iter().zip(0..).collect();

    let borrowed: Vec<_> = (&dict).into_iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(borrowed, [("c", 0), ("a", 1), ("b", 2)]);

    let owned: Vec<_> = dict.into_iter().collect();
    assert_eq!(owned, borrowed, "Owned and borrowed iteration should agree on order.");
}

#[cfg(feature = "json")]
#[test]
fn test_json() {
    let dict: Dictionary<String, bool> = Dictionary::from_json_str(r#"{"on": true, "off": false}"#).unwrap();

    assert_eq!(dict.get("on"), Some(&true));
    assert_eq!(dict.to_json_string().unwrap(), r#"{"on":true,"off":false}"#);
    assert!(Dictionary::<String, bool>::from_json_str(r#"{"on": 1}"#).is_err());
}
