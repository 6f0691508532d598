#![cfg(feature = "control")]
//! Property-based tests for the equality and hashing contract.
//!
//! - Same variant with equal payloads: equal, and equal hashes
//! - Different variants: never equal, whatever the payloads
//! - `Left(x)` and `Right(x)` feed different bytes to the hasher
//! - Hashing is deterministic across repeated calls

use optunion::control::{Optional, Union};
use proptest::prelude::*;
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Records every byte and integer a value feeds to the hasher.
#[derive(Default)]
struct RecordingHasher {
    bytes: Vec<u8>,
}

impl Hasher for RecordingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }
}

fn hash_stream<T: Hash>(value: &T) -> Vec<u8> {
    let mut hasher = RecordingHasher::default();
    value.hash(&mut hasher);
    hasher.bytes
}

proptest! {
    #[test]
    fn prop_left_equality_follows_payload(a in any::<i64>(), b in any::<i64>()) {
        let first: Union<i64, i64> = Union::left(a);
        let second: Union<i64, i64> = Union::left(b);
        prop_assert_eq!(first == second, a == b);
    }

    #[test]
    fn prop_right_equality_follows_payload(a in "[a-c]{0,2}", b in "[a-c]{0,2}") {
        let first: Union<(), String> = Union::right(a.clone());
        let second: Union<(), String> = Union::right(b.clone());
        prop_assert_eq!(first == second, a == b);
    }

    #[test]
    fn prop_left_never_equals_right(value in any::<i32>()) {
        let left: Union<i32, i32> = Union::left(value);
        let right: Union<i32, i32> = Union::right(value);
        prop_assert_ne!(left, right);
    }

    #[test]
    fn prop_left_and_right_hash_streams_differ(value in any::<String>()) {
        let left: Union<String, String> = Union::left(value.clone());
        let right: Union<String, String> = Union::right(value);
        prop_assert_ne!(hash_stream(&left), hash_stream(&right));
    }

    #[test]
    fn prop_equal_unions_hash_equally(value in any::<i32>(), is_left in any::<bool>()) {
        let build = || -> Union<i32, i32> {
            if is_left { Union::left(value) } else { Union::right(value) }
        };
        prop_assert_eq!(hash_of(&build()), hash_of(&build()));
    }

    #[test]
    fn prop_equal_optionals_hash_equally(value in any::<Option<u16>>()) {
        let first = Optional::from(value);
        let second = Optional::from(value);
        prop_assert_eq!(first, second);
        prop_assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn prop_present_never_equals_empty(value in any::<i32>()) {
        prop_assert_ne!(Optional::present(value), Optional::empty());
    }
}

#[test]
fn empty_hash_stream_is_independent_of_type_parameter() {
    assert_eq!(
        hash_stream(&Optional::<u8>::empty()),
        hash_stream(&Optional::<Vec<String>>::empty())
    );
}

#[test]
fn unions_work_as_hash_set_keys() {
    let mut seen: HashSet<Union<i32, i32>> = HashSet::new();
    assert!(seen.insert(Union::left(1)));
    assert!(seen.insert(Union::right(1)));
    assert!(!seen.insert(Union::left(1)));
    assert_eq!(seen.len(), 2);
}

#[test]
fn optionals_work_as_hash_set_keys() {
    let keys: HashSet<Optional<&str>> = [
        Optional::present("a"),
        Optional::empty(),
        Optional::from(Some("a")),
        Optional::from(None),
    ]
    .into_iter()
    .collect();
    assert_eq!(keys.len(), 2);
}
