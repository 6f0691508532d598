#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Both types use serde's externally tagged enum representation, so the
//! variant name survives a round trip and `Left(x)` never deserializes as
//! `Right(x)`.

use optunion::control::{Optional, Union};
use rstest::rstest;

// =============================================================================
// Optional Integration Tests
// =============================================================================

#[rstest]
fn test_optional_json_representation() {
    let present = Optional::present(5);
    let empty: Optional<i32> = Optional::empty();

    assert_eq!(serde_json::to_string(&present).unwrap(), r#"{"Present":5}"#);
    assert_eq!(serde_json::to_string(&empty).unwrap(), r#""Empty""#);
}

#[rstest]
#[case(Optional::present("Dick".to_string()))]
#[case(Optional::empty())]
fn test_optional_json_roundtrip(#[case] value: Optional<String>) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Optional<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

// =============================================================================
// Union Integration Tests
// =============================================================================

#[rstest]
fn test_union_json_roundtrip() {
    let left: Union<String, i32> = Union::left("error".to_string());
    let right: Union<String, i32> = Union::right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Union<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Union<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
fn test_union_variant_tag_is_preserved() {
    let left: Union<i32, i32> = Union::left(1);
    let json = serde_json::to_string(&left).unwrap();
    assert_eq!(json, r#"{"Left":1}"#);

    let restored: Union<i32, i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_left());
}

#[rstest]
fn test_nested_structures() {
    let nested: Union<Vec<String>, Optional<u8>> = Union::right(Optional::present(7));
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, r#"{"Right":{"Present":7}}"#);

    let restored: Union<Vec<String>, Optional<u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

#[rstest]
fn test_unknown_variant_is_rejected() {
    let result: Result<Union<i32, i32>, _> = serde_json::from_str(r#"{"Middle":1}"#);
    assert!(result.is_err());
}
