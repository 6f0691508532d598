#![cfg(feature = "typeclass")]
//! Integration tests for the Bifunctor instance of Union.

use optunion::control::Union;
use optunion::typeclass::Bifunctor;
use rstest::rstest;
use std::cell::Cell;

#[rstest]
fn bimap_transforms_left_value() {
    let union: Union<i32, String> = Union::left(42);
    let result = union.bimap(|x| x * 2, |s: String| s.len());
    assert_eq!(result, Union::left(84));
}

#[rstest]
fn bimap_transforms_right_value() {
    let union: Union<i32, String> = Union::right("hello".to_string());
    let result = union.bimap(|x: i32| x * 2, |s| s.len());
    assert_eq!(result, Union::right(5));
}

#[rstest]
fn bimap_runs_exactly_one_function() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let count_left = |x: i32| {
        left_calls.set(left_calls.get() + 1);
        x
    };
    let count_right = |s: &str| {
        right_calls.set(right_calls.get() + 1);
        s.len()
    };

    let _ = Union::<i32, &str>::left(1).bimap(count_left, count_right);
    let _ = Union::<i32, &str>::right("ab").bimap(count_left, count_right);
    let _ = Union::<i32, &str>::right("cd").bimap(count_left, count_right);

    assert_eq!(left_calls.get(), 1);
    assert_eq!(right_calls.get(), 2);
}

#[rstest]
fn first_transforms_left_value() {
    let union: Union<i32, String> = Union::left(42);
    let result = union.first(|x| format!("value: {x}"));
    assert_eq!(result, Union::left("value: 42".to_string()));
}

#[rstest]
fn first_leaves_right_unchanged() {
    let union: Union<i32, String> = Union::right("hello".to_string());
    let result = union.first(|x: i32| format!("value: {x}"));
    assert_eq!(result, Union::right("hello".to_string()));
}

#[rstest]
fn second_leaves_left_unchanged() {
    let union: Union<i32, String> = Union::left(42);
    let result = union.second(|s: String| s.len());
    assert_eq!(result, Union::left(42));
}

#[rstest]
fn bimap_ref_transforms_without_consuming() {
    let union: Union<String, i32> = Union::right(42);
    let result = union.bimap_ref(|s| s.len(), |n| n * 2);
    assert!(union.is_right());
    assert_eq!(result, Union::right(84));
}
