//! Algebraic laws of Either and ValueOrError, checked over generated inputs.

use bifold_algebraics::{Either, IntoValueOrError, ToResult, ValueOrError, all};
use proptest::prelude::*;
use std::cell::Cell;
use std::cmp::Ordering;

fn either_strategy() -> impl Strategy<Value = Either<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Either::<i64, String>::Left),
        ".{0,8}".prop_map(Either::<i64, String>::Right),
    ]
}

proptest! {
    #[test]
    fn exactly_one_side_is_active(e in either_strategy()) {
        prop_assert_ne!(e.is_left(), e.is_right());
        prop_assert_eq!(e.left().is_some(), e.is_left());
        prop_assert_eq!(e.right().is_some(), e.is_right());
    }

    #[test]
    fn cata_on_left_is_left_fn(x in any::<i64>()) {
        let f = |l: i64| l.wrapping_mul(3);
        let g = |r: String| r.len() as i64;
        prop_assert_eq!(Either::<i64, String>::Left(x).cata(f, g), f(x));
    }

    #[test]
    fn cata_on_right_is_right_fn(y in ".{0,16}") {
        let f = |l: i64| l.wrapping_mul(3);
        let g = |r: String| r.len() as i64;
        prop_assert_eq!(Either::<i64, String>::Right(y.clone()).cata(f, g), g(y));
    }

    #[test]
    fn any_left_sorts_before_any_right(l1 in any::<i64>(), l2 in any::<i64>(), r in ".{0,8}") {
        let right: Either<i64, String> = Either::Right(r);
        prop_assert!(Either::Left(l1) < right);
        prop_assert!(right > Either::Left(l2));
    }

    #[test]
    fn same_side_uses_payload_order(a in any::<i64>(), b in any::<i64>()) {
        let lhs: Either<i64, String> = Either::Left(a);
        prop_assert_eq!(lhs.cmp(&Either::Left(b)), a.cmp(&b));
    }

    #[test]
    fn select_never_changes_side(e in either_strategy()) {
        let was_left = e.is_left();
        let mapped = e.select(|l| l.to_string(), |r| r.len());
        prop_assert_eq!(mapped.is_left(), was_left);
    }

    #[test]
    fn all_successes_preserve_order(values in proptest::collection::vec(any::<u16>(), 0..32)) {
        let results: Vec<ValueOrError<u16>> = values.iter().copied().map(|v| v.to_value()).collect();
        prop_assert_eq!(all(results), ValueOrError::Value(values));
    }
}

#[test]
fn left_one_sorts_before_left_two() {
    assert_eq!(
        Either::<i32, i32>::Left(1).cmp(&Either::Left(2)),
        Ordering::Less
    );
}

#[test]
fn to_result_default_and_custom_messages() {
    assert_eq!(None::<i32>.to_result().error(), Some("Value was missing"));
    assert_eq!(None::<i32>.to_result_or("custom").error(), Some("custom"));
}

#[test]
fn all_short_circuits_before_third_item() {
    let inspected = Cell::new(0usize);
    let items = vec![1i32.to_value(), 0i32.to_error("bad"), 3i32.to_value()];
    let out = all(items.into_iter().inspect(|_| inspected.set(inspected.get() + 1)));

    let error = out.error().expect("expected an aggregated error");
    assert!(error.contains("One of items has an error"));
    assert!(error.contains("bad"));
    assert_eq!(inspected.get(), 2, "third item must not be pulled");
}

#[test]
fn all_success_path() {
    let out = all([1i32.to_value(), 2i32.to_value(), 3i32.to_value()]);
    assert_eq!(out.into_result(), Ok(vec![1, 2, 3]));
}
