//! Either: a value that is exactly one of two typed payloads.
//!
//! `Either<L, R>` is a closed sum type. Only the active side carries data, so
//! the "exactly one active variant" property holds by construction and every
//! eliminator (`cata`, `for_each`, `select`) is total.
//!
//! Ordering is total: every `Left` sorts before every `Right`, and values on
//! the same side delegate to the payload's own `Ord`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value holding either an `L` (left) or an `R` (right).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Either<L, R> {
    /// The left payload. Sorts before any `Right`.
    Left(L),
    /// The right payload.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// True if the left side is active.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// True if the right side is active.
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// The left payload if active; the inactive side always yields `None`.
    pub fn left(&self) -> Option<&L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// The right payload if active; the inactive side always yields `None`.
    pub fn right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Owned form of [`Either::left`].
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Owned form of [`Either::right`].
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Borrow both sides, keeping the active tag.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Catamorphism: apply exactly one handler to the active payload.
    ///
    /// Context that the handlers need is captured by the closures themselves.
    pub fn cata<V>(self, left_fn: impl FnOnce(L) -> V, right_fn: impl FnOnce(R) -> V) -> V {
        match self {
            Self::Left(l) => left_fn(l),
            Self::Right(r) => right_fn(r),
        }
    }

    /// Side-effecting form of [`Either::cata`].
    pub fn for_each(self, left_fn: impl FnOnce(L), right_fn: impl FnOnce(R)) {
        match self {
            Self::Left(l) => left_fn(l),
            Self::Right(r) => right_fn(r),
        }
    }

    /// Map each side independently, preserving which side is active.
    pub fn select<LR, RR>(
        self,
        left_map: impl FnOnce(L) -> LR,
        right_map: impl FnOnce(R) -> RR,
    ) -> Either<LR, RR> {
        match self {
            Self::Left(l) => Either::Left(left_map(l)),
            Self::Right(r) => Either::Right(right_map(r)),
        }
    }

    /// Map the left payload, leaving a right untouched.
    pub fn map_left<U>(self, f: impl FnOnce(L) -> U) -> Either<U, R> {
        self.select(f, |r| r)
    }

    /// Map the right payload, leaving a left untouched.
    pub fn map_right<U>(self, f: impl FnOnce(R) -> U) -> Either<L, U> {
        self.select(|l| l, f)
    }

    /// Swap the sides.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => write!(f, "[Left: {l} ]"),
            Self::Right(r) => write!(f, "[Right: {r} ]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn projections_follow_active_side() {
        let left: Either<i32, &str> = Either::Left(7);
        assert!(left.is_left());
        assert!(!left.is_right());
        assert_eq!(left.left(), Some(&7));
        assert_eq!(left.right(), None);

        let right: Either<i32, &str> = Either::Right("seven");
        assert!(right.is_right());
        assert_eq!(right.left(), None);
        assert_eq!(right.into_right(), Some("seven"));
    }

    #[test]
    fn cata_applies_only_active_handler() {
        let mut calls = Vec::new();
        let out = Either::<i32, i32>::Right(4).cata(
            |l| {
                calls.push("left");
                l
            },
            |r| r * 10,
        );
        assert_eq!(out, 40);
        assert!(calls.is_empty());
    }

    #[test]
    fn for_each_runs_left_handler_on_left() {
        let mut seen = None;
        Either::<&str, u8>::Left("hi").for_each(|l| seen = Some(l.len()), |_| unreachable!());
        assert_eq!(seen, Some(2));
    }

    #[test]
    fn select_preserves_tag() {
        let mapped = Either::<i32, String>::Left(3).select(|l| l + 1, |r| r.len());
        assert_eq!(mapped, Either::Left(4));

        let mapped = Either::<i32, String>::Right("abc".into()).select(|l| l + 1, |r| r.len());
        assert_eq!(mapped, Either::Right(3));
    }

    #[test]
    fn equality_requires_same_side() {
        let a: Either<i32, i32> = Either::Left(1);
        let b: Either<i32, i32> = Either::Right(1);
        assert_ne!(a, b);
        assert_eq!(a, Either::Left(1));
    }

    #[test]
    fn lefts_sort_before_rights() {
        let mut items: Vec<Either<i32, i32>> = vec![
            Either::Right(0),
            Either::Left(9),
            Either::Right(-5),
            Either::Left(2),
        ];
        items.sort();
        assert_eq!(
            items,
            vec![
                Either::Left(2),
                Either::Left(9),
                Either::Right(-5),
                Either::Right(0),
            ]
        );
        assert_eq!(
            Either::<i32, i32>::Left(i32::MAX).cmp(&Either::Right(i32::MIN)),
            Ordering::Less
        );
    }

    #[test]
    fn flip_swaps_sides() {
        assert_eq!(Either::<u8, char>::Left(1).flip(), Either::Right(1));
    }

    #[test]
    fn display_names_active_side() {
        insta::assert_snapshot!(Either::<i32, &str>::Left(5).to_string(), @"[Left: 5 ]");
        insta::assert_snapshot!(Either::<i32, &str>::Right("x").to_string(), @"[Right: x ]");
    }

    #[test]
    fn serializes_with_snake_case_tag() {
        let json = serde_json::to_string(&Either::<i32, String>::Right("r".into())).unwrap();
        assert_eq!(json, r#"{"right":"r"}"#);
        let back: Either<i32, String> = serde_json::from_str(r#"{"left":3}"#).unwrap();
        assert_eq!(back, Either::Left(3));
    }
}
