//! Success-or-failure values with a human-readable error message.
//!
//! `ValueOrError<T>` is isomorphic to `Either<String, T>`: the error occupies
//! the left position (and therefore sorts first), the value the right.

use crate::either::Either;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a successful `T` or an error message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueOrError<T> {
    /// A failure described for humans.
    Error(String),
    /// A successful value.
    Value(T),
}

impl<T> ValueOrError<T> {
    pub fn from_value(value: T) -> Self {
        Self::Value(value)
    }

    pub fn from_error(error: impl Into<String>) -> Self {
        Self::Error(error.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_value(&self) -> bool {
        !self.is_error()
    }

    /// The error message, if this is an error.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(e) => Some(e),
            Self::Value(_) => None,
        }
    }

    /// The value, if this is a success.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Error(_) => None,
            Self::Value(v) => Some(v),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Error(_) => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Apply `on_error` or `on_value` to whichever side is active.
    pub fn cata<V>(
        self,
        on_error: impl FnOnce(String) -> V,
        on_value: impl FnOnce(T) -> V,
    ) -> V {
        match self {
            Self::Error(e) => on_error(e),
            Self::Value(v) => on_value(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValueOrError<U> {
        match self {
            Self::Error(e) => ValueOrError::Error(e),
            Self::Value(v) => ValueOrError::Value(f(v)),
        }
    }

    /// Chain a fallible step onto a success; errors pass through untouched.
    pub fn then<U>(self, f: impl FnOnce(T) -> ValueOrError<U>) -> ValueOrError<U> {
        match self {
            Self::Error(e) => ValueOrError::Error(e),
            Self::Value(v) => f(v),
        }
    }

    /// Prefix an error with `context`, as `"{context}: {error}"`. Values are
    /// returned unchanged.
    pub fn specify_error(self, context: &str) -> Self {
        match self {
            Self::Error(e) => Self::Error(format!("{context}: {e}")),
            value => value,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }

    pub fn into_either(self) -> Either<String, T> {
        self.into()
    }
}

impl<T> From<ValueOrError<T>> for Result<T, String> {
    fn from(value: ValueOrError<T>) -> Self {
        match value {
            ValueOrError::Error(e) => Err(e),
            ValueOrError::Value(v) => Ok(v),
        }
    }
}

impl<T> From<Result<T, String>> for ValueOrError<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(e) => Self::Error(e),
        }
    }
}

impl<T> From<ValueOrError<T>> for Either<String, T> {
    fn from(value: ValueOrError<T>) -> Self {
        value.cata(Either::Left, Either::Right)
    }
}

impl<T> From<Either<String, T>> for ValueOrError<T> {
    fn from(either: Either<String, T>) -> Self {
        either.cata(Self::Error, Self::Value)
    }
}

impl<T: fmt::Display> fmt::Display for ValueOrError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(e) => write!(f, "[Error: {e} ]"),
            Self::Value(v) => write!(f, "[Value: {v} ]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_active_side() {
        let ok = ValueOrError::from_value(3);
        assert!(!ok.is_error());
        assert_eq!(ok.value(), Some(&3));
        assert_eq!(ok.error(), None);

        let bad: ValueOrError<i32> = ValueOrError::from_error("broken");
        assert!(bad.is_error());
        assert_eq!(bad.error(), Some("broken"));
        assert_eq!(bad.value(), None);
    }

    #[test]
    fn then_short_circuits_on_error() {
        let bad: ValueOrError<i32> = ValueOrError::from_error("first");
        let out = bad.then(|v| ValueOrError::<i32>::from_error(format!("second {v}")));
        assert_eq!(out.error(), Some("first"));

        let ok = ValueOrError::from_value(2).then(|v| ValueOrError::from_value(v * 3));
        assert_eq!(ok, ValueOrError::Value(6));
    }

    #[test]
    fn specify_error_annotates_only_errors() {
        let bad: ValueOrError<()> = ValueOrError::from_error("disk full");
        assert_eq!(
            bad.specify_error("while saving").error(),
            Some("while saving: disk full")
        );
        assert_eq!(
            ValueOrError::from_value(1).specify_error("ignored"),
            ValueOrError::Value(1)
        );
    }

    #[test]
    fn converts_through_either_and_result() {
        let either: Either<String, u8> = ValueOrError::from_error("e").into();
        assert_eq!(either, Either::Left("e".to_string()));

        let back: ValueOrError<u8> = Either::<String, u8>::Right(4).into();
        assert_eq!(back.into_result(), Ok(4));
    }

    #[test]
    fn errors_sort_before_values() {
        let mut items = vec![
            ValueOrError::from_value(1),
            ValueOrError::from_error("z"),
            ValueOrError::from_value(0),
        ];
        items.sort();
        assert!(items[0].is_error());
        assert_eq!(items[1], ValueOrError::Value(0));
    }

    #[test]
    fn json_shape() {
        insta::assert_json_snapshot!(ValueOrError::<u32>::from_error("missing"), @r#"
        {
          "error": "missing"
        }
        "#);
    }
}
