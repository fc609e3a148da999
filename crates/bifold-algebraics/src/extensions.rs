//! Conversions into [`ValueOrError`] and error-short-circuiting aggregation.

use crate::config::{AGGREGATE_ERROR, GENERIC_ERROR, MISSING_VALUE};
use crate::seq::LazySeq;
use crate::value_or_error::ValueOrError;
use std::ops::ControlFlow;

/// Bridge from presence/absence to success/error.
pub trait ToResult<T> {
    /// `None` becomes an error reading "Value was missing".
    fn to_result(self) -> ValueOrError<T>;

    /// `None` becomes an error carrying `message`.
    fn to_result_or(self, message: impl Into<String>) -> ValueOrError<T>;

    /// `None` becomes an error whose message is produced by `message`.
    ///
    /// The closure only runs on the absent path.
    fn to_result_with(self, message: impl FnOnce() -> String) -> ValueOrError<T>;
}

impl<T> ToResult<T> for Option<T> {
    fn to_result(self) -> ValueOrError<T> {
        self.to_result_or(MISSING_VALUE)
    }

    fn to_result_or(self, message: impl Into<String>) -> ValueOrError<T> {
        match self {
            Some(value) => ValueOrError::Value(value),
            None => ValueOrError::Error(message.into()),
        }
    }

    fn to_result_with(self, message: impl FnOnce() -> String) -> ValueOrError<T> {
        match self {
            Some(value) => ValueOrError::Value(value),
            None => ValueOrError::Error(message()),
        }
    }
}

/// Lift any value into a [`ValueOrError`].
pub trait IntoValueOrError: Sized {
    /// A successful result holding `self`.
    fn to_value(self) -> ValueOrError<Self> {
        ValueOrError::Value(self)
    }

    /// A failed result of `Self`'s type. `self` only fixes the type; an empty
    /// `message` is replaced by "Generic error".
    fn to_error(self, message: &str) -> ValueOrError<Self> {
        if message.is_empty() {
            ValueOrError::Error(GENERIC_ERROR.to_string())
        } else {
            ValueOrError::Error(message.to_string())
        }
    }
}

impl<T> IntoValueOrError for T {}

/// Collect every value in order, or stop at the first error.
///
/// The first error is annotated as `"One of items has an error: {error}"`;
/// elements after it are never pulled from `results`.
pub fn all<T, I>(results: I) -> ValueOrError<Vec<T>>
where
    I: IntoIterator<Item = ValueOrError<T>>,
{
    aggregate(results, AGGREGATE_ERROR)
}

pub(crate) fn aggregate<T, I>(results: I, context: &str) -> ValueOrError<Vec<T>>
where
    I: IntoIterator<Item = ValueOrError<T>>,
{
    results
        .into_iter()
        .enumerate()
        .aggregate_while(ValueOrError::Value(Vec::new()), |acc, (index, result)| {
            match acc {
                error @ ValueOrError::Error(_) => ControlFlow::Break(error),
                ValueOrError::Value(mut items) => match result {
                    ValueOrError::Value(item) => {
                        items.push(item);
                        ControlFlow::Continue(ValueOrError::Value(items))
                    }
                    ValueOrError::Error(error) => {
                        tracing::debug!(index, %error, "aggregation stopped at first error");
                        ControlFlow::Break(
                            ValueOrError::<Vec<T>>::Error(error).specify_error(context),
                        )
                    }
                },
            }
        })
}
