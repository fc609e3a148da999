//! Diagnostic message configuration.
//!
//! The three fixed strings used by the extension layer can be overridden by
//! loading a TOML document; any key left out keeps its default.
//!
//! ```toml
//! missing_value = "lookup returned nothing"
//! aggregate_error = "batch failed"
//! ```

use crate::error::AlgebraicsError;
use crate::extensions::aggregate;
use crate::value_or_error::ValueOrError;
use serde::{Deserialize, Serialize};

/// Error message for an absent value converted to a result.
pub const MISSING_VALUE: &str = "Value was missing";

/// Error message substituted for an empty one.
pub const GENERIC_ERROR: &str = "Generic error";

/// Context prefixed to the first error found by `all`.
pub const AGGREGATE_ERROR: &str = "One of items has an error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub missing_value: String,
    pub generic_error: String,
    pub aggregate_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            missing_value: MISSING_VALUE.to_string(),
            generic_error: GENERIC_ERROR.to_string(),
            aggregate_error: AGGREGATE_ERROR.to_string(),
        }
    }
}

impl Messages {
    /// Parse a TOML message table.
    pub fn from_toml_str(input: &str) -> Result<Self, AlgebraicsError> {
        toml::from_str(input).map_err(|err| AlgebraicsError::Config {
            message: err.to_string(),
        })
    }

    /// Convert an `Option` into a result, using the configured missing-value
    /// message for `None`.
    pub fn to_result<T>(&self, option: Option<T>) -> ValueOrError<T> {
        match option {
            Some(value) => ValueOrError::Value(value),
            None => ValueOrError::Error(self.missing_value.clone()),
        }
    }

    /// An error result carrying `message`, or the configured generic message
    /// when `message` is empty.
    pub fn to_error<T>(&self, message: &str) -> ValueOrError<T> {
        if message.is_empty() {
            ValueOrError::Error(self.generic_error.clone())
        } else {
            ValueOrError::Error(message.to_string())
        }
    }

    /// [`crate::all`] with the configured aggregate context.
    pub fn all<T, I>(&self, results: I) -> ValueOrError<Vec<T>>
    where
        I: IntoIterator<Item = ValueOrError<T>>,
    {
        aggregate(results, &self.aggregate_error)
    }
}
