//! # Bifold Algebraics
//!
//! Closed two-variant sum types and the combinators that eliminate them.
//!
//! Every type here is an immutable value: it can be cloned, compared, and
//! shared across threads without synchronization.
//!
//! ## Architecture
//!
//! ```text
//! Either<L, R>          ← Left(L) | Right(R), total order Left < Right
//!     │
//! ValueOrError<T>       ← Either<String, T> with named projections
//!     │
//! LazySeq               ← first_or_none / aggregate_while over any Iterator
//!     │
//! extensions            ← to_result, to_value, to_error, all
//!     │
//! Messages              ← configurable diagnostic strings (TOML)
//! ```

pub mod config;
pub mod default_key;
pub mod either;
pub mod error;
pub mod extensions;
pub mod option;
pub mod seq;
pub mod value_or_error;

pub use config::Messages;
pub use default_key::DefaultKey;
pub use either::Either;
pub use error::AlgebraicsError;
pub use extensions::{IntoValueOrError, ToResult, all};
pub use option::OptionCata;
pub use seq::LazySeq;
pub use value_or_error::ValueOrError;
