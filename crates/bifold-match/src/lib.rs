//! # Bifold Match
//!
//! Ordered predicate-action selectors: declarative decision lists that pick
//! an action (not a value) from the current state of an `Option` or a
//! `ValueOrError`.
//!
//! Each selector has two phases. A builder accepts registrations in order;
//! `build` freezes it into an immutable dispatcher that can be invoked any
//! number of times, from any number of threads.
//!
//! ```text
//! DecisionList<I, A>                 ← first-match-wins rule chain
//!     │
//! OptionActionSelector<T>            ← absent → not-found
//!     │                                present → rules → default → not-found
//! ValueOrErrorActionSelector<T>      ← error → error action → not-found
//!                                      value → rules → default → not-found
//! ```
//!
//! Every invocation runs exactly one action and reports which one as a
//! [`Dispatch`].

pub mod dispatch;
pub mod error;
pub mod option;
pub mod rules;
pub mod value_or_error;

pub use dispatch::{Dispatch, ErrorActionPolicy};
pub use error::SelectorError;
pub use option::{OptionActionSelector, OptionActionSelectorBuilder};
pub use rules::DecisionList;
pub use value_or_error::{ValueOrErrorActionSelector, ValueOrErrorActionSelectorBuilder};
