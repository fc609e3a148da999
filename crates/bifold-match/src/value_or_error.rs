//! Action selection over `ValueOrError<T>`: value versus error.
//!
//! Errors are handled before any rule is consulted, so a value predicate can
//! never shadow error handling. Values follow the same scan as the `Option`
//! selector: first matching rule, then default-on-value, then not-found.

use crate::dispatch::{Dispatch, ErrorActionPolicy};
use crate::error::SelectorError;
use crate::rules::DecisionList;
use bifold_algebraics::ValueOrError;

/// Action receiving a successful value.
pub type ValueAction<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Action receiving an error message.
pub type ErrorAction = Box<dyn Fn(&str) + Send + Sync>;

/// Action run when nothing else applies.
pub type NotFoundAction = Box<dyn Fn() + Send + Sync>;

/// Registration phase of a [`ValueOrErrorActionSelector`].
pub struct ValueOrErrorActionSelectorBuilder<T> {
    not_found: NotFoundAction,
    rules: DecisionList<T, ValueAction<T>>,
    on_value_default: Option<ValueAction<T>>,
    error_actions: Vec<ErrorAction>,
    policy: ErrorActionPolicy,
}

impl<T> ValueOrErrorActionSelectorBuilder<T> {
    pub fn new(not_found: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            not_found: Box::new(not_found),
            rules: DecisionList::new(),
            on_value_default: None,
            error_actions: Vec::new(),
            policy: ErrorActionPolicy::default(),
        }
    }

    /// How [`Self::build`] treats more than one error action.
    pub fn error_action_policy(mut self, policy: ErrorActionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn add_predicate_and_action(
        mut self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        action: impl Fn(&T) + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(predicate, Box::new(action));
        self
    }

    /// A later call replaces an earlier one.
    pub fn set_default_on_value_action(
        mut self,
        action: impl Fn(&T) + Send + Sync + 'static,
    ) -> Self {
        self.on_value_default = Some(Box::new(action));
        self
    }

    /// Register an error action. Only the first registered one is ever run.
    pub fn add_error_action(mut self, action: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.error_actions.push(Box::new(action));
        self
    }

    /// Freeze the configuration.
    ///
    /// Fails with [`SelectorError::DuplicateErrorAction`] only under
    /// [`ErrorActionPolicy::RejectDuplicates`].
    pub fn build(self) -> Result<ValueOrErrorActionSelector<T>, SelectorError> {
        let count = self.error_actions.len();
        if count > 1 {
            match self.policy {
                ErrorActionPolicy::RejectDuplicates => {
                    return Err(SelectorError::DuplicateErrorAction { count });
                }
                ErrorActionPolicy::FirstRegisteredWins => {
                    tracing::warn!(
                        ignored = count - 1,
                        "only the first registered error action is reachable"
                    );
                }
            }
        }

        Ok(ValueOrErrorActionSelector {
            not_found: self.not_found,
            rules: self.rules,
            on_value_default: self.on_value_default,
            on_error: self.error_actions.into_iter().next(),
        })
    }
}

/// Frozen dispatcher over `ValueOrError<T>`.
pub struct ValueOrErrorActionSelector<T> {
    not_found: NotFoundAction,
    rules: DecisionList<T, ValueAction<T>>,
    on_value_default: Option<ValueAction<T>>,
    on_error: Option<ErrorAction>,
}

impl<T> ValueOrErrorActionSelector<T> {
    /// Run the error action, the matched action, the default-on-value
    /// action, or not-found.
    pub fn invoke(&self, input: &ValueOrError<T>) -> Dispatch {
        self.run_registered(input).unwrap_or_else(|| {
            tracing::debug!(
                is_error = input.is_error(),
                "value-or-error selector fell through to not-found"
            );
            (self.not_found)();
            Dispatch::NotFound
        })
    }

    /// Like [`ValueOrErrorActionSelector::invoke`], but `fallback` replaces
    /// the selector's not-found action for this call only.
    pub fn invoke_or_else(&self, input: &ValueOrError<T>, fallback: impl FnOnce()) -> Dispatch {
        self.run_registered(input).unwrap_or_else(|| {
            tracing::debug!(
                is_error = input.is_error(),
                "value-or-error selector fell through to provided fallback"
            );
            fallback();
            Dispatch::Provided
        })
    }

    fn run_registered(&self, input: &ValueOrError<T>) -> Option<Dispatch> {
        match input {
            ValueOrError::Error(message) => {
                let on_error = self.on_error.as_ref()?;
                tracing::debug!(error = %message, "value-or-error selector running error action");
                on_error(message.as_str());
                Some(Dispatch::Error)
            }
            ValueOrError::Value(value) => {
                if let Some((index, action)) = self.rules.first_match(value) {
                    tracing::trace!(rule = index, "value-or-error selector matched");
                    action(value);
                    return Some(Dispatch::Matched { index });
                }
                let on_default = self.on_value_default.as_ref()?;
                tracing::debug!("value-or-error selector using default-on-value action");
                on_default(value);
                Some(Dispatch::DefaultOnValue)
            }
        }
    }
}
