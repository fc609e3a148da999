//! Action selection over `Option<T>`: value versus absence.
//!
//! Absent input goes straight to the fallback. Present input is scanned
//! against the registered rules; the first match runs, otherwise the
//! default-on-value action, otherwise the fallback.
//!
//! A matched rule's action may take either the unwrapped value or the whole
//! `Option`, stored as `Either<ValueAction<T>, OptionAction<T>>`.

use crate::dispatch::Dispatch;
use crate::rules::DecisionList;
use bifold_algebraics::Either;

/// Action receiving the unwrapped value.
pub type ValueAction<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Action receiving the wrapping `Option`.
pub type OptionAction<T> = Box<dyn Fn(&Option<T>) + Send + Sync>;

type RuleAction<T> = Either<ValueAction<T>, OptionAction<T>>;

/// Registration phase of an [`OptionActionSelector`].
pub struct OptionActionSelectorBuilder<T> {
    not_found: OptionAction<T>,
    rules: DecisionList<T, RuleAction<T>>,
    on_value_default: Option<ValueAction<T>>,
}

impl<T> OptionActionSelectorBuilder<T> {
    /// Start a builder whose fallback is `not_found`.
    pub fn new(not_found: impl Fn(&Option<T>) + Send + Sync + 'static) -> Self {
        Self {
            not_found: Box::new(not_found),
            rules: DecisionList::new(),
            on_value_default: None,
        }
    }

    /// Register a rule whose action receives the unwrapped value.
    pub fn add_predicate_and_action(
        mut self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        action: impl Fn(&T) + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(predicate, Either::Left(Box::new(action)));
        self
    }

    /// Register a rule whose action receives the whole `Option`.
    pub fn add_predicate_and_option_action(
        mut self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        action: impl Fn(&Option<T>) + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(predicate, Either::Right(Box::new(action)));
        self
    }

    /// Action for a present value that no rule matched. A later call replaces
    /// an earlier one.
    pub fn set_default_on_value_action(
        mut self,
        action: impl Fn(&T) + Send + Sync + 'static,
    ) -> Self {
        self.on_value_default = Some(Box::new(action));
        self
    }

    /// Freeze the configuration.
    pub fn build(self) -> OptionActionSelector<T> {
        OptionActionSelector {
            not_found: self.not_found,
            rules: self.rules,
            on_value_default: self.on_value_default,
        }
    }
}

/// Frozen dispatcher over `Option<T>`.
///
/// Invocation never mutates the selector, so a built selector may be shared
/// and invoked from many threads.
pub struct OptionActionSelector<T> {
    not_found: OptionAction<T>,
    rules: DecisionList<T, RuleAction<T>>,
    on_value_default: Option<ValueAction<T>>,
}

impl<T> OptionActionSelector<T> {
    /// Run the matched action, the default-on-value action, or not-found.
    pub fn invoke(&self, item: &Option<T>) -> Dispatch {
        self.run_registered(item).unwrap_or_else(|| {
            tracing::debug!(
                present = item.is_some(),
                "option selector fell through to not-found"
            );
            (self.not_found)(item);
            Dispatch::NotFound
        })
    }

    /// Like [`OptionActionSelector::invoke`], but `fallback` replaces the
    /// selector's not-found action for this call only.
    pub fn invoke_or_else(&self, item: &Option<T>, fallback: impl FnOnce(&Option<T>)) -> Dispatch {
        self.run_registered(item).unwrap_or_else(|| {
            tracing::debug!(
                present = item.is_some(),
                "option selector fell through to provided fallback"
            );
            fallback(item);
            Dispatch::Provided
        })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn run_registered(&self, item: &Option<T>) -> Option<Dispatch> {
        let value = item.as_ref()?;

        if let Some((index, action)) = self.rules.first_match(value) {
            tracing::trace!(rule = index, "option selector matched");
            action
                .as_ref()
                .for_each(|on_value| on_value(value), |on_option| on_option(item));
            return Some(Dispatch::Matched { index });
        }

        let on_default = self.on_value_default.as_ref()?;
        tracing::debug!("option selector using default-on-value action");
        on_default(value);
        Some(Dispatch::DefaultOnValue)
    }
}
