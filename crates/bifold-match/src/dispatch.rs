//! Dispatch outcomes and builder policies shared by the selectors.

/// Which branch of a selector fired for one invocation.
///
/// Exactly one action runs per invocation; this records which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// The rule at `index` (registration order) matched first.
    Matched { index: usize },
    /// No rule matched a present value; the default-on-value action ran.
    DefaultOnValue,
    /// The input was an error; the error action ran.
    Error,
    /// Nothing applied; the selector's not-found action ran.
    NotFound,
    /// Nothing applied; the caller-provided fallback ran instead of not-found.
    Provided,
}

impl Dispatch {
    /// True when neither a rule nor a registered handler applied.
    pub fn fell_through(self) -> bool {
        matches!(self, Self::NotFound | Self::Provided)
    }
}

/// How a builder treats more than one registered error action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorActionPolicy {
    /// Keep the first registered error action; later ones are unreachable.
    #[default]
    FirstRegisteredWins,
    /// Refuse to build when more than one error action was registered.
    RejectDuplicates,
}
