//! Error types for selector construction.

/// Errors raised while freezing a selector builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// More than one error action was registered under
    /// [`crate::ErrorActionPolicy::RejectDuplicates`].
    #[error("duplicate error action: {count} registered, at most one is reachable")]
    DuplicateErrorAction { count: usize },
}
