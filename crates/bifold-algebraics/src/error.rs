//! Error types for bifold-algebraics operations.

/// Errors from misusing the crate's own surfaces.
///
/// Expected domain failures are never reported here; they travel as
/// [`crate::ValueOrError::Error`] data.
#[derive(Debug, thiserror::Error)]
pub enum AlgebraicsError {
    /// A message configuration document could not be parsed.
    #[error("invalid message configuration: {message}")]
    Config { message: String },
}
