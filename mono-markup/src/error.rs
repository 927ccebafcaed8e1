//! Error types for markup transformation.

/// Result type for markup operations.
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors that can abort a transformation.
///
/// Unterminated constructs are never errors; they are emitted verbatim.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
  #[error("Template error: {0}")]
  Template(#[from] tera::Error),

  #[error("Malformed link capture {0:?}: expected `[text](url)`")]
  MalformedLink(String),

  #[error("Malformed fenced code capture {0:?}")]
  MalformedFence(String),

  #[error("Transformation failed: {0}")]
  Transformation(String),
}
