//! Error types for the entity model.

use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur constructing or rehydrating an interaction.
///
/// None of these are retried here; retry policy, if any, belongs to the
/// persistence adapter.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Bad or missing thread linkage at construction time.
    #[error("invalid thread reference: {0}")]
    InvalidReference(String),

    /// Fresh-construction inputs that contradict the collaborators
    /// (e.g. a thread id that does not resolve).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A stored row is missing a structurally required field even after
    /// migration defaults were substituted. Indicates row corruption, not
    /// a version gap; the storage layer decides whether to quarantine.
    #[error("stored row is missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A stored unique id is not a valid UUID.
    #[error("invalid interaction id: {0}")]
    InvalidId(#[from] uuid::Error),
}
