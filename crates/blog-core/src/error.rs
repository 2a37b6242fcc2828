//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub(crate) fn too_long(field: &str, max: usize, actual: usize) -> Self {
        Self::Validation(format!(
            "{field} must be at most {max} characters (got {actual})"
        ))
    }

    pub(crate) fn empty(field: &str) -> Self {
        Self::Validation(format!("{field} must not be empty"))
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// A uniqueness constraint rejected the write.
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    /// A foreign key points at a row that does not exist.
    #[error("Missing referenced entity: {0}")]
    MissingReference(String),
}
