//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Required fields are missing")]
    MissingFields,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Capacity exceeded: at most {max} posts allowed")]
    CapacityExceeded { max: usize },

    #[error("Minimum violated: at least {min} posts required")]
    MinimumViolation { min: usize },

    #[error("Internal error: {0}")]
    Internal(String),
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

    #[error("Insert refused: store is at capacity")]
    CapacityReached,

    #[error("Delete refused: store is at its minimum")]
    MinimumReached,
}
