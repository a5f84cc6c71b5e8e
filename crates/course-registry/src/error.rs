//! Error types for the course registry

use thiserror::Error;

/// Main error type for registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
