//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use validator::ValidationErrors;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// A write referenced another entity that does not exist
    #[error("{entity_type} not found: {id}")]
    BadReference { entity_type: String, id: String },

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn bad_reference<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::BadReference {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
