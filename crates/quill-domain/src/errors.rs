//! Domain errors for Quill

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound { entity_type: String, id: String },

    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("External service error: {service} - {reason}")]
    ExternalServiceError { service: String, reason: String },
}

impl DomainError {
    /// Not-found error for a blog id
    pub fn blog_not_found(id: impl ToString) -> Self {
        Self::EntityNotFound {
            entity_type: "Blog".to_string(),
            id: id.to_string(),
        }
    }

    /// Storage failure with a reason
    pub fn storage(reason: impl Into<String>) -> Self {
        Self::StorageError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
