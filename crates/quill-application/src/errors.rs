//! Application layer error types
//!
//! These errors represent application-level failures that are suitable
//! for API consumption. They wrap domain errors with additional context.

use thiserror::Error;

use quill_domain::errors::DomainError;

use crate::mediator::MediatorError;
use crate::validation::ValidationErrors;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// One or more validation rules failed; the handler did not run
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The requested entity does not exist
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Repository operation failed
    #[error("Repository error: {0}")]
    Repository(String),

    /// The mediator has no handler for a request type
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Not-found error for a blog id
    pub fn blog_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity: "Blog",
            id: id.to_string(),
        }
    }
}

impl From<ValidationErrors> for ApplicationError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<MediatorError> for ApplicationError {
    fn from(err: MediatorError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EntityNotFound { id, .. } => ApplicationError::blog_not_found(id),
            other => ApplicationError::Repository(other.to_string()),
        }
    }
}
