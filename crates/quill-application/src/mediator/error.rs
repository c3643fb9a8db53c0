//! Mediator registration errors

use thiserror::Error;

/// Errors raised while building or resolving the request registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediatorError {
    /// No handler was registered for the request type
    #[error("No handler registered for request: {0}")]
    HandlerNotRegistered(&'static str),

    /// More than one handler was registered for the request type
    #[error("Multiple handlers registered for request: {0}")]
    DuplicateHandler(&'static str),

    /// Registry entry could not be downcast (internal error)
    #[error("Type mismatch for request: {0}")]
    TypeMismatch(&'static str),
}
