//! Persistence Layer Error Types

use thiserror::Error;

use quill_domain::errors::DomainError;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Connection string could not be used
    #[error("Invalid connection string: {0}")]
    InvalidConnectionString(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Schema setup failed
    #[error("Migration error: {0}")]
    Migration(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(feature = "sqlite")]
impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(e) => Self::InvalidConnectionString(e.to_string()),
            sqlx::Error::Io(e) => Self::Connection(e.to_string()),
            pool @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                Self::Connection(pool.to_string())
            }
            other => Self::Database(other.to_string()),
        }
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Connection(msg) | PersistenceError::InvalidConnectionString(msg) => {
                DomainError::ExternalServiceError {
                    service: "SQLite".to_string(),
                    reason: msg,
                }
            }
            PersistenceError::Migration(msg) | PersistenceError::Database(msg) => {
                DomainError::StorageError { reason: msg }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let domain_err: DomainError = PersistenceError::Connection("refused".into()).into();
        assert!(matches!(
            domain_err,
            DomainError::ExternalServiceError { ref service, .. } if service == "SQLite"
        ));

        let domain_err: DomainError = PersistenceError::Database("constraint failed".into()).into();
        assert_eq!(
            domain_err,
            DomainError::StorageError {
                reason: "constraint failed".into()
            }
        );
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_sqlx_row_not_found_maps_to_database_error() {
        let err: PersistenceError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, PersistenceError::Database(_)));
    }
}
