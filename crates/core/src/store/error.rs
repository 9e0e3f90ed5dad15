//! Store error types.

use thiserror::Error;
use webadmin_shared::AppError;

/// Result type alias using `StoreError`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Lookup by key or id failed.
    #[error("{kind} {key} not found")]
    NotFound {
        /// Entity label, e.g. `Account`.
        kind: &'static str,
        /// The key that was looked up.
        key: String,
    },

    /// Uniqueness violation on create.
    #[error("{0}")]
    Conflict(&'static str),

    /// Candidate or patch rejected by an entity rule.
    #[error("{0}")]
    InvalidArgument(String),
}

impl StoreError {
    /// Builds a not-found error for the given entity label and key.
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::Conflict(message) => Self::Conflict(message.to_string()),
            StoreError::InvalidArgument(message) => Self::Validation(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_echoes_key() {
        let err = StoreError::not_found("Account", "ACC9");
        assert_eq!(err.to_string(), "Account ACC9 not found");

        let app: AppError = err.into();
        assert_eq!(app.status_code(), 404);
        assert_eq!(app.to_string(), "Account ACC9 not found");
    }

    #[test]
    fn test_conflict_maps_to_bad_request() {
        let app: AppError = StoreError::Conflict("Username already exists").into();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.error_code(), "CONFLICT");
        assert_eq!(app.to_string(), "Username already exists");
    }

    #[test]
    fn test_invalid_argument_maps_to_validation() {
        let app: AppError = StoreError::InvalidArgument("bad".into()).into();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.error_code(), "VALIDATION_ERROR");
    }
}
