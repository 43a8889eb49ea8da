use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::account::validation::FieldError;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Validation failed for {} field(s)", .0.len())]
    ValidationFailed(Vec<FieldError>),

    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// Unknown username or wrong password. Carries no detail.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authenticated account does not own username: {0}")]
    IdentityMismatch(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AccountError {
    /// True for faults the client cannot fix (store, hashing, signing).
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AccountError::Password(_)
                | AccountError::Token(_)
                | AccountError::DatabaseError(_)
                | AccountError::Unknown(_)
        )
    }
}
