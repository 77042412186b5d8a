//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected before it reached the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Login attempt with the wrong email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Data operation attempted before logging in
    #[error("Not logged in")]
    NotAuthenticated,
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Whether the error was caused by user input rather than a missing record.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid email or password");
        assert_eq!(AppError::not_found("patient 9").to_string(), "Not found: patient 9");
        assert!(AppError::validation("bad").is_validation());
        assert!(!AppError::NotAuthenticated.is_validation());
    }
}
