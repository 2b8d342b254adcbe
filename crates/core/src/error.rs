//! Domain error model.

use thiserror::Error;

/// Result type used across the principle crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The walkthroughs only fail for deterministic reasons (bad input, missing
/// records, duplicate names, wrong credentials).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty username, out-of-range rate).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A conflict occurred (e.g. username already taken).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Credentials did not match.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_context() {
        assert_eq!(
            DomainError::validation("username is empty").to_string(),
            "validation failed: username is empty"
        );
        assert_eq!(
            DomainError::not_found("user 7").to_string(),
            "not found: user 7"
        );
        assert_eq!(DomainError::Unauthorized.to_string(), "unauthorized");
    }
}
