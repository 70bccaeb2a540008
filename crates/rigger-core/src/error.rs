//! Unified error handling for Rigger Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Rigger Core operations.
#[derive(Debug, Error, Clone)]
pub enum RiggerError {
    /// Errors from the domain layer (invalid instance plan).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (template or output I/O).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl RiggerError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type RiggerResult<T> = Result<T, RiggerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn domain_category_maps_to_validation() {
        let err: RiggerError = DomainError::OffsetOverflow {
            field: "ip",
            count: 2,
            start: u32::MAX,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn application_message_is_transparent() {
        let err: RiggerError = ApplicationError::template_read(
            "base.yml",
            &io::Error::new(io::ErrorKind::NotFound, "no such file"),
        )
        .into();
        assert!(err.to_string().starts_with("Failed to read template base.yml"));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
