// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can cross layers by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A derived instance value does not fit in a `u32`.
    #[error(
        "instance plan overflows: {field} for {count} instances starting at {start} exceeds {max}",
        max = u32::MAX
    )]
    OffsetOverflow {
        field: &'static str,
        count: u32,
        start: u32,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::OffsetOverflow { field, .. } => vec![
                format!("Lower the {field} offset or the instance count"),
                "Use --instances, --ip-offset and --port-base to adjust the plan".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OffsetOverflow { .. } => ErrorCategory::Validation,
        }
    }
}

/// Domain-level error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
