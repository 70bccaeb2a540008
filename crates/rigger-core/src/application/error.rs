//! Application layer errors.
//!
//! These errors represent failures in orchestration, not generation logic.
//! Plan validation errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading templates or writing output.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template could not be read.
    #[error("Failed to read template {path}: {reason}")]
    TemplateRead {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// The output document could not be written.
    #[error("Failed to write output {path}: {reason}")]
    OutputWrite {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// An in-memory adapter's lock was poisoned.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    pub fn template_read(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::TemplateRead {
            path: path.into(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRead { path, kind, .. } => {
                let mut out = vec![format!("Could not read: {}", path.display())];
                if *kind == io::ErrorKind::NotFound {
                    out.push("Check the path, or pass it with --base / --service".into());
                    out.push("Template paths can also be set in the [paths] config section".into());
                } else {
                    out.push("Check that the file is readable and valid UTF-8".into());
                }
                out
            }
            Self::OutputWrite { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::LockPoisoned => vec!["Retry the operation".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRead { kind, .. } if *kind == io::ErrorKind::NotFound => {
                ErrorCategory::NotFound
            }
            Self::TemplateRead { .. } | Self::OutputWrite { .. } => ErrorCategory::Io,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
