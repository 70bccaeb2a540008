//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rigger-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ComposeDocument;
use crate::error::RiggerResult;

/// Port for reading template text.
///
/// Implemented by:
/// - `rigger_adapters::filesystem::LocalFilesystem` (production)
/// - `rigger_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Read the whole file at `path` as UTF-8.
    fn read_template(&self, path: &Path) -> RiggerResult<String>;
}

/// Port for writing the generated document.
///
/// ## Design Notes
///
/// - The destination is created or truncated, never appended to
/// - Implementations must release the destination before returning,
///   on success and on error
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSink: Send + Sync {
    /// Write `document` to `path`, returning the number of bytes written.
    fn write_document(&self, path: &Path, document: &ComposeDocument) -> RiggerResult<usize>;
}
