//! Application layer for Rigger.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! substitution logic itself. That lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateService, GenerationRequest, GenerationSummary};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentSink, TemplateSource};

pub use error::ApplicationError;
