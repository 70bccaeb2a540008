//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `rigger-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateSource`: Template loading
//!   - `DocumentSink`: Output writing

pub mod output;

pub use output::{DocumentSink, TemplateSource};

#[cfg(test)]
pub use output::{MockDocumentSink, MockTemplateSource};
