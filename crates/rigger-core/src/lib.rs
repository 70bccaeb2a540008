//! Rigger Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Rigger
//! docker-compose rig generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            rigger-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (TemplateSource, DocumentSink)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     rigger-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!
//!          Domain Layer (Pure Logic)
//!   (InstancePlan, ServiceTemplate, ComposeDocument)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rigger_core::prelude::*;
//!
//! let request = GenerationRequest {
//!     base_template: "docker-compose-template.yml".into(),
//!     service_template: "docker-service-template.yml".into(),
//!     output: "docker-compose.yml".into(),
//!     plan: InstancePlan::default(),
//! };
//!
//! // With injected adapters:
//! let service = GenerateService::new(source, sink);
//! service.generate(&request).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationRequest, GenerationSummary,
        ports::{DocumentSink, TemplateSource},
    };
    pub use crate::domain::{
        BaseTemplate, ComposeDocument, Instance, InstancePlan, ServiceTemplate, Token,
    };
    pub use crate::error::{RiggerError, RiggerResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
