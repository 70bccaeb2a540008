//! Domain layer: pure generation logic with no I/O.
//!
//! - [`InstancePlan`] / [`Instance`]: how many blocks and which values each gets
//! - [`Token`], [`BaseTemplate`], [`ServiceTemplate`]: the text being substituted
//! - [`ComposeDocument`]: the assembled output

pub mod document;
pub mod error;
pub mod instance;
pub mod template;

pub use document::ComposeDocument;
pub use error::{DomainError, ErrorCategory};
pub use instance::{
    DEFAULT_INSTANCE_COUNT, DEFAULT_IP_OFFSET, DEFAULT_PORT_BASE, Instance, InstancePlan,
};
pub use template::{BaseTemplate, ServiceTemplate, Token};
