//! Instance plan and derived instance values.
//!
//! An [`Instance`] is never stored: it is computed from its position `i` in
//! `[0, count)` and the offsets of the owning [`InstancePlan`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Default number of service blocks.
pub const DEFAULT_INSTANCE_COUNT: u32 = 25;
/// Default offset added to the index to form `{ip_index}`.
pub const DEFAULT_IP_OFFSET: u32 = 4;
/// Default base port; `{port_index}` is `port_base + index`.
pub const DEFAULT_PORT_BASE: u32 = 2000;

/// How many instances to generate and how their values are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstancePlan {
    count: u32,
    ip_offset: u32,
    port_base: u32,
}

impl InstancePlan {
    /// Create a plan with the default offsets.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            ip_offset: DEFAULT_IP_OFFSET,
            port_base: DEFAULT_PORT_BASE,
        }
    }

    /// Override the IP offset.
    pub fn with_ip_offset(mut self, ip_offset: u32) -> Self {
        self.ip_offset = ip_offset;
        self
    }

    /// Override the base port.
    pub fn with_port_base(mut self, port_base: u32) -> Self {
        self.port_base = port_base;
        self
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn ip_offset(&self) -> u32 {
        self.ip_offset
    }

    pub fn port_base(&self) -> u32 {
        self.port_base
    }

    /// Check that every derived value fits in a `u32`.
    ///
    /// An empty plan is always valid.
    pub fn validate(&self) -> Result<(), DomainError> {
        let Some(last) = self.count.checked_sub(1) else {
            return Ok(());
        };

        if last.checked_add(self.ip_offset).is_none() {
            return Err(DomainError::OffsetOverflow {
                field: "ip",
                count: self.count,
                start: self.ip_offset,
            });
        }
        if self.port_base.checked_add(last).is_none() {
            return Err(DomainError::OffsetOverflow {
                field: "port",
                count: self.count,
                start: self.port_base,
            });
        }
        Ok(())
    }

    /// Iterate the instances in ascending index order.
    ///
    /// Call [`InstancePlan::validate`] first; values past `u32::MAX` saturate.
    pub fn instances(&self) -> impl Iterator<Item = Instance> + use<> {
        let plan = *self;
        (0..plan.count).map(move |i| Instance {
            index: i,
            ip_index: i.saturating_add(plan.ip_offset),
            port_index: plan.port_base.saturating_add(i),
        })
    }
}

impl Default for InstancePlan {
    fn default() -> Self {
        Self::new(DEFAULT_INSTANCE_COUNT)
    }
}

impl fmt::Display for InstancePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} instances (ip +{}, ports from {})",
            self.count, self.ip_offset, self.port_base
        )
    }
}

/// One repetition unit of the service template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instance {
    pub index: u32,
    pub ip_index: u32,
    pub port_index: u32,
}
