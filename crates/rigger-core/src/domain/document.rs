//! The assembled output document.

use std::io::{self, Write};

use tracing::{debug, info, trace};

use super::{BaseTemplate, InstancePlan, ServiceTemplate};

/// Base template followed by one rendered block per instance.
///
/// Every part is terminated by a single `\n` when written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeDocument {
    base: String,
    blocks: Vec<String>,
}

impl ComposeDocument {
    /// Render `service` once for each instance of `plan`, in ascending order.
    ///
    /// The plan must already be validated.
    pub fn render(base: &BaseTemplate, service: &ServiceTemplate, plan: &InstancePlan) -> Self {
        let blocks = plan
            .instances()
            .map(|instance| {
                info!(index = instance.index, "Generating instance");
                let block = service.render(&instance);
                debug!(first_line = block.lines().next().unwrap_or(""), "Writing block");
                trace!(%block);
                block
            })
            .collect();

        Self {
            base: base.as_str().to_owned(),
            blocks,
        }
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Number of instance blocks (the base is not counted).
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Size in bytes of the written form.
    pub fn byte_len(&self) -> usize {
        self.parts().map(|p| p.len() + 1).sum()
    }

    /// Stream the document into `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for part in self.parts() {
            writer.write_all(part.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// The full written form as one string.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.byte_len());
        for part in self.parts() {
            text.push_str(part);
            text.push('\n');
        }
        text
    }

    fn parts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base.as_str()).chain(self.blocks.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(count: u32) -> ComposeDocument {
        ComposeDocument::render(
            &BaseTemplate::new("version: '3'"),
            &ServiceTemplate::new("svc{index}:\n  ip: 10.0.0.{ip_index}\n  port: {port_index}"),
            &InstancePlan::new(count),
        )
    }

    #[test]
    fn two_instance_scenario() {
        let doc = scenario(2);
        assert_eq!(
            doc.to_text(),
            "version: '3'\nsvc0:\n  ip: 10.0.0.4\n  port: 2000\nsvc1:\n  ip: 10.0.0.5\n  port: 2001\n"
        );
        assert_eq!(doc.block_count(), 2);
    }

    #[test]
    fn zero_instances_is_base_plus_newline() {
        let doc = scenario(0);
        assert_eq!(doc.to_text(), "version: '3'\n");
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn no_placeholder_survives() {
        let doc = scenario(25);
        for block in doc.blocks() {
            assert!(!block.contains("{index}"));
            assert!(!block.contains("{ip_index}"));
            assert!(!block.contains("{port_index}"));
        }
        assert!(doc.blocks()[24].contains("port: 2024"));
        assert!(doc.blocks()[24].contains("10.0.0.28"));
    }

    #[test]
    fn write_to_matches_text() {
        let doc = scenario(3);
        let mut buf = Vec::new();
        doc.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), doc.to_text());
        assert_eq!(doc.byte_len(), doc.to_text().len());
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(scenario(5), scenario(5));
    }
}
