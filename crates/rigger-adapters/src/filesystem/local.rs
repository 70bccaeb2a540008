//! Local filesystem adapter using std::fs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rigger_core::{
    application::{
        ApplicationError,
        ports::{DocumentSink, TemplateSource},
    },
    domain::ComposeDocument,
    error::RiggerResult,
};
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for LocalFilesystem {
    fn read_template(&self, path: &Path) -> RiggerResult<String> {
        std::fs::read_to_string(path)
            .map_err(|e| ApplicationError::template_read(path, &e).into())
    }
}

impl DocumentSink for LocalFilesystem {
    fn write_document(&self, path: &Path, document: &ComposeDocument) -> RiggerResult<usize> {
        let map_err = |e: std::io::Error| ApplicationError::output_write(path, &e);

        // Truncates an existing file. The handle is closed when `writer`
        // drops, on every return path.
        let file = File::create(path).map_err(map_err)?;
        let mut writer = BufWriter::new(file);

        document.write_to(&mut writer).map_err(map_err)?;
        writer.flush().map_err(map_err)?;

        let bytes = document.byte_len();
        debug!(path = %path.display(), bytes, "Document flushed");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigger_core::{
        domain::{BaseTemplate, InstancePlan, ServiceTemplate},
        error::{ErrorCategory, RiggerError},
    };

    fn document(count: u32) -> ComposeDocument {
        ComposeDocument::render(
            &BaseTemplate::new("services:"),
            &ServiceTemplate::new("  node{index}: {port_index}"),
            &InstancePlan::new(count),
        )
    }

    #[test]
    fn writes_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docker-compose.yml");
        let fs = LocalFilesystem::new();

        std::fs::write(&path, "stale content that is much longer than the new output").unwrap();

        let bytes = fs.write_document(&path, &document(1)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "services:\n  node0: 2000\n");
        assert_eq!(bytes, written.len());
    }

    #[test]
    fn reads_template_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svc.yml");
        std::fs::write(&path, "svc{index}").unwrap();

        let text = LocalFilesystem::new().read_template(&path).unwrap();
        assert_eq!(text, "svc{index}");
    }

    #[test]
    fn missing_template_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_template(&dir.path().join("absent.yml"))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn missing_parent_directory_fails_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.yml");
        let err = LocalFilesystem::new()
            .write_document(&path, &document(2))
            .unwrap_err();
        assert!(matches!(
            err,
            RiggerError::Application(ApplicationError::OutputWrite { .. })
        ));
    }
}
