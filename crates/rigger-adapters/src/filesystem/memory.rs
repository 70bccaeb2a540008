//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use rigger_core::{
    application::{
        ApplicationError,
        ports::{DocumentSink, TemplateSource},
    },
    domain::ComposeDocument,
    error::RiggerResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a
/// service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    read_only: bool,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.into(), content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file exists.
    pub fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path)
    }

    /// Reject every subsequent write with `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) {
        let mut inner = self.inner.write().unwrap();
        inner.read_only = read_only;
    }

    /// Number of successful document writes.
    pub fn write_count(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.writes
    }
}

impl TemplateSource for MemoryFilesystem {
    fn read_template(&self, path: &Path) -> RiggerResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::template_read(
                path,
                &io::Error::new(io::ErrorKind::NotFound, "file not found"),
            )
            .into()
        })
    }
}

impl DocumentSink for MemoryFilesystem {
    fn write_document(&self, path: &Path, document: &ComposeDocument) -> RiggerResult<usize> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.read_only {
            return Err(ApplicationError::output_write(
                path,
                &io::Error::new(io::ErrorKind::PermissionDenied, "filesystem is read-only"),
            )
            .into());
        }

        let text = document.to_text();
        let bytes = text.len();
        inner.files.insert(path.to_path_buf(), text);
        inner.writes += 1;
        Ok(bytes)
    }
}
