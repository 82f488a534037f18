//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use shipkit_core::application::ApplicationError;
use shipkit_core::application::ports::ProjectFilesystem;
use shipkit_core::error::ShipkitResult;

/// In-memory filesystem for testing. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            let _ = self.create_dir_all(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path, content.into());
        }
    }

}

impl ProjectFilesystem for MemoryFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> ShipkitResult<String> {
        let inner = self.inner.read().map_err(|_| poisoned(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "file does not exist".into(),
            }
            .into()
        })
    }

    fn create_dir_all(&self, path: &Path) -> ShipkitResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ShipkitResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        // Enforce the same discipline as the real filesystem: parents first.
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !inner.directories.contains(parent)
        {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn poisoned(path: &Path) -> shipkit_core::error::ShipkitError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
