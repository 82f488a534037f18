//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use shipkit_core::{application::ports::ProjectFilesystem, error::ShipkitResult};

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

impl ProjectFilesystem for LocalFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> ShipkitResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn create_dir_all(&self, path: &Path) -> ShipkitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ShipkitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> shipkit_core::error::ShipkitError {
    use shipkit_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let fs = LocalFilesystem::new();
        let err = fs
            .read_to_string(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("read file"));
    }

    #[test]
    fn write_and_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("nested").join("out.txt");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "content").unwrap();

        assert!(fs.is_file(&path));
        assert!(fs.is_dir(dir.path()));
        assert_eq!(fs.read_to_string(&path).unwrap(), "content");
    }
}
