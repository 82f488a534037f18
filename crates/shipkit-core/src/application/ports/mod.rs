//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `shipkit-adapters` implement
//! these.
//!
//! ## Driven (output) ports
//!
//! - [`ProjectFilesystem`]: marker-file checks, manifest reads, output writes
//! - [`TemplateSource`]: catalog lookup by archetype-relative path
//! - [`TemplateRenderer`]: template text + context → rendered text
//! - [`VcsHost`]: authentication check and branch protection

use std::path::Path;

use crate::domain::RenderContext;
use crate::error::ShipkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `shipkit_adapters::filesystem::LocalFilesystem` (production)
/// - `shipkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The detector only calls the read side (`is_file`, `is_dir`,
/// `read_to_string`); the scaffold service only calls the write side.
pub trait ProjectFilesystem: Send + Sync {
    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` exists at all.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> ShipkitResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ShipkitResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ShipkitResult<()>;
}

/// Port for template lookup.
///
/// Paths are catalog-relative, e.g. `php_laravel/Dockerfile` or
/// `common/docker-compose.yml`.
///
/// Implemented by `shipkit_adapters::templates::BuiltinTemplates` (embedded
/// catalog).
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Fetch the raw template text at `path`.
    fn get(&self, path: &str) -> ShipkitResult<String>;
}

/// Port for template rendering.
///
/// Implemented by `shipkit_adapters::renderer::SubstitutionRenderer`
/// (`{{key}}` replacement).
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render template text with the given variable context.
    fn render(&self, source: &str, context: &RenderContext) -> ShipkitResult<String>;
}

/// Port for the version-control host.
///
/// Implemented by `shipkit_adapters::vcs::GhCli` (GitHub CLI subprocess).
/// Requires an externally-established authenticated session; shipkit never
/// handles credentials itself.
#[cfg_attr(test, mockall::automock)]
pub trait VcsHost: Send + Sync {
    /// Verify that an authenticated session exists.
    fn check_auth(&self) -> ShipkitResult<()>;

    /// Apply branch-protection rules to `branch` of `repo`
    /// (`owner/name` form).
    fn protect_branch(&self, repo: &str, branch: &str) -> ShipkitResult<()>;
}
