//! Infrastructure adapters for shipkit.
//!
//! This crate implements the ports defined in
//! `shipkit-core::application::ports`. It contains all external dependencies
//! and I/O operations: the real filesystem, the embedded template catalog,
//! the substitution renderer, and the GitHub CLI subprocess client.

pub mod filesystem;
pub mod renderer;
pub mod templates;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SubstitutionRenderer;
pub use templates::BuiltinTemplates;
pub use vcs::GhCli;
