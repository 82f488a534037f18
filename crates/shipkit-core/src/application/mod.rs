//! Application layer for shipkit.
//!
//! This layer contains:
//! - **Services**: use case orchestration (ProfileDetector, ScaffoldService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{PlannedFile, ProfileDetector, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{ProjectFilesystem, TemplateRenderer, TemplateSource, VcsHost};

pub use error::ApplicationError;
