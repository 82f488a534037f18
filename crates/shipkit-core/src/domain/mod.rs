//! Core domain layer for shipkit.
//!
//! Pure business values: archetypes, profiles, answers, version constraints.
//! All I/O (marker-file checks, manifest reads, template writes) goes through
//! ports defined in the application layer.
//!
//! ## Boundaries
//!
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable values**: everything here is `Clone + PartialEq`
//! - **No tracing**: observability belongs to application and CLI layers

pub mod answers;
pub mod archetype;
pub mod constraint;
pub mod error;

// Re-exports for convenience
pub use answers::{Database, Environment, RenderContext, ScaffoldAnswers, validate_app_name};
pub use archetype::{Archetype, ProjectProfile};
pub use constraint::{
    DEFAULT_PHP_VERSION, PHP_VERSION_CANDIDATES, VersionConstraint, default_php_candidates,
    parse_candidates,
};
pub use error::{DomainError, ErrorCategory};
