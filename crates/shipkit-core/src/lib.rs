//! # shipkit-core
//!
//! Domain and application layers for the shipkit infrastructure scaffolding
//! tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          shipkit-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ProfileDetector, ScaffoldService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Filesystem, Templates, Render, Vcs)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     shipkit-adapters (Infrastructure)   │
//! │  (LocalFilesystem, BuiltinTemplates,    │
//! │   SubstitutionRenderer, GhCli)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use shipkit_core::application::ProfileDetector;
//! # fn filesystem() -> Box<dyn shipkit_core::application::ProjectFilesystem> { unimplemented!() }
//!
//! let fs = filesystem(); // impl ProjectFilesystem
//! let detector = ProfileDetector::new();
//! let profile = detector.detect(fs.as_ref(), Path::new("."))?;
//! println!("{profile}");
//! # Ok::<(), shipkit_core::error::ShipkitError>(())
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Flat re-exports for the common types.
pub use application::{ProfileDetector, ScaffoldService};
pub use domain::{
    Archetype, Database, Environment, ProjectProfile, RenderContext, ScaffoldAnswers,
};
pub use error::{ShipkitError, ShipkitResult};
