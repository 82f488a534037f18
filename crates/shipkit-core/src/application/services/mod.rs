//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! high-level use cases: "classify this directory" and "generate the
//! infrastructure files".

pub mod detect;
pub mod scaffold;

pub use detect::ProfileDetector;
pub use scaffold::{PlannedFile, ScaffoldService};
