//! Version-control host adapters.

mod gh;

pub use gh::GhCli;
