//! Shared DTOs for the localefix workspace.
//!
//! # Design constraints
//! - These types cross every crate boundary in the workspace; keep them
//!   small and dependency-free beyond serde.
//! - They serialize cleanly (snake_case tags) so they can be logged or
//!   embedded by a host process, even though the tool itself writes no
//!   machine-readable artifacts.

pub mod outcome;
pub mod report;
