//! Presentation Layer
//!
//! Route guarding for the UI shell.

pub mod guard;

// Re-exports
pub use guard::{RouteDecision, decide};
