//! Platform utilities shared across client crates.
//!
//! Currently this is the durable key-value store the session identity
//! lives in between runs.

pub mod store;
