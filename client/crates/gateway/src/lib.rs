//! API Gateway Client
//!
//! The single point of outbound HTTP calls to the job-board backend.
//!
//! ## Contract
//! - Every request re-reads the bearer token from the persisted session
//!   store at request time and attaches it when present.
//! - Any 401 response clears the persisted store and raises
//!   [`GatewayEvent::SessionExpired`]; callers cannot opt out.
//! - All other failures are passed through as [`kernel::error::app_error::AppError`]
//!   values; one attempt per call, no retries, no backoff.
//! - Base URL and timeout are fixed at construction (environment-provided),
//!   never mutated at runtime.
//!
//! Typed wrappers over the documented REST surface live in [`endpoints`].

pub mod client;
pub mod config;
pub mod endpoints;
pub mod event;

// Re-exports for convenience
pub use client::ApiGateway;
pub use config::GatewayConfig;
pub use event::GatewayEvent;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
