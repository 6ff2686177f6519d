//! Infrastructure Layer
//!
//! HTTP-backed implementations of the domain gateway traits.

pub mod http;

// Re-exports
pub use http::HttpAuthGateway;
