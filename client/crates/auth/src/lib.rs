//! Auth/Session Core
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, role value object, gateway traits
//! - `application/` - Session manager and multi-step account flows
//! - `infra/` - HTTP implementation over the API gateway
//! - `presentation/` - Route guard
//!
//! ## Features
//! - Synchronous session hydration from the persisted store (no network)
//! - Best-effort refresh of the canonical identity from the server
//! - Login with role-specific profile resolution
//! - OTP-based registration and password-reset flows
//! - Role-gated route decisions
//!
//! ## Ownership Model
//! The [`SessionManager`] is the only component that mutates session
//! identity, in memory and in the persisted store. The gateway's global
//! 401 handler clears the store but never writes identity fields; the
//! application reacts to its event by calling [`SessionManager::logout`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::manager::SessionManager;
pub use application::password::PasswordResetFlow;
pub use application::register::RegisterFlow;
pub use error::{AuthError, AuthResult};
pub use infra::http::HttpAuthGateway;
pub use presentation::guard::{RouteDecision, decide};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::session::Session;
    pub use crate::domain::state::{AuthState, SessionPhase};
    pub use crate::domain::value_object::role::Role;
}

#[cfg(test)]
mod tests;
