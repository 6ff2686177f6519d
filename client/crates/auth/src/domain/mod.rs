//! Domain Layer
//!
//! Contains the session entity, role value object, auth state, and the
//! gateway traits the application layer calls.

pub mod entity;
pub mod repository;
pub mod state;
pub mod value_object;

// Re-exports
pub use entity::session::Session;
pub use repository::{AccountGateway, IdentityGateway};
pub use state::{AuthState, SessionPhase};
pub use value_object::role::Role;
