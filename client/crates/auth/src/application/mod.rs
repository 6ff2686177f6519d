//! Application Layer
//!
//! The session manager and the multi-step account flows.

pub mod config;
pub mod manager;
pub mod password;
pub mod register;

// Re-exports
pub use config::AuthConfig;
pub use manager::SessionManager;
pub use password::{PasswordResetFlow, ResetStep, change_password};
pub use register::{RegisterFlow, RegisterStep};
