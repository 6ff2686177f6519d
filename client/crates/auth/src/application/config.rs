//! Application Configuration
//!
//! Configuration for the auth application layer.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Where an unauthenticated visitor is sent (authentication failure)
    pub login_path: String,
    /// Where an authenticated visitor with the wrong role is sent
    /// (authorization failure; deliberately distinct from `login_path`)
    pub home_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
        }
    }
}
