//! Gateway Configuration
//!
//! Fixed at construction; the base URL is environment-provided and never
//! mutated at runtime.

use std::time::Duration;

/// Default backend base URL (local development backend)
pub const DEFAULT_API_BASE: &str = "http://localhost:8081/api";

/// API gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL every request path is appended to, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the environment (`API_BASE`), falling back
    /// to [`DEFAULT_API_BASE`]
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Join a request path onto the base URL
    pub fn url(&self, path: &str) -> String {
        debug_assert!(path.starts_with('/'), "paths are absolute: {path}");
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://localhost:8081/api");
    }

    #[test]
    fn test_url_join() {
        let config = GatewayConfig::default();
        assert_eq!(
            config.url("/auth/login"),
            "http://localhost:8081/api/auth/login"
        );
    }
}
