//! Role Value Object
//!
//! Coarse-grained capability tag controlling navigation and route access.
//! A closed enum rather than duck-typed strings, so a new backend role can
//! never silently pass or fail a route check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix the backend prepends to role tokens
pub const ROLE_PREFIX: &str = "ROLE_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    JobSeeker,
    Employer,
}

impl Role {
    /// Wire/storage representation
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::JobSeeker => "JOBSEEKER",
            Role::Employer => "EMPLOYER",
        }
    }

    /// Normalize a raw role string from the backend or the persisted store.
    ///
    /// Strips one literal `ROLE_` prefix (case-sensitive on the prefix),
    /// upper-cases the remainder, and matches against the known roles.
    /// Anything unrecognized is `None` and fails every role check.
    ///
    /// ```
    /// use auth::models::Role;
    /// assert_eq!(Role::normalize("ROLE_EMPLOYER"), Some(Role::Employer));
    /// assert_eq!(Role::normalize("jobseeker"), Some(Role::JobSeeker));
    /// assert_eq!(Role::normalize("ROLE_ADMIN"), None);
    /// ```
    pub fn normalize(raw: &str) -> Option<Self> {
        let stripped = raw.strip_prefix(ROLE_PREFIX).unwrap_or(raw);
        match stripped.to_ascii_uppercase().as_str() {
            "JOBSEEKER" => Some(Role::JobSeeker),
            "EMPLOYER" => Some(Role::Employer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
