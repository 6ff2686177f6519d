//! Canonical Identity
//!
//! What the server reports for the current token (`GET /auth/me`), before
//! any client-side normalization.

use kernel::id::{EmployerId, JobSeekerId, UserId};

/// Server-reported identity for the current credential
///
/// `user_id` absent means the backend could not resolve the token to an
/// account; the session manager treats that as an invalid identity and
/// signs out.
#[derive(Debug, Clone, Default)]
pub struct Identity {
    pub user_id: Option<UserId>,
    /// Raw role token, e.g. `ROLE_JOBSEEKER`; normalized by the caller
    pub role: Option<String>,
    pub job_seeker_id: Option<JobSeekerId>,
    pub employer_id: Option<EmployerId>,
    pub email: Option<String>,
}

/// Account record resolved during login
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub user_id: UserId,
    pub email: String,
    /// Raw role token as stored server-side
    pub user_type: Option<String>,
}

/// Registration input collected by the sign-up flow
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: crate::domain::value_object::role::Role,
}
