//! Gateway Traits
//!
//! Interfaces for the backend calls the application layer makes.
//! The HTTP implementation lives in the infrastructure layer; tests
//! substitute in-memory fakes.

use kernel::id::{EmployerId, JobSeekerId, UserId};

use crate::domain::entity::identity::{AccountRecord, Identity, RegisterInput};
use crate::error::AuthResult;

/// Identity operations the session manager needs
#[trait_variant::make(IdentityGateway: Send)]
pub trait LocalIdentityGateway {
    /// Exchange credentials for a bearer token
    async fn login(&self, email: &str, password: &str) -> AuthResult<String>;

    /// Fetch the canonical identity of the current token
    async fn fetch_identity(&self) -> AuthResult<Identity>;

    /// Resolve the account record for an email (case-insensitive)
    async fn find_account_by_email(&self, email: &str) -> AuthResult<Option<AccountRecord>>;

    /// Look up the job-seeker profile id for an account
    async fn find_job_seeker_id(&self, user_id: UserId) -> AuthResult<Option<JobSeekerId>>;

    /// Create an empty job-seeker profile for an account
    async fn create_job_seeker(&self, user_id: UserId) -> AuthResult<JobSeekerId>;

    /// Look up the employer profile id for an account
    async fn find_employer_id(&self, user_id: UserId) -> AuthResult<Option<EmployerId>>;
}

/// Account lifecycle operations (registration, passwords, deletion)
#[trait_variant::make(AccountGateway: Send)]
pub trait LocalAccountGateway {
    /// Send a one-time code to an email address
    async fn send_otp(&self, email: &str) -> AuthResult<()>;

    /// Check a one-time code; returns whether it matched
    async fn verify_otp(&self, email: &str, otp: &str) -> AuthResult<bool>;

    /// Create the account
    async fn register(&self, input: &RegisterInput) -> AuthResult<()>;

    /// Request a password-reset email; returns the server's message
    async fn forgot_password(&self, email: &str) -> AuthResult<Option<String>>;

    /// Redeem a reset token for a new password
    async fn reset_password(&self, token: &str, new_password: &str) -> AuthResult<Option<String>>;

    /// Change the password of the signed-in account
    async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<Option<String>>;

    /// Check an email/password pair without creating a session
    async fn verify_credentials(&self, email: &str, password: &str) -> AuthResult<bool>;

    /// Delete an account
    async fn delete_user(&self, user_id: UserId) -> AuthResult<()>;
}
