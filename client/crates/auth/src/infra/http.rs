//! HTTP Gateway Adapter
//!
//! Implements the domain gateway traits on top of the typed API client.
//! DTO-to-entity mapping lives here; nothing above this layer sees wire
//! types.

use std::sync::Arc;

use gateway::ApiGateway;
use gateway::endpoints::{auth, employers, jobseekers, users};
use kernel::id::{EmployerId, JobSeekerId, UserId};

use crate::domain::entity::identity::{AccountRecord, Identity, RegisterInput};
use crate::domain::repository::{AccountGateway, IdentityGateway};
use crate::error::{AuthError, AuthResult};

pub struct HttpAuthGateway {
    gateway: Arc<ApiGateway>,
}

impl HttpAuthGateway {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

impl IdentityGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> AuthResult<String> {
        let request = auth::LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match auth::login(&self.gateway, &request).await {
            Ok(response) => Ok(response.token),
            // A 401 from the login endpoint means bad credentials, not an
            // expired session.
            Err(error) if error.kind().is_auth_failure() => Err(AuthError::InvalidCredentials),
            Err(error) => Err(error.into()),
        }
    }

    async fn fetch_identity(&self) -> AuthResult<Identity> {
        let identity = auth::me(&self.gateway).await?;
        Ok(Identity {
            user_id: identity.user_id,
            role: identity.role,
            job_seeker_id: identity.job_seeker_id,
            employer_id: identity.employer_id,
            email: identity.email,
        })
    }

    async fn find_account_by_email(&self, email: &str) -> AuthResult<Option<AccountRecord>> {
        let accounts = users::list(&self.gateway).await?;
        Ok(accounts
            .into_iter()
            .find(|account| account.email.eq_ignore_ascii_case(email))
            .map(|account| AccountRecord {
                user_id: account.user_id,
                email: account.email,
                user_type: account.user_type,
            }))
    }

    async fn find_job_seeker_id(&self, user_id: UserId) -> AuthResult<Option<JobSeekerId>> {
        let profile = jobseekers::find_by_user(&self.gateway, user_id).await?;
        Ok(profile.map(|p| p.job_seeker_id))
    }

    async fn create_job_seeker(&self, user_id: UserId) -> AuthResult<JobSeekerId> {
        let profile =
            jobseekers::create(&self.gateway, &jobseekers::NewJobSeeker { user_id }).await?;
        Ok(profile.job_seeker_id)
    }

    async fn find_employer_id(&self, user_id: UserId) -> AuthResult<Option<EmployerId>> {
        let profile = employers::find_by_user(&self.gateway, user_id).await?;
        Ok(profile.map(|p| p.employer_id))
    }
}

impl AccountGateway for HttpAuthGateway {
    async fn send_otp(&self, email: &str) -> AuthResult<()> {
        auth::send_otp(&self.gateway, email).await?;
        Ok(())
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> AuthResult<bool> {
        Ok(auth::verify_otp(&self.gateway, email, otp).await?)
    }

    async fn register(&self, input: &RegisterInput) -> AuthResult<()> {
        let request = auth::RegisterRequest {
            name: input.name.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
            user_type: input.role.code().to_string(),
        };
        auth::register(&self.gateway, &request).await?;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> AuthResult<Option<String>> {
        let response = auth::forgot_password(&self.gateway, email).await?;
        Ok(response.message)
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> AuthResult<Option<String>> {
        let request = auth::ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        let response = auth::reset_password(&self.gateway, &request).await?;
        Ok(response.message)
    }

    async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<Option<String>> {
        let request = auth::ChangePasswordRequest {
            email: email.to_string(),
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let response = auth::change_password(&self.gateway, &request).await?;
        Ok(response.message)
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> AuthResult<bool> {
        Ok(users::verify_credentials(&self.gateway, email, password).await?)
    }

    async fn delete_user(&self, user_id: UserId) -> AuthResult<()> {
        users::delete(&self.gateway, user_id).await?;
        Ok(())
    }
}
