//! Password Recovery
//!
//! Forgot-password is two steps: request a reset email, then redeem the
//! token it contains for a new password. The token arrives out of band,
//! so redeeming without a prior request in the same process is valid
//! (the user may have requested the email elsewhere).

use std::sync::Arc;

use crate::domain::repository::AccountGateway;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStep {
    Start,
    EmailSent,
    Done,
}

pub struct PasswordResetFlow<G: AccountGateway> {
    gateway: Arc<G>,
    step: ResetStep,
}

impl<G: AccountGateway> PasswordResetFlow<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            step: ResetStep::Start,
        }
    }

    pub fn step(&self) -> ResetStep {
        self.step
    }

    /// Ask the backend to email a reset link; returns the server message.
    pub async fn request(&mut self, email: &str) -> AuthResult<Option<String>> {
        if self.step == ResetStep::Done {
            return Err(AuthError::FlowState("password already reset"));
        }
        let message = self.gateway.forgot_password(email).await?;
        self.step = ResetStep::EmailSent;
        Ok(message)
    }

    /// Redeem a reset token for a new password.
    pub async fn reset(&mut self, token: &str, new_password: &str) -> AuthResult<Option<String>> {
        if self.step == ResetStep::Done {
            return Err(AuthError::FlowState("password already reset"));
        }
        let message = self.gateway.reset_password(token, new_password).await?;
        self.step = ResetStep::Done;
        tracing::info!("Password reset");
        Ok(message)
    }
}

/// Change the password of a signed-in account. Stateless, unlike the
/// recovery flow; kept here so all password operations share a module.
pub async fn change_password<G: AccountGateway>(
    gateway: &G,
    email: &str,
    current_password: &str,
    new_password: &str,
) -> AuthResult<Option<String>> {
    gateway
        .change_password(email, current_password, new_password)
        .await
}
