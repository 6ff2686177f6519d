//! Registration Flow
//!
//! Sign-up is a three-step sequence: send a one-time code to the email,
//! verify the code, then submit the account. The flow object enforces
//! the order; out-of-order calls fail with [`AuthError::FlowState`]
//! instead of hitting the backend.

use std::sync::Arc;

use crate::domain::entity::identity::RegisterInput;
use crate::domain::repository::AccountGateway;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStep {
    Start,
    OtpSent,
    Verified,
    Completed,
}

pub struct RegisterFlow<G: AccountGateway> {
    gateway: Arc<G>,
    step: RegisterStep,
    email: Option<String>,
}

impl<G: AccountGateway> RegisterFlow<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            step: RegisterStep::Start,
            email: None,
        }
    }

    pub fn step(&self) -> RegisterStep {
        self.step
    }

    /// Send (or re-send) the one-time code. Re-sending after a successful
    /// verification restarts verification for the new code.
    pub async fn send_otp(&mut self, email: &str) -> AuthResult<()> {
        if self.step == RegisterStep::Completed {
            return Err(AuthError::FlowState("registration already completed"));
        }
        self.gateway.send_otp(email).await?;
        self.email = Some(email.to_string());
        self.step = RegisterStep::OtpSent;
        tracing::debug!("Verification code sent");
        Ok(())
    }

    /// Check the code the user typed against the one that was sent.
    pub async fn verify_otp(&mut self, otp: &str) -> AuthResult<()> {
        let email = match (&self.step, &self.email) {
            (RegisterStep::OtpSent, Some(email)) => email.clone(),
            _ => return Err(AuthError::FlowState("send a verification code first")),
        };
        if self.gateway.verify_otp(&email, otp).await? {
            self.step = RegisterStep::Verified;
            Ok(())
        } else {
            Err(AuthError::InvalidOtp)
        }
    }

    /// Submit the account. Requires a verified code for the same email.
    pub async fn complete(&mut self, input: RegisterInput) -> AuthResult<()> {
        if self.step != RegisterStep::Verified {
            return Err(AuthError::FlowState("verify the code before registering"));
        }
        if self.email.as_deref() != Some(input.email.as_str()) {
            return Err(AuthError::FlowState(
                "registration email does not match the verified email",
            ));
        }
        self.gateway.register(&input).await?;
        self.step = RegisterStep::Completed;
        tracing::info!("Account registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::AccountGateway;
    use crate::domain::value_object::role::Role;
    use kernel::id::UserId;
    use std::sync::Mutex;

    struct ScriptedGateway {
        otp_ok: bool,
        registered: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(otp_ok: bool) -> Self {
            Self {
                otp_ok,
                registered: Mutex::new(Vec::new()),
            }
        }
    }

    impl AccountGateway for ScriptedGateway {
        async fn send_otp(&self, _email: &str) -> AuthResult<()> {
            Ok(())
        }

        async fn verify_otp(&self, _email: &str, _otp: &str) -> AuthResult<bool> {
            Ok(self.otp_ok)
        }

        async fn register(&self, input: &RegisterInput) -> AuthResult<()> {
            self.registered.lock().unwrap().push(input.email.clone());
            Ok(())
        }

        async fn forgot_password(&self, _email: &str) -> AuthResult<Option<String>> {
            Ok(None)
        }

        async fn reset_password(
            &self,
            _token: &str,
            _new_password: &str,
        ) -> AuthResult<Option<String>> {
            Ok(None)
        }

        async fn change_password(
            &self,
            _email: &str,
            _current_password: &str,
            _new_password: &str,
        ) -> AuthResult<Option<String>> {
            Ok(None)
        }

        async fn verify_credentials(&self, _email: &str, _password: &str) -> AuthResult<bool> {
            Ok(false)
        }

        async fn delete_user(&self, _user_id: UserId) -> AuthResult<()> {
            Ok(())
        }
    }

    fn input(email: &str) -> RegisterInput {
        RegisterInput {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
            role: Role::JobSeeker,
        }
    }

    #[tokio::test]
    async fn test_happy_path() {
        let gateway = Arc::new(ScriptedGateway::new(true));
        let mut flow = RegisterFlow::new(gateway.clone());

        flow.send_otp("ada@example.com").await.unwrap();
        flow.verify_otp("123456").await.unwrap();
        flow.complete(input("ada@example.com")).await.unwrap();

        assert_eq!(flow.step(), RegisterStep::Completed);
        assert_eq!(
            gateway.registered.lock().unwrap().as_slice(),
            ["ada@example.com"]
        );
    }

    #[tokio::test]
    async fn test_verify_before_send_is_rejected() {
        let mut flow = RegisterFlow::new(Arc::new(ScriptedGateway::new(true)));
        let result = flow.verify_otp("123456").await;
        assert!(matches!(result, Err(AuthError::FlowState(_))));
    }

    #[tokio::test]
    async fn test_complete_before_verify_is_rejected() {
        let gateway = Arc::new(ScriptedGateway::new(true));
        let mut flow = RegisterFlow::new(gateway.clone());
        flow.send_otp("ada@example.com").await.unwrap();

        let result = flow.complete(input("ada@example.com")).await;
        assert!(matches!(result, Err(AuthError::FlowState(_))));
        assert!(gateway.registered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_otp() {
        let mut flow = RegisterFlow::new(Arc::new(ScriptedGateway::new(false)));
        flow.send_otp("ada@example.com").await.unwrap();

        let result = flow.verify_otp("000000").await;
        assert!(matches!(result, Err(AuthError::InvalidOtp)));
        assert_eq!(flow.step(), RegisterStep::OtpSent);
    }

    #[tokio::test]
    async fn test_email_must_match_verified_email() {
        let mut flow = RegisterFlow::new(Arc::new(ScriptedGateway::new(true)));
        flow.send_otp("ada@example.com").await.unwrap();
        flow.verify_otp("123456").await.unwrap();

        let result = flow.complete(input("eve@example.com")).await;
        assert!(matches!(result, Err(AuthError::FlowState(_))));
    }
}
