//! Authentication endpoints
//!
//! Login, canonical identity, the OTP registration steps, and the
//! password flows.

use kernel::error::app_error::AppResult;
use kernel::id::{EmployerId, JobSeekerId, UserId};
use serde::{Deserialize, Serialize};

use crate::client::ApiGateway;

/// `POST /auth/login` request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `GET /auth/me` response - the canonical identity of the current token
///
/// `user_id` is absent when the backend cannot resolve the token to an
/// account; the session core treats that as an invalid identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub job_seeker_id: Option<JobSeekerId>,
    #[serde(default)]
    pub employer_id: Option<EmployerId>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Generic `{"message": ...}` response body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /auth/register` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `JOBSEEKER` or `EMPLOYER`
    pub user_type: String,
}

/// `POST /auth/reset-password` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// `POST /auth/change-password` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: String,
    pub current_password: String,
    pub new_password: String,
}

pub async fn login(gw: &ApiGateway, req: &LoginRequest) -> AppResult<LoginResponse> {
    gw.post("/auth/login", req).await
}

pub async fn me(gw: &ApiGateway) -> AppResult<Identity> {
    gw.get("/auth/me").await
}

pub async fn send_otp(gw: &ApiGateway, email: &str) -> AppResult<()> {
    gw.post_unit("/auth/send-otp", &serde_json::json!({ "email": email }))
        .await
}

/// Returns whether the OTP matched
pub async fn verify_otp(gw: &ApiGateway, email: &str, otp: &str) -> AppResult<bool> {
    gw.post("/auth/verify-otp", &serde_json::json!({ "email": email, "otp": otp }))
        .await
}

pub async fn register(gw: &ApiGateway, req: &RegisterRequest) -> AppResult<()> {
    gw.post_unit("/auth/register", req).await
}

pub async fn forgot_password(gw: &ApiGateway, email: &str) -> AppResult<MessageResponse> {
    gw.post("/auth/forgot-password", &serde_json::json!({ "email": email }))
        .await
}

pub async fn reset_password(
    gw: &ApiGateway,
    req: &ResetPasswordRequest,
) -> AppResult<MessageResponse> {
    gw.post("/auth/reset-password", req).await
}

pub async fn change_password(
    gw: &ApiGateway,
    req: &ChangePasswordRequest,
) -> AppResult<MessageResponse> {
    gw.post("/auth/change-password", req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_tolerates_missing_fields() {
        let identity: Identity = serde_json::from_str("{}").unwrap();
        assert!(identity.user_id.is_none());
        assert!(identity.role.is_none());
    }

    #[test]
    fn test_identity_camel_case() {
        let identity: Identity = serde_json::from_str(
            r#"{"userId": 1, "role": "ROLE_JOBSEEKER", "jobSeekerId": 7, "employerId": null}"#,
        )
        .unwrap();
        assert_eq!(identity.user_id.map(|id| id.value()), Some(1));
        assert_eq!(identity.job_seeker_id.map(|id| id.value()), Some(7));
        assert!(identity.employer_id.is_none());
    }

    #[test]
    fn test_register_request_wire_format() {
        let req = RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "hunter22".into(),
            user_type: "JOBSEEKER".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userType"], "JOBSEEKER");
    }
}
