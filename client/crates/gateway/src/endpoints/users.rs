//! User account endpoints

use kernel::error::app_error::AppResult;
use kernel::id::UserId;
use serde::Deserialize;

use crate::client::ApiGateway;

/// User account record (`/users`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub user_id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    /// Raw role token, e.g. `ROLE_JOBSEEKER` or `JOBSEEKER`
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// `GET /users` - every account; the login flow resolves the signed-in
/// account by email from this list
pub async fn list(gw: &ApiGateway) -> AppResult<Vec<UserAccount>> {
    gw.get("/users").await
}

/// `POST /users/verify` - check an email/password pair, returns whether it
/// is valid (used before destructive operations like account deletion)
pub async fn verify_credentials(gw: &ApiGateway, email: &str, password: &str) -> AppResult<bool> {
    gw.post(
        "/users/verify",
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await
}

/// `DELETE /users/{id}`
pub async fn delete(gw: &ApiGateway, id: UserId) -> AppResult<()> {
    gw.delete(&format!("/users/{id}")).await
}
