//! Employer profile endpoints

use kernel::error::app_error::AppResult;
use kernel::id::{EmployerId, UserId};
use serde::{Deserialize, Serialize};

use crate::client::ApiGateway;

/// Employer profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub employer_id: EmployerId,
    pub user_id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub work_email: Option<String>,
    #[serde(default)]
    pub company_description: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

/// `GET /employers/user/{userId}` - `None` when no profile exists yet;
/// unlike job seekers, employer profiles are never auto-created
pub async fn find_by_user(gw: &ApiGateway, user_id: UserId) -> AppResult<Option<Employer>> {
    gw.get_optional(&format!("/employers/user/{user_id}")).await
}

/// `GET /employers/{id}`
pub async fn get(gw: &ApiGateway, id: EmployerId) -> AppResult<Employer> {
    gw.get(&format!("/employers/{id}")).await
}

/// `POST /employers`
pub async fn create(gw: &ApiGateway, profile: &Employer) -> AppResult<Employer> {
    gw.post("/employers", profile).await
}

/// `PUT /employers`
pub async fn update(gw: &ApiGateway, profile: &Employer) -> AppResult<Employer> {
    gw.put("/employers", profile).await
}
