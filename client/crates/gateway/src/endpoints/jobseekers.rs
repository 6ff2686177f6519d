//! Job-seeker profile endpoints

use kernel::error::app_error::AppResult;
use kernel::id::{JobSeekerId, UserId};
use serde::{Deserialize, Serialize};

use crate::client::ApiGateway;

/// Job-seeker profile (scalar fields the client consumes)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeeker {
    pub job_seeker_id: JobSeekerId,
    pub user_id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub about_me: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub experience: Option<i32>,
}

/// `POST /jobseekers` body - the login flow auto-creates an empty profile
/// with just the user id when none exists yet
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobSeeker {
    pub user_id: UserId,
}

/// `GET /jobseekers/user/{userId}` - profile for an account, `None` when
/// the profile has not been created yet
pub async fn find_by_user(gw: &ApiGateway, user_id: UserId) -> AppResult<Option<JobSeeker>> {
    gw.get_optional(&format!("/jobseekers/user/{user_id}")).await
}

/// `GET /jobseekers/{id}`
pub async fn get(gw: &ApiGateway, id: JobSeekerId) -> AppResult<JobSeeker> {
    gw.get(&format!("/jobseekers/{id}")).await
}

/// `POST /jobseekers`
pub async fn create(gw: &ApiGateway, new: &NewJobSeeker) -> AppResult<JobSeeker> {
    gw.post("/jobseekers", new).await
}

/// `PUT /jobseekers`
pub async fn update(gw: &ApiGateway, profile: &JobSeeker) -> AppResult<JobSeeker> {
    gw.put("/jobseekers", profile).await
}

/// `GET /jobseekers/{id}/recommendations` - server-side scored listing ids;
/// the scoring itself is opaque to the client
pub async fn recommendations(
    gw: &ApiGateway,
    id: JobSeekerId,
) -> AppResult<Vec<super::joblistings::JobListing>> {
    gw.get(&format!("/jobseekers/{id}/recommendations")).await
}
