//! Application endpoints

use chrono::NaiveDateTime;
use kernel::error::app_error::AppResult;
use kernel::id::{ApplicationId, JobListingId, JobSeekerId};
use serde::{Deserialize, Serialize};

use crate::client::ApiGateway;

/// Application record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: ApplicationId,
    pub job_listing_id: JobListingId,
    pub job_seeker_id: JobSeekerId,
    /// `APPLIED`, `REVIEWED`, `ACCEPTED`, `REJECTED` - owned by the backend
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub resume_file_path: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub application_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub applicant_name: Option<String>,
}

/// `POST /applications` body - apply to a listing with a resume
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_listing_id: JobListingId,
    pub job_seeker_id: JobSeekerId,
    pub resume_file_path: Option<String>,
}

/// `GET /applications` - all applications (employer view)
pub async fn list(gw: &ApiGateway) -> AppResult<Vec<Application>> {
    gw.get("/applications").await
}

/// `GET /applications/jobseeker/{id}` - one seeker's applications; the
/// applied-status of a listing is derived from this list client-side
pub async fn list_for_job_seeker(
    gw: &ApiGateway,
    id: JobSeekerId,
) -> AppResult<Vec<Application>> {
    gw.get(&format!("/applications/jobseeker/{id}")).await
}

/// `POST /applications`
pub async fn create(gw: &ApiGateway, new: &NewApplication) -> AppResult<()> {
    gw.post_unit("/applications", new).await
}

/// `PUT /applications` - employer updates an application's status
pub async fn update(gw: &ApiGateway, application: &Application) -> AppResult<()> {
    gw.put_unit("/applications", application).await
}
