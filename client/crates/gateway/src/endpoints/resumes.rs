//! Resume endpoints
//!
//! File contents are opaque to the client; downloads come back as raw bytes.

use kernel::error::app_error::AppResult;
use kernel::id::{JobSeekerId, ResumeId};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::client::ApiGateway;

/// Resume record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub resume_id: ResumeId,
    pub job_seeker_id: JobSeekerId,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// `POST /resumes/upload` - multipart form with a `jobSeekerId` text field
/// and a `file` part; the backend stores the file and answers with the
/// created record
pub async fn upload(
    gw: &ApiGateway,
    job_seeker_id: JobSeekerId,
    file_name: &str,
    bytes: Vec<u8>,
) -> AppResult<Resume> {
    let form = Form::new()
        .text("jobSeekerId", job_seeker_id.to_string())
        .part("file", Part::bytes(bytes).file_name(file_name.to_string()));
    gw.post_multipart("/resumes/upload", form).await
}

/// `GET /resumes/jobseeker/{id}`
pub async fn list_for_job_seeker(gw: &ApiGateway, id: JobSeekerId) -> AppResult<Vec<Resume>> {
    gw.get(&format!("/resumes/jobseeker/{id}")).await
}

/// `GET /resumes/{id}`
pub async fn get(gw: &ApiGateway, id: ResumeId) -> AppResult<Resume> {
    gw.get(&format!("/resumes/{id}")).await
}

/// `PUT /resumes` - e.g. promote a resume to primary
pub async fn update(gw: &ApiGateway, resume: &Resume) -> AppResult<()> {
    gw.put_unit("/resumes", resume).await
}

/// `DELETE /resumes/{id}`
pub async fn delete(gw: &ApiGateway, id: ResumeId) -> AppResult<()> {
    gw.delete(&format!("/resumes/{id}")).await
}

/// `GET /resumes/download/{id}` - raw file bytes
pub async fn download(gw: &ApiGateway, id: ResumeId) -> AppResult<Vec<u8>> {
    gw.get_bytes(&format!("/resumes/download/{id}")).await
}
