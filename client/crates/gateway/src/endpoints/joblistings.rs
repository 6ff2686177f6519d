//! Job listing endpoints

use chrono::NaiveDate;
use kernel::error::app_error::AppResult;
use kernel::id::{EmployerId, JobListingId};
use serde::{Deserialize, Serialize};

use crate::client::ApiGateway;

/// Job listing record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub job_listing_id: JobListingId,
    pub employer_id: EmployerId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub experience: Option<i32>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub salary: Option<i32>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub posted_date: Option<NaiveDate>,
    #[serde(default)]
    pub required_skills: Option<String>,
}

/// `POST /joblistings` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobListing {
    pub employer_id: EmployerId,
    pub title: String,
    pub description: Option<String>,
    pub qualification: Option<String>,
    pub location: Option<String>,
    pub company_name: Option<String>,
    pub experience: Option<i32>,
    pub job_type: Option<String>,
    pub salary: Option<i32>,
    pub required_skills: Option<String>,
}

/// `GET /joblistings/filter` query; `None` fields are omitted
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    pub role: Option<String>,
    pub skill: Option<String>,
    pub location: Option<String>,
    pub experience: Option<i32>,
    pub job_type: Option<String>,
}

impl JobFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(role) = &self.role {
            query.push(("role", role.clone()));
        }
        if let Some(skill) = &self.skill {
            query.push(("skill", skill.clone()));
        }
        if let Some(location) = &self.location {
            query.push(("location", location.clone()));
        }
        if let Some(experience) = self.experience {
            query.push(("experience", experience.to_string()));
        }
        if let Some(job_type) = &self.job_type {
            query.push(("jobType", job_type.clone()));
        }
        query
    }
}

/// `GET /joblistings`
pub async fn list(gw: &ApiGateway) -> AppResult<Vec<JobListing>> {
    gw.get("/joblistings").await
}

/// `GET /joblistings/{id}`
pub async fn get(gw: &ApiGateway, id: JobListingId) -> AppResult<JobListing> {
    gw.get(&format!("/joblistings/{id}")).await
}

/// `GET /joblistings/filter` - server-side filtered listing
pub async fn filter(gw: &ApiGateway, filter: &JobFilter) -> AppResult<Vec<JobListing>> {
    gw.get_query("/joblistings/filter", &filter.to_query()).await
}

/// `POST /joblistings`
pub async fn create(gw: &ApiGateway, new: &NewJobListing) -> AppResult<()> {
    gw.post_unit("/joblistings", new).await
}

/// `PUT /joblistings`
pub async fn update(gw: &ApiGateway, listing: &JobListing) -> AppResult<JobListing> {
    gw.put("/joblistings", listing).await
}

/// `DELETE /joblistings/{id}`
pub async fn delete(gw: &ApiGateway, id: JobListingId) -> AppResult<()> {
    gw.delete(&format!("/joblistings/{id}")).await
}
