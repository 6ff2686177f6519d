//! Notification endpoints

use chrono::NaiveDateTime;
use kernel::error::app_error::AppResult;
use kernel::id::{ApplicationId, JobListingId, NotificationId, UserId};
use serde::Deserialize;

use crate::client::ApiGateway;

/// Notification record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "isRead")]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub job_listing_id: Option<JobListingId>,
    #[serde(default)]
    pub application_id: Option<ApplicationId>,
}

/// `GET /notifications/user/{userId}`
pub async fn list_for_user(gw: &ApiGateway, user_id: UserId) -> AppResult<Vec<Notification>> {
    gw.get(&format!("/notifications/user/{user_id}")).await
}

/// `GET /notifications/user/{userId}/unread-count`
pub async fn unread_count(gw: &ApiGateway, user_id: UserId) -> AppResult<u64> {
    gw.get(&format!("/notifications/user/{user_id}/unread-count"))
        .await
}

/// `PUT /notifications/read/{id}` - mark a notification read
pub async fn mark_read(gw: &ApiGateway, id: NotificationId) -> AppResult<()> {
    gw.put_empty(&format!("/notifications/read/{id}")).await
}

/// `DELETE /notifications/{id}`
pub async fn delete(gw: &ApiGateway, id: NotificationId) -> AppResult<()> {
    gw.delete(&format!("/notifications/{id}")).await
}
