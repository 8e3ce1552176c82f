use async_trait::async_trait;
use crate::error::AppResult;
use crate::models::{Notification, Page, UnreadCount};
use crate::services::{ApiClient, Verb};

#[async_trait(?Send)]
pub trait NotificationApi {
    async fn unread_count(&self) -> AppResult<u32>;
    async fn list_notifications(&self, page: u32, size: u32) -> AppResult<Page<Notification>>;
    async fn mark_read(&self, id: i64) -> AppResult<()>;
    async fn mark_all_read(&self) -> AppResult<()>;
}

#[async_trait(?Send)]
impl NotificationApi for ApiClient {
    async fn unread_count(&self) -> AppResult<u32> {
        let count: UnreadCount = self.get("/notifications/unread-count", &[]).await?.into_data()?;
        Ok(count.count)
    }

    async fn list_notifications(&self, page: u32, size: u32) -> AppResult<Page<Notification>> {
        let params = [("page", page.to_string()), ("size", size.to_string())];
        self.get("/notifications", &params).await?.into_data()
    }

    async fn mark_read(&self, id: i64) -> AppResult<()> {
        self.send_empty::<serde_json::Value>(Verb::Patch, &format!("/notifications/{}/read", id))
            .await?
            .into_message()
            .map(|_| ())
    }

    async fn mark_all_read(&self) -> AppResult<()> {
        self.send_empty::<serde_json::Value>(Verb::Patch, "/notifications/read-all")
            .await?
            .into_message()
            .map(|_| ())
    }
}
