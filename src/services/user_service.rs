use async_trait::async_trait;
use crate::error::AppResult;
use crate::models::{Page, ProfileUpdate, User};
use crate::services::{ApiClient, Verb};

#[async_trait(?Send)]
pub trait UserApi {
    async fn list_users(&self, page: u32, size: u32) -> AppResult<Page<User>>;
    async fn update_profile(&self, update: &ProfileUpdate) -> AppResult<User>;
}

#[async_trait(?Send)]
impl UserApi for ApiClient {
    async fn list_users(&self, page: u32, size: u32) -> AppResult<Page<User>> {
        let params = [("page", page.to_string()), ("size", size.to_string())];
        self.get("/users", &params).await?.into_data()
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> AppResult<User> {
        log::info!("👤 [PROFILE] Updating profile");
        self.send_json(Verb::Put, "/users/profile", update).await?.into_data()
    }
}
