use async_trait::async_trait;
use crate::error::AppResult;
use crate::models::{LeaveRequest, LeaveStatus};
use crate::services::ApiClient;

#[async_trait(?Send)]
pub trait LeaveRequestApi {
    /// `None` lists every status
    async fn list(&self, status: Option<LeaveStatus>) -> AppResult<Vec<LeaveRequest>>;
}

#[async_trait(?Send)]
impl LeaveRequestApi for ApiClient {
    async fn list(&self, status: Option<LeaveStatus>) -> AppResult<Vec<LeaveRequest>> {
        let params: Vec<(&str, String)> = status
            .map(|s| vec![("status", s.as_param().to_string())])
            .unwrap_or_default();
        self.get("/leave-requests", &params).await?.into_data()
    }
}
