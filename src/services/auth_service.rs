use async_trait::async_trait;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, User};
use crate::services::{ApiClient, Verb};

#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse>;
    async fn signup(&self, request: &SignupRequest) -> AppResult<User>;
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        log::info!("🔐 [AUTH] Signing in {}", request.email);
        self.send_json(Verb::Post, "/auth/login", request).await?.into_data()
    }

    async fn signup(&self, request: &SignupRequest) -> AppResult<User> {
        log::info!("📝 [AUTH] Creating account for {}", request.email);
        self.send_json(Verb::Post, "/auth/signup", request).await?.into_data()
    }
}
