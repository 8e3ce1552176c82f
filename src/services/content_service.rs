use async_trait::async_trait;
use wasm_bindgen::JsValue;
use crate::error::{AppError, AppResult};
use crate::models::{Blog, ConsultationInfo, ConsultationRequest, Introduction, IntroductionDraft, Page};
use crate::services::{ApiClient, Verb};

#[async_trait(?Send)]
pub trait ConsultationInfoApi {
    /// Returns the backend's `message`
    async fn create(&self, request: &ConsultationRequest) -> AppResult<Option<String>>;
    async fn list(&self, page: u32, size: u32) -> AppResult<Page<ConsultationInfo>>;
}

#[async_trait(?Send)]
pub trait IntroductionApi {
    async fn create_introduction(&self, draft: &IntroductionDraft) -> AppResult<Introduction>;
}

#[async_trait(?Send)]
pub trait BlogApi {
    async fn get_public_blogs(&self, page: u32, size: u32) -> AppResult<Page<Blog>>;
    async fn get_public_blog_detail(&self, id: i64) -> AppResult<Blog>;
}

#[async_trait(?Send)]
impl ConsultationInfoApi for ApiClient {
    async fn create(&self, request: &ConsultationRequest) -> AppResult<Option<String>> {
        log::info!("📨 [CONSULTATION] Sending request for {}", request.email);
        self.send_json::<_, serde_json::Value>(Verb::Post, "/consultation-info", request)
            .await?
            .into_message()
    }

    async fn list(&self, page: u32, size: u32) -> AppResult<Page<ConsultationInfo>> {
        let params = [("page", page.to_string()), ("size", size.to_string())];
        self.get("/consultation-info", &params).await?.into_data()
    }
}

fn js_error(error: JsValue) -> AppError {
    AppError::Network(format!("{:?}", error))
}

#[async_trait(?Send)]
impl IntroductionApi for ApiClient {
    async fn create_introduction(&self, draft: &IntroductionDraft) -> AppResult<Introduction> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_str("title", &draft.title).map_err(js_error)?;
        form.append_with_str("summary", &draft.summary).map_err(js_error)?;
        form.append_with_str("status", draft.status.as_param()).map_err(js_error)?;
        if let Some(file) = &draft.thumbnail_file {
            form.append_with_blob_and_filename("thumbnailFile", file, &file.name())
                .map_err(js_error)?;
        }
        log::info!("🖼️ [INTRODUCTION] Uploading \"{}\"", draft.title);
        self.post_form("/introductions", form).await?.into_data()
    }
}

#[async_trait(?Send)]
impl BlogApi for ApiClient {
    async fn get_public_blogs(&self, page: u32, size: u32) -> AppResult<Page<Blog>> {
        let params = [("page", page.to_string()), ("size", size.to_string())];
        self.get("/blogs/public", &params).await?.into_data()
    }

    async fn get_public_blog_detail(&self, id: i64) -> AppResult<Blog> {
        self.get(&format!("/blogs/public/{}", id), &[]).await?.into_data()
    }
}
