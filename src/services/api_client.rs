// ============================================================================
// API CLIENT - HTTP only (stateless apart from the bearer token)
// ============================================================================
// No business logic here: build the request, attach the token, decode the
// `{success, message, data}` envelope. Every collaborator trait in this
// module tree is implemented on top of these helpers.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use crate::error::{AppError, AppResult};
use crate::models::ApiResponse;
use crate::state::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Post,
    Put,
    Patch,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Option<SessionStore>,
}

impl ApiClient {
    /// Client without credentials (public content backend)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), session: None }
    }

    /// Client that sends the session token and clears the session on 401
    pub fn authenticated(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self { base_url: base_url.into(), session: Some(session) }
    }

    pub fn sends_credentials(&self) -> bool {
        self.session.is_some()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Attach the bearer token if there is one; the flag says whether it was sent
    fn authorize(&self, builder: RequestBuilder) -> (RequestBuilder, bool) {
        match self.session.as_ref().and_then(|s| s.token()) {
            Some(token) => (builder.header("Authorization", &format!("Bearer {}", token)), true),
            None => (builder, false),
        }
    }

    fn builder(&self, verb: Verb, path: &str) -> (RequestBuilder, bool) {
        let url = self.url(path);
        let builder = match verb {
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Patch => Request::patch(&url),
        };
        self.authorize(builder)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<ApiResponse<T>> {
        let url = self.url(path);
        log::debug!("🌐 [API] GET {}", url);
        let builder = Request::get(&url).query(params.iter().map(|(k, v)| (*k, v.as_str())));
        let (builder, sent_token) = self.authorize(builder);
        let response = builder.send().await?;
        self.read(response, sent_token).await
    }

    pub async fn send_json<B, T>(&self, verb: Verb, path: &str, body: &B) -> AppResult<ApiResponse<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("🌐 [API] {:?} {}", verb, self.url(path));
        let (builder, sent_token) = self.builder(verb, path);
        let response = builder.json(body)?.send().await?;
        self.read(response, sent_token).await
    }

    /// Request without a body (`PATCH /notifications/read-all` and friends)
    pub async fn send_empty<T: DeserializeOwned>(&self, verb: Verb, path: &str) -> AppResult<ApiResponse<T>> {
        log::debug!("🌐 [API] {:?} {}", verb, self.url(path));
        let (builder, sent_token) = self.builder(verb, path);
        let response = builder.send().await?;
        self.read(response, sent_token).await
    }

    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> AppResult<ApiResponse<T>> {
        log::debug!("🌐 [API] POST (multipart) {}", self.url(path));
        let (builder, sent_token) = self.builder(Verb::Post, path);
        let response = builder.body(form)?.send().await?;
        self.read(response, sent_token).await
    }

    async fn read<T: DeserializeOwned>(&self, response: Response, sent_token: bool) -> AppResult<ApiResponse<T>> {
        let status = response.status();

        if session_expired(status, sent_token) {
            if let Some(session) = &self.session {
                log::warn!("⚠️ [API] 401 from backend, token expired");
                session.clear_auth();
                return Err(AppError::Unauthorized);
            }
        }

        let status_text = response.status_text();
        let body = response.text().await?;
        decode_body(status, &status_text, &body)
    }
}

/// A 401 means an expired session only if a token went out with the
/// request; without one (a failed login) the body carries the reason
pub fn session_expired(status: u16, sent_token: bool) -> bool {
    status == 401 && sent_token
}

/// Envelope decoding, split out of `read` so it runs without a browser
pub fn decode_body<T: DeserializeOwned>(status: u16, status_text: &str, body: &str) -> AppResult<ApiResponse<T>> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|m| !m.trim().is_empty());
        return Err(match message {
            Some(message) if (400..500).contains(&status) => AppError::Business(message),
            Some(message) => AppError::Http { status, message },
            None => AppError::Http { status, message: status_text.to_string() },
        });
    }

    if body.trim().is_empty() {
        return Ok(ApiResponse { success: true, message: None, data: None });
    }

    serde_json::from_str(body).map_err(|e| {
        log::error!("❌ [API] Could not decode response: {}", e);
        AppError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = ApiClient::new("http://clinic.test/api/");
        assert_eq!(client.url("/appointments"), "http://clinic.test/api/appointments");
        assert_eq!(client.url("doctors"), "http://clinic.test/api/doctors");
    }

    #[test]
    fn client_error_with_envelope_is_a_business_error() {
        let result = decode_body::<u32>(409, "Conflict", r#"{"success":false,"message":"Slot already booked"}"#);
        assert_eq!(result, Err(AppError::Business("Slot already booked".into())));
    }

    #[test]
    fn anonymous_401_surfaces_the_backend_message() {
        assert!(!session_expired(401, false));
        assert!(session_expired(401, true));
        assert!(!session_expired(403, true));

        let result = decode_body::<u32>(401, "Unauthorized", r#"{"success":false,"message":"Invalid email or password"}"#);
        assert_eq!(result, Err(AppError::Business("Invalid email or password".into())));
    }

    #[test]
    fn server_error_without_envelope_uses_status_text() {
        let result = decode_body::<u32>(502, "Bad Gateway", "<html>oops</html>");
        assert_eq!(result, Err(AppError::Http { status: 502, message: "Bad Gateway".into() }));
    }

    #[test]
    fn empty_success_body_is_an_ack() {
        let response = decode_body::<u32>(204, "No Content", "").unwrap();
        assert!(response.success);
        assert_eq!(response.data, None);
    }

    #[test]
    fn success_body_decodes_payload() {
        let response = decode_body::<Vec<u32>>(200, "OK", r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert_eq!(response.into_data(), Ok(vec![1, 2]));
        assert!(matches!(decode_body::<u32>(200, "OK", "nope"), Err(AppError::Parse(_))));
    }
}
