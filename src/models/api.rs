use serde::{Deserialize, Serialize};
use crate::error::{AppError, AppResult};

/// `{success, message, data}` envelope returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "none")]
    pub data: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiResponse<T> {
    fn business_error(message: Option<String>) -> AppError {
        AppError::Business(message.unwrap_or_default())
    }

    /// Payload of a successful response; `success: false` is a business error
    pub fn into_data(self) -> AppResult<T> {
        if !self.success {
            return Err(Self::business_error(self.message));
        }
        self.data
            .ok_or_else(|| AppError::Parse("response has no data".to_string()))
    }

    /// Success message of a response whose payload is not needed
    pub fn into_message(self) -> AppResult<Option<String>> {
        if self.success {
            Ok(self.message)
        } else {
            Err(Self::business_error(self.message))
        }
    }
}

/// One page of a collection, `page` is 1-based
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn empty(size: u32) -> Self {
        Self { items: Vec::new(), page: 1, size, total_items: 0, total_pages: 0 }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Clamp a requested page into `1..=total_pages`
    pub fn clamp_page(&self, requested: u32) -> u32 {
        requested.clamp(1, self.total_pages.max(1))
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_envelope_becomes_business_error() {
        let response: ApiResponse<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Doctor is on leave"}"#).unwrap();
        assert_eq!(response.into_data(), Err(AppError::Business("Doctor is on leave".into())));
    }

    #[test]
    fn message_only_response_parses_without_data() {
        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"Saved"}"#).unwrap();
        assert_eq!(response.into_message(), Ok(Some("Saved".to_string())));
    }

    #[test]
    fn page_navigation_bounds() {
        let page: Page<u8> = Page { items: vec![], page: 2, size: 10, total_items: 25, total_pages: 3 };
        assert!(page.has_previous());
        assert!(page.has_next());
        assert_eq!(page.clamp_page(0), 1);
        assert_eq!(page.clamp_page(9), 3);
        assert_eq!(Page::<u8>::empty(10).clamp_page(4), 1);
    }
}
