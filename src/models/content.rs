use serde::{Deserialize, Serialize};

/// Public "request a consultation" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A stored consultation request, listed on the staff patient-requests page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationInfo {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IntroductionStatus {
    #[default]
    Draft,
    Published,
}

impl IntroductionStatus {
    pub fn as_param(&self) -> &'static str {
        match self {
            IntroductionStatus::Draft => "DRAFT",
            IntroductionStatus::Published => "PUBLISHED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntroductionStatus::Draft => "Draft",
            IntroductionStatus::Published => "Published",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Some(IntroductionStatus::Draft),
            "PUBLISHED" => Some(IntroductionStatus::Published),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Introduction {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub status: IntroductionStatus,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Multipart payload for `introductionApi.createIntroduction`
#[derive(Debug, Clone, PartialEq)]
pub struct IntroductionDraft {
    pub title: String,
    pub summary: String,
    pub status: IntroductionStatus,
    pub thumbnail_file: Option<web_sys::File>,
}
