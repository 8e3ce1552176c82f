// ============================================================================
// CONFIG - Compile-time configuration (values injected by build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_PUBLIC_API_BASE_URL: &str = "http://localhost:8080/api/public";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub public_api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub notification_poll_seconds: u32,
    pub toast_duration_ms: u32,
    pub default_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            public_api_base_url: DEFAULT_PUBLIC_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            notification_poll_seconds: 30,
            toast_duration_ms: 3000,
            default_page_size: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(trim_base_url)
                .unwrap_or(defaults.api_base_url),
            public_api_base_url: option_env!("PUBLIC_API_BASE_URL")
                .map(trim_base_url)
                .unwrap_or(defaults.public_api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            notification_poll_seconds: option_env!("NOTIFICATION_POLL_SECONDS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.notification_poll_seconds),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            default_page_size: option_env!("DEFAULT_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.default_page_size),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Max log level handed to `wasm_logger`
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }

    pub fn notification_poll_ms(&self) -> u32 {
        self.notification_poll_seconds.saturating_mul(1000)
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
