// ============================================================================
// ERRORS - Validation, business and transport failures
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Toast text used when an error carries no message of its own
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Field name -> message, ordered so the first error is stable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Keeps the first message recorded for a field
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Record `message` when `check` returned one
    pub fn check(&mut self, field: &'static str, check: Option<String>) {
        if let Some(message) = check {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("invalid input ({0})")]
    Validation(FieldErrors),

    /// `{success: false, message}` from the backend
    #[error("{0}")]
    Business(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("session expired")]
    Unauthorized,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Text shown to the user in a toast
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors
                .first_message()
                .unwrap_or("Please check the highlighted fields.")
                .to_string(),
            AppError::Business(message) | AppError::Http { message, .. } => {
                non_empty_or_generic(message)
            }
            AppError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            AppError::Network(_) => "Cannot reach the server. Check your connection and try again.".to_string(),
            AppError::Parse(_) | AppError::Storage(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Parse(error.to_string())
    }
}

fn non_empty_or_generic(message: &str) -> String {
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        message.trim().to_string()
    }
}

pub type AppResult<T> = Result<T, AppError>;
