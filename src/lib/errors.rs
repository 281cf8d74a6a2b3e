//! Error type shared by every API call and storage access in the frontend.
//! Messages are shown to users, so they must never embed tokens or session
//! identifiers.

use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Builds an HTTP error with a sanitized body.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: sanitize_body(body),
        }
    }

    /// The backend looked at the credential and refused it.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Http { status, .. } if matches!(status, 401 | 403 | 404))
    }

    /// Failures that say nothing about the credential itself.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Trims and truncates HTTP error bodies for user-facing messages.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
