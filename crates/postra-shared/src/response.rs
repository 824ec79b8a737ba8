//! Standardized response envelopes.

use serde::{Deserialize, Serialize};

/// Standard successful response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

/// Error report carrying the registered error code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Registered error code, e.g. 1101 for a missing post.
    pub code: u32,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: u32, title: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<&postra_core::PostError> for ErrorResponse {
    fn from(err: &postra_core::PostError) -> Self {
        use postra_core::PostError;

        let title = match err {
            PostError::InvalidIdentity(_) => "Invalid Address",
            PostError::Validation(_) => "Validation Failed",
            PostError::PostNotFound(_) => "Not Found",
            PostError::Unauthorized => "Unauthorized",
            PostError::PersistFailure(_) => "Internal Error",
        };
        ErrorResponse::new(err.code(), title).with_detail(err.to_string())
    }
}
