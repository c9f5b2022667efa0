//! Response bodies shared by all handlers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod validated_json;

pub use validated_json::ValidatedJson;

/// Error body: `{"message": "...", "error": "..."}`.
///
/// `error` carries the underlying cause (validation details or the raw
/// store error) and is omitted when there is nothing to add.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl ToString) -> Self {
        Self {
            message: message.into(),
            error: Some(error.to_string()),
        }
    }
}
