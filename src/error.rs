//! Error types for scale-config
//!
//! Expected upload failures (bad address, missing driver, non-zero driver exit)
//! are reported as [`UploadResult`](crate::types::UploadResult) values. The types
//! here cover everything else: input that cannot be encoded, I/O and process
//! failures, and the HTTP mapping used by the API layer.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for scale-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for scale-config
#[derive(Debug, Error)]
pub enum Error {
    /// Tag identifier is not a decimal 32-bit integer
    #[error("invalid tag id '{tag_id}': expected a 32-bit decimal integer")]
    InvalidTagId {
        /// The tag identifier as received
        tag_id: String,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "driver.base_dir")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The driver executable could not be started
    #[error("external tool error: {0}")]
    ExternalTool(String),

    /// The driver did not exit within the configured timeout
    #[error("driver did not exit within {timeout:?} ({command})")]
    DriverTimeout {
        /// The driver arguments that were running
        command: String,
        /// The timeout that elapsed
        timeout: Duration,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),
}

/// API error response format
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "invalid_tag_id",
///     "message": "invalid tag id 'abc': expected a 32-bit decimal integer",
///     "status": 500,
///     "details": { "tag_id": "abc" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "invalid_tag_id", "driver_timeout")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code the error was reported with
    pub status: u16,

    /// Optional additional context about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // Generic fault channel, same as any other unexpected failure
            Error::InvalidTagId { .. } => 500,

            Error::Config { .. } => 500,
            Error::Io(_) => 500,
            Error::Serialization(_) => 500,
            Error::ApiServerError(_) => 500,

            Error::ExternalTool(_) => 503,
            Error::DriverTimeout { .. } => 504,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::InvalidTagId { .. } => "invalid_tag_id",
            Error::Config { .. } => "config_error",
            Error::Io(_) => "io_error",
            Error::ExternalTool(_) => "external_tool_error",
            Error::DriverTimeout { .. } => "driver_timeout",
            Error::Serialization(_) => "serialization_error",
            Error::ApiServerError(_) => "api_server_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let status = error.status_code();
        let message = error.to_string();

        let details = match &error {
            Error::InvalidTagId { tag_id } => Some(serde_json::json!({
                "tag_id": tag_id,
            })),
            Error::Config { key: Some(key), .. } => Some(serde_json::json!({
                "key": key,
            })),
            Error::DriverTimeout { command, timeout } => Some(serde_json::json!({
                "command": command,
                "timeout_secs": timeout.as_secs(),
            })),
            _ => None,
        };

        ApiError {
            error: ErrorDetail {
                code,
                message,
                status,
                details,
            },
        }
    }
}
