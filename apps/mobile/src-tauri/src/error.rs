//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Krave Mart                             │
//! │                                                                         │
//! │  WebView                     Rust Backend                               │
//! │  ───────                     ────────────                               │
//! │                                                                         │
//! │  invoke('signup', { form })                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── ValidationError::PasswordMismatch ──┐    │  │
//! │  │         │                                                  │    │  │
//! │  │         ▼                                                  ▼    │  │
//! │  │  Unknown Id? ───────── CoreError::OrderNotFound ──── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('signup', { form })                                     │
//! │  } catch (e) {                                                          │
//! │    // e.code = "VALIDATION_ERROR"                                       │
//! │    toast.error(e.message)   // "Passwords do not match"                 │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.
//! For validation failures the message is exactly the toast text.

use krave_core::CoreError;
use serde::Serialize;

use crate::state::ConfigError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the WebView receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Order not found: #ORD-99999"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed; the message is the toast text
    ValidationError,

    /// Unknown product or order id
    NotFound,

    /// Configuration could not be loaded or is invalid
    ConfigError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id.to_string()),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<krave_core::ValidationError> for ApiError {
    fn from(err: krave_core::ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Makes ApiError work as a Tauri command error.
///
/// Tauri requires the error type to implement `Into<tauri::ipc::InvokeError>`.
/// Since we implement `Serialize`, we can convert to JSON.
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::ValidationError;

    #[test]
    fn test_validation_message_is_toast_text() {
        let err = ApiError::from(CoreError::Validation(ValidationError::PasswordMismatch));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Passwords do not match");
    }

    #[test]
    fn test_wire_shape() {
        let err = ApiError::from(CoreError::OrderNotFound("#ORD-1".into()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Order not found: #ORD-1");
    }

    #[test]
    fn test_config_error_code() {
        let err = ApiError::from(ConfigError::Invalid("store_name must not be empty".into()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CONFIG_ERROR");
    }

    #[test]
    fn test_every_code_maps_from_a_real_failure() {
        let codes = [
            ApiError::from(CoreError::ProductNotFound(99)).code,
            ApiError::from(ValidationError::PasswordMismatch).code,
            ApiError::from(ConfigError::Invalid("x".into())).code,
        ];
        assert_eq!(
            codes,
            [ErrorCode::NotFound, ErrorCode::ValidationError, ErrorCode::ConfigError]
        );
    }
}
