//! # Error Types
//!
//! Domain-specific error types for krave-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  krave-core errors (this file)                                         │
//! │  ├── CoreError        - Lookups against the static data                │
//! │  └── ValidationError  - Form guard clauses (shown as toasts)           │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend toast         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text of a `ValidationError` IS the toast message
//! 3. Errors are enum variants, never String
//! 4. A failed validation never mutates a store

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core logic errors.
///
/// None of the stores can fail; these cover lookups by id coming in from the
/// UI and form validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product id is not in the static catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Order id is not in the current order list.
    ///
    /// ## When This Occurs
    /// - The order was already cancelled from another view
    /// - The UI sent a stale id after a restart
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are the only user-visible failures in the app. Each one aborts the
/// triggering action and is surfaced as a transient toast.
///
/// ## User Workflow
/// ```text
/// Tap "Sign Up"
///      │
///      ▼
/// validate_signup() ── Err(PasswordMismatch)
///      │
///      ▼
/// Toast: "Passwords do not match" (still on signup, profile untouched)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or whitespace only.
    #[error("{field} is required")]
    Required { field: String },

    /// Signup password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Profile edit with any empty field.
    #[error("All fields are required")]
    AllFieldsRequired,

    /// Cancelling an order without a reason.
    #[error("Please provide a reason for cancellation")]
    CancellationReasonRequired,

    /// Requesting a product without naming it.
    #[error("Please enter product name")]
    ProductNameRequired,

    /// An OTP box received something other than a single digit.
    #[error("OTP digit {index} must be a single number")]
    InvalidOtpDigit { index: usize },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ProductNotFound(42).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            CoreError::OrderNotFound("#ORD-1".into()).to_string(),
            "Order not found: #ORD-1"
        );
    }

    #[test]
    fn test_validation_error_messages_are_toasts() {
        assert_eq!(
            ValidationError::required("Name").to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            ValidationError::CancellationReasonRequired.to_string(),
            "Please provide a reason for cancellation"
        );
        assert_eq!(
            ValidationError::ProductNameRequired.to_string(),
            "Please enter product name"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error_transparently() {
        let core_err: CoreError = ValidationError::AllFieldsRequired.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "All fields are required");
    }
}
