//! # Validation Module
//!
//! Form guard clauses and input filters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Keystroke filters                                            │
//! │  ├── letters_and_spaces()  (name fields)                               │
//! │  └── digits_only()         (phone fields, OTP boxes)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Submit guards (THIS MODULE)                                  │
//! │  ├── First failing rule wins                                            │
//! │  └── Err(ValidationError) → toast, no store touched                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store setters (no validation at all)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A field counts as empty when it is empty after trimming whitespace.
//! Guards only ever read the form; they never modify it.
//!
//! ## Usage
//! ```rust
//! use krave_core::validation::{validate_login, LoginForm};
//!
//! let form = LoginForm { email_or_phone: "03001234567".into(), password: "".into() };
//! let err = validate_login(&form).unwrap_err();
//! assert_eq!(err.to_string(), "Password is required");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::UserProfile;
use crate::OTP_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(value: &str, field: &str) -> ValidationResult<()> {
    if is_blank(value) {
        Err(ValidationError::required(field))
    } else {
        Ok(())
    }
}

// =============================================================================
// Input Filters
// =============================================================================

/// Keeps ASCII letters and whitespace; used on name fields while typing.
///
/// ```rust
/// use krave_core::validation::letters_and_spaces;
///
/// assert_eq!(letters_and_spaces("Ali 2nd Khan!"), "Ali nd Khan");
/// ```
pub fn letters_and_spaces(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// Keeps ASCII digits; used on phone fields while typing.
///
/// ```rust
/// use krave_core::validation::digits_only;
///
/// assert_eq!(digits_only("+92 300-1234567"), "923001234567");
/// ```
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

// =============================================================================
// Signup
// =============================================================================

/// The signup form as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// The profile saved when signup succeeds.
    pub fn profile(&self) -> UserProfile {
        UserProfile::new(&self.name, &self.email, &self.phone)
    }
}

/// Checks the signup form, returning the profile to save.
///
/// ## Order
/// 1. Name, Email, Phone Number, Password, Confirm Password required
/// 2. "Passwords do not match"
///
/// Password equality is checked on the untrimmed values.
pub fn validate_signup(form: &SignupForm) -> ValidationResult<UserProfile> {
    require(&form.name, "Name")?;
    require(&form.email, "Email")?;
    require(&form.phone, "Phone Number")?;
    require(&form.password, "Password")?;
    require(&form.confirm_password, "Confirm Password")?;

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(form.profile())
}

// =============================================================================
// Login
// =============================================================================

/// The login form as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoginForm {
    pub email_or_phone: String,
    pub password: String,
}

/// Checks the login form, returning the identifier carried to the OTP screen.
pub fn validate_login(form: &LoginForm) -> ValidationResult<String> {
    require(&form.email_or_phone, "Email or Phone Number")?;
    require(&form.password, "Password")?;
    Ok(form.email_or_phone.clone())
}

// =============================================================================
// Profile Edit
// =============================================================================

/// Checks an edited profile: every field must be non-blank.
pub fn validate_profile(profile: &UserProfile) -> ValidationResult<()> {
    if is_blank(&profile.name) || is_blank(&profile.email) || is_blank(&profile.phone) {
        return Err(ValidationError::AllFieldsRequired);
    }
    Ok(())
}

// =============================================================================
// Other Guards
// =============================================================================

/// Order cancellation needs a reason.
pub fn validate_cancel_reason(reason: &str) -> ValidationResult<&str> {
    if is_blank(reason) {
        return Err(ValidationError::CancellationReasonRequired);
    }
    Ok(reason.trim())
}

/// "Request a Product" needs a product name.
pub fn validate_product_request(product_name: &str) -> ValidationResult<&str> {
    if is_blank(product_name) {
        return Err(ValidationError::ProductNameRequired);
    }
    Ok(product_name.trim())
}

// =============================================================================
// OTP Input
// =============================================================================

/// The four single-digit OTP boxes.
///
/// "Continue" does not require the code to be complete; [`OtpInput::is_complete`]
/// is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OtpInput {
    digits: [Option<char>; OTP_LENGTH],
}

impl OtpInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets box `index` to `value`, which must be empty or a single ASCII digit.
    ///
    /// Returns the box to focus next: the following box after a digit is
    /// entered, `None` otherwise. Rejected input leaves the boxes untouched.
    pub fn set_digit(&mut self, index: usize, value: &str) -> ValidationResult<Option<usize>> {
        if index >= OTP_LENGTH {
            return Err(ValidationError::InvalidOtpDigit { index });
        }

        let mut chars = value.chars();
        let digit = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_digit() => Some(c),
            _ => return Err(ValidationError::InvalidOtpDigit { index }),
        };

        self.digits[index] = digit;
        Ok(match digit {
            Some(_) if index + 1 < OTP_LENGTH => Some(index + 1),
            _ => None,
        })
    }

    /// Box to focus when backspace is pressed on an already-empty box.
    pub fn backspace_target(&self, index: usize) -> Option<usize> {
        match self.digits.get(index) {
            Some(None) if index > 0 => Some(index - 1),
            _ => None,
        }
    }

    /// Digits entered so far, in box order.
    pub fn code(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
