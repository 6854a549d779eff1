//! # Auth Commands
//!
//! Signup, login, OTP and profile editing. All checks are client-side field
//! validation; a failed check returns `VALIDATION_ERROR` with the toast text
//! and changes no state.
//!
//! ```text
//! signup ──ok──► profile saved ──► onboarding
//! login  ──ok──► phone captured ──► otp ──verify_otp──► home
//! logout ──────────────────────────────────────────────► login
//! ```

use krave_core::i18n::{text, TextKey, Toast};
use krave_core::navigation::Transition;
use krave_core::validation::{
    digits_only, letters_and_spaces, validate_login, validate_profile, validate_signup, LoginForm,
    OtpInput, SignupForm,
};
use krave_core::{NavEvent, Navigator, UserProfile};
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, State};
use tracing::{debug, info};

use super::navigation::{apply_event, on_transition};
use crate::error::ApiError;
use crate::state::{AuthState, NavState, SettingsState};

/// Navigation after a flow step, with an optional toast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub navigation: Navigator,
    pub toast: Option<Toast>,
}

/// Creates the account: validates the form, saves the profile, and moves to
/// onboarding.
#[tauri::command]
pub async fn signup(
    app: AppHandle,
    settings: State<'_, SettingsState>,
    nav: State<'_, NavState>,
    form: SignupForm,
) -> Result<AuthResponse, ApiError> {
    debug!(email = %form.email, "signup command");
    create_account(&settings, &nav, &form, |t| on_transition(&app, t))
}

/// Validates the login form and moves to the OTP screen carrying the phone.
#[tauri::command]
pub async fn login(
    app: AppHandle,
    nav: State<'_, NavState>,
    form: LoginForm,
) -> Result<AuthResponse, ApiError> {
    debug!("login command");
    submit_login(&nav, &form, |t| on_transition(&app, t))
}

/// A failed check returns before either store is touched.
fn create_account(
    settings: &SettingsState,
    nav: &NavState,
    form: &SignupForm,
    effects: impl FnOnce(Transition),
) -> Result<AuthResponse, ApiError> {
    let profile = validate_signup(form)?;
    let language = settings.with_settings_mut(|s| {
        s.set_user_profile(profile);
        s.language()
    });
    info!("Account created");

    Ok(AuthResponse {
        navigation: nav.transition(|n| n.handle(NavEvent::SignupCompleted), effects),
        toast: Some(Toast::success(text(TextKey::AccountCreated, language))),
    })
}

fn submit_login(
    nav: &NavState,
    form: &LoginForm,
    effects: impl FnOnce(Transition),
) -> Result<AuthResponse, ApiError> {
    let phone = validate_login(form)?;
    Ok(AuthResponse {
        navigation: nav.transition(|n| n.handle(NavEvent::LoginSubmitted { phone }), effects),
        toast: None,
    })
}

/// OTP boxes after an edit, and the box to focus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpResponse {
    pub otp: OtpInput,
    pub focus: Option<usize>,
}

/// Sets one OTP box. `value` must be empty or a single digit.
#[tauri::command]
pub fn set_otp_digit(
    auth: State<'_, AuthState>,
    index: usize,
    value: String,
) -> Result<OtpResponse, ApiError> {
    debug!(index, "set_otp_digit command");
    let response = auth.with_otp_mut(|otp| {
        otp.set_digit(index, &value).map(|focus| OtpResponse {
            otp: otp.clone(),
            focus,
        })
    })?;
    Ok(response)
}

/// Box to focus when backspace is pressed on box `index`.
#[tauri::command]
pub fn otp_backspace(auth: State<'_, AuthState>, index: usize) -> Option<usize> {
    auth.with_otp_mut(|otp| otp.backspace_target(index))
}

/// "Continue" on the OTP screen. The code is not checked.
#[tauri::command]
pub async fn verify_otp(
    app: AppHandle,
    nav: State<'_, NavState>,
    auth: State<'_, AuthState>,
) -> Result<Navigator, ApiError> {
    let entered = auth.with_otp_mut(|otp| otp.code().len());
    debug!(entered, "verify_otp command");
    Ok(apply_event(&app, &nav, NavEvent::OtpVerified))
}

/// Drawer "Logout".
#[tauri::command]
pub async fn logout(app: AppHandle, nav: State<'_, NavState>) -> Result<Navigator, ApiError> {
    info!("Logging out");
    Ok(apply_event(&app, &nav, NavEvent::LoggedOut))
}

#[tauri::command]
pub fn get_profile(settings: State<'_, SettingsState>) -> UserProfile {
    debug!("get_profile command");
    settings.with_settings(|s| s.user_profile().clone())
}

/// Saved profile plus the confirmation toast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: UserProfile,
    pub toast: Toast,
}

/// Saves the account screen's edit dialog.
///
/// Name and phone are filtered the same way the inputs filter keystrokes;
/// then every field must be non-blank.
#[tauri::command]
pub fn update_profile(
    settings: State<'_, SettingsState>,
    profile: UserProfile,
) -> Result<ProfileResponse, ApiError> {
    debug!("update_profile command");
    save_profile(&settings, profile)
}

fn save_profile(settings: &SettingsState, profile: UserProfile) -> Result<ProfileResponse, ApiError> {
    let profile = UserProfile::new(
        letters_and_spaces(&profile.name),
        profile.email,
        digits_only(&profile.phone),
    );
    validate_profile(&profile)?;

    let language = settings.with_settings_mut(|s| {
        s.set_user_profile(profile.clone());
        s.language()
    });

    Ok(ProfileResponse {
        profile,
        toast: Toast::success(text(TextKey::ProfileUpdated, language)),
    })
}
