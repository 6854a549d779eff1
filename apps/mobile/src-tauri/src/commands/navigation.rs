//! # Navigation Commands
//!
//! Screen changes and the side effects of entering or leaving a screen.
//!
//! ## Transition Side Effects
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Transition              Effect                                         │
//! │  ──────────              ──────                                         │
//! │  * ──► voice             start voice runner (settings language)         │
//! │  voice ──► *             stop voice runner                              │
//! │  * ──► checkout          rebuild checkout form from the profile         │
//! │  * ──► onboarding        onboarding stepper back to step 0              │
//! │  * ──► otp               clear the OTP boxes                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command that moves the navigator runs [`on_transition`] while still
//! holding the navigator lock, so overlapping screen changes apply their side
//! effects in order. Those commands are `async` so the voice runner is
//! spawned on Tauri's tokio runtime.

use std::sync::Arc;

use krave_core::navigation::{links_from, Transition};
use krave_core::voice::VoiceSession;
use krave_core::{NavEvent, Navigator, Screen};
use tauri::{AppHandle, Manager, State};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{
    AuthState, CheckoutState, ConfigState, NavState, SettingsState, TauriVoiceEvents, VoiceState,
    WalkthroughState,
};

/// Runs the side effects of a screen change.
pub(crate) fn on_transition(app: &AppHandle, transition: Transition) {
    if transition.from == transition.to {
        return;
    }
    debug!(from = %transition.from, to = %transition.to, "Screen changed");

    if transition.leaves(Screen::Voice) {
        app.state::<VoiceState>().stop();
    }

    if transition.enters(Screen::Voice) {
        let language = app.state::<SettingsState>().language();
        let delay_ms = app.state::<ConfigState>().voice_record_delay_ms;
        app.state::<VoiceState>().start(
            VoiceSession::new(language, delay_ms),
            Arc::new(TauriVoiceEvents::new(app.clone())),
        );
    }

    if transition.enters(Screen::Checkout) {
        let profile = app
            .state::<SettingsState>()
            .with_settings(|s| s.user_profile().clone());
        app.state::<CheckoutState>().reset(&profile);
    }

    if transition.enters(Screen::Onboarding) {
        app.state::<WalkthroughState>().restart_onboarding();
    }

    if transition.enters(Screen::Otp) {
        app.state::<AuthState>().reset();
    }
}

/// Moves to `screen` and runs the transition's side effects.
pub(crate) fn go_to(
    app: &AppHandle,
    nav: &NavState,
    screen: Screen,
    category: Option<&str>,
) -> Navigator {
    nav.transition(|n| n.navigate(screen, category), |t| on_transition(app, t))
}

/// Feeds a flow event to the navigator and runs the side effects.
pub(crate) fn apply_event(app: &AppHandle, nav: &NavState, event: NavEvent) -> Navigator {
    nav.transition(|n| n.handle(event), |t| on_transition(app, t))
}

/// Gets the navigation state.
#[tauri::command]
pub fn get_navigation(nav: State<'_, NavState>) -> Navigator {
    debug!("get_navigation command");
    nav.snapshot()
}

/// Shows `screen`.
///
/// Always succeeds: there is no guard and no back-stack. A non-empty
/// `category` is remembered for the category screen.
///
/// ## Example
/// ```typescript
/// await invoke('navigate', { screen: 'category', category: 'Fruits' });
/// ```
#[tauri::command]
pub async fn navigate(
    app: AppHandle,
    nav: State<'_, NavState>,
    screen: Screen,
    category: Option<String>,
) -> Result<Navigator, ApiError> {
    debug!(screen = %screen, category = ?category, "navigate command");
    Ok(go_to(&app, &nav, screen, category.as_deref()))
}

/// Forward links the UI offers from `screen`. Advisory only.
#[tauri::command]
pub fn get_screen_links(screen: Screen) -> Vec<Screen> {
    debug!(screen = %screen, "get_screen_links command");
    links_from(screen).to_vec()
}
