//! # Navigation Controller
//!
//! Which screen is showing, plus the little bit of context screens hand to
//! each other (selected category, the phone number typed on login, and the
//! one-shot tutorial flag).
//!
//! ## Screen Graph
//! ```text
//!   signup ──► onboarding ──(completed)──► home (+ tutorial overlay)
//!     ▲  │                                  │ │ │ │ │
//!     │  ▼                                  │ │ │ │ └──► voice ──► home
//!   login ──(submit phone)──► otp ──(verify)┘ │ │ │
//!     ▲                                       │ │ └────► category ──► cart
//!     │ (drawer logout)                       │ └──────► search ────► cart
//!     └───────────────────────────────────────┘
//!                                     cart ──► checkout ──► trackOrder
//!                                     account ──► voucher / currentOrders / pastOrders
//! ```
//!
//! ## Rules
//! - The initial screen is `signup`. There is no terminal screen and no back stack.
//! - [`Navigator::navigate`] is unconditional: any screen can be reached from
//!   any screen. [`links_from`] documents the buttons each screen offers but is
//!   never used to reject a request.
//! - A category is only recorded when a non-empty one is supplied.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Screen;

// =============================================================================
// Link Table
// =============================================================================

/// Forward links each screen renders (buttons, tabs, the drawer).
///
/// Advisory only; the UI uses it for hints and tests use it to document the
/// flow. The home screen includes the drawer's links.
pub const LINKS: &[(Screen, &[Screen])] = &[
    (Screen::Signup, &[Screen::Login, Screen::Onboarding]),
    (Screen::Login, &[Screen::Signup, Screen::Otp]),
    (Screen::Otp, &[Screen::Login, Screen::Home]),
    (Screen::Onboarding, &[Screen::Home]),
    (
        Screen::Home,
        &[
            Screen::Search,
            Screen::Category,
            Screen::Voice,
            Screen::Cart,
            Screen::Account,
            Screen::Personalization,
            Screen::Login,
        ],
    ),
    (Screen::Voice, &[Screen::Home]),
    (Screen::Personalization, &[Screen::Home]),
    (Screen::Cart, &[Screen::Home, Screen::Checkout]),
    (Screen::Checkout, &[Screen::Cart, Screen::Home, Screen::TrackOrder]),
    (Screen::Category, &[Screen::Home, Screen::Cart, Screen::Personalization]),
    (Screen::Search, &[Screen::Home, Screen::Cart]),
    (
        Screen::Account,
        &[
            Screen::Home,
            Screen::Personalization,
            Screen::Voucher,
            Screen::CurrentOrders,
            Screen::PastOrders,
        ],
    ),
    (Screen::Voucher, &[Screen::Account]),
    (Screen::TrackOrder, &[Screen::CurrentOrders]),
    (Screen::CurrentOrders, &[Screen::Account, Screen::TrackOrder]),
    (Screen::PastOrders, &[Screen::Account, Screen::Home]),
];

/// Screens reachable by a button on `screen`.
pub fn links_from(screen: Screen) -> &'static [Screen] {
    LINKS
        .iter()
        .find(|(from, _)| *from == screen)
        .map(|(_, to)| *to)
        .unwrap_or(&[])
}

/// True if `screen` has a visible link to `to`.
pub fn has_link(from: Screen, to: Screen) -> bool {
    links_from(from).contains(&to)
}

// =============================================================================
// Events
// =============================================================================

/// Flow completions that move the user on without an explicit target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum NavEvent {
    /// Signup form passed validation.
    SignupCompleted,

    /// Last onboarding step finished (or skipped).
    OnboardingCompleted,

    /// Login form passed validation; carries the phone/email the user typed.
    LoginSubmitted { phone: String },

    /// OTP "Continue" tapped.
    OtpVerified,

    /// Tooltip tutorial finished or skipped.
    TutorialDismissed,

    /// Drawer "Logout".
    LoggedOut,
}

/// A screen change, so callers can react to entering or leaving a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

impl Transition {
    /// True if this transition moves onto `screen` from somewhere else.
    pub fn enters(&self, screen: Screen) -> bool {
        self.to == screen && self.from != screen
    }

    /// True if this transition moves off `screen`.
    pub fn leaves(&self, screen: Screen) -> bool {
        self.from == screen && self.to != screen
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// The navigation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, rename = "NavigationState")]
pub struct Navigator {
    current_screen: Screen,
    selected_category: String,
    phone_number: String,
    show_tutorial: bool,
}

impl Navigator {
    /// Starts on the signup screen with empty context.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn show_tutorial(&self) -> bool {
        self.show_tutorial
    }

    /// Shows `screen`, recording `category` when a non-empty one is given.
    ///
    /// Never fails and never consults [`links_from`].
    pub fn navigate(&mut self, screen: Screen, category: Option<&str>) -> Transition {
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            self.selected_category = category.to_string();
        }
        self.go(screen)
    }

    /// Applies a flow-completion event.
    ///
    /// ```text
    /// SignupCompleted      ──► onboarding
    /// OnboardingCompleted  ──► home, show_tutorial = true
    /// LoginSubmitted(p)    ──► otp,  phone_number = p
    /// OtpVerified          ──► home
    /// TutorialDismissed    ──► (same screen), show_tutorial = false
    /// LoggedOut            ──► login
    /// ```
    pub fn handle(&mut self, event: NavEvent) -> Transition {
        match event {
            NavEvent::SignupCompleted => self.go(Screen::Onboarding),
            NavEvent::OnboardingCompleted => {
                self.show_tutorial = true;
                self.go(Screen::Home)
            }
            NavEvent::LoginSubmitted { phone } => {
                self.phone_number = phone;
                self.go(Screen::Otp)
            }
            NavEvent::OtpVerified => self.go(Screen::Home),
            NavEvent::TutorialDismissed => {
                self.show_tutorial = false;
                self.go(self.current_screen)
            }
            NavEvent::LoggedOut => self.go(Screen::Login),
        }
    }

    fn go(&mut self, to: Screen) -> Transition {
        let from = std::mem::replace(&mut self.current_screen, to);
        Transition { from, to }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.current_screen(), Screen::Signup);
        assert_eq!(nav.selected_category(), "");
        assert_eq!(nav.phone_number(), "");
        assert!(!nav.show_tutorial());
    }

    #[test]
    fn test_navigate_always_lands_on_target() {
        let mut nav = Navigator::new();
        for from in Screen::ALL {
            for to in Screen::ALL {
                nav.navigate(from, None);
                let t = nav.navigate(to, None);
                assert_eq!(nav.current_screen(), to);
                assert_eq!(t, Transition { from, to });
            }
        }
    }

    #[test]
    fn test_navigate_without_link_is_allowed() {
        let mut nav = Navigator::new();
        assert!(!has_link(Screen::Signup, Screen::PastOrders));
        nav.navigate(Screen::PastOrders, None);
        assert_eq!(nav.current_screen(), Screen::PastOrders);
    }

    #[test]
    fn test_category_only_recorded_when_non_empty() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Category, Some("Vegetables"));
        assert_eq!(nav.selected_category(), "Vegetables");

        nav.navigate(Screen::Home, None);
        nav.navigate(Screen::Category, Some(""));
        assert_eq!(nav.selected_category(), "Vegetables");
    }

    #[test]
    fn test_login_captures_phone_and_goes_to_otp() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Login, None);
        nav.handle(NavEvent::LoginSubmitted {
            phone: "03001234567".into(),
        });
        assert_eq!(nav.phone_number(), "03001234567");
        assert_eq!(nav.current_screen(), Screen::Otp);

        nav.handle(NavEvent::OtpVerified);
        assert_eq!(nav.current_screen(), Screen::Home);
    }

    #[test]
    fn test_onboarding_sets_tutorial_flag_once() {
        let mut nav = Navigator::new();
        nav.handle(NavEvent::SignupCompleted);
        assert_eq!(nav.current_screen(), Screen::Onboarding);

        nav.handle(NavEvent::OnboardingCompleted);
        assert_eq!(nav.current_screen(), Screen::Home);
        assert!(nav.show_tutorial());

        let t = nav.handle(NavEvent::TutorialDismissed);
        assert!(!nav.show_tutorial());
        assert_eq!(t, Transition { from: Screen::Home, to: Screen::Home });
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Home, None);
        nav.handle(NavEvent::LoggedOut);
        assert_eq!(nav.current_screen(), Screen::Login);
    }

    #[test]
    fn test_transition_enter_and_leave() {
        let t = Transition { from: Screen::Home, to: Screen::Voice };
        assert!(t.enters(Screen::Voice));
        assert!(t.leaves(Screen::Home));

        let same = Transition { from: Screen::Voice, to: Screen::Voice };
        assert!(!same.enters(Screen::Voice));
        assert!(!same.leaves(Screen::Voice));
    }

    #[test]
    fn test_every_screen_has_links() {
        for screen in Screen::ALL {
            assert!(!links_from(screen).is_empty(), "{} has no links", screen);
        }
        assert!(has_link(Screen::Cart, Screen::Checkout));
        assert!(has_link(Screen::Home, Screen::Voice));
    }

    #[test]
    fn test_state_wire_shape() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::TrackOrder, None);
        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(json["currentScreen"], "trackOrder");
        assert_eq!(json["showTutorial"], false);

        let event: NavEvent =
            serde_json::from_str(r#"{"type":"loginSubmitted","phone":"0300"}"#).unwrap();
        assert_eq!(event, NavEvent::LoginSubmitted { phone: "0300".into() });
    }
}
