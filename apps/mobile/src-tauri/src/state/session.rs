//! # Session State
//!
//! Everything about "where the user is": the navigator, the OTP boxes and
//! the onboarding/tutorial steppers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NavState          AuthState            WalkthroughState                │
//! │  ──────────        ─────────            ────────────────                │
//! │  Navigator         OtpInput             onboarding: Stepper(4)          │
//! │  (screen,          (4 digit boxes)      tutorial:   Stepper(5)          │
//! │   category,                                                             │
//! │   phone,                                                                │
//! │   tutorial flag)                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Three separate locks. The navigator lock is the only one held while other
//! locks are taken: screen-change side effects run under it (see
//! [`NavState::transition`]) and never touch the navigator themselves.

use std::sync::{Arc, Mutex, PoisonError};

use krave_core::navigation::Transition;
use krave_core::onboarding::{onboarding_steps, Stepper};
use krave_core::validation::OtpInput;
use krave_core::Navigator;

/// Number of tooltips in the home-screen tutorial.
pub const TUTORIAL_STEPS: usize = 5;

// =============================================================================
// Navigation
// =============================================================================

#[derive(Debug, Default)]
pub struct NavState {
    navigator: Arc<Mutex<Navigator>>,
}

impl NavState {
    /// Starts on the signup screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nav<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Navigator) -> R,
    {
        let nav = self.navigator.lock().unwrap_or_else(PoisonError::into_inner);
        f(&nav)
    }

    pub fn with_nav_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Navigator) -> R,
    {
        let mut nav = self.navigator.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut nav)
    }

    pub fn snapshot(&self) -> Navigator {
        self.with_nav(Navigator::clone)
    }

    /// Moves the navigator with `step`, then runs `effects` on the resulting
    /// transition before the lock is released.
    ///
    /// Side effects therefore run in the same order as the screen changes:
    /// a `home -> voice` racing a `voice -> home` can never leave the voice
    /// runner going on the home screen. `effects` must not use this state.
    pub fn transition<S, E>(&self, step: S, effects: E) -> Navigator
    where
        S: FnOnce(&mut Navigator) -> Transition,
        E: FnOnce(Transition),
    {
        let mut nav = self.navigator.lock().unwrap_or_else(PoisonError::into_inner);
        let transition = step(&mut nav);
        effects(transition);
        nav.clone()
    }
}

// =============================================================================
// OTP
// =============================================================================

#[derive(Debug, Default)]
pub struct AuthState {
    otp: Arc<Mutex<OtpInput>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otp_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OtpInput) -> R,
    {
        let mut otp = self.otp.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut otp)
    }

    /// Clears the boxes, e.g. when the OTP screen is entered again.
    pub fn reset(&self) {
        self.with_otp_mut(|otp| *otp = OtpInput::new());
    }
}

// =============================================================================
// Onboarding & Tutorial
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Walkthroughs {
    pub onboarding: Stepper,
    pub tutorial: Stepper,
}

impl Default for Walkthroughs {
    fn default() -> Self {
        Walkthroughs {
            onboarding: Stepper::new(onboarding_steps().len()),
            tutorial: Stepper::new(TUTORIAL_STEPS),
        }
    }
}

#[derive(Debug, Default)]
pub struct WalkthroughState {
    inner: Arc<Mutex<Walkthroughs>>,
}

impl WalkthroughState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_walkthroughs_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Walkthroughs) -> R,
    {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inner)
    }

    pub fn restart_onboarding(&self) {
        self.with_walkthroughs_mut(|w| w.onboarding = Walkthroughs::default().onboarding);
    }

    pub fn restart_tutorial(&self) {
        self.with_walkthroughs_mut(|w| w.tutorial = Walkthroughs::default().tutorial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::onboarding::StepOutcome;
    use krave_core::{NavEvent, Screen};

    #[test]
    fn test_nav_state_starts_on_signup() {
        let state = NavState::new();
        assert_eq!(state.snapshot().current_screen(), Screen::Signup);

        state.with_nav_mut(|n| {
            n.handle(NavEvent::LoginSubmitted {
                phone: "03001234567".into(),
            })
        });
        let nav = state.snapshot();
        assert_eq!(nav.current_screen(), Screen::Otp);
        assert_eq!(nav.phone_number(), "03001234567");
    }

    #[test]
    fn test_transition_effects_follow_navigation_order() {
        use std::thread;

        let state = Arc::new(NavState::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let workers: Vec<_> = (0..8)
            .map(|i| {
                let state = Arc::clone(&state);
                let seen = Arc::clone(&seen);
                thread::spawn(move || {
                    for j in 0..50 {
                        let target = if (i + j) % 2 == 0 { Screen::Voice } else { Screen::Home };
                        state.transition(
                            |n| n.navigate(target, None),
                            |t| seen.lock().unwrap().push(t),
                        );
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 400);
        for pair in seen.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(seen.last().unwrap().to, state.snapshot().current_screen());
    }

    #[test]
    fn test_otp_reset() {
        let state = AuthState::new();
        state.with_otp_mut(|otp| otp.set_digit(0, "7")).unwrap();
        state.reset();
        assert_eq!(state.with_otp_mut(|otp| otp.code()), "");
    }

    #[test]
    fn test_walkthrough_restart() {
        let state = WalkthroughState::new();
        state.with_walkthroughs_mut(|w| w.onboarding.skip());
        state.restart_onboarding();
        let outcome = state.with_walkthroughs_mut(|w| w.onboarding.next());
        assert_eq!(outcome, StepOutcome::At { index: 1 });
        assert_eq!(state.with_walkthroughs_mut(|w| w.tutorial.step_count()), 5);
    }
}
