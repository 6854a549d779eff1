//! # Walkthrough Commands
//!
//! The four-step onboarding carousel shown after signup, and the five-step
//! tooltip tutorial shown over the home screen after onboarding.
//!
//! ```text
//! signup ──► onboarding [0] ─next─► [1] ─next─► [2] ─next─► [3] ─next─┐
//!                  │                                                    │
//!                  └────────────────────── skip ────────────────────────┤
//!                                                                       ▼
//!                                       home + tutorial [0..4] ─next/skip─► home
//! ```

use krave_core::onboarding::{
    onboarding_steps, tutorial_tips, OnboardingStep, StepOutcome, Stepper, TutorialTip,
};
use krave_core::{NavEvent, Navigator};
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, State};
use tracing::{debug, info};

use super::navigation::apply_event;
use crate::error::ApiError;
use crate::state::{NavState, SettingsState, WalkthroughState};

/// A button press on either walkthrough.
///
/// ```json
/// { "action": "goTo", "index": 2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum StepAction {
    Next,
    Back,
    Skip,
    /// Progress dot tapped.
    GoTo { index: usize },
}

impl StepAction {
    fn apply(self, stepper: &mut Stepper) -> StepOutcome {
        match self {
            StepAction::Next => stepper.next(),
            StepAction::Back => stepper.back(),
            StepAction::Skip => stepper.skip(),
            StepAction::GoTo { index } => stepper.go_to(index),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingView {
    pub steps: Vec<OnboardingStep>,
    pub stepper: Stepper,
}

/// Stepper position after an action. `navigation` is set when the
/// walkthrough finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub outcome: StepOutcome,
    pub stepper: Stepper,
    pub navigation: Option<Navigator>,
}

#[tauri::command]
pub fn get_onboarding(walk: State<'_, WalkthroughState>) -> OnboardingView {
    debug!("get_onboarding command");
    OnboardingView {
        steps: onboarding_steps(),
        stepper: walk.with_walkthroughs_mut(|w| w.onboarding),
    }
}

/// Moves the onboarding carousel. Finishing it opens home with the tutorial.
#[tauri::command]
pub async fn onboarding_step(
    app: AppHandle,
    nav: State<'_, NavState>,
    walk: State<'_, WalkthroughState>,
    action: StepAction,
) -> Result<StepResponse, ApiError> {
    debug!(?action, "onboarding_step command");
    let (outcome, stepper) = walk.with_walkthroughs_mut(|w| {
        let outcome = action.apply(&mut w.onboarding);
        (outcome, w.onboarding)
    });

    let navigation = match outcome {
        StepOutcome::Completed => {
            info!("Onboarding completed");
            walk.restart_tutorial();
            Some(apply_event(&app, &nav, NavEvent::OnboardingCompleted))
        }
        StepOutcome::At { .. } => None,
    };

    Ok(StepResponse {
        outcome,
        stepper,
        navigation,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialView {
    /// False once the tutorial was finished or skipped.
    pub visible: bool,
    pub tips: Vec<TutorialTip>,
    pub stepper: Stepper,
}

#[tauri::command]
pub fn get_tutorial(
    settings: State<'_, SettingsState>,
    nav: State<'_, NavState>,
    walk: State<'_, WalkthroughState>,
) -> TutorialView {
    debug!("get_tutorial command");
    TutorialView {
        visible: nav.with_nav(|n| n.show_tutorial()),
        tips: tutorial_tips(settings.language()),
        stepper: walk.with_walkthroughs_mut(|w| w.tutorial),
    }
}

/// Moves the tooltip tutorial. Finishing or skipping it hides the overlay.
#[tauri::command]
pub async fn tutorial_step(
    app: AppHandle,
    nav: State<'_, NavState>,
    walk: State<'_, WalkthroughState>,
    action: StepAction,
) -> Result<StepResponse, ApiError> {
    debug!(?action, "tutorial_step command");
    let (outcome, stepper) = walk.with_walkthroughs_mut(|w| {
        let outcome = action.apply(&mut w.tutorial);
        (outcome, w.tutorial)
    });

    let navigation = match outcome {
        StepOutcome::Completed => Some(apply_event(&app, &nav, NavEvent::TutorialDismissed)),
        StepOutcome::At { .. } => None,
    };

    Ok(StepResponse {
        outcome,
        stepper,
        navigation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_action_wire_format() {
        let action: StepAction = serde_json::from_str(r#"{"action":"goTo","index":2}"#).unwrap();
        assert_eq!(action, StepAction::GoTo { index: 2 });

        let action: StepAction = serde_json::from_str(r#"{"action":"skip"}"#).unwrap();
        assert_eq!(action, StepAction::Skip);
    }

    #[test]
    fn test_next_walks_off_the_end() {
        let mut stepper = Stepper::new(3);
        assert_eq!(StepAction::Next.apply(&mut stepper), StepOutcome::At { index: 1 });
        assert_eq!(StepAction::Next.apply(&mut stepper), StepOutcome::At { index: 2 });
        assert_eq!(StepAction::Next.apply(&mut stepper), StepOutcome::Completed);
    }

    #[test]
    fn test_skip_completes_from_anywhere() {
        let mut stepper = Stepper::new(5);
        StepAction::GoTo { index: 1 }.apply(&mut stepper);
        assert_eq!(StepAction::Skip.apply(&mut stepper), StepOutcome::Completed);
        assert!(stepper.is_completed());
    }
}
