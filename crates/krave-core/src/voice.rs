//! # Voice Demo
//!
//! The voice screen replays a fixed six-line conversation. This module is the
//! pure state machine; the shell owns the clock and the speech synthesizer.
//!
//! ## Playback
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    VoiceSession                                         │
//! │                                                                         │
//! │   next_action()                                                         │
//! │     ├── user line ──► Record { delay }  ── shell sleeps ──┐            │
//! │     ├── bot line  ──► Speak { text, lang } ── TTS ends ───┤            │
//! │     └── all shown ──► Done                                 │            │
//! │                                                            ▼            │
//! │   complete_current() ──► visible += 1 ──► next_action() ...            │
//! │                                                                         │
//! │   Leaving the screen drops the session; nothing else is cancelled.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A line becomes visible only after its recording delay or utterance has
//! finished, so `visible` counts completed lines.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Language;

/// How long a user line shows the "recording" animation, in milliseconds.
pub const DEFAULT_RECORD_DELAY_MS: u64 = 2000;

// =============================================================================
// Script
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScriptLine {
    pub sender: Sender,
    /// May contain `\n`; the UI renders it with `white-space: pre-line`.
    pub text: String,
}

const ENGLISH_SCRIPT: [&str; 6] = [
    "I need to buy bread. Which company's bread should I get?",
    "Bake Parlor bread costs 100 rupees.\nWould you like to purchase it?",
    "Yes",
    "Your total bill is 199 rupees\nBake Parlor - 100 rupees\nDelivery Charges - 99 rupees",
    "Yes, confirm",
    "Your order has been confirmed. Delivery time is 20 minutes",
];

const URDU_SCRIPT: [&str; 6] = [
    "مجھے بریڈ خریدنی ہے۔ کس کمپنی کی بریڈ لوں؟",
    "بیک پارلر کی بریڈ 100 روپے کی ہے۔\nکیا آپ اسے خریدنا چاہیں گے؟",
    "جی ہاں",
    "آپ کا کل بل 199 روپے ہے\nبیک پارلر - 100 روپے\nڈیلیوری چارجز - 99 روپے",
    "ہاں، کنفرم کریں",
    "آپ کا آرڈر کنفرم ہو چکا ہے۔ ڈیلیوری کا وقت 20 منٹ ہے",
];

/// The conversation in `language`. Lines alternate user, bot, starting with user.
pub fn script(language: Language) -> Vec<ScriptLine> {
    let lines = match language {
        Language::English => ENGLISH_SCRIPT,
        Language::Urdu => URDU_SCRIPT,
    };
    lines
        .iter()
        .enumerate()
        .map(|(i, text)| ScriptLine {
            sender: if i % 2 == 0 { Sender::User } else { Sender::Bot },
            text: (*text).to_string(),
        })
        .collect()
}

// =============================================================================
// Session
// =============================================================================

/// What the shell must do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceAction {
    /// Show the recording animation for line `index`, then complete it.
    Record { index: usize, delay_ms: u64 },
    /// Speak line `index`, then complete it when the utterance ends.
    Speak {
        index: usize,
        text: String,
        lang: &'static str,
    },
    /// Every line is visible.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    Recording(usize),
    Speaking(usize),
}

/// Snapshot pushed to the UI after every step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VoiceProgress {
    pub visible: usize,
    pub total: usize,
    pub recording: bool,
    pub speaking: bool,
    /// Line currently being spoken, for the speaker icon.
    pub speaking_index: Option<usize>,
}

/// Playback state for one visit to the voice screen.
#[derive(Debug, Clone)]
pub struct VoiceSession {
    language: Language,
    lines: Vec<ScriptLine>,
    visible: usize,
    pending: Pending,
    record_delay_ms: u64,
}

impl VoiceSession {
    pub fn new(language: Language, record_delay_ms: u64) -> Self {
        VoiceSession {
            language,
            lines: script(language),
            visible: 0,
            pending: Pending::Idle,
            record_delay_ms,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Lines shown so far.
    pub fn visible_lines(&self) -> &[ScriptLine] {
        &self.lines[..self.visible]
    }

    pub fn is_finished(&self) -> bool {
        self.visible >= self.lines.len()
    }

    pub fn is_busy(&self) -> bool {
        self.pending != Pending::Idle
    }

    /// Starts the next line and says how to finish it.
    ///
    /// Calling it again before [`complete_current`](Self::complete_current)
    /// returns the same action.
    pub fn next_action(&mut self) -> VoiceAction {
        let Some(line) = self.lines.get(self.visible) else {
            self.pending = Pending::Idle;
            return VoiceAction::Done;
        };

        let index = self.visible;
        match line.sender {
            Sender::User => {
                self.pending = Pending::Recording(index);
                VoiceAction::Record {
                    index,
                    delay_ms: self.record_delay_ms,
                }
            }
            Sender::Bot => {
                self.pending = Pending::Speaking(index);
                VoiceAction::Speak {
                    index,
                    text: line.text.clone(),
                    lang: self.language.speech_tag(),
                }
            }
        }
    }

    /// Marks the in-flight line as finished, making it visible.
    ///
    /// Returns false if nothing was in flight.
    pub fn complete_current(&mut self) -> bool {
        match self.pending {
            Pending::Recording(index) | Pending::Speaking(index) if index == self.visible => {
                self.visible += 1;
                self.pending = Pending::Idle;
                true
            }
            _ => false,
        }
    }

    /// Mic button. Only acts while nothing is visible: the first line is
    /// revealed at once and any in-flight recording is abandoned.
    ///
    /// Returns true if playback state changed.
    pub fn start_from_mic(&mut self) -> bool {
        if self.visible != 0 {
            return false;
        }
        self.visible = 1;
        self.pending = Pending::Idle;
        true
    }

    pub fn progress(&self) -> VoiceProgress {
        VoiceProgress {
            visible: self.visible,
            total: self.lines.len(),
            recording: matches!(self.pending, Pending::Recording(_)),
            speaking: matches!(self.pending, Pending::Speaking(_)),
            speaking_index: match self.pending {
                Pending::Speaking(index) => Some(index),
                _ => None,
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_alternate_starting_with_user() {
        for language in [Language::English, Language::Urdu] {
            let lines = script(language);
            assert_eq!(lines.len(), 6);
            assert_eq!(lines[0].sender, Sender::User);
            assert_eq!(lines[5].sender, Sender::Bot);
        }
        assert_eq!(script(Language::Urdu)[2].text, "جی ہاں");
    }

    #[test]
    fn test_full_playback() {
        let mut session = VoiceSession::new(Language::English, DEFAULT_RECORD_DELAY_MS);
        let mut actions = Vec::new();

        loop {
            let action = session.next_action();
            if action == VoiceAction::Done {
                break;
            }
            actions.push(action);
            assert!(session.complete_current());
        }

        assert_eq!(actions.len(), 6);
        assert_eq!(actions[0], VoiceAction::Record { index: 0, delay_ms: 2000 });
        assert!(matches!(
            &actions[1],
            VoiceAction::Speak { index: 1, lang: "en-US", text } if text.starts_with("Bake Parlor")
        ));
        assert!(session.is_finished());
        assert_eq!(session.visible_lines().len(), 6);
    }

    #[test]
    fn test_line_not_visible_until_completed() {
        let mut session = VoiceSession::new(Language::Urdu, 10);
        session.next_action();
        session.complete_current();

        let action = session.next_action();
        assert!(matches!(action, VoiceAction::Speak { lang: "ur-PK", .. }));
        let progress = session.progress();
        assert_eq!(progress.visible, 1);
        assert!(progress.speaking);
        assert_eq!(progress.speaking_index, Some(1));

        assert!(session.complete_current());
        assert!(!session.complete_current());
        assert_eq!(session.progress().visible, 2);
    }

    #[test]
    fn test_next_action_is_idempotent_while_pending() {
        let mut session = VoiceSession::new(Language::English, 2000);
        assert_eq!(session.next_action(), session.clone().next_action());
        assert!(session.is_busy());
    }

    #[test]
    fn test_mic_only_acts_when_nothing_visible() {
        let mut session = VoiceSession::new(Language::English, 2000);
        session.next_action();
        assert!(session.start_from_mic());
        assert_eq!(session.progress().visible, 1);
        assert!(!session.is_busy());

        assert!(!session.start_from_mic());
        assert!(matches!(session.next_action(), VoiceAction::Speak { index: 1, .. }));
    }
}
