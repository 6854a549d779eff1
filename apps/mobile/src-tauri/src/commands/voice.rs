//! # Voice Commands
//!
//! The voice screen's script and its two inputs. Playback itself runs in the
//! background runner started by entering the screen (see `state::voice`).
//!
//! ```typescript
//! listen('voice://speak', ({ payload }) => {
//!   const u = new SpeechSynthesisUtterance(payload.text);
//!   u.lang = payload.lang;
//!   u.onend = () => invoke('voice_utterance_finished', { index: payload.index });
//!   speechSynthesis.speak(u);
//! });
//! ```

use krave_core::i18n::{text, TextKey};
use krave_core::voice::{script, ScriptLine, VoiceProgress};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::state::{SettingsState, VoiceControl, VoiceState};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceView {
    pub title: String,
    pub lines: Vec<ScriptLine>,
    /// `None` when no runner is active.
    pub progress: Option<VoiceProgress>,
}

#[tauri::command]
pub fn get_voice_script(
    settings: State<'_, SettingsState>,
    voice: State<'_, VoiceState>,
) -> VoiceView {
    debug!("get_voice_script command");
    let language = settings.language();
    VoiceView {
        title: text(TextKey::VoiceTitle, language).to_string(),
        lines: script(language),
        progress: voice.progress(),
    }
}

/// Mic button. Returns false when no runner is active.
#[tauri::command]
pub fn voice_mic_pressed(voice: State<'_, VoiceState>) -> bool {
    debug!("voice_mic_pressed command");
    voice.send(VoiceControl::Mic)
}

/// The WebView finished speaking line `index`.
#[tauri::command]
pub fn voice_utterance_finished(voice: State<'_, VoiceState>, index: usize) -> bool {
    debug!(index, "voice_utterance_finished command");
    voice.send(VoiceControl::UtteranceFinished(index))
}
