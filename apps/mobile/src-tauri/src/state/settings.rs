//! # Settings State
//!
//! Display preferences and the user profile.
//!
//! Written by the personalization screen, signup and profile edit; read by
//! nearly every command (the language picks toast and label text).

use std::sync::{Arc, Mutex, PoisonError};

use krave_core::{Language, Settings};

/// Tauri-managed settings state.
#[derive(Debug)]
pub struct SettingsState {
    settings: Arc<Mutex<Settings>>,
}

impl SettingsState {
    /// Default settings, starting in `language`.
    pub fn new(language: Language) -> Self {
        let mut settings = Settings::new();
        settings.set_language(language);
        SettingsState {
            settings: Arc::new(Mutex::new(settings)),
        }
    }

    pub fn with_settings<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Settings) -> R,
    {
        let settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        f(&settings)
    }

    pub fn with_settings_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Settings) -> R,
    {
        let mut settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut settings)
    }

    /// Shorthand for the current language.
    pub fn language(&self) -> Language {
        self.with_settings(|s| s.language())
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::{Theme, UserProfile};

    #[test]
    fn test_starting_language() {
        let state = SettingsState::new(Language::Urdu);
        assert_eq!(state.language(), Language::Urdu);
        assert_eq!(state.with_settings(|s| s.theme()), Theme::Light);
    }

    #[test]
    fn test_profile_round_trip_through_state() {
        let state = SettingsState::default();
        state.with_settings_mut(|s| {
            s.set_user_profile(UserProfile::new("Sara", "sara@example.com", "03111111111"))
        });
        assert_eq!(state.with_settings(|s| s.user_profile().name.clone()), "Sara");
    }
}
