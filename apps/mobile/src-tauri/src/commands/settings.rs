//! # Settings Commands
//!
//! Personalization screen: font size, icon size, theme and language.
//! Each change applies app-wide at once; the response carries the root
//! classes the WebView puts on `<html>`.

use krave_core::i18n::{text, TextKey};
use krave_core::settings::SettingsUpdate;
use krave_core::Settings;
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::state::SettingsState;

/// Settings plus the derived presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    #[serde(flatten)]
    pub settings: Settings,
    /// e.g. `["font-medium", "icon-medium", "theme-light"]`
    pub presentation_classes: [String; 3],
    /// Urdu lays out right-to-left.
    pub rtl: bool,
}

impl From<&Settings> for SettingsResponse {
    fn from(settings: &Settings) -> Self {
        SettingsResponse {
            settings: settings.clone(),
            presentation_classes: settings.presentation_classes(),
            rtl: settings.language().is_rtl(),
        }
    }
}

#[tauri::command]
pub fn get_settings(settings: State<'_, SettingsState>) -> SettingsResponse {
    debug!("get_settings command");
    settings.with_settings(|s| SettingsResponse::from(s))
}

/// Applies the fields present in `update`.
///
/// ## Example
/// ```typescript
/// await invoke('update_settings', { update: { theme: 'dark' } });
/// ```
#[tauri::command]
pub fn update_settings(settings: State<'_, SettingsState>, update: SettingsUpdate) -> SettingsResponse {
    debug!(?update, "update_settings command");
    settings.with_settings_mut(|s| {
        s.apply(update);
        SettingsResponse::from(&*s)
    })
}

/// Looks up a translated string in the current language.
#[tauri::command]
pub fn get_text(settings: State<'_, SettingsState>, key: TextKey) -> String {
    text(key, settings.language()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::{Language, Theme};

    #[test]
    fn test_response_shape() {
        let mut settings = Settings::new();
        settings.apply(SettingsUpdate {
            theme: Some(Theme::Colorblind),
            language: Some(Language::Urdu),
            ..Default::default()
        });

        let json = serde_json::to_value(SettingsResponse::from(&settings)).unwrap();
        assert_eq!(json["theme"], "colorblind");
        assert_eq!(json["fontSize"], "medium");
        assert_eq!(json["presentationClasses"][2], "theme-colorblind");
        assert_eq!(json["rtl"], true);
    }
}
