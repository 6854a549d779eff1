//! # Settings Store
//!
//! Display preferences and the user profile. A plain key/value store: no
//! setter validates its input, callers filter text before handing it over.
//!
//! ## Presentation Classes
//! ```text
//! fontSize = large   ──► "font-large"
//! iconSize = small   ──► "icon-small"      applied to the WebView root
//! theme    = dark    ──► "theme-dark"
//! ```
//! Exactly one class per category is active at a time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{FontSize, IconSize, Language, Theme, UserProfile};

/// The settings state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, rename = "SettingsState")]
pub struct Settings {
    font_size: FontSize,
    icon_size: IconSize,
    theme: Theme,
    language: Language,
    user_profile: UserProfile,
}

/// A partial update from the personalization screen. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub font_size: Option<FontSize>,
    #[serde(default)]
    pub icon_size: Option<IconSize>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub language: Option<Language>,
}

impl Settings {
    /// Defaults: medium font, medium icons, light theme, English, empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: FontSize) {
        self.font_size = font_size;
    }

    pub fn icon_size(&self) -> IconSize {
        self.icon_size
    }

    pub fn set_icon_size(&mut self, icon_size: IconSize) {
        self.icon_size = icon_size;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn user_profile(&self) -> &UserProfile {
        &self.user_profile
    }

    /// Replaces the whole profile.
    pub fn set_user_profile(&mut self, profile: UserProfile) {
        self.user_profile = profile;
    }

    /// Applies every field present in `update`.
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(font_size) = update.font_size {
            self.font_size = font_size;
        }
        if let Some(icon_size) = update.icon_size {
            self.icon_size = icon_size;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
    }

    /// Root classes for the current preferences: font, icon, theme.
    pub fn presentation_classes(&self) -> [String; 3] {
        [
            format!("font-{}", self.font_size.as_str()),
            format!("icon-{}", self.icon_size.as_str()),
            format!("theme-{}", self.theme.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.font_size(), FontSize::Medium);
        assert_eq!(settings.icon_size(), IconSize::Medium);
        assert_eq!(settings.theme(), Theme::Light);
        assert_eq!(settings.language(), Language::English);
        assert!(settings.user_profile().is_empty());
        assert_eq!(
            settings.presentation_classes(),
            ["font-medium", "icon-medium", "theme-light"].map(String::from)
        );
    }

    #[test]
    fn test_setters_replace_values() {
        let mut settings = Settings::new();
        settings.set_font_size(FontSize::Large);
        settings.set_icon_size(IconSize::Small);
        settings.set_theme(Theme::Colorblind);
        settings.set_language(Language::Urdu);
        settings.set_user_profile(UserProfile::new("Ali", "ali@example.com", "03001234567"));

        assert_eq!(
            settings.presentation_classes(),
            ["font-large", "icon-small", "theme-colorblind"].map(String::from)
        );
        assert_eq!(settings.language(), Language::Urdu);
        assert_eq!(settings.user_profile().name, "Ali");
    }

    #[test]
    fn test_partial_update() {
        let mut settings = Settings::new();
        settings.apply(SettingsUpdate {
            theme: Some(Theme::Dark),
            ..Default::default()
        });
        assert_eq!(settings.theme(), Theme::Dark);
        assert_eq!(settings.font_size(), FontSize::Medium);

        let update: SettingsUpdate = serde_json::from_str(r#"{"language":"urdu"}"#).unwrap();
        settings.apply(update);
        assert_eq!(settings.language(), Language::Urdu);
        assert_eq!(settings.theme(), Theme::Dark);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(Settings::new()).unwrap();
        assert_eq!(json["fontSize"], "medium");
        assert_eq!(json["theme"], "light");
        assert_eq!(json["userProfile"]["phone"], "");
    }
}
