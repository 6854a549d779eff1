//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`krave.toml` in the platform config dir, or `KRAVE_CONFIG`)
//! 3. Environment variables (`KRAVE_*`)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use krave_core::checkout::PricingPolicy;
use krave_core::voice::DEFAULT_RECORD_DELAY_MS;
use krave_core::{Language, Money};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Session-script project id used when nothing else is configured.
pub const DEFAULT_ANALYTICS_PROJECT_ID: &str = "uekagqavsa";

/// Longest accepted recording delay for the voice demo.
const MAX_RECORD_DELAY_MS: u64 = 60_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the header and window title
    pub store_name: String,

    /// Language the settings store starts with
    pub default_language: Language,

    /// Delivery fee, platform charges and free-delivery threshold
    pub pricing: PricingPolicy,

    /// How long a user line "records" in the voice demo
    pub voice_record_delay_ms: u64,

    /// Project id the WebView injects its session-recording script with
    pub analytics_project_id: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Krave Mart".to_string(),
            default_language: Language::English,
            pricing: PricingPolicy::default(),
            voice_record_delay_ms: DEFAULT_RECORD_DELAY_MS,
            analytics_project_id: DEFAULT_ANALYTICS_PROJECT_ID.to_string(),
        }
    }
}

/// On-disk shape of `krave.toml`. Every key is optional.
///
/// ```toml
/// store_name = "Krave Mart Gulberg"
/// default_language = "urdu"
/// delivery_fee = 150
/// platform_charges = 9
/// free_delivery_threshold = 1500
/// voice_record_delay_ms = 1500
/// analytics_project_id = "uekagqavsa"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    store_name: Option<String>,
    default_language: Option<Language>,
    delivery_fee: Option<i64>,
    platform_charges: Option<i64>,
    free_delivery_threshold: Option<i64>,
    voice_record_delay_ms: Option<u64>,
    analytics_project_id: Option<String>,
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = ConfigState::default();

        let path = config_path
            .or_else(|| std::env::var("KRAVE_CONFIG").ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                config.apply_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            ConfigState::default()
        })
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply_toml(&contents)
    }

    fn apply_toml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;

        if let Some(name) = file.store_name {
            self.store_name = name;
        }
        if let Some(language) = file.default_language {
            self.default_language = language;
        }
        if let Some(fee) = file.delivery_fee {
            self.pricing.delivery_fee = Money::from_rupees(fee);
        }
        if let Some(charges) = file.platform_charges {
            self.pricing.platform_charges = Money::from_rupees(charges);
        }
        if let Some(threshold) = file.free_delivery_threshold {
            self.pricing.free_delivery_threshold = Money::from_rupees(threshold);
        }
        if let Some(delay) = file.voice_record_delay_ms {
            self.voice_record_delay_ms = delay;
        }
        if let Some(id) = file.analytics_project_id {
            self.analytics_project_id = id;
        }
        Ok(())
    }

    /// Applies `KRAVE_*` overrides. Unparseable numbers are ignored with a warning.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(name) = var("KRAVE_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(fee) = parse_var::<i64>(&var, "KRAVE_DELIVERY_FEE") {
            debug!(fee, "Overriding delivery fee from environment");
            self.pricing.delivery_fee = Money::from_rupees(fee);
        }

        if let Some(charges) = parse_var::<i64>(&var, "KRAVE_PLATFORM_CHARGES") {
            self.pricing.platform_charges = Money::from_rupees(charges);
        }

        if let Some(threshold) = parse_var::<i64>(&var, "KRAVE_FREE_DELIVERY_THRESHOLD") {
            self.pricing.free_delivery_threshold = Money::from_rupees(threshold);
        }

        if let Some(delay) = parse_var::<u64>(&var, "KRAVE_VOICE_RECORD_DELAY_MS") {
            debug!(delay, "Overriding voice record delay from environment");
            self.voice_record_delay_ms = delay;
        }

        if let Some(id) = var("KRAVE_ANALYTICS_ID") {
            self.analytics_project_id = id;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        let pricing = &self.pricing;
        for (name, amount) in [
            ("delivery_fee", pricing.delivery_fee),
            ("platform_charges", pricing.platform_charges),
            ("free_delivery_threshold", pricing.free_delivery_threshold),
        ] {
            if amount.rupees() < 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must not be negative, got {}",
                    name,
                    amount.rupees()
                )));
            }
        }

        if self.voice_record_delay_ms > MAX_RECORD_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "voice_record_delay_ms must be at most {}, got {}",
                MAX_RECORD_DELAY_MS, self.voice_record_delay_ms
            )));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kravemart", "app")
            .map(|dirs| dirs.config_dir().join("krave.toml"))
    }
}

fn parse_var<T: std::str::FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = var(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ConfigState::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pricing.delivery_fee, Money::from_rupees(120));
        assert_eq!(config.voice_record_delay_ms, 2000);
        assert_eq!(config.analytics_project_id, "uekagqavsa");
    }

    #[test]
    fn test_wire_shape_only_carries_configurable_fields() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            [
                "analyticsProjectId",
                "defaultLanguage",
                "pricing",
                "storeName",
                "voiceRecordDelayMs"
            ]
        );
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let mut config = ConfigState::default();
        config
            .apply_toml(
                r#"
                store_name = "Krave Mart Gulberg"
                default_language = "urdu"
                free_delivery_threshold = 1500
                "#,
            )
            .unwrap();

        assert_eq!(config.store_name, "Krave Mart Gulberg");
        assert_eq!(config.default_language, Language::Urdu);
        assert_eq!(config.pricing.free_delivery_threshold, Money::from_rupees(1500));
        assert_eq!(config.pricing.platform_charges, Money::from_rupees(9));
    }

    #[test]
    fn test_unknown_toml_key_is_rejected() {
        let mut config = ConfigState::default();
        let err = config.apply_toml("tax_rate = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ConfigState::default();
        config.apply_toml("delivery_fee = 150").unwrap();
        config.apply_overrides(vars(&[
            ("KRAVE_DELIVERY_FEE", "99"),
            ("KRAVE_VOICE_RECORD_DELAY_MS", "500"),
            ("KRAVE_ANALYTICS_ID", "abc123"),
        ]));

        assert_eq!(config.pricing.delivery_fee, Money::from_rupees(99));
        assert_eq!(config.voice_record_delay_ms, 500);
        assert_eq!(config.analytics_project_id, "abc123");
    }

    #[test]
    fn test_bad_env_number_is_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(vars(&[("KRAVE_PLATFORM_CHARGES", "nine")]));
        assert_eq!(config.pricing.platform_charges, Money::from_rupees(9));
    }

    #[test]
    fn test_validation() {
        let mut config = ConfigState::default();
        config.pricing.delivery_fee = Money::from_rupees(-1);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ConfigState::default();
        config.voice_record_delay_ms = 120_000;
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.store_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ConfigState::load_or_default(Some(PathBuf::from(
            "/nonexistent/krave-mart/krave.toml",
        )));
        assert_eq!(config.store_name, ConfigState::default().store_name);
    }
}
