use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{model::LocationConfig, provider::ProviderName};

/// Credentials for a single provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    /// Secondary key, e.g. a client secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key2: Option<String>,
}

/// Top-level configuration stored on disk.
///
/// Read-only once loaded; fetchers take a copy of their provider entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default provider id, e.g. "openweathermap" or "weatherbit".
    pub default_provider: Option<String>,

    /// Example TOML:
    /// [providers.openweathermap]
    /// api_key = "..."
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    /// Example TOML:
    /// [[locations]]
    /// location_id = "home"
    /// latitude = 52.52
    /// longitude = 13.41
    /// language = "en"
    #[serde(default)]
    pub locations: Vec<LocationConfig>,
}

impl Config {
    /// Return the default provider as a strongly-typed ProviderName.
    pub fn default_provider_id(&self) -> Result<ProviderName> {
        let s = self.default_provider.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "No default provider configured.\n\
                 Hint: run `wxfetch configure <provider>` (e.g. `wxfetch configure openweathermap`) first."
            )
        })?;

        ProviderName::try_from(s.as_str())
    }

    pub fn provider_config(&self, id: ProviderName) -> Option<&ProviderConfig> {
        self.providers.get(id.as_str())
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderName) {
        self.default_provider = Some(id.as_str().to_string());
    }

    pub fn location(&self, location_id: &str) -> Option<&LocationConfig> {
        self.locations.iter().find(|l| l.location_id == location_id)
    }

    /// Provider for `location`: its own preference, else the default provider.
    pub fn provider_for_location(&self, location: &LocationConfig) -> Result<ProviderName> {
        match location.provider {
            Some(id) => Ok(id),
            None => self.default_provider_id(),
        }
    }

    /// Load config from the platform config directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wxfetch", "wxfetch")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set/replace provider keys and set the default provider if none is set.
    pub fn upsert_provider_keys(
        &mut self,
        provider_id: ProviderName,
        api_key: String,
        api_key2: Option<String>,
    ) {
        self.providers
            .insert(provider_id.as_str().to_string(), ProviderConfig { api_key, api_key2 });

        if self.default_provider.is_none() {
            self.default_provider = Some(provider_id.to_string());
        }
    }

    pub fn is_provider_configured(&self, provider_id: ProviderName) -> bool {
        self.provider_config(provider_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderName;

    #[test]
    fn default_provider_id_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.default_provider_id().unwrap_err();

        assert!(err.to_string().contains("No default provider configured"));
    }

    #[test]
    fn set_api_key_and_default_for_provider() {
        let mut cfg = Config::default();

        cfg.upsert_provider_keys(ProviderName::OpenWeatherMap, "OPEN_KEY".into(), None);

        let default = cfg.default_provider_id().expect("default provider must exist");
        assert_eq!(default, ProviderName::OpenWeatherMap);

        let provider = cfg.provider_config(ProviderName::OpenWeatherMap).expect("configured");
        assert_eq!(provider.api_key, "OPEN_KEY");
        assert_eq!(provider.api_key2, None);
        assert!(cfg.is_provider_configured(ProviderName::OpenWeatherMap));
    }

    #[test]
    fn upsert_does_not_override_existing_default() {
        let mut cfg = Config::default();

        cfg.upsert_provider_keys(ProviderName::OpenWeatherMap, "OPEN_KEY".into(), None);
        cfg.upsert_provider_keys(
            ProviderName::Hamweather,
            "CLIENT_ID".into(),
            Some("CLIENT_SECRET".into()),
        );

        let default = cfg.default_provider_id().expect("default provider must exist");

        assert_eq!(default, ProviderName::OpenWeatherMap);
        assert!(cfg.is_provider_configured(ProviderName::Hamweather));
        assert!(!cfg.is_provider_configured(ProviderName::Weatherbit));
    }

    #[test]
    fn set_default_provider_overrides_default() {
        let mut cfg = Config::default();

        cfg.upsert_provider_keys(ProviderName::OpenWeatherMap, "OPEN_KEY".into(), None);
        cfg.set_default_provider(ProviderName::Weatherbit);

        let default = cfg.default_provider_id().expect("default provider must exist");
        assert_eq!(default, ProviderName::Weatherbit);
    }

    #[test]
    fn parses_providers_and_locations() {
        let cfg: Config = toml::from_str(
            r#"
            default_provider = "openweathermap"

            [providers.hamweather]
            api_key = "ID"
            api_key2 = "SECRET"

            [[locations]]
            location_id = "home"
            latitude = 52.52
            longitude = 13.41
            measurement_units = "M"
            language = "de"
            provider = "weatherbit"

            [[locations]]
            location_id = "cabin"
            "#,
        )
        .expect("valid config");

        let ham = cfg.provider_config(ProviderName::Hamweather).expect("configured");
        assert_eq!(ham.api_key2.as_deref(), Some("SECRET"));

        let home = cfg.location("home").expect("home exists");
        assert_eq!(home.latitude, Some(52.52));
        assert_eq!(cfg.provider_for_location(home).unwrap(), ProviderName::Weatherbit);

        let cabin = cfg.location("cabin").expect("cabin exists");
        assert_eq!(cfg.provider_for_location(cabin).unwrap(), ProviderName::OpenWeatherMap);
        assert!(cfg.location("office").is_none());
    }

    #[test]
    fn save_and_load_roundtrip_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.upsert_provider_keys(ProviderName::Weatherbit, "KEY".into(), None);
        cfg.locations.push(LocationConfig {
            location_id: "home".into(),
            latitude: Some(1.5),
            language: "en".into(),
            ..LocationConfig::default()
        });
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded.default_provider.as_deref(), Some("weatherbit"));
        assert_eq!(loaded.locations, cfg.locations);
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.toml")).expect("load");
        assert!(cfg.providers.is_empty());
        assert!(cfg.default_provider.is_none());
    }
}
