use crate::{
    Config, WeatherFetcher,
    parser::{JsonMapping, JsonWeatherParser},
    provider::{
        forecastio::ForecastIoProvider, hamweather::HamweatherProvider,
        openweathermap::OpenWeatherMapProvider, weatherbit::WeatherbitProvider,
        worldweatheronline::WorldWeatherOnlineProvider,
    },
};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt::Debug};

pub mod forecastio;
pub mod hamweather;
pub mod openweathermap;
pub mod weatherbit;
pub mod worldweatheronline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    OpenWeatherMap,
    Weatherbit,
    ForecastIo,
    WorldWeatherOnline,
    Hamweather,
}

impl ProviderName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::OpenWeatherMap => "openweathermap",
            ProviderName::Weatherbit => "weatherbit",
            ProviderName::ForecastIo => "forecastio",
            ProviderName::WorldWeatherOnline => "worldweatheronline",
            ProviderName::Hamweather => "hamweather",
        }
    }

    pub const fn all() -> &'static [ProviderName] {
        &[
            ProviderName::OpenWeatherMap,
            ProviderName::Weatherbit,
            ProviderName::ForecastIo,
            ProviderName::WorldWeatherOnline,
            ProviderName::Hamweather,
        ]
    }
}

impl std::fmt::Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderName {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        ProviderName::all().iter().copied().find(|id| id.as_str() == lower).ok_or_else(|| {
            let supported: Vec<&str> = ProviderName::all().iter().map(|id| id.as_str()).collect();
            anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: {}.",
                supported.join(", ")
            )
        })
    }
}

/// URL templates of one weather provider.
///
/// Templates may contain `[API_KEY]`, `[API_KEY_2]`, `[LATITUDE]`,
/// `[LONGITUDE]`, `[UNITS]` and `[LANGUAGE]`.
pub trait WeatherProvider: Send + Sync + Debug {
    fn name(&self) -> ProviderName;

    /// Template of the current conditions request.
    fn weather_url(&self) -> &str;

    /// Template of a second, forecast request. Most providers return the
    /// forecast with the current conditions.
    fn forecast_url(&self) -> Option<&str> {
        None
    }
}

pub fn provider_for(id: ProviderName) -> Box<dyn WeatherProvider> {
    match id {
        ProviderName::OpenWeatherMap => Box::new(OpenWeatherMapProvider),
        ProviderName::Weatherbit => Box::new(WeatherbitProvider),
        ProviderName::ForecastIo => Box::new(ForecastIoProvider),
        ProviderName::WorldWeatherOnline => Box::new(WorldWeatherOnlineProvider),
        ProviderName::Hamweather => Box::new(HamweatherProvider),
    }
}

/// Field mapping of the provider's JSON responses.
pub fn mapping_for(id: ProviderName) -> &'static JsonMapping {
    match id {
        ProviderName::OpenWeatherMap => &openweathermap::MAPPING,
        ProviderName::Weatherbit => &weatherbit::MAPPING,
        ProviderName::ForecastIo => &forecastio::MAPPING,
        ProviderName::WorldWeatherOnline => &worldweatheronline::MAPPING,
        ProviderName::Hamweather => &hamweather::MAPPING,
    }
}

/// Construct a fetcher for `id` with its default parser and credentials from config.
///
/// A missing provider entry is not an error: its placeholders stay in the URL
/// and the provider reports the failure in its response.
pub fn fetcher_from_config(id: ProviderName, config: &Config) -> WeatherFetcher {
    if !config.is_provider_configured(id) {
        tracing::warn!("No credentials configured for provider '{id}'");
    }

    WeatherFetcher::new(
        provider_for(id),
        Box::new(JsonWeatherParser::new(mapping_for(id))),
        config.provider_config(id).cloned(),
    )
}

/// Construct the fetcher of the configured `default_provider`.
pub fn default_fetcher_from_config(config: &Config) -> anyhow::Result<WeatherFetcher> {
    let id = config.default_provider_id()?;
    Ok(fetcher_from_config(id, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_name_as_str_roundtrip() {
        for id in ProviderName::all() {
            let s = id.as_str();
            let parsed = ProviderName::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_name_is_case_insensitive() {
        let parsed = ProviderName::try_from("OpenWeatherMap").expect("known provider");
        assert_eq!(parsed, ProviderName::OpenWeatherMap);
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderName::try_from("doesnotexist").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unknown provider"));
        assert!(msg.contains("weatherbit"));
    }

    #[test]
    fn provider_for_reports_matching_name() {
        for id in ProviderName::all() {
            assert_eq!(provider_for(*id).name(), *id);
        }
    }

    #[test]
    fn only_two_request_providers_define_forecast_url() {
        let with_forecast: Vec<ProviderName> = ProviderName::all()
            .iter()
            .copied()
            .filter(|id| provider_for(*id).forecast_url().is_some())
            .collect();

        assert_eq!(with_forecast, vec![ProviderName::OpenWeatherMap, ProviderName::Weatherbit]);
    }

    #[test]
    fn serde_uses_string_ids() {
        let json = serde_json::to_string(&ProviderName::WorldWeatherOnline).unwrap();
        assert_eq!(json, "\"worldweatheronline\"");
    }

    #[test]
    fn default_fetcher_from_config_errors_when_not_set() {
        let cfg = Config::default();
        let err = default_fetcher_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No default provider configured"));
        assert!(msg.contains("Hint: run `wxfetch configure"));
    }

    #[test]
    fn default_fetcher_from_config_works_when_set_and_configured() {
        let mut cfg = Config::default();
        cfg.upsert_provider_keys(ProviderName::Weatherbit, "KEY".to_string(), None);

        let fetcher = default_fetcher_from_config(&cfg).expect("default provider is set");
        assert_eq!(fetcher.provider_name(), ProviderName::Weatherbit);
    }

    #[test]
    fn fetcher_from_config_tolerates_missing_credentials() {
        let cfg = Config::default();
        let fetcher = fetcher_from_config(ProviderName::ForecastIo, &cfg);
        assert_eq!(fetcher.provider_name(), ProviderName::ForecastIo);
    }
}
