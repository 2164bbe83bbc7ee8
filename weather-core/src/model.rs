use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::provider::ProviderName;

/// Per-location settings used to fill URL templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub location_id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub measurement_units: Option<String>,
    /// Always substituted, even when empty.
    #[serde(default)]
    pub language: String,
    /// Preferred provider for this location; falls back to the default provider.
    pub provider: Option<ProviderName>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: Option<String>,
    pub id: Option<String>,
    pub icon: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub current: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub feels_like: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
    pub direction: Option<f64>,
}

/// One forecast period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Zero-based offset from today.
    pub day: Option<usize>,
    pub temperature: Temperature,
    pub atmosphere: Atmosphere,
    pub wind: Wind,
    pub condition: Condition,
}

/// Result of one fetch against a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub provider: ProviderName,
    pub temperature: Temperature,
    pub atmosphere: Atmosphere,
    pub wind: Wind,
    pub condition: Condition,
    pub forecast: Vec<Forecast>,
    pub error: Option<String>,
    pub response_code: Option<i64>,
}

impl Weather {
    pub fn new(provider: ProviderName) -> Self {
        Self {
            provider,
            temperature: Temperature::default(),
            atmosphere: Atmosphere::default(),
            wind: Wind::default(),
            condition: Condition::default(),
            forecast: Vec::new(),
            error: None,
            response_code: None,
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Stamp `at` onto the current condition and every forecast condition.
    pub fn set_last_update(&mut self, at: DateTime<Utc>) {
        self.condition.last_update = Some(at);
        for forecast in &mut self.forecast {
            forecast.condition.last_update = Some(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_weather_has_no_error() {
        let weather = Weather::new(ProviderName::OpenWeatherMap);
        assert!(!weather.has_error());
        assert!(weather.forecast.is_empty());
        assert_eq!(weather.response_code, None);
    }

    #[test]
    fn set_last_update_stamps_every_condition() {
        let mut weather = Weather::new(ProviderName::Weatherbit);
        weather.forecast = vec![Forecast::default(), Forecast::default()];

        let now = Utc::now();
        weather.set_last_update(now);

        assert_eq!(weather.condition.last_update, Some(now));
        assert!(weather.forecast.iter().all(|f| f.condition.last_update == Some(now)));
    }

    #[test]
    fn location_language_defaults_to_empty() {
        let location: LocationConfig = toml::from_str(
            r#"
            location_id = "home"
            latitude = 52.52
            "#,
        )
        .expect("valid location");

        assert_eq!(location.language, "");
        assert_eq!(location.longitude, None);
        assert_eq!(location.provider, None);
    }
}
