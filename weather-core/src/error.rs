use thiserror::Error;

use crate::model::Weather;

/// Failures raised while requesting or parsing provider data.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl WeatherError {
    /// Short error kind, used as the prefix of the in-band error text.
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::Timeout { .. } => "Timeout",
            WeatherError::Transport(_) => "Transport",
            WeatherError::Parse(_) => "Parse",
        }
    }
}

/// A failed fetch. Carries the partially populated result, whose `error`
/// field already holds `<kind>: <message>`.
#[derive(Debug, Error)]
#[error("{}: {source}", .weather.provider)]
pub struct FetchError {
    pub weather: Box<Weather>,
    #[source]
    pub source: WeatherError,
}

impl FetchError {
    pub fn into_weather(self) -> Weather {
        *self.weather
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderName;

    #[test]
    fn kind_names_variant() {
        let err = WeatherError::Timeout { timeout_ms: 15_000 };
        assert_eq!(err.kind(), "Timeout");
        assert_eq!(err.to_string(), "request timed out after 15000 ms");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(WeatherError::from(json_err).kind(), "Parse");
    }

    #[test]
    fn fetch_error_display_names_provider() {
        let err = FetchError {
            weather: Box::new(Weather::new(ProviderName::Weatherbit)),
            source: WeatherError::Timeout { timeout_ms: 10 },
        };
        assert_eq!(err.to_string(), "weatherbit: request timed out after 10 ms");
    }
}
