//! Template-driven retrieval shared by every provider.
//!
//! A [`WeatherFetcher`] combines a [`WeatherProvider`] (URL templates), a
//! [`WeatherParser`] and an [`HttpClient`]. One call to
//! [`WeatherFetcher::get_weather`] issues the current conditions request and,
//! if the provider has one and nothing failed yet, the forecast request.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Url;

use crate::{
    config::ProviderConfig,
    error::{FetchError, WeatherError},
    http::{HttpClient, ReqwestClient},
    model::{LocationConfig, Weather},
    parser::WeatherParser,
    provider::{ProviderName, WeatherProvider},
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(15_000);

pub const EMPTY_RESPONSE_ERROR: &str = "Error: response is empty!";

#[derive(Debug)]
pub struct WeatherFetcher {
    provider: Box<dyn WeatherProvider>,
    parser: Box<dyn WeatherParser>,
    http: Arc<dyn HttpClient>,
    provider_config: Option<ProviderConfig>,
}

impl WeatherFetcher {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        parser: Box<dyn WeatherParser>,
        provider_config: Option<ProviderConfig>,
    ) -> Self {
        Self { provider, parser, http: Arc::new(ReqwestClient::new()), provider_config }
    }

    /// Replace the transport, e.g. to share one client between fetchers.
    pub fn with_http(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = http;
        self
    }

    pub fn provider_name(&self) -> ProviderName {
        self.provider.name()
    }

    /// Fetch current conditions and, when available, the forecast.
    ///
    /// In-band failures (provider error message, empty response) are reported
    /// through [`Weather::error`]. Transport and parse failures are recorded
    /// there as well and returned as [`FetchError`].
    pub async fn get_weather(&self, location: &LocationConfig) -> Result<Weather, FetchError> {
        let name = self.provider.name();

        let weather = Weather::new(name);
        let url = self.prepare_url(self.provider.weather_url(), location);
        let mut weather = self.execute_request(weather, &url, location).await?;

        if let Some(template) = self.provider.forecast_url().filter(|_| !weather.has_error()) {
            let url = self.prepare_url(template, location);
            weather = self.execute_request(weather, &url, location).await?;
        }

        tracing::debug!("{name}[{}]: {weather:?}", location.location_id);
        for forecast in &weather.forecast {
            tracing::debug!("{name}[{}]: {forecast:?}", location.location_id);
        }

        Ok(weather)
    }

    /// Substitute config values into `template`.
    ///
    /// Tokens without a value are left untouched.
    pub fn prepare_url(&self, template: &str, location: &LocationConfig) -> String {
        let mut url = template.to_string();

        if let Some(provider) = &self.provider_config {
            url = url.replace("[API_KEY]", &provider.api_key);
            if let Some(key2) = &provider.api_key2 {
                url = url.replace("[API_KEY_2]", key2);
            }
        }

        if let Some(latitude) = location.latitude {
            url = url.replace("[LATITUDE]", &latitude.to_string());
        }

        if let Some(longitude) = location.longitude {
            url = url.replace("[LONGITUDE]", &longitude.to_string());
        }

        if let Some(units) = &location.measurement_units {
            url = url.replace("[UNITS]", units);
        }

        url.replace("[LANGUAGE]", &location.language)
    }

    async fn execute_request(
        &self,
        mut weather: Weather,
        url: &str,
        location: &LocationConfig,
    ) -> Result<Weather, FetchError> {
        match self.request_into(&mut weather, url, location).await {
            Ok(()) => Ok(weather),
            Err(source) => {
                tracing::error!("{}: {source}", self.provider.name());
                weather.error = Some(format!("{}: {source}", source.kind()));
                Err(FetchError { weather: Box::new(weather), source })
            }
        }
    }

    async fn request_into(
        &self,
        weather: &mut Weather,
        url: &str,
        location: &LocationConfig,
    ) -> Result<(), WeatherError> {
        let name = self.provider.name();
        let id = &location.location_id;

        tracing::trace!("{name}[{id}]: request : {url}");

        let body = self.http.get(url, REQUEST_TIMEOUT).await?;
        let body = patch_response(name, url, body.trim());

        tracing::trace!("{name}[{id}]: response: {}", body.replace('\n', ""));

        if !body.is_empty() {
            self.parser.parse_into(&body, weather)?;
        }

        if name == ProviderName::OpenWeatherMap && weather.response_code == Some(200) {
            weather.error = None;
        }

        if !weather.has_error() && body.is_empty() {
            weather.error = Some(EMPTY_RESPONSE_ERROR.to_string());
        }

        match &weather.error {
            Some(error) => {
                tracing::error!("{name}[{id}]: Can't retrieve weather data: {error}");
            }
            None => weather.set_last_update(Utc::now()),
        }

        Ok(())
    }
}

/// Weatherbit uses the same `data` key for current and daily forecast
/// responses. Every `data` in a forecast body becomes `forecast`, including
/// occurrences inside other keys and values.
fn patch_response(provider: ProviderName, url: &str, body: &str) -> String {
    if provider == ProviderName::Weatherbit && is_daily_forecast(url) {
        body.replace("data", "forecast")
    } else {
        body.to_string()
    }
}

fn is_daily_forecast(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().contains("forecast/daily"),
        Err(_) => url.contains("forecast/daily"),
    }
}
