use crate::parser::{Field, JsonMapping};

use super::{ProviderName, WeatherProvider};

const WEATHER_URL: &str = "https://api.weatherbit.io/v2.0/current?key=[API_KEY]&lat=[LATITUDE]&lon=[LONGITUDE]&lang=[LANGUAGE]&units=[UNITS]";
const FORECAST_URL: &str = "https://api.weatherbit.io/v2.0/forecast/daily?key=[API_KEY]&lat=[LATITUDE]&lon=[LONGITUDE]&days=5&lang=[LANGUAGE]&units=[UNITS]";

/// Weatherbit answers both requests with a top-level `data` array. The
/// fetcher renames it to `forecast` in forecast responses before parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherbitProvider;

impl WeatherProvider for WeatherbitProvider {
    fn name(&self) -> ProviderName {
        ProviderName::Weatherbit
    }

    fn weather_url(&self) -> &str {
        WEATHER_URL
    }

    fn forecast_url(&self) -> Option<&str> {
        Some(FORECAST_URL)
    }
}

pub static MAPPING: JsonMapping = JsonMapping {
    errors: &["/error"],
    response_code: None,
    current: &[
        ("/data/0/temp", Field::Temperature),
        ("/data/0/app_temp", Field::FeelsLike),
        ("/data/0/rh", Field::Humidity),
        ("/data/0/pres", Field::Pressure),
        ("/data/0/wind_spd", Field::WindSpeed),
        ("/data/0/wind_dir", Field::WindDirection),
        ("/data/0/weather/description", Field::ConditionText),
        ("/data/0/weather/code", Field::ConditionId),
        ("/data/0/weather/icon", Field::ConditionIcon),
    ],
    forecast: Some("/forecast"),
    forecast_fields: &[
        ("/temp", Field::Temperature),
        ("/min_temp", Field::TemperatureMin),
        ("/max_temp", Field::TemperatureMax),
        ("/rh", Field::Humidity),
        ("/pres", Field::Pressure),
        ("/wind_spd", Field::WindSpeed),
        ("/wind_dir", Field::WindDirection),
        ("/weather/description", Field::ConditionText),
        ("/weather/code", Field::ConditionId),
        ("/weather/icon", Field::ConditionIcon),
    ],
};
