use crate::parser::{Field, JsonMapping};

use super::{ProviderName, WeatherProvider};

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather?lat=[LATITUDE]&lon=[LONGITUDE]&lang=[LANGUAGE]&mode=json&units=metric&APPID=[API_KEY]";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast/daily?lat=[LATITUDE]&lon=[LONGITUDE]&lang=[LANGUAGE]&mode=json&units=metric&cnt=5&APPID=[API_KEY]";

/// OpenWeatherMap needs a second request for the daily forecast.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenWeatherMapProvider;

impl WeatherProvider for OpenWeatherMapProvider {
    fn name(&self) -> ProviderName {
        ProviderName::OpenWeatherMap
    }

    fn weather_url(&self) -> &str {
        WEATHER_URL
    }

    fn forecast_url(&self) -> Option<&str> {
        Some(FORECAST_URL)
    }
}

// `message` is a float on successful forecast responses, so only string
// messages count as errors.
pub static MAPPING: JsonMapping = JsonMapping {
    errors: &["/message"],
    response_code: Some("/cod"),
    current: &[
        ("/main/temp", Field::Temperature),
        ("/main/temp_min", Field::TemperatureMin),
        ("/main/temp_max", Field::TemperatureMax),
        ("/main/feels_like", Field::FeelsLike),
        ("/main/humidity", Field::Humidity),
        ("/main/pressure", Field::Pressure),
        ("/wind/speed", Field::WindSpeed),
        ("/wind/deg", Field::WindDirection),
        ("/weather/0/description", Field::ConditionText),
        ("/weather/0/id", Field::ConditionId),
        ("/weather/0/icon", Field::ConditionIcon),
    ],
    forecast: Some("/list"),
    forecast_fields: &[
        ("/temp/day", Field::Temperature),
        ("/temp/min", Field::TemperatureMin),
        ("/temp/max", Field::TemperatureMax),
        ("/humidity", Field::Humidity),
        ("/pressure", Field::Pressure),
        ("/speed", Field::WindSpeed),
        ("/deg", Field::WindDirection),
        ("/weather/0/description", Field::ConditionText),
        ("/weather/0/id", Field::ConditionId),
        ("/weather/0/icon", Field::ConditionIcon),
    ],
};
