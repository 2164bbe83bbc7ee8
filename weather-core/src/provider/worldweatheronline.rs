use crate::parser::{Field, JsonMapping};

use super::{ProviderName, WeatherProvider};

const WEATHER_URL: &str = "https://api.worldweatheronline.com/premium/v1/weather.ashx?key=[API_KEY]&q=[LATITUDE],[LONGITUDE]&num_of_days=5&tp=24&format=json&lang=[LANGUAGE]";

#[derive(Debug, Clone, Copy, Default)]
pub struct WorldWeatherOnlineProvider;

impl WeatherProvider for WorldWeatherOnlineProvider {
    fn name(&self) -> ProviderName {
        ProviderName::WorldWeatherOnline
    }

    fn weather_url(&self) -> &str {
        WEATHER_URL
    }
}

// All numbers are quoted in this API.
pub static MAPPING: JsonMapping = JsonMapping {
    errors: &["/data/error/0/msg"],
    response_code: None,
    current: &[
        ("/data/current_condition/0/temp_C", Field::Temperature),
        ("/data/current_condition/0/FeelsLikeC", Field::FeelsLike),
        ("/data/current_condition/0/humidity", Field::Humidity),
        ("/data/current_condition/0/pressure", Field::Pressure),
        ("/data/current_condition/0/windspeedKmph", Field::WindSpeed),
        ("/data/current_condition/0/winddirDegree", Field::WindDirection),
        ("/data/current_condition/0/weatherDesc/0/value", Field::ConditionText),
        ("/data/current_condition/0/weatherCode", Field::ConditionId),
        ("/data/current_condition/0/weatherIconUrl/0/value", Field::ConditionIcon),
    ],
    forecast: Some("/data/weather"),
    forecast_fields: &[
        ("/avgtempC", Field::Temperature),
        ("/mintempC", Field::TemperatureMin),
        ("/maxtempC", Field::TemperatureMax),
        ("/hourly/0/humidity", Field::Humidity),
        ("/hourly/0/pressure", Field::Pressure),
        ("/hourly/0/windspeedKmph", Field::WindSpeed),
        ("/hourly/0/winddirDegree", Field::WindDirection),
        ("/hourly/0/weatherDesc/0/value", Field::ConditionText),
        ("/hourly/0/weatherCode", Field::ConditionId),
        ("/hourly/0/weatherIconUrl/0/value", Field::ConditionIcon),
    ],
};
