use crate::parser::{Field, JsonMapping};

use super::{ProviderName, WeatherProvider};

const WEATHER_URL: &str = "https://api.darksky.net/forecast/[API_KEY]/[LATITUDE],[LONGITUDE]?units=[UNITS]&lang=[LANGUAGE]&exclude=minutely,hourly,alerts,flags";

#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastIoProvider;

impl WeatherProvider for ForecastIoProvider {
    fn name(&self) -> ProviderName {
        ProviderName::ForecastIo
    }

    fn weather_url(&self) -> &str {
        WEATHER_URL
    }
}

pub static MAPPING: JsonMapping = JsonMapping {
    errors: &["/error"],
    response_code: Some("/code"),
    current: &[
        ("/currently/temperature", Field::Temperature),
        ("/currently/apparentTemperature", Field::FeelsLike),
        ("/currently/humidity", Field::Humidity),
        ("/currently/pressure", Field::Pressure),
        ("/currently/windSpeed", Field::WindSpeed),
        ("/currently/windBearing", Field::WindDirection),
        ("/currently/summary", Field::ConditionText),
        ("/currently/icon", Field::ConditionIcon),
    ],
    forecast: Some("/daily/data"),
    forecast_fields: &[
        ("/temperatureMin", Field::TemperatureMin),
        ("/temperatureMax", Field::TemperatureMax),
        ("/humidity", Field::Humidity),
        ("/pressure", Field::Pressure),
        ("/windSpeed", Field::WindSpeed),
        ("/windBearing", Field::WindDirection),
        ("/summary", Field::ConditionText),
        ("/icon", Field::ConditionIcon),
    ],
};
