use crate::parser::{Field, JsonMapping};

use super::{ProviderName, WeatherProvider};

/// Batch request: `/observations` first, then the daily `/forecasts`.
/// Authenticates with client id (`[API_KEY]`) and client secret (`[API_KEY_2]`).
const WEATHER_URL: &str = "https://api.aerisapi.com/batch/[LATITUDE],[LONGITUDE]?client_id=[API_KEY]&client_secret=[API_KEY_2]&requests=/observations,/forecasts%3Ffilter=day%26limit=5";

#[derive(Debug, Clone, Copy, Default)]
pub struct HamweatherProvider;

impl WeatherProvider for HamweatherProvider {
    fn name(&self) -> ProviderName {
        ProviderName::Hamweather
    }

    fn weather_url(&self) -> &str {
        WEATHER_URL
    }
}

pub static MAPPING: JsonMapping = JsonMapping {
    errors: &["/error/description", "/response/responses/0/error/description"],
    response_code: None,
    current: &[
        ("/response/responses/0/response/ob/tempC", Field::Temperature),
        ("/response/responses/0/response/ob/feelslikeC", Field::FeelsLike),
        ("/response/responses/0/response/ob/humidity", Field::Humidity),
        ("/response/responses/0/response/ob/pressureMB", Field::Pressure),
        ("/response/responses/0/response/ob/windKPH", Field::WindSpeed),
        ("/response/responses/0/response/ob/windDirDEG", Field::WindDirection),
        ("/response/responses/0/response/ob/weather", Field::ConditionText),
        ("/response/responses/0/response/ob/weatherPrimaryCoded", Field::ConditionId),
        ("/response/responses/0/response/ob/icon", Field::ConditionIcon),
    ],
    forecast: Some("/response/responses/1/response/0/periods"),
    forecast_fields: &[
        ("/avgTempC", Field::Temperature),
        ("/minTempC", Field::TemperatureMin),
        ("/maxTempC", Field::TemperatureMax),
        ("/humidity", Field::Humidity),
        ("/pressureMB", Field::Pressure),
        ("/windSpeedKPH", Field::WindSpeed),
        ("/windDirDEG", Field::WindDirection),
        ("/weather", Field::ConditionText),
        ("/weatherPrimaryCoded", Field::ConditionId),
        ("/icon", Field::ConditionIcon),
    ],
};
