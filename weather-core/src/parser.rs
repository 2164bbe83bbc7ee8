//! Response parsing.
//!
//! The fetcher only knows the [`WeatherParser`] capability. The bundled
//! [`JsonWeatherParser`] maps JSON pointers of a provider response onto
//! [`Weather`] fields, driven by a static [`JsonMapping`] per provider.

use std::fmt::Debug;

use serde_json::Value;

use crate::{
    error::WeatherError,
    model::{Atmosphere, Condition, Forecast, Temperature, Weather, Wind},
};

/// Populates a [`Weather`] in place from a raw response body.
pub trait WeatherParser: Send + Sync + Debug {
    fn parse_into(&self, body: &str, weather: &mut Weather) -> Result<(), WeatherError>;
}

/// Target of a mapped JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Temperature,
    TemperatureMin,
    TemperatureMax,
    FeelsLike,
    Humidity,
    Pressure,
    WindSpeed,
    WindDirection,
    ConditionText,
    ConditionId,
    ConditionIcon,
}

/// JSON pointers (RFC 6901) of one provider's responses.
#[derive(Debug)]
pub struct JsonMapping {
    /// Checked in order; the first non-empty string becomes the in-band error.
    pub errors: &'static [&'static str],
    /// Numeric or numeric-string response code.
    pub response_code: Option<&'static str>,
    pub current: &'static [(&'static str, Field)],
    /// Array of forecast periods, index 0 being today.
    pub forecast: Option<&'static str>,
    /// Pointers relative to one forecast entry.
    pub forecast_fields: &'static [(&'static str, Field)],
}

#[derive(Debug, Clone, Copy)]
pub struct JsonWeatherParser {
    mapping: &'static JsonMapping,
}

impl JsonWeatherParser {
    pub fn new(mapping: &'static JsonMapping) -> Self {
        Self { mapping }
    }
}

impl WeatherParser for JsonWeatherParser {
    fn parse_into(&self, body: &str, weather: &mut Weather) -> Result<(), WeatherError> {
        let root: Value = serde_json::from_str(body)?;

        let code = self.mapping.response_code.and_then(|p| root.pointer(p)).and_then(as_f64);
        if let Some(code) = code {
            weather.response_code = Some(code as i64);
        }

        let error = self
            .mapping
            .errors
            .iter()
            .filter_map(|p| root.pointer(p).and_then(Value::as_str))
            .find(|msg| !msg.is_empty());
        if let Some(msg) = error {
            weather.error = Some(msg.to_owned());
        }

        apply_fields(
            &root,
            self.mapping.current,
            Target {
                temperature: &mut weather.temperature,
                atmosphere: &mut weather.atmosphere,
                wind: &mut weather.wind,
                condition: &mut weather.condition,
            },
        );

        let entries = self.mapping.forecast.and_then(|p| root.pointer(p)).and_then(Value::as_array);
        if let Some(entries) = entries {
            weather.forecast = entries
                .iter()
                .enumerate()
                .map(|(day, entry)| {
                    let mut forecast = Forecast { day: Some(day), ..Forecast::default() };
                    apply_fields(
                        entry,
                        self.mapping.forecast_fields,
                        Target {
                            temperature: &mut forecast.temperature,
                            atmosphere: &mut forecast.atmosphere,
                            wind: &mut forecast.wind,
                            condition: &mut forecast.condition,
                        },
                    );
                    forecast
                })
                .collect();
        }

        Ok(())
    }
}

struct Target<'a> {
    temperature: &'a mut Temperature,
    atmosphere: &'a mut Atmosphere,
    wind: &'a mut Wind,
    condition: &'a mut Condition,
}

fn apply_fields(node: &Value, fields: &[(&str, Field)], target: Target<'_>) {
    for (pointer, field) in fields {
        let Some(value) = node.pointer(pointer) else {
            continue;
        };

        match field {
            Field::Temperature => target.temperature.current = as_f64(value),
            Field::TemperatureMin => target.temperature.min = as_f64(value),
            Field::TemperatureMax => target.temperature.max = as_f64(value),
            Field::FeelsLike => target.temperature.feels_like = as_f64(value),
            Field::Humidity => target.atmosphere.humidity = as_f64(value),
            Field::Pressure => target.atmosphere.pressure = as_f64(value),
            Field::WindSpeed => target.wind.speed = as_f64(value),
            Field::WindDirection => target.wind.direction = as_f64(value),
            Field::ConditionText => target.condition.text = as_text(value),
            Field::ConditionId => target.condition.id = as_text(value),
            Field::ConditionIcon => target.condition.icon = as_text(value),
        }
    }
}

// Several providers quote their numbers.
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
