//! Core library for the `wxfetch` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Weather providers as URL templates with placeholder tokens
//! - The fetcher that fills templates, requests, patches and parses responses
//! - Shared domain models (locations, weather, forecasts)
//!
//! It is used by `wxfetch-cli`, but can also be embedded by a polling host.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod model;
pub mod parser;
pub mod provider;

pub use config::{Config, ProviderConfig};
pub use error::{FetchError, WeatherError};
pub use fetcher::WeatherFetcher;
pub use http::{HttpClient, ReqwestClient};
pub use model::{Condition, Forecast, LocationConfig, Weather};
pub use parser::{JsonWeatherParser, WeatherParser};
pub use provider::{ProviderName, WeatherProvider};
