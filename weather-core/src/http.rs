use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;

use crate::error::WeatherError;

/// Minimal GET transport used by the fetcher.
#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
    /// Returns the raw response body. Non-success statuses are not errors;
    /// providers report failures in the body.
    async fn get(&self, url: &str, timeout: Duration) -> Result<String, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, timeout: Duration) -> Result<String, WeatherError> {
        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                WeatherError::Timeout { timeout_ms: timeout.as_millis() as u64 }
            } else {
                // The URL carries substituted API keys.
                WeatherError::Transport(e.without_url())
            }
        };

        let res = self.http.get(url).timeout(timeout).send().await.map_err(map_err)?;

        let status = res.status();
        if !status.is_success() {
            tracing::debug!("GET returned status {status}");
        }

        res.text().await.map_err(map_err)
    }
}

