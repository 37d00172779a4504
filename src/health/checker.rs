// src/health/checker.rs
use crate::config::Config;
use crate::health::report::{CheckReport, HealthResponse};
use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum HealthCheckError {
    #[error("HTTP error status {0}")]
    HttpStatus(StatusCode),

    #[error("{0}")]
    Connection(reqwest::Error),

    #[error("Malformed health response: {0}")]
    MalformedResponse(String),
}

pub struct HealthChecker {
    client: Client,
    url: url::Url,
}

impl HealthChecker {
    pub fn new(config: &Config) -> Result<Self> {
        // Default client settings: no explicit timeout, no custom headers.
        let client = Client::new();
        let url = config.health_url()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Perform one GET against the health endpoint and classify the outcome.
    pub async fn check(&self) -> Result<CheckReport, HealthCheckError> {
        let start = std::time::Instant::now();
        debug!("Checking health endpoint: {}", self.url);

        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(HealthCheckError::Connection)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            warn!("Health endpoint returned error status {}", status);
            return Err(HealthCheckError::HttpStatus(status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| HealthCheckError::MalformedResponse(e.to_string()))?;

        let health: HealthResponse = serde_json::from_value(body.clone())
            .map_err(|e| HealthCheckError::MalformedResponse(e.to_string()))?;

        let response_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Health check complete: status {:?} in {}ms",
            health.status, response_time_ms
        );

        Ok(CheckReport {
            url: self.url.clone(),
            body,
            health,
            response_time_ms,
        })
    }
}
