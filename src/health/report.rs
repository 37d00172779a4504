// src/health/report.rs
use crate::health::checker::HealthCheckError;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Status value a service reports when it is fully operational.
pub const STATUS_OK: &str = "ok";

/// Typed view of the health endpoint's JSON body. Only `status` is
/// interpreted; everything else survives in the raw body.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub url: Url,
    pub body: Value,
    pub health: HealthResponse,
    pub response_time_ms: u64,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.health.status == STATUS_OK
    }

    /// Human-readable report: header, pretty-printed body, verdict.
    pub fn render(&self) -> String {
        let pretty = serde_json::to_string_pretty(&self.body)
            .unwrap_or_else(|_| self.body.to_string());

        let verdict = if self.is_ok() {
            "API is healthy and operational!"
        } else {
            "API reported an error status. Please check the response for details."
        };

        format!("API Health Check Response:\n{}\n\n{}", pretty, verdict)
    }
}

/// One-line message for any failed check, matching the report surface.
pub fn failure_message(error: &HealthCheckError) -> String {
    format!("Error connecting to the API: {}", error)
}
