// src/health/mod.rs
mod checker;
mod report;

pub use checker::{HealthCheckError, HealthChecker};
pub use report::{failure_message, CheckReport, HealthResponse, STATUS_OK};
