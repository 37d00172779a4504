// src/main.rs
use anyhow::Result;
use tracing::info;

use health_probe::config::Config;
use health_probe::health::{failure_message, HealthChecker};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays a clean report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("health_probe=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve()?;
    info!("Probing {}", config.base_url);

    let checker = HealthChecker::new(&config)?;

    // Every check outcome is reported to stdout; the process exits 0
    // whether the API is healthy, degraded, or unreachable.
    match checker.check().await {
        Ok(report) => println!("{}", report.render()),
        Err(error) => println!("{}", failure_message(&error)),
    }

    Ok(())
}
