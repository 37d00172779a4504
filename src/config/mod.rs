// src/config/mod.rs
use anyhow::{Context, Result};
use url::Url;

/// Base URL probed when neither a CLI argument nor the environment
/// variable supplies one.
pub const DEFAULT_BASE_URL: &str = "https://v0-proa-lab.vercel.app";

/// Environment variable consulted when no CLI argument is given.
pub const BASE_URL_ENV: &str = "HEALTH_PROBE_BASE_URL";

/// Well-known path every probed service is expected to expose.
pub const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
}

impl Config {
    /// Resolve the base URL from the first CLI argument, then the
    /// environment, then the built-in default.
    pub fn resolve() -> Result<Self> {
        let raw = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::with_base_url(&raw)
    }

    pub fn with_base_url(raw: &str) -> Result<Self> {
        let base_url = Url::parse(raw)
            .with_context(|| format!("Invalid base URL: {}", raw))?;

        let config = Self { base_url };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("Unsupported URL scheme: {}", other),
        }
    }

    /// Full URL of the health endpoint for this base URL.
    pub fn health_url(&self) -> Result<Url> {
        self.base_url
            .join(HEALTH_PATH)
            .context("Failed to construct health endpoint URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_health_path_onto_base() {
        let config = Config::with_base_url("https://example.com").unwrap();
        assert_eq!(
            config.health_url().unwrap().as_str(),
            "https://example.com/api/health"
        );
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let config = Config::with_base_url("https://example.com/").unwrap();
        assert_eq!(
            config.health_url().unwrap().as_str(),
            "https://example.com/api/health"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(Config::with_base_url("not a url").is_err());
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(Config::with_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn default_base_url_is_valid() {
        let config = Config::with_base_url(DEFAULT_BASE_URL).unwrap();
        assert!(config.health_url().is_ok());
    }
}
