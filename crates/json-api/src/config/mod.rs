//! Server configuration module

use clap::Parser;

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    store::StoreConfig,
};

pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod store;

/// Bodegas JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "bodegas-json", about = "Bodegas JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request metrics and slow request settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Record store settings.
    #[command(flatten)]
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_base_url_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "bodegas-json",
            "--api-base-url",
            "http://localhost:8698/",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.server.base_url(), "http://localhost:8698");
        assert_eq!(config.store.supervisor, "María Gómez");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert!(config.store.seed_file.is_none(), "no seed file by default");

        Ok(())
    }

    #[test]
    fn missing_base_url_is_a_configuration_error() {
        let result = ServerConfig::try_parse_from(["bodegas-json"]);

        // Only meaningful when the environment does not provide a fallback.
        if std::env::var_os("API_BASE_URL").is_none() {
            assert!(result.is_err(), "expected missing API_BASE_URL to fail");
        }
    }
}
