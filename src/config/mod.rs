//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `ARGEN_WORKER__<SECTION>__<KEY>` pattern

use std::net::IpAddr;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Remessa client configuration.
    pub remessa: RemessaConfig,

    /// Observability configuration.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{ARGEN_PROFILE}.toml` (if `ARGEN_PROFILE` is set)
    /// 3. Environment variables with `ARGEN_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Pick up a local .env before reading the environment.
        dotenvy::dotenv().ok();

        let profile = std::env::var("ARGEN_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // ARGEN_WORKER__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("ARGEN_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.remessa.validate()?;

        Ok(())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads (0 = number of CPU cores).
    #[serde(default)]
    pub workers: usize,
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

/// Remessa client configuration: the fields the Correios assign to the
/// contracting client, stamped on every header and detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct RemessaConfig {
    /// Client code, up to 4 digits.
    #[serde(default)]
    pub client_code: u32,

    /// Client name, up to 40 characters in the file.
    #[serde(default = "default_client_name")]
    pub client_name: String,

    /// Client identifier literal, up to 8 characters.
    #[serde(default)]
    pub client_identifier: String,

    /// Short acronym used in the drop filename.
    #[serde(default = "default_client_acronym")]
    pub client_acronym: String,
}

fn default_client_name() -> String {
    "PREFEITURA".to_string()
}

fn default_client_acronym() -> String {
    "SMF".to_string()
}

impl RemessaConfig {
    /// Validate the remessa client settings.
    ///
    /// # Errors
    ///
    /// Returns an error when a field cannot fit its record column range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client_code > 9999 {
            return Err(ConfigError::Message(
                "remessa.client_code cannot exceed 4 digits".to_string(),
            ));
        }
        if self.client_acronym.is_empty() || self.client_acronym.len() > 4 {
            return Err(ConfigError::Message(
                "remessa.client_acronym must be 1-4 characters".to_string(),
            ));
        }
        if self.client_identifier.len() > 8 {
            return Err(ConfigError::Message(
                "remessa.client_identifier cannot exceed 8 characters".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RemessaConfig {
    fn default() -> Self {
        Self {
            client_code: 0,
            client_name: default_client_name(),
            client_identifier: String::new(),
            client_acronym: default_client_acronym(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.remessa.client_acronym, "SMF");
        assert_eq!(config.observability.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_remessa_validation() {
        assert!(RemessaConfig::default().validate().is_ok());

        let config = RemessaConfig {
            client_code: 10_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RemessaConfig {
            client_acronym: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RemessaConfig {
            client_identifier: "TOOLONGID".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
