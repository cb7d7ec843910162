use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::auth::AuthConfig;
use super::database::DatabaseConfig;
use super::dnsbl::DnsblConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::dnsbl::validate_zone;

const LOCAL_CONFIG_PATH: &str = "ferrous-dnsbl.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-dnsbl/config.toml";

/// Main configuration structure for Ferrous DNSBL
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Blocklist zone and resolver settings
    #[serde(default)]
    pub dnsbl: DnsblConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dnsbl.toml in current directory
    /// 3. /etc/ferrous-dnsbl/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(zone) = overrides.zone {
            self.dnsbl.zone = zone;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        validate_zone(&self.dnsbl.zone).map_err(ConfigError::Validation)?;

        if self.dnsbl.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be at least 1 second".to_string(),
            ));
        }

        for ns in &self.dnsbl.nameservers {
            ns.parse::<IpAddr>().map_err(|_| {
                ConfigError::Validation(format!("Invalid nameserver address: {}", ns))
            })?;
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database max_connections cannot be 0".to_string(),
            ));
        }

        for (user, password) in &self.auth.credentials {
            if user.is_empty() || password.is_empty() {
                return Err(ConfigError::Validation(
                    "Credentials cannot have an empty username or password".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }

    pub fn database_url(&self) -> String {
        format!("sqlite:{}", self.database.path)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub zone: Option<String>,
    pub log_level: Option<String>,
}
