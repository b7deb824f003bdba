use serde::{Deserialize, Serialize};

use super::admission::AdmissionConfig;
use super::errors::ConfigError;
use super::guard::GuardConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Main configuration structure for PageGate
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Egress guard and fetch configuration
    #[serde(default)]
    pub guard: GuardConfig,

    /// Admission limiter configuration
    #[serde(default)]
    pub admission: AdmissionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pagegate.toml in current directory
    /// 3. /etc/pagegate/config.toml
    /// 4. Default configuration
    ///
    /// A missing file is not an error: the service falls back to defaults.
    /// A present but unreadable or unparsable file is.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("pagegate.toml").exists() {
            Self::from_file("pagegate.toml")?
        } else if std::path::Path::new("/etc/pagegate/config.toml").exists() {
            Self::from_file("/etc/pagegate/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }
        if self.guard.resolver_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }
        if self.guard.cache_max_entries == 0 {
            return Err(ConfigError::Validation(
                "Resolution cache must hold at least one entry".to_string(),
            ));
        }
        if self.guard.fetch_timeout_ms > self.guard.fetch_timeout_max_ms {
            return Err(ConfigError::Validation(format!(
                "Default fetch timeout {}ms exceeds enforced maximum {}ms",
                self.guard.fetch_timeout_ms, self.guard.fetch_timeout_max_ms
            )));
        }
        if self.admission.max_requests == 0 || self.admission.window_ms == 0 {
            return Err(ConfigError::Validation(
                "Admission window must allow at least one request".to_string(),
            ));
        }
        if self.admission.max_identities == 0 {
            return Err(ConfigError::Validation(
                "Admission store must track at least one identity".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
