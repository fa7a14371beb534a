use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-doh.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-doh/config.toml";

/// Main configuration structure for Ferrous DoH
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (address, port, TLS material)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream DNS resolver
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. /etc/ferrous-doh/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
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
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(cert) = overrides.cert_path {
            self.server.tls.cert_path = cert;
        }
        if let Some(key) = overrides.key_path {
            self.server.tls.key_path = key;
        }
        if overrides.disable_tls {
            self.server.tls.enabled = false;
        }
        if let Some(name_server) = overrides.name_server {
            self.upstream.name_server = name_server;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        self.upstream
            .name_server()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        let tls = &self.server.tls;
        if tls.enabled && (tls.cert_path.is_empty() || tls.key_path.is_empty()) {
            return Err(ConfigError::Validation(
                "TLS is enabled but certificate or key path is empty".to_string(),
            ));
        }

        Ok(())
    }

    /// `host:port` the HTTP listener binds to.
    pub fn listen_address(&self) -> String {
        if self.server.bind_address.contains(':') {
            format!("[{}]:{}", self.server.bind_address, self.server.port)
        } else {
            format!("{}:{}", self.server.bind_address, self.server.port)
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
    pub disable_tls: bool,
    pub name_server: Option<String>,
    pub log_level: Option<String>,
}
