use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub tls: TlsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            tls: TlsConfig::default(),
        }
    }
}

/// Certificate material for the HTTPS listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Plain HTTP is only meant for running behind a TLS-terminating proxy.
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_cert_path")]
    pub cert_path: String,

    #[serde(default = "default_key_path")]
    pub key_path: String,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cert_path: default_cert_path(),
            key_path: default_key_path(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    443
}

fn default_true() -> bool {
    true
}

fn default_cert_path() -> String {
    "cert.pem".to_string()
}

fn default_key_path() -> String {
    "key.pem".to_string()
}
