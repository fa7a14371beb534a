use crate::name_server::INTERNAL_NAME_SERVER;
use crate::{DomainError, NameServer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// `internal` or an `IP[:port]` address.
    #[serde(default = "default_name_server")]
    pub name_server: String,
}

impl UpstreamConfig {
    pub fn name_server(&self) -> Result<NameServer, DomainError> {
        self.name_server.parse()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            name_server: default_name_server(),
        }
    }
}

fn default_name_server() -> String {
    INTERNAL_NAME_SERVER.to_string()
}
