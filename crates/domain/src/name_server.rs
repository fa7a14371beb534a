use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Sentinel selecting the host's default resolver.
pub const INTERNAL_NAME_SERVER: &str = "internal";

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Upstream nameserver the proxy forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameServer {
    /// First nameserver of the host resolver configuration, read at first use.
    System,
    Address(SocketAddr),
}

impl NameServer {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            Self::System => None,
            Self::Address(addr) => Some(*addr),
        }
    }
}

impl FromStr for NameServer {
    type Err = DomainError;

    /// Accepts `internal`, `IP`, `IP:port` and `[IPv6]:port`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(INTERNAL_NAME_SERVER) {
            return Ok(Self::System);
        }
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(Self::Address(addr));
        }
        s.parse::<IpAddr>()
            .map(|ip| Self::Address(SocketAddr::new(ip, DEFAULT_DNS_PORT)))
            .map_err(|_| DomainError::InvalidNameServer(s.to_string()))
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "{}", INTERNAL_NAME_SERVER),
            Self::Address(addr) => write!(f, "{}", addr),
        }
    }
}
