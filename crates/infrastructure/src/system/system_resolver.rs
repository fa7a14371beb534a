//! Host resolver configuration (`/etc/resolv.conf` on Unix).

use ferrous_doh_domain::DomainError;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::system_conf::{parse_resolv_conf, read_system_conf};
use std::net::SocketAddr;
use tracing::debug;

/// First nameserver of the host configuration. Blocking file I/O.
pub fn default_name_server() -> Result<SocketAddr, DomainError> {
    let (config, _) =
        read_system_conf().map_err(|e| DomainError::SystemResolverConfig(e.to_string()))?;
    pick_first(&config)
}

/// First nameserver declared in resolv.conf-formatted `contents`.
pub fn first_name_server(contents: &str) -> Result<SocketAddr, DomainError> {
    let (config, _) = parse_resolv_conf(contents)
        .map_err(|e| DomainError::SystemResolverConfig(e.to_string()))?;
    pick_first(&config)
}

fn pick_first(config: &ResolverConfig) -> Result<SocketAddr, DomainError> {
    let addr = config
        .name_servers()
        .first()
        .map(|ns| ns.socket_addr)
        .ok_or_else(|| {
            DomainError::SystemResolverConfig("no nameserver configured".to_string())
        })?;

    debug!(nameserver = %addr, "System resolver configuration read");
    Ok(addr)
}
