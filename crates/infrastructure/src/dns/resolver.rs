//! Upstream resolution over UDP with a fixed retry budget.

use super::transport::UdpTransport;
use crate::system::default_name_server;
use async_trait::async_trait;
use ferrous_doh_application::dns::DnsQuery;
use ferrous_doh_application::ports::{DnsResolver, ResolutionOutcome};
use ferrous_doh_domain::{DomainError, NameServer};
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Attempts per query before giving up with [`ResolutionOutcome::TimedOut`].
pub const MAX_ATTEMPTS: u32 = 4;

/// Fixed wait per attempt; there is no backoff between attempts.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_millis(400);

/// Forwards DoH queries to one upstream nameserver over UDP.
///
/// The upstream address is resolved at most once and then shared read-only;
/// every `resolve` call owns its retry loop and sockets.
pub struct UdpDnsResolver {
    name_server: NameServer,
    upstream: OnceCell<SocketAddr>,
}

impl UdpDnsResolver {
    pub fn new(name_server: NameServer) -> Self {
        Self {
            name_server,
            upstream: OnceCell::new_with(name_server.socket_addr()),
        }
    }

    pub fn name_server(&self) -> NameServer {
        self.name_server
    }

    /// Upstream address, reading the host configuration on first use when
    /// configured as `internal`.
    pub async fn upstream_addr(&self) -> Result<SocketAddr, DomainError> {
        self.upstream
            .get_or_try_init(|| async {
                let addr = tokio::task::spawn_blocking(default_name_server)
                    .await
                    .map_err(|e| DomainError::Internal(format!("resolver config task: {}", e)))??;
                info!(upstream = %addr, "Using system default nameserver");
                Ok(addr)
            })
            .await
            .copied()
    }
}

#[async_trait]
impl DnsResolver for UdpDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolutionOutcome, DomainError> {
        let upstream = self.upstream_addr().await?;
        let transport = UdpTransport::new(upstream);
        let query_bytes = query.to_wire()?;

        for attempt in 1..=MAX_ATTEMPTS {
            match transport
                .exchange(&query_bytes, query.id(), ATTEMPT_TIMEOUT)
                .await
            {
                Ok(reply) => {
                    let message = Message::from_vec(&reply).map_err(|e| {
                        DomainError::InvalidDnsMessage(format!(
                            "Unparsable reply from {}: {}",
                            upstream, e
                        ))
                    })?;
                    debug!(
                        upstream = %upstream,
                        attempt = attempt,
                        rcode = %message.response_code(),
                        "Upstream exchange completed"
                    );
                    return Ok(ResolutionOutcome::Answered(message));
                }
                Err(DomainError::TransportTimeout { .. }) => {
                    debug!(
                        upstream = %upstream,
                        attempt = attempt,
                        max_attempts = MAX_ATTEMPTS,
                        "Upstream attempt timed out"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            upstream = %upstream,
            domain = %query.name(),
            attempts = MAX_ATTEMPTS,
            "[DNS] Timeout on upstream"
        );
        Ok(ResolutionOutcome::TimedOut)
    }
}
