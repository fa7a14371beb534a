//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Standard DNS transport. Messages are sent as-is (no framing).
//! One call is one attempt: a fresh ephemeral socket, one datagram out, and
//! the first matching datagram back before the deadline.

use ferrous_doh_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Largest DNS message a UDP datagram can carry.
const MAX_UDP_RESPONSE_SIZE: usize = 65_535;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Send `message_bytes` and wait up to `timeout` for the reply carrying
    /// `expected_id`. Datagrams from other sources or with another id are
    /// dropped and do not extend the deadline.
    pub async fn exchange(
        &self,
        message_bytes: &[u8],
        expected_id: u16,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let deadline = Instant::now() + timeout;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.io_error("bind", e))?;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| self.io_error("send", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| DomainError::TransportTimeout {
                        server: self.server_addr.to_string(),
                    })?
                    .map_err(|e| self.io_error("receive", e))?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source, ignoring"
                );
                continue;
            }

            if bytes_received < 2 || recv_buf[..2] != expected_id.to_be_bytes() {
                warn!(
                    server = %self.server_addr,
                    bytes_received = bytes_received,
                    "UDP response with mismatched transaction id, ignoring"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(recv_buf);
        }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> DomainError {
        DomainError::TransportIo {
            server: self.server_addr.to_string(),
            reason: format!("failed to {}: {}", action, e),
        }
    }
}
