use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid base64url payload: {0}")]
    InvalidBase64(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("No DNS query in request: {0}")]
    MissingQuery(String),

    #[error("Unsupported content negotiation: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport I/O error with {server}: {reason}")]
    TransportIo { server: String, reason: String },

    #[error("Invalid nameserver address: {0}")]
    InvalidNameServer(String),

    #[error("Cannot read system resolver configuration: {0}")]
    SystemResolverConfig(String),

    #[error("DoH request failed: {0}")]
    HttpTransport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Errors raised while turning an HTTP request into a DNS query.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBase64(_)
                | Self::InvalidDnsMessage(_)
                | Self::MissingQuery(_)
                | Self::UnsupportedFormat(_)
                | Self::UnsupportedMethod(_)
        )
    }
}
