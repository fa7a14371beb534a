use crate::dns::DnsQuery;
use async_trait::async_trait;
use ferrous_doh_domain::DomainError;
use hickory_proto::op::Message;

/// Result of forwarding one query upstream.
#[derive(Debug, Clone)]
pub enum ResolutionOutcome {
    Answered(Message),
    /// Every attempt ran out of time; not an error at the HTTP layer.
    TimedOut,
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Forward `query` to the upstream nameserver.
    ///
    /// This is the only point where a DoH request suspends on the network.
    /// Dropping the returned future abandons the exchange.
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolutionOutcome, DomainError>;
}
