use crate::dns::{DnsAnswer, DnsQuery};
use crate::ports::{DnsResolver, ResolutionOutcome};
use ferrous_doh_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ResolveDohQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDohQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve `query` upstream; a timeout becomes a SERVFAIL answer.
    pub async fn execute(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        match self.resolver.resolve(query).await? {
            ResolutionOutcome::Answered(message) => {
                let answer = DnsAnswer::from_message(message);
                match answer.answers().first() {
                    Some(first) => debug!(
                        domain = %query.name(),
                        record_type = %query.record_type(),
                        rcode = %answer.response_code(),
                        answers = answer.answers().len(),
                        first = %first,
                        "[DNS] Upstream answered"
                    ),
                    None => debug!(
                        domain = %query.name(),
                        record_type = %query.record_type(),
                        rcode = %answer.response_code(),
                        "[DNS] Upstream answered without records"
                    ),
                }
                Ok(answer)
            }
            ResolutionOutcome::TimedOut => {
                warn!(
                    domain = %query.name(),
                    record_type = %query.record_type(),
                    "[DNS] Upstream timed out, answering SERVFAIL"
                );
                Ok(DnsAnswer::server_failure(query))
            }
        }
    }
}
