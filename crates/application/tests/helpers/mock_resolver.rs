#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_doh_application::dns::DnsQuery;
use ferrous_doh_application::ports::{DnsResolver, ResolutionOutcome};
use ferrous_doh_domain::DomainError;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub enum MockOutcome {
    Records(Vec<Record>),
    NxDomain,
    TimedOut,
    Fail(DomainError),
}

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    outcomes: Arc<RwLock<HashMap<String, MockOutcome>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_outcome(&self, domain: &str, outcome: MockOutcome) {
        self.outcomes
            .write()
            .await
            .insert(domain.to_string(), outcome);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn reply(query: &DnsQuery, code: ResponseCode, answers: Vec<Record>) -> Message {
        let mut message = Message::new();
        message
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_recursion_desired(true)
            .set_recursion_available(true)
            .set_response_code(code)
            .add_queries(query.message().queries().to_vec());
        message.insert_answers(answers);
        message
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolutionOutcome, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let outcome = self
            .outcomes
            .read()
            .await
            .get(&query.name().to_string())
            .cloned()
            .unwrap_or(MockOutcome::NxDomain);

        match outcome {
            MockOutcome::Records(records) => Ok(ResolutionOutcome::Answered(Self::reply(
                query,
                ResponseCode::NoError,
                records,
            ))),
            MockOutcome::NxDomain => Ok(ResolutionOutcome::Answered(Self::reply(
                query,
                ResponseCode::NXDomain,
                vec![],
            ))),
            MockOutcome::TimedOut => Ok(ResolutionOutcome::TimedOut),
            MockOutcome::Fail(err) => Err(err),
        }
    }
}

pub fn a_record(name: &str, ttl: u32, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        Name::from_str(name).unwrap(),
        ttl,
        RData::A(A(Ipv4Addr::from(ip))),
    )
}
