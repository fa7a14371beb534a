use async_trait::async_trait;
use axum::Router;
use ferrous_doh_api::{create_doh_routes, AppState};
use ferrous_doh_application::dns::DnsQuery;
use ferrous_doh_application::ports::{DnsResolver, ResolutionOutcome};
use ferrous_doh_application::use_cases::ResolveDohQueryUseCase;
use ferrous_doh_domain::DomainError;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Clone, Copy)]
pub enum Canned {
    A { ip: Ipv4Addr, ttl: u32 },
    NxDomain,
    TimedOut,
    Fail,
}

/// Upstream stand-in answering from a fixed table; unknown names are NXDOMAIN.
#[derive(Default)]
pub struct StaticResolver {
    table: HashMap<String, Canned>,
}

impl StaticResolver {
    pub fn with(mut self, name: &str, canned: Canned) -> Self {
        self.table.insert(name.trim_end_matches('.').to_lowercase(), canned);
        self
    }
}

fn reply(query: &DnsQuery, rcode: ResponseCode) -> Message {
    let mut message = Message::new();
    message
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_recursion_desired(true)
        .set_recursion_available(true)
        .set_response_code(rcode);
    message.add_queries(query.message().queries().to_vec());
    message
}

#[async_trait]
impl DnsResolver for StaticResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolutionOutcome, DomainError> {
        let key = query
            .name()
            .to_string()
            .trim_end_matches('.')
            .to_lowercase();

        match self.table.get(&key).copied().unwrap_or(Canned::NxDomain) {
            Canned::A { ip, ttl } => {
                let mut message = reply(query, ResponseCode::NoError);
                message.add_answer(Record::from_rdata(query.name().clone(), ttl, RData::A(A(ip))));
                Ok(ResolutionOutcome::Answered(message))
            }
            Canned::NxDomain => Ok(ResolutionOutcome::Answered(reply(
                query,
                ResponseCode::NXDomain,
            ))),
            Canned::TimedOut => Ok(ResolutionOutcome::TimedOut),
            Canned::Fail => Err(DomainError::TransportIo {
                server: "127.0.0.1:53".to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}

pub fn app_with(resolver: StaticResolver) -> Router {
    let use_case = ResolveDohQueryUseCase::new(Arc::new(resolver));
    create_doh_routes(AppState::new(Arc::new(use_case)))
}

pub fn default_app() -> Router {
    app_with(
        StaticResolver::default()
            .with(
                "www.example.com",
                Canned::A {
                    ip: Ipv4Addr::new(93, 184, 216, 34),
                    ttl: 300,
                },
            )
            .with(
                "example.com",
                Canned::A {
                    ip: Ipv4Addr::new(93, 184, 216, 34),
                    ttl: 120,
                },
            )
            .with("slow.example.com", Canned::TimedOut)
            .with("broken.example.com", Canned::Fail),
    )
}
