use ferrous_doh_domain::DomainError;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::str::FromStr;

/// UDP payload size advertised when the DO bit is requested.
const EDNS_MAX_PAYLOAD: u16 = 1232;

/// A DNS query extracted from a DoH request.
///
/// Always carries at least one question; immutable once built.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    message: Message,
    question: Query,
}

impl DnsQuery {
    /// Build a recursive query for `name`/`record_type`, as the JSON GET form
    /// and the DoH client do.
    pub fn new(name: &str, record_type: &str, dnssec_ok: bool) -> Result<Self, DomainError> {
        let mut name = Name::from_ascii(name).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Invalid query name '{}': {}", name, e))
        })?;
        name.set_fqdn(true);

        let record_type = parse_record_type(record_type)?;

        let mut message = Message::new();
        message
            .set_id(fastrand::u16(..))
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(Query::query(name, record_type));

        if dnssec_ok {
            let mut edns = Edns::new();
            edns.set_max_payload(EDNS_MAX_PAYLOAD);
            edns.set_dnssec_ok(true);
            message.set_edns(edns);
        }

        Self::from_message(message)
    }

    pub fn from_wire(bytes: &[u8]) -> Result<Self, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS query: {}", e))
        })?;
        Self::from_message(message)
    }

    pub fn from_message(message: Message) -> Result<Self, DomainError> {
        if message.message_type() != MessageType::Query {
            return Err(DomainError::InvalidDnsMessage(
                "Message is a response, not a query".to_string(),
            ));
        }

        let question = message.queries().first().cloned().ok_or_else(|| {
            DomainError::InvalidDnsMessage("Query has no question section".to_string())
        })?;

        Ok(Self { message, question })
    }

    /// Same query with another transaction id (DoH clients send 0).
    pub fn with_id(mut self, id: u16) -> Self {
        self.message.set_id(id);
        self
    }

    pub fn id(&self) -> u16 {
        self.message.id()
    }

    pub fn name(&self) -> &Name {
        self.question.name()
    }

    pub fn record_type(&self) -> RecordType {
        self.question.query_type()
    }

    pub fn dnssec_ok(&self) -> bool {
        self.message
            .extensions()
            .as_ref()
            .is_some_and(|edns| edns.dnssec_ok())
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn to_wire(&self) -> Result<Vec<u8>, DomainError> {
        self.message.to_vec().map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS query: {}", e))
        })
    }
}

/// Mnemonic (`A`, `aaaa`) or numeric (`28`) record type.
fn parse_record_type(record_type: &str) -> Result<RecordType, DomainError> {
    if let Ok(code) = record_type.parse::<u16>() {
        return Ok(RecordType::from(code));
    }
    RecordType::from_str(&record_type.to_ascii_uppercase()).map_err(|_| {
        DomainError::InvalidDnsMessage(format!("Unknown record type '{}'", record_type))
    })
}
