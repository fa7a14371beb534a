use super::DnsQuery;
use ferrous_doh_domain::DomainError;
use hickory_proto::op::{Edns, Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;

/// A DNS answer on its way back to a DoH client.
///
/// The transaction id is forced to 0 on construction (RFC 8484 §4.1), so no
/// value of this type can leak the upstream id.
#[derive(Debug, Clone)]
pub struct DnsAnswer {
    message: Message,
}

impl DnsAnswer {
    pub fn from_message(mut message: Message) -> Self {
        message.set_id(0);
        Self { message }
    }

    pub fn from_wire(bytes: &[u8]) -> Result<Self, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS response: {}", e))
        })?;
        Ok(Self::from_message(message))
    }

    /// SERVFAIL answer synthesized when the upstream never replied.
    pub fn server_failure(query: &DnsQuery) -> Self {
        let request = query.message();

        let mut message = Message::new();
        message
            .set_id(0)
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_response_code(ResponseCode::ServFail)
            .add_queries(request.queries().to_vec());

        if let Some(request_edns) = request.extensions() {
            let mut edns = Edns::new();
            edns.set_max_payload(request_edns.max_payload())
                .set_dnssec_ok(request_edns.dnssec_ok());
            message.set_edns(edns);
        }

        Self { message }
    }

    pub fn id(&self) -> u16 {
        self.message.id()
    }

    pub fn response_code(&self) -> ResponseCode {
        self.message.response_code()
    }

    pub fn answers(&self) -> &[Record] {
        self.message.answers()
    }

    pub fn has_answers(&self) -> bool {
        !self.message.answers().is_empty()
    }

    /// Minimum TTL across the answer section, `None` when it is empty.
    pub fn min_ttl(&self) -> Option<u32> {
        self.message.answers().iter().map(Record::ttl).min()
    }

    /// Records sharing owner, class and type with the first answer.
    pub fn first_rrset(&self) -> Vec<&Record> {
        let Some(first) = self.message.answers().first() else {
            return Vec::new();
        };

        self.message
            .answers()
            .iter()
            .filter(|record| {
                record.name() == first.name()
                    && record.record_type() == first.record_type()
                    && record.dns_class() == first.dns_class()
            })
            .collect()
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn to_wire(&self) -> Result<Vec<u8>, DomainError> {
        self.message.to_vec().map_err(|e| {
            DomainError::Internal(format!("Failed to serialize DNS answer: {}", e))
        })
    }
}
