use ferrous_doh_application::dns::DnsAnswer;
use serde::Serialize;

/// Body of a JSON DoH answer; `{}` when the answer section is empty.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum JsonAnswer {
    Records(JsonRecords),
    Empty {},
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonRecords {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub data: Vec<String>,
}

impl JsonAnswer {
    pub fn from_answer(answer: &DnsAnswer) -> Self {
        let rrset = answer.first_rrset();
        let (Some(first), Some(ttl)) = (rrset.first(), answer.min_ttl()) else {
            return Self::Empty {};
        };

        Self::Records(JsonRecords {
            name: first.name().to_string(),
            record_type: first.record_type().to_string(),
            ttl,
            data: rrset
                .iter()
                .filter_map(|record| record.data())
                .map(ToString::to_string)
                .collect(),
        })
    }
}
