use serde::Deserialize;

/// Query string of a GET on the DoH endpoint, in either flavour.
#[derive(Deserialize, Debug, Default)]
pub struct DohParams {
    /// base64url wire query.
    pub dns: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

impl DohParams {
    /// `name` and `type`, both present and non-empty.
    pub fn json_question(&self) -> Option<(&str, &str)> {
        let name = self.name.as_deref().filter(|s| !s.is_empty())?;
        let record_type = self.record_type.as_deref().filter(|s| !s.is_empty())?;
        Some((name, record_type))
    }

    pub fn wire_query(&self) -> Option<&str> {
        self.dns.as_deref().filter(|s| !s.is_empty())
    }
}
