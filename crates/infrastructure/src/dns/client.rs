//! DNS-over-HTTPS client (RFC 8484) used by the `doh-client` tool.

use ferrous_doh_application::codec::encode_base64url;
use ferrous_doh_application::dns::DnsQuery;
use ferrous_doh_domain::doh::{DOH_CONTENT_TYPE, DOH_DNS_PARAM};
use ferrous_doh_domain::DomainError;
use hickory_proto::op::Message;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DohMethod {
    /// Query carried base64url-encoded in the `dns` parameter.
    Get,
    #[default]
    Post,
}

pub struct DohClient {
    http: reqwest::Client,
    url: String,
}

impl DohClient {
    /// `verify_tls = false` accepts any server certificate.
    pub fn new(url: impl Into<String>, verify_tls: bool) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(!verify_tls)
            .build()
            .map_err(|e| DomainError::HttpTransport(format!("client setup failed: {}", e)))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends `query` with id 0 and decodes the wire-format reply.
    pub async fn query(&self, query: DnsQuery, method: DohMethod) -> Result<Message, DomainError> {
        let query = query.with_id(0);
        let body = query.to_wire()?;

        debug!(
            url = %self.url,
            method = ?method,
            message_len = body.len(),
            "Sending DoH query"
        );

        let request = match method {
            DohMethod::Get => {
                let url = format!("{}?{}={}", self.url, DOH_DNS_PARAM, encode_base64url(&body));
                self.http.get(url)
            }
            DohMethod::Post => self
                .http
                .post(&self.url)
                .header(reqwest::header::CONTENT_TYPE, DOH_CONTENT_TYPE)
                .body(body),
        };

        let response = request
            .header(reqwest::header::ACCEPT, DOH_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| {
                DomainError::HttpTransport(format!("DoH request to {} failed: {}", self.url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpTransport(format!(
                "DoH server {} returned HTTP {}: {}",
                self.url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            DomainError::HttpTransport(format!(
                "Failed to read DoH response from {}: {}",
                self.url, e
            ))
        })?;

        debug!(url = %self.url, response_len = bytes.len(), "DoH response received");

        Message::from_vec(&bytes)
            .map_err(|e| DomainError::InvalidDnsMessage(format!("DoH response: {}", e)))
    }
}
