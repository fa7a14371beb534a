use crate::dto::DohParams;
use axum::extract::Query;
use axum::http::{header, request::Parts, HeaderMap, Method};
use ferrous_doh_application::codec::decode_base64url;
use ferrous_doh_application::dns::DnsQuery;
use ferrous_doh_domain::doh::{
    media_type_matches, DohFormat, DOH_CONTENT_TYPE, DOH_DNS_PARAM, DOH_JSON_CONTENT_TYPE,
    MAX_DNS_MESSAGE_BYTES,
};
use ferrous_doh_domain::DomainError;
use tracing::debug;

/// Result of decoding an inbound request. Never an error: a request that
/// carries no usable query is `NoQuery` with the reason attached.
#[derive(Debug)]
pub enum Decoded {
    Query { query: DnsQuery, format: DohFormat },
    NoQuery(DomainError),
}

pub struct RequestDecoder;

impl RequestDecoder {
    pub fn decode(parts: &Parts, body: &[u8]) -> Decoded {
        let decoded = match parts.method {
            Method::GET => Self::decode_get(parts),
            Method::POST => Self::decode_post(&parts.headers, body),
            ref other => Err(DomainError::UnsupportedMethod(other.to_string())),
        };

        match decoded {
            Ok((query, format)) => {
                debug!(
                    method = %parts.method,
                    domain = %query.name(),
                    record_type = %query.record_type(),
                    format = ?format,
                    "Decoded DoH request"
                );
                Decoded::Query { query, format }
            }
            Err(cause) => {
                debug!(method = %parts.method, error = %cause, "No query in DoH request");
                Decoded::NoQuery(cause)
            }
        }
    }

    /// True when the client asked for the JSON answer form.
    pub fn wants_json(headers: &HeaderMap) -> bool {
        headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|accept| media_type_matches(accept, DOH_JSON_CONTENT_TYPE))
    }

    fn decode_get(parts: &Parts) -> Result<(DnsQuery, DohFormat), DomainError> {
        let Query(params) = Query::<DohParams>::try_from_uri(&parts.uri)
            .map_err(|e| DomainError::MissingQuery(e.body_text()))?;

        if Self::wants_json(&parts.headers) {
            let (name, record_type) = params.json_question().ok_or_else(|| {
                DomainError::MissingQuery("name and type parameters are required".to_string())
            })?;
            let query = DnsQuery::new(name, record_type, false)?;
            return Ok((query, DohFormat::Json));
        }

        let encoded = params
            .wire_query()
            .ok_or_else(|| DomainError::MissingQuery(format!("{} parameter", DOH_DNS_PARAM)))?;
        let wire = decode_base64url(encoded)?;
        let query = DnsQuery::from_wire(&wire)?;
        Ok((query, DohFormat::Wire))
    }

    /// A POST must declare `application/dns-message`; checked before the
    /// body is read so an oversized body with the wrong type is still 405.
    pub fn check_post_content_type(headers: &HeaderMap) -> Result<(), DomainError> {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if media_type_matches(content_type, DOH_CONTENT_TYPE) {
            Ok(())
        } else {
            Err(DomainError::UnsupportedFormat(format!(
                "content-type '{}'",
                content_type
            )))
        }
    }

    fn decode_post(headers: &HeaderMap, body: &[u8]) -> Result<(DnsQuery, DohFormat), DomainError> {
        Self::check_post_content_type(headers)?;

        if body.is_empty() {
            return Err(DomainError::MissingQuery("empty body".to_string()));
        }
        if body.len() > MAX_DNS_MESSAGE_BYTES {
            return Err(DomainError::InvalidDnsMessage(format!(
                "body of {} bytes exceeds {}",
                body.len(),
                MAX_DNS_MESSAGE_BYTES
            )));
        }

        let query = DnsQuery::from_wire(body)?;
        Ok((query, DohFormat::Wire))
    }
}
