use super::HeaderPolicy;
use crate::dto::JsonAnswer;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use ferrous_doh_application::dns::DnsAnswer;
use ferrous_doh_domain::doh::DohFormat;
use ferrous_doh_domain::DomainError;

/// What a handler hands to the encoder.
#[derive(Debug)]
pub enum DohPayload {
    Answer(DnsAnswer),
    /// Opaque diagnostic text, emitted verbatim without DoH headers.
    Raw(String),
}

pub struct ResponseEncoder {
    format: DohFormat,
}

impl ResponseEncoder {
    pub fn new(format: DohFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> DohFormat {
        self.format
    }

    pub fn encode(
        &self,
        payload: DohPayload,
        policy: &HeaderPolicy,
    ) -> Result<Response, DomainError> {
        let answer = match payload {
            DohPayload::Answer(answer) => answer,
            DohPayload::Raw(text) => return Ok(text.into_response()),
        };

        let body = match self.format {
            DohFormat::Wire => answer.to_wire()?,
            DohFormat::Json => serde_json::to_vec(&JsonAnswer::from_answer(&answer))
                .map_err(|e| DomainError::Internal(format!("JSON answer: {}", e)))?,
        };
        let content_length = HeaderValue::from(body.len());

        let mut response = (StatusCode::OK, body).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.format.content_type()),
        );
        headers.insert(header::CONTENT_LENGTH, content_length);
        policy.apply(headers, &answer);

        Ok(response)
    }
}
