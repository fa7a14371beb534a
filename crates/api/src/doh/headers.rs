use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method};
use ferrous_doh_application::dns::DnsAnswer;
use ferrous_doh_domain::doh::{ConnectionScheme, AUTHORITY};

const AUTHORITY_HEADER: HeaderName = HeaderName::from_static("authority");
const METHOD_HEADER: HeaderName = HeaderName::from_static("method");
const SCHEME_HEADER: HeaderName = HeaderName::from_static("scheme");

/// Informational headers stamped on every translated DNS answer.
#[derive(Debug, Clone)]
pub struct HeaderPolicy {
    method: Method,
    scheme: ConnectionScheme,
}

impl HeaderPolicy {
    pub fn new(method: Method, scheme: ConnectionScheme) -> Self {
        Self { method, scheme }
    }

    /// `cache-control` is only set when the answer section has records,
    /// with `max-age` equal to their smallest TTL.
    pub fn apply(&self, headers: &mut HeaderMap, answer: &DnsAnswer) {
        headers.insert(AUTHORITY_HEADER, HeaderValue::from_static(AUTHORITY));
        if let Ok(method) = HeaderValue::from_str(self.method.as_str()) {
            headers.insert(METHOD_HEADER, method);
        }
        headers.insert(SCHEME_HEADER, HeaderValue::from_static(self.scheme.as_str()));

        if let Some(ttl) = answer.min_ttl() {
            if let Ok(value) = HeaderValue::from_str(&format!("max-age={}", ttl)) {
                headers.insert(header::CACHE_CONTROL, value);
            }
        }
    }
}
