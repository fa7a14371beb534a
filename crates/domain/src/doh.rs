//! DNS-over-HTTPS protocol constants (RFC 8484 plus the JSON flavour).

/// Media type of a binary DNS message (RFC 8484 §6).
pub const DOH_CONTENT_TYPE: &str = "application/dns-message";

/// Media type of the JSON answer form.
pub const DOH_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Query parameter carrying the base64url wire query on GET.
pub const DOH_DNS_PARAM: &str = "dns";

/// Identity reported in the `authority` response header.
pub const AUTHORITY: &str = "ferrous-doh";

/// Largest wire message accepted from a client (RFC 8484 §6).
pub const MAX_DNS_MESSAGE_BYTES: usize = 65_535;

/// Encoding of the HTTP answer, negotiated from the inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DohFormat {
    #[default]
    Wire,
    Json,
}

impl DohFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Wire => DOH_CONTENT_TYPE,
            Self::Json => DOH_JSON_CONTENT_TYPE,
        }
    }
}

/// How the inbound connection reached us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionScheme {
    #[default]
    Http,
    Https,
}

impl ConnectionScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// True when `header` names `media_type`, ignoring parameters and case.
/// `header` may be a comma separated list as sent in `Accept`.
pub fn media_type_matches(header: &str, media_type: &str) -> bool {
    header.split(',').any(|candidate| {
        candidate
            .split(';')
            .next()
            .map(str::trim)
            .is_some_and(|essence| essence.eq_ignore_ascii_case(media_type))
    })
}
