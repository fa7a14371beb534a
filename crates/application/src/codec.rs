//! base64url codec used to carry a wire-format DNS message in a URL
//! (RFC 8484 §4.1: unpadded URL-safe alphabet).

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use ferrous_doh_domain::DomainError;

pub fn encode_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Clients strip the `=` padding, so it is restored from the length before
/// decoding.
pub fn decode_base64url(encoded: &str) -> Result<Vec<u8>, DomainError> {
    let missing = (4 - encoded.len() % 4) % 4;
    let mut padded = String::with_capacity(encoded.len() + missing);
    padded.push_str(encoded);
    padded.extend(std::iter::repeat('=').take(missing));

    URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|e| DomainError::InvalidBase64(e.to_string()))
}
