use crate::{
    doh::{Decoded, DohPayload, HeaderPolicy, RequestDecoder, ResponseEncoder},
    errors::ApiError,
    state::AppState,
};
use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{header, Method},
    response::Response,
};
use ferrous_doh_domain::doh::{ConnectionScheme, MAX_DNS_MESSAGE_BYTES};
use ferrous_doh_domain::DomainError;
use tracing::{debug, instrument};

/// Single DoH endpoint: decode, resolve upstream, encode.
#[instrument(skip(state, request), name = "doh_dns_query", fields(method = %request.method()))]
pub async fn dns_query(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();
    let scheme = parts
        .extensions
        .get::<ConnectionScheme>()
        .copied()
        .unwrap_or_default();

    if parts.method == Method::POST {
        RequestDecoder::check_post_content_type(&parts.headers)?;
    }

    let body = to_bytes(body, MAX_DNS_MESSAGE_BYTES + 1)
        .await
        .map_err(|e| DomainError::InvalidDnsMessage(format!("request body: {}", e)))?;

    let (query, format) = match RequestDecoder::decode(&parts, &body) {
        Decoded::Query { query, format } => (query, format),
        Decoded::NoQuery(cause) => return Err(ApiError(cause)),
    };

    let answer = state.resolve_query.execute(&query).await?;

    debug!(
        method = %parts.method,
        accept = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-"),
        rcode = %answer.response_code(),
        answers = answer.answers().len(),
        "[HTTP] Answering DoH request"
    );

    let policy = HeaderPolicy::new(parts.method.clone(), scheme);
    let response = ResponseEncoder::new(format).encode(DohPayload::Answer(answer), &policy)?;
    Ok(response)
}
