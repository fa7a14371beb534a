use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ferrous_doh_domain::DomainError;
use tracing::{debug, error};

/// Failure surfaced to a DoH client: a bare status code, never a body.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::UnsupportedFormat(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.0.is_decode_error() {
            debug!(status = status.as_u16(), error = %self.0, "Rejected DoH request");
        } else {
            error!(status = status.as_u16(), error = %self.0, "DoH request failed");
        }

        status.into_response()
    }
}
