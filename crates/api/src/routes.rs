use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

/// Path of the DoH endpoint (RFC 8484 §4.1 template).
pub const DOH_PATH: &str = "/dns-query";

pub fn create_doh_routes(state: AppState) -> Router {
    Router::new()
        .route(DOH_PATH, any(handlers::dns_query))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
