use ferrous_doh_application::use_cases::ResolveDohQueryUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_query: Arc<ResolveDohQueryUseCase>,
}

impl AppState {
    pub fn new(resolve_query: Arc<ResolveDohQueryUseCase>) -> Self {
        Self { resolve_query }
    }
}
