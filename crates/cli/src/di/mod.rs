use ferrous_doh_api::AppState;
use ferrous_doh_application::use_cases::ResolveDohQueryUseCase;
use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::dns::UdpDnsResolver;
use std::sync::Arc;
use tracing::info;

pub struct DohServices {
    pub resolver: Arc<UdpDnsResolver>,
    pub resolve_query: Arc<ResolveDohQueryUseCase>,
}

impl DohServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let name_server = config.upstream.name_server()?;
        info!(name_server = %name_server, "Upstream resolver configured");

        let resolver = Arc::new(UdpDnsResolver::new(name_server));
        let resolve_query = Arc::new(ResolveDohQueryUseCase::new(resolver.clone()));

        Ok(Self {
            resolver,
            resolve_query,
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.resolve_query.clone())
    }
}
