use clap::Parser;
use ferrous_doh_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - DNS-over-HTTPS proxy to a classic UDP resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Upstream resolver: `internal` or IP[:port], e.g. 8.8.8.8
    #[arg(long)]
    resolver: Option<String>,

    /// TLS certificate path
    #[arg(long, value_name = "FILE")]
    cert: Option<String>,

    /// TLS private key path
    #[arg(long, value_name = "FILE")]
    key: Option<String>,

    /// Listening port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Serve plain HTTP instead of HTTPS
    #[arg(long)]
    no_tls: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.host.clone(),
            port: self.port,
            cert_path: self.cert.clone(),
            key_path: self.key.clone(),
            disable_tls: self.no_tls,
            name_server: self.resolver.clone(),
            log_level: if self.debug {
                Some("debug".to_string())
            } else {
                self.log_level.clone()
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DohServices::new(&config)?;
    info!(
        name_server = %services.resolver.name_server(),
        tls = config.server.tls.enabled,
        "Services ready"
    );

    server::start_web_server(&config, services.app_state()).await?;

    info!("Server shutdown complete");
    Ok(())
}
