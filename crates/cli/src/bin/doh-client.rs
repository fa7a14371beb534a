use clap::Parser;
use ferrous_doh_application::dns::DnsQuery;
use ferrous_doh_infrastructure::dns::{DohClient, DohMethod};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doh-client")]
#[command(version)]
#[command(about = "Send one DNS-over-HTTPS query and print the answer")]
struct Cli {
    /// DoH endpoint URL
    #[arg(long, default_value = "https://127.0.0.1/dns-query")]
    server: String,

    /// Use GET instead of POST
    #[arg(long)]
    get: bool,

    /// Name to query
    #[arg(long, default_value = "www.example.com")]
    qname: String,

    /// Record type to query
    #[arg(long, default_value = "A")]
    qtype: String,

    /// Set the DNSSEC OK bit
    #[arg(long)]
    dnssec: bool,

    /// Skip server certificate verification
    #[arg(long)]
    noverify: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let method = if cli.get {
        DohMethod::Get
    } else {
        DohMethod::Post
    };

    let query = DnsQuery::new(&cli.qname, &cli.qtype, cli.dnssec)?;
    let client = DohClient::new(cli.server, !cli.noverify)?;
    let answer = client.query(query, method).await?;

    println!("{}", answer);
    Ok(())
}
