use clap::Parser;
use ferrous_dnsbl_api::AppState;
use ferrous_dnsbl_domain::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "ferrous-dnsbl")]
#[command(version)]
#[command(about = "Ferrous DNSBL - DNS blocklist lookups with a shared address record store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Blocklist zone to query (e.g. zen.spamhaus.org)
    #[arg(short = 'z', long)]
    zone: Option<String>,

    /// Log level (trace, debug, info, warn, error); takes precedence over RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level_from_cli = cli.log_level.is_some();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        database_path: cli.database,
        zone: cli.zone,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config, level_from_cli);

    info!("Starting Ferrous DNSBL v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database_url(), &config.database).await?;

    let repos = di::Repositories::new(pool.clone());
    let use_cases = di::UseCases::new(&config, &repos)?;

    if !config.auth.is_enabled() {
        warn!("No API credentials configured; the HTTP API is unauthenticated");
    }

    let app_state = AppState {
        enqueue_lookups: use_cases.enqueue_lookups.clone(),
        get_address_record: use_cases.get_address_record.clone(),
        get_lookup_stats: use_cases.get_lookup_stats.clone(),
        credentials: Arc::new(config.auth.credentials.clone()),
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    server::start_web_server(web_addr, app_state).await?;

    use_cases.enqueue_lookups.shutdown().await;
    pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}
