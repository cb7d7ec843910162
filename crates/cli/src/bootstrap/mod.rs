mod database;

pub use database::init_database;

use ferrous_dnsbl_domain::{CliOverrides, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    Ok(config)
}

/// Filter precedence: `--log-level`, then `RUST_LOG`, then `logging.level`.
pub fn init_logging(config: &Config, level_from_cli: bool) {
    let directive = filter_directive(
        &config.logging.level,
        level_from_cli,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(
        filter = %directive,
        zone = %config.dnsbl.zone,
        "Logging initialized"
    );
}

fn filter_directive(configured: &str, level_from_cli: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(env) if !level_from_cli && !env.trim().is_empty() => env,
        _ => configured.to_string(),
    }
}
