pub mod auth;
pub mod database;
pub mod dnsbl;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use dnsbl::DnsblConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
