use async_trait::async_trait;
use ferrous_dnsbl_application::ports::{NameResolutionError, NameResolver};
use ferrous_dnsbl_domain::config::DnsblConfig;
use ferrous_dnsbl_domain::DomainError;
use hickory_resolver::config::{LookupIpStrategy, NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use std::time::Duration;
use tracing::{debug, info, warn};

const NAMESERVER_PORT: u16 = 53;

/// Forward A-record resolution through hickory.
///
/// NXDOMAIN and empty answers are reported as `NotFound` from the resolver's
/// typed error, everything else as `Failed`.
pub struct HickoryNameResolver {
    resolver: TokioResolver,
}

impl HickoryNameResolver {
    pub fn new(config: &DnsblConfig) -> Result<Self, DomainError> {
        let mut builder = if config.nameservers.is_empty() {
            info!("Using system resolver configuration");
            TokioResolver::builder_tokio().map_err(|e| {
                DomainError::ConfigError(format!("Failed to read system resolver config: {}", e))
            })?
        } else {
            let ips = config
                .nameservers
                .iter()
                .map(|ns| {
                    ns.parse::<IpAddr>().map_err(|_| {
                        DomainError::ConfigError(format!("Invalid nameserver address: {}", ns))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            info!(nameservers = ?ips, "Using configured nameservers");
            let group = NameServerConfigGroup::from_ips_clear(&ips, NAMESERVER_PORT, true);
            TokioResolver::builder_with_config(
                ResolverConfig::from_parts(None, vec![], group),
                TokioConnectionProvider::default(),
            )
        };

        let opts = builder.options_mut();
        opts.timeout = Duration::from_secs(config.query_timeout_secs);
        opts.ip_strategy = LookupIpStrategy::Ipv4Only;

        Ok(Self {
            resolver: builder.build(),
        })
    }

    fn fully_qualified(name: &str) -> String {
        if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{}.", name)
        }
    }
}

#[async_trait]
impl NameResolver for HickoryNameResolver {
    async fn resolve(&self, name: &str) -> Result<Vec<IpAddr>, NameResolutionError> {
        let fqdn = Self::fully_qualified(name);

        match self.resolver.lookup_ip(fqdn.as_str()).await {
            Ok(lookup) => {
                let addresses: Vec<IpAddr> = lookup.iter().collect();
                debug!(name = %name, count = addresses.len(), "Lookup answered");
                Ok(addresses)
            }
            Err(e) if e.is_no_records_found() => {
                debug!(name = %name, "Lookup returned no records");
                Err(NameResolutionError::NotFound)
            }
            Err(e) => {
                warn!(name = %name, error = %e, "Lookup failed");
                Err(NameResolutionError::Failed(e.to_string()))
            }
        }
    }
}
