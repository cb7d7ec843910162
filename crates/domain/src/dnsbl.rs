//! DNSBL naming convention.
//!
//! A listing for `a.b.c.d` is published as an address record for
//! `d.c.b.a.<zone>`; the absence of that name means the address is clean.

use crate::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

pub const DEFAULT_ZONE: &str = "zen.spamhaus.org";

pub fn parse_ipv4(address: &str) -> Result<Ipv4Addr, DomainError> {
    Ipv4Addr::from_str(address).map_err(|_| DomainError::InvalidAddress(address.to_string()))
}

/// Reverses the four octets of a dotted-quad address: `1.2.3.4` -> `4.3.2.1`.
pub fn reverse_octets(address: &str) -> Result<String, DomainError> {
    let octets = parse_ipv4(address)?.octets();
    Ok(format!(
        "{}.{}.{}.{}",
        octets[3], octets[2], octets[1], octets[0]
    ))
}

/// Composes the name to resolve for `address` within `zone`.
pub fn query_name(address: &str, zone: &str) -> Result<String, DomainError> {
    let reversed = reverse_octets(address)?;
    Ok(format!("{}.{}", reversed, zone.trim_end_matches('.')))
}

/// Joins resolver answers in the order they were returned: `a,b,c`.
pub fn join_response_codes(addresses: &[IpAddr]) -> String {
    let mut joined = String::new();
    for (i, addr) in addresses.iter().enumerate() {
        if i > 0 {
            joined.push(',');
        }
        joined.push_str(&addr.to_string());
    }
    joined
}

/// Checks a zone name the way a resolver would accept it: dot-separated,
/// non-empty labels of at most 63 bytes.
pub fn validate_zone(zone: &str) -> Result<(), String> {
    if zone.is_empty() {
        return Err("Blocklist zone cannot be empty".to_string());
    }

    if zone.starts_with('.') || zone.ends_with('.') {
        return Err(format!(
            "Blocklist zone '{}' must not start or end with a dot",
            zone
        ));
    }

    for label in zone.split('.') {
        if label.is_empty() {
            return Err(format!("Blocklist zone '{}' contains an empty label", zone));
        }
        if label.len() > 63 {
            return Err(format!(
                "Blocklist zone label '{}' exceeds 63 characters",
                label
            ));
        }
    }

    Ok(())
}
