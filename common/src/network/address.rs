//! # Address option parsing
//!
//! Turns the textual network options of a run into typed values:
//! * A single IP address (e.g. the public VIP).
//! * A comma-separated IPv4 list (e.g. `10.0.0.15,10.0.0.16`).
//! * An IPv4 CIDR block (e.g. `192.168.1.0/24`).

use std::net::{IpAddr, Ipv4Addr};

use pnet::ipnetwork::Ipv4Network;

use crate::error::ConfigError;

/// Parses a single IP address.
pub fn parse_ip(option: &'static str, s: &str) -> Result<IpAddr, ConfigError> {
    s.trim()
        .parse::<IpAddr>()
        .map_err(|e| invalid(option, s, e.to_string()))
}

/// Parses a comma-separated list of IPv4 addresses, skipping empty items.
pub fn parse_ipv4_list(option: &'static str, s: &str) -> Result<Vec<Ipv4Addr>, ConfigError> {
    let mut addresses: Vec<Ipv4Addr> = Vec::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let addr = part
            .parse::<Ipv4Addr>()
            .map_err(|e| invalid(option, part, e.to_string()))?;

        if !addresses.contains(&addr) {
            addresses.push(addr);
        }
    }

    if addresses.is_empty() {
        return Err(invalid(option, s, "no address given".into()));
    }

    Ok(addresses)
}

/// Parses CIDR notation like "192.168.1.0/24".
///
/// A bare address without a prefix is rejected: the isolation virtual servers
/// need an explicit mask.
pub fn parse_cidr(option: &'static str, s: &str) -> Result<Ipv4Network, ConfigError> {
    let s = s.trim();
    if !s.contains('/') {
        return Err(invalid(option, s, "expected CIDR notation (a.b.c.d/nn)".into()));
    }

    s.parse::<Ipv4Network>()
        .map_err(|e| invalid(option, s, e.to_string()))
}

fn invalid(option: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        option,
        value: value.to_string(),
        reason,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
