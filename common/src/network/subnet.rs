//! # Subnet helpers
//!
//! Small utilities over [`Ipv4Network`] used when deriving addresses from the
//! container network and when rendering forwarding virtual servers.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::IntegrityError;

/// Offset of the conventional SNAT address inside the container network.
pub const SNAT_OFFSET: u32 = 15;

/// Returns the address `offset` positions after the network address.
///
/// Offset 0 is the network address itself, matching how the container CIDR is
/// indexed when the SNAT address is derived.
pub fn nth_address(network: Ipv4Network, offset: u32) -> Result<Ipv4Addr, IntegrityError> {
    let base: u32 = u32::from(network.network());
    let too_small = || IntegrityError::SubnetTooSmall {
        cidr: network.to_string(),
        offset,
    };

    let candidate: Ipv4Addr = base.checked_add(offset).map(Ipv4Addr::from).ok_or_else(too_small)?;

    if network.contains(candidate) {
        Ok(candidate)
    } else {
        Err(too_small())
    }
}

/// The default SNAT address: offset [`SNAT_OFFSET`] of the container network.
pub fn default_snat_address(container_net: Ipv4Network) -> Result<Ipv4Addr, IntegrityError> {
    nth_address(container_net, SNAT_OFFSET)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
