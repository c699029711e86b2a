use std::net::{IpAddr, Ipv4Addr};

use pnet::ipnetwork::Ipv4Network;

use crate::error::ConfigError;

pub const DEFAULT_GALERA_MONITOR_USER: &str = "openstack";

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Explicit SNAT pool members.
    ///
    /// Empty means the address is derived from the inventory's container network.
    pub snat_pool_addresses: Vec<Ipv4Addr>,
    /// Enables the public virtual servers.
    pub ssl_public_ip: Option<IpAddr>,
    /// Certificate/key pair and client SSL profile name.
    pub ssl_domain_name: Option<String>,
    /// Enables the host network isolation virtual server.
    pub sec_host_network: Option<Ipv4Network>,
    /// Enables the container network isolation virtual server.
    pub sec_container_network: Option<Ipv4Network>,
    pub sec_public_vlan_name: Option<String>,
    /// Emits the Advanced Firewall Module rule set.
    pub afm: bool,
    pub galera_monitor_user: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            snat_pool_addresses: Vec::new(),
            ssl_public_ip: None,
            ssl_domain_name: None,
            sec_host_network: None,
            sec_container_network: None,
            sec_public_vlan_name: None,
            afm: false,
            galera_monitor_user: DEFAULT_GALERA_MONITOR_USER.to_string(),
        }
    }
}

impl RunConfig {
    /// Checks that every requested feature has its companion options.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.afm {
            if self.ssl_public_ip.is_none() {
                return Err(ConfigError::AfmWithoutPublicIp);
            }
            if self.sec_host_network.is_none() {
                return Err(ConfigError::AfmWithoutHostNetwork);
            }
        }

        if self.sec_host_network.is_some() && self.vlan_name().is_none() {
            return Err(ConfigError::HostNetworkWithoutVlan);
        }

        if self.ssl_public_ip.is_some() && self.domain_name().is_none() {
            return Err(ConfigError::PublicIpWithoutDomain);
        }

        Ok(())
    }

    /// The TLS domain, ignoring blank values.
    pub fn domain_name(&self) -> Option<&str> {
        non_blank(self.ssl_domain_name.as_deref())
    }

    /// The public VLAN name, ignoring blank values.
    pub fn vlan_name(&self) -> Option<&str> {
        non_blank(self.sec_public_vlan_name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
