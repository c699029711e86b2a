use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ltmgen_common::config::{DEFAULT_GALERA_MONITOR_USER, RunConfig};
use ltmgen_common::error::ConfigError;
use ltmgen_common::network::address;

pub const DEFAULT_INVENTORY_FILE: &str = "openstack_inventory.json";
pub const DEFAULT_EXPORT: &str = "~/rpc_f5_config.sh";

#[derive(Parser, Debug)]
#[command(name = "ltmgen")]
#[command(version)]
#[command(about = "Generates an F5 LTM configuration script from an OpenStack inventory.")]
pub struct CommandLine {
    /// Inventory file name or path
    #[arg(short = 'f', long = "file", default_value = DEFAULT_INVENTORY_FILE)]
    pub file: String,

    /// SNAT pool address(es), comma separated; derived from the container network when omitted
    #[arg(short = 's', long = "snat-pool-address")]
    pub snat_pool_address: Option<String>,

    /// Public address the public virtual servers listen on
    #[arg(long = "ssl-public-ip")]
    pub ssl_public_ip: Option<String>,

    /// Domain the public certificate is issued for
    #[arg(long = "ssl-domain-name")]
    pub ssl_domain_name: Option<String>,

    /// Host network to isolate, in CIDR notation
    #[arg(long = "sec-host-network")]
    pub sec_host_network: Option<String>,

    /// Container network to isolate, in CIDR notation
    #[arg(long = "sec-container-network")]
    pub sec_container_network: Option<String>,

    /// VLAN the public virtual servers are bound to
    #[arg(long = "sec-public-vlan-name")]
    pub sec_public_vlan_name: Option<String>,

    /// Username of the galera health monitor
    #[arg(long = "galera-monitor-user", default_value = DEFAULT_GALERA_MONITOR_USER)]
    pub galera_monitor_user: String,

    /// Emit the Advanced Firewall Module rule set
    #[arg(long = "afm")]
    pub afm: bool,

    /// Print the script to stdout as well
    #[arg(long = "print")]
    pub print: bool,

    /// Where to write the script
    #[arg(short = 'e', long = "export", default_value = DEFAULT_EXPORT)]
    pub export: String,

    /// Less output; repeat for even less
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Typed run options. Only parses; [`RunConfig::validate`] checks the combinations.
    pub fn to_run_config(&self) -> Result<RunConfig, ConfigError> {
        let snat_pool_addresses = match &self.snat_pool_address {
            Some(list) => address::parse_ipv4_list("snat-pool-address", list)?,
            None => Vec::new(),
        };

        Ok(RunConfig {
            snat_pool_addresses,
            ssl_public_ip: self
                .ssl_public_ip
                .as_deref()
                .map(|ip| address::parse_ip("ssl-public-ip", ip))
                .transpose()?,
            ssl_domain_name: self.ssl_domain_name.clone(),
            sec_host_network: self
                .sec_host_network
                .as_deref()
                .map(|net| address::parse_cidr("sec-host-network", net))
                .transpose()?,
            sec_container_network: self
                .sec_container_network
                .as_deref()
                .map(|net| address::parse_cidr("sec-container-network", net))
                .transpose()?,
            sec_public_vlan_name: self.sec_public_vlan_name.clone(),
            afm: self.afm,
            galera_monitor_user: self.galera_monitor_user.clone(),
        })
    }

    pub fn export_path(&self) -> PathBuf {
        crate::adapters::inventory_file::expand_home(&self.export)
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
