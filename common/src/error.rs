use std::fmt;

use thiserror::Error;

/// A feature was requested without one of the options it depends on.
///
/// Raised before anything is resolved so that no partial script is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the AFM rule set needs a public address, set [ --ssl-public-ip ]")]
    AfmWithoutPublicIp,
    #[error("the AFM rule set needs a host network, set [ --sec-host-network ]")]
    AfmWithoutHostNetwork,
    #[error("host network isolation needs a VLAN, set [ --sec-public-vlan-name ]")]
    HostNetworkWithoutVlan,
    #[error("public SSL virtual servers need a certificate, set [ --ssl-domain-name ]")]
    PublicIpWithoutDomain,
    #[error("invalid {option} value '{value}': {reason}")]
    InvalidValue {
        option: &'static str,
        value: String,
        reason: String,
    },
}

/// The inventory contradicts itself or is missing data the generator cannot guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("cyclic group reference: {}", path.join(" -> "))]
    CyclicGroup { path: Vec<String> },
    #[error("host '{host}' (group '{group}') has no container_address")]
    MissingHostAddress { host: String, group: String },
    #[error("host '{host}' has an invalid container_address '{value}'")]
    InvalidHostAddress { host: String, value: String },
    #[error("inventory variable 'all.vars.{0}' is missing")]
    MissingVariable(&'static str),
    #[error("inventory variable 'all.vars.{name}' is invalid: '{value}'")]
    InvalidVariable { name: &'static str, value: String },
    #[error("subnet {cidr} is too small to derive a SNAT address at offset {offset}")]
    SubnetTooSmall { cidr: String, offset: u32 },
}

/// Any error that aborts generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// Non-fatal diagnostic: a referenced inventory group does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionWarning {
    pub group: String,
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inventory group \"{}\" not found, skipping", self.group)
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
