//! Structured configuration objects and their rendering.
//!
//! Each type renders itself into exactly one directive through [`fmt::Display`].
//! The synthesizer deduplicates on these structures (node and virtual server
//! names), never on the rendered text.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use ltmgen_common::naming;
use pnet::ipnetwork::Ipv4Network;

use crate::synth::exposure::VirtualKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl {
    pub name: String,
    pub address: IpAddr,
}

impl fmt::Display for NodeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "create ltm node {} {{ address {} }}",
            naming::path(&self.name),
            self.address
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolMember {
    pub node: String,
    pub port: u16,
    pub priority: Option<u16>,
}

impl fmt::Display for PoolMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.port)?;
        if let Some(priority) = self.priority {
            write!(f, " {{ priority-group {priority} }}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDecl {
    pub name: String,
    pub members: Vec<PoolMember>,
    pub monitor: String,
    /// Set only for priority-weighted pools.
    pub min_active_members: Option<u16>,
}

impl fmt::Display for PoolDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.members.iter().map(PoolMember::to_string).collect();
        write!(
            f,
            "create ltm pool {} {{ load-balancing-mode least-connections-node members \
             replace-all-with {{ {} }}",
            naming::path(&self.name),
            members.join(" ")
        )?;
        if let Some(min) = self.min_active_members {
            write!(f, " min-active-members {min}")?;
        }
        write!(f, " monitor {} }}", naming::path(&self.monitor))
    }
}

/// An entry of a virtual server's profile chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileRef {
    ForwardedProto,
    ClientSsl { domain: String },
    ServerSsl,
}

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileRef::ForwardedProto => {
                write!(f, "{} {{ }}", naming::path(naming::FORWARDED_PROTO_PROFILE))
            }
            ProfileRef::ClientSsl { domain } => write!(
                f,
                "{} {{ context clientside }}",
                naming::path(&naming::client_ssl_profile(domain))
            ),
            ProfileRef::ServerSsl => write!(
                f,
                "{} {{ context serverside }}",
                naming::path(naming::SERVER_SSL_PROFILE)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualDecl {
    pub name: String,
    pub kind: VirtualKind,
    pub destination: IpAddr,
    pub port: u16,
    pub pool: String,
    /// Extra profiles after `/Common/tcp`; only used by the TLS variants.
    pub profiles: Vec<ProfileRef>,
    pub persistence: Option<&'static str>,
}

impl fmt::Display for VirtualDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = vec![format!(
            "create ltm virtual {} {{ destination {}:{} ip-protocol tcp",
            naming::path(&self.name),
            self.destination,
            self.port
        )];

        if self.kind == VirtualKind::Internal {
            parts.push("mask 255.255.255.255".into());
        }

        parts.push(format!("pool {}", naming::path(&self.pool)));

        if self.kind.terminates_tls() {
            let chain: Vec<String> = self.profiles.iter().map(ProfileRef::to_string).collect();
            parts.push(format!(
                "profiles replace-all-with {{ /Common/tcp {{ }} {} }}",
                chain.join(" ")
            ));
        } else {
            parts.push("profiles replace-all-with { /Common/fastL4 { } }".into());
        }

        if let Some(profile) = self.persistence {
            parts.push(format!(
                "persist replace-all-with {{ {} }}",
                naming::path(profile)
            ));
        }

        if self.kind == VirtualKind::Internal {
            parts.push("source 0.0.0.0/0".into());
        }

        parts.push(format!(
            "source-address-translation {{ pool {} type snat }} }}",
            naming::path(naming::SNAT_POOL)
        ));

        f.write_str(&parts.join(" "))
    }
}

/// The shared SNAT pool and the idle-timeout adjustment of each of its addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnatPool {
    pub addresses: Vec<Ipv4Addr>,
}

impl SnatPool {
    pub fn declaration(&self) -> String {
        let members: Vec<String> = self.addresses.iter().map(Ipv4Addr::to_string).collect();
        format!(
            "create ltm snatpool {} {{ members replace-all-with {{ {} }} }}",
            naming::path(naming::SNAT_POOL),
            members.join(" ")
        )
    }

    pub fn translations(&self) -> Vec<String> {
        self.addresses
            .iter()
            .map(|addr| {
                format!(
                    "modify ltm snat-translation {} {{ ip-idle-timeout 3600 }}",
                    naming::path(&addr.to_string())
                )
            })
            .collect()
    }

    pub fn render(&self) -> Vec<String> {
        std::iter::once(self.declaration())
            .chain(self.translations())
            .collect()
    }
}

/// Forwarding virtual servers that discard traffic toward a management network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsolationVirtual {
    HostNetwork { network: Ipv4Network, vlan: String },
    ContainerNetwork { network: Ipv4Network },
}

impl fmt::Display for IsolationVirtual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = naming::path(naming::DISCARD_RULE);
        match self {
            IsolationVirtual::HostNetwork { network, vlan } => write!(
                f,
                "create ltm virtual {} {{ destination {}:0 ip-forward mask {} \
                 profiles replace-all-with {{ /Common/fastL4 {{ }} }} rules {{ {rule} }} \
                 translate-address disabled translate-port disabled vlans replace-all-with \
                 {{ /Common/{vlan} }} }}",
                naming::path(naming::HOST_NET_LIMIT_VS),
                network.ip(),
                network.mask()
            ),
            IsolationVirtual::ContainerNetwork { network } => write!(
                f,
                "create ltm virtual {} {{ connection-limit 1 destination {}:0 ip-forward mask {} \
                 profiles replace-all-with {{ /Common/fastL4 {{ }} }} rules {{ {rule} }} \
                 translate-address disabled translate-port disabled }}",
                naming::path(naming::CONTAINER_NET_LIMIT_VS),
                network.ip(),
                network.mask()
            ),
        }
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
