//! # Configuration Synthesizer
//!
//! Walks a [`BoundTopology`] and produces every configuration object of the run,
//! grouped in the buckets the script is assembled from.
//!
//! Per service, in key order:
//! 1. one node per host, declared once across all services;
//! 2. one pool, priority weighted when the service asks for it;
//! 3. the internal virtual server;
//! 4. at most one public virtual server, see [`exposure::public_variant`].
//!
//! Global objects (SNAT pool, isolation virtual servers, AFM rules) are produced once.

pub mod artifacts;
pub mod exposure;
pub mod security;

use std::collections::{BTreeMap, HashSet};
use std::net::{IpAddr, Ipv4Addr};

use ltmgen_common::config::RunConfig;
use ltmgen_common::error::{ConfigError, GenerateError, IntegrityError};
use ltmgen_common::inventory::{InventoryVars, VAR_CONTAINER_CIDR};
use ltmgen_common::naming;
use ltmgen_common::network::subnet;
use ltmgen_common::topology::{BoundService, BoundTopology};
use tracing::debug;

use crate::catalog::profiles;
use crate::catalog::services;
use artifacts::{IsolationVirtual, NodeDecl, PoolDecl, PoolMember, SnatPool, VirtualDecl};
use exposure::{PublicKind, VirtualKind};
use security::AfmRules;

/// Priority of the first member of a weighted pool.
pub const PRIORITY_BASELINE: u16 = 100;
/// Decrease applied to each subsequent member.
pub const PRIORITY_STEP: u16 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub snat: SnatPool,
    /// Sorted by rendered text.
    pub nodes: Vec<NodeDecl>,
    pub pools: Vec<PoolDecl>,
    pub internal_virtuals: Vec<VirtualDecl>,
    /// Offloaded and re-encrypting public virtual servers.
    pub public_ssl_virtuals: Vec<VirtualDecl>,
    pub public_passthrough_virtuals: Vec<VirtualDecl>,
    pub isolation: Vec<IsolationVirtual>,
    pub afm: Option<AfmRules>,
}

/// First-seen ordered list of virtual servers, unique by name.
#[derive(Debug, Default)]
struct VirtualBucket {
    names: HashSet<String>,
    items: Vec<VirtualDecl>,
}

impl VirtualBucket {
    fn push(&mut self, decl: VirtualDecl) {
        if !self.names.insert(decl.name.clone()) {
            debug!(name = %decl.name, "skipping duplicate virtual server");
            return;
        }
        self.items.push(decl);
    }
}

pub fn synthesize(
    topology: &BoundTopology<'_>,
    cfg: &RunConfig,
    vars: &InventoryVars,
) -> Result<Synthesis, GenerateError> {
    let mut nodes: BTreeMap<String, NodeDecl> = BTreeMap::new();
    let mut pool_names: HashSet<String> = HashSet::new();
    let mut pools: Vec<PoolDecl> = Vec::new();
    let mut internal = VirtualBucket::default();
    let mut public_ssl = VirtualBucket::default();
    let mut public_passthrough = VirtualBucket::default();

    for service in &topology.services {
        for node in &service.nodes {
            nodes.entry(node.name.clone()).or_insert_with(|| NodeDecl {
                name: node.name.clone(),
                address: node.host.address,
            });
        }

        if pool_names.insert(service.pool_name.clone()) {
            pools.push(build_pool(service));
        }

        internal.push(virtual_server(
            service,
            VirtualKind::Internal,
            service.vs_name.clone(),
            vars.internal_lb_vip_address,
            cfg,
        )?);

        let (Some(public_ip), Some(public)) = (
            cfg.ssl_public_ip,
            exposure::public_variant(&service.entry.flags),
        ) else {
            continue;
        };
        match public {
            PublicKind::Offload | PublicKind::PassthroughTls => {
                let name = naming::public_ssl_virtual_server(service.key());
                public_ssl.push(virtual_server(service, public.kind(), name, public_ip, cfg)?);
            }
            PublicKind::PassthroughPlain => {
                let name = naming::public_virtual_server(service.key());
                public_passthrough.push(virtual_server(service, public.kind(), name, public_ip, cfg)?);
            }
        }
    }

    let mut nodes: Vec<NodeDecl> = nodes.into_values().collect();
    nodes.sort_by_cached_key(NodeDecl::to_string);

    let synthesis = Synthesis {
        snat: snat_pool(cfg, vars)?,
        nodes,
        pools,
        internal_virtuals: internal.items,
        public_ssl_virtuals: public_ssl.items,
        public_passthrough_virtuals: public_passthrough.items,
        isolation: isolation_virtuals(cfg)?,
        afm: afm_rules(cfg, vars)?,
    };

    debug!(
        nodes = synthesis.nodes.len(),
        pools = synthesis.pools.len(),
        internal = synthesis.internal_virtuals.len(),
        public_ssl = synthesis.public_ssl_virtuals.len(),
        public_passthrough = synthesis.public_passthrough_virtuals.len(),
        "synthesis complete"
    );

    Ok(synthesis)
}

fn build_pool(service: &BoundService<'_>) -> PoolDecl {
    let weighted = service.entry.flags.requires_priority_weighting;
    let mut priority: u16 = PRIORITY_BASELINE;

    let members: Vec<PoolMember> = service
        .nodes
        .iter()
        .map(|node| {
            let member = PoolMember {
                node: node.name.clone(),
                port: service.entry.backend_port,
                priority: weighted.then_some(priority),
            };
            priority = priority.saturating_sub(PRIORITY_STEP);
            member
        })
        .collect();

    PoolDecl {
        name: service.pool_name.clone(),
        members,
        monitor: service.entry.monitor.to_string(),
        min_active_members: weighted.then_some(1),
    }
}

fn virtual_server(
    service: &BoundService<'_>,
    kind: VirtualKind,
    name: String,
    destination: IpAddr,
    cfg: &RunConfig,
) -> Result<VirtualDecl, ConfigError> {
    let profiles = if kind.terminates_tls() {
        let domain = cfg.domain_name().ok_or(ConfigError::PublicIpWithoutDomain)?;
        exposure::profile_chain(kind, &service.entry.flags, domain)
    } else {
        Vec::new()
    };

    let persistence = service
        .entry
        .flags
        .uses_session_persistence
        .then(|| profiles::session_persistence().name);

    Ok(VirtualDecl {
        name,
        kind,
        destination,
        port: service.entry.port,
        pool: service.pool_name.clone(),
        profiles,
        persistence,
    })
}

fn snat_pool(cfg: &RunConfig, vars: &InventoryVars) -> Result<SnatPool, GenerateError> {
    if !cfg.snat_pool_addresses.is_empty() {
        return Ok(SnatPool {
            addresses: cfg.snat_pool_addresses.clone(),
        });
    }

    let network = vars
        .container_cidr
        .ok_or(IntegrityError::MissingVariable(VAR_CONTAINER_CIDR))?;
    Ok(SnatPool {
        addresses: vec![subnet::default_snat_address(network)?],
    })
}

fn isolation_virtuals(cfg: &RunConfig) -> Result<Vec<IsolationVirtual>, ConfigError> {
    let mut virtuals = Vec::new();

    if let Some(network) = cfg.sec_host_network {
        let vlan = cfg.vlan_name().ok_or(ConfigError::HostNetworkWithoutVlan)?;
        virtuals.push(IsolationVirtual::HostNetwork {
            network,
            vlan: vlan.to_string(),
        });
    }

    if let Some(network) = cfg.sec_container_network {
        virtuals.push(IsolationVirtual::ContainerNetwork { network });
    }

    Ok(virtuals)
}

fn afm_rules(cfg: &RunConfig, vars: &InventoryVars) -> Result<Option<AfmRules>, ConfigError> {
    if !cfg.afm {
        return Ok(None);
    }

    let public_ip = cfg.ssl_public_ip.ok_or(ConfigError::AfmWithoutPublicIp)?;
    let host_network = cfg
        .sec_host_network
        .ok_or(ConfigError::AfmWithoutHostNetwork)?;

    Ok(Some(AfmRules {
        public_ip,
        private_ip: vars.internal_lb_vip_address,
        host_network,
        ports: services::front_end_ports(services::SERVICES),
    }))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
