//! # Topology Binder
//!
//! Joins each catalog entry with the hosts of its owning group and derives the
//! virtual server, pool and node names. The result is sorted by service key so it
//! does not depend on the order the catalog happens to be written in.

use ltmgen_common::error::{IntegrityError, ResolutionWarning};
use ltmgen_common::inventory::Inventory;
use ltmgen_common::naming;
use ltmgen_common::service::ServiceEntry;
use ltmgen_common::topology::{BoundNode, BoundService, BoundTopology};
use tracing::debug;

use crate::resolver;

pub fn bind<'a>(
    catalog: &'a [ServiceEntry],
    inventory: &Inventory,
) -> Result<BoundTopology<'a>, IntegrityError> {
    let mut entries: Vec<&'a ServiceEntry> = catalog.iter().collect();
    entries.sort_by(|a, b| a.key.cmp(b.key));

    let mut topology = BoundTopology::default();

    for entry in entries {
        let resolution = resolver::resolve(inventory, entry.group)?;
        merge_warnings(&mut topology.warnings, resolution.warnings);

        let nodes: Vec<BoundNode> = resolution
            .hosts
            .into_iter()
            .map(|host| BoundNode {
                name: naming::node(&host.name),
                host,
            })
            .collect();

        debug!(service = entry.key, nodes = nodes.len(), "bound service");

        topology.services.push(BoundService {
            entry,
            vs_name: naming::virtual_server(entry.key),
            pool_name: naming::pool(entry.key),
            nodes,
        });
    }

    Ok(topology)
}

// Several services can share a group; report each missing group once.
fn merge_warnings(into: &mut Vec<ResolutionWarning>, new: Vec<ResolutionWarning>) {
    for warning in new {
        if !into.contains(&warning) {
            into.push(warning);
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
