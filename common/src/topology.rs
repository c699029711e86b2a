//! # Bound Topology
//!
//! The per-run working copy of the service catalog: every entry joined with the
//! hosts its inventory group resolved to, plus the object names derived from it.
//! The catalog itself is never touched, so repeated runs start from the same data.

use crate::error::ResolutionWarning;
use crate::service::{Host, ServiceEntry};

/// A pool member: the host and its node object name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundNode {
    pub name: String,
    pub host: Host,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundService<'a> {
    pub entry: &'a ServiceEntry,
    pub vs_name: String,
    pub pool_name: String,
    /// Members in resolution order.
    pub nodes: Vec<BoundNode>,
}

impl BoundService<'_> {
    pub fn key(&self) -> &str {
        self.entry.key
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// All bound services, sorted by service key, and the diagnostics gathered on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundTopology<'a> {
    pub services: Vec<BoundService<'a>>,
    pub warnings: Vec<ResolutionWarning>,
}
