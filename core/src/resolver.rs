//! # Inventory Resolver
//!
//! Flattens a named group into the hosts it reaches, directly or through any depth
//! of child groups.
//!
//! * Children are expanded before the group's own hosts.
//! * A host reachable through several paths (diamonds) is returned once, at its first
//!   position.
//! * A group missing from the inventory contributes nothing and yields a
//!   [`ResolutionWarning`].
//! * Re-entering a group that is still being expanded is a cycle and aborts with
//!   [`IntegrityError::CyclicGroup`].

use std::collections::HashSet;
use std::net::IpAddr;

use ltmgen_common::error::{IntegrityError, ResolutionWarning};
use ltmgen_common::inventory::{Group, Inventory};
use ltmgen_common::service::Host;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub hosts: Vec<Host>,
    pub warnings: Vec<ResolutionWarning>,
}

/// Resolves `group` against `inventory`.
pub fn resolve(inventory: &Inventory, group: &str) -> Result<Resolution, IntegrityError> {
    let mut walker = Walker::new(inventory);
    walker.expand(group)?;

    debug!(group, hosts = walker.resolution.hosts.len(), "resolved inventory group");
    Ok(walker.resolution)
}

/// A group being expanded and the index of its next child.
struct Frame<'a> {
    name: String,
    group: &'a Group,
    next_child: usize,
}

struct Walker<'a> {
    inventory: &'a Inventory,
    /// Names of the groups that currently have a frame.
    on_stack: HashSet<String>,
    /// Groups already fully expanded; revisiting them cannot add hosts.
    done: HashSet<String>,
    seen_hosts: HashSet<String>,
    resolution: Resolution,
}

impl<'a> Walker<'a> {
    fn new(inventory: &'a Inventory) -> Self {
        Self {
            inventory,
            on_stack: HashSet::new(),
            done: HashSet::new(),
            seen_hosts: HashSet::new(),
            resolution: Resolution::default(),
        }
    }

    // Depth-first over an explicit frame stack, so nesting depth is bounded by the
    // heap rather than the call stack.
    fn expand(&mut self, root: &str) -> Result<(), IntegrityError> {
        let mut frames: Vec<Frame<'a>> = Vec::new();
        self.enter(root, &mut frames)?;

        while let Some(frame) = frames.last_mut() {
            let group: &'a Group = frame.group;
            match group.children().get(frame.next_child) {
                Some(child) => {
                    frame.next_child += 1;
                    self.enter(child, &mut frames)?;
                }
                None => {
                    if let Some(finished) = frames.pop() {
                        self.finish(finished)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn enter(&mut self, name: &str, frames: &mut Vec<Frame<'a>>) -> Result<(), IntegrityError> {
        if self.on_stack.contains(name) {
            let pos = frames.iter().position(|f| f.name == name).unwrap_or(0);
            let mut path: Vec<String> = frames[pos..].iter().map(|f| f.name.clone()).collect();
            path.push(name.to_string());
            return Err(IntegrityError::CyclicGroup { path });
        }

        if self.done.contains(name) {
            return Ok(());
        }

        let Some(group) = self.inventory.group(name) else {
            let warning = ResolutionWarning {
                group: name.to_string(),
            };
            warn!("{warning}");
            if !self.resolution.warnings.contains(&warning) {
                self.resolution.warnings.push(warning);
            }
            self.done.insert(name.to_string());
            return Ok(());
        };

        self.on_stack.insert(name.to_string());
        frames.push(Frame {
            name: name.to_string(),
            group,
            next_child: 0,
        });
        Ok(())
    }

    /// Adds the own hosts of a group whose children are all expanded.
    fn finish(&mut self, frame: Frame<'a>) -> Result<(), IntegrityError> {
        self.on_stack.remove(&frame.name);

        for host in frame.group.hosts() {
            if self.seen_hosts.contains(host) {
                continue;
            }
            let address = self.address_of(host, &frame.name)?;
            self.seen_hosts.insert(host.clone());
            self.resolution.hosts.push(Host::new(host.clone(), address));
        }

        self.done.insert(frame.name);
        Ok(())
    }

    fn address_of(&self, host: &str, group: &str) -> Result<IpAddr, IntegrityError> {
        let raw = self.inventory.container_address(host).ok_or_else(|| {
            IntegrityError::MissingHostAddress {
                host: host.to_string(),
                group: group.to_string(),
            }
        })?;

        raw.trim()
            .parse::<IpAddr>()
            .map_err(|_| IntegrityError::InvalidHostAddress {
                host: host.to_string(),
                value: raw.to_string(),
            })
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
