//! # Inventory Model
//!
//! The deserialized inventory document. Top-level keys are group names, except for
//! `_meta`, which carries the per-host variable table:
//!
//! ```json
//! {
//!   "_meta": { "hostvars": { "db1": { "container_address": "10.0.0.1" } } },
//!   "all": { "vars": { "internal_lb_vip_address": "10.0.0.100", "container_cidr": "10.0.0.0/22" } },
//!   "galera_all": { "children": ["galera"] },
//!   "galera": { "hosts": ["db1"] }
//! }
//! ```
//!
//! The tree is read once and never modified.

use std::collections::BTreeMap;
use std::net::IpAddr;

use pnet::ipnetwork::Ipv4Network;
use serde::Deserialize;
use serde_json::Value;

use crate::error::IntegrityError;

const ALL_GROUP: &str = "all";
const VAR_LB_VIP: &str = "internal_lb_vip_address";
pub const VAR_CONTAINER_CIDR: &str = "container_cidr";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inventory {
    #[serde(rename = "_meta", default)]
    pub meta: Meta,
    #[serde(flatten)]
    pub groups: BTreeMap<String, Group>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub hostvars: BTreeMap<String, HostVars>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostVars {
    pub container_address: Option<String>,
}

/// A node of the group hierarchy. Both lists may be absent or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    #[serde(default)]
    children: Option<Vec<String>>,
    #[serde(default)]
    hosts: Option<Vec<String>>,
    #[serde(default)]
    vars: Option<BTreeMap<String, Value>>,
}

impl Group {
    pub fn children(&self) -> &[String] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn hosts(&self) -> &[String] {
        self.hosts.as_deref().unwrap_or_default()
    }

    pub fn var(&self, name: &str) -> Option<&Value> {
        self.vars.as_ref().and_then(|vars| vars.get(name))
    }
}

/// The inventory-wide variables the generator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryVars {
    pub internal_lb_vip_address: IpAddr,
    /// Only needed to derive the SNAT address; absent is not an error here.
    pub container_cidr: Option<Ipv4Network>,
}

impl Inventory {
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// The raw `container_address` of a host, if declared.
    pub fn container_address(&self, host: &str) -> Option<&str> {
        self.meta
            .hostvars
            .get(host)
            .and_then(|vars| vars.container_address.as_deref())
    }

    /// Reads a string variable from `all.vars`.
    pub fn global_var(&self, name: &str) -> Option<&str> {
        self.group(ALL_GROUP)
            .and_then(|all| all.var(name))
            .and_then(Value::as_str)
    }

    /// Extracts and parses the global variables. The load-balancer VIP is required.
    pub fn vars(&self) -> Result<InventoryVars, IntegrityError> {
        let vip = self
            .global_var(VAR_LB_VIP)
            .ok_or(IntegrityError::MissingVariable(VAR_LB_VIP))?;
        let internal_lb_vip_address = vip
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| IntegrityError::InvalidVariable {
                name: VAR_LB_VIP,
                value: vip.to_string(),
            })?;

        let container_cidr = self
            .global_var(VAR_CONTAINER_CIDR)
            .map(|cidr| {
                cidr.trim()
                    .parse::<Ipv4Network>()
                    .map_err(|_| IntegrityError::InvalidVariable {
                        name: VAR_CONTAINER_CIDR,
                        value: cidr.to_string(),
                    })
            })
            .transpose()?;

        Ok(InventoryVars {
            internal_lb_vip_address,
            container_cidr,
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::Ipv4Addr;

    fn sample() -> Inventory {
        serde_json::from_value(json!({
            "_meta": {
                "hostvars": {
                    "db1": { "container_address": "10.0.0.1", "ansible_host": "10.0.0.1" },
                    "bare": {}
                }
            },
            "all": {
                "vars": {
                    "internal_lb_vip_address": "10.0.0.100",
                    "container_cidr": "10.0.0.0/22"
                }
            },
            "galera_all": { "children": ["galera"], "hosts": null },
            "galera": { "hosts": ["db1"] }
        }))
        .unwrap()
    }

    #[test]
    fn meta_is_not_a_group() {
        let inv = sample();
        assert!(inv.group("_meta").is_none());
        assert_eq!(inv.groups.len(), 3);
    }

    #[test]
    fn null_and_missing_lists_are_empty() {
        let inv = sample();
        let all = inv.group("galera_all").unwrap();
        assert_eq!(all.children(), ["galera".to_string()]);
        assert!(all.hosts().is_empty());
        assert!(inv.group("galera").unwrap().children().is_empty());
    }

    #[test]
    fn container_address_lookup() {
        let inv = sample();
        assert_eq!(inv.container_address("db1"), Some("10.0.0.1"));
        assert_eq!(inv.container_address("bare"), None);
        assert_eq!(inv.container_address("ghost"), None);
    }

    #[test]
    fn vars_are_parsed() {
        let vars = sample().vars().unwrap();
        assert_eq!(
            vars.internal_lb_vip_address,
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 100))
        );
        assert_eq!(vars.container_cidr.map(|c| c.prefix()), Some(22));
    }

    #[test]
    fn missing_vars_are_reported() {
        let inv: Inventory = serde_json::from_value(json!({
            "all": { "vars": { "internal_lb_vip_address": "10.0.0.100" } }
        }))
        .unwrap();
        assert_eq!(inv.vars().unwrap().container_cidr, None);

        let inv: Inventory = serde_json::from_value(json!({ "all": { "vars": {} } })).unwrap();
        assert_eq!(
            inv.vars().unwrap_err(),
            IntegrityError::MissingVariable("internal_lb_vip_address")
        );

        let inv: Inventory = serde_json::from_value(json!({
            "all": { "vars": { "internal_lb_vip_address": "10.0.0.100", "container_cidr": "10.0.0.0" } }
        }))
        .unwrap();
        assert!(matches!(
            inv.vars().unwrap_err(),
            IntegrityError::InvalidVariable { name: "container_cidr", .. }
        ));

        let inv: Inventory = serde_json::from_value(json!({
            "all": { "vars": { "internal_lb_vip_address": "lb.local", "container_cidr": "10.0.0.0/22" } }
        }))
        .unwrap();
        assert!(matches!(
            inv.vars().unwrap_err(),
            IntegrityError::InvalidVariable { name: "internal_lb_vip_address", .. }
        ));
    }
}
