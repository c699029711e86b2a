#![cfg(test)]
use ltmgen_common::config::RunConfig;
use ltmgen_common::error::{GenerateError, IntegrityError};
use ltmgen_core::assembler::titles;
use ltmgen_core::generate;
use serde_json::json;

use crate::fixtures::{self, VIP, section};

#[test]
fn galera_scenario() -> anyhow::Result<()> {
    let generated = generate(&fixtures::galera(), &RunConfig::default())?;

    assert_eq!(
        section(&generated, titles::NODES),
        [
            "create ltm node /RPC/RPC_NODE_db1 { address 10.0.0.1 }",
            "create ltm node /RPC/RPC_NODE_db2 { address 10.0.0.2 }",
        ]
    );

    let galera_pool: Vec<&String> = section(&generated, titles::POOLS)
        .iter()
        .filter(|l| l.contains("/RPC/RPC_POOL_GALERA "))
        .collect();
    assert_eq!(galera_pool.len(), 1);
    assert!(galera_pool[0].contains(
        "members replace-all-with { RPC_NODE_db1:3306 { priority-group 100 } \
         RPC_NODE_db2:3306 { priority-group 95 } }"
    ));
    assert!(galera_pool[0].contains("min-active-members 1"));
    assert!(galera_pool[0].contains("monitor /RPC/RPC_MON_GALERA"));

    let galera_vs: Vec<&String> = section(&generated, titles::VIRTUALS)
        .iter()
        .filter(|l| l.contains("/RPC/RPC_VS_GALERA "))
        .collect();
    assert_eq!(galera_vs.len(), 1);
    assert!(galera_vs[0].contains(&format!("destination {VIP}:3306")));
    assert!(galera_vs[0].contains("pool /RPC/RPC_POOL_GALERA"));

    assert!(section(&generated, titles::PUBLIC_SSL).is_empty());
    assert!(section(&generated, titles::PUBLIC_PASSTHROUGH).is_empty());
    Ok(())
}

#[test]
fn priorities_follow_resolution_order() -> anyhow::Result<()> {
    let inventory = fixtures::from_json(json!({
        "_meta": { "hostvars": {
            "h3": { "container_address": "10.0.0.3" },
            "h1": { "container_address": "10.0.0.1" },
            "h2": { "container_address": "10.0.0.2" }
        }},
        "all": { "vars": {
            "internal_lb_vip_address": VIP,
            "container_cidr": fixtures::CONTAINER_CIDR
        }},
        "galera": { "children": ["galera_a", "galera_b"] },
        "galera_a": { "hosts": ["h3", "h1"] },
        "galera_b": { "hosts": ["h2"] }
    }));

    let generated = generate(&inventory, &RunConfig::default())?;
    let pools = section(&generated, titles::POOLS);
    let galera = pools
        .iter()
        .find(|l| l.contains("/RPC/RPC_POOL_GALERA "))
        .ok_or_else(|| anyhow::anyhow!("galera pool missing"))?;

    assert!(galera.contains(
        "RPC_NODE_h3:3306 { priority-group 100 } RPC_NODE_h1:3306 { priority-group 95 } \
         RPC_NODE_h2:3306 { priority-group 90 }"
    ));

    // Node declarations are still sorted.
    let nodes = section(&generated, titles::NODES);
    assert!(nodes[0].contains("RPC_NODE_h1"));
    assert!(nodes[2].contains("RPC_NODE_h3"));
    Ok(())
}

#[test]
fn shared_hosts_are_declared_once() -> anyhow::Result<()> {
    let inventory = fixtures::inventory(
        &[("keystone", &["infra1"]), ("horizon", &["infra1"]), ("galera", &["infra1"])],
        &[("infra1", "10.0.0.11")],
    );

    let generated = generate(&inventory, &RunConfig::default())?;
    assert_eq!(section(&generated, titles::NODES).len(), 1);
    assert_eq!(generated.report.nodes, 1);
    Ok(())
}

#[test]
fn missing_groups_are_reported_once() -> anyhow::Result<()> {
    let generated = generate(&fixtures::galera(), &RunConfig::default())?;
    let groups: Vec<&str> = generated
        .report
        .warnings
        .iter()
        .map(|w| w.group.as_str())
        .collect();

    assert!(groups.contains(&"kibana"));
    assert_eq!(groups.iter().filter(|g| **g == "kibana").count(), 1);
    assert!(!groups.contains(&"galera"));

    // The empty services still get their pool and internal virtual server.
    assert!(section(&generated, titles::POOLS).iter().any(|l| l.contains("RPC_POOL_KIBANA ")));
    Ok(())
}

#[test]
fn cyclic_inventory_is_fatal() {
    let inventory = fixtures::from_json(json!({
        "all": { "vars": {
            "internal_lb_vip_address": VIP,
            "container_cidr": fixtures::CONTAINER_CIDR
        }},
        "galera": { "children": ["galera_inner"] },
        "galera_inner": { "children": ["galera"] }
    }));

    let err = generate(&inventory, &RunConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Integrity(IntegrityError::CyclicGroup { .. })
    ));
}

#[test]
fn host_without_address_is_fatal() {
    let inventory = fixtures::inventory(&[("galera", &["db1"])], &[]);

    let err = generate(&inventory, &RunConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Integrity(IntegrityError::MissingHostAddress { .. })
    ));
}

#[test]
fn missing_global_variables_are_fatal() {
    let inventory = fixtures::from_json(json!({ "galera": { "hosts": [] } }));
    assert!(matches!(
        generate(&inventory, &RunConfig::default()),
        Err(GenerateError::Integrity(IntegrityError::MissingVariable(_)))
    ));
}
