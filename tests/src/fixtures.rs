use ltmgen_common::config::RunConfig;
use ltmgen_common::inventory::Inventory;
use ltmgen_core::Generated;
use serde_json::{Map, Value, json};

pub const VIP: &str = "172.29.236.100";
pub const CONTAINER_CIDR: &str = "172.29.236.0/22";
pub const PUBLIC_IP: &str = "203.0.113.10";
pub const DOMAIN: &str = "cloud.example.com";

/// Builds an inventory from `(group, hosts)` pairs. Host `name` gets the address given
/// in `addresses`; the global block carries [`VIP`] and [`CONTAINER_CIDR`].
pub fn inventory(groups: &[(&str, &[&str])], addresses: &[(&str, &str)]) -> Inventory {
    let mut doc = Map::new();

    let hostvars: Map<String, Value> = addresses
        .iter()
        .map(|(host, addr)| (host.to_string(), json!({ "container_address": addr })))
        .collect();
    doc.insert("_meta".into(), json!({ "hostvars": hostvars }));
    doc.insert(
        "all".into(),
        json!({ "vars": { "internal_lb_vip_address": VIP, "container_cidr": CONTAINER_CIDR } }),
    );

    for (group, hosts) in groups {
        doc.insert(group.to_string(), json!({ "hosts": hosts }));
    }

    from_json(Value::Object(doc))
}

pub fn from_json(doc: Value) -> Inventory {
    serde_json::from_value(doc).expect("fixture inventory is valid")
}

pub fn galera() -> Inventory {
    inventory(
        &[("galera", &["db1", "db2"])],
        &[("db1", "10.0.0.1"), ("db2", "10.0.0.2")],
    )
}

pub fn public_config() -> RunConfig {
    RunConfig {
        ssl_public_ip: Some(PUBLIC_IP.parse().expect("valid address")),
        ssl_domain_name: Some(DOMAIN.into()),
        ..RunConfig::default()
    }
}

pub fn section<'a>(generated: &'a Generated, title: &str) -> &'a [String] {
    generated
        .script
        .section(title)
        .map(|s| s.lines.as_slice())
        .unwrap_or_default()
}
