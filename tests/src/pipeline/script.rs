#![cfg(test)]
use ltmgen_common::config::RunConfig;
use ltmgen_common::error::{ConfigError, GenerateError, IntegrityError};
use ltmgen_core::assembler::{self, titles};
use ltmgen_core::generate;
use serde_json::json;

use crate::fixtures::{self, PUBLIC_IP, VIP, section};

fn secured() -> RunConfig {
    RunConfig {
        sec_host_network: Some("192.168.10.0/24".parse().expect("valid network")),
        sec_container_network: Some("172.29.236.0/22".parse().expect("valid network")),
        sec_public_vlan_name: Some("public".into()),
        afm: true,
        ..fixtures::public_config()
    }
}

#[test]
fn repeated_runs_are_byte_identical() -> anyhow::Result<()> {
    let inventory = fixtures::galera();
    let cfg = secured();

    let first = generate(&inventory, &cfg)?.script.render();
    let second = generate(&inventory, &cfg)?.script.render();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn sections_follow_declaration_order() -> anyhow::Result<()> {
    let generated = generate(&fixtures::galera(), &secured())?;
    let order: Vec<&str> = generated.script.sections().iter().map(|s| s.title).collect();

    assert_eq!(
        order,
        [
            titles::PARTITION,
            titles::DISPLAY,
            titles::SNAT,
            titles::MONITORS,
            titles::DISCARD_RULE,
            titles::HTTP_PROFILE,
            titles::EXTERNAL_MONITOR,
            titles::CERTIFICATE,
            titles::SSL_PROFILES,
            titles::PERSISTENCE,
            titles::NODES,
            titles::POOLS,
            titles::VIRTUALS,
            titles::PUBLIC_SSL,
            titles::PUBLIC_PASSTHROUGH,
            titles::ISOLATION,
            titles::AFM,
            titles::CLOSING,
        ]
    );

    let lines = generated.script.lines();
    assert_eq!(lines[0], assembler::SHEBANG);
    assert_eq!(lines.last().map(String::as_str), assembler::CLOSING_COMMANDS.last().copied());
    Ok(())
}

#[test]
fn snat_defaults_to_container_network_offset() -> anyhow::Result<()> {
    let generated = generate(&fixtures::galera(), &RunConfig::default())?;
    let snat = section(&generated, titles::SNAT);

    assert_eq!(
        snat[0],
        "create ltm snatpool /RPC/RPC_SNATPOOL { members replace-all-with { 172.29.236.15 } }"
    );
    assert_eq!(
        snat[1],
        "modify ltm snat-translation /RPC/172.29.236.15 { ip-idle-timeout 3600 }"
    );
    Ok(())
}

#[test]
fn snat_override_replaces_default() -> anyhow::Result<()> {
    let cfg = RunConfig {
        snat_pool_addresses: vec!["10.9.0.1".parse()?, "10.9.0.2".parse()?],
        ..RunConfig::default()
    };
    let generated = generate(&fixtures::galera(), &cfg)?;
    let snat = section(&generated, titles::SNAT);

    assert!(snat[0].contains("{ 10.9.0.1 10.9.0.2 }"));
    assert_eq!(snat.len(), 3);
    assert!(!snat.iter().any(|l| l.contains("172.29.236.15")));
    Ok(())
}

#[test]
fn snat_override_does_not_need_container_network() -> anyhow::Result<()> {
    let inventory = fixtures::from_json(json!({
        "_meta": { "hostvars": { "db1": { "container_address": "10.0.0.1" } } },
        "all": { "vars": { "internal_lb_vip_address": VIP } },
        "galera": { "hosts": ["db1"] }
    }));

    let cfg = RunConfig {
        snat_pool_addresses: vec!["10.0.0.50".parse()?],
        ..RunConfig::default()
    };
    let generated = generate(&inventory, &cfg)?;
    assert!(section(&generated, titles::SNAT)[0].contains("{ 10.0.0.50 }"));

    assert_eq!(
        generate(&inventory, &RunConfig::default()).unwrap_err(),
        GenerateError::Integrity(IntegrityError::MissingVariable("container_cidr"))
    );
    Ok(())
}

#[test]
fn galera_monitor_user_is_configurable() -> anyhow::Result<()> {
    let cfg = RunConfig {
        galera_monitor_user: "haproxy".into(),
        ..RunConfig::default()
    };
    let generated = generate(&fixtures::galera(), &cfg)?;

    assert!(section(&generated, titles::MONITORS)[0].contains("username haproxy"));
    Ok(())
}

#[test]
fn isolation_and_firewall_sections() -> anyhow::Result<()> {
    let generated = generate(&fixtures::galera(), &secured())?;

    let isolation = section(&generated, titles::ISOLATION);
    assert_eq!(isolation.len(), 2);
    assert!(isolation[0].contains("destination 192.168.10.0:0 ip-forward mask 255.255.255.0"));
    assert!(isolation[0].contains("vlans replace-all-with { /Common/public }"));
    assert!(isolation[1].contains("connection-limit 1 destination 172.29.236.0:0"));

    let afm = section(&generated, titles::AFM);
    assert!(afm[0].contains("3306 { }"));
    assert!(afm.iter().any(|l| l.contains(&format!("{PUBLIC_IP} {{ }}"))));
    assert!(afm.iter().any(|l| l.contains(&format!("{VIP} {{ }}"))));
    Ok(())
}

#[test]
fn incomplete_security_options_are_rejected() {
    let inventory = fixtures::galera();

    let cfg = RunConfig {
        sec_public_vlan_name: None,
        ..secured()
    };
    assert_eq!(
        generate(&inventory, &cfg).unwrap_err(),
        GenerateError::Config(ConfigError::HostNetworkWithoutVlan)
    );

    let cfg = RunConfig {
        ssl_public_ip: None,
        ssl_domain_name: None,
        ..secured()
    };
    assert_eq!(
        generate(&inventory, &cfg).unwrap_err(),
        GenerateError::Config(ConfigError::AfmWithoutPublicIp)
    );

    let cfg = RunConfig {
        sec_host_network: None,
        ..secured()
    };
    assert_eq!(
        generate(&inventory, &cfg).unwrap_err(),
        GenerateError::Config(ConfigError::AfmWithoutHostNetwork)
    );
}
