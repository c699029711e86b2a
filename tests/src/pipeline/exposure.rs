#![cfg(test)]
use ltmgen_common::config::RunConfig;
use ltmgen_common::error::{ConfigError, GenerateError};
use ltmgen_core::assembler::titles;
use ltmgen_core::generate;

use crate::fixtures::{self, DOMAIN, PUBLIC_IP, section};

fn openstack() -> ltmgen_common::inventory::Inventory {
    fixtures::inventory(
        &[
            ("keystone", &["infra1"]),
            ("horizon", &["infra1", "infra2"]),
            ("nova_console", &["infra2"]),
            ("glance_registry", &["infra1"]),
        ],
        &[("infra1", "10.0.0.11"), ("infra2", "10.0.0.12")],
    )
}

fn line_for<'a>(lines: &'a [String], name: &str) -> Option<&'a String> {
    let needle = format!("/RPC/{name} ");
    lines.iter().find(|l| l.contains(&needle))
}

#[test]
fn public_variants_land_in_their_sections() -> anyhow::Result<()> {
    let generated = generate(&openstack(), &fixtures::public_config())?;
    let ssl = section(&generated, titles::PUBLIC_SSL);
    let passthrough = section(&generated, titles::PUBLIC_PASSTHROUGH);

    // Offloaded API: header injection, then the client profile.
    let keystone = line_for(ssl, "RPC_PUB_SSL_VS_KEYSTONE_SERVICE")
        .ok_or_else(|| anyhow::anyhow!("keystone public VS missing"))?;
    assert!(keystone.contains(&format!("destination {PUBLIC_IP}:5000")));
    assert!(keystone.contains(&format!(
        "profiles replace-all-with {{ /Common/tcp {{ }} /RPC/RPC_X-FORWARDED-PROTO {{ }} \
         /RPC/RPC_PROF_SSL_{DOMAIN} {{ context clientside }} }}"
    )));
    assert!(!keystone.contains("mask 255.255.255.255"));

    // TLS backend: re-encrypted, server profile first.
    let horizon = line_for(ssl, "RPC_PUB_SSL_VS_HORIZON_SSL")
        .ok_or_else(|| anyhow::anyhow!("horizon public VS missing"))?;
    assert!(horizon.contains("/RPC/RPC_PROF_SSL_SERVER { context serverside }"));
    assert!(horizon.contains("persist replace-all-with { /RPC/RPC_PROF_PERSIST_IP }"));

    // TLS cannot be terminated: raw forwarding, separate section.
    let spice = line_for(passthrough, "RPC_PUB_VS_NOVA_SPICE_CONSOLE")
        .ok_or_else(|| anyhow::anyhow!("spice public VS missing"))?;
    assert!(spice.contains("profiles replace-all-with { /Common/fastL4 { } }"));
    assert!(line_for(ssl, "RPC_PUB_SSL_VS_NOVA_SPICE_CONSOLE").is_none());

    // Internal-only services get no public counterpart.
    assert!(!ssl.iter().chain(passthrough).any(|l| l.contains("GLANCE_REGISTRY")));
    Ok(())
}

#[test]
fn every_service_keeps_its_internal_virtual() -> anyhow::Result<()> {
    let generated = generate(&openstack(), &fixtures::public_config())?;
    let internal = section(&generated, titles::VIRTUALS);

    assert_eq!(internal.len(), ltmgen_core::catalog::SERVICES.len());
    assert!(internal.iter().all(|l| l.contains("mask 255.255.255.255")));
    assert!(internal.iter().all(|l| l.contains("/Common/fastL4")));
    Ok(())
}

#[test]
fn no_public_ip_means_no_public_virtuals() -> anyhow::Result<()> {
    let generated = generate(&openstack(), &RunConfig::default())?;

    assert!(section(&generated, titles::PUBLIC_SSL).is_empty());
    assert!(section(&generated, titles::PUBLIC_PASSTHROUGH).is_empty());
    assert!(generated.script.section(titles::CERTIFICATE).is_none());
    assert_eq!(generated.report.public_ssl_virtuals, 0);
    Ok(())
}

#[test]
fn domain_enables_certificate_sections() -> anyhow::Result<()> {
    let generated = generate(&openstack(), &fixtures::public_config())?;

    let certificate = section(&generated, titles::CERTIFICATE);
    assert!(!certificate.is_empty());
    assert!(certificate.iter().any(|l| l.contains(DOMAIN)));

    let profiles = section(&generated, titles::SSL_PROFILES);
    assert!(profiles.iter().any(|l| l.contains(&format!("RPC_PROF_SSL_{DOMAIN}"))));
    Ok(())
}

#[test]
fn public_ip_without_domain_is_rejected() {
    let cfg = RunConfig {
        ssl_domain_name: None,
        ..fixtures::public_config()
    };

    assert_eq!(
        generate(&openstack(), &cfg).unwrap_err(),
        GenerateError::Config(ConfigError::PublicIpWithoutDomain)
    );
}
