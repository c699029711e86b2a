//! Object naming convention for everything the generator declares.
//!
//! All objects live in the [`PARTITION`] partition and carry the [`PREFIX`].

pub const PARTITION: &str = "RPC";
pub const PREFIX: &str = "RPC";

pub const SNAT_POOL: &str = "RPC_SNATPOOL";
pub const DISCARD_RULE: &str = "RPC_DISCARD_ALL";
pub const FORWARDED_PROTO_PROFILE: &str = "RPC_X-FORWARDED-PROTO";
pub const SERVER_SSL_PROFILE: &str = "RPC_PROF_SSL_SERVER";
pub const EXTERNAL_MONITOR: &str = "RPC-MON-EXT-ENDPOINT";
pub const HOST_NET_LIMIT_VS: &str = "RPC_LIMIT_ACCESS_TO_HOST_NET";
pub const CONTAINER_NET_LIMIT_VS: &str = "RPC_LIMIT_ACCESS_TO_CONTAINER_NET";

/// Full object path inside the partition, e.g. `/RPC/RPC_SNATPOOL`.
pub fn path(name: &str) -> String {
    format!("/{PARTITION}/{name}")
}

pub fn virtual_server(service_key: &str) -> String {
    format!("{PREFIX}_VS_{}", service_key.to_uppercase())
}

pub fn public_ssl_virtual_server(service_key: &str) -> String {
    format!("{PREFIX}_PUB_SSL_VS_{}", service_key.to_uppercase())
}

pub fn public_virtual_server(service_key: &str) -> String {
    format!("{PREFIX}_PUB_VS_{}", service_key.to_uppercase())
}

pub fn pool(service_key: &str) -> String {
    format!("{PREFIX}_POOL_{}", service_key.to_uppercase())
}

/// Node names keep the host identifier as-is.
pub fn node(host: &str) -> String {
    format!("{PREFIX}_NODE_{host}")
}

pub fn client_ssl_profile(domain: &str) -> String {
    format!("{PREFIX}_PROF_SSL_{domain}")
}
