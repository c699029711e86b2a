//! Profiles, iRules and certificates declared ahead of the virtual servers.

use ltmgen_common::naming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceKind {
    SourceAddress,
    Cookie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistenceProfile {
    pub name: &'static str,
    pub kind: PersistenceKind,
}

pub const PERSIST_SOURCE_ADDR: PersistenceProfile = PersistenceProfile {
    name: "RPC_PROF_PERSIST_IP",
    kind: PersistenceKind::SourceAddress,
};

pub const PERSIST_COOKIE: PersistenceProfile = PersistenceProfile {
    name: "RPC_PROF_PERSIST_COOKIE",
    kind: PersistenceKind::Cookie,
};

pub static PERSISTENCE_PROFILES: &[PersistenceProfile] = &[PERSIST_SOURCE_ADDR, PERSIST_COOKIE];

/// The profile attached to virtual servers of services that need session persistence.
pub fn session_persistence() -> &'static PersistenceProfile {
    &PERSIST_SOURCE_ADDR
}

impl PersistenceProfile {
    pub fn render(&self) -> String {
        let path = naming::path(self.name);
        match self.kind {
            PersistenceKind::SourceAddress => format!(
                "create ltm persistence source-addr {path} {{ app-service none \
                 defaults-from /Common/source_addr match-across-services enabled timeout 3600 }}"
            ),
            PersistenceKind::Cookie => format!(
                "create ltm persistence cookie {path} {{ app-service none \
                 cookie-name RPC-COOKIE defaults-from /Common/cookie }}"
            ),
        }
    }
}

/// The iRule that drops every accepted connection, used by the isolation virtual servers.
pub fn discard_rule() -> Vec<String> {
    vec![
        "run util bash".to_string(),
        format!(
            "tmsh create ltm rule {} when CLIENT_ACCEPTED {{ discard }}",
            naming::path(naming::DISCARD_RULE)
        ),
        "exit".to_string(),
    ]
}

pub fn forwarded_proto_profile() -> String {
    format!(
        "create ltm profile http {} {{ header-insert \"X-Forwarded-Proto: https\" }}",
        naming::path(naming::FORWARDED_PROTO_PROFILE)
    )
}

/// Self-signed key and certificate for `domain`.
pub fn certificate(domain: &str) -> Vec<String> {
    let key = naming::path(&format!("{domain}.key"));
    let crt = naming::path(&format!("{domain}.crt"));
    vec![
        format!("cd /{}", naming::PARTITION),
        format!("create sys crypto key {key}"),
        format!("create sys crypto cert {crt} key {key} common-name {domain} lifetime 3650"),
        "cd /Common".to_string(),
    ]
}

/// Client-side profile for `domain` and the shared server-side profile.
pub fn ssl_profiles(domain: &str) -> Vec<String> {
    let key = naming::path(&format!("{domain}.key"));
    let crt = naming::path(&format!("{domain}.crt"));
    vec![
        format!(
            "create ltm profile client-ssl {} {{ cert {crt} key {key} defaults-from clientssl }}",
            naming::path(&naming::client_ssl_profile(domain))
        ),
        format!(
            "create ltm profile server-ssl {} {{ defaults-from /Common/serverssl }}",
            naming::path(naming::SERVER_SSL_PROFILE)
        ),
    ]
}
