//! Selection of the virtual server variants a service is published with.

use ltmgen_common::service::ServiceFlags;

use crate::synth::artifacts::ProfileRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKind {
    /// Internal VIP, always present.
    Internal,
    /// Public side terminates TLS, plaintext to the backend.
    PublicOffload,
    /// Public side terminates TLS and re-encrypts toward a TLS backend.
    PublicPassthroughTls,
    /// Public side forwards the raw stream.
    PublicPassthroughPlain,
}

impl VirtualKind {
    pub fn terminates_tls(self) -> bool {
        match self {
            VirtualKind::PublicOffload | VirtualKind::PublicPassthroughTls => true,
            VirtualKind::Internal | VirtualKind::PublicPassthroughPlain => false,
        }
    }
}

/// The public counterpart of a service, when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKind {
    Offload,
    PassthroughTls,
    PassthroughPlain,
}

impl PublicKind {
    pub fn kind(self) -> VirtualKind {
        match self {
            PublicKind::Offload => VirtualKind::PublicOffload,
            PublicKind::PassthroughTls => VirtualKind::PublicPassthroughTls,
            PublicKind::PassthroughPlain => VirtualKind::PublicPassthroughPlain,
        }
    }
}

/// Picks the public variant for a service, if it gets one at all.
///
/// Only meaningful when a public address is configured.
pub fn public_variant(flags: &ServiceFlags) -> Option<PublicKind> {
    if !flags.exposed_publicly {
        return None;
    }

    let kind = if flags.backend_speaks_tls {
        PublicKind::PassthroughTls
    } else if flags.tls_offload_impossible {
        PublicKind::PassthroughPlain
    } else {
        PublicKind::Offload
    };
    Some(kind)
}

/// Profiles after `/Common/tcp` for the given variant.
///
/// `domain` is only read by the TLS variants.
pub fn profile_chain(kind: VirtualKind, flags: &ServiceFlags, domain: &str) -> Vec<ProfileRef> {
    let client = || ProfileRef::ClientSsl {
        domain: domain.to_string(),
    };

    match kind {
        VirtualKind::Internal | VirtualKind::PublicPassthroughPlain => Vec::new(),
        VirtualKind::PublicPassthroughTls => vec![ProfileRef::ServerSsl, client()],
        VirtualKind::PublicOffload if flags.injects_forwarded_proto_header => {
            vec![ProfileRef::ForwardedProto, client()]
        }
        VirtualKind::PublicOffload => vec![client()],
    }
}
