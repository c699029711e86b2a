use std::net::IpAddr;

/// A resolved backend endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host {
    pub name: String,
    pub address: IpAddr,
}

impl Host {
    pub fn new(name: impl Into<String>, address: IpAddr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// Exposure and balancing behaviour of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceFlags {
    /// Ranked failover between pool members.
    pub requires_priority_weighting: bool,
    /// Publish a virtual server on the public address.
    pub exposed_publicly: bool,
    /// Insert `X-Forwarded-Proto: https` on offloaded public traffic.
    pub injects_forwarded_proto_header: bool,
    pub uses_session_persistence: bool,
    /// The backend already terminates TLS, so public traffic is re-encrypted.
    pub backend_speaks_tls: bool,
    /// The protocol cannot be offloaded; the public side is a plain pass-through.
    pub tls_offload_impossible: bool,
}

impl ServiceFlags {
    pub const NONE: ServiceFlags = ServiceFlags {
        requires_priority_weighting: false,
        exposed_publicly: false,
        injects_forwarded_proto_header: false,
        uses_session_persistence: false,
        backend_speaks_tls: false,
        tls_offload_impossible: false,
    };
}

/// One row of the service catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub key: &'static str,
    pub port: u16,
    pub backend_port: u16,
    /// Monitor object name inside the partition.
    pub monitor: &'static str,
    /// Inventory group that owns the backends.
    pub group: &'static str,
    pub flags: ServiceFlags,
}
