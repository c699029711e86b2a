use ltmgen_common::service::{ServiceEntry, ServiceFlags};

use super::monitors::{
    EXTERNAL_ENDPOINT, MON_GALERA, MON_HEAT_API_CFN, MON_HEAT_API_CLOUDWATCH, MON_HORIZON,
    MON_HORIZON_SSL, MON_KEYSTONE_ADMIN, MON_ELASTICSEARCH, MON_KIBANA, MON_KIBANA_SSL,
    MON_NOVA_API_METADATA, MON_NOVA_SPICE_CONSOLE, MON_REPO,
};

const PRIORITY: ServiceFlags = ServiceFlags {
    requires_priority_weighting: true,
    ..ServiceFlags::NONE
};

/// Public API endpoint offloaded on the public side, backends told the original scheme.
const PUBLIC_API: ServiceFlags = ServiceFlags {
    exposed_publicly: true,
    injects_forwarded_proto_header: true,
    ..ServiceFlags::NONE
};

const fn api(key: &'static str, port: u16, group: &'static str) -> ServiceEntry {
    ServiceEntry {
        key,
        port,
        backend_port: port,
        monitor: EXTERNAL_ENDPOINT,
        group,
        flags: PUBLIC_API,
    }
}

/// Every service the generator publishes.
pub static SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        key: "galera",
        port: 3306,
        backend_port: 3306,
        monitor: MON_GALERA,
        group: "galera",
        flags: PRIORITY,
    },
    api("glance_api", 9292, "glance_api"),
    ServiceEntry {
        key: "glance_registry",
        port: 9191,
        backend_port: 9191,
        monitor: EXTERNAL_ENDPOINT,
        group: "glance_registry",
        flags: ServiceFlags::NONE,
    },
    ServiceEntry {
        monitor: MON_HEAT_API_CFN,
        ..api("heat_api_cfn", 8000, "heat_api_cfn")
    },
    ServiceEntry {
        monitor: MON_HEAT_API_CLOUDWATCH,
        ..api("heat_api_cloudwatch", 8003, "heat_api_cloudwatch")
    },
    api("heat_api", 8004, "heat_api"),
    ServiceEntry {
        key: "keystone_admin",
        port: 35357,
        backend_port: 35357,
        monitor: MON_KEYSTONE_ADMIN,
        group: "keystone",
        flags: ServiceFlags::NONE,
    },
    api("keystone_service", 5000, "keystone"),
    api("neutron_server", 9696, "neutron_server"),
    ServiceEntry {
        key: "nova_api_metadata",
        port: 8775,
        backend_port: 8775,
        monitor: MON_NOVA_API_METADATA,
        group: "nova_api_metadata",
        flags: ServiceFlags::NONE,
    },
    api("nova_api_os_compute", 8774, "nova_api_os_compute"),
    ServiceEntry {
        key: "nova_spice_console",
        port: 6082,
        backend_port: 6082,
        monitor: MON_NOVA_SPICE_CONSOLE,
        group: "nova_console",
        flags: ServiceFlags {
            exposed_publicly: true,
            uses_session_persistence: true,
            tls_offload_impossible: true,
            ..ServiceFlags::NONE
        },
    },
    api("cinder_api", 8776, "cinder_api"),
    ServiceEntry {
        key: "horizon",
        port: 80,
        backend_port: 80,
        monitor: MON_HORIZON,
        group: "horizon",
        flags: ServiceFlags::NONE,
    },
    ServiceEntry {
        key: "horizon_ssl",
        port: 443,
        backend_port: 443,
        monitor: MON_HORIZON_SSL,
        group: "horizon",
        flags: ServiceFlags {
            exposed_publicly: true,
            uses_session_persistence: true,
            backend_speaks_tls: true,
            ..ServiceFlags::NONE
        },
    },
    ServiceEntry {
        key: "elasticsearch",
        port: 9200,
        backend_port: 9200,
        monitor: MON_ELASTICSEARCH,
        group: "elasticsearch",
        flags: ServiceFlags::NONE,
    },
    ServiceEntry {
        key: "kibana",
        port: 8888,
        backend_port: 80,
        monitor: MON_KIBANA,
        group: "kibana",
        flags: PRIORITY,
    },
    ServiceEntry {
        key: "kibana_ssl",
        port: 8443,
        backend_port: 8443,
        monitor: MON_KIBANA_SSL,
        group: "kibana",
        flags: ServiceFlags {
            requires_priority_weighting: true,
            exposed_publicly: true,
            uses_session_persistence: true,
            backend_speaks_tls: true,
            ..ServiceFlags::NONE
        },
    },
    api("swift", 8080, "swift_proxy"),
    ServiceEntry {
        key: "repo",
        port: 8181,
        backend_port: 8181,
        monitor: MON_REPO,
        group: "pkg_repo",
        flags: PRIORITY,
    },
];

/// Front-end ports of every service, sorted and unique.
pub fn front_end_ports(catalog: &[ServiceEntry]) -> Vec<u16> {
    let mut ports: Vec<u16> = catalog.iter().map(|entry| entry.port).collect();
    ports.sort_unstable();
    ports.dedup();
    ports
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
    use crate::catalog::monitors;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = SERVICES.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), SERVICES.len());
    }

    #[test]
    fn every_monitor_is_declared() {
        for service in SERVICES {
            assert!(
                monitors::is_declared(service.monitor),
                "{} references undeclared monitor {}",
                service.key,
                service.monitor
            );
        }
    }

    #[test]
    fn flags_are_consistent() {
        for service in SERVICES {
            let flags = service.flags;
            if flags.tls_offload_impossible || flags.backend_speaks_tls {
                assert!(flags.exposed_publicly, "{} is not public", service.key);
            }
            assert!(
                !(flags.tls_offload_impossible && flags.backend_speaks_tls),
                "{} cannot be both pass-through and re-encrypted",
                service.key
            );
            if flags.injects_forwarded_proto_header {
                assert!(!flags.tls_offload_impossible && !flags.backend_speaks_tls);
            }
        }
    }

    #[test]
    fn kibana_maps_to_backend_port_80() {
        let kibana = SERVICES.iter().find(|s| s.key == "kibana").unwrap();
        assert_eq!((kibana.port, kibana.backend_port), (8888, 80));
    }

    #[test]
    fn test_front_end_ports() {
        let ports = front_end_ports(SERVICES);
        assert_eq!(ports.first(), Some(&80));
        assert_eq!(ports.last(), Some(&35357));
        assert_eq!(ports.len(), SERVICES.len());
        assert!(ports.windows(2).all(|w| w[0] < w[1]));
        assert!(!ports.contains(&3307));
    }
}
