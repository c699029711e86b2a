use ltmgen_common::naming;

pub const MON_GALERA: &str = "RPC_MON_GALERA";
pub const MON_KEYSTONE_ADMIN: &str = "RPC_MON_HTTP_KEYSTONE_ADMIN";
pub const MON_NOVA_API_METADATA: &str = "RPC_MON_HTTP_NOVA_API_METADATA";
pub const MON_HORIZON: &str = "RPC_MON_HTTP_HORIZON";
pub const MON_NOVA_SPICE_CONSOLE: &str = "RPC_MON_HTTP_NOVA_SPICE_CONSOLE";
pub const MON_HORIZON_SSL: &str = "RPC_MON_HTTPS_HORIZON_SSL";
pub const MON_NOVA_SPICE_CONSOLE_SSL: &str = "RPC_MON_HTTPS_NOVA_SPICE_CONSOLE";
pub const MON_HEAT_API_CFN: &str = "RPC_MON_TCP_HEAT_API_CFN";
pub const MON_HEAT_API_CLOUDWATCH: &str = "RPC_MON_TCP_HEAT_API_CLOUDWATCH";
pub const MON_KIBANA: &str = "RPC_MON_TCP_KIBANA";
pub const MON_KIBANA_SSL: &str = "RPC_MON_TCP_KIBANA_SSL";
pub const MON_ELASTICSEARCH: &str = "RPC_MON_TCP_ELASTICSEARCH";
pub const MON_REPO: &str = "RPC_MON_HTTP_REPO";

/// Uploaded as a script during the setup section, see [`EXTERNAL_MONITOR_SOURCE`].
pub const EXTERNAL_ENDPOINT: &str = naming::EXTERNAL_MONITOR;

pub const EXTERNAL_MONITOR_SOURCE: &str =
    "https://raw.githubusercontent.com/dpham-rs/rpc-openstack/master/scripts/f5-monitor-liberty.sh";

struct MonitorDef {
    name: &'static str,
    kind: &'static str,
    body: &'static str,
}

const fn http(name: &'static str, body: &'static str) -> MonitorDef {
    MonitorDef {
        name,
        kind: "http",
        body,
    }
}

const fn tcp(name: &'static str, body: &'static str) -> MonitorDef {
    MonitorDef {
        name,
        kind: "tcp",
        body,
    }
}

// Everything except the galera monitor, whose username is a run option.
static MONITORS: &[MonitorDef] = &[
    http(
        MON_KEYSTONE_ADMIN,
        r#"defaults-from http destination *:35357 recv "200 OK" send "HEAD /v3 HTTP/1.1\r\nHost: rpc\r\n\r\n""#,
    ),
    http(
        MON_NOVA_API_METADATA,
        r#"defaults-from http destination *:8775 recv "200 OK" send "HEAD / HTTP/1.1\r\nHost: rpc\r\n\r\n""#,
    ),
    http(
        MON_HORIZON,
        r#"defaults-from http destination *:80 recv "302 Found" send "HEAD /auth/login/ HTTP/1.1\r\nHost: rpc\r\n\r\n""#,
    ),
    http(
        MON_NOVA_SPICE_CONSOLE,
        r#"defaults-from http destination *:6082 recv "200 OK" send "HEAD /spice_auto.html HTTP/1.1\r\nHost: rpc\r\n\r\n""#,
    ),
    MonitorDef {
        name: MON_HORIZON_SSL,
        kind: "https",
        body: r#"defaults-from https destination *:443 recv "200 OK" send "HEAD /auth/login/ HTTP/1.1\r\nHost: rpc\r\n\r\n""#,
    },
    MonitorDef {
        name: MON_NOVA_SPICE_CONSOLE_SSL,
        kind: "https",
        body: r#"defaults-from https destination *:6082 recv "200 OK" send "HEAD / HTTP/1.1\r\nHost: rpc\r\n\r\n""#,
    },
    tcp(MON_HEAT_API_CFN, "defaults-from tcp destination *:8000"),
    tcp(MON_HEAT_API_CLOUDWATCH, "defaults-from tcp destination *:8003"),
    tcp(MON_KIBANA, "defaults-from tcp destination *:80"),
    tcp(MON_KIBANA_SSL, "defaults-from tcp destination *:8443"),
    tcp(MON_ELASTICSEARCH, "defaults-from tcp destination *:9200"),
    http(
        MON_REPO,
        r#"defaults-from http destination *:8181 recv "200 OK" send "HEAD / HTTP/1.1\r\nHost: rpc\r\n\r\n""#,
    ),
];

/// Whether `name` is created by the script before any pool references it.
pub fn is_declared(name: &str) -> bool {
    name == MON_GALERA || name == EXTERNAL_ENDPOINT || MONITORS.iter().any(|m| m.name == name)
}

/// Monitor declarations, galera first.
pub fn render(galera_user: &str) -> Vec<String> {
    let galera = format!(
        "create ltm monitor mysql {} {{ count 1 database information_schema debug no \
         defaults-from mysql destination *:* interval 3 recv big5_chinese_ci recv-column 2 \
         recv-row 0 send \"select * from CHARACTER_SETS;\" time-until-up 0 timeout 10 \
         username {galera_user} }}",
        naming::path(MON_GALERA)
    );

    std::iter::once(galera)
        .chain(MONITORS.iter().map(|m| {
            format!(
                "create ltm monitor {} {} {{ {} }}",
                m.kind,
                naming::path(m.name),
                m.body
            )
        }))
        .collect()
}

/// Commands that upload and register the external endpoint monitor.
pub fn external_monitor_setup() -> Vec<String> {
    let path = naming::path(EXTERNAL_ENDPOINT);
    let file = format!("/config/monitors/{EXTERNAL_ENDPOINT}.monitor");
    vec![
        "   --> Upload External monitor file to disk <--".to_string(),
        "       run util bash".to_string(),
        format!("       curl -k -o {file} {EXTERNAL_MONITOR_SOURCE}"),
        "       exit".to_string(),
        format!("       create sys file external-monitor {path} {{ source-path file://{file} }}"),
        "       save sys config".to_string(),
        format!("       create ltm monitor external {path} {{ interval 20 timeout 61 run {path} }}"),
    ]
}
