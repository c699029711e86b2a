//! Advanced Firewall Module rule set.
//!
//! Opens the VIP ports on the public and internal addresses and drops traffic from
//! the gateway network toward the host network. The rules are inserted into the
//! device's global policy relative to rules that already exist there.

use std::net::IpAddr;

use pnet::ipnetwork::Ipv4Network;

const PORT_LIST: &str = "RPC_VIP_PORTS";
const PUBLIC_ALLOW: &str = "RPC_PUB_VIP_ALLOW_IPS";
const PRIVATE_ALLOW: &str = "RPC_PRI_VIP_ALLOW_IPS";
const HOST_NET_LIST: &str = "RPC-HOST-NET";
const PUBLIC_RULELIST: &str = "RPC_PUB_VIP_RULELIST";
const PRIVATE_RULELIST: &str = "RPC_PRI_VIP_RULELIST";
const SECURITY_RULES: &str = "RPC_SECURITY_RULES";
const GLOBAL_POLICY: &str = "GLOBAL-POLICY";
const GATEWAY_VLAN: &str = "RPC_GATEWAY_NET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfmRules {
    pub public_ip: IpAddr,
    pub private_ip: IpAddr,
    pub host_network: Ipv4Network,
    pub ports: Vec<u16>,
}

impl AfmRules {
    pub fn render(&self) -> Vec<String> {
        let ports: String = self
            .ports
            .iter()
            .map(|port| format!("{port} {{ }}"))
            .collect::<Vec<String>>()
            .join(" ");

        vec![
            format!("create security firewall port-list {PORT_LIST} {{ ports add {{ {ports} }} }}"),
            format!("create security firewall address-list {PUBLIC_ALLOW} {{ addresses add {{ 0.0.0.0/0 }} }}"),
            format!("create security firewall address-list {PRIVATE_ALLOW} {{ addresses add {{ 0.0.0.0/0 }} }}"),
            format!(
                "create security firewall address-list {HOST_NET_LIST} {{ addresses replace-all-with {{ {} {{ }} }} }}",
                self.host_network
            ),
            allow_rule_list(PUBLIC_RULELIST, "RPC_PUB_VIP_ALLOW", PUBLIC_ALLOW, self.public_ip),
            allow_rule_list(PRIVATE_RULELIST, "RPC_PRI_VIP_ALLOW", PRIVATE_ALLOW, self.private_ip),
            format!(
                "create security firewall rule-list {SECURITY_RULES} rules add {{ RPC_PROTECT_HOST \
                 {{ action drop source {{ vlans add {{ {GATEWAY_VLAN} }} }} destination \
                 {{ address-lists replace-all-with {{ {HOST_NET_LIST} }} }} place-before first }} }}"
            ),
            format!(
                "modify security firewall policy {GLOBAL_POLICY} rules add {{ RPC_PUB_VIP_RULE \
                 {{ rule-list {PUBLIC_RULELIST} place-after RACKNEST }} }}"
            ),
            format!(
                "modify security firewall policy {GLOBAL_POLICY} rules add {{ RPC_PRI_VIP_RULE \
                 {{ rule-list {PRIVATE_RULELIST} place-after RACKNEST }} }}"
            ),
            format!(
                "modify security firewall policy {GLOBAL_POLICY} rules add {{ RPC_SECURITY \
                 {{ place-after ICMP-ALLOW rule-list {SECURITY_RULES} }} }}"
            ),
        ]
    }
}

fn allow_rule_list(list: &str, rule: &str, sources: &str, destination: IpAddr) -> String {
    format!(
        "create security firewall rule-list {list} {{ rules replace-all-with {{ {rule} \
         {{ action accept-decisively ip-protocol tcp source {{ address-lists replace-all-with \
         {{ {sources} }} }} destination {{ addresses replace-all-with {{ {destination} {{ }} }} \
         port-lists replace-all-with {{ {PORT_LIST} }} }} }} }} }}"
    )
}
