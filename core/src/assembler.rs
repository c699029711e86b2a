//! # Script Assembler
//!
//! Lays the synthesized objects out in the order the device must replay them.
//! Later sections reference names declared in earlier ones (virtual servers use
//! pools and profiles, pools use nodes and monitors), so the order below is fixed:
//!
//! partition → display settings → SNAT → monitors → setup (discard rule, header
//! profile, external monitor) → certificates and SSL profiles → persistence profiles
//! → nodes → pools → internal VS → public SSL VS → public pass-through VS →
//! isolation VS → AFM rules → save and sync.

use ltmgen_common::config::RunConfig;
use ltmgen_common::naming;

use crate::catalog::{monitors, profiles};
use crate::synth::Synthesis;

pub const SHEBANG: &str = "#!/usr/bin/bash";
pub const TITLE: &str = "### F5 Build Script ###";

pub const CLOSING_COMMANDS: &[&str] = &["save sys config", "run cm config-sync to-group SYNC-FAILOVER"];

/// A titled block of directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: &'static str, lines: Vec<String>) -> Self {
        Self { title, lines }
    }

    pub fn banner(&self) -> String {
        format!("### {} ###", self.title)
    }
}

/// The complete, ordered replacement script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    sections: Vec<Section>,
}

impl Script {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Every line of the script: header, then each section's banner and directives,
    /// sections separated by a blank line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = vec![SHEBANG.to_string(), TITLE.to_string()];
        for section in &self.sections {
            lines.push(String::new());
            lines.push(section.banner());
            lines.extend(section.lines.iter().cloned());
        }
        lines
    }

    /// The script as one newline-joined text, terminated by a newline.
    pub fn render(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }
}

pub mod titles {
    pub const PARTITION: &str = "CREATE RPC PARTITION";
    pub const DISPLAY: &str = "SET DISPLAY PORT NUMBERS";
    pub const SNAT: &str = "CREATE SNATPOOL";
    pub const MONITORS: &str = "CREATE MONITORS";
    pub const DISCARD_RULE: &str = "CREATE SECURITY iRULE";
    pub const HTTP_PROFILE: &str = "CREATE HTTP PROFILE";
    pub const EXTERNAL_MONITOR: &str = "CREATE EXTERNAL MONITOR";
    pub const CERTIFICATE: &str = "UPLOAD SSL CERT KEY PAIR";
    pub const SSL_PROFILES: &str = "CREATE SSL PROFILES";
    pub const PERSISTENCE: &str = "CREATE PERSISTENCE PROFILES";
    pub const NODES: &str = "CREATE NODES";
    pub const POOLS: &str = "CREATE POOLS";
    pub const VIRTUALS: &str = "CREATE VIRTUAL SERVERS";
    pub const PUBLIC_SSL: &str = "CREATE PUBLIC SSL OFFLOADED VIRTUAL SERVERS";
    pub const PUBLIC_PASSTHROUGH: &str = "CREATE PUBLIC SSL PASS-THROUGH VIRTUAL SERVERS";
    pub const ISOLATION: &str = "CREATE NETWORK ISOLATION VIRTUAL SERVERS";
    pub const AFM: &str = "CREATE AFM LIST AND RULES";
    pub const CLOSING: &str = "SAVE AND SYNC CONFIGURATION";
}

fn render_all<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub fn assemble(synthesis: &Synthesis, cfg: &RunConfig) -> Script {
    let mut sections: Vec<Section> = vec![
        Section::new(
            titles::PARTITION,
            vec![format!("create auth partition {}", naming::PARTITION)],
        ),
        Section::new(
            titles::DISPLAY,
            vec!["modify cli global-settings service number".to_string()],
        ),
        Section::new(titles::SNAT, synthesis.snat.render()),
        Section::new(titles::MONITORS, monitors::render(&cfg.galera_monitor_user)),
        Section::new(titles::DISCARD_RULE, profiles::discard_rule()),
        Section::new(titles::HTTP_PROFILE, vec![profiles::forwarded_proto_profile()]),
        Section::new(titles::EXTERNAL_MONITOR, monitors::external_monitor_setup()),
    ];

    if let Some(domain) = cfg.domain_name() {
        sections.push(Section::new(titles::CERTIFICATE, profiles::certificate(domain)));
        sections.push(Section::new(titles::SSL_PROFILES, profiles::ssl_profiles(domain)));
    }

    sections.extend([
        Section::new(
            titles::PERSISTENCE,
            profiles::PERSISTENCE_PROFILES
                .iter()
                .map(profiles::PersistenceProfile::render)
                .collect(),
        ),
        Section::new(titles::NODES, render_all(&synthesis.nodes)),
        Section::new(titles::POOLS, render_all(&synthesis.pools)),
        Section::new(titles::VIRTUALS, render_all(&synthesis.internal_virtuals)),
        Section::new(titles::PUBLIC_SSL, render_all(&synthesis.public_ssl_virtuals)),
        Section::new(
            titles::PUBLIC_PASSTHROUGH,
            render_all(&synthesis.public_passthrough_virtuals),
        ),
    ]);

    if !synthesis.isolation.is_empty() {
        sections.push(Section::new(titles::ISOLATION, render_all(&synthesis.isolation)));
    }

    if let Some(afm) = &synthesis.afm {
        sections.push(Section::new(titles::AFM, afm.render()));
    }

    sections.push(Section::new(
        titles::CLOSING,
        CLOSING_COMMANDS.iter().map(|c| c.to_string()).collect(),
    ));

    Script { sections }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
