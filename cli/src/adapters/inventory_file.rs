use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use ltmgen_common::inventory::Inventory;
use ltmgen_core::ports::InventorySource;
use tracing::{debug, info};

pub const SYSTEM_DEPLOY_DIR: &str = "/etc/openstack_deploy";
pub const USER_DEPLOY_DIR: &str = "openstack_deploy";

/// Expands a leading `~` to `$HOME`. Anything else is returned as is.
pub fn expand_home(path: &str) -> PathBuf {
    expand_home_with(path, home_dir().as_deref())
}

fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_path_buf(),
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Every place the inventory is looked for, in order.
pub fn candidates(file: &str) -> Vec<PathBuf> {
    candidates_with(file, home_dir().as_deref())
}

fn candidates_with(file: &str, home: Option<&Path>) -> Vec<PathBuf> {
    let name: &Path = Path::new(file).file_name().map(Path::new).unwrap_or(Path::new(file));

    let mut paths: Vec<PathBuf> = vec![
        expand_home_with(file, home),
        Path::new(SYSTEM_DEPLOY_DIR).join(name),
    ];
    if let Some(home) = home {
        paths.push(home.join(USER_DEPLOY_DIR).join(name));
    }
    paths.push(Path::new(".").join(name));

    paths.dedup();
    paths
}

/// First existing candidate for `file`.
pub fn file_find(file: &str) -> anyhow::Result<PathBuf> {
    find_in(candidates(file))
}

fn find_in(paths: Vec<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(found) = paths.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }

    let tried: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    bail!("inventory file not found, tried: {}", tried.join(", "))
}

/// The JSON inventory produced by the deployment tooling.
#[derive(Debug, Clone)]
pub struct JsonInventoryFile {
    path: PathBuf,
}

impl JsonInventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn locate(file: &str) -> anyhow::Result<Self> {
        let path = file_find(file)?;
        info!("using inventory {}", path.display());
        Ok(Self::new(path))
    }
}

impl InventorySource for JsonInventoryFile {
    fn load(&self) -> anyhow::Result<Inventory> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read inventory {}", self.path.display()))?;

        let inventory: Inventory = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse inventory {}", self.path.display()))?;

        debug!(groups = inventory.groups.len(), "inventory loaded");
        Ok(inventory)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
