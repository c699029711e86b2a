use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use ltmgen_core::assembler::Script;
use ltmgen_core::ports::ScriptSink;
use tracing::info;

/// Writes the script to a file, replacing whatever was there.
#[derive(Debug, Clone)]
pub struct FileExport {
    path: PathBuf,
}

impl FileExport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScriptSink for FileExport {
    fn emit(&mut self, script: &Script) -> anyhow::Result<()> {
        fs::write(&self.path, script.render())
            .with_context(|| format!("failed to write script to {}", self.path.display()))?;

        info!("script exported to {}", self.path.display());
        Ok(())
    }
}

/// Echoes every script line to stdout.
pub struct ConsoleEcho<W: Write = std::io::Stdout> {
    out: W,
}

impl ConsoleEcho {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

#[cfg(test)]
impl<W: Write> ConsoleEcho<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ScriptSink for ConsoleEcho<W> {
    fn emit(&mut self, script: &Script) -> anyhow::Result<()> {
        for line in script.lines() {
            writeln!(self.out, "{line}").context("failed to echo script")?;
        }
        self.out.flush().context("failed to echo script")?;
        Ok(())
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
