//! # Generation Pipeline
//!
//! [`generate`] is the whole run as a pure function: validate the options, read the
//! global inventory variables, bind the catalog, synthesize, assemble. Nothing is
//! written anywhere; a failure at any step yields no script at all.
//!
//! [`Generator`] is the application service around it. It pulls the inventory from an
//! [`InventorySource`] and hands the finished script to every [`ScriptSink`].

use ltmgen_common::config::RunConfig;
use ltmgen_common::error::{GenerateError, ResolutionWarning};
use ltmgen_common::inventory::Inventory;
use ltmgen_common::service::ServiceEntry;
use tracing::{debug, info};

use crate::assembler::{self, Script};
use crate::binder;
use crate::catalog::SERVICES;
use crate::ports::{InventorySource, ScriptSink};
use crate::synth::{self, Synthesis};

/// Object counts of a run and the diagnostics gathered on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub nodes: usize,
    pub pools: usize,
    pub internal_virtuals: usize,
    pub public_ssl_virtuals: usize,
    pub public_passthrough_virtuals: usize,
    pub warnings: Vec<ResolutionWarning>,
}

impl Report {
    fn new(synthesis: &Synthesis, warnings: Vec<ResolutionWarning>) -> Self {
        Self {
            nodes: synthesis.nodes.len(),
            pools: synthesis.pools.len(),
            internal_virtuals: synthesis.internal_virtuals.len(),
            public_ssl_virtuals: synthesis.public_ssl_virtuals.len(),
            public_passthrough_virtuals: synthesis.public_passthrough_virtuals.len(),
            warnings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub script: Script,
    pub report: Report,
}

/// Runs the pipeline against the built-in service catalog.
pub fn generate(inventory: &Inventory, cfg: &RunConfig) -> Result<Generated, GenerateError> {
    generate_with(SERVICES, inventory, cfg)
}

pub fn generate_with(
    catalog: &[ServiceEntry],
    inventory: &Inventory,
    cfg: &RunConfig,
) -> Result<Generated, GenerateError> {
    cfg.validate()?;
    let vars = inventory.vars()?;

    let topology = binder::bind(catalog, inventory)?;
    debug!(services = topology.services.len(), "topology bound");

    let synthesis = synth::synthesize(&topology, cfg, &vars)?;
    let script = assembler::assemble(&synthesis, cfg);

    Ok(Generated {
        script,
        report: Report::new(&synthesis, topology.warnings),
    })
}

pub struct Generator {
    source: Box<dyn InventorySource>,
    sinks: Vec<Box<dyn ScriptSink>>,
}

impl Generator {
    pub fn new(source: Box<dyn InventorySource>) -> Self {
        Self {
            source,
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn ScriptSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn run(&mut self, cfg: &RunConfig) -> anyhow::Result<Report> {
        let inventory = self.source.load()?;
        let generated = generate(&inventory, cfg)?;

        for sink in self.sinks.iter_mut() {
            sink.emit(&generated.script)?;
        }

        info!(
            sections = generated.script.sections().len(),
            "script generated"
        );
        Ok(generated.report)
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
