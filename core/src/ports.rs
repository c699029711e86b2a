//! # Ports
//!
//! The boundaries between the generator and the outside world.
//!
//! * [`InventorySource`]: where the inventory document comes from (a file, a fixture).
//! * [`ScriptSink`]: where a finished script goes (an export file, the console).
//!
//! The generator only ever talks to these traits; the CLI supplies the adapters.

use ltmgen_common::inventory::Inventory;

use crate::assembler::Script;

pub trait InventorySource {
    fn load(&self) -> anyhow::Result<Inventory>;
}

pub trait ScriptSink {
    /// Receives a complete script. Never called for a failed run.
    fn emit(&mut self, script: &Script) -> anyhow::Result<()>;
}

/// An inventory that is already in memory.
impl InventorySource for Inventory {
    fn load(&self) -> anyhow::Result<Inventory> {
        Ok(self.clone())
    }
}

