//! # Adapters
//!
//! Concrete implementations of the core's ports for a command line run.
//!
//! * [`inventory_file`]: locates and parses the JSON inventory ([`InventorySource`](ltmgen_core::ports::InventorySource)).
//! * [`export`]: writes the script to a file or the console ([`ScriptSink`](ltmgen_core::ports::ScriptSink)).

pub mod export;
pub mod inventory_file;
