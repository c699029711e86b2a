//! End-to-end scenarios over the public `ltmgen-core` API, driven by
//! `serde_json::json!` inventories and the built-in service catalog.

#[cfg(test)]
mod fixtures;
mod pipeline;
