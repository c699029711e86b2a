//! # ltmgen common
//!
//! Shared domain models for the load-balancer script generator.
//!
//! * **[`inventory`]**: the deserialized group/host inventory tree.
//! * **[`service`]**: hosts and service catalog entries.
//! * **[`topology`]**: services bound to their resolved hosts.
//! * **[`config`]**: the per-run options and their validation.
//! * **[`naming`]**: partition paths and object names derived from service keys and hosts.
//! * **[`network`]**: address, address-list and CIDR option parsing, and SNAT address derivation.
//! * **[`error`]**: error and diagnostic types.

pub mod config;
pub mod error;
pub mod inventory;
pub mod naming;
pub mod network;
pub mod service;
pub mod topology;
