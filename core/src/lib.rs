//! # ltmgen core
//!
//! Turns an inventory and a [`RunConfig`](ltmgen_common::config::RunConfig) into an
//! ordered load-balancer configuration script.
//!
//! * [`resolver`]: group name → hosts, through nested child groups.
//! * [`binder`]: service catalog × inventory → bound topology.
//! * [`synth`]: bound topology → nodes, pools, virtual servers, SNAT, security objects.
//! * [`assembler`]: objects → ordered script sections.
//! * [`generator`]: the pipeline and the [`Generator`] service over the [`ports`].

pub mod assembler;
pub mod binder;
pub mod catalog;
pub mod generator;
pub mod ports;
pub mod resolver;
pub mod synth;

pub use generator::{Generated, Generator, Report, generate};
