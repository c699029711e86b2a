//! # Static Catalogs
//!
//! Fixed data the generator works from: the exposed services, the health monitors
//! they reference and the persistence profiles. None of it is mutated at runtime.

pub mod monitors;
pub mod profiles;
pub mod services;

pub use services::SERVICES;
