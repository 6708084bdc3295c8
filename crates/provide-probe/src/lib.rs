#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod probe;
pub mod registry;
pub mod version;

pub use probe::DefaultProbe;
pub use registry::default_registry;
