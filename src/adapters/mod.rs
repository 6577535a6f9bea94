//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `reference` - Reference data sources (compiled-in tables, YAML file)

pub mod reference;

pub use reference::{BuiltinReferenceData, YamlReferenceData};
