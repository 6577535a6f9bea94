//! Reference data adapters.

mod builtin;
mod yaml_file;

pub use builtin::BuiltinReferenceData;
pub use yaml_file::YamlReferenceData;
