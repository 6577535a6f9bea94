//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReferenceDataSource` - Supplies the question catalog and archetype
//!   profile table at process start

mod reference_data_source;

pub use reference_data_source::{ReferenceDataError, ReferenceDataSource};
