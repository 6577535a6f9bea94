//! Compiled-in reference data adapter.

use async_trait::async_trait;

use crate::domain::quiz::{ReferenceData, BUILTIN_VERSION};
use crate::ports::{ReferenceDataError, ReferenceDataSource};

/// Serves the reference tables compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinReferenceData;

impl BuiltinReferenceData {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReferenceDataSource for BuiltinReferenceData {
    async fn load(&self) -> Result<ReferenceData, ReferenceDataError> {
        Ok(ReferenceData::builtin()?.clone())
    }

    fn describe(&self) -> String {
        format!("built-in reference data ({})", BUILTIN_VERSION)
    }
}
