//! ReferenceDataSource port for loading the question catalog and profiles.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::quiz::{QuizError, ReferenceData};

/// Errors that can occur while loading reference data.
///
/// All of them are fatal at startup; none is raised per request.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Reference data not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse reference data: {0}")]
    Parse(String),

    #[error("Invalid reference data: {0}")]
    Invalid(#[from] QuizError),
}

impl From<ReferenceDataError> for DomainError {
    fn from(err: ReferenceDataError) -> Self {
        let code = match err {
            ReferenceDataError::Invalid(_) | ReferenceDataError::Parse(_) => {
                ErrorCode::InvalidReferenceData
            }
            ReferenceDataError::NotFound(_) | ReferenceDataError::Io(_) => {
                ErrorCode::ReferenceDataUnavailable
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// Supplies the validated reference data the engine runs against.
#[async_trait]
pub trait ReferenceDataSource: Send + Sync {
    /// Load and validate the full reference data bundle.
    async fn load(&self) -> Result<ReferenceData, ReferenceDataError>;

    /// Human-readable description of where the data comes from.
    fn describe(&self) -> String;
}
