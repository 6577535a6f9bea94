//! Quiz engine errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};

use super::{Archetype, Dimension};

/// Errors raised by the aggregator, the classifier and reference-data checks.
///
/// The first group is per-attempt; the second group describes broken
/// reference data and is only ever produced at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    #[error("Response for question {question_id} has value {value}, expected {min}..={max}")]
    InvalidResponseValue {
        question_id: QuestionId,
        value: i32,
        min: u8,
        max: u8,
    },

    #[error("Question {question_id} was answered more than once")]
    DuplicateResponse { question_id: QuestionId },

    #[error("No dimension could be scored from the supplied responses")]
    IncompleteInput,

    #[error("Question catalog is empty")]
    EmptyCatalog,

    #[error("Question {question_id} appears more than once in the catalog")]
    DuplicateQuestion { question_id: QuestionId },

    #[error("Archetype profile table is empty")]
    EmptyProfileTable,

    #[error("Archetype {archetype} has more than one profile")]
    DuplicateProfile { archetype: Archetype },

    #[error("Archetype {archetype} defines no target dimensions")]
    EmptyProfile { archetype: Archetype },

    #[error("Archetype {archetype} targets {dimension} at {target}, outside the response scale")]
    TargetOutOfScale {
        archetype: Archetype,
        dimension: Dimension,
        target: f64,
    },

    #[error("Hybrid threshold {0} must lie strictly between 0 and 1")]
    InvalidHybridThreshold(f64),
}

impl QuizError {
    /// Returns true for errors that indicate broken reference data or setup.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            QuizError::EmptyCatalog
                | QuizError::DuplicateQuestion { .. }
                | QuizError::EmptyProfileTable
                | QuizError::DuplicateProfile { .. }
                | QuizError::EmptyProfile { .. }
                | QuizError::TargetOutOfScale { .. }
                | QuizError::InvalidHybridThreshold(_)
        )
    }

    fn code(&self) -> ErrorCode {
        match self {
            QuizError::InvalidResponseValue { .. } => ErrorCode::InvalidResponseValue,
            QuizError::DuplicateResponse { .. } => ErrorCode::DuplicateResponse,
            QuizError::IncompleteInput => ErrorCode::IncompleteInput,
            _ => ErrorCode::InvalidReferenceData,
        }
    }
}

impl From<QuizError> for DomainError {
    fn from(err: QuizError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            QuizError::InvalidResponseValue {
                question_id, value, ..
            } => domain
                .with_detail("question_id", question_id.to_string())
                .with_detail("value", value.to_string()),
            QuizError::DuplicateResponse { question_id } => {
                domain.with_detail("question_id", question_id.to_string())
            }
            _ => domain,
        }
    }
}
