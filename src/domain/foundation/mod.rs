//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the archetype engine.

mod errors;
mod ids;
mod likert;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AttemptId, QuestionId};
pub use likert::LikertScale;
