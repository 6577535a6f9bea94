//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quiz;

pub use quiz::{
    AttemptSummary, CompleteAttemptCommand, CompleteAttemptHandler, CompleteAttemptResult,
};
