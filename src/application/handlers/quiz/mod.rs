//! Quiz handlers.

mod complete_attempt;

pub use complete_attempt::{
    AttemptSummary, CompleteAttemptCommand, CompleteAttemptHandler, CompleteAttemptResult,
};
