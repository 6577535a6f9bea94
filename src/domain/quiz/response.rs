//! Raw questionnaire answers and the policies applied to them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// One answer as collected by the caller. The value is unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub value: i32,
}

impl Response {
    pub fn new(question_id: impl Into<QuestionId>, value: i32) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// What to do with an answer whose value falls outside the scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidValuePolicy {
    /// Drop the entry and report it as skipped.
    #[default]
    Skip,
    /// Fail the whole batch.
    Reject,
}

/// What to do when one attempt answers the same question more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The latest answer replaces earlier ones.
    #[default]
    LastWriteWins,
    /// Fail the whole batch.
    Reject,
    /// Every answer counts. Double-weights the repeated question's dimension.
    Accumulate,
}

/// Why an individual response did not contribute to aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnknownQuestion,
    InvalidResponseValue,
    Superseded,
}

/// A response that aggregation dropped, kept for data-quality reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedResponse {
    pub question_id: QuestionId,
    pub value: i32,
    pub reason: SkipReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_deserializes_from_json() {
        let response: Response =
            serde_json::from_str(r#"{"question_id": 7, "value": 5}"#).unwrap();
        assert_eq!(response, Response::new(7, 5));
    }

    #[test]
    fn policies_default_to_skip_and_last_write_wins() {
        assert_eq!(InvalidValuePolicy::default(), InvalidValuePolicy::Skip);
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::LastWriteWins);
    }

    #[test]
    fn policies_deserialize_from_snake_case() {
        let dup: DuplicatePolicy = serde_json::from_str("\"last_write_wins\"").unwrap();
        assert_eq!(dup, DuplicatePolicy::LastWriteWins);
        let invalid: InvalidValuePolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(invalid, InvalidValuePolicy::Reject);
    }

    #[test]
    fn skip_reason_serializes_as_snake_case() {
        let json = serde_json::to_string(&SkipReason::UnknownQuestion).unwrap();
        assert_eq!(json, "\"unknown_question\"");
    }
}
