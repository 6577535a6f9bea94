//! Dimension Aggregator - Turns raw answers into one mean score per dimension.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::{LikertScale, QuestionId};

use super::{
    Dimension, DimensionScores, DuplicatePolicy, InvalidValuePolicy, Question, QuestionCatalog,
    QuizError, Response, SkipReason, SkippedResponse,
};

/// Outcome of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub scores: DimensionScores,
    pub skipped: Vec<SkippedResponse>,
}

impl Aggregation {
    /// Number of skipped entries with the given reason.
    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    /// True when no dimension received a contributing response.
    pub fn is_incomplete(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Pure aggregation over a question catalog.
///
/// The two policies decide what happens to malformed entries; both are
/// fixed when the aggregator is built so every call site states them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionAggregator {
    scale: LikertScale,
    invalid_values: InvalidValuePolicy,
    duplicates: DuplicatePolicy,
}

#[derive(Debug, Default)]
struct Accumulator {
    sum: f64,
    count: u32,
}

impl DimensionAggregator {
    pub fn new(
        scale: LikertScale,
        invalid_values: InvalidValuePolicy,
        duplicates: DuplicatePolicy,
    ) -> Self {
        Self {
            scale,
            invalid_values,
            duplicates,
        }
    }

    pub fn scale(&self) -> LikertScale {
        self.scale
    }

    /// Computes the mean polarity-adjusted score for each answered dimension.
    ///
    /// # Algorithm
    /// For each response: resolve the question, validate the value against
    /// the scale, apply polarity (`(min + max) - v` when reversed), resolve
    /// duplicates, then add to the dimension's running sum and count.
    /// Each dimension's score is `sum / count`.
    ///
    /// # Edge Cases
    /// - Unknown question id: skipped as `UnknownQuestion`
    /// - Out-of-scale value: skipped, or `Err(InvalidResponseValue)` under `Reject`
    /// - Repeated question id: resolved among valid answers only, so an
    ///   invalid retry never displaces an earlier valid answer
    /// - No contributing responses: empty scores, never zero-filled
    pub fn aggregate(
        &self,
        responses: &[Response],
        catalog: &QuestionCatalog,
    ) -> Result<Aggregation, QuizError> {
        let mut skipped = Vec::new();
        let mut accepted: Vec<Option<(Response, &Question, u8)>> =
            Vec::with_capacity(responses.len());
        let mut last_seen: HashMap<QuestionId, usize> = HashMap::new();

        for response in responses {
            let Some(question) = catalog.get(response.question_id) else {
                skipped.push(skip(response, SkipReason::UnknownQuestion));
                continue;
            };

            let value = match self.scale.validate(response.value) {
                Ok(value) => value,
                Err(_) => match self.invalid_values {
                    InvalidValuePolicy::Skip => {
                        skipped.push(skip(response, SkipReason::InvalidResponseValue));
                        continue;
                    }
                    InvalidValuePolicy::Reject => {
                        return Err(QuizError::InvalidResponseValue {
                            question_id: response.question_id,
                            value: response.value,
                            min: self.scale.min(),
                            max: self.scale.max(),
                        });
                    }
                },
            };

            match self.duplicates {
                DuplicatePolicy::Accumulate => {}
                DuplicatePolicy::Reject => {
                    if last_seen.contains_key(&response.question_id) {
                        return Err(QuizError::DuplicateResponse {
                            question_id: response.question_id,
                        });
                    }
                }
                DuplicatePolicy::LastWriteWins => {
                    if let Some(&index) = last_seen.get(&response.question_id) {
                        if let Some((earlier, _, _)) = accepted[index].take() {
                            skipped.push(skip(&earlier, SkipReason::Superseded));
                        }
                    }
                }
            }

            last_seen.insert(response.question_id, accepted.len());
            accepted.push(Some((*response, question, value)));
        }

        let mut totals: BTreeMap<Dimension, Accumulator> = BTreeMap::new();
        for (_, question, value) in accepted.into_iter().flatten() {
            let adjusted = question.polarity.apply(value, &self.scale);
            let entry = totals.entry(question.dimension).or_default();
            entry.sum += f64::from(adjusted);
            entry.count += 1;
        }

        let scores = totals
            .into_iter()
            .map(|(dimension, acc)| (dimension, acc.sum / f64::from(acc.count)))
            .collect();

        Ok(Aggregation { scores, skipped })
    }
}

fn skip(response: &Response, reason: SkipReason) -> SkippedResponse {
    SkippedResponse {
        question_id: response.question_id,
        value: response.value,
        reason,
    }
}
