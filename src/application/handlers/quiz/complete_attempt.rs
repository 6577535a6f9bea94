//! CompleteAttempt - Command handler that classifies a finished quiz attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::foundation::{AttemptId, DomainError};
use crate::domain::quiz::{
    Archetype, ArchetypeClassifier, ArchetypeDetails, ClassificationResult, DimensionAggregator,
    DimensionScores, ReferenceData, Response, SkipReason, SkippedResponse,
};

/// Command to classify every response collected for one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteAttemptCommand {
    pub attempt_id: AttemptId,
    pub responses: Vec<Response>,
}

/// The fields persisted on the attempt record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub archetype_result: Archetype,
    pub primary_score: f64,
    pub secondary_score: Option<f64>,
}

impl From<&ClassificationResult> for AttemptSummary {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            archetype_result: result.primary,
            primary_score: result.primary_score,
            secondary_score: result.secondary_score,
        }
    }
}

/// Result of a completed attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteAttemptResult {
    pub attempt_id: AttemptId,
    pub reference_version: String,
    pub dimension_scores: DimensionScores,
    pub classification: ClassificationResult,
    /// True when no dimension could be scored; the classification is then
    /// a degenerate all-zero ranking.
    pub incomplete: bool,
    pub skipped: Vec<SkippedResponse>,
    pub summary: AttemptSummary,
    pub primary_details: Option<ArchetypeDetails>,
    pub completed_at: DateTime<Utc>,
}

/// Handler for completing attempts.
pub struct CompleteAttemptHandler {
    reference: Arc<ReferenceData>,
    aggregator: DimensionAggregator,
    classifier: ArchetypeClassifier,
}

impl CompleteAttemptHandler {
    pub fn new(
        reference: Arc<ReferenceData>,
        aggregator: DimensionAggregator,
        classifier: ArchetypeClassifier,
    ) -> Self {
        Self {
            reference,
            aggregator,
            classifier,
        }
    }

    pub fn handle(
        &self,
        cmd: CompleteAttemptCommand,
    ) -> Result<CompleteAttemptResult, DomainError> {
        debug!(
            attempt_id = %cmd.attempt_id,
            responses = cmd.responses.len(),
            "Completing attempt"
        );

        // 1. Aggregate responses into dimension scores
        let aggregation = self
            .aggregator
            .aggregate(&cmd.responses, &self.reference.catalog)?;

        let unknown = aggregation.skipped_count(SkipReason::UnknownQuestion);
        let invalid = aggregation.skipped_count(SkipReason::InvalidResponseValue);
        let superseded = aggregation.skipped_count(SkipReason::Superseded);
        if unknown + invalid + superseded > 0 {
            warn!(
                attempt_id = %cmd.attempt_id,
                unknown, invalid, superseded,
                "Skipped responses during aggregation"
            );
        }

        // 2. Rank archetypes
        let classification = self
            .classifier
            .classify(&aggregation.scores, &self.reference.profiles);
        let incomplete = classification.is_incomplete();

        if incomplete {
            warn!(attempt_id = %cmd.attempt_id, "No dimension could be scored");
        } else {
            info!(
                attempt_id = %cmd.attempt_id,
                primary = %classification.primary,
                primary_score = classification.primary_score,
                secondary = ?classification.secondary,
                "Attempt classified"
            );
        }

        // 3. Build the persistence summary and presentation copy
        let summary = AttemptSummary::from(&classification);
        let primary_details = self.reference.details(classification.primary).cloned();

        Ok(CompleteAttemptResult {
            attempt_id: cmd.attempt_id,
            reference_version: self.reference.version.clone(),
            dimension_scores: aggregation.scores,
            classification,
            incomplete,
            skipped: aggregation.skipped,
            summary,
            primary_details,
            completed_at: Utc::now(),
        })
    }
}
