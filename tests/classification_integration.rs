//! Integration tests for attempt classification.
//!
//! These tests drive the full pipeline through the public API:
//! 1. Reference data loads from the built-in tables or a YAML file
//! 2. Responses aggregate into dimension scores
//! 3. The classifier ranks archetypes and flags hybrids
//! 4. The handler result serializes for the caller

use std::collections::BTreeMap;
use std::sync::Arc;

use tempfile::TempDir;

use archetype_engine::adapters::{BuiltinReferenceData, YamlReferenceData};
use archetype_engine::application::{
    CompleteAttemptCommand, CompleteAttemptHandler, CompleteAttemptResult,
};
use archetype_engine::config::EngineConfig;
use archetype_engine::domain::foundation::{AttemptId, ErrorCode, LikertScale};
use archetype_engine::domain::quiz::{
    Archetype, ArchetypeClassifier, ArchetypeProfile, Dimension, DimensionAggregator,
    DuplicatePolicy, InvalidValuePolicy, Polarity, Question, QuizError, ReferenceData, Response,
    SkipReason,
};
use archetype_engine::ports::{ReferenceDataError, ReferenceDataSource};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Two-question bank with one archetype matching the answers and one that
/// shares no dimension with them.
fn operator_reference() -> ReferenceData {
    ReferenceData::try_new(
        "test",
        LikertScale::FIVE_POINT,
        vec![
            Question::new(1, "Gut over data", Dimension::DecisionMaking, Polarity::Direct),
            Question::new(
                7,
                "Comfortable with uncertainty",
                Dimension::RiskTolerance,
                Polarity::Direct,
            ),
        ],
        [
            (
                Archetype::PermissionlessOperator,
                ArchetypeProfile::new([
                    (Dimension::DecisionMaking, 5.0),
                    (Dimension::RiskTolerance, 5.0),
                ]),
            ),
            (
                Archetype::TheConnector,
                ArchetypeProfile::new([(Dimension::Collaboration, 5.0)]),
            ),
        ],
        BTreeMap::new(),
    )
    .unwrap()
}

fn handler_for(reference: ReferenceData) -> CompleteAttemptHandler {
    let config = EngineConfig::default();
    CompleteAttemptHandler::new(
        Arc::new(reference.clone()),
        config.aggregator(reference.scale),
        config.classifier().unwrap(),
    )
}

fn complete(handler: &CompleteAttemptHandler, responses: Vec<Response>) -> CompleteAttemptResult {
    handler
        .handle(CompleteAttemptCommand {
            attempt_id: AttemptId::new(),
            responses,
        })
        .unwrap()
}

const REFERENCE_YAML: &str = r#"
version: "yaml-1"
questions:
  - { id: 1, text: "Gut over data", dimension: decision_making, weight: 1 }
  - { id: 2, text: "I prefer to work with a team", dimension: collaboration, weight: -1 }
profiles:
  PERMISSIONLESS_OPERATOR: { decision_making: 5, collaboration: 1 }
  AUDIENCE_BUILDER: { collaboration: 5 }
details:
  PERMISSIONLESS_OPERATOR:
    name: "The Permissionless Operator"
    description: "Moves fast"
    strengths: ["Speed"]
    blindSpots: ["Details"]
    pathForward: "Build a system"
"#;

// =============================================================================
// Tests
// =============================================================================

#[test]
fn matching_answers_score_full_similarity() {
    let handler = handler_for(operator_reference());

    let result = complete(&handler, vec![Response::new(1, 5), Response::new(7, 5)]);

    assert_eq!(result.dimension_scores.get(Dimension::DecisionMaking), Some(5.0));
    assert_eq!(result.dimension_scores.get(Dimension::RiskTolerance), Some(5.0));
    assert_eq!(result.classification.primary, Archetype::PermissionlessOperator);
    assert_eq!(result.classification.primary_score, 1.0);
    assert_eq!(result.classification.score_of(Archetype::TheConnector), Some(0.0));
    assert!(!result.classification.is_hybrid());
    assert!(!result.incomplete);
    assert_eq!(result.summary.archetype_result, Archetype::PermissionlessOperator);
    assert_eq!(result.summary.secondary_score, None);
}

#[test]
fn builtin_bank_classifies_operator() {
    let reference = ReferenceData::builtin().unwrap().clone();
    let handler = handler_for(reference);

    let result = complete(&handler, vec![Response::new(1, 5), Response::new(7, 5)]);

    assert_eq!(result.classification.primary, Archetype::PermissionlessOperator);
    assert_eq!(result.classification.primary_score, 1.0);
    assert_eq!(result.classification.score_of(Archetype::HybridHustler), Some(0.5));
    assert_eq!(result.classification.ranking.len(), Archetype::ALL.len());
    assert_eq!(result.reference_version, "builtin-v1");
    assert_eq!(
        result.primary_details.map(|d| d.name),
        Some("The Permissionless Operator".to_string())
    );
}

#[test]
fn equal_scores_produce_hybrid_with_lexical_order() {
    let reference = ReferenceData::try_new(
        "tie",
        LikertScale::FIVE_POINT,
        vec![
            Question::new(1, "Gut over data", Dimension::DecisionMaking, Polarity::Direct),
            Question::new(
                7,
                "Comfortable with uncertainty",
                Dimension::RiskTolerance,
                Polarity::Direct,
            ),
        ],
        [
            (
                Archetype::TheBuilder,
                ArchetypeProfile::new([(Dimension::DecisionMaking, 5.0)]),
            ),
            (
                Archetype::AudienceBuilder,
                ArchetypeProfile::new([(Dimension::RiskTolerance, 5.0)]),
            ),
        ],
        BTreeMap::new(),
    )
    .unwrap();
    let handler = handler_for(reference);

    let result = complete(&handler, vec![Response::new(1, 5), Response::new(7, 5)]);

    assert_eq!(result.classification.primary, Archetype::AudienceBuilder);
    assert_eq!(result.classification.secondary, Some(Archetype::TheBuilder));
    assert_eq!(result.summary.secondary_score, Some(1.0));
}

#[test]
fn no_responses_yield_incomplete_result() {
    let handler = handler_for(operator_reference());

    let result = complete(&handler, Vec::new());

    assert!(result.incomplete);
    assert!(result.dimension_scores.is_empty());
    assert_eq!(result.classification.primary_score, 0.0);
    assert_eq!(
        result.classification.ensure_complete(),
        Err(QuizError::IncompleteInput)
    );
}

#[test]
fn malformed_responses_are_reported_not_scored() {
    let handler = handler_for(operator_reference());

    let result = complete(
        &handler,
        vec![
            Response::new(1, 2),
            Response::new(1, 5),
            Response::new(7, 9),
            Response::new(42, 3),
        ],
    );

    assert_eq!(result.dimension_scores.get(Dimension::DecisionMaking), Some(5.0));
    assert!(!result.dimension_scores.contains(Dimension::RiskTolerance));
    let reasons: Vec<SkipReason> = result.skipped.iter().map(|s| s.reason).collect();
    assert!(reasons.contains(&SkipReason::Superseded));
    assert!(reasons.contains(&SkipReason::InvalidResponseValue));
    assert!(reasons.contains(&SkipReason::UnknownQuestion));
    assert_eq!(result.skipped.len(), 3);
}

#[test]
fn strict_policies_fail_the_batch() {
    let reference = operator_reference();
    let handler = CompleteAttemptHandler::new(
        Arc::new(reference.clone()),
        DimensionAggregator::new(
            reference.scale,
            InvalidValuePolicy::Reject,
            DuplicatePolicy::Reject,
        ),
        ArchetypeClassifier::default(),
    );

    let err = handler
        .handle(CompleteAttemptCommand {
            attempt_id: AttemptId::new(),
            responses: vec![Response::new(1, 0)],
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidResponseValue);

    let err = handler
        .handle(CompleteAttemptCommand {
            attempt_id: AttemptId::new(),
            responses: vec![Response::new(1, 4), Response::new(1, 5)],
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DuplicateResponse);
}

#[tokio::test]
async fn yaml_reference_data_drives_classification() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reference.yaml");
    tokio::fs::write(&path, REFERENCE_YAML).await.unwrap();

    let reference = YamlReferenceData::new(&path).load().await.unwrap();
    let handler = handler_for(reference);

    // Reversed question: answering 1 on "work with a team" scores collaboration 5
    let result = complete(&handler, vec![Response::new(1, 5), Response::new(2, 1)]);

    assert_eq!(result.reference_version, "yaml-1");
    assert_eq!(result.dimension_scores.get(Dimension::Collaboration), Some(5.0));
    assert_eq!(result.classification.primary, Archetype::AudienceBuilder);
    assert_eq!(result.classification.primary_score, 1.0);
    assert!(result.primary_details.is_none());
}

#[tokio::test]
async fn builtin_source_matches_static_tables() {
    let loaded = BuiltinReferenceData::new().load().await.unwrap();
    assert_eq!(&loaded, ReferenceData::builtin().unwrap());
}

#[tokio::test]
async fn invalid_yaml_reference_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reference.yaml");
    let broken = REFERENCE_YAML.replace("decision_making: 5", "decision_making: 9");
    tokio::fs::write(&path, broken).await.unwrap();

    let result = YamlReferenceData::new(&path).load().await;
    assert!(matches!(
        result,
        Err(ReferenceDataError::Invalid(QuizError::TargetOutOfScale { .. }))
    ));
}

#[test]
fn result_serializes_for_callers() {
    let handler = handler_for(operator_reference());
    let result = complete(&handler, vec![Response::new(1, 5), Response::new(7, 5)]);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["classification"]["primary"], "PERMISSIONLESS_OPERATOR");
    assert_eq!(json["summary"]["archetype_result"], "PERMISSIONLESS_OPERATOR");
    assert_eq!(json["dimension_scores"]["decision_making"], 5.0);
}
