//! YAML file adapter for reference data.
//!
//! Expected layout:
//!
//! ```yaml
//! version: "2024-06"          # optional, defaults to a content checksum
//! scale: { min: 1, max: 5 }   # optional, defaults to five points
//! questions:
//!   - { id: 1, text: "...", dimension: decision_making, weight: 1 }
//! profiles:
//!   PERMISSIONLESS_OPERATOR: { decision_making: 5, risk_tolerance: 5 }
//! details:                    # optional
//!   PERMISSIONLESS_OPERATOR:
//!     name: "..."
//!     description: "..."
//!     strengths: []
//!     blindSpots: []
//!     pathForward: "..."
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::domain::foundation::LikertScale;
use crate::domain::quiz::{Archetype, ArchetypeDetails, ArchetypeProfile, Question, ReferenceData};
use crate::ports::{ReferenceDataError, ReferenceDataSource};

#[derive(Debug, Deserialize)]
struct ScaleDocument {
    min: u8,
    max: u8,
}

#[derive(Debug, Deserialize)]
struct ReferenceDocument {
    version: Option<String>,
    scale: Option<ScaleDocument>,
    questions: Vec<Question>,
    profiles: BTreeMap<Archetype, ArchetypeProfile>,
    #[serde(default)]
    details: BTreeMap<Archetype, ArchetypeDetails>,
}

/// Loads reference data from a YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlReferenceData {
    path: PathBuf,
}

impl YamlReferenceData {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Short content checksum used when the document carries no version.
    fn checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        format!("sha256:{}", &digest[..12])
    }

    /// Parses and validates a YAML document.
    pub fn parse(content: &str) -> Result<ReferenceData, ReferenceDataError> {
        let document: ReferenceDocument = serde_yaml::from_str(content)
            .map_err(|e| ReferenceDataError::Parse(e.to_string()))?;

        let scale = match document.scale {
            Some(s) => LikertScale::try_new(s.min, s.max)
                .map_err(|e| ReferenceDataError::Parse(e.to_string()))?,
            None => LikertScale::FIVE_POINT,
        };
        let version = document
            .version
            .unwrap_or_else(|| Self::checksum(content));

        Ok(ReferenceData::try_new(
            version,
            scale,
            document.questions,
            document.profiles,
            document.details,
        )?)
    }
}

#[async_trait]
impl ReferenceDataSource for YamlReferenceData {
    async fn load(&self) -> Result<ReferenceData, ReferenceDataError> {
        debug!("Reading reference data from {}", self.path.display());

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReferenceDataError::NotFound(self.path.display().to_string())
            } else {
                ReferenceDataError::Io(format!("Failed to read {}: {}", self.path.display(), e))
            }
        })?;

        let data = Self::parse(&content)?;
        info!(
            version = %data.version,
            questions = data.catalog.len(),
            archetypes = data.profiles.len(),
            "Loaded reference data"
        );
        Ok(data)
    }

    fn describe(&self) -> String {
        format!("reference data file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;
    use crate::domain::quiz::{
        Dimension, DimensionAggregator, DuplicatePolicy, InvalidValuePolicy, Polarity, QuizError,
        Response,
    };
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
version: "test-1"
questions:
  - { id: 1, text: "Gut over data", dimension: decision_making, weight: 1 }
  - { id: 2, text: "I check the numbers twice", dimension: decision_making, weight: -1 }
  - { id: 7, text: "Uncertainty is fine", dimension: risk_tolerance, weight: 1 }
profiles:
  PERMISSIONLESS_OPERATOR: { decision_making: 5, risk_tolerance: 5 }
  VALIDATOR_SEEKER: { motivation: 5, risk_tolerance: 1 }
details:
  VALIDATOR_SEEKER:
    name: "The Validator Seeker"
    description: "Listens deeply to feedback."
    strengths: ["High standards"]
    blindSpots: ["Imposter syndrome"]
    pathForward: "Set internal metrics."
"#;

    #[test]
    fn parses_questions_profiles_and_details() {
        let data = YamlReferenceData::parse(SAMPLE).unwrap();

        assert_eq!(data.version, "test-1");
        assert_eq!(data.catalog.len(), 3);
        assert_eq!(
            data.question(QuestionId::new(2)).map(|q| q.polarity),
            Some(Polarity::Reversed)
        );
        assert_eq!(data.profiles.len(), 2);
        assert_eq!(
            data.profiles
                .get(Archetype::PermissionlessOperator)
                .and_then(|p| p.target(Dimension::RiskTolerance)),
            Some(5.0)
        );
        assert_eq!(
            data.details(Archetype::ValidatorSeeker).map(|d| d.name.as_str()),
            Some("The Validator Seeker")
        );
    }

    #[test]
    fn missing_version_falls_back_to_checksum() {
        let content = SAMPLE.replace("version: \"test-1\"\n", "");
        let data = YamlReferenceData::parse(&content).unwrap();
        assert!(data.version.starts_with("sha256:"));
        assert_eq!(data.version.len(), "sha256:".len() + 12);

        let again = YamlReferenceData::parse(&content).unwrap();
        assert_eq!(data.version, again.version);
    }

    #[test]
    fn rejects_invalid_weight() {
        let content = SAMPLE.replace("weight: -1", "weight: 0");
        let result = YamlReferenceData::parse(&content);
        assert!(matches!(result, Err(ReferenceDataError::Parse(_))));
    }

    #[test]
    fn rejects_empty_profile_table() {
        let content = r#"
questions:
  - { id: 1, text: "Gut over data", dimension: decision_making, weight: 1 }
profiles: {}
"#;
        let result = YamlReferenceData::parse(content);
        assert!(matches!(
            result,
            Err(ReferenceDataError::Invalid(QuizError::EmptyProfileTable))
        ));
    }

    #[test]
    fn honours_custom_scale() {
        let content = r#"
scale: { min: 0, max: 10 }
questions:
  - { id: 1, text: "Gut over data", dimension: decision_making, weight: 1 }
profiles:
  THE_BUILDER: { focus: 9 }
"#;
        let data = YamlReferenceData::parse(content).unwrap();
        assert_eq!(data.scale.max(), 10);
    }

    #[test]
    fn wide_scale_reverse_scores_without_overflow() {
        let content = r#"
scale: { min: 200, max: 250 }
questions:
  - { id: 1, text: "I prefer to work with a team", dimension: collaboration, weight: -1 }
profiles:
  THE_BUILDER: { collaboration: 240 }
"#;
        let data = YamlReferenceData::parse(content).unwrap();
        let aggregator = DimensionAggregator::new(
            data.scale,
            InvalidValuePolicy::Skip,
            DuplicatePolicy::LastWriteWins,
        );

        let result = aggregator
            .aggregate(&[Response::new(1, 210)], &data.catalog)
            .unwrap();
        assert_eq!(result.scores.get(Dimension::Collaboration), Some(240.0));
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reference.yaml");
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let data = YamlReferenceData::new(&path).load().await.unwrap();
        assert_eq!(data.version, "test-1");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = YamlReferenceData::new(temp_dir.path().join("absent.yaml"));

        let result = source.load().await;
        assert!(matches!(result, Err(ReferenceDataError::NotFound(_))));
    }
}
