//! Classification engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::LikertScale;
use crate::domain::quiz::{
    ArchetypeClassifier, DimensionAggregator, DuplicatePolicy, InvalidValuePolicy,
    DEFAULT_HYBRID_THRESHOLD,
};

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Score gap under which the runner-up is reported as secondary
    #[serde(default = "default_hybrid_threshold")]
    pub hybrid_threshold: f64,

    /// How repeated answers to one question are resolved
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// How out-of-scale answers are handled
    #[serde(default)]
    pub invalid_value_policy: InvalidValuePolicy,

    /// Optional YAML reference data file; compiled-in tables when absent
    pub reference_data_path: Option<String>,
}

impl EngineConfig {
    /// Build the aggregator for a given response scale
    pub fn aggregator(&self, scale: LikertScale) -> DimensionAggregator {
        DimensionAggregator::new(scale, self.invalid_value_policy, self.duplicate_policy)
    }

    /// Build the classifier
    pub fn classifier(&self) -> Result<ArchetypeClassifier, ValidationError> {
        ArchetypeClassifier::with_hybrid_threshold(self.hybrid_threshold)
            .map_err(|_| ValidationError::InvalidHybridThreshold)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.classifier()?;
        if let Some(path) = &self.reference_data_path {
            if path.trim().is_empty() {
                return Err(ValidationError::MissingRequired("engine.reference_data_path"));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hybrid_threshold: default_hybrid_threshold(),
            duplicate_policy: DuplicatePolicy::default(),
            invalid_value_policy: InvalidValuePolicy::default(),
            reference_data_path: None,
        }
    }
}

fn default_hybrid_threshold() -> f64 {
    DEFAULT_HYBRID_THRESHOLD
}
