//! Archetype Classifier - Similarity ranking and hybrid detection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Archetype, ArchetypeProfile, DimensionScores, ProfileTable, QuizError};

/// Score gap below which the runner-up is reported as a secondary archetype.
pub const DEFAULT_HYBRID_THRESHOLD: f64 = 0.10;

/// One archetype's position in the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedArchetype {
    pub archetype: Archetype,
    pub score: f64,
    /// Dimensions shared by the profile and the measured scores.
    pub dimensions_compared: usize,
}

/// Ranked classification of one set of dimension scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub primary: Archetype,
    pub primary_score: f64,
    /// Present only for a hybrid result.
    pub secondary: Option<Archetype>,
    pub secondary_score: Option<f64>,
    /// Every archetype, best first.
    pub ranking: Vec<RankedArchetype>,
}

impl ClassificationResult {
    pub fn is_hybrid(&self) -> bool {
        self.secondary.is_some()
    }

    /// True when no archetype could be compared on any dimension.
    ///
    /// The primary is then only the first entry of an all-zero ranking.
    pub fn is_incomplete(&self) -> bool {
        self.ranking.iter().all(|r| r.dimensions_compared == 0)
    }

    /// Returns `Err(IncompleteInput)` for callers that refuse degenerate results.
    pub fn ensure_complete(&self) -> Result<&Self, QuizError> {
        if self.is_incomplete() {
            return Err(QuizError::IncompleteInput);
        }
        Ok(self)
    }

    /// Score of a specific archetype in the ranking.
    pub fn score_of(&self, archetype: Archetype) -> Option<f64> {
        self.ranking
            .iter()
            .find(|r| r.archetype == archetype)
            .map(|r| r.score)
    }
}

/// Compares dimension scores against archetype reference profiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeClassifier {
    hybrid_threshold: f64,
}

impl Default for ArchetypeClassifier {
    fn default() -> Self {
        Self {
            hybrid_threshold: DEFAULT_HYBRID_THRESHOLD,
        }
    }
}

impl ArchetypeClassifier {
    /// Creates a classifier with a custom hybrid threshold in (0, 1).
    pub fn with_hybrid_threshold(hybrid_threshold: f64) -> Result<Self, QuizError> {
        if !(hybrid_threshold > 0.0 && hybrid_threshold < 1.0) {
            return Err(QuizError::InvalidHybridThreshold(hybrid_threshold));
        }
        Ok(Self { hybrid_threshold })
    }

    pub fn hybrid_threshold(&self) -> f64 {
        self.hybrid_threshold
    }

    /// Similarity of measured scores to one profile.
    ///
    /// # Algorithm
    /// Over the dimensions present in both: `msd = Σ(user - target)² / n`,
    /// `similarity = 1 / (1 + sqrt(msd))`.
    ///
    /// # Edge Cases
    /// - No shared dimension: 0
    /// - Exact match on every shared dimension: 1
    pub fn similarity(scores: &DimensionScores, profile: &ArchetypeProfile) -> (f64, usize) {
        let (distance, compared) = profile
            .targets()
            .filter_map(|(dimension, target)| scores.get(dimension).map(|user| user - target))
            .fold((0.0_f64, 0_usize), |(sum, n), diff| (sum + diff * diff, n + 1));

        if compared == 0 {
            return (0.0, 0);
        }

        let mean_squared = distance / compared as f64;
        (1.0 / (1.0 + mean_squared.sqrt()), compared)
    }

    /// Ranks every archetype in the table and derives primary/secondary.
    pub fn classify(
        &self,
        scores: &DimensionScores,
        profiles: &ProfileTable,
    ) -> ClassificationResult {
        let mut ranking: Vec<RankedArchetype> = profiles
            .iter()
            .map(|(archetype, profile)| {
                let (score, dimensions_compared) = Self::similarity(scores, profile);
                RankedArchetype {
                    archetype,
                    score,
                    dimensions_compared,
                }
            })
            .collect();

        rank(&mut ranking);
        self.derive(ranking)
    }

    /// Builds a result from an already ranked list.
    ///
    /// A hybrid is declared when `primary - runner_up < threshold` (strict).
    ///
    /// # Edge Cases
    /// - Single entry: no secondary
    /// - Empty list: cannot come from `classify` (a `ProfileTable` is never
    ///   empty); yields a zero-score placeholder primary
    pub fn derive(&self, ranking: Vec<RankedArchetype>) -> ClassificationResult {
        let Some(top) = ranking.first().copied() else {
            return ClassificationResult {
                primary: Archetype::ALL[0],
                primary_score: 0.0,
                secondary: None,
                secondary_score: None,
                ranking,
            };
        };

        let runner_up = ranking
            .get(1)
            .copied()
            .filter(|second| top.score - second.score < self.hybrid_threshold);

        ClassificationResult {
            primary: top.archetype,
            primary_score: top.score,
            secondary: runner_up.map(|r| r.archetype),
            secondary_score: runner_up.map(|r| r.score),
            ranking,
        }
    }
}

/// Sorts best first; equal scores fall back to lexical archetype identifier.
pub fn rank(ranking: &mut [RankedArchetype]) {
    ranking.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.archetype.id().cmp(b.archetype.id()))
    });
}
