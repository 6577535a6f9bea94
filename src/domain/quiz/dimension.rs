//! Psychological dimensions and per-dimension score maps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One axis of the underlying model. Dimensions are opaque labels:
/// the derived ordering exists only for deterministic iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    DecisionMaking,
    EnergySource,
    RiskTolerance,
    Focus,
    Motivation,
    TimePreference,
    Collaboration,
    Monetization,
}

impl Dimension {
    /// Every dimension, in declaration order.
    pub const ALL: [Dimension; 8] = [
        Dimension::DecisionMaking,
        Dimension::EnergySource,
        Dimension::RiskTolerance,
        Dimension::Focus,
        Dimension::Motivation,
        Dimension::TimePreference,
        Dimension::Collaboration,
        Dimension::Monetization,
    ];

    /// Returns the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::DecisionMaking => "decision_making",
            Dimension::EnergySource => "energy_source",
            Dimension::RiskTolerance => "risk_tolerance",
            Dimension::Focus => "focus",
            Dimension::Motivation => "motivation",
            Dimension::TimePreference => "time_preference",
            Dimension::Collaboration => "collaboration",
            Dimension::Monetization => "monetization",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mean score per dimension.
///
/// A dimension with no contributing responses is absent, which is a
/// different state from being present with a low score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionScores(BTreeMap<Dimension, f64>);

impl DimensionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score for a dimension, or None when it was not measured.
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.0.get(&dimension).copied()
    }

    pub fn contains(&self, dimension: Dimension) -> bool {
        self.0.contains_key(&dimension)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.0.iter().map(|(d, s)| (*d, *s))
    }
}

impl FromIterator<(Dimension, f64)> for DimensionScores {
    fn from_iter<I: IntoIterator<Item = (Dimension, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
