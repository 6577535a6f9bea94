//! Archetypes and their reference profiles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::LikertScale;

use super::{Dimension, QuizError};

/// One of the nine classification outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Archetype {
    PermissionlessOperator,
    SystemsThinker,
    AudienceBuilder,
    CreatorObsessive,
    HybridHustler,
    ValidatorSeeker,
    TheBuilder,
    TheThinkerWriter,
    TheConnector,
}

impl Archetype {
    pub const ALL: [Archetype; 9] = [
        Archetype::PermissionlessOperator,
        Archetype::SystemsThinker,
        Archetype::AudienceBuilder,
        Archetype::CreatorObsessive,
        Archetype::HybridHustler,
        Archetype::ValidatorSeeker,
        Archetype::TheBuilder,
        Archetype::TheThinkerWriter,
        Archetype::TheConnector,
    ];

    /// Canonical identifier. Lexical order of this string breaks score ties.
    pub fn id(&self) -> &'static str {
        match self {
            Archetype::PermissionlessOperator => "PERMISSIONLESS_OPERATOR",
            Archetype::SystemsThinker => "SYSTEMS_THINKER",
            Archetype::AudienceBuilder => "AUDIENCE_BUILDER",
            Archetype::CreatorObsessive => "CREATOR_OBSESSIVE",
            Archetype::HybridHustler => "HYBRID_HUSTLER",
            Archetype::ValidatorSeeker => "VALIDATOR_SEEKER",
            Archetype::TheBuilder => "THE_BUILDER",
            Archetype::TheThinkerWriter => "THE_THINKER_WRITER",
            Archetype::TheConnector => "THE_CONNECTOR",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Partial target profile: only the dimensions that define the archetype.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchetypeProfile(BTreeMap<Dimension, f64>);

impl ArchetypeProfile {
    pub fn new(targets: impl IntoIterator<Item = (Dimension, f64)>) -> Self {
        Self(targets.into_iter().collect())
    }

    /// Target score for a dimension, None when the archetype leaves it open.
    pub fn target(&self, dimension: Dimension) -> Option<f64> {
        self.0.get(&dimension).copied()
    }

    pub fn targets(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.0.iter().map(|(d, t)| (*d, *t))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reference profiles for every archetype the classifier ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    profiles: BTreeMap<Archetype, ArchetypeProfile>,
}

impl ProfileTable {
    /// Builds a validated table. Each archetype appears once, every profile
    /// constrains at least one dimension and every target lies on the scale.
    pub fn try_new(
        profiles: impl IntoIterator<Item = (Archetype, ArchetypeProfile)>,
        scale: &LikertScale,
    ) -> Result<Self, QuizError> {
        let mut indexed = BTreeMap::new();
        for (archetype, profile) in profiles {
            if indexed.insert(archetype, profile).is_some() {
                return Err(QuizError::DuplicateProfile { archetype });
            }
        }
        if indexed.is_empty() {
            return Err(QuizError::EmptyProfileTable);
        }

        for (archetype, profile) in &indexed {
            if profile.is_empty() {
                return Err(QuizError::EmptyProfile {
                    archetype: *archetype,
                });
            }
            if let Some((dimension, target)) =
                profile.targets().find(|(_, t)| !scale.contains_score(*t))
            {
                return Err(QuizError::TargetOutOfScale {
                    archetype: *archetype,
                    dimension,
                    target,
                });
            }
        }

        Ok(Self { profiles: indexed })
    }

    pub fn get(&self, archetype: Archetype) -> Option<&ArchetypeProfile> {
        self.profiles.get(&archetype)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Archetype, &ArchetypeProfile)> {
        self.profiles.iter().map(|(a, p)| (*a, p))
    }
}

/// Presentation copy for an archetype. Never read by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeDetails {
    pub name: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub blind_spots: Vec<String>,
    pub path_forward: String,
}
