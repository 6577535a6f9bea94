//! Question catalog types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{LikertScale, QuestionId, ValidationError};

use super::{Dimension, QuizError};

/// Whether agreement is read literally or reverse-scored.
///
/// Serialized as the integer weight `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Polarity {
    Direct,
    Reversed,
}

impl Polarity {
    /// Returns the signed weight.
    pub fn weight(&self) -> i8 {
        match self {
            Polarity::Direct => 1,
            Polarity::Reversed => -1,
        }
    }

    /// Applies the polarity to an already validated answer.
    pub fn apply(&self, value: u8, scale: &LikertScale) -> u8 {
        match self {
            Polarity::Direct => value,
            Polarity::Reversed => scale.invert(value),
        }
    }
}

impl TryFrom<i8> for Polarity {
    type Error = ValidationError;

    fn try_from(weight: i8) -> Result<Self, Self::Error> {
        match weight {
            1 => Ok(Polarity::Direct),
            -1 => Ok(Polarity::Reversed),
            other => Err(ValidationError::invalid_format(
                "weight",
                format!("expected 1 or -1, got {}", other),
            )),
        }
    }
}

impl From<Polarity> for i8 {
    fn from(polarity: Polarity) -> Self {
        polarity.weight()
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub dimension: Dimension,
    #[serde(rename = "weight")]
    pub polarity: Polarity,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        dimension: Dimension,
        polarity: Polarity,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            dimension,
            polarity,
        }
    }
}

/// Questions indexed by identifier.
///
/// Construction rejects an empty list and repeated identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: BTreeMap<QuestionId, Question>,
}

impl QuestionCatalog {
    pub fn try_new(questions: impl IntoIterator<Item = Question>) -> Result<Self, QuizError> {
        let mut indexed = BTreeMap::new();
        for question in questions {
            let question_id = question.id;
            if indexed.insert(question_id, question).is_some() {
                return Err(QuizError::DuplicateQuestion { question_id });
            }
        }
        if indexed.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }
        Ok(Self { questions: indexed })
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }
}
