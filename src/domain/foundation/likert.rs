//! Likert scale value object (default 1 to 5).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Inclusive bounds of an agreement scale.
///
/// Reverse scoring is `(min + max) - value`, so the default scale maps
/// 1 to 5, 2 to 4 and leaves 3 untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LikertScale {
    min: u8,
    max: u8,
}

impl LikertScale {
    /// The five-point scale used by the questionnaire.
    pub const FIVE_POINT: Self = Self { min: 1, max: 5 };

    /// Creates a scale, returning error unless `min < max`.
    pub fn try_new(min: u8, max: u8) -> Result<Self, ValidationError> {
        if min >= max {
            return Err(ValidationError::invalid_format(
                "likert_scale",
                format!("min ({}) must be below max ({})", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Returns true if `raw` lies within the scale bounds.
    pub fn contains(&self, raw: i32) -> bool {
        (i32::from(self.min)..=i32::from(self.max)).contains(&raw)
    }

    /// Returns true if a (possibly fractional) score lies within the bounds.
    pub fn contains_score(&self, score: f64) -> bool {
        score >= f64::from(self.min) && score <= f64::from(self.max)
    }

    /// Validates a raw answer against the bounds.
    pub fn validate(&self, raw: i32) -> Result<u8, ValidationError> {
        if !self.contains(raw) {
            return Err(ValidationError::out_of_range(
                "response_value",
                i32::from(self.min),
                i32::from(self.max),
                raw,
            ));
        }
        // In range, so it fits in u8.
        Ok(raw as u8)
    }

    /// Mirrors a validated value around the centre of the scale.
    ///
    /// `min + max` can exceed `u8::MAX` on wide scales, so the sum is taken
    /// in `u16`. For a value within bounds the result lies within bounds too.
    pub fn invert(&self, value: u8) -> u8 {
        let sum = u16::from(self.min) + u16::from(self.max);
        let mirrored = sum.saturating_sub(u16::from(value));
        u8::try_from(mirrored).unwrap_or(u8::MAX)
    }
}

impl Default for LikertScale {
    fn default() -> Self {
        Self::FIVE_POINT
    }
}

impl fmt::Display for LikertScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}
