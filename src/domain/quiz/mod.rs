//! Quiz Module - Archetype classification engine.
//!
//! Pure domain services that turn questionnaire answers into an archetype
//! classification. Nothing here performs I/O or holds mutable state, so all
//! of it is safe to call concurrently for independent attempts.
//!
//! # Components
//!
//! - `DimensionAggregator` - Polarity-adjusted mean score per dimension
//! - `ArchetypeClassifier` - Similarity ranking against partial profiles,
//!   primary/secondary (hybrid) derivation
//! - `ReferenceData` - Validated question catalog and archetype profile table
//!
//! # Data Flow
//!
//! ```text
//! responses ──► DimensionAggregator ──► DimensionScores
//!                    ▲                            │
//!              QuestionCatalog                    ▼
//!                                        ArchetypeClassifier ◄── ProfileTable
//!                                                 │
//!                                                 ▼
//!                                        ClassificationResult
//! ```

mod aggregator;
mod archetype;
mod classifier;
mod dimension;
mod errors;
mod question;
mod reference;
mod response;

pub use aggregator::{Aggregation, DimensionAggregator};
pub use archetype::{Archetype, ArchetypeDetails, ArchetypeProfile, ProfileTable};
pub use classifier::{
    rank, ArchetypeClassifier, ClassificationResult, RankedArchetype, DEFAULT_HYBRID_THRESHOLD,
};
pub use dimension::{Dimension, DimensionScores};
pub use errors::QuizError;
pub use question::{Polarity, Question, QuestionCatalog};
pub use reference::{ReferenceData, BUILTIN_VERSION};
pub use response::{DuplicatePolicy, InvalidValuePolicy, Response, SkipReason, SkippedResponse};
