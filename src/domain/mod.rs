//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `quiz` - Pure classification engine (aggregation, similarity ranking)

pub mod foundation;
pub mod quiz;
