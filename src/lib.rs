//! Archetype Engine - Personality Quiz Classification
//!
//! This crate turns Likert-scale questionnaire answers into per-dimension
//! scores and ranks a fixed set of archetype profiles against them,
//! reporting a primary archetype and, when the top two are close, a hybrid
//! secondary.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
