//! Kilife Match - candidate ranking service for the Kilife talent marketplace
//!
//! Given a casting call's criteria, this library filters the pool of eligible
//! performer profiles and produces a score-ordered shortlist, explaining why
//! each candidate matched. The ranking is a deterministic, explainable
//! heuristic: no fuzzy matching, no learned weights.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{parse_criteria, score_candidate, RankOutcome, Ranker};
pub use models::{
    CandidateProfile, Casting, CastingCriteria, ProfileStatus, RankedCandidate, RankRequest,
    RankResponse, ScoringWeights,
};
