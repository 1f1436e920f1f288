// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, Casting, CastingCriteria, CastingSummary, ProfileStatus, RankedCandidate,
    ScoringWeights,
};
pub use requests::RankRequest;
pub use responses::{ErrorResponse, HealthResponse, RankResponse};
