use crate::models::domain::{CastingSummary, RankedCandidate};
use serde::{Deserialize, Serialize};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub casting: CastingSummary,
    pub suggestions: Vec<RankedCandidate>,
    #[serde(rename = "totalFound")]
    pub total_found: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
