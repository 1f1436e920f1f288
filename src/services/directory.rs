use crate::models::{CandidateProfile, Casting, CastingCriteria, ProfileStatus};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the directory service
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid service key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the platform directory service.
///
/// The directory is the platform's main backend; this service reads from it
/// and never writes. It serves:
/// - castings by id (criteria, ownership, display summary)
/// - approved candidate profiles, optionally pre-filtered by city/age
pub struct DirectoryClient {
    base_url: String,
    service_key: String,
    client: Client,
}

impl DirectoryClient {
    pub fn new(base_url: String, service_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            service_key,
            client,
        }
    }

    /// Fetch a casting by id
    pub async fn get_casting(&self, casting_id: &str) -> Result<Casting, DirectoryError> {
        let url = format!(
            "{}/castings/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(casting_id)
        );

        tracing::debug!("Fetching casting from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Service-Key", &self.service_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound(format!(
                "Casting {} not found",
                casting_id
            )));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DirectoryError::Unauthorized);
        }
        if !status.is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Failed to fetch casting: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse casting: {}", e)))
    }

    /// Query candidate profiles for scoring.
    ///
    /// When the criteria carry a city or a full age range, they are passed
    /// along as query parameters so the directory can narrow the fetch.
    /// That narrowing is an optimization only: the response is treated as a
    /// possible superset and hard eligibility is re-checked in the engine.
    pub async fn list_candidates(
        &self,
        criteria: &CastingCriteria,
        limit: usize,
    ) -> Result<Vec<CandidateProfile>, DirectoryError> {
        let mut url = format!(
            "{}/profiles?status=APPROVED&limit={}",
            self.base_url.trim_end_matches('/'),
            limit
        );

        if let Some(city) = &criteria.city {
            url.push_str(&format!("&ville={}", urlencoding::encode(city)));
        }
        if let (Some(min), Some(max)) = (criteria.age_min, criteria.age_max) {
            url.push_str(&format!("&ageMin={}&ageMax={}", min, max));
        }

        tracing::debug!("Querying candidates from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Service-Key", &self.service_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DirectoryError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Failed to query candidates: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let documents = json
            .get("profiles")
            .and_then(|d| d.as_array())
            .ok_or_else(|| DirectoryError::InvalidResponse("Missing profiles array".into()))?;

        // Skip documents that fail to decode rather than failing the fetch;
        // individual malformed profiles are not the caller's problem
        let profiles: Vec<CandidateProfile> = documents
            .iter()
            .filter_map(|doc| match serde_json::from_value(doc.clone()) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!("Skipping undecodable profile document: {}", e);
                    None
                }
            })
            .collect();

        let approved = profiles
            .iter()
            .filter(|p| p.status == ProfileStatus::Approved)
            .count();
        tracing::debug!(
            "Queried {} candidates ({} approved)",
            profiles.len(),
            approved
        );

        Ok(profiles)
    }
}
