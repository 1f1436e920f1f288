use serde::{Deserialize, Serialize};

/// Lifecycle status of a candidate profile.
///
/// Only `Approved` profiles are eligible for ranking; the engine re-checks
/// this even when the directory query claims to pre-filter by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileStatus {
    Draft,
    PendingReview,
    Approved,
    Rejected,
}

/// A casting call posted by a Pro.
///
/// The criteria payload is kept as a raw JSON value: the platform stores it
/// as an opaque string column, so it may arrive as a structured object, a
/// JSON-encoded string, a plain string, or null. `parse_criteria` turns it
/// into a `CastingCriteria`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Casting {
    pub id: String,
    #[serde(rename = "ownerUserId")]
    pub owner_user_id: String,
    pub titre: String,
    #[serde(default)]
    pub lieu: Option<String>,
    #[serde(default)]
    pub criteres: Option<serde_json::Value>,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Casting {
    pub fn summary(&self) -> CastingSummary {
        CastingSummary {
            id: self.id.clone(),
            titre: self.titre.clone(),
            lieu: self.lieu.clone(),
        }
    }
}

/// Read-only casting context attached to a ranking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastingSummary {
    pub id: String,
    pub titre: String,
    pub lieu: Option<String>,
}

/// Structured casting criteria derived from the raw payload.
///
/// Absent fields impose no constraint. Field aliases accept both the legacy
/// French wire names (`ville`, `competences`, `langues`) and their English
/// equivalents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastingCriteria {
    #[serde(default, alias = "ville")]
    pub city: Option<String>,
    #[serde(default, rename = "ageMin")]
    pub age_min: Option<u8>,
    #[serde(default, rename = "ageMax")]
    pub age_max: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, alias = "competences")]
    pub skills: Vec<String>,
    #[serde(default, alias = "langues")]
    pub languages: Vec<String>,
}

impl CastingCriteria {
    /// True when no field constrains the pool (open filter).
    pub fn is_open(&self) -> bool {
        self.city.is_none()
            && self.age_min.is_none()
            && self.age_max.is_none()
            && self.gender.is_none()
            && self.skills.is_empty()
            && self.languages.is_empty()
    }
}

/// Performer profile snapshot read from the directory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub status: ProfileStatus,
    #[serde(default, alias = "ville")]
    pub city: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, alias = "competences")]
    pub skills: Vec<String>,
    #[serde(default, alias = "langues")]
    pub languages: Vec<String>,
    #[serde(rename = "completenessScore", default)]
    pub completeness_score: u8,
    #[serde(rename = "isVerified", default)]
    pub is_verified: Option<bool>,
    #[serde(rename = "endorsementRatings", default)]
    pub endorsement_ratings: Vec<u8>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl CandidateProfile {
    /// Helper to get is_verified as a bool, defaulting to false
    pub fn verified(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }
}

/// One ranked shortlist entry. Ephemeral: computed per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: Option<String>,
    pub ville: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub competences: Vec<String>,
    pub langues: Vec<String>,
    #[serde(rename = "completenessScore")]
    pub completeness_score: u8,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    pub photo: Option<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    #[serde(rename = "matchDetails")]
    pub match_details: Vec<String>,
}

impl RankedCandidate {
    pub fn from_profile(
        profile: CandidateProfile,
        match_score: u32,
        match_details: Vec<String>,
    ) -> Self {
        let is_verified = profile.verified();
        Self {
            id: profile.id,
            user_id: profile.user_id,
            name: profile.name,
            ville: profile.city,
            age: profile.age,
            gender: profile.gender,
            competences: profile.skills,
            langues: profile.languages,
            completeness_score: profile.completeness_score,
            is_verified,
            photo: profile.photo,
            match_score,
            match_details,
        }
    }
}

/// Scoring weights
///
/// Point values for each match factor. Defaults are the canonical rule set;
/// the config layer can override them per deployment.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub city: u32,
    pub age: u32,
    pub per_skill: u32,
    pub per_language: u32,
    pub completeness_step: u32,
    pub endorsement_step: u32,
    pub endorsement_cap: u32,
    pub verified: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            city: 30,
            age: 20,
            per_skill: 10,
            per_language: 10,
            completeness_step: 5,
            endorsement_step: 5,
            endorsement_cap: 25,
            verified: 10,
        }
    }
}
