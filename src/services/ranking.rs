use crate::core::{parse_criteria, RankOutcome, Ranker};
use crate::models::{Casting, CastingSummary};
use crate::services::{
    applications::{ApplicationsClient, ApplicationsError},
    cache::{CacheKey, CacheManager},
    directory::{DirectoryClient, DirectoryError},
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by a ranking request
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Casting not found: {0}")]
    CastingNotFound(String),

    #[error("Caller {caller_id} does not own casting {casting_id}")]
    Forbidden {
        caller_id: String,
        casting_id: String,
    },

    #[error("Directory service unavailable: {0}")]
    Directory(#[source] DirectoryError),

    #[error("Applications store unavailable: {0}")]
    Applications(#[from] ApplicationsError),
}

/// Orchestrates one ranking request end to end.
///
/// Owns the authorization precondition itself: even though the calling
/// layer authenticates the Pro, ownership of the casting is re-verified
/// here and the request fails closed when it does not hold. Performs only
/// reads; a cancelled request needs no cleanup.
pub struct RankingService {
    directory: Arc<DirectoryClient>,
    applications: Arc<ApplicationsClient>,
    cache: Arc<CacheManager>,
    ranker: Ranker,
}

impl RankingService {
    pub fn new(
        directory: Arc<DirectoryClient>,
        applications: Arc<ApplicationsClient>,
        cache: Arc<CacheManager>,
        ranker: Ranker,
    ) -> Self {
        Self {
            directory,
            applications,
            cache,
            ranker,
        }
    }

    pub fn pool_cap(&self) -> usize {
        self.ranker.pool_cap()
    }

    /// Rank eligible candidates for a casting owned by `caller_id`.
    ///
    /// parse criteria -> read exclusion set -> fetch pool -> score -> sort.
    /// The shortlist is recomputed on every call; only the casting document
    /// itself is cached (criteria are immutable once published).
    pub async fn rank(
        &self,
        casting_id: &str,
        caller_id: &str,
        limit: usize,
    ) -> Result<(CastingSummary, RankOutcome), RankError> {
        let casting = self.get_casting(casting_id).await?;

        if casting.owner_user_id != caller_id {
            tracing::warn!(
                "Caller {} attempted to rank casting {} owned by {}",
                caller_id,
                casting_id,
                casting.owner_user_id
            );
            return Err(RankError::Forbidden {
                caller_id: caller_id.to_string(),
                casting_id: casting_id.to_string(),
            });
        }

        let criteria = parse_criteria(casting.criteres.as_ref());
        tracing::debug!("Parsed criteria for casting {}: {:?}", casting_id, criteria);

        let exclusions: HashSet<String> = self
            .applications
            .get_applicant_ids(casting_id)
            .await?
            .into_iter()
            .collect();

        let candidates = self
            .directory
            .list_candidates(&criteria, fetch_limit(self.ranker.pool_cap(), exclusions.len()))
            .await
            .map_err(RankError::Directory)?;

        let outcome = self.ranker.rank(&criteria, candidates, &exclusions, limit);

        tracing::info!(
            "Ranked casting {}: {} suggestions from {} eligible ({} fetched, {} excluded applicants)",
            casting_id,
            outcome.suggestions.len(),
            outcome.total_found,
            outcome.total_candidates,
            exclusions.len()
        );

        Ok((casting.summary(), outcome))
    }

    /// Fetch a casting, cache-aside. Cache failures degrade to a direct
    /// directory read; they never fail the request.
    async fn get_casting(&self, casting_id: &str) -> Result<Casting, RankError> {
        let cache_key = CacheKey::casting(casting_id);

        if let Ok(casting) = self.cache.get::<Casting>(&cache_key).await {
            return Ok(casting);
        }

        let casting = self
            .directory
            .get_casting(casting_id)
            .await
            .map_err(|e| match e {
                DirectoryError::NotFound(_) => RankError::CastingNotFound(casting_id.to_string()),
                other => RankError::Directory(other),
            })?;

        if let Err(e) = self.cache.set(&cache_key, &casting).await {
            tracing::warn!("Failed to cache casting {}: {}", casting_id, e);
        }

        Ok(casting)
    }
}

/// Applicants are stripped from the pool after the fetch, so they must not
/// consume fetch slots: widen the directory query by the exclusion count so
/// a heavily applied-to casting still fills its pool with eligible
/// candidates.
fn fetch_limit(pool_cap: usize, exclusion_count: usize) -> usize {
    pool_cap.saturating_add(exclusion_count)
}
