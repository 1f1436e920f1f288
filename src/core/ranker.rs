use crate::core::{filters::filter_pool, scoring::score_candidate};
use crate::models::{CandidateProfile, CastingCriteria, RankedCandidate, ScoringWeights};
use std::collections::HashSet;

/// Result of one ranking pass
#[derive(Debug)]
pub struct RankOutcome {
    /// Ranked shortlist, best match first, truncated to the request limit
    pub suggestions: Vec<RankedCandidate>,
    /// Eligible pool size after filtering, before truncation
    pub total_found: usize,
    /// Raw candidate count fetched from the directory
    pub total_candidates: usize,
}

/// Ranking pipeline: eligibility filter, per-candidate scoring, ordering.
///
/// Pure given its inputs, so concurrent invocations share nothing and two
/// calls with the same pool and criteria produce identical output.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
    pool_cap: usize,
}

pub const DEFAULT_POOL_CAP: usize = 50;

impl Ranker {
    pub fn new(weights: ScoringWeights, pool_cap: usize) -> Self {
        Self { weights, pool_cap }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            pool_cap: DEFAULT_POOL_CAP,
        }
    }

    pub fn pool_cap(&self) -> usize {
        self.pool_cap
    }

    /// Rank candidates against a casting's criteria.
    ///
    /// # Arguments
    /// * `criteria` - parsed casting criteria
    /// * `candidates` - raw candidate fetch from the directory (may be a
    ///   superset of the hard-filtered pool)
    /// * `exclusions` - profile ids that already applied to this casting
    /// * `limit` - maximum shortlist length; clamped to the pool cap
    pub fn rank(
        &self,
        criteria: &CastingCriteria,
        candidates: Vec<CandidateProfile>,
        exclusions: &HashSet<String>,
        limit: usize,
    ) -> RankOutcome {
        let total_candidates = candidates.len();

        let pool = filter_pool(candidates, exclusions, self.pool_cap);
        let total_found = pool.len();

        let mut suggestions: Vec<RankedCandidate> = pool
            .into_iter()
            .map(|profile| {
                let (score, details) = score_candidate(&profile, criteria, &self.weights);
                RankedCandidate::from_profile(profile, score, details)
            })
            .collect();

        // Score descending; ties broken by completeness descending then id
        // ascending so the shortlist is reproducible
        suggestions.sort_by(|a, b| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| b.completeness_score.cmp(&a.completeness_score))
                .then_with(|| a.id.cmp(&b.id))
        });

        suggestions.truncate(limit.min(self.pool_cap));

        RankOutcome {
            suggestions,
            total_found,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileStatus;

    fn create_candidate(id: &str, age: Option<u8>, city: &str, completeness: u8) -> CandidateProfile {
        CandidateProfile {
            id: id.to_string(),
            user_id: format!("user_{}", id),
            name: Some(format!("Actor {}", id)),
            status: ProfileStatus::Approved,
            city: Some(city.to_string()),
            age,
            gender: None,
            skills: vec!["Wolof".to_string()],
            languages: vec![],
            completeness_score: completeness,
            is_verified: Some(false),
            endorsement_ratings: vec![],
            photo: None,
        }
    }

    fn create_criteria() -> CastingCriteria {
        CastingCriteria {
            city: Some("Dakar".to_string()),
            age_min: Some(23),
            age_max: Some(32),
            gender: None,
            skills: vec!["Wolof".to_string()],
            languages: vec![],
        }
    }

    #[test]
    fn test_rank_orders_by_score() {
        let ranker = Ranker::with_default_weights();
        let criteria = create_criteria();

        let candidates = vec![
            create_candidate("1", Some(26), "Dakar", 60), // city + age + skill
            create_candidate("2", Some(40), "Dakar", 60), // no age bonus
            create_candidate("3", Some(26), "Thiès", 60), // no city bonus
        ];

        let outcome = ranker.rank(&criteria, candidates, &HashSet::new(), 10);

        assert_eq!(outcome.suggestions.len(), 3);
        assert_eq!(outcome.suggestions[0].id, "1");
        assert!(outcome.suggestions[0].match_score > outcome.suggestions[1].match_score);
    }

    #[test]
    fn test_tie_break_completeness_then_id() {
        let ranker = Ranker::with_default_weights();
        let criteria = CastingCriteria::default();

        // b and c tie on score and completeness, a wins on completeness
        let candidates = vec![
            create_candidate("c", None, "Dakar", 40),
            create_candidate("b", None, "Dakar", 40),
            create_candidate("a", None, "Dakar", 60),
        ];

        let outcome = ranker.rank(&criteria, candidates, &HashSet::new(), 10);

        let ids: Vec<&str> = outcome.suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_exclusions_never_ranked() {
        let ranker = Ranker::with_default_weights();
        let criteria = create_criteria();

        let mut exclusions = HashSet::new();
        exclusions.insert("1".to_string());

        let candidates = vec![
            create_candidate("1", Some(26), "Dakar", 80),
            create_candidate("2", Some(26), "Dakar", 60),
        ];

        let outcome = ranker.rank(&criteria, candidates, &exclusions, 10);

        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].id, "2");
    }

    #[test]
    fn test_respects_limit() {
        let ranker = Ranker::with_default_weights();
        let criteria = create_criteria();

        let candidates: Vec<CandidateProfile> = (0..20)
            .map(|i| create_candidate(&format!("{:02}", i), Some(26), "Dakar", 60))
            .collect();

        let outcome = ranker.rank(&criteria, candidates, &HashSet::new(), 5);

        assert_eq!(outcome.suggestions.len(), 5);
        assert_eq!(outcome.total_found, 20);
        assert_eq!(outcome.total_candidates, 20);
    }

    #[test]
    fn test_empty_pool_is_empty_result() {
        let ranker = Ranker::with_default_weights();

        let outcome = ranker.rank(&create_criteria(), vec![], &HashSet::new(), 10);

        assert!(outcome.suggestions.is_empty());
        assert_eq!(outcome.total_found, 0);
    }
}
