use crate::models::{CandidateProfile, ProfileStatus};
use std::collections::HashSet;

/// Check whether a candidate may enter the scoring pool at all.
///
/// Hard eligibility rules, applied unconditionally regardless of score:
/// - only approved profiles are rankable
/// - candidates who already applied to this casting are removed
#[inline]
pub fn is_eligible(profile: &CandidateProfile, exclusions: &HashSet<String>) -> bool {
    if profile.status != ProfileStatus::Approved {
        return false;
    }

    if exclusions.contains(&profile.id) {
        return false;
    }

    true
}

/// Produce the eligible pool from a raw candidate fetch.
///
/// The directory query may pre-filter by city/age, but is allowed to return
/// a superset; eligibility is re-checked here and soft scoring handles the
/// rest. The pool is capped to bound scoring cost, ordered by id first so
/// truncation is deterministic.
pub fn filter_pool(
    candidates: Vec<CandidateProfile>,
    exclusions: &HashSet<String>,
    pool_cap: usize,
) -> Vec<CandidateProfile> {
    let mut pool: Vec<CandidateProfile> = candidates
        .into_iter()
        .filter(|profile| is_eligible(profile, exclusions))
        .collect();

    pool.sort_by(|a, b| a.id.cmp(&b.id));
    pool.truncate(pool_cap);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_profile(id: &str, status: ProfileStatus) -> CandidateProfile {
        CandidateProfile {
            id: id.to_string(),
            user_id: format!("user_{}", id),
            name: None,
            status,
            city: Some("Dakar".to_string()),
            age: Some(25),
            gender: None,
            skills: vec![],
            languages: vec![],
            completeness_score: 60,
            is_verified: Some(false),
            endorsement_ratings: vec![],
            photo: None,
        }
    }

    #[test]
    fn test_only_approved_eligible() {
        let exclusions = HashSet::new();

        assert!(is_eligible(&create_profile("a", ProfileStatus::Approved), &exclusions));
        assert!(!is_eligible(&create_profile("b", ProfileStatus::Draft), &exclusions));
        assert!(!is_eligible(&create_profile("c", ProfileStatus::PendingReview), &exclusions));
        assert!(!is_eligible(&create_profile("d", ProfileStatus::Rejected), &exclusions));
    }

    #[test]
    fn test_excluded_candidate_filtered() {
        let mut exclusions = HashSet::new();
        exclusions.insert("a".to_string());

        assert!(!is_eligible(&create_profile("a", ProfileStatus::Approved), &exclusions));
        assert!(is_eligible(&create_profile("b", ProfileStatus::Approved), &exclusions));
    }

    #[test]
    fn test_pool_cap_deterministic() {
        let exclusions = HashSet::new();
        // Deliberately unsorted input
        let candidates = vec![
            create_profile("c", ProfileStatus::Approved),
            create_profile("a", ProfileStatus::Approved),
            create_profile("b", ProfileStatus::Approved),
        ];

        let pool = filter_pool(candidates, &exclusions, 2);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].id, "a");
        assert_eq!(pool[1].id, "b");
    }

    #[test]
    fn test_filter_pool_drops_unapproved() {
        let exclusions = HashSet::new();
        let candidates = vec![
            create_profile("a", ProfileStatus::Approved),
            create_profile("b", ProfileStatus::Draft),
        ];

        let pool = filter_pool(candidates, &exclusions, 50);

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, "a");
    }
}
