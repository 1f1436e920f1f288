// Unit tests for Kilife Match

use kilife_match::core::{
    criteria::parse_criteria,
    filters::{filter_pool, is_eligible},
    scoring::score_candidate,
};
use kilife_match::models::{CandidateProfile, CastingCriteria, ProfileStatus, ScoringWeights};
use serde_json::json;
use std::collections::HashSet;

fn create_profile(id: &str) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        user_id: format!("user_{}", id),
        name: Some("Khadija Sow".to_string()),
        status: ProfileStatus::Approved,
        city: Some("Dakar".to_string()),
        age: Some(28),
        gender: Some("F".to_string()),
        skills: vec!["Wolof".to_string(), "Théâtre classique".to_string()],
        languages: vec!["Wolof".to_string(), "Anglais".to_string()],
        completeness_score: 80,
        is_verified: Some(true),
        endorsement_ratings: vec![5, 4],
        photo: None,
    }
}

#[test]
fn test_parse_criteria_object_payload() {
    let raw = json!({"ville": "Dakar", "ageMin": 23, "ageMax": 32, "competences": ["Wolof"]});

    let criteria = parse_criteria(Some(&raw));

    assert_eq!(criteria.city.as_deref(), Some("Dakar"));
    assert_eq!(criteria.age_min, Some(23));
    assert_eq!(criteria.age_max, Some(32));
    assert_eq!(criteria.skills, vec!["Wolof"]);
}

#[test]
fn test_parse_criteria_stringified_json() {
    let raw = json!("{\"ville\":\"Thiès\",\"langues\":[\"Sérère\"]}");

    let criteria = parse_criteria(Some(&raw));

    assert_eq!(criteria.city.as_deref(), Some("Thiès"));
    assert_eq!(criteria.languages, vec!["Sérère"]);
}

#[test]
fn test_parse_criteria_plain_string_is_city() {
    let raw = json!("Saint-Louis");

    let criteria = parse_criteria(Some(&raw));

    assert_eq!(criteria.city.as_deref(), Some("Saint-Louis"));
    assert!(criteria.skills.is_empty());
    assert!(criteria.age_min.is_none());
}

#[test]
fn test_parse_criteria_never_panics_on_junk() {
    for raw in [
        json!("{{{{"),
        json!("null"),
        json!(3.5),
        json!(true),
        json!({"ageMin": "not a number"}),
        json!([["nested"]]),
    ] {
        // Must degrade, never abort
        let _ = parse_criteria(Some(&raw));
    }
}

#[test]
fn test_eligibility_rules() {
    let exclusions: HashSet<String> = ["b".to_string()].into_iter().collect();

    let approved = create_profile("a");
    assert!(is_eligible(&approved, &exclusions));

    let mut pending = create_profile("c");
    pending.status = ProfileStatus::PendingReview;
    assert!(!is_eligible(&pending, &exclusions));

    let applied = create_profile("b");
    assert!(!is_eligible(&applied, &exclusions));
}

#[test]
fn test_filter_pool_cap_and_order() {
    let candidates: Vec<CandidateProfile> =
        (0..8).rev().map(|i| create_profile(&format!("p{}", i))).collect();

    let pool = filter_pool(candidates, &HashSet::new(), 3);

    assert_eq!(pool.len(), 3);
    assert_eq!(pool[0].id, "p0");
    assert_eq!(pool[2].id, "p2");
}

#[test]
fn test_score_city_match() {
    let profile = create_profile("a");
    let criteria = CastingCriteria {
        city: Some("dakar".to_string()),
        ..Default::default()
    };

    let (_, details) = score_candidate(&profile, &criteria, &ScoringWeights::default());

    assert!(details.contains(&"City match".to_string()));
}

#[test]
fn test_score_no_negative_factors() {
    // A profile matching nothing still gets no penalty
    let mut profile = create_profile("a");
    profile.city = Some("Ziguinchor".to_string());
    profile.age = Some(55);
    profile.skills = vec!["Cascades".to_string()];
    profile.languages = vec![];
    profile.completeness_score = 0;
    profile.is_verified = Some(false);
    profile.endorsement_ratings = vec![];

    let criteria = CastingCriteria {
        city: Some("Dakar".to_string()),
        age_min: Some(20),
        age_max: Some(30),
        skills: vec!["Chant".to_string()],
        languages: vec!["Wolof".to_string()],
        ..Default::default()
    };

    let (score, details) = score_candidate(&profile, &criteria, &ScoringWeights::default());

    assert_eq!(score, 0);
    assert!(details.is_empty());
}

#[test]
fn test_score_bidirectional_skill_containment() {
    let mut profile = create_profile("a");
    profile.skills = vec!["Anglais courant".to_string()];

    // Required skill contained in the candidate's entry
    let criteria = CastingCriteria {
        skills: vec!["Anglais".to_string()],
        ..Default::default()
    };
    let (_, details) = score_candidate(&profile, &criteria, &ScoringWeights::default());
    assert!(details.contains(&"1 skill(s) matched".to_string()));

    // Candidate's entry contained in the required skill
    let criteria = CastingCriteria {
        skills: vec!["Anglais courant des affaires".to_string()],
        ..Default::default()
    };
    let (_, details) = score_candidate(&profile, &criteria, &ScoringWeights::default());
    assert!(details.contains(&"1 skill(s) matched".to_string()));
}

#[test]
fn test_endorsement_average_rendering() {
    let mut profile = create_profile("a");
    profile.endorsement_ratings = vec![5, 4, 4];

    let (_, details) =
        score_candidate(&profile, &CastingCriteria::default(), &ScoringWeights::default());

    assert!(details.contains(&"4.3★ (3 reviews)".to_string()));
}
