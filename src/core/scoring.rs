use crate::models::{CandidateProfile, CastingCriteria, ScoringWeights};

/// Compute the match score and reason labels for one candidate.
///
/// Factors are independent and summed (defaults in parentheses):
/// - city match: candidate city contains the criteria city (+30)
/// - age match: candidate age inside the inclusive criteria range (+20)
/// - skills: +10 per candidate skill overlapping a required skill
/// - languages: +10 per overlapping language
/// - completeness: +5 per full 20% of profile completeness (no label)
/// - endorsements: +5 each, capped at +25
/// - verified profile: +10
///
/// Pure function: same inputs always yield the same score and the same
/// reason list in the same order (city, age, skills, languages,
/// endorsements, verified). No factor is ever negative and the total is
/// not normalized to a percentage.
pub fn score_candidate(
    profile: &CandidateProfile,
    criteria: &CastingCriteria,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    let mut score = 0u32;
    let mut details: Vec<String> = Vec::new();

    // City match: case-insensitive substring, tolerant of "Dakar Plateau"
    // style qualifiers on the profile side
    if let (Some(wanted), Some(city)) = (&criteria.city, &profile.city) {
        if city.to_lowercase().contains(&wanted.to_lowercase()) {
            score += weights.city;
            details.push("City match".to_string());
        }
    }

    // Age match: only applies when the casting bounds both ends
    if let (Some(min), Some(max), Some(age)) = (criteria.age_min, criteria.age_max, profile.age) {
        if age >= min && age <= max {
            score += weights.age;
            details.push("Age match".to_string());
        }
    }

    // Skill overlap
    if !criteria.skills.is_empty() {
        let matching = count_overlap(&profile.skills, &criteria.skills);
        if matching > 0 {
            score += matching as u32 * weights.per_skill;
            details.push(format!("{} skill(s) matched", matching));
        }
    }

    // Language overlap
    if !criteria.languages.is_empty() {
        let matching = count_overlap(&profile.languages, &criteria.languages);
        if matching > 0 {
            score += matching as u32 * weights.per_language;
            details.push(format!("{} language(s) matched", matching));
        }
    }

    // Completeness bonus, silent: +1 step per full 20%
    score += (profile.completeness_score as u32 / 20) * weights.completeness_step;

    // Endorsement bonus, capped
    let endorsement_count = profile.endorsement_ratings.len();
    if endorsement_count > 0 {
        let bonus = (endorsement_count as u32 * weights.endorsement_step).min(weights.endorsement_cap);
        score += bonus;

        let avg = profile.endorsement_ratings.iter().map(|r| *r as f64).sum::<f64>()
            / endorsement_count as f64;
        details.push(format!("{:.1}★ ({} reviews)", avg, endorsement_count));
    }

    // Verified profile bonus
    if profile.verified() {
        score += weights.verified;
        details.push("Verified".to_string());
    }

    (score, details)
}

/// Count candidate entries that overlap any required entry, using
/// case-insensitive containment in either direction ("Wolof" matches
/// "Wolof courant" and vice versa).
fn count_overlap(candidate_entries: &[String], required: &[String]) -> usize {
    candidate_entries
        .iter()
        .filter(|entry| {
            let entry_lower = entry.to_lowercase();
            required.iter().any(|req| {
                let req_lower = req.to_lowercase();
                entry_lower.contains(&req_lower) || req_lower.contains(&entry_lower)
            })
        })
        .count()
}
