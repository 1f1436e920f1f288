use crate::models::CastingCriteria;
use serde_json::Value;

/// Normalize a casting's raw criteria payload into a structured filter.
///
/// The platform stores criteria as an opaque column, so the payload may be a
/// structured object, a JSON-encoded string, a plain string, or absent. A
/// payload that cannot be interpreted never aborts ranking: an unparseable
/// string is reused as a city filter, and anything else degrades to an open
/// filter.
pub fn parse_criteria(raw: Option<&Value>) -> CastingCriteria {
    let criteria = match raw {
        None | Some(Value::Null) => CastingCriteria::default(),
        Some(Value::String(s)) => parse_criteria_str(s),
        Some(value @ Value::Object(_)) => from_object(value),
        // Scalar or array payloads carry no recognizable keys
        Some(_) => CastingCriteria::default(),
    };

    normalize(criteria)
}

fn parse_criteria_str(raw: &str) -> CastingCriteria {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CastingCriteria::default();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value @ Value::Object(_)) => from_object(&value),
        Ok(Value::Null) => CastingCriteria::default(),
        // Valid JSON but not an object: no recognizable keys
        Ok(_) => CastingCriteria::default(),
        // Not JSON at all: treat the whole string as a city filter
        Err(_) => CastingCriteria {
            city: Some(trimmed.to_string()),
            ..Default::default()
        },
    }
}

fn from_object(value: &Value) -> CastingCriteria {
    // Recognized keys are read one at a time: a wrong-typed field drops only
    // itself, never its valid siblings.
    CastingCriteria {
        city: field_str(value, &["city", "ville"]),
        age_min: field_age(value, "ageMin"),
        age_max: field_age(value, "ageMax"),
        gender: field_str(value, &["gender"]),
        skills: field_str_list(value, &["skills", "competences"]),
        languages: field_str_list(value, &["languages", "langues"]),
    }
}

fn field_str(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| value.get(k))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn field_age(value: &Value, key: &str) -> Option<u8> {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok())
}

fn field_str_list(value: &Value, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .find_map(|k| value.get(k))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Clean up a parsed criteria value: blank strings impose no constraint,
/// and an inverted age range is reordered so min <= max always holds.
fn normalize(mut criteria: CastingCriteria) -> CastingCriteria {
    criteria.city = criteria
        .city
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    criteria.gender = criteria
        .gender
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty());
    criteria.skills.retain(|s| !s.trim().is_empty());
    criteria.languages.retain(|l| !l.trim().is_empty());

    if let (Some(min), Some(max)) = (criteria.age_min, criteria.age_max) {
        if min > max {
            criteria.age_min = Some(max);
            criteria.age_max = Some(min);
        }
    }

    criteria
}
