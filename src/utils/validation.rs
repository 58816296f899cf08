use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as JsonValue};
use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn non_empty_object(value: &Map<String, JsonValue>) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("empty"));
    }
    Ok(())
}

/// Treats an explicit `null` like an absent field so both fail validation the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Elapsed times arrive from some clients as numbers of seconds. A numeric
/// zero counts as missing.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => text,
        Some(Raw::Number(number)) if number.as_f64() == Some(0.0) => String::new(),
        Some(Raw::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Elapsed {
        #[serde(default, deserialize_with = "string_or_number")]
        time: String,
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(not_blank("").is_err());
        assert!(not_blank("  \t").is_err());
        assert!(not_blank("4").is_ok());
    }

    #[test]
    fn empty_objects_are_rejected() {
        assert!(non_empty_object(&Map::new()).is_err());
        let mut answers = Map::new();
        answers.insert("q1".into(), json!("4"));
        assert!(non_empty_object(&answers).is_ok());
    }

    #[test]
    fn elapsed_time_accepts_strings_numbers_and_null() {
        let parsed: Elapsed = serde_json::from_value(json!({ "time": "02:05" })).unwrap();
        assert_eq!(parsed.time, "02:05");

        let parsed: Elapsed = serde_json::from_value(json!({ "time": 125 })).unwrap();
        assert_eq!(parsed.time, "125");

        let parsed: Elapsed = serde_json::from_value(json!({ "time": 0 })).unwrap();
        assert_eq!(parsed.time, "");

        let parsed: Elapsed = serde_json::from_value(json!({ "time": "0" })).unwrap();
        assert_eq!(parsed.time, "0");

        let parsed: Elapsed = serde_json::from_value(json!({ "time": null, "label": null })).unwrap();
        assert_eq!(parsed.time, "");
        assert_eq!(parsed.label, "");

        let parsed: Elapsed = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.time, "");
    }

    #[test]
    fn elapsed_time_rejects_other_types() {
        assert!(serde_json::from_value::<Elapsed>(json!({ "time": [1, 2] })).is_err());
    }
}
