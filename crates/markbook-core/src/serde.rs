//! Serde helpers for records assembled by form-driven clients.
//!
//! Forms tend to send `""` for untouched inputs and numbers as strings. These
//! helpers fold both shapes into `Option` so validators only ever see "absent"
//! or a real value. Use them with `#[serde(default, deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional string, treating an empty string as `None`.
pub fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Deserializes an optional number that may arrive as a JSON number or a numeric string.
///
/// Blank strings and `null` become `None`; anything else that is not a number is rejected.
pub fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("number out of range")),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "deserialize_blank_as_none")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_f64")]
        marks: Option<f64>,
    }

    #[test]
    fn test_blank_string_is_none() {
        let form: Form = serde_json::from_str(r#"{"name": "", "marks": ""}"#).unwrap();
        assert!(form.name.is_none());
        assert!(form.marks.is_none());
    }

    #[test]
    fn test_missing_fields_are_none() {
        let form: Form = serde_json::from_str("{}").unwrap();
        assert!(form.name.is_none());
        assert!(form.marks.is_none());
    }

    #[test]
    fn test_numeric_string_is_parsed() {
        let form: Form = serde_json::from_str(r#"{"marks": " 42.5 "}"#).unwrap();
        assert_eq!(form.marks, Some(42.5));

        let form: Form = serde_json::from_str(r#"{"marks": 0}"#).unwrap();
        assert_eq!(form.marks, Some(0.0));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        assert!(serde_json::from_str::<Form>(r#"{"marks": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Form>(r#"{"marks": true}"#).is_err());
    }
}
