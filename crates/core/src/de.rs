//! Deserialization helpers for caller-supplied option maps.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Accept an identifier written either as a JSON string or a number.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "opt_string_or_number")]
        id: Option<String>,
    }

    #[test]
    fn test_accepts_string_number_and_missing() {
        let h: Holder = serde_json::from_str(r#"{"id": "123"}"#).unwrap();
        assert_eq!(h.id.as_deref(), Some("123"));
        let h: Holder = serde_json::from_str(r#"{"id": 456}"#).unwrap();
        assert_eq!(h.id.as_deref(), Some("456"));
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(h.id.is_none());
        let h: Holder = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert!(h.id.is_none());
    }
}
