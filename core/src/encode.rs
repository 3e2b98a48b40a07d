//! Request body encoding: form-encoded query strings and raw JSON.

use std::collections::BTreeMap;

/// Request data mapping. A `BTreeMap` keeps iteration deterministic so the
/// encoded body is stable for a given mapping.
pub type Params = BTreeMap<String, String>;

/// Encode `data` as a flat form query string: percent-encoded keys and
/// values joined `k=v` with `&` between entries.
pub fn form_encode(data: &Params) -> String {
    data.iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Serialize `data` as a JSON object, with no wrapping beyond the object
/// braces themselves.
pub fn json_encode(data: &Params) -> String {
    let object: serde_json::Map<String, serde_json::Value> = data
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
        .collect();
    serde_json::Value::Object(object).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, &str)]) -> Params {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn form_encode_percent_encodes_values() {
        assert_eq!(form_encode(&params(&[("a", "b c")])), "a=b%20c");
    }

    #[test]
    fn form_encode_joins_entries_with_ampersand() {
        assert_eq!(form_encode(&params(&[("a", "1"), ("b", "2")])), "a=1&b=2");
    }

    #[test]
    fn form_encode_escapes_joiner_characters_in_data() {
        assert_eq!(form_encode(&params(&[("k", "a=b&c")])), "k=a%3Db%26c");
    }

    #[test]
    fn form_encode_empty_mapping_is_empty_string() {
        assert_eq!(form_encode(&Params::new()), "");
    }

    #[test]
    fn json_encode_is_exact_object_serialization() {
        assert_eq!(json_encode(&params(&[("a", "b")])), r#"{"a":"b"}"#);
    }

    #[test]
    fn json_encode_preserves_spaces_verbatim() {
        assert_eq!(json_encode(&params(&[("a", "b c")])), r#"{"a":"b c"}"#);
    }
}
