//! Path-template resolution and structural request validation.
//!
//! # Design
//! A template is a literal string with `{name}` placeholders. Resolution
//! and validation happen in one pass over the request mapping, and the
//! check is symmetric: every placeholder must be satisfiable from the
//! mapping, and every top-level mapping key must be consumed by a
//! placeholder. Validation also recurses into nested objects and arrays —
//! a `null` anywhere below the top level invalidates the request even when
//! its parent key was consumed.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// Why a request mapping failed resolution against a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathError {
    /// A placeholder had no corresponding key, or the key held a top-level
    /// null.
    MissingData,
    /// The mapping itself is malformed: an unconsumed top-level key, or a
    /// null nested inside an object or array.
    InvalidMapping,
}

/// Substitute every `{name}` placeholder in `template` from `mapping`.
pub(crate) fn resolve(template: &str, mapping: &Map<String, Value>) -> Result<String, PathError> {
    let mut resolved = String::with_capacity(template.len());
    let mut consumed: HashSet<&str> = HashSet::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        resolved.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            // Unterminated brace: keep the remainder literal.
            resolved.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let name = &after_open[..close];
        match mapping.get(name) {
            None | Some(Value::Null) => return Err(PathError::MissingData),
            Some(value) => resolved.push_str(&render(value)),
        }
        consumed.insert(name);
        rest = &after_open[close + 1..];
    }
    resolved.push_str(rest);

    for (key, value) in mapping {
        if !consumed.contains(key.as_str()) {
            return Err(PathError::InvalidMapping);
        }
        if has_nested_null(value) {
            return Err(PathError::InvalidMapping);
        }
    }

    Ok(resolved)
}

/// Placeholder substitution: JSON strings insert raw (no quotes), every
/// other value inserts its JSON rendering.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// True if `value` is a container holding a null at any depth.
///
/// Top-level nulls are not this function's concern; they are caught during
/// placeholder lookup.
fn has_nested_null(value: &Value) -> bool {
    match value {
        Value::Object(map) => map
            .values()
            .any(|v| v.is_null() || has_nested_null(v)),
        Value::Array(items) => items
            .iter()
            .any(|v| v.is_null() || has_nested_null(v)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn template_without_placeholders_passes_through() {
        let resolved = resolve("test", &Map::new()).unwrap();
        assert_eq!(resolved, "test");
    }

    #[test]
    fn string_values_substitute_raw() {
        let resolved = resolve("test/{id}", &mapping(json!({"id": "123"}))).unwrap();
        assert_eq!(resolved, "test/123");
    }

    #[test]
    fn non_string_values_substitute_as_json() {
        let m = mapping(json!({"page": 7, "all": true}));
        let resolved = resolve("items/{page}/{all}", &m).unwrap();
        assert_eq!(resolved, "items/7/true");
    }

    #[test]
    fn string_substitution_inserts_no_quotes() {
        let m = mapping(json!({"id": "a/b"}));
        let resolved = resolve("test/{id}", &m).unwrap();
        // Raw string content, not its JSON rendering `"a/b"`.
        assert_eq!(resolved, "test/a/b");
    }

    #[test]
    fn repeated_placeholder_resolves_each_occurrence() {
        let m = mapping(json!({"id": "9"}));
        let resolved = resolve("a/{id}/b/{id}", &m).unwrap();
        assert_eq!(resolved, "a/9/b/9");
    }

    #[test]
    fn missing_key_is_missing_data() {
        let err = resolve("test/{id}", &Map::new()).unwrap_err();
        assert_eq!(err, PathError::MissingData);
    }

    #[test]
    fn top_level_null_is_missing_data() {
        let err = resolve("test/{id}", &mapping(json!({"id": null}))).unwrap_err();
        assert_eq!(err, PathError::MissingData);
    }

    #[test]
    fn unconsumed_key_is_invalid_mapping() {
        let m = mapping(json!({"id": "123", "extra": 1}));
        let err = resolve("test/{id}", &m).unwrap_err();
        assert_eq!(err, PathError::InvalidMapping);
    }

    #[test]
    fn unconsumed_key_without_placeholders_is_invalid_mapping() {
        let err = resolve("test", &mapping(json!({"id": "123"}))).unwrap_err();
        assert_eq!(err, PathError::InvalidMapping);
    }

    #[test]
    fn nested_null_under_consumed_key_is_invalid_mapping() {
        let m = mapping(json!({"nested": {"not-null": true, "field": null}}));
        let err = resolve("test/{nested}", &m).unwrap_err();
        assert_eq!(err, PathError::InvalidMapping);
    }

    #[test]
    fn nested_null_in_array_is_invalid_mapping() {
        let m = mapping(json!({"items": [1, null, 3]}));
        let err = resolve("test/{items}", &m).unwrap_err();
        assert_eq!(err, PathError::InvalidMapping);
    }

    #[test]
    fn deeply_nested_null_is_invalid_mapping() {
        let m = mapping(json!({"a": {"b": {"c": null}}}));
        let err = resolve("test/{a}", &m).unwrap_err();
        assert_eq!(err, PathError::InvalidMapping);
    }

    #[test]
    fn missing_data_wins_over_invalid_mapping() {
        // Placeholder lookup happens during the scan, before the mapping
        // sweep, so an unresolvable token reports first.
        let m = mapping(json!({"extra": 1}));
        let err = resolve("test/{id}", &m).unwrap_err();
        assert_eq!(err, PathError::MissingData);
    }

    #[test]
    fn unterminated_brace_is_literal() {
        let resolved = resolve("test/{id", &Map::new()).unwrap();
        assert_eq!(resolved, "test/{id");
    }
}
