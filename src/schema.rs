//! Request-body validation for post payloads.
//!
//! A post payload is an object with string-typed `title` and `body`, both
//! required. Validation is a pure predicate over the decoded
//! `serde_json::Value`; on failure it yields one message describing the
//! first violation. The exact wording is load-bearing — deployed clients
//! match on these strings — so values are rendered with [`repr`] below
//! rather than re-serialized as JSON.

use serde_json::Value;

/// Fields a post payload must carry, in reporting order.
const REQUIRED_STRING_FIELDS: [&str; 2] = ["title", "body"];

/// Validates a decoded payload against the post shape.
///
/// Returns the first violation as a human-readable message. Type errors on
/// present keys are reported before missing required keys.
pub fn validate_post(value: &Value) -> Result<(), String> {
    let Value::Object(object) = value else {
        return Err(format!("{} is not of type 'object'", repr(value)));
    };
    for key in REQUIRED_STRING_FIELDS {
        if let Some(field) = object.get(key) {
            if !field.is_string() {
                return Err(format!("{} is not of type 'string'", repr(field)));
            }
        }
    }
    for key in REQUIRED_STRING_FIELDS {
        if !object.contains_key(key) {
            return Err(format!("'{key}' is a required property"));
        }
    }
    Ok(())
}

/// Renders a value the way clients expect it quoted in violation messages:
/// numbers as-is, strings single-quoted, `True`/`False`/`None` for the
/// literals, containers recursively.
fn repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_owned(),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(repr).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("'{k}': {}", repr(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_payload_passes() {
        let value = json!({"title": "Example Post", "body": "Just a test"});
        assert_eq!(validate_post(&value), Ok(()));
    }

    #[test]
    fn extra_keys_are_allowed() {
        let value = json!({"title": "t", "body": "b", "tags": [1, 2]});
        assert_eq!(validate_post(&value), Ok(()));
    }

    #[test]
    fn missing_body_is_reported_by_name() {
        let value = json!({"title": "Example Post"});
        assert_eq!(
            validate_post(&value).unwrap_err(),
            "'body' is a required property"
        );
    }

    #[test]
    fn missing_title_is_reported_first() {
        let value = json!({"body": "Just a test"});
        assert_eq!(
            validate_post(&value).unwrap_err(),
            "'title' is a required property"
        );
    }

    #[test]
    fn numeric_body_is_a_type_violation() {
        let value = json!({"title": "Example Post", "body": 32});
        assert_eq!(
            validate_post(&value).unwrap_err(),
            "32 is not of type 'string'"
        );
    }

    #[test]
    fn type_violation_wins_over_a_missing_key() {
        let value = json!({"title": 32});
        assert_eq!(
            validate_post(&value).unwrap_err(),
            "32 is not of type 'string'"
        );
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert_eq!(
            validate_post(&json!("free text")).unwrap_err(),
            "'free text' is not of type 'object'"
        );
        assert_eq!(
            validate_post(&json!(null)).unwrap_err(),
            "None is not of type 'object'"
        );
    }

    #[test]
    fn literals_render_in_client_convention() {
        assert_eq!(
            validate_post(&json!({"title": "t", "body": true})).unwrap_err(),
            "True is not of type 'string'"
        );
        assert_eq!(
            validate_post(&json!({"title": "t", "body": null})).unwrap_err(),
            "None is not of type 'string'"
        );
        assert_eq!(
            validate_post(&json!({"title": "t", "body": ["a", 1]})).unwrap_err(),
            "['a', 1] is not of type 'string'"
        );
    }
}
