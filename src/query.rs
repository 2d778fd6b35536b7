use crate::error::IncreaseError;
use serde::Serialize;
use serde_json::Value;

/// Flatten serializable list parameters into query pairs. Nested objects use
/// dotted keys (`created_at.after`), arrays are comma-joined and `null`
/// values are dropped.
pub fn encode<T: Serialize>(params: &T) -> Result<Vec<(String, String)>, IncreaseError> {
    let mut pairs = Vec::new();
    match serde_json::to_value(params)? {
        Value::Object(map) => {
            for (key, value) in map {
                push(&mut pairs, key, value);
            }
        }
        Value::Null => {}
        _ => {
            return Err(IncreaseError::InvalidParameter(
                "query parameters must serialize to an object",
            ));
        }
    }
    Ok(pairs)
}

fn push(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (sub, value) in map {
                push(pairs, format!("{key}.{sub}"), value);
            }
        }
        Value::Array(items) => {
            let joined: Vec<String> = items.into_iter().filter_map(scalar).collect();
            if !joined.is_empty() {
                pairs.push((key, joined.join(",")));
            }
        }
        other => {
            if let Some(v) = scalar(other) {
                pairs.push((key, v));
            }
        }
    }
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_and_list_values() {
        let params = json!({
            "cursor": "abc",
            "limit": 10,
            "account_id": null,
            "created_at": { "after": "2024-01-01T00:00:00Z", "before": null },
            "status": { "in": ["pending", "complete"] }
        });
        let pairs = encode(&params).expect("encodes");
        assert_eq!(
            pairs,
            vec![
                ("created_at.after".to_string(), "2024-01-01T00:00:00Z".to_string()),
                ("cursor".to_string(), "abc".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("status.in".to_string(), "pending,complete".to_string()),
            ]
        );
    }

    #[test]
    fn empty_arrays_are_omitted() {
        let pairs = encode(&json!({ "category": { "in": [] } })).expect("encodes");
        assert!(pairs.is_empty());
    }

    #[test]
    fn rejects_non_object_params() {
        assert!(matches!(
            encode(&json!([1, 2])),
            Err(IncreaseError::InvalidParameter(_))
        ));
    }
}
