//! Depth-bounded projections used by the dump channels

use serde::Serialize;

use super::Value;

/// Replaces structure below the summarization depth
pub const DEEP_PLACEHOLDER: &str = "[Deep Object]";

/// Replaces nested structure in debug dumps
pub const NESTED_PLACEHOLDER: &str = "[Object]";

/// Reduce a value to at most `depth` levels of structure.
///
/// At depth zero the value is replaced by [`DEEP_PLACEHOLDER`] whatever it
/// is. Sequences and keyed values are rebuilt with their children
/// summarized one level lower; everything else passes through unchanged.
pub fn summarize(value: &Value, depth: usize) -> Value {
    if depth == 0 {
        return Value::String(DEEP_PLACEHOLDER.to_string());
    }

    match value {
        Value::Sequence(items) => {
            Value::Sequence(items.iter().map(|item| summarize(item, depth - 1)).collect())
        }
        Value::Keyed {
            type_name,
            entries,
        } => Value::Keyed {
            type_name: type_name.clone(),
            entries: entries
                .iter()
                .map(|(k, v)| (k.clone(), summarize(v, depth - 1)))
                .collect(),
        },
        other => other.clone(),
    }
}

/// Property description produced by [`inspect`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    /// Property name
    pub key: String,
    /// Runtime type name, see [`Value::type_of`]
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Display-safe value; omitted for absent and invocable properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Value is a sequence
    pub is_array: bool,
    /// Value is null
    pub is_null: bool,
    /// Value is absent
    pub is_undefined: bool,
    /// Constructor label or `N/A`
    pub constructor: String,
    /// Value is invocable
    pub is_method: bool,
    /// Source text of invocable values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Length of string and sequence values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

/// Entry produced by [`debug_entries`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugEntry {
    /// Property name
    pub key: String,
    /// Runtime type name
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Primitive value or [`NESTED_PLACEHOLDER`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Value is invocable
    pub is_method: bool,
}

/// `{type, value}` wrapper for scalar input to the verbose channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedValue {
    /// Runtime type name
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// JSON projection, omitted when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl TypedValue {
    /// Wrap a value
    pub fn of(value: &Value) -> Self {
        Self {
            kind: value.type_of(),
            value: value.to_json(),
        }
    }
}

/// Describe every property of a structured value.
///
/// Keyed values contribute their entries in order; sequences contribute
/// their indices followed by `length`. Nested structure is not walked:
/// it is summarized at depth zero.
pub fn inspect(value: &Value) -> Vec<PropertyDetail> {
    properties(value, true)
        .into_iter()
        .map(|(key, value)| describe(key, &value))
        .collect()
}

/// Shallow per-key listing for the debug channel.
///
/// Non-structured input yields an empty list.
pub fn debug_entries(value: &Value) -> Vec<DebugEntry> {
    properties(value, false)
        .into_iter()
        .map(|(key, value)| DebugEntry {
            key,
            kind: value.type_of(),
            value: if value.is_structured() {
                Some(serde_json::Value::String(NESTED_PLACEHOLDER.to_string()))
            } else {
                value.to_json()
            },
            is_method: matches!(value, Value::Invocable { .. }),
        })
        .collect()
}

fn properties(value: &Value, with_length: bool) -> Vec<(String, Value)> {
    match value {
        Value::Keyed { entries, .. } => entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        Value::Sequence(items) => {
            let mut props: Vec<(String, Value)> = items
                .iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item.clone()))
                .collect();
            if with_length {
                props.push(("length".to_string(), Value::from(items.len())));
            }
            props
        }
        _ => Vec::new(),
    }
}

fn describe(key: String, value: &Value) -> PropertyDetail {
    let summary = if value.is_structured() {
        summarize(value, 0).to_json()
    } else {
        value.to_json()
    };

    PropertyDetail {
        key,
        kind: value.type_of(),
        value: summary,
        is_array: value.is_sequence(),
        is_null: matches!(value, Value::Null),
        is_undefined: matches!(value, Value::Absent),
        constructor: value.constructor_name().unwrap_or("N/A").to_string(),
        is_method: matches!(value, Value::Invocable { .. }),
        body: match value {
            Value::Invocable { body, .. } => Some(body.clone()),
            _ => None,
        },
        length: value.natural_len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"a": 1}))]
    #[case(json!([1, 2, 3]))]
    #[case(json!("text"))]
    #[case(json!(null))]
    fn test_depth_zero_is_placeholder(#[case] input: serde_json::Value) {
        assert_eq!(
            summarize(&Value::from(input), 0),
            Value::String(DEEP_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn test_one_level_consumed() {
        let value = Value::from(json!({"a": {"b": 1}}));
        assert_eq!(
            summarize(&value, 1).to_json(),
            Some(json!({"a": "[Deep Object]"}))
        );
    }

    #[test]
    fn test_sequences_and_scalars() {
        let value = Value::from(json!([1, {"x": [2]}, "s"]));
        assert_eq!(
            summarize(&value, 2).to_json(),
            Some(json!([1, {"x": "[Deep Object]"}, "s"]))
        );
        assert_eq!(summarize(&Value::from(4), 1), Value::from(4));
    }

    #[test]
    fn test_summarize_keeps_type_name() {
        let value = Value::typed("Invoice", [("lines", Value::from(vec![1, 2]))]);
        let summary = summarize(&value, 1);
        assert_eq!(summary.constructor_name(), Some("Invoice"));
    }

    #[test]
    fn test_inspect_keyed() {
        let value = Value::typed(
            "User",
            [
                ("name", Value::from("ada")),
                ("roles", Value::from(vec!["admin"])),
                ("manager", Value::Null),
                ("nickname", Value::Absent),
                ("greet", Value::function("greet", "fn greet() {}")),
            ],
        );

        let details = serde_json::to_value(inspect(&value)).unwrap();
        assert_eq!(
            details,
            json!([
                {
                    "key": "name", "type": "string", "value": "ada",
                    "isArray": false, "isNull": false, "isUndefined": false,
                    "constructor": "String", "isMethod": false, "length": 3
                },
                {
                    "key": "roles", "type": "object", "value": "[Deep Object]",
                    "isArray": true, "isNull": false, "isUndefined": false,
                    "constructor": "Array", "isMethod": false, "length": 1
                },
                {
                    "key": "manager", "type": "object", "value": null,
                    "isArray": false, "isNull": true, "isUndefined": false,
                    "constructor": "N/A", "isMethod": false
                },
                {
                    "key": "nickname", "type": "undefined",
                    "isArray": false, "isNull": false, "isUndefined": true,
                    "constructor": "N/A", "isMethod": false
                },
                {
                    "key": "greet", "type": "function",
                    "isArray": false, "isNull": false, "isUndefined": false,
                    "constructor": "Function", "isMethod": true,
                    "body": "fn greet() {}"
                }
            ])
        );
    }

    #[test]
    fn test_inspect_sequence_lists_length() {
        let keys: Vec<String> = inspect(&Value::from(vec![10, 20]))
            .into_iter()
            .map(|detail| detail.key)
            .collect();
        assert_eq!(keys, ["0", "1", "length"]);
    }

    #[test]
    fn test_inspect_scalar_is_empty() {
        assert!(inspect(&Value::from(3)).is_empty());
    }

    #[test]
    fn test_debug_entries() {
        let value = Value::object([
            ("id", Value::from(9)),
            ("meta", Value::from(json!({"a": 1}))),
            ("list", Value::from(vec![1])),
            ("gone", Value::Null),
            ("run", Value::function("run", "fn run() {}")),
        ]);

        let entries = serde_json::to_value(debug_entries(&value)).unwrap();
        assert_eq!(
            entries,
            json!([
                {"key": "id", "type": "number", "value": 9, "isMethod": false},
                {"key": "meta", "type": "object", "value": "[Object]", "isMethod": false},
                {"key": "list", "type": "object", "value": "[Object]", "isMethod": false},
                {"key": "gone", "type": "object", "value": null, "isMethod": false},
                {"key": "run", "type": "function", "isMethod": true}
            ])
        );
    }

    #[test]
    fn test_debug_entries_of_sequence_use_indices() {
        let keys: Vec<String> = debug_entries(&Value::from(vec!["a", "b"]))
            .into_iter()
            .map(|entry| entry.key)
            .collect();
        assert_eq!(keys, ["0", "1"]);
        assert!(debug_entries(&Value::from("text")).is_empty());
    }

    #[test]
    fn test_typed_value() {
        assert_eq!(
            serde_json::to_value(TypedValue::of(&Value::from(42))).unwrap(),
            json!({"type": "number", "value": 42})
        );
        assert_eq!(
            serde_json::to_value(TypedValue::of(&Value::Absent)).unwrap(),
            json!({"type": "undefined"})
        );
        assert_eq!(
            serde_json::to_value(TypedValue::of(&Value::Null)).unwrap(),
            json!({"type": "object", "value": null})
        );
    }
}
