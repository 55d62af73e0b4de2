//! Loggable values
//!
//! The `error`, `debug` and `verbose` channels accept arbitrary structured
//! input. Instead of open-ended reflection, input is converted into
//! [`Value`], a closed set of shapes: absent, null, primitives, sequences,
//! keyed structures and invocables. Everything the dump channels print is
//! derived from that shape alone.

mod summarize;

pub use summarize::{
    DEEP_PLACEHOLDER, DebugEntry, NESTED_PLACEHOLDER, PropertyDetail, TypedValue, debug_entries,
    inspect, summarize,
};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Number;

/// Structured input for the dump channels
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value at all
    Absent,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(Number),
    /// Text
    String(String),
    /// Ordered elements
    Sequence(Vec<Value>),
    /// Named fields in insertion order, optionally tagged with a type name
    Keyed {
        /// Type label reported as the constructor, `Object` when absent
        type_name: Option<String>,
        /// Fields
        entries: IndexMap<String, Value>,
    },
    /// Something callable, carried as its name and source text
    Invocable {
        /// Function name
        name: String,
        /// Source text
        body: String,
    },
}

impl Value {
    /// Untyped keyed structure
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Keyed {
            type_name: None,
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Keyed structure reporting `type_name` as its constructor
    pub fn typed<K, V>(type_name: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        match Value::object(entries) {
            Value::Keyed { entries, .. } => Value::Keyed {
                type_name: Some(type_name.into()),
                entries,
            },
            other => other,
        }
    }

    /// Invocable with its source text
    pub fn function(name: impl Into<String>, body: impl Into<String>) -> Self {
        Value::Invocable {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Convert any serializable value. Serialization errors become their
    /// message so that logging never fails.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => json.into(),
            Err(err) => Value::String(err.to_string()),
        }
    }

    /// Runtime type name: `undefined`, `object`, `boolean`, `number`,
    /// `string` or `function`. Null and sequences report `object`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Absent => "undefined",
            Value::Null | Value::Sequence(_) | Value::Keyed { .. } => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Invocable { .. } => "function",
        }
    }

    /// Non-null structure: a sequence or a keyed value
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Keyed { .. })
    }

    /// Whether the value is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Constructor label, `None` for null and absent
    pub fn constructor_name(&self) -> Option<&str> {
        match self {
            Value::Absent | Value::Null => None,
            Value::Bool(_) => Some("Boolean"),
            Value::Number(_) => Some("Number"),
            Value::String(_) => Some("String"),
            Value::Sequence(_) => Some("Array"),
            Value::Keyed { type_name, .. } => Some(type_name.as_deref().unwrap_or("Object")),
            Value::Invocable { .. } => Some("Function"),
        }
    }

    /// Character count of strings, element count of sequences
    pub fn natural_len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Sequence(items) => Some(items.len()),
            _ => None,
        }
    }

    /// JSON projection. Absent and invocable values have none: they are
    /// dropped from keyed structures and become `null` inside sequences.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        use serde_json::Value as Json;

        match self {
            Value::Absent | Value::Invocable { .. } => None,
            Value::Null => Some(Json::Null),
            Value::Bool(b) => Some(Json::Bool(*b)),
            Value::Number(n) => Some(Json::Number(n.clone())),
            Value::String(s) => Some(Json::String(s.clone())),
            Value::Sequence(items) => Some(Json::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(Json::Null))
                    .collect(),
            )),
            Value::Keyed { entries, .. } => Some(Json::Object(
                entries
                    .iter()
                    .filter_map(|(k, v)| v.to_json().map(|json| (k.clone(), json)))
                    .collect(),
            )),
        }
    }

    /// Indented JSON text, falling back to string coercion when the value
    /// has no JSON projection
    pub fn to_pretty_json(&self) -> String {
        self.to_json()
            .and_then(|json| serde_json::to_string_pretty(&json).ok())
            .unwrap_or_else(|| self.coerce_to_string())
    }

    /// Plain text form
    pub fn coerce_to_string(&self) -> String {
        match self {
            Value::Absent => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Sequence(items) => items
                .iter()
                .map(|item| match item {
                    Value::Absent | Value::Null => String::new(),
                    other => other.coerce_to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Keyed { .. } => "[object Object]".to_string(),
            Value::Invocable { body, .. } => body.clone(),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Keyed {
                type_name: None,
                entries: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::from(f64::from(n))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_key_order() {
        let value = Value::from(json!({"zeta": 1, "alpha": 2}));
        let Value::Keyed { entries, .. } = value else {
            panic!("expected keyed value");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_type_of() {
        assert_eq!(Value::Absent.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::from(vec![1, 2]).type_of(), "object");
        assert_eq!(Value::from(1.5).type_of(), "number");
        assert_eq!(Value::from("x").type_of(), "string");
        assert_eq!(Value::from(true).type_of(), "boolean");
        assert_eq!(Value::function("run", "fn run() {}").type_of(), "function");
    }

    #[test]
    fn test_constructor_name() {
        assert_eq!(Value::Null.constructor_name(), None);
        assert_eq!(Value::from(vec![1]).constructor_name(), Some("Array"));
        assert_eq!(Value::object([("a", 1)]).constructor_name(), Some("Object"));
        assert_eq!(
            Value::typed("Invoice", [("id", 7)]).constructor_name(),
            Some("Invoice")
        );
    }

    #[test]
    fn test_to_json_drops_absent_and_invocable() {
        let value = Value::object([
            ("id", Value::from(7)),
            ("missing", Value::Absent),
            ("send", Value::function("send", "fn send() {}")),
            ("tags", Value::from(vec![Value::from("a"), Value::Absent])),
        ]);

        assert_eq!(value.to_json(), Some(json!({"id": 7, "tags": ["a", null]})));
        assert_eq!(Value::Absent.to_json(), None);
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let value = Value::from(json!({"code": 5}));
        assert_eq!(value.to_pretty_json(), "{\n  \"code\": 5\n}");
        assert_eq!(Value::Absent.to_pretty_json(), "undefined");
    }

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(Value::from(5).coerce_to_string(), "5");
        assert_eq!(Value::from(2.5).coerce_to_string(), "2.5");
        assert_eq!(Value::Null.coerce_to_string(), "null");
        assert_eq!(
            Value::from(json!([1, null, [2, 3]])).coerce_to_string(),
            "1,,2,3"
        );
        assert_eq!(Value::object([("a", 1)]).coerce_to_string(), "[object Object]");
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
    }

    #[test]
    fn test_from_serialize() {
        #[derive(Serialize)]
        struct Order {
            id: u32,
            paid: bool,
        }

        let value = Value::from_serialize(&Order { id: 3, paid: false });
        assert_eq!(value.to_json(), Some(json!({"id": 3, "paid": false})));
    }
}
