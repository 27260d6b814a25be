//! Values stored in an item's data bag and in a record's attributes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A JSON-compatible value held under a field key.
///
/// Serialized untagged so the data bag reads like the plain mapping the
/// document store keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view used for roll contexts; floats are truncated.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Float(value) if value.is_finite() => Some(*value as i64),
            FieldValue::Text(value) => value.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Short type label for validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Text(_) => "text",
            FieldValue::List(_) => "list",
            FieldValue::Map(_) => "map",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Boolean(value) => write!(f, "{}", value),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Text(value) => write!(f, "{}", value),
            FieldValue::List(values) => write!(f, "[{} values]", values.len()),
            FieldValue::Map(values) => write!(f, "{{{} entries}}", values.len()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// A value as it arrives from an input control, before coercion.
///
/// Checkbox inputs report their checked state rather than their text value;
/// see [`crate::FieldPath::coerce`] for how each shape is turned into a
/// [`FieldValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RawValue {
    /// A checkbox input, carrying whether it is checked.
    Checkbox(bool),
    /// The text of a text-like input (text, number, select).
    Text(String),
    /// An already-typed value.
    Value(FieldValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_maps_to_natural_variants() {
        let parsed: BTreeMap<String, FieldValue> = serde_json::from_str(
            r#"{"a": null, "b": true, "c": 3, "d": 2.5, "e": "x", "f": [1], "g": {"h": 1}}"#,
        )
        .unwrap();
        assert_eq!(parsed["a"], FieldValue::Null);
        assert_eq!(parsed["b"], FieldValue::Boolean(true));
        assert_eq!(parsed["c"], FieldValue::Integer(3));
        assert_eq!(parsed["d"], FieldValue::Float(2.5));
        assert_eq!(parsed["e"], FieldValue::Text("x".into()));
        assert_eq!(parsed["f"], FieldValue::List(vec![FieldValue::Integer(1)]));
        assert!(matches!(parsed["g"], FieldValue::Map(_)));
    }

    #[test]
    fn number_view_accepts_numeric_text() {
        assert_eq!(FieldValue::from("12").as_number(), Some(12));
        assert_eq!(FieldValue::Float(3.9).as_number(), Some(3));
        assert_eq!(FieldValue::Boolean(true).as_number(), None);
    }

    #[test]
    fn raw_value_wire_shape() {
        let raw: RawValue = serde_json::from_str(r#"{"kind":"checkbox","value":true}"#).unwrap();
        assert_eq!(raw, RawValue::Checkbox(true));
        let raw: RawValue = serde_json::from_str(r#"{"kind":"text","value":"12"}"#).unwrap();
        assert_eq!(raw, RawValue::Text("12".into()));
    }
}
