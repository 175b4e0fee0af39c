// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only helpers over JSON Schema values.
//!
//! Schemas are plain [`serde_json::Value`]s. The workspace enables
//! `preserve_order`, so iterating [`properties`] follows declaration order.

use serde_json::{Map, Value};

/// JSON Schema primitive type names.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SchemaType {
    /// `"object"`
    Object,
    /// `"array"`
    Array,
    /// `"string"`
    String,
    /// `"number"`
    Number,
    /// `"integer"`
    Integer,
    /// `"boolean"`
    Boolean,
    /// `"null"`
    Null,
}

impl SchemaType {
    /// Parse a `type` keyword value.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "object" => Self::Object,
            "array" => Self::Array,
            "string" => Self::String,
            "number" => Self::Number,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "null" => Self::Null,
            _ => return None,
        })
    }

    /// Keyword spelling of this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// Types a schema admits.
///
/// Uses the `type` keyword (string or array form). Without it, a schema with
/// `properties` is treated as an object and one with `items` as an array.
pub fn types(schema: &Value) -> Vec<SchemaType> {
    match schema.get("type") {
        Some(Value::String(name)) => SchemaType::from_name(name).into_iter().collect(),
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .filter_map(SchemaType::from_name)
            .collect(),
        _ if schema.get("properties").is_some_and(Value::is_object) => vec![SchemaType::Object],
        _ if schema.get("items").is_some() => vec![SchemaType::Array],
        _ => Vec::new(),
    }
}

/// First admitted type, if any.
pub fn primary_type(schema: &Value) -> Option<SchemaType> {
    types(schema).first().copied()
}

/// True if `schema` admits `ty`.
pub fn has_type(schema: &Value, ty: SchemaType) -> bool {
    types(schema).contains(&ty)
}

/// True for array-typed schemas.
pub fn is_collection(schema: &Value) -> bool {
    has_type(schema, SchemaType::Array)
}

/// The `properties` map, in declaration order.
pub fn properties(schema: &Value) -> Option<&Map<String, Value>> {
    schema.get("properties").and_then(Value::as_object)
}

/// The `items` schema when it is a single schema (not a tuple form).
pub fn items(schema: &Value) -> Option<&Value> {
    schema.get("items").filter(|v| v.is_object())
}

/// The `format` keyword.
pub fn format(schema: &Value) -> Option<&str> {
    schema.get("format").and_then(Value::as_str)
}

/// The `title` keyword.
pub fn title(schema: &Value) -> Option<&str> {
    schema.get("title").and_then(Value::as_str)
}

/// The `enum` keyword values.
pub fn enum_values(schema: &Value) -> Option<&[Value]> {
    schema
        .get("enum")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

/// A numeric keyword such as `minimum` or `maximum`.
pub fn number(schema: &Value, keyword: &str) -> Option<f64> {
    schema.get(keyword).and_then(Value::as_f64)
}

/// The `maxLength` keyword.
pub fn max_length(schema: &Value) -> Option<u64> {
    schema.get("maxLength").and_then(Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_keyword_forms() {
        assert_eq!(types(&json!({ "type": "string" })), vec![SchemaType::String]);
        assert_eq!(
            types(&json!({ "type": ["integer", "null", "bogus"] })),
            vec![SchemaType::Integer, SchemaType::Null]
        );
        assert_eq!(primary_type(&json!({})), None);
    }

    #[test]
    fn structural_fallbacks() {
        assert!(has_type(&json!({ "properties": {} }), SchemaType::Object));
        assert!(is_collection(&json!({ "items": { "type": "string" } })));
        assert!(!is_collection(&json!({ "type": "object" })));
    }

    #[test]
    fn properties_keep_declaration_order() {
        let schema = json!({
            "type": "object",
            "properties": { "zeta": {}, "alpha": {}, "mid": {} }
        });
        let keys: Vec<_> = properties(&schema).unwrap().keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn keyword_accessors() {
        let s = json!({
            "format": "date",
            "title": "When",
            "enum": ["a", "b"],
            "minimum": 1,
            "maxLength": 5
        });
        assert_eq!(format(&s), Some("date"));
        assert_eq!(title(&s), Some("When"));
        assert_eq!(enum_values(&s).map(<[Value]>::len), Some(2));
        assert_eq!(number(&s, "minimum"), Some(1.0));
        assert_eq!(max_length(&s), Some(5));
        assert!(items(&json!({ "items": [{}] })).is_none());
    }
}
