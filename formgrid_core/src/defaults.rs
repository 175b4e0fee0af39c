// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default values for freshly added array elements.

use serde_json::{Map, Value, json};

use crate::schema::{self, SchemaType};

/// Build a structurally valid default instance for a schema.
pub trait DefaultValue {
    /// Default instance for `schema`.
    fn create(&self, schema: &Value) -> Value;
}

/// Type-appropriate zero values.
///
/// `{}` for objects and untyped schemas, `[]` for arrays, `""` for strings,
/// `0` for numbers, `false` for booleans, `null` for null.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroDefaults;

impl DefaultValue for ZeroDefaults {
    fn create(&self, schema: &Value) -> Value {
        create_default_value(schema)
    }
}

impl<F: Fn(&Value) -> Value> DefaultValue for F {
    fn create(&self, schema: &Value) -> Value {
        self(schema)
    }
}

/// Zero value for the schema's primary type. See [`ZeroDefaults`].
pub fn create_default_value(schema: &Value) -> Value {
    match schema::primary_type(schema) {
        Some(SchemaType::String) => Value::String(String::new()),
        Some(SchemaType::Integer | SchemaType::Number) => json!(0),
        Some(SchemaType::Boolean) => Value::Bool(false),
        Some(SchemaType::Array) => Value::Array(Vec::new()),
        Some(SchemaType::Null) => Value::Null,
        Some(SchemaType::Object) | None => Value::Object(Map::new()),
    }
}
