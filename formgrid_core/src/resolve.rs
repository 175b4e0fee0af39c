// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schema pointer resolution.
//!
//! Controls address their schema with a pointer such as `#/properties/foo`,
//! relative to the schema they are rendered against. [`SchemaResolver`] is the
//! seam; [`PointerResolver`] covers fragment pointers and document-local
//! `$ref`s against the root schema, which is all the array controls need.

use serde_json::Value;

use crate::error::SchemaError;
use crate::path::decode_pointer_token;

/// Maximum number of `$ref` hops followed for a single lookup.
pub const MAX_REF_DEPTH: usize = 32;

/// Resolve a schema pointer to a sub-schema.
pub trait SchemaResolver {
    /// Resolve `pointer` against `schema`, following `$ref`s into `root`.
    fn resolve<'a>(
        &self,
        schema: &'a Value,
        pointer: &str,
        root: &'a Value,
    ) -> Result<&'a Value, SchemaError>;
}

/// Fragment-pointer resolver with local `$ref` support.
#[derive(Copy, Clone, Debug, Default)]
pub struct PointerResolver;

impl SchemaResolver for PointerResolver {
    fn resolve<'a>(
        &self,
        schema: &'a Value,
        pointer: &str,
        root: &'a Value,
    ) -> Result<&'a Value, SchemaError> {
        let tail = pointer
            .strip_prefix('#')
            .ok_or_else(|| SchemaError::Unresolved(pointer.to_owned()))?;
        let mut cur = follow_refs(schema, root)?;
        for token in tail.split('/').filter(|t| !t.is_empty()) {
            let next = step(cur, &decode_pointer_token(token))
                .ok_or_else(|| SchemaError::Unresolved(pointer.to_owned()))?;
            cur = follow_refs(next, root)?;
        }
        Ok(cur)
    }
}

/// Follow `$ref` until reaching a schema without one.
pub fn follow_refs<'a>(schema: &'a Value, root: &'a Value) -> Result<&'a Value, SchemaError> {
    let mut cur = schema;
    for _ in 0..MAX_REF_DEPTH {
        let Some(reference) = cur.get("$ref").and_then(Value::as_str) else {
            return Ok(cur);
        };
        let tail = reference
            .strip_prefix('#')
            .ok_or_else(|| SchemaError::ExternalRef(reference.to_owned()))?;
        cur = tail
            .split('/')
            .filter(|t| !t.is_empty())
            .try_fold(root, |v, t| step(v, &decode_pointer_token(t)))
            .ok_or_else(|| SchemaError::Unresolved(reference.to_owned()))?;
    }
    Err(SchemaError::RefDepth(
        schema
            .get("$ref")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
    ))
}

fn step<'a>(value: &'a Value, token: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(token),
        Value::Array(items) => token.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hash_is_the_schema_itself() {
        let schema = json!({ "type": "string" });
        let got = PointerResolver.resolve(&schema, "#", &schema).unwrap();
        assert_eq!(got, &schema);
    }

    #[test]
    fn property_pointer() {
        let schema = json!({ "properties": { "foo": { "type": "number" } } });
        let got = PointerResolver
            .resolve(&schema, "#/properties/foo", &schema)
            .unwrap();
        assert_eq!(got, &json!({ "type": "number" }));
    }

    #[test]
    fn local_refs_resolve_against_root() {
        let root = json!({
            "definitions": {
                "name": { "type": "string", "maxLength": 3 },
                "person": {
                    "type": "object",
                    "properties": { "name": { "$ref": "#/definitions/name" } }
                }
            },
            "properties": {
                "people": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/person" }
                }
            }
        });
        let items = &root["properties"]["people"]["items"];
        let got = PointerResolver
            .resolve(items, "#/properties/name", &root)
            .unwrap();
        assert_eq!(got["maxLength"], json!(3));
    }

    #[test]
    fn missing_pointer_is_an_error() {
        let schema = json!({ "properties": {} });
        assert_eq!(
            PointerResolver.resolve(&schema, "#/properties/nope", &schema),
            Err(SchemaError::Unresolved("#/properties/nope".into()))
        );
        assert!(PointerResolver.resolve(&schema, "properties", &schema).is_err());
    }

    #[test]
    fn external_and_cyclic_refs_fail() {
        let ext = json!({ "$ref": "other.json#/a" });
        assert!(matches!(
            follow_refs(&ext, &ext),
            Err(SchemaError::ExternalRef(_))
        ));
        let root = json!({ "definitions": { "a": { "$ref": "#/definitions/a" } } });
        assert!(matches!(
            follow_refs(&root["definitions"]["a"], &root),
            Err(SchemaError::RefDepth(_))
        ));
    }
}
