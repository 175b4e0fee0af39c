// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column derivation.
//!
//! Object items get one column per property, in declaration order, except
//! properties that are themselves arrays; nested collections are not
//! flattened into the grid. Any other items schema gets a single `Items`
//! column that edits the element itself.

use serde_json::Value;

use formgrid_core::path::property_scope;
use formgrid_core::resolve::follow_refs;
use formgrid_core::{Path, schema, text};

/// Label of the single column of a primitive array.
pub const ITEMS_LABEL: &str = "Items";

/// One data column of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Property name, or `None` for the primitive column.
    pub key: Option<String>,
    /// Header text.
    pub label: String,
}

impl Column {
    /// Scope of the synthetic cell control, relative to the items schema.
    pub fn scope(&self) -> String {
        match &self.key {
            Some(key) => property_scope(key),
            None => "#".to_owned(),
        }
    }

    /// Path of this column's value within the row at `row`.
    pub fn cell_path(&self, row: &Path) -> Path {
        match &self.key {
            Some(key) => row.compose(key.as_str()),
            None => row.clone(),
        }
    }
}

/// Derive the columns for an items schema.
///
/// `root` resolves `$ref`s on property schemas before the collection check.
///
/// ```
/// use formgrid_table::columns::derive_columns;
/// use serde_json::json;
///
/// let items = json!({
///     "type": "object",
///     "properties": {
///         "first_name": { "type": "string" },
///         "tags": { "type": "array", "items": { "type": "string" } },
///         "zipCode": { "type": "string" }
///     }
/// });
/// let labels: Vec<_> = derive_columns(&items, &items).into_iter().map(|c| c.label).collect();
/// assert_eq!(labels, ["First Name", "Zip Code"]);
/// ```
pub fn derive_columns(items: &Value, root: &Value) -> Vec<Column> {
    let Some(properties) = schema::properties(items) else {
        return vec![Column {
            key: None,
            label: ITEMS_LABEL.to_owned(),
        }];
    };
    properties
        .iter()
        .filter(|&(_, prop)| {
            let prop = follow_refs(prop, root).unwrap_or(prop);
            !schema::is_collection(prop)
        })
        .map(|(name, _)| Column {
            key: Some(name.clone()),
            label: text::start_case(name),
        })
        .collect()
}
