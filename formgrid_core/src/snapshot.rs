// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable per-render view of the store.

use serde_json::Value;

use crate::path::Path;
use crate::validation::ValidationError;

/// Everything a render pass may read: data, errors, root schema, and config.
///
/// Renderers receive this explicitly instead of looking up ambient state, so
/// every render derives rows, columns and errors from the same store revision.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    /// Whole-form data.
    pub data: &'a Value,
    /// Whole-form validation errors.
    pub errors: &'a [ValidationError],
    /// Root schema, used to resolve `$ref`s.
    pub schema: &'a Value,
    /// Form-wide config object.
    pub config: &'a Value,
}

impl<'a> Snapshot<'a> {
    /// Bundle the parts of a render view.
    pub fn new(
        data: &'a Value,
        errors: &'a [ValidationError],
        schema: &'a Value,
        config: &'a Value,
    ) -> Self {
        Self {
            data,
            errors,
            schema,
            config,
        }
    }

    /// Data at `path`, if present.
    pub fn data_at(&self, path: &Path) -> Option<&'a Value> {
        path.get(self.data)
    }
}
