// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of form-wide validation errors onto the grid.
//!
//! Matching is exact: an error on `items.1` is not shown in the cells of
//! `items.1.name`. When several errors share a path the first in validator
//! order is shown and the rest are dropped.

use formgrid_core::{Path, ValidationError};

/// Message of the first error exactly at `path`, or `""`.
///
/// ```
/// use formgrid_core::{Path, ValidationError};
/// use formgrid_table::errors::project;
///
/// let errors = [ValidationError::new("items.1.name", "required")];
/// assert_eq!(project(&errors, &Path::from("items.1.name")), "required");
/// assert_eq!(project(&errors, &Path::from("items.1")), "");
/// ```
pub fn project<'e>(errors: &'e [ValidationError], path: &Path) -> &'e str {
    errors
        .iter()
        .find(|e| e.path == *path)
        .map_or("", |e| e.message.as_str())
}

/// Errors strictly below `base`.
pub fn child_errors<'e>(
    errors: &'e [ValidationError],
    base: &Path,
) -> impl Iterator<Item = &'e ValidationError> {
    errors.iter().filter(move |e| e.path.is_descendant_of(base))
}

/// Errors exactly at `base`.
pub fn control_errors<'e>(
    errors: &'e [ValidationError],
    base: &Path,
) -> impl Iterator<Item = &'e ValidationError> {
    errors.iter().filter(move |e| e.path == *base)
}

/// Messages joined by newlines, for tooltips.
pub fn summary<'e>(errors: impl IntoIterator<Item = &'e ValidationError>) -> String {
    errors
        .into_iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
