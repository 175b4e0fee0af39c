// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row reconciliation.
//!
//! Rows are derived from the current array value on every render and are
//! identified by their path (`<base>.<index>`). There is no identity beyond
//! the index: moving an element changes which row, and so which input, it
//! maps to. Hosts that keep per-input state (focus, selection) keyed by row
//! path will see it follow the index, not the element.

use serde_json::Value;

use formgrid_core::Path;

/// Notice shown in the placeholder row.
pub const NO_DATA: &str = "No data";

/// One row of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// Position in the array.
    pub index: usize,
    /// `<base>.<index>`; also the row's key.
    pub path: Path,
}

/// The single row shown when there is nothing to list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    /// Number of data columns.
    pub columns: usize,
}

impl Placeholder {
    /// Data cells plus the trailing action cell.
    pub fn cell_count(&self) -> usize {
        self.columns + 1
    }

    /// Cell texts: all blank.
    pub fn cells(&self) -> impl Iterator<Item = &'static str> {
        core::iter::repeat_n("", self.cell_count())
    }

    /// Notice text accompanying the placeholder.
    pub fn notice(&self) -> &'static str {
        NO_DATA
    }
}

/// Result of reconciling the array value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rows {
    /// Absent, non-array or empty data.
    Placeholder(Placeholder),
    /// One row per element, in data order.
    Items(Vec<Row>),
}

impl Rows {
    /// Number of rendered rows, counting the placeholder.
    pub fn len(&self) -> usize {
        match self {
            Self::Placeholder(_) => 1,
            Self::Items(rows) => rows.len(),
        }
    }

    /// True only for a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// The data rows; empty for a placeholder.
    pub fn items(&self) -> &[Row] {
        match self {
            Self::Placeholder(_) => &[],
            Self::Items(rows) => rows,
        }
    }
}

/// Map the array value at `base` to rows.
///
/// ```
/// use formgrid_core::Path;
/// use formgrid_table::rows::{Rows, reconcile};
/// use serde_json::json;
///
/// let data = json!(["a", "b"]);
/// let rows = reconcile(&Path::from("tags"), Some(&data), 1);
/// let paths: Vec<_> = rows.items().iter().map(|r| r.path.as_str()).collect();
/// assert_eq!(paths, ["tags.0", "tags.1"]);
///
/// assert!(reconcile(&Path::from("tags"), None, 1).is_placeholder());
/// ```
pub fn reconcile(base: &Path, data: Option<&Value>, columns: usize) -> Rows {
    match data {
        Some(Value::Array(items)) if !items.is_empty() => Rows::Items(
            (0..items.len())
                .map(|index| Row {
                    index,
                    path: base.compose(index),
                })
                .collect(),
        ),
        _ => {
            tracing::trace!(%base, "rendering placeholder row");
            Rows::Placeholder(Placeholder { columns })
        }
    }
}
