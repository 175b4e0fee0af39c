// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cell delegation.
//!
//! The table does not choose editors itself. For each (row, column) it
//! supplies a schema fragment, a synthetic unlabeled control and a data path,
//! and lets the ranked [`Registry`] pick the editor.

use serde_json::Value;

use formgrid_core::{Options, Path, PointerResolver, SchemaResolver, Snapshot};
use formgrid_dispatch::cells::{CellProps, CellRenderer};
use formgrid_dispatch::{
    ControlElement, ControlFlags, Dispatch, Registry, TestContext, UiSchema, Widget,
};

use crate::columns::Column;
use crate::errors::project;
use crate::rows::Row;

/// What a single cell request asks the registry for.
#[derive(Clone, Debug, PartialEq)]
pub struct CellRequest {
    /// Data path the cell edits.
    pub path: Path,
    /// Synthetic control: unlabeled, scoped to the property or to `#`.
    pub control: ControlElement,
}

impl CellRequest {
    /// Build the request for `column` in `row`.
    pub fn new(row: &Row, column: &Column) -> Self {
        Self {
            path: column.cell_path(&row.path),
            control: ControlElement::unlabeled(column.scope()),
        }
    }
}

/// What ended up in a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellContent {
    /// A registered editor applied.
    Editor {
        /// Registration name of the editor.
        renderer: &'static str,
        /// The rendered widget.
        widget: Widget,
    },
    /// No editor applies, or the column's schema does not resolve.
    Unknown,
}

/// A rendered table cell.
#[derive(Clone, Debug, PartialEq)]
pub struct TableCell {
    /// Data path of the cell; also its key.
    pub path: Path,
    /// Editor or unknown marker.
    pub content: CellContent,
    /// First error exactly at `path`, or empty.
    pub error: String,
}

/// Shared inputs for dispatching every cell of one table render.
#[derive(Clone, Debug)]
pub struct CellContext<'a> {
    /// Render snapshot.
    pub snapshot: Snapshot<'a>,
    /// Items schema the column scopes are relative to.
    pub items: &'a Value,
    /// Flags inherited from the table control.
    pub flags: ControlFlags,
}

impl CellContext<'_> {
    /// Dispatch and render one cell.
    pub fn dispatch<R: CellRenderer>(
        &self,
        registry: &Registry<R>,
        row: &Row,
        column: &Column,
    ) -> TableCell {
        let request = CellRequest::new(row, column);
        let error = project(self.snapshot.errors, &request.path);
        let content = self.content(registry, &request, column, error);
        TableCell {
            path: request.path,
            content,
            error: error.to_owned(),
        }
    }

    fn content<R: CellRenderer>(
        &self,
        registry: &Registry<R>,
        request: &CellRequest,
        column: &Column,
        error: &str,
    ) -> CellContent {
        let root = self.snapshot.schema;
        let schema = match PointerResolver.resolve(self.items, &request.control.scope, root) {
            Ok(schema) => schema,
            Err(err) => {
                tracing::debug!(path = %request.path, %err, "cell schema does not resolve");
                return CellContent::Unknown;
            }
        };

        let ui = UiSchema::Control(request.control.clone());
        let ctx = TestContext::new(&ui, self.items, root);
        let Dispatch::Matched(winner) = registry.dispatch(&ctx) else {
            tracing::debug!(path = %request.path, "no cell editor applies");
            return CellContent::Unknown;
        };

        let mut flags = self.flags;
        flags.set(ControlFlags::REQUIRED, is_required(self.items, column));
        let props = CellProps::new(
            &request.control,
            schema,
            request.path.clone(),
            self.snapshot.data_at(&request.path),
        )
        .with_flags(flags)
        .with_options(Options::merged(self.snapshot.config, None))
        .with_error(error);

        CellContent::Editor {
            renderer: winner.name,
            widget: winner.renderer.render_cell(&props),
        }
    }
}

fn is_required(items: &Value, column: &Column) -> bool {
    let Some(key) = &column.key else {
        return false;
    };
    items
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|req| req.iter().any(|r| r.as_str() == Some(key.as_str())))
}
