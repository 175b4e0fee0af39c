// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The table array control.
//!
//! ## Overview
//!
//! Renders an array of objects (one column per property) or of primitives
//! (one `Items` column) as a grid:
//!
//! - a header with the label, a validation indicator, and an add action;
//! - the data columns followed by a fixed-width action column;
//! - one row per element, each ending with a delete action, or a single
//!   placeholder row when there is nothing to list.
//!
//! Every render re-derives columns, rows and errors from the [`Snapshot`];
//! the control holds no data of its own.

use serde_json::Value;

use formgrid_core::resolve::follow_refs;
use formgrid_core::{
    DataStore, DefaultValue, Path, PointerResolver, SchemaError, SchemaResolver, Snapshot,
    StoreError, schema,
};
use formgrid_dispatch::cells::CellRenderer;
use formgrid_dispatch::layout::label_description;
use formgrid_dispatch::tester::{self, RankedTester, and, or, rank_with};
use formgrid_dispatch::{ControlElement, ControlFlags, Registry};

use crate::actions::{self, Confirm, DeleteOutcome, PendingDelete};
use crate::cell::{CellContext, TableCell};
use crate::columns::{Column, derive_columns};
use crate::error::TableError;
use crate::errors::{control_errors, summary};
use crate::rows::{Placeholder, Rows, reconcile};

/// Width of the trailing action column.
pub const ACTION_COLUMN_WIDTH: u32 = 70;

/// Tooltip of each row's delete action.
pub const DELETE_TOOLTIP: &str = "Delete";

/// Registration name of the table control.
pub const TABLE_ARRAY_CONTROL: &str = "table-array-control";

/// Tester for the table control: rank 3 for arrays of objects or primitives.
pub fn table_array_tester() -> RankedTester {
    rank_with(
        3,
        and(
            tester::is_control,
            or(
                tester::is_object_array_control,
                tester::is_primitive_array_control,
            ),
        ),
    )
}

/// Header above the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableHeader {
    /// Heading text.
    pub label: String,
    /// No errors at the control's own path.
    pub valid: bool,
    /// Those errors, one per line; empty when valid.
    pub error_tooltip: String,
    /// Tooltip of the add action.
    pub add_tooltip: String,
}

/// A header column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnView {
    /// Property name; `None` for the primitive column and the action column.
    pub key: Option<String>,
    /// Header text; empty for the action column.
    pub label: String,
    /// Fixed width, set only on the action column.
    pub width: Option<u32>,
}

/// Delete action at the end of a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteAction {
    /// Accessible name, `Delete row at <index>`.
    pub aria_label: String,
    /// Tooltip text.
    pub tooltip: &'static str,
    /// Row path passed to [`actions::request_delete`].
    pub row_path: Path,
    /// Element index.
    pub index: usize,
}

impl DeleteAction {
    /// Start the delete protocol for this row.
    pub fn request(&self) -> PendingDelete {
        actions::request_delete(&self.row_path, self.index)
    }
}

/// A rendered data row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    /// Row key, `<base>.<index>`.
    pub key: Path,
    /// Element index.
    pub index: usize,
    /// One cell per data column.
    pub cells: Vec<TableCell>,
    /// Trailing action.
    pub delete: DeleteAction,
}

/// Grid body.
#[derive(Clone, Debug, PartialEq)]
pub enum TableBody {
    /// Nothing to list: blank cells and a notice.
    Placeholder(Placeholder),
    /// One view per element.
    Rows(Vec<RowView>),
}

/// A rendered table array control.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    /// Element id.
    pub id: String,
    /// Whether the control is shown.
    pub visible: bool,
    /// Header.
    pub header: TableHeader,
    /// Data columns followed by the action column.
    pub columns: Vec<ColumnView>,
    /// Rows.
    pub body: TableBody,
}

impl TableView {
    /// Number of data columns.
    pub fn data_columns(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    /// The row views; empty for a placeholder.
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            TableBody::Placeholder(_) => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}

/// Table array control bound to one layout element.
#[derive(Clone, Debug)]
pub struct TableArrayControl<'c> {
    control: &'c ControlElement,
    schema: &'c Value,
    parent: Path,
    flags: ControlFlags,
}

impl<'c> TableArrayControl<'c> {
    /// Bind `control`, whose scope is relative to `schema`, under the data path `parent`.
    pub fn new(control: &'c ControlElement, schema: &'c Value, parent: Path) -> Self {
        Self {
            control,
            schema,
            parent,
            flags: ControlFlags::default(),
        }
    }

    /// Replace the visibility and interaction flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ControlFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Data path of the array.
    pub fn path(&self) -> Path {
        self.parent.join(&self.control.data_path())
    }

    /// The array schema and its items schema.
    pub fn schemas<'r>(&self, root: &'r Value) -> Result<(&'r Value, &'r Value), SchemaError>
    where
        'c: 'r,
    {
        let array = PointerResolver.resolve(self.schema, &self.control.scope, root)?;
        let items = schema::items(array)
            .ok_or_else(|| SchemaError::Unresolved(format!("{}/items", self.control.scope)))?;
        Ok((array, follow_refs(items, root)?))
    }

    /// Columns for the current schema.
    pub fn columns(&self, root: &Value) -> Result<Vec<Column>, SchemaError> {
        let (_, items) = self.schemas(root)?;
        Ok(derive_columns(items, root))
    }

    /// Render against `snapshot`, dispatching cells through `registry`.
    pub fn render<R: CellRenderer>(
        &self,
        snapshot: &Snapshot<'_>,
        registry: &Registry<R>,
    ) -> Result<TableView, SchemaError> {
        let (array, items) = self.schemas(snapshot.schema)?;
        let path = self.path();
        let columns = derive_columns(items, snapshot.schema);

        let label = label_description(self.control, array).text;
        let own_errors = summary(control_errors(snapshot.errors, &path));
        let header = TableHeader {
            add_tooltip: format!("Add to {label}"),
            label,
            valid: own_errors.is_empty(),
            error_tooltip: own_errors,
        };

        let mut column_views: Vec<ColumnView> = columns
            .iter()
            .map(|c| ColumnView {
                key: c.key.clone(),
                label: c.label.clone(),
                width: None,
            })
            .collect();
        column_views.push(ColumnView {
            key: None,
            label: String::new(),
            width: Some(ACTION_COLUMN_WIDTH),
        });

        let cells = CellContext {
            snapshot: *snapshot,
            items,
            flags: self.flags,
        };
        let body = match reconcile(&path, snapshot.data_at(&path), columns.len()) {
            Rows::Placeholder(p) => TableBody::Placeholder(p),
            Rows::Items(rows) => TableBody::Rows(
                rows.into_iter()
                    .map(|row| RowView {
                        cells: columns
                            .iter()
                            .map(|col| cells.dispatch(registry, &row, col))
                            .collect(),
                        delete: DeleteAction {
                            aria_label: format!("Delete row at {}", row.index),
                            tooltip: DELETE_TOOLTIP,
                            row_path: row.path.clone(),
                            index: row.index,
                        },
                        key: row.path,
                        index: row.index,
                    })
                    .collect(),
            ),
        };

        Ok(TableView {
            id: formgrid_dispatch::cells::element_id(&path),
            visible: self.flags.is_visible(),
            header,
            columns: column_views,
            body,
        })
    }

    /// Append a default element to the array.
    pub fn add_row(
        &self,
        store: &mut impl DataStore,
        root: &Value,
        defaults: &impl DefaultValue,
    ) -> Result<(), TableError> {
        let (_, items) = self.schemas(root)?;
        actions::add_row(store, &self.path(), items, defaults)?;
        Ok(())
    }

    /// Ask, then delete element `index`.
    pub fn delete_row(
        &self,
        store: &mut impl DataStore,
        confirm: &mut impl Confirm,
        index: usize,
    ) -> Result<DeleteOutcome, StoreError> {
        actions::delete_row(store, confirm, &self.path().compose(index), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::tests::RecordingStore;
    use crate::cell::CellContent;
    use crate::error::TableError;
    use formgrid_core::{MemoryStore, ValidationError, ZeroDefaults};
    use formgrid_dispatch::cells::{self, CellKind};
    use formgrid_dispatch::{TestContext, UiSchema};
    use serde_json::json;

    fn root() -> Value {
        json!({
            "type": "object",
            "properties": {
                "people": {
                    "type": "array",
                    "title": "Team",
                    "items": {
                        "type": "object",
                        "properties": {
                            "first_name": { "type": "string" },
                            "age": { "type": "integer" },
                            "pets": { "type": "array", "items": { "type": "string" } },
                            "active": { "type": "boolean" }
                        }
                    }
                },
                "tags": { "type": "array", "items": { "type": "string" } }
            }
        })
    }

    fn render(
        control: &ControlElement,
        root: &Value,
        data: &Value,
        errors: &[ValidationError],
    ) -> TableView {
        let config = json!({});
        let snapshot = Snapshot::new(data, errors, root, &config);
        TableArrayControl::new(control, root, Path::root())
            .render(&snapshot, &cells::registry())
            .unwrap()
    }

    #[test]
    fn tester_matches_object_and_primitive_arrays() {
        let root = root();
        let tester = table_array_tester();
        for scope in ["#/properties/people", "#/properties/tags"] {
            let ui = UiSchema::Control(ControlElement::new(scope));
            assert_eq!(tester.rank(&TestContext::new(&ui, &root, &root)), 3);
        }
        let ui = UiSchema::Control(ControlElement::new("#"));
        assert_eq!(tester.rank(&TestContext::new(&ui, &root, &root)), -1);
    }

    #[test]
    fn object_table_layout() {
        let root = root();
        let control = ControlElement::new("#/properties/people");
        let data = json!({ "people": [
            { "first_name": "Ann", "age": 31, "active": true },
            { "first_name": "Bo" }
        ] });
        let view = render(&control, &root, &data, &[]);

        assert_eq!(view.header.label, "Team");
        assert_eq!(view.header.add_tooltip, "Add to Team");
        assert!(view.header.valid);
        let labels: Vec<_> = view.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["First Name", "Age", "Active", ""]);
        assert_eq!(view.columns.last().unwrap().width, Some(70));
        assert_eq!(view.data_columns(), 3);

        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].key, "people.1");
        assert_eq!(rows[1].delete.aria_label, "Delete row at 1");
        assert_eq!(rows[1].delete.tooltip, "Delete");
        let paths: Vec<_> = rows[0].cells.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, ["people.0.first_name", "people.0.age", "people.0.active"]);
        let CellContent::Editor { renderer, widget } = &rows[1].cells[1].content else {
            panic!("expected an editor");
        };
        assert_eq!(*renderer, CellKind::Integer.name());
        assert_eq!(widget.display_text(), "");
    }

    #[test]
    fn primitive_table_uses_one_items_column() {
        let root = root();
        let control = ControlElement::new("#/properties/tags");
        let data = json!({ "tags": ["x", "y"] });
        let errors = [ValidationError::new("tags.1", "must match pattern")];
        let view = render(&control, &root, &data, &errors);
        assert_eq!(view.columns[0].label, "Items");
        assert_eq!(view.header.label, "Tags");
        let cell = &view.rows()[1].cells[0];
        assert_eq!(cell.path, "tags.1");
        assert_eq!(cell.error, "must match pattern");
        assert_eq!(view.rows()[0].cells[0].error, "");
    }

    #[test]
    fn empty_data_renders_the_placeholder() {
        let root = root();
        let control = ControlElement::new("#/properties/people");
        for data in [json!({}), json!({ "people": [] }), json!({ "people": "oops" })] {
            let view = render(&control, &root, &data, &[]);
            let TableBody::Placeholder(p) = view.body else {
                panic!("expected placeholder");
            };
            assert_eq!(p.cell_count(), 4);
            assert_eq!(p.notice(), "No data");
        }
    }

    #[test]
    fn control_errors_mark_the_header() {
        let root = root();
        let control = ControlElement::new("#/properties/people");
        let errors = [
            ValidationError::new("people", "must NOT have fewer than 1 items"),
            ValidationError::new("people.0.age", "must be integer"),
        ];
        let view = render(&control, &root, &json!({ "people": [] }), &errors);
        assert!(!view.header.valid);
        assert_eq!(view.header.error_tooltip, "must NOT have fewer than 1 items");
    }

    #[test]
    fn hidden_and_disabled() {
        let root = root();
        let control = ControlElement::new("#/properties/people");
        let config = json!({});
        let data = json!({ "people": [{ "first_name": "Ann" }] });
        let snapshot = Snapshot::new(&data, &[], &root, &config);
        let view = TableArrayControl::new(&control, &root, Path::root())
            .with_flags(ControlFlags::empty())
            .render(&snapshot, &cells::registry())
            .unwrap();
        assert!(!view.visible);
        let CellContent::Editor { widget, .. } = &view.rows()[0].cells[0].content else {
            panic!("expected an editor");
        };
        assert!(widget.field.disabled);
    }

    #[test]
    fn nested_under_a_parent_path() {
        let root = root();
        let control = ControlElement::new("#/properties/tags");
        let table = TableArrayControl::new(&control, &root, Path::from("form"));
        assert_eq!(table.path(), "form.tags");
    }

    #[test]
    fn actions_go_through_the_store() {
        let root = root();
        let control = ControlElement::new("#/properties/people");
        let table = TableArrayControl::new(&control, &root, Path::root());

        let mut store = MemoryStore::new(root.clone(), json!({}));
        table.add_row(&mut store, &root, &ZeroDefaults).unwrap();
        table.add_row(&mut store, &root, &ZeroDefaults).unwrap();
        assert_eq!(store.data(), &json!({ "people": [{}, {}] }));

        let mut recording = RecordingStore::default();
        assert_eq!(
            table.delete_row(&mut recording, &mut |_: &str| false, 1),
            Ok(DeleteOutcome::Declined)
        );
        assert!(recording.calls.is_empty());
        table.delete_row(&mut store, &mut |_: &str| true, 0).unwrap();
        assert_eq!(store.data(), &json!({ "people": [{}] }));
    }

    #[test]
    fn unresolved_scope_is_a_schema_error() {
        let root = root();
        let control = ControlElement::new("#/properties/nope");
        let table = TableArrayControl::new(&control, &root, Path::root());
        assert!(matches!(table.columns(&root), Err(SchemaError::Unresolved(_))));
        let mut store = MemoryStore::new(root.clone(), json!({}));
        assert!(matches!(
            table.add_row(&mut store, &root, &ZeroDefaults),
            Err(TableError::Schema(_))
        ));
    }
}
