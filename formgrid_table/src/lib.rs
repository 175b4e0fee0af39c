// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=formgrid_table --heading-base-level=0

//! Formgrid Table: headless array controls for JSON-Schema forms.
//!
//! Formgrid Table maps an array value to an editable grid. Each render reads
//! one [`Snapshot`](formgrid_core::Snapshot) and re-derives everything:
//!
//! - [`columns`]: one column per non-array property, or a single `Items` column.
//! - [`rows`]: one row per element keyed `<base>.<index>`, or a blank placeholder row.
//! - [`cell`]: per-cell schema, synthetic unlabeled control, and ranked editor dispatch.
//! - [`errors`]: exact-path projection of validation errors onto cells.
//! - [`actions`]: add-row with a schema default, and two-step confirmed delete.
//!
//! [`TableArrayControl`] assembles these into a [`TableView`];
//! [`ListArrayControl`] is the non-grid alternative, [`LayoutControl`]
//! renders vertical, horizontal and group layouts, and [`renderers`] is the
//! default renderer set that routes between them.
//!
//! ## Row identity
//!
//! Rows are identified by index. Reordering the array moves per-row host
//! state (such as input focus) to whatever element now sits at that index.
//!
//! ## Example
//!
//! ```
//! use formgrid_core::{DataStore, MemoryStore, Path, ZeroDefaults};
//! use formgrid_dispatch::{ControlElement, cells};
//! use formgrid_table::{TableArrayControl, TableBody};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "people": {
//!             "type": "array",
//!             "items": {
//!                 "type": "object",
//!                 "properties": { "name": { "type": "string" }, "age": { "type": "integer" } }
//!             }
//!         }
//!     }
//! });
//! let mut store = MemoryStore::new(schema.clone(), json!({}));
//! let control = ControlElement::new("#/properties/people");
//! let table = TableArrayControl::new(&control, &schema, Path::root());
//! let registry = cells::registry();
//!
//! let view = table.render(&store.snapshot(), &registry).unwrap();
//! assert!(matches!(view.body, TableBody::Placeholder(_)));
//!
//! table.add_row(&mut store, &schema, &ZeroDefaults).unwrap();
//! let view = table.render(&store.snapshot(), &registry).unwrap();
//! assert_eq!(view.rows()[0].key, "people.0");
//! assert_eq!(view.rows()[0].cells.len(), 2);
//!
//! // Declining the prompt leaves the data alone.
//! table.delete_row(&mut store, &mut |_: &str| false, 0).unwrap();
//! assert_eq!(store.data(), &json!({ "people": [{}] }));
//! ```

pub mod actions;
pub mod cell;
pub mod columns;
pub mod error;
pub mod errors;
pub mod layout;
pub mod list;
pub mod renderers;
pub mod rows;
pub mod table;

pub use actions::{Confirm, DeleteOutcome, PendingDelete, add_row, delete_row, request_delete};
pub use cell::{CellContent, TableCell};
pub use columns::{Column, derive_columns};
pub use error::TableError;
pub use layout::{LayoutChild, LayoutControl, LayoutKind, LayoutView};
pub use list::{ListArrayControl, ListBody, ListView};
pub use rows::{Row, Rows, reconcile};
pub use table::{TableArrayControl, TableBody, TableView};
