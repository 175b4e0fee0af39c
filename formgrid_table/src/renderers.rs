// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default form-level renderer set.
//!
//! Combines the built-in cells with the array controls and the layout
//! renderer, so any layout element can be dispatched. A host matches on the
//! winning [`Renderer`] and calls the corresponding `render`.

use formgrid_dispatch::Registry;
use formgrid_dispatch::cells::CellKind;

use crate::layout::{LAYOUT, layout_tester};
use crate::list::{LIST_ARRAY_CONTROL, list_array_tester};
use crate::table::{TABLE_ARRAY_CONTROL, table_array_tester};

/// A renderer in the default set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Renderer {
    /// A primitive editor.
    Cell(CellKind),
    /// [`TableArrayControl`](crate::TableArrayControl).
    Table,
    /// [`ListArrayControl`](crate::ListArrayControl).
    List,
    /// [`LayoutControl`](crate::LayoutControl): vertical and horizontal layouts and groups.
    Layout,
}

/// Every built-in renderer.
///
/// Cells register first, so a later registration of equal rank overrides one.
pub fn registry() -> Registry<Renderer> {
    let mut registry = Registry::new();
    for kind in CellKind::ALL {
        registry.register(kind.name(), kind.tester(), Renderer::Cell(kind));
    }
    registry.register(LIST_ARRAY_CONTROL, list_array_tester(), Renderer::List);
    registry.register(TABLE_ARRAY_CONTROL, table_array_tester(), Renderer::Table);
    registry.register(LAYOUT, layout_tester(), Renderer::Layout);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgrid_dispatch::{ControlElement, TestContext, UiSchema};
    use serde_json::json;

    fn winner(ui: &UiSchema, schema: &serde_json::Value) -> Option<Renderer> {
        registry()
            .dispatch(&TestContext::new(ui, schema, schema))
            .matched()
            .map(|m| *m.renderer)
    }

    #[test]
    fn routes_each_element_kind() {
        let schema = json!({
            "properties": {
                "name": { "type": "string" },
                "tags": { "type": "array", "items": { "type": "string" } }
            }
        });
        let control = |scope: &str| UiSchema::Control(ControlElement::new(scope));
        assert_eq!(
            winner(&control("#/properties/name"), &schema),
            Some(Renderer::Cell(CellKind::Text))
        );
        assert_eq!(winner(&control("#/properties/tags"), &schema), Some(Renderer::Table));
        assert_eq!(winner(&UiSchema::generate(&schema), &schema), Some(Renderer::Layout));
        assert_eq!(winner(&UiSchema::Unknown, &schema), None);
        assert_eq!(winner(&control("#/properties/missing"), &schema), None);
    }

    #[test]
    fn later_registration_overrides_equal_rank() {
        let mut registry = registry();
        registry.register("custom-table", table_array_tester(), Renderer::List);
        let schema = json!({ "type": "array", "items": { "type": "string" } });
        let ui = UiSchema::Control(ControlElement::new("#"));
        let m = registry
            .dispatch(&TestContext::new(&ui, &schema, &schema))
            .matched()
            .unwrap();
        assert_eq!((m.name, *m.renderer), ("custom-table", Renderer::List));
    }
}
