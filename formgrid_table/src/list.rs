// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list array control.
//!
//! Arrays that do not fit a grid (arrays of arrays, or any array when the
//! table control is not registered) render as a heading, a `+` action, and
//! one dispatched child per element. Each child is laid out with the
//! control's `options.detail` layout when given, else with a layout generated
//! from the items schema.

use serde_json::Value;

use formgrid_core::resolve::follow_refs;
use formgrid_core::{
    DataStore, DefaultValue, Options, Path, PointerResolver, SchemaError, SchemaResolver,
    SchemaType, Snapshot, schema,
};
use formgrid_dispatch::layout::label_description;
use formgrid_dispatch::tester::{RankedTester, and, is_control, rank_with, schema_type_is};
use formgrid_dispatch::{ControlElement, Registry, TestContext, UiSchema};

use crate::actions;
use crate::error::TableError;
use crate::rows::NO_DATA;

/// Registration name of the list control.
pub const LIST_ARRAY_CONTROL: &str = "list-array-control";

/// Label of the add action.
pub const ADD_LABEL: &str = "+";

/// Tester for the list control: rank 2 for any array control.
pub fn list_array_tester() -> RankedTester {
    rank_with(2, and(is_control, schema_type_is(SchemaType::Array)))
}

/// One element of the list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    /// `<base>.<index>`; also the item's key.
    pub path: Path,
    /// Layout the element is rendered with.
    pub uischema: UiSchema,
    /// Renderer chosen for that layout, or `None` when nothing applies.
    pub renderer: Option<&'static str>,
}

/// Body of the list.
#[derive(Clone, Debug, PartialEq)]
pub enum ListBody {
    /// The array is absent: show [`NO_DATA`].
    NoData,
    /// One item per element; empty for an empty or non-array value.
    Items(Vec<ListItem>),
}

/// A rendered list array control.
#[derive(Clone, Debug, PartialEq)]
pub struct ListView {
    /// Heading text.
    pub label: String,
    /// Add action label.
    pub add_label: &'static str,
    /// Items.
    pub body: ListBody,
}

impl ListView {
    /// Notice text, when the array is absent.
    pub fn notice(&self) -> Option<&'static str> {
        matches!(self.body, ListBody::NoData).then_some(NO_DATA)
    }
}

/// List array control bound to one layout element.
#[derive(Clone, Debug)]
pub struct ListArrayControl<'c> {
    control: &'c ControlElement,
    schema: &'c Value,
    parent: Path,
}

impl<'c> ListArrayControl<'c> {
    /// Bind `control`, whose scope is relative to `schema`, under the data path `parent`.
    pub fn new(control: &'c ControlElement, schema: &'c Value, parent: Path) -> Self {
        Self {
            control,
            schema,
            parent,
        }
    }

    /// Data path of the array.
    pub fn path(&self) -> Path {
        self.parent.join(&self.control.data_path())
    }

    fn schemas<'r>(&self, root: &'r Value) -> Result<(&'r Value, &'r Value), SchemaError>
    where
        'c: 'r,
    {
        let array = PointerResolver.resolve(self.schema, &self.control.scope, root)?;
        let items = schema::items(array)
            .ok_or_else(|| SchemaError::Unresolved(format!("{}/items", self.control.scope)))?;
        Ok((array, follow_refs(items, root)?))
    }

    /// Layout used for each element.
    pub fn detail(&self, config: &Value, items: &Value) -> UiSchema {
        let options = Options::merged(config, self.control.options.as_ref());
        if let Some(detail) = options.detail {
            match serde_json::from_value(detail) {
                Ok(ui) => return ui,
                Err(err) => tracing::debug!(%err, "ignoring malformed detail layout"),
            }
        }
        UiSchema::generate(items)
    }

    /// Render against `snapshot`, choosing each child's renderer from `registry`.
    pub fn render<R>(
        &self,
        snapshot: &Snapshot<'_>,
        registry: &Registry<R>,
    ) -> Result<ListView, SchemaError> {
        let (array, items) = self.schemas(snapshot.schema)?;
        let path = self.path();
        let label = label_description(self.control, array).text;

        let body = match snapshot.data_at(&path) {
            None | Some(Value::Null) => ListBody::NoData,
            Some(data) => {
                let uischema = self.detail(snapshot.config, items);
                let ctx = TestContext::new(&uischema, items, snapshot.schema);
                let renderer = registry.dispatch(&ctx).name();
                let len = data.as_array().map_or(0, Vec::len);
                ListBody::Items(
                    (0..len)
                        .map(|i| ListItem {
                            path: path.compose(i),
                            uischema: uischema.clone(),
                            renderer,
                        })
                        .collect(),
                )
            }
        };

        Ok(ListView {
            label,
            add_label: ADD_LABEL,
            body,
        })
    }

    /// Append a default element to the array.
    pub fn add_item(
        &self,
        store: &mut impl DataStore,
        root: &Value,
        defaults: &impl DefaultValue,
    ) -> Result<(), TableError> {
        let (_, items) = self.schemas(root)?;
        actions::add_row(store, &self.path(), items, defaults)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::{self, Renderer};
    use formgrid_core::{MemoryStore, ZeroDefaults};
    use serde_json::json;

    fn root() -> Value {
        json!({
            "type": "object",
            "properties": {
                "matrix": {
                    "type": "array",
                    "items": { "type": "array", "items": { "type": "number" } }
                },
                "people": { "type": "array", "items": {
                    "type": "object",
                    "properties": { "name": { "type": "string" } }
                } }
            }
        })
    }

    fn render(control: &ControlElement, data: &Value) -> ListView {
        let root = root();
        let config = json!({});
        let snapshot = Snapshot::new(data, &[], &root, &config);
        ListArrayControl::new(control, &root, Path::root())
            .render(&snapshot, &renderers::registry())
            .unwrap()
    }

    #[test]
    fn nested_arrays_prefer_the_list() {
        let root = root();
        let ui = UiSchema::Control(ControlElement::new("#/properties/matrix"));
        let ctx = TestContext::new(&ui, &root, &root);
        let registry = renderers::registry();
        let winner = registry.dispatch(&ctx).matched().unwrap();
        assert_eq!(*winner.renderer, Renderer::List);
        let ui = UiSchema::Control(ControlElement::new("#/properties/people"));
        let ctx = TestContext::new(&ui, &root, &root);
        assert_eq!(registry.dispatch(&ctx).name(), Some(crate::table::TABLE_ARRAY_CONTROL));
    }

    #[test]
    fn absent_data_shows_no_data() {
        let control = ControlElement::new("#/properties/people");
        let view = render(&control, &json!({}));
        assert_eq!(view.notice(), Some("No data"));
        assert_eq!(view.label, "People");
        assert_eq!(view.add_label, "+");
        let view = render(&control, &json!({ "people": [] }));
        assert_eq!(view.body, ListBody::Items(Vec::new()));
        assert_eq!(view.notice(), None);
    }

    #[test]
    fn one_child_per_element_with_generated_layout() {
        let control = ControlElement::new("#/properties/people");
        let view = render(&control, &json!({ "people": [{}, {}] }));
        let ListBody::Items(items) = view.body else {
            panic!("expected items");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].path, "people.1");
        assert_eq!(items[0].uischema.type_name(), "VerticalLayout");
        assert_eq!(items[0].renderer, Some(crate::layout::LAYOUT));
    }

    #[test]
    fn detail_option_overrides_the_layout() {
        let control = ControlElement::new("#/properties/people").with_options(json!({
            "detail": { "type": "Control", "scope": "#/properties/name" }
        }));
        let view = render(&control, &json!({ "people": [{ "name": "x" }] }));
        let ListBody::Items(items) = view.body else {
            panic!("expected items");
        };
        assert_eq!(
            items[0].uischema,
            UiSchema::Control(ControlElement::new("#/properties/name"))
        );
        assert_eq!(items[0].renderer, Some("text-cell"));
    }

    #[test]
    fn add_creates_the_array() {
        let root = root();
        let control = ControlElement::new("#/properties/matrix");
        let list = ListArrayControl::new(&control, &root, Path::root());
        let mut store = MemoryStore::new(root.clone(), json!({}));
        list.add_item(&mut store, &root, &ZeroDefaults).unwrap();
        assert_eq!(store.data(), &json!({ "matrix": [[]] }));
    }
}
