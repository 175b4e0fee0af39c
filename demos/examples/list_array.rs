// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List array control.
//!
//! An array of arrays does not fit a grid, so it renders as a list of
//! dispatched children.
//!
//! Run:
//! - `cargo run -p formgrid_demos --example list_array`

use formgrid_core::{MemoryStore, Path, ZeroDefaults};
use formgrid_dispatch::ControlElement;
use formgrid_table::{ListArrayControl, ListBody, renderers};
use serde_json::json;

fn main() {
    let schema = json!({
        "type": "object",
        "properties": {
            "matrix": {
                "type": "array",
                "title": "Matrix rows",
                "items": { "type": "array", "items": { "type": "number" } }
            }
        }
    });
    let mut store = MemoryStore::new(schema.clone(), json!({}));
    let control = ControlElement::new("#/properties/matrix");
    let list = ListArrayControl::new(&control, &schema, Path::root());
    let registry = renderers::registry();

    for step in 0..3 {
        let view = list.render(&store.snapshot(), &registry).unwrap();
        println!("== {} [{}] (step {step}) ==", view.label, view.add_label);
        match &view.body {
            ListBody::NoData => println!("  {}", view.notice().unwrap_or_default()),
            ListBody::Items(items) => {
                for item in items {
                    println!(
                        "  {} -> {}",
                        item.path,
                        item.renderer.unwrap_or("no applicable renderer")
                    );
                }
            }
        }
        list.add_item(&mut store, &schema, &ZeroDefaults).unwrap();
    }
}
