// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranked dispatch.
//!
//! Prints every renderer's rank for a handful of controls and the winner,
//! including a control nothing applies to.
//!
//! Run:
//! - `cargo run -p formgrid_demos --example dispatch_ranks`

use formgrid_dispatch::{ControlElement, Dispatch, TestContext, UiSchema};
use formgrid_table::renderers;
use serde_json::json;

fn main() {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "bio": { "type": "string" },
            "born": { "type": "string", "format": "date" },
            "rating": { "type": "integer", "minimum": 1, "maximum": 5, "default": 3 },
            "color": { "type": "string", "enum": ["red", "green"] },
            "tags": { "type": "array", "items": { "type": "string" } },
            "grid": { "type": "array", "items": { "type": "array" } },
            "meta": { "type": "object" }
        }
    });
    let controls = [
        ControlElement::new("#/properties/name"),
        ControlElement::new("#/properties/bio").with_options(json!({ "multi": true })),
        ControlElement::new("#/properties/born"),
        ControlElement::new("#/properties/rating").with_options(json!({ "slider": true })),
        ControlElement::new("#/properties/color"),
        ControlElement::new("#/properties/tags"),
        ControlElement::new("#/properties/grid"),
        ControlElement::new("#/properties/meta"),
    ];

    let registry = renderers::registry();
    for control in controls {
        let scope = control.scope.clone();
        let ui = UiSchema::Control(control);
        let ctx = TestContext::new(&ui, &schema, &schema);
        let applicable: Vec<_> = registry
            .ranks(&ctx)
            .into_iter()
            .filter(|(_, rank)| *rank >= 0)
            .map(|(name, rank)| format!("{name}={rank}"))
            .collect();
        let winner = match registry.dispatch(&ctx) {
            Dispatch::Matched(m) => format!("{} ({:?})", m.name, m.renderer),
            Dispatch::NoMatch => "no applicable renderer".to_owned(),
        };
        println!("{scope:<22} -> {winner}");
        println!("{:<22}    [{}]", "", applicable.join(", "));
    }
}
