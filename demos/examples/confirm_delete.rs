// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-step row deletion.
//!
//! A host without modal dialogs holds on to the pending delete, asks the
//! user however it likes, and resolves it later. Here the answers are
//! scripted.
//!
//! Run:
//! - `cargo run -p formgrid_demos --example confirm_delete`

use formgrid_core::{DataStore, MemoryStore, Path};
use formgrid_dispatch::{ControlElement, cells};
use formgrid_table::TableArrayControl;
use serde_json::json;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,formgrid_table=debug".into()),
        )
        .init();

    let schema = json!({
        "type": "object",
        "properties": { "tags": { "type": "array", "items": { "type": "string" } } }
    });
    let mut store = MemoryStore::new(schema.clone(), json!({ "tags": ["red", "green", "blue"] }));
    let revisions = std::rc::Rc::new(std::cell::Cell::new(0));
    let seen = revisions.clone();
    store.subscribe(move |change| {
        seen.set(change.revision);
        println!("  store: {:?} at `{}` (revision {})", change.kind, change.path, change.revision);
    });

    let control = ControlElement::new("#/properties/tags");
    let table = TableArrayControl::new(&control, &schema, Path::root());
    let view = table.render(&store.snapshot(), &cells::registry()).unwrap();

    for (row, answer) in view.rows().iter().zip([false, true]) {
        let pending = row.delete.request();
        println!(
            "{} -> {:?}? {}",
            row.delete.aria_label,
            pending.prompt(),
            if answer { "yes" } else { "no" }
        );
        let outcome = pending.resolve(answer, &mut store).unwrap();
        println!("  outcome: {outcome:?}");
    }

    println!("tags now: {}", store.data()["tags"]);
    println!("last revision: {}", revisions.get());
}
