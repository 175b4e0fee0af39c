// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table basics.
//!
//! Renders an object array as a table, adds a row, edits a cell through the
//! cell's input parser, and prints the table after each step.
//!
//! Run:
//! - `cargo run -p formgrid_demos --example table_basics`
//! - `RUST_LOG=debug cargo run -p formgrid_demos --example table_basics` to see store mutations.

use formgrid_core::{MemoryStore, Path, ValidationError, ZeroDefaults};
use formgrid_dispatch::ControlElement;
use formgrid_dispatch::cells::{self, CellKind};
use formgrid_table::{CellContent, TableArrayControl, TableBody, TableView};
use serde_json::{Value, json};

fn print_table(view: &TableView) {
    let valid = if view.header.valid { "" } else { "  (!)" };
    println!("== {}{valid} ==", view.header.label);
    let header: Vec<_> = view
        .columns
        .iter()
        .map(|c| match c.width {
            Some(w) => format!("[actions:{w}]"),
            None => c.label.clone(),
        })
        .collect();
    println!("  {}", header.join(" | "));
    match &view.body {
        TableBody::Placeholder(p) => {
            println!("  {} ({} blank cells)", p.notice(), p.cell_count());
        }
        TableBody::Rows(rows) => {
            for row in rows {
                let cells: Vec<_> = row
                    .cells
                    .iter()
                    .map(|c| {
                        let text = match &c.content {
                            CellContent::Editor { widget, .. } => widget.display_text(),
                            CellContent::Unknown => "?".to_owned(),
                        };
                        if c.error.is_empty() {
                            text
                        } else {
                            format!("{text} <{}>", c.error)
                        }
                    })
                    .collect();
                println!("  {} | {}  [{}]", row.key, cells.join(" | "), row.delete.aria_label);
            }
        }
    }
}

/// Flags people younger than 18.
fn adults_only(_: &Value, data: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, person) in data["people"].as_array().into_iter().flatten().enumerate() {
        if person["age"].as_i64().is_some_and(|age| age < 18) {
            errors.push(
                ValidationError::new(format!("people.{i}.age"), "must be >= 18")
                    .with_keyword("minimum"),
            );
        }
    }
    errors
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let schema = json!({
        "type": "object",
        "properties": {
            "people": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "firstName": { "type": "string" },
                        "age": { "type": "integer" },
                        "nicknames": { "type": "array", "items": { "type": "string" } },
                        "member": { "type": "boolean" }
                    }
                }
            }
        }
    });
    let mut store = MemoryStore::new(schema.clone(), json!({})).with_validator(adults_only);
    let control = ControlElement::new("#/properties/people");
    let table = TableArrayControl::new(&control, &schema, Path::root());
    let registry = cells::registry();

    print_table(&table.render(&store.snapshot(), &registry).unwrap());

    table.add_row(&mut store, &schema, &ZeroDefaults).unwrap();
    let view = table.render(&store.snapshot(), &registry).unwrap();
    let name = view.rows()[0].cells[0].path.clone();
    let age = view.rows()[0].cells[1].path.clone();
    let person = &schema["properties"]["people"]["items"]["properties"];
    CellKind::Text
        .apply_input(&mut store, &person["firstName"], &name, "Ada")
        .unwrap();
    CellKind::Integer
        .apply_input(&mut store, &person["age"], &age, "12")
        .unwrap();
    if let Err(err) = CellKind::Integer.apply_input(&mut store, &person["age"], &age, "twelve")
    {
        println!("rejected input: {err}");
    }

    print_table(&table.render(&store.snapshot(), &registry).unwrap());
}
