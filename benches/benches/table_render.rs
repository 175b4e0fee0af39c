// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use formgrid_core::{MemoryStore, Path, ValidationError, ZeroDefaults};
use formgrid_dispatch::{ControlElement, cells};
use formgrid_table::{TableArrayControl, derive_columns, errors, reconcile};
use serde_json::{Value, json};

fn schema(columns: usize) -> Value {
    let mut props = serde_json::Map::new();
    for c in 0..columns {
        let ty = match c % 4 {
            0 => json!({ "type": "string" }),
            1 => json!({ "type": "integer" }),
            2 => json!({ "type": "boolean" }),
            _ => json!({ "type": "string", "format": "date" }),
        };
        props.insert(format!("field_{c}"), ty);
    }
    props.insert("children".into(), json!({ "type": "array", "items": {} }));
    json!({
        "type": "object",
        "properties": {
            "rows": { "type": "array", "items": { "type": "object", "properties": props } }
        }
    })
}

fn data(rows: usize, columns: usize) -> Value {
    let rows: Vec<Value> = (0..rows)
        .map(|r| {
            let mut row = serde_json::Map::new();
            for c in 0..columns {
                let v = match c % 4 {
                    0 => json!(format!("r{r}c{c}")),
                    1 => json!(r * c),
                    2 => json!(r % 2 == 0),
                    _ => json!("2025-01-01"),
                };
                row.insert(format!("field_{c}"), v);
            }
            Value::Object(row)
        })
        .collect();
    json!({ "rows": rows })
}

fn errors_for(rows: usize) -> Vec<ValidationError> {
    (0..rows)
        .step_by(7)
        .map(|r| ValidationError::new(format!("rows.{r}.field_1"), "must be >= 10"))
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_render");
    let control = ControlElement::new("#/properties/rows");
    let registry = cells::registry();
    for &(rows, columns) in &[(10_usize, 4_usize), (100, 8), (1000, 8)] {
        let schema = schema(columns);
        let data = data(rows, columns);
        let errors = errors_for(rows);
        let config = json!({});
        let snapshot = formgrid_core::Snapshot::new(&data, &errors, &schema, &config);
        let table = TableArrayControl::new(&control, &schema, Path::root());
        group.throughput(Throughput::Elements((rows * columns) as u64));
        group.bench_function(format!("render_{rows}x{columns}"), |b| {
            b.iter(|| {
                let view = table.render(black_box(&snapshot), &registry).unwrap();
                black_box(view.rows().len());
            });
        });
    }
    group.finish();
}

fn bench_parts(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_parts");
    let schema = schema(32);
    let items = &schema["properties"]["rows"]["items"];
    group.bench_function("derive_columns_32", |b| {
        b.iter(|| black_box(derive_columns(black_box(items), &schema)).len());
    });

    let data = data(1000, 1);
    let base = Path::from("rows");
    group.bench_function("reconcile_1000", |b| {
        b.iter(|| black_box(reconcile(&base, black_box(data.get("rows")), 1)).len());
    });

    let errs = errors_for(10_000);
    let target = Path::from("rows.9996.field_1");
    group.bench_function("project_last_of_1429", |b| {
        b.iter(|| black_box(errors::project(black_box(&errs), &target)).len());
    });
    group.finish();
}

fn bench_add_rows(c: &mut Criterion) {
    let schema = schema(8);
    let control = ControlElement::new("#/properties/rows");
    c.bench_function("add_100_rows", |b| {
        b.iter_batched(
            || MemoryStore::new(schema.clone(), json!({})),
            |mut store| {
                let table = TableArrayControl::new(&control, &schema, Path::root());
                for _ in 0..100 {
                    table.add_row(&mut store, &schema, &ZeroDefaults).unwrap();
                }
                black_box(store.revision());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_render, bench_parts, bench_add_rows);
criterion_main!(benches);
