// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use formgrid_dispatch::{ControlElement, TestContext, UiSchema};
use formgrid_table::renderers;
use serde_json::json;

fn bench_dispatch(c: &mut Criterion) {
    let schema = json!({
        "definitions": {
            "person": { "type": "object", "properties": { "name": { "type": "string" } } }
        },
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "rating": { "type": "integer", "minimum": 1, "maximum": 5, "default": 3 },
            "people": { "type": "array", "items": { "$ref": "#/definitions/person" } },
            "meta": { "type": "object" }
        }
    });
    let registry = renderers::registry();
    let mut group = c.benchmark_group("dispatch");
    for (name, control) in [
        ("string", ControlElement::new("#/properties/name")),
        (
            "slider",
            ControlElement::new("#/properties/rating").with_options(json!({ "slider": true })),
        ),
        ("object_array_ref", ControlElement::new("#/properties/people")),
        ("no_match", ControlElement::new("#/properties/meta")),
    ] {
        let ui = UiSchema::Control(control);
        group.bench_function(name, |b| {
            b.iter(|| {
                let ctx = TestContext::new(black_box(&ui), &schema, &schema);
                black_box(registry.dispatch(&ctx).name())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
