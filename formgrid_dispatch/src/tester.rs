// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Testers: predicates over a (layout element, schema) pair, and their ranks.
//!
//! ## Overview
//!
//! A [`Tester`] answers "does this renderer apply here?". A [`RankedTester`]
//! pairs it with a [`Rank`]: the rank when it applies, [`NOT_APPLICABLE`]
//! otherwise. The [registry](crate::registry) picks the highest rank.
//!
//! Control testers resolve the control's `scope` against the schema first, so
//! `schema_type_is(Number)` with scope `#/properties/foo` looks at
//! `properties.foo`, not at its siblings. A non-control element, or a scope
//! that does not resolve, never applies.
//!
//! ## Composition
//!
//! Leaf testers are plain functions or small structs; combine them with
//! [`and`] and [`or`].
//!
//! ```
//! use formgrid_dispatch::layout::{ControlElement, UiSchema};
//! use formgrid_dispatch::tester::{TestContext, rank_with, and, is_control, option_is};
//! use serde_json::json;
//!
//! let tester = rank_with(5, and(is_control, option_is("readonly", json!(true))));
//! let ui = UiSchema::Control(ControlElement::new("#").with_options(json!({ "readonly": true })));
//! let schema = json!({ "type": "string" });
//! assert_eq!(tester.rank(&TestContext::new(&ui, &schema, &schema)), 5);
//! ```

use serde_json::Value;

use formgrid_core::resolve::follow_refs;
use formgrid_core::schema::{self, SchemaType};
use formgrid_core::{PointerResolver, SchemaResolver};

use crate::layout::{ControlElement, UiSchema};

/// Applicability score. Higher wins.
pub type Rank = i32;

/// Rank reported when a tester does not apply.
pub const NOT_APPLICABLE: Rank = -1;

/// Inputs every tester sees.
#[derive(Copy, Clone, Debug)]
pub struct TestContext<'a> {
    /// Layout element being rendered.
    pub uischema: &'a UiSchema,
    /// Schema the element's scope is relative to.
    pub schema: &'a Value,
    /// Root schema for `$ref` resolution.
    pub root: &'a Value,
}

impl<'a> TestContext<'a> {
    /// Bundle tester inputs.
    pub fn new(uischema: &'a UiSchema, schema: &'a Value, root: &'a Value) -> Self {
        Self {
            uischema,
            schema,
            root,
        }
    }

    /// The element as a control.
    pub fn control(&self) -> Option<&'a ControlElement> {
        self.uischema.as_control()
    }

    /// Schema addressed by the control's scope.
    pub fn resolved_schema(&self) -> Option<&'a Value> {
        let control = self.control()?;
        PointerResolver
            .resolve(self.schema, &control.scope, self.root)
            .ok()
    }
}

/// Applicability predicate.
pub trait Tester {
    /// True if the renderer applies to `ctx`.
    fn test(&self, ctx: &TestContext<'_>) -> bool;
}

impl<F: Fn(&TestContext<'_>) -> bool> Tester for F {
    fn test(&self, ctx: &TestContext<'_>) -> bool {
        self(ctx)
    }
}

/// A tester with the rank it reports when it applies.
pub struct RankedTester {
    rank: Rank,
    tester: Box<dyn Tester>,
}

impl core::fmt::Debug for RankedTester {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RankedTester")
            .field("rank", &self.rank)
            .finish_non_exhaustive()
    }
}

impl RankedTester {
    /// Rank for `ctx`: the declared rank if the tester applies, else [`NOT_APPLICABLE`].
    pub fn rank(&self, ctx: &TestContext<'_>) -> Rank {
        if self.tester.test(ctx) {
            self.rank
        } else {
            NOT_APPLICABLE
        }
    }

    /// Declared rank.
    pub fn declared_rank(&self) -> Rank {
        self.rank
    }
}

/// Attach a rank to a tester.
pub fn rank_with(rank: Rank, tester: impl Tester + 'static) -> RankedTester {
    RankedTester {
        rank,
        tester: Box::new(tester),
    }
}

/// Both testers apply.
#[derive(Copy, Clone, Debug)]
pub struct And<A, B>(A, B);

impl<A: Tester, B: Tester> Tester for And<A, B> {
    fn test(&self, ctx: &TestContext<'_>) -> bool {
        self.0.test(ctx) && self.1.test(ctx)
    }
}

/// Either tester applies.
#[derive(Copy, Clone, Debug)]
pub struct Or<A, B>(A, B);

impl<A: Tester, B: Tester> Tester for Or<A, B> {
    fn test(&self, ctx: &TestContext<'_>) -> bool {
        self.0.test(ctx) || self.1.test(ctx)
    }
}

/// Conjunction.
pub fn and<A: Tester, B: Tester>(a: A, b: B) -> And<A, B> {
    And(a, b)
}

/// Disjunction.
pub fn or<A: Tester, B: Tester>(a: A, b: B) -> Or<A, B> {
    Or(a, b)
}

/// The element has the given `type` tag.
#[derive(Copy, Clone, Debug)]
pub struct UiTypeIs(pub &'static str);

impl Tester for UiTypeIs {
    fn test(&self, ctx: &TestContext<'_>) -> bool {
        ctx.uischema.type_name() == self.0
    }
}

/// See [`UiTypeIs`].
pub fn ui_type_is(name: &'static str) -> UiTypeIs {
    UiTypeIs(name)
}

/// The control's resolved schema admits the given type.
#[derive(Copy, Clone, Debug)]
pub struct SchemaTypeIs(pub SchemaType);

impl Tester for SchemaTypeIs {
    fn test(&self, ctx: &TestContext<'_>) -> bool {
        ctx.resolved_schema()
            .is_some_and(|s| schema::has_type(s, self.0))
    }
}

/// See [`SchemaTypeIs`].
pub fn schema_type_is(ty: SchemaType) -> SchemaTypeIs {
    SchemaTypeIs(ty)
}

/// The control's resolved schema is a string with the given `format`.
#[derive(Copy, Clone, Debug)]
pub struct FormatIs(pub &'static str);

impl Tester for FormatIs {
    fn test(&self, ctx: &TestContext<'_>) -> bool {
        ctx.resolved_schema().is_some_and(|s| {
            schema::format(s) == Some(self.0) && schema::has_type(s, SchemaType::String)
        })
    }
}

/// See [`FormatIs`].
pub fn format_is(format: &'static str) -> FormatIs {
    FormatIs(format)
}

/// The control's option `key` equals `value`.
#[derive(Clone, Debug)]
pub struct OptionIs(pub &'static str, pub Value);

impl Tester for OptionIs {
    fn test(&self, ctx: &TestContext<'_>) -> bool {
        ctx.control()
            .and_then(|c| c.option(self.0))
            .is_some_and(|v| *v == self.1)
    }
}

/// See [`OptionIs`].
pub fn option_is(key: &'static str, value: Value) -> OptionIs {
    OptionIs(key, value)
}

/// The control's resolved schema satisfies a predicate.
#[derive(Copy, Clone, Debug)]
pub struct SchemaMatches(pub fn(&Value) -> bool);

impl Tester for SchemaMatches {
    fn test(&self, ctx: &TestContext<'_>) -> bool {
        ctx.resolved_schema().is_some_and(self.0)
    }
}

/// See [`SchemaMatches`].
pub fn schema_matches(predicate: fn(&Value) -> bool) -> SchemaMatches {
    SchemaMatches(predicate)
}

/// The element is a control.
pub fn is_control(ctx: &TestContext<'_>) -> bool {
    ctx.control().is_some()
}

/// The control's resolved items schema, for array controls.
fn items_schema<'a>(ctx: &TestContext<'a>) -> Option<&'a Value> {
    let resolved = ctx.resolved_schema()?;
    if !schema::has_type(resolved, SchemaType::Array) {
        return None;
    }
    follow_refs(schema::items(resolved)?, ctx.root).ok()
}

/// Control over an array whose items are objects.
pub fn is_object_array_control(ctx: &TestContext<'_>) -> bool {
    items_schema(ctx).is_some_and(|items| schema::has_type(items, SchemaType::Object))
}

/// Control over an array whose items have exactly one primitive type.
pub fn is_primitive_array_control(ctx: &TestContext<'_>) -> bool {
    items_schema(ctx).is_some_and(|items| {
        matches!(
            schema::types(items).as_slice(),
            [SchemaType::Integer | SchemaType::Number | SchemaType::Boolean | SchemaType::String]
        )
    })
}

/// String control with `options.multi`.
pub fn is_multi_line_control(ctx: &TestContext<'_>) -> bool {
    SchemaTypeIs(SchemaType::String).test(ctx)
        && ctx
            .control()
            .and_then(|c| c.option("multi"))
            .is_some_and(|v| *v == Value::Bool(true))
}

/// Control whose schema lists `enum` values.
pub fn is_enum_control(ctx: &TestContext<'_>) -> bool {
    ctx.resolved_schema()
        .is_some_and(|s| schema::enum_values(s).is_some())
}

/// Boolean control.
pub fn is_boolean_control(ctx: &TestContext<'_>) -> bool {
    SchemaTypeIs(SchemaType::Boolean).test(ctx)
}

/// Integer control.
pub fn is_integer_control(ctx: &TestContext<'_>) -> bool {
    SchemaTypeIs(SchemaType::Integer).test(ctx)
}

/// Number control.
pub fn is_number_control(ctx: &TestContext<'_>) -> bool {
    SchemaTypeIs(SchemaType::Number).test(ctx)
}

/// String control.
pub fn is_string_control(ctx: &TestContext<'_>) -> bool {
    SchemaTypeIs(SchemaType::String).test(ctx)
}

fn format_or_option(ctx: &TestContext<'_>, format: &'static str) -> bool {
    is_control(ctx)
        && (FormatIs(format).test(ctx) || OptionIs("format", Value::from(format)).test(ctx))
}

/// Date control (`format: date` or `options.format: "date"`).
pub fn is_date_control(ctx: &TestContext<'_>) -> bool {
    format_or_option(ctx, "date")
}

/// Time control (`format: time` or `options.format: "time"`).
pub fn is_time_control(ctx: &TestContext<'_>) -> bool {
    format_or_option(ctx, "time")
}

/// Date-time control (`format: date-time` or `options.format: "date-time"`).
pub fn is_date_time_control(ctx: &TestContext<'_>) -> bool {
    format_or_option(ctx, "date-time")
}

fn is_numeric(ctx: &TestContext<'_>) -> bool {
    is_number_control(ctx) || is_integer_control(ctx)
}

/// Bounded number with a default and `options.slider`.
pub fn is_range_control(ctx: &TestContext<'_>) -> bool {
    is_numeric(ctx)
        && ctx.resolved_schema().is_some_and(|s| {
            schema::number(s, "minimum").is_some()
                && schema::number(s, "maximum").is_some()
                && s.get("default").is_some()
        })
        && OptionIs("slider", Value::Bool(true)).test(ctx)
}

/// Number with `options.format: true` (grouped digits).
pub fn is_number_format_control(ctx: &TestContext<'_>) -> bool {
    is_numeric(ctx) && OptionIs("format", Value::Bool(true)).test(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn control(scope: &str) -> UiSchema {
        UiSchema::Control(ControlElement::new(scope))
    }

    fn ctx<'a>(ui: &'a UiSchema, schema: &'a Value) -> TestContext<'a> {
        TestContext::new(ui, schema, schema)
    }

    #[test]
    fn non_controls_never_apply() {
        let tester = rank_with(2, is_number_control);
        let schema = json!({ "type": "number" });
        assert_eq!(tester.rank(&ctx(&UiSchema::Unknown, &schema)), NOT_APPLICABLE);
        let ui: UiSchema = serde_json::from_value(json!({ "type": "VerticalLayout" })).unwrap();
        assert_eq!(tester.rank(&ctx(&ui, &schema)), NOT_APPLICABLE);
    }

    #[test]
    fn scope_selects_the_property_not_its_siblings() {
        let tester = rank_with(2, is_number_control);
        let ui = control("#/properties/foo");
        let wrong = json!({
            "type": "object",
            "properties": { "foo": { "type": "string" }, "bar": { "type": "number" } }
        });
        assert_eq!(tester.rank(&ctx(&ui, &wrong)), NOT_APPLICABLE);
        let right = json!({ "type": "object", "properties": { "foo": { "type": "number" } } });
        assert_eq!(tester.rank(&ctx(&ui, &right)), 2);
    }

    #[test]
    fn unresolved_scope_never_applies() {
        let ui = control("#/properties/missing");
        let schema = json!({ "type": "object", "properties": {} });
        assert!(!is_string_control(&ctx(&ui, &schema)));
    }

    #[test]
    fn array_control_kinds() {
        let ui = control("#/properties/list");
        let objects = json!({ "properties": { "list": {
            "type": "array", "items": { "type": "object", "properties": {} }
        } } });
        let strings = json!({ "properties": { "list": {
            "type": "array", "items": { "type": "string" }
        } } });
        let nested = json!({ "properties": { "list": {
            "type": "array", "items": { "type": "array" }
        } } });
        let mixed = json!({ "properties": { "list": {
            "type": "array", "items": { "type": ["string", "number"] }
        } } });
        assert!(is_object_array_control(&ctx(&ui, &objects)));
        assert!(!is_primitive_array_control(&ctx(&ui, &objects)));
        assert!(is_primitive_array_control(&ctx(&ui, &strings)));
        assert!(!is_object_array_control(&ctx(&ui, &strings)));
        assert!(!is_primitive_array_control(&ctx(&ui, &nested)));
        assert!(!is_primitive_array_control(&ctx(&ui, &mixed)));
    }

    #[test]
    fn array_items_through_refs() {
        let root = json!({
            "definitions": { "row": { "type": "object", "properties": {} } },
            "properties": { "rows": { "type": "array", "items": { "$ref": "#/definitions/row" } } }
        });
        let ui = control("#/properties/rows");
        assert!(is_object_array_control(&TestContext::new(&ui, &root, &root)));
    }

    #[test]
    fn multi_line_needs_string_and_option() {
        let schema = json!({ "type": "string" });
        let multi =
            UiSchema::Control(ControlElement::new("#").with_options(json!({ "multi": true })));
        assert!(is_multi_line_control(&ctx(&multi, &schema)));
        assert!(!is_multi_line_control(&ctx(&control("#"), &schema)));
        let number = json!({ "type": "number" });
        assert!(!is_multi_line_control(&ctx(&multi, &number)));
    }

    #[test]
    fn date_formats_by_schema_or_option() {
        let date = json!({ "type": "string", "format": "date" });
        assert!(is_date_control(&ctx(&control("#"), &date)));
        assert!(!is_time_control(&ctx(&control("#"), &date)));
        let plain = json!({ "type": "string" });
        let by_option =
            UiSchema::Control(ControlElement::new("#").with_options(json!({ "format": "time" })));
        assert!(is_time_control(&ctx(&by_option, &plain)));
        let dt = json!({ "type": "string", "format": "date-time" });
        assert!(is_date_time_control(&ctx(&control("#"), &dt)));
    }

    #[test]
    fn range_needs_bounds_default_and_option() {
        let slider =
            UiSchema::Control(ControlElement::new("#").with_options(json!({ "slider": true })));
        let full = json!({ "type": "number", "minimum": 0, "maximum": 10, "default": 5 });
        let no_default = json!({ "type": "number", "minimum": 0, "maximum": 10 });
        assert!(is_range_control(&ctx(&slider, &full)));
        assert!(!is_range_control(&ctx(&slider, &no_default)));
        assert!(!is_range_control(&ctx(&control("#"), &full)));
    }

    #[test]
    fn number_format_option() {
        let ui =
            UiSchema::Control(ControlElement::new("#").with_options(json!({ "format": true })));
        assert!(is_number_format_control(&ctx(&ui, &json!({ "type": "integer" }))));
        assert!(!is_number_format_control(&ctx(&ui, &json!({ "type": "string" }))));
    }

    #[test]
    fn combinators() {
        let schema = json!({ "type": "boolean" });
        let ui = control("#");
        assert!(or(is_string_control, is_boolean_control).test(&ctx(&ui, &schema)));
        assert!(!and(is_control, is_string_control).test(&ctx(&ui, &schema)));
        assert!(ui_type_is("Control").test(&ctx(&ui, &schema)));
        assert!(schema_matches(|s| s.get("type").is_some()).test(&ctx(&ui, &schema)));
        assert!(schema_type_is(SchemaType::Boolean).test(&ctx(&ui, &schema)));
        assert!(!format_is("date").test(&ctx(&ui, &schema)));
    }
}
