// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical, horizontal and group layouts.
//!
//! A layout owns no data: its children share the layout's data path and
//! schema. Rendering one dispatches every child element through the registry
//! and reports the winner, so a host can recurse into each child with the
//! renderer it names. A group additionally carries a heading when it has a
//! label.

use serde_json::Value;

use formgrid_core::{Path, Snapshot};
use formgrid_dispatch::layout::Layout;
use formgrid_dispatch::tester::{RankedTester, or, rank_with, ui_type_is};
use formgrid_dispatch::{ControlFlags, Registry, TestContext, UiSchema};

/// Registration name of the layout renderer.
pub const LAYOUT: &str = "layout";

/// Tester for layouts: rank 1 for vertical, horizontal and group elements.
pub fn layout_tester() -> RankedTester {
    rank_with(
        1,
        or(
            or(ui_type_is("VerticalLayout"), ui_type_is("HorizontalLayout")),
            ui_type_is("Group"),
        ),
    )
}

/// Arrangement of a layout's children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Stacked top to bottom.
    Vertical,
    /// Side by side.
    Horizontal,
    /// Stacked under an optional heading.
    Group,
}

/// One child of a rendered layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutChild<'u> {
    /// The child element.
    pub uischema: &'u UiSchema,
    /// Data path the child renders under; the layout's own path.
    pub path: Path,
    /// Renderer chosen for the child, or `None` when nothing applies.
    pub renderer: Option<&'static str>,
}

/// A rendered layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutView<'u> {
    /// Arrangement.
    pub kind: LayoutKind,
    /// Group heading; `None` for plain layouts and unlabeled groups.
    pub heading: Option<String>,
    /// False when the layout is hidden.
    pub visible: bool,
    /// Children in declaration order.
    pub children: Vec<LayoutChild<'u>>,
}

/// Layout renderer bound to one layout element.
#[derive(Clone, Debug)]
pub struct LayoutControl<'u> {
    kind: LayoutKind,
    heading: Option<&'u str>,
    elements: &'u [UiSchema],
    schema: &'u Value,
    path: Path,
    flags: ControlFlags,
}

impl<'u> LayoutControl<'u> {
    /// Bind `uischema` under the data path `path`, with children scoped
    /// relative to `schema`. `None` when the element is not a layout.
    pub fn new(uischema: &'u UiSchema, schema: &'u Value, path: Path) -> Option<Self> {
        let (kind, heading, elements) = match uischema {
            UiSchema::VerticalLayout(Layout { elements }) => {
                (LayoutKind::Vertical, None, elements)
            }
            UiSchema::HorizontalLayout(Layout { elements }) => {
                (LayoutKind::Horizontal, None, elements)
            }
            UiSchema::Group(group) => {
                (LayoutKind::Group, group.label.as_deref(), &group.elements)
            }
            _ => return None,
        };
        Some(Self {
            kind,
            heading,
            elements,
            schema,
            path,
            flags: ControlFlags::default(),
        })
    }

    /// Replace the visibility flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ControlFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Render against `snapshot`, choosing each child's renderer from `registry`.
    pub fn render<R>(&self, snapshot: &Snapshot<'_>, registry: &Registry<R>) -> LayoutView<'u> {
        let children = self
            .elements
            .iter()
            .map(|child| LayoutChild {
                uischema: child,
                path: self.path.clone(),
                renderer: registry
                    .dispatch(&TestContext::new(child, self.schema, snapshot.schema))
                    .name(),
            })
            .collect();
        LayoutView {
            kind: self.kind,
            heading: self.heading.map(str::to_owned),
            visible: self.flags.is_visible(),
            children,
        }
    }
}
