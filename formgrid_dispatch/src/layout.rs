// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UI-schema (layout) elements and label derivation.
//!
//! ## Overview
//!
//! A UI schema arranges controls independently of the data schema. Elements
//! are tagged by `type`:
//!
//! - `Control`: binds one schema location (its `scope`) to an editor.
//! - `VerticalLayout` / `HorizontalLayout`: ordered children.
//! - `Group`: children under an optional heading.
//! - `Label`: static text.
//!
//! Unrecognized element types deserialize to [`UiSchema::Unknown`] and are
//! never matched by the built-in testers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use formgrid_core::path::{decode_pointer_token, property_scope, scope_to_data_path};
use formgrid_core::{Path, schema, text};

/// One UI-schema element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiSchema {
    /// A control bound to a schema scope.
    Control(ControlElement),
    /// Children stacked vertically.
    VerticalLayout(Layout),
    /// Children laid out in a row.
    HorizontalLayout(Layout),
    /// Children under an optional heading.
    Group(Group),
    /// Static text.
    Label(LabelElement),
    /// Any other element type.
    #[serde(other)]
    Unknown,
}

impl UiSchema {
    /// The `type` tag of this element.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Control(_) => "Control",
            Self::VerticalLayout(_) => "VerticalLayout",
            Self::HorizontalLayout(_) => "HorizontalLayout",
            Self::Group(_) => "Group",
            Self::Label(_) => "Label",
            Self::Unknown => "Unknown",
        }
    }

    /// The control, if this element is one.
    pub fn as_control(&self) -> Option<&ControlElement> {
        match self {
            Self::Control(c) => Some(c),
            _ => None,
        }
    }

    /// Default layout for a schema: one control per property of an object,
    /// stacked vertically, or a single control for anything else.
    ///
    /// ```
    /// use formgrid_dispatch::layout::UiSchema;
    /// use serde_json::json;
    ///
    /// let ui = UiSchema::generate(&json!({ "properties": { "a": {}, "b": {} } }));
    /// let scopes: Vec<_> = ui
    ///     .elements()
    ///     .iter()
    ///     .filter_map(|e| e.as_control())
    ///     .map(|c| c.scope.as_str())
    ///     .collect();
    /// assert_eq!(scopes, ["#/properties/a", "#/properties/b"]);
    /// ```
    pub fn generate(schema: &Value) -> Self {
        match schema::properties(schema) {
            Some(props) => Self::VerticalLayout(Layout {
                elements: props
                    .keys()
                    .map(|key| Self::Control(ControlElement::new(property_scope(key))))
                    .collect(),
            }),
            None => Self::Control(ControlElement::new("#")),
        }
    }

    /// Child elements of layouts and groups; empty otherwise.
    pub fn elements(&self) -> &[Self] {
        match self {
            Self::VerticalLayout(l) | Self::HorizontalLayout(l) => &l.elements,
            Self::Group(g) => &g.elements,
            _ => &[],
        }
    }
}

/// A control element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlElement {
    /// Schema pointer, e.g. `#/properties/name`. `#` is the schema itself.
    #[serde(default)]
    pub scope: String,
    /// Label override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelSpec>,
    /// Per-control options, overlaid on the form config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl ControlElement {
    /// A control for `scope` with no label override.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            label: None,
            options: None,
        }
    }

    /// A control for `scope` whose label is hidden, as used for table cells.
    pub fn unlabeled(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            label: Some(LabelSpec::Show(false)),
            options: None,
        }
    }

    /// Attach an options object.
    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    /// Data path addressed by the scope, relative to the parent path.
    pub fn data_path(&self) -> Path {
        scope_to_data_path(&self.scope)
    }

    /// A single option value.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.as_ref().and_then(|o| o.get(key))
    }
}

/// How a control's label is given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelSpec {
    /// `true` derives and shows a label; `false` hides it.
    Show(bool),
    /// Explicit label text.
    Text(String),
    /// Explicit text and visibility.
    Described {
        /// Label text; derived when absent.
        #[serde(default)]
        text: Option<String>,
        /// Visibility; shown when absent.
        #[serde(default)]
        show: Option<bool>,
    },
}

/// Ordered children of a vertical or horizontal layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Child elements. A `null` list is treated as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub elements: Vec<UiSchema>,
}

/// A titled group of children.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Heading text; no heading when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Child elements. A `null` list is treated as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub elements: Vec<UiSchema>,
}

/// Static text element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelElement {
    /// Displayed text.
    #[serde(default)]
    pub text: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<UiSchema>, D::Error> {
    Option::<Vec<UiSchema>>::deserialize(d).map(Option::unwrap_or_default)
}

/// Resolved label text and visibility for a control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelDescription {
    /// Text to display (or to use in accessible names when hidden).
    pub text: String,
    /// Whether the label is shown.
    pub show: bool,
}

/// Derive a control's label.
///
/// An explicit string wins. Otherwise the text is the schema's `title`, or
/// the title-cased last segment of the scope. `false` hides the label but
/// still derives its text.
///
/// ```
/// use formgrid_dispatch::layout::{ControlElement, label_description};
/// use serde_json::json;
///
/// let control = ControlElement::new("#/properties/firstName");
/// let label = label_description(&control, &json!({ "type": "string" }));
/// assert_eq!(label.text, "First Name");
/// assert!(label.show);
/// ```
pub fn label_description(control: &ControlElement, schema: &Value) -> LabelDescription {
    let derived = || derive_label(control, schema);
    match &control.label {
        Some(LabelSpec::Text(text)) => LabelDescription {
            text: text.clone(),
            show: true,
        },
        Some(LabelSpec::Show(show)) => LabelDescription {
            text: derived(),
            show: *show,
        },
        Some(LabelSpec::Described { text, show }) => LabelDescription {
            text: text.clone().unwrap_or_else(derived),
            show: show.unwrap_or(true),
        },
        None => LabelDescription {
            text: derived(),
            show: true,
        },
    }
}

fn derive_label(control: &ControlElement, schema: &Value) -> String {
    if let Some(title) = schema::title(schema) {
        return title.to_owned();
    }
    control
        .scope
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty() && *s != "#")
        .map(|s| text::start_case(&decode_pointer_token(s)))
        .unwrap_or_default()
}
