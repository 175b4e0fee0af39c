// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Design-system widget descriptions produced by cells.
//!
//! Widgets are plain data. A host toolkit maps them onto its own components;
//! nothing here draws.

use serde::Serialize;
use serde_json::Value;

/// Validation state shown on an input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationState {
    /// No error at this path.
    #[default]
    Valid,
    /// At least one error at this path.
    Invalid,
}

impl ValidationState {
    /// `Valid` when `message` is empty.
    pub fn from_message(message: &str) -> Self {
        if message.is_empty() {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// Horizontal sizing of an input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    /// Fill the container (`100%`).
    #[default]
    Full,
    /// Size to content.
    Auto,
}

/// Attributes shared by every input widget.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Element id, `<control id>-input`.
    pub id: String,
    /// Visible label, or `None` when hidden.
    pub label: Option<String>,
    /// Accessible name, present even when the label is hidden.
    pub aria_label: String,
    /// Input is read-only.
    pub disabled: bool,
    /// Request focus on first render.
    pub autofocus: bool,
    /// Show the required marker.
    pub required: bool,
    /// Validation state.
    pub validation: ValidationState,
    /// Horizontal sizing.
    pub width: Width,
}

/// Granularity of a date or time picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Calendar day.
    Day,
    /// Time of day, to the minute.
    Minute,
    /// Day and time.
    DateTime,
}

/// The input part of a widget.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Input {
    /// Single-line text.
    TextField {
        /// Current text; empty when the value is absent.
        value: String,
        /// Enforced maximum length.
        max_length: Option<u64>,
    },
    /// Multi-line text.
    TextArea {
        /// Current text; empty when the value is absent.
        value: String,
        /// Enforced maximum length.
        max_length: Option<u64>,
    },
    /// Numeric entry.
    NumberField {
        /// Current value; `None` when absent.
        value: Option<f64>,
        /// Text shown in the field.
        display: String,
        /// Accept integers only.
        integer: bool,
    },
    /// Boolean toggle.
    Checkbox {
        /// Checked state; absent reads as unchecked.
        selected: bool,
    },
    /// Choice among fixed values.
    Picker {
        /// Choices in schema order.
        items: Vec<Value>,
        /// Index of the current value in `items`.
        selected: Option<usize>,
    },
    /// Date, time or date-time entry.
    DatePicker {
        /// Current text value; empty when absent.
        value: String,
        /// Precision.
        granularity: Granularity,
    },
    /// Bounded slider.
    Slider {
        /// Current value, or the schema default when absent.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Step from `multipleOf`, else 1.
        step: f64,
    },
}

/// A rendered cell or control.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Widget {
    /// Shared attributes.
    pub field: Field,
    /// Kind-specific input.
    pub input: Input,
}

impl Widget {
    /// The textual value as the user would see it.
    pub fn display_text(&self) -> String {
        match &self.input {
            Input::TextField { value, .. }
            | Input::TextArea { value, .. }
            | Input::DatePicker { value, .. } => value.clone(),
            Input::NumberField { display, .. } => display.clone(),
            Input::Checkbox { selected } => selected.to_string(),
            Input::Picker { items, selected } => selected
                .and_then(|i| items.get(i))
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_default(),
            Input::Slider { value, .. } => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_fields_in_camel_case() {
        let widget = Widget {
            field: Field {
                id: "#/a-input".into(),
                label: None,
                aria_label: "A".into(),
                disabled: false,
                autofocus: false,
                required: true,
                validation: ValidationState::Valid,
                width: Width::Full,
            },
            input: Input::TextField {
                value: String::new(),
                max_length: Some(3),
            },
        };
        let value = serde_json::to_value(&widget).unwrap();
        assert_eq!(
            value["input"],
            json!({ "kind": "textField", "value": "", "maxLength": 3 })
        );
        assert_eq!(value["field"]["ariaLabel"], json!("A"));

        let date = Input::DatePicker {
            value: "2024-01-31".into(),
            granularity: Granularity::DateTime,
        };
        assert_eq!(
            serde_json::to_value(&date).unwrap(),
            json!({ "kind": "datePicker", "value": "2024-01-31", "granularity": "datetime" })
        );
    }
}
