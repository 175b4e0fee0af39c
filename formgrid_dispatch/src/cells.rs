// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in cell editors.
//!
//! ## Overview
//!
//! A cell is the editor for one primitive value: a table cell, or the input of
//! a labeled control. [`CellKind`] enumerates the built-ins. Each kind has a
//! ranked tester, renders a [`Widget`] from [`CellProps`], and converts user
//! text back into data with [`CellKind::parse_input`].
//!
//! | Kind | Rank | Applies to |
//! |------|------|------------|
//! | `Text` | 1 | strings |
//! | `TextArea` | 2 | strings with `options.multi` |
//! | `Number` / `Integer` / `Boolean` | 2 | that schema type |
//! | `Enum` | 2 | schemas with `enum` |
//! | `Date` / `Time` / `DateTime` | 2 | string `format`, or `options.format` |
//! | `Slider` | 4 | bounded numbers with a default and `options.slider` |
//! | `NumberFormat` | 4 | numbers with `options.format: true` |
//!
//! ## Input
//!
//! Empty text clears the value. Numeric kinds reject text that does not
//! parse; the error is returned, and the store is left untouched.

use serde_json::Value;

use formgrid_core::schema::{self, SchemaType};
use formgrid_core::{DataStore, Options, Path};

use crate::error::{CellError, InputError};
use crate::flags::ControlFlags;
use crate::layout::{ControlElement, label_description};
use crate::registry::Registry;
use crate::tester::{self, RankedTester, rank_with};
use crate::widget::{Field, Granularity, Input, ValidationState, Widget, Width};

/// Everything a cell needs to render.
#[derive(Clone, Debug)]
pub struct CellProps<'a> {
    /// Element id; the input's id is `<id>-input`.
    pub id: String,
    /// Data path the cell edits.
    pub path: Path,
    /// The (usually synthetic) control element.
    pub control: &'a ControlElement,
    /// Resolved schema of the value.
    pub schema: &'a Value,
    /// Current value; `None` when absent.
    pub data: Option<&'a Value>,
    /// Visibility and interaction state.
    pub flags: ControlFlags,
    /// Config merged with the control's options.
    pub options: Options,
    /// First error message at `path`, or empty.
    pub error: &'a str,
}

impl<'a> CellProps<'a> {
    /// Props with default flags, options and no error.
    pub fn new(
        control: &'a ControlElement,
        schema: &'a Value,
        path: Path,
        data: Option<&'a Value>,
    ) -> Self {
        Self {
            id: element_id(&path),
            path,
            control,
            schema,
            data: data.filter(|v| !v.is_null()),
            flags: ControlFlags::default(),
            options: Options::merged(&Value::Null, control.options.as_ref()),
            error: "",
        }
    }

    /// Replace the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ControlFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Attach the projected error message.
    #[must_use]
    pub fn with_error(mut self, error: &'a str) -> Self {
        self.error = error;
        self
    }

    fn field(&self) -> Field {
        let label = label_description(self.control, self.schema);
        Field {
            id: format!("{}-input", self.id),
            label: label.show.then(|| label.text.clone()),
            aria_label: label.text,
            disabled: !self.flags.is_enabled(),
            autofocus: self.options.focus,
            required: self.flags.is_required() && !self.options.hide_required_asterisk,
            validation: ValidationState::from_message(self.error),
            width: if self.options.trim {
                Width::Auto
            } else {
                Width::Full
            },
        }
    }

    fn text(&self) -> String {
        match self.data {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    fn number(&self) -> Option<f64> {
        self.data.and_then(Value::as_f64)
    }
}

/// Stable element id for a data path.
pub fn element_id(path: &Path) -> String {
    if path.is_root() {
        "#".to_owned()
    } else {
        format!("#/{}", path.as_str().replace('.', "/"))
    }
}

/// Built-in cell kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    TextArea,
    /// Floating-point number.
    Number,
    /// Integer.
    Integer,
    /// Checkbox.
    Boolean,
    /// Picker over `enum` values.
    Enum,
    /// Date picker.
    Date,
    /// Time picker.
    Time,
    /// Date-time picker.
    DateTime,
    /// Bounded slider.
    Slider,
    /// Number with grouped digits.
    NumberFormat,
}

impl CellKind {
    /// Every built-in, in registration order.
    pub const ALL: [Self; 11] = [
        Self::Text,
        Self::TextArea,
        Self::Number,
        Self::Integer,
        Self::Boolean,
        Self::Enum,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Slider,
        Self::NumberFormat,
    ];

    /// Registration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text-cell",
            Self::TextArea => "text-area-cell",
            Self::Number => "number-cell",
            Self::Integer => "integer-cell",
            Self::Boolean => "boolean-cell",
            Self::Enum => "enum-cell",
            Self::Date => "date-cell",
            Self::Time => "time-cell",
            Self::DateTime => "date-time-cell",
            Self::Slider => "slider-cell",
            Self::NumberFormat => "number-format-cell",
        }
    }

    /// Ranked tester for this kind.
    pub fn tester(self) -> RankedTester {
        match self {
            Self::Text => rank_with(1, tester::is_string_control),
            Self::TextArea => rank_with(2, tester::is_multi_line_control),
            Self::Number => rank_with(2, tester::is_number_control),
            Self::Integer => rank_with(2, tester::is_integer_control),
            Self::Boolean => rank_with(2, tester::is_boolean_control),
            Self::Enum => rank_with(2, tester::is_enum_control),
            Self::Date => rank_with(2, tester::is_date_control),
            Self::Time => rank_with(2, tester::is_time_control),
            Self::DateTime => rank_with(2, tester::is_date_time_control),
            Self::Slider => rank_with(4, tester::is_range_control),
            Self::NumberFormat => rank_with(4, tester::is_number_format_control),
        }
    }

    /// Build the widget for `props`.
    pub fn render(self, props: &CellProps<'_>) -> Widget {
        let restricted = || {
            props
                .options
                .restrict
                .then(|| schema::max_length(props.schema))
                .flatten()
        };
        let input = match self {
            Self::Text => Input::TextField {
                value: props.text(),
                max_length: restricted(),
            },
            Self::TextArea => Input::TextArea {
                value: props.text(),
                max_length: schema::max_length(props.schema),
            },
            Self::Number | Self::Integer => Input::NumberField {
                value: props.number(),
                display: props.text(),
                integer: self == Self::Integer,
            },
            Self::NumberFormat => Input::NumberField {
                value: props.number(),
                display: props.number().map(group_digits).unwrap_or_default(),
                integer: schema::has_type(props.schema, SchemaType::Integer),
            },
            Self::Boolean => Input::Checkbox {
                selected: props.data.and_then(Value::as_bool).unwrap_or(false),
            },
            Self::Enum => {
                let items = schema::enum_values(props.schema)
                    .map(<[Value]>::to_vec)
                    .unwrap_or_default();
                let selected = props.data.and_then(|d| items.iter().position(|v| v == d));
                Input::Picker { items, selected }
            }
            Self::Date => date_picker(props, Granularity::Day),
            Self::Time => date_picker(props, Granularity::Minute),
            Self::DateTime => date_picker(props, Granularity::DateTime),
            Self::Slider => {
                let min = schema::number(props.schema, "minimum").unwrap_or(0.0);
                let max = schema::number(props.schema, "maximum").unwrap_or(min);
                Input::Slider {
                    value: props
                        .number()
                        .or_else(|| schema::number(props.schema, "default"))
                        .unwrap_or(min),
                    min,
                    max,
                    step: schema::number(props.schema, "multipleOf").unwrap_or(1.0),
                }
            }
        };
        Widget {
            field: props.field(),
            input,
        }
    }

    /// Convert user text into a data value for `schema`. `Ok(None)` clears the value.
    ///
    /// Numeric kinds store integers when `schema` admits only integers.
    pub fn parse_input(self, schema: &Value, raw: &str) -> Result<Option<Value>, InputError> {
        if raw.is_empty() {
            return Ok(None);
        }
        let reject = |expected| InputError {
            input: raw.to_owned(),
            expected,
        };
        let integral = self == Self::Integer
            || (schema::has_type(schema, SchemaType::Integer)
                && !schema::has_type(schema, SchemaType::Number));
        let number = |text: &str| {
            if integral {
                text.parse::<i64>()
                    .map(|n| Some(Value::from(n)))
                    .map_err(|_| reject("integer"))
            } else {
                parse_number(text).ok_or_else(|| reject("number"))
            }
        };
        match self {
            Self::Text
            | Self::TextArea
            | Self::Enum
            | Self::Date
            | Self::Time
            | Self::DateTime => Ok(Some(Value::String(raw.to_owned()))),
            Self::Integer | Self::Number | Self::Slider => number(raw.trim()),
            Self::NumberFormat => number(&raw.trim().replace(',', "")),
            Self::Boolean => match raw.trim() {
                "true" => Ok(Some(Value::Bool(true))),
                "false" => Ok(Some(Value::Bool(false))),
                _ => Err(reject("boolean")),
            },
        }
    }

    /// Parse `raw` for `schema` and write it to `path`; nothing is written if
    /// parsing fails.
    pub fn apply_input(
        self,
        store: &mut impl DataStore,
        schema: &Value,
        path: &Path,
        raw: &str,
    ) -> Result<(), CellError> {
        let value = self.parse_input(schema, raw)?;
        tracing::trace!(cell = self.name(), %path, "applying cell input");
        store.update(path, |_| value)?;
        Ok(())
    }
}

/// Anything a registry can hold as a cell editor.
pub trait CellRenderer {
    /// Build the widget for `props`.
    fn render_cell(&self, props: &CellProps<'_>) -> Widget;
}

impl CellRenderer for CellKind {
    fn render_cell(&self, props: &CellProps<'_>) -> Widget {
        self.render(props)
    }
}

impl<F: Fn(&CellProps<'_>) -> Widget> CellRenderer for F {
    fn render_cell(&self, props: &CellProps<'_>) -> Widget {
        self(props)
    }
}

fn date_picker(props: &CellProps<'_>, granularity: Granularity) -> Input {
    Input::DatePicker {
        value: props.text(),
        granularity,
    }
}

fn parse_number(text: &str) -> Option<Option<Value>> {
    let n = text.parse::<f64>().ok()?;
    serde_json::Number::from_f64(n).map(|n| Some(Value::Number(n)))
}

/// Format a number with `,` between groups of three integer digits.
///
/// ```
/// use formgrid_dispatch::cells::group_digits;
///
/// assert_eq!(group_digits(1234567.0), "1,234,567");
/// assert_eq!(group_digits(-1234.5), "-1,234.5");
/// assert_eq!(group_digits(999.0), "999");
/// ```
pub fn group_digits(n: f64) -> String {
    let text = n.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int, frac) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut out = String::with_capacity(text.len() + int.len() / 3);
    out.push_str(sign);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Registry of every built-in cell.
pub fn registry() -> Registry<CellKind> {
    let mut registry = Registry::new();
    for kind in CellKind::ALL {
        registry.register(kind.name(), kind.tester(), kind);
    }
    registry
}
