// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors as data, and the validator seam.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::Path;

/// A data location that fails a schema constraint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Data path of the failing value.
    pub path: Path,
    /// Human-readable message.
    pub message: String,
    /// Schema keyword that failed, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl ValidationError {
    /// Create an error without a keyword.
    pub fn new(path: impl Into<Path>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            keyword: None,
        }
    }

    /// Attach the failing keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validates a data value against a schema.
///
/// Validation itself is provided by the host; the store only re-runs it after
/// every mutation.
pub trait Validator {
    /// All errors for `data` under `schema`, in the validator's own order.
    fn validate(&self, schema: &Value, data: &Value) -> Vec<ValidationError>;
}

impl<F: Fn(&Value, &Value) -> Vec<ValidationError>> Validator for F {
    fn validate(&self, schema: &Value, data: &Value) -> Vec<ValidationError> {
        self(schema, data)
    }
}

/// Validator that never reports errors.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoValidation;

impl Validator for NoValidation {
    fn validate(&self, _schema: &Value, _data: &Value) -> Vec<ValidationError> {
        Vec::new()
    }
}
