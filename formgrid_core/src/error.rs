// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for programmer and collaborator failures.
//!
//! Validation failures are not errors in this sense; they are data carried as
//! [`ValidationError`](crate::validation::ValidationError) values.

use crate::path::Path;

/// Malformed path construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A segment was neither a string nor a non-negative integer.
    #[error("path segment must be a string or a non-negative integer, got `{0}`")]
    InvalidSegment(String),
}

/// Schema pointer resolution failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The pointer does not address anything in the schema.
    #[error("schema pointer `{0}` does not resolve")]
    Unresolved(String),
    /// Only document-local references (`#/...`) are followed.
    #[error("schema reference `{0}` is not a local reference")]
    ExternalRef(String),
    /// `$ref` chains deeper than the resolver allows.
    #[error("schema reference chain through `{0}` is too deep")]
    RefDepth(String),
}

/// Mutation failures reported by a [`DataStore`](crate::store::DataStore).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// An intermediate value on the path is missing or not a container.
    #[error("no container at `{0}`")]
    PathNotFound(Path),
    /// An array mutation targeted a non-array value.
    #[error("value at `{0}` is not an array")]
    NotAnArray(Path),
    /// A removal index is past the end of the array.
    #[error("index {index} out of range for `{path}` (length {len})")]
    IndexOutOfRange {
        /// Array path.
        path: Path,
        /// Offending index.
        index: usize,
        /// Array length at the time of the call.
        len: usize,
    },
}
