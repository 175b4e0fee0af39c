// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while turning user input into data.

use formgrid_core::StoreError;

/// User text that a cell cannot convert to a data value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{input}` is not a valid {expected}")]
pub struct InputError {
    /// Raw text as entered.
    pub input: String,
    /// What the cell expected, e.g. `number`.
    pub expected: &'static str,
}

/// Failure applying a cell edit to the store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    /// The input did not parse.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The store rejected the update.
    #[error(transparent)]
    Store(#[from] StoreError),
}
