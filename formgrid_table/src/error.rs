// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by table and list actions.

use formgrid_core::{SchemaError, StoreError};

/// Failure of an array control action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The control's schema does not resolve to an array.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The store rejected the mutation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
