// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row actions: add with a default value, delete after confirmation.
//!
//! ## Delete protocol
//!
//! Deleting is two steps so it can be driven without a modal UI:
//!
//! 1. [`request_delete`] returns a [`PendingDelete`] carrying the prompt.
//! 2. The host asks the user, then calls [`PendingDelete::resolve`].
//!
//! A confirmed request issues exactly one `remove_items(parent, [index])`; a
//! declined one issues nothing. [`delete_row`] runs both steps against a
//! synchronous [`Confirm`].

use serde_json::Value;

use formgrid_core::{DataStore, DefaultValue, Path, StoreError};

/// Prompt shown before deleting a row.
pub const DELETE_PROMPT: &str = "Are you sure you wish to delete this item?";

/// A delete waiting for the user's answer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until resolved"]
pub struct PendingDelete {
    parent: Path,
    index: usize,
}

/// What resolving a delete did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The element was removed.
    Removed,
    /// The user declined; nothing changed.
    Declined,
}

/// Begin deleting the row at `row_path`, element `index` of its parent array.
pub fn request_delete(row_path: &Path, index: usize) -> PendingDelete {
    PendingDelete {
        parent: row_path.parent(),
        index,
    }
}

impl PendingDelete {
    /// Text to show the user.
    pub fn prompt(&self) -> &'static str {
        DELETE_PROMPT
    }

    /// Array the element is removed from.
    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// Element index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Apply the user's answer.
    pub fn resolve(
        self,
        confirmed: bool,
        store: &mut impl DataStore,
    ) -> Result<DeleteOutcome, StoreError> {
        if !confirmed {
            tracing::debug!(parent = %self.parent, index = self.index, "row delete declined");
            return Ok(DeleteOutcome::Declined);
        }
        store.remove_items(&self.parent, &[self.index])?;
        Ok(DeleteOutcome::Removed)
    }
}

/// Synchronous yes/no prompt.
pub trait Confirm {
    /// Ask `prompt`; `true` confirms.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Ask, then delete the row at `row_path` when confirmed.
pub fn delete_row(
    store: &mut impl DataStore,
    confirm: &mut impl Confirm,
    row_path: &Path,
    index: usize,
) -> Result<DeleteOutcome, StoreError> {
    let pending = request_delete(row_path, index);
    let confirmed = confirm.confirm(pending.prompt());
    pending.resolve(confirmed, store)
}

/// Append a default element built from `element_schema` to the array at `path`.
///
/// The store creates the array when it is absent. The new element is not
/// validated here; it shows up in the next render's errors.
pub fn add_row(
    store: &mut impl DataStore,
    path: &Path,
    element_schema: &Value,
    defaults: &impl DefaultValue,
) -> Result<(), StoreError> {
    let value = defaults.create(element_schema);
    tracing::trace!(%path, "adding row");
    store.add_item(path, value)
}
