// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared data store seam and an in-memory implementation.
//!
//! ## Overview
//!
//! The store exclusively owns the form data. Renderers never hold an
//! authoritative copy: they read a [`Snapshot`] for one render pass and funnel
//! every edit through one of three mutation entry points, each of which is a
//! single, self-contained request.
//!
//! - [`DataStore::update`] replaces the value at a path.
//! - [`DataStore::add_item`] appends to the array at a path, creating it when absent.
//! - [`DataStore::remove_items`] removes array elements by index.
//!
//! [`MemoryStore`] re-runs its [`Validator`] and notifies subscribers after
//! each successful mutation.

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::path::Path;
use crate::snapshot::Snapshot;
use crate::validation::{NoValidation, ValidationError, Validator};

/// Authoritative owner of form data.
pub trait DataStore {
    /// Current data value.
    fn data(&self) -> &Value;

    /// Current validation errors for the whole form.
    fn errors(&self) -> &[ValidationError];

    /// Replace the value at `path` with `f(current)`. `None` removes it.
    fn update(
        &mut self,
        path: &Path,
        f: impl FnOnce(Option<&Value>) -> Option<Value>,
    ) -> Result<(), StoreError>;

    /// Append `value` to the array at `path`, creating the array when absent.
    fn add_item(&mut self, path: &Path, value: Value) -> Result<(), StoreError>;

    /// Remove the elements at `indices` from the array at `path`.
    fn remove_items(&mut self, path: &Path, indices: &[usize]) -> Result<(), StoreError>;
}

/// What a mutation did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChangeKind {
    /// [`DataStore::update`] or [`MemoryStore::set_data`].
    Update,
    /// [`DataStore::add_item`].
    AddItem,
    /// [`DataStore::remove_items`].
    RemoveItems,
}

/// Change notification delivered to subscribers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Change {
    /// Store revision after the change.
    pub revision: u64,
    /// Path the mutation targeted.
    pub path: Path,
    /// Kind of mutation.
    pub kind: ChangeKind,
}

/// Handle returned by [`MemoryStore::subscribe`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Change)>;

/// In-memory [`DataStore`] holding data, schema, config and errors.
pub struct MemoryStore {
    data: Value,
    schema: Value,
    config: Value,
    errors: Vec<ValidationError>,
    validator: Box<dyn Validator>,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_listener: u64,
}

impl core::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("data", &self.data)
            .field("errors", &self.errors.len())
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl MemoryStore {
    /// Create a store without validation and with an empty config.
    pub fn new(schema: Value, data: Value) -> Self {
        Self {
            data,
            schema,
            config: Value::Object(Map::new()),
            errors: Vec::new(),
            validator: Box::new(NoValidation),
            revision: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Install a validator and validate the current data.
    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Box::new(validator);
        self.revalidate();
        self
    }

    /// Set the form-wide config object.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }

    /// Root schema.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Form-wide config object.
    pub fn config(&self) -> &Value {
        &self.config
    }

    /// Number of successful mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Immutable view for one render pass.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.data, &self.errors, &self.schema, &self.config)
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a change listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    /// Replace the whole data value.
    pub fn set_data(&mut self, data: Value) {
        self.data = data;
        self.commit(Path::root(), ChangeKind::Update);
    }

    fn revalidate(&mut self) {
        self.errors = self.validator.validate(&self.schema, &self.data);
    }

    fn commit(&mut self, path: Path, kind: ChangeKind) {
        self.revision += 1;
        self.revalidate();
        tracing::debug!(
            revision = self.revision,
            path = %path,
            ?kind,
            errors = self.errors.len(),
            "store mutated"
        );
        let change = Change {
            revision: self.revision,
            path,
            kind,
        };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }

    /// Mutable access to the array at `path`, creating it when the slot is
    /// absent or `null`.
    fn array_at(&mut self, path: &Path, create: bool) -> Result<&mut Vec<Value>, StoreError> {
        if create {
            let missing = path.get(&self.data).is_none_or(Value::is_null);
            if missing {
                set_at(&mut self.data, path, Some(Value::Array(Vec::new())))?;
            }
        }
        match path.get_mut(&mut self.data) {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(StoreError::NotAnArray(path.clone())),
            None => Err(StoreError::PathNotFound(path.clone())),
        }
    }
}

impl DataStore for MemoryStore {
    fn data(&self) -> &Value {
        &self.data
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn update(
        &mut self,
        path: &Path,
        f: impl FnOnce(Option<&Value>) -> Option<Value>,
    ) -> Result<(), StoreError> {
        let next = f(path.get(&self.data));
        set_at(&mut self.data, path, next)?;
        self.commit(path.clone(), ChangeKind::Update);
        Ok(())
    }

    fn add_item(&mut self, path: &Path, value: Value) -> Result<(), StoreError> {
        self.array_at(path, true)?.push(value);
        self.commit(path.clone(), ChangeKind::AddItem);
        Ok(())
    }

    fn remove_items(&mut self, path: &Path, indices: &[usize]) -> Result<(), StoreError> {
        let items = self.array_at(path, false)?;
        let len = items.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(StoreError::IndexOutOfRange {
                path: path.clone(),
                index,
                len,
            });
        }
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        for i in sorted {
            items.remove(i);
        }
        self.commit(path.clone(), ChangeKind::RemoveItems);
        Ok(())
    }
}

/// Write `value` at `path`, creating intermediate objects for missing or
/// `null` slots. `None` removes an object key or nulls an array element.
fn set_at(data: &mut Value, path: &Path, value: Option<Value>) -> Result<(), StoreError> {
    let segments: Vec<&str> = path.segments().collect();
    let Some((last, parents)) = segments.split_last() else {
        *data = value.unwrap_or(Value::Null);
        return Ok(());
    };
    let mut cur = data;
    for seg in parents {
        if cur.is_null() {
            *cur = Value::Object(Map::new());
        }
        cur = match cur {
            Value::Object(map) => map
                .entry((*seg).to_owned())
                .or_insert_with(|| Value::Object(Map::new())),
            Value::Array(items) => seg
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get_mut(i))
                .ok_or_else(|| StoreError::PathNotFound(path.clone()))?,
            _ => return Err(StoreError::PathNotFound(path.clone())),
        };
    }
    if cur.is_null() {
        *cur = Value::Object(Map::new());
    }
    match (cur, value) {
        (Value::Object(map), Some(v)) => {
            map.insert((*last).to_owned(), v);
        }
        (Value::Object(map), None) => {
            map.shift_remove(*last);
        }
        (Value::Array(items), v) => {
            let slot = last
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get_mut(i))
                .ok_or_else(|| StoreError::PathNotFound(path.clone()))?;
            *slot = v.unwrap_or(Value::Null);
        }
        _ => return Err(StoreError::PathNotFound(path.clone())),
    }
    Ok(())
}
