// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=formgrid_core --heading-base-level=0

//! Formgrid Core: the shared vocabulary of JSON-Schema-driven forms.
//!
//! Formgrid Core is the leaf crate the renderers build on. It owns no
//! rendering logic; it defines how data is addressed, how schemas are read,
//! and how edits reach the store.
//!
//! - [`Path`]: dotted data addresses (`items.1.name`) composed from key and index segments.
//! - [`schema`]: read-only helpers over schema values (types, properties, keywords).
//! - [`SchemaResolver`]: resolves pointers such as `#/properties/foo`, following local `$ref`s.
//! - [`DefaultValue`]: builds default instances for newly added array elements.
//! - [`DataStore`]: the authoritative data owner and its three mutation entry points.
//! - [`Snapshot`]: the immutable view a render pass reads.
//! - [`Options`]: form config overlaid with per-control options.
//!
//! ## Ownership
//!
//! Data belongs to the store. A render takes a [`Snapshot`], derives what it
//! needs, and issues at most one mutation per user action. Nothing here caches
//! derived state across renders.
//!
//! ## Errors
//!
//! Validation failures are data ([`ValidationError`]), recomputed by the
//! store's [`Validator`] after every mutation. Only programmer and collaborator
//! failures are `Err` values: [`PathError`], [`SchemaError`] and
//! [`StoreError`].
//!
//! ## Example
//!
//! ```
//! use formgrid_core::{DataStore, MemoryStore, Path};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": { "items": { "type": "array", "items": { "type": "string" } } }
//! });
//! let mut store = MemoryStore::new(schema, json!({}));
//!
//! // The array is created on first insert.
//! let items = Path::from("items");
//! store.add_item(&items, json!("a")).unwrap();
//! store.add_item(&items, json!("b")).unwrap();
//! store.remove_items(&items, &[0]).unwrap();
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.data_at(&items.compose(0_usize)), Some(&json!("b")));
//! ```

pub mod defaults;
pub mod error;
pub mod options;
pub mod path;
pub mod resolve;
pub mod schema;
pub mod snapshot;
pub mod store;
pub mod text;
pub mod validation;

pub use defaults::{DefaultValue, ZeroDefaults, create_default_value};
pub use error::{PathError, SchemaError, StoreError};
pub use options::Options;
pub use path::{Path, Segment, compose};
pub use resolve::{PointerResolver, SchemaResolver};
pub use schema::SchemaType;
pub use snapshot::Snapshot;
pub use store::{Change, ChangeKind, DataStore, MemoryStore, SubscriptionId};
pub use validation::{NoValidation, ValidationError, Validator};
