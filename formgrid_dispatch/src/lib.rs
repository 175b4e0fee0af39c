// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=formgrid_dispatch --heading-base-level=0

//! Formgrid Dispatch: choosing an editor for a piece of a form.
//!
//! Given a layout element and the schema it is rendered against, Formgrid
//! Dispatch decides which renderer applies and builds the widget it shows.
//!
//! - [`layout`]: the UI-schema element model (`Control`, layouts, groups) and label derivation.
//! - [`tester`]: predicates and combinators that score a renderer against an element.
//! - [`Registry`]: ranked dispatch. The highest rank wins; equal ranks go to the later registration.
//! - [`cells`]: the built-in cell editors and their default registry.
//! - [`widget`]: the design-system widget descriptions cells produce.
//! - [`ControlFlags`]: visible/enabled/required state.
//!
//! ## Example
//!
//! ```
//! use formgrid_dispatch::cells::{self, CellKind};
//! use formgrid_dispatch::layout::{ControlElement, UiSchema};
//! use formgrid_dispatch::tester::TestContext;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": { "born": { "type": "string", "format": "date" } }
//! });
//! let ui = UiSchema::Control(ControlElement::unlabeled("#/properties/born"));
//!
//! let registry = cells::registry();
//! let winner = registry
//!     .dispatch(&TestContext::new(&ui, &schema, &schema))
//!     .matched()
//!     .unwrap();
//! assert_eq!(*winner.renderer, CellKind::Date);
//! assert_eq!(winner.rank, 2);
//! ```

pub mod cells;
pub mod error;
pub mod flags;
pub mod layout;
pub mod registry;
pub mod tester;
pub mod widget;

pub use cells::{CellKind, CellProps, CellRenderer};
pub use error::{CellError, InputError};
pub use flags::ControlFlags;
pub use layout::{ControlElement, UiSchema};
pub use registry::{Dispatch, Match, Registry};
pub use tester::{NOT_APPLICABLE, Rank, RankedTester, TestContext, Tester};
pub use widget::Widget;
