// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotted data paths: composition, parents, lookup, and scope conversion.
//!
//! ## Overview
//!
//! A [`Path`] addresses a location inside a data value, e.g. `items.1.name`.
//! Segments are object keys or array indices; both render as plain text, so an
//! index segment and its stringified form compose to the same path. This is
//! what lets validation errors on primitive array items (which carry no
//! property name) match the path of the cell that displays them.

use core::fmt;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PathError;

/// One step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object property name.
    Key(String),
    /// Array element index.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<&String> for Segment {
    fn from(value: &String) -> Self {
        Self::Key(value.clone())
    }
}

impl From<usize> for Segment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl TryFrom<&Value> for Segment {
    type Error = PathError;

    /// Accepts strings and non-negative integers; anything else is a caller bug.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Key(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .map(Self::Index)
                .ok_or_else(|| PathError::InvalidSegment(value.to_string())),
            _ => Err(PathError::InvalidSegment(value.to_string())),
        }
    }
}

/// Dotted address of a value inside a data document.
///
/// The empty path addresses the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(String);

impl Path {
    /// The root path (empty).
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Wrap an already-composed dotted path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Borrow the dotted text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Append one segment. See [`compose`].
    pub fn compose(&self, segment: impl Into<Segment>) -> Self {
        compose(&self.0, segment)
    }

    /// Append every segment of `rest`. Joining the root is a no-op.
    pub fn join(&self, rest: &Self) -> Self {
        match (self.is_root(), rest.is_root()) {
            (_, true) => self.clone(),
            (true, false) => rest.clone(),
            (false, false) => Self(format!("{}.{}", self.0, rest.0)),
        }
    }

    /// Drop the last segment. The parent of a single-segment path is the root.
    pub fn parent(&self) -> Self {
        match self.0.rfind('.') {
            Some(i) => Self(self.0[..i].to_owned()),
            None => Self::root(),
        }
    }

    /// Last segment text, if any.
    pub fn last(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        Some(self.0.rsplit('.').next().unwrap_or(&self.0))
    }

    /// Segment texts from root to leaf.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }

    /// True when `self` lies strictly below `base`.
    pub fn is_descendant_of(&self, base: &Self) -> bool {
        if base.is_root() {
            return !self.is_root();
        }
        self.0.len() > base.0.len()
            && self.0.starts_with(&base.0)
            && self.0.as_bytes()[base.0.len()] == b'.'
    }

    /// Read the value at this path.
    ///
    /// Object segments are looked up by key, array segments are parsed as
    /// indices. Returns `None` when any step is missing.
    pub fn get<'a>(&self, data: &'a Value) -> Option<&'a Value> {
        self.segments().try_fold(data, |cur, seg| match cur {
            Value::Object(map) => map.get(seg),
            Value::Array(items) => seg.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Mutable variant of [`Path::get`].
    pub fn get_mut<'a>(&self, data: &'a mut Value) -> Option<&'a mut Value> {
        self.segments().try_fold(data, |cur, seg| match cur {
            Value::Object(map) => map.get_mut(seg),
            Value::Array(items) => seg
                .parse::<usize>()
                .ok()
                .and_then(move |i| items.get_mut(i)),
            _ => None,
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Compose a child path from a parent path and one segment.
///
/// An empty parent yields the segment alone; otherwise the two are joined
/// with a dot. Index and key segments format identically.
///
/// ```
/// use formgrid_core::path::compose;
///
/// assert_eq!(compose("items", 1_usize), "items.1");
/// assert_eq!(compose("items", "1"), compose("items", 1_usize));
/// assert_eq!(compose("", "name"), "name");
/// ```
pub fn compose(parent: &str, segment: impl Into<Segment>) -> Path {
    let segment = segment.into();
    if parent.is_empty() {
        Path(segment.to_string())
    } else {
        Path(format!("{parent}.{segment}"))
    }
}

/// Convert a schema scope (`#/properties/a/properties/b`) into a data path (`a.b`).
///
/// Only `properties/<name>` pairs contribute segments; other keywords such as
/// `items` address schema structure without a data counterpart.
pub fn scope_to_data_path(scope: &str) -> Path {
    let tail = scope.strip_prefix('#').unwrap_or(scope);
    let mut tokens = tail.split('/').filter(|t| !t.is_empty());
    let mut out = Path::root();
    while let Some(token) = tokens.next() {
        if token == "properties"
            && let Some(name) = tokens.next()
        {
            out = out.compose(decode_pointer_token(name).into_owned());
        }
    }
    out
}

/// Undo JSON Pointer escaping (`~1` is `/`, `~0` is `~`).
pub fn decode_pointer_token(token: &str) -> Cow<'_, str> {
    if token.contains('~') {
        Cow::Owned(token.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(token)
    }
}

/// Scope addressing the property `key`: `#/properties/<key>`, escaped.
///
/// ```
/// use formgrid_core::path::property_scope;
///
/// assert_eq!(property_scope("name"), "#/properties/name");
/// assert_eq!(property_scope("a/b"), "#/properties/a~1b");
/// ```
pub fn property_scope(key: &str) -> String {
    format!("#/properties/{}", key.replace('~', "~0").replace('/', "~1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compose_index_and_string_agree() {
        let base = Path::from("items");
        assert_eq!(base.compose(2_usize), base.compose("2"));
        assert_eq!(base.compose(2_usize).compose("name"), "items.2.name");
    }

    #[test]
    fn compose_onto_root_has_no_leading_dot() {
        assert_eq!(Path::root().compose(0_usize), "0");
        assert_eq!(compose("", 0_usize).parent(), Path::root());
    }

    #[test]
    fn join_skips_empty_sides() {
        let base = Path::from("form");
        assert_eq!(base.join(&Path::from("a.b")), "form.a.b");
        assert_eq!(base.join(&Path::root()), "form");
        assert_eq!(Path::root().join(&Path::from("a")), "a");
    }

    #[test]
    fn parent_and_last() {
        let p = Path::from("a.b.3");
        assert_eq!(p.parent(), "a.b");
        assert_eq!(p.last(), Some("3"));
        assert_eq!(Path::root().last(), None);
        assert_eq!(Path::from("a").parent(), Path::root());
    }

    #[test]
    fn descendant_requires_segment_boundary() {
        let base = Path::from("items");
        assert!(Path::from("items.0").is_descendant_of(&base));
        assert!(!Path::from("items").is_descendant_of(&base));
        assert!(!Path::from("itemsX.0").is_descendant_of(&base));
        assert!(Path::from("x").is_descendant_of(&Path::root()));
    }

    #[test]
    fn get_walks_objects_and_arrays() {
        let data = json!({ "items": [{ "name": "a" }, { "name": "b" }] });
        assert_eq!(Path::from("items.1.name").get(&data), Some(&json!("b")));
        assert_eq!(Path::from("items.7.name").get(&data), None);
        assert_eq!(Path::from("items.x").get(&data), None);
        assert_eq!(Path::root().get(&data), Some(&data));
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut data = json!({ "items": [1, 2] });
        *Path::from("items.0").get_mut(&mut data).unwrap() = json!(9);
        assert_eq!(data, json!({ "items": [9, 2] }));
    }

    #[test]
    fn segment_from_json_rejects_other_kinds() {
        assert_eq!(Segment::try_from(&json!("a")), Ok(Segment::Key("a".into())));
        assert_eq!(Segment::try_from(&json!(3)), Ok(Segment::Index(3)));
        assert!(Segment::try_from(&json!(-1)).is_err());
        assert!(Segment::try_from(&json!(1.5)).is_err());
        assert!(Segment::try_from(&json!({})).is_err());
        assert!(Segment::try_from(&json!(null)).is_err());
    }

    #[test]
    fn scope_conversion() {
        assert_eq!(scope_to_data_path("#"), Path::root());
        assert_eq!(scope_to_data_path("#/properties/foo"), "foo");
        assert_eq!(
            scope_to_data_path("#/properties/a/properties/properties"),
            "a.properties"
        );
        assert_eq!(scope_to_data_path("#/properties/list/items"), "list");
        assert_eq!(scope_to_data_path("#/properties/a~1b"), "a/b");
    }
}
