// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranked renderer registry.
//!
//! ## Overview
//!
//! Entries pair a [`RankedTester`] with a renderer value of any type `R`.
//! [`Registry::dispatch`] ranks every entry against a [`TestContext`] and
//! returns the single winner, or [`Dispatch::NoMatch`] when nothing applies.
//!
//! ## Selection
//!
//! - Entries reporting a negative rank are skipped.
//! - The highest rank wins.
//! - Equal-rank ties are stable and the last registered wins, so a renderer
//!   registered later can override a built-in of the same rank.
//!
//! Selection is a single pass with no allocation or sort.

use crate::tester::{Rank, RankedTester, TestContext};

struct Entry<R> {
    name: &'static str,
    tester: RankedTester,
    renderer: R,
}

/// Registry of ranked renderers.
pub struct Registry<R> {
    entries: Vec<Entry<R>>,
}

impl<R> core::fmt::Debug for Registry<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field(
                "entries",
                &self.entries.iter().map(|e| e.name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl<R> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Winning entry of a dispatch.
#[derive(Debug)]
pub struct Match<'r, R> {
    /// Registration name of the winner.
    pub name: &'static str,
    /// Rank it reported.
    pub rank: Rank,
    /// The renderer.
    pub renderer: &'r R,
}

/// Outcome of [`Registry::dispatch`].
#[derive(Debug)]
pub enum Dispatch<'r, R> {
    /// An entry applied.
    Matched(Match<'r, R>),
    /// No entry applied; callers render an "unknown renderer" placeholder.
    NoMatch,
}

impl<'r, R> Dispatch<'r, R> {
    /// The match, if any.
    pub fn matched(self) -> Option<Match<'r, R>> {
        match self {
            Self::Matched(m) => Some(m),
            Self::NoMatch => None,
        }
    }

    /// Name of the winner, if any.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Matched(m) => Some(m.name),
            Self::NoMatch => None,
        }
    }
}

impl<R> Registry<R> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry.
    pub fn register(&mut self, name: &'static str, tester: RankedTester, renderer: R) {
        tracing::trace!(name, rank = tester.declared_rank(), "registering renderer");
        self.entries.push(Entry {
            name,
            tester,
            renderer,
        });
    }

    /// Builder form of [`Registry::register`].
    #[must_use]
    pub fn with(mut self, name: &'static str, tester: RankedTester, renderer: R) -> Self {
        self.register(name, tester, renderer);
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank of every entry against `ctx`, in registration order.
    pub fn ranks(&self, ctx: &TestContext<'_>) -> Vec<(&'static str, Rank)> {
        self.entries
            .iter()
            .map(|e| (e.name, e.tester.rank(ctx)))
            .collect()
    }

    /// Select the highest-ranked applicable renderer.
    pub fn dispatch(&self, ctx: &TestContext<'_>) -> Dispatch<'_, R> {
        let mut best: Option<(usize, Rank)> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            let rank = entry.tester.rank(ctx);
            if rank < 0 {
                continue;
            }
            // `>=` keeps the last of equal ranks.
            if best.is_none_or(|(_, b)| rank >= b) {
                best = Some((i, rank));
            }
        }

        let Some((i, rank)) = best else {
            tracing::debug!(element = ctx.uischema.type_name(), "no renderer applies");
            return Dispatch::NoMatch;
        };
        let entry = &self.entries[i];
        tracing::trace!(name = entry.name, rank, "renderer selected");
        Dispatch::Matched(Match {
            name: entry.name,
            rank,
            renderer: &entry.renderer,
        })
    }
}
