//! Edge-list representation.

use std::fmt;

use crate::graph::{
    representation::{unique, EdgeIter, Representation},
    EdgeId,
};

/// A flat list of `(from, to, edge)` registrations.
///
/// Every query is a linear scan over all registrations. This is the simplest
/// representation and the cheapest to build, which makes it a good fit for small
/// or sparse graphs that are queried rarely.
#[derive(Clone)]
pub struct EdgeList<N> {
    entries: Vec<(N, N, EdgeId)>,
}

impl<N> EdgeList<N> {
    /// Creates an empty edge list.
    #[must_use]
    pub fn new() -> Self {
        EdgeList {
            entries: Vec::new(),
        }
    }

    /// Creates an empty edge list with room for `capacity` registrations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EdgeList {
            entries: Vec::with_capacity(capacity),
        }
    }
}

impl<N> Default for EdgeList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: fmt::Debug> fmt::Debug for EdgeList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<N: PartialEq> Representation<N> for EdgeList<N> {
    fn add(&mut self, from: N, to: N, edge: EdgeId) {
        self.entries.push((from, to, edge));
    }

    fn edges<'a>(&'a self, from: Option<&'a N>, to: Option<&'a N>) -> EdgeIter<'a> {
        unique(
            self.entries
                .iter()
                .filter(move |(f, t, _)| {
                    from.map_or(true, |from| from == f) && to.map_or(true, |to| to == t)
                })
                .map(|(_, _, id)| *id),
        )
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
