//! Adjacency-matrix representation.

use std::{collections::HashMap, hash::Hash};

use crate::graph::{
    representation::{unique, EdgeIter, Representation},
    EdgeId,
};

/// A sparse adjacency matrix: `from -> to -> [edge]`.
///
/// Looking up the edges between a specific pair is a constant-time double map
/// lookup, and enumerating the edges leaving a node walks only that node's row.
/// Incoming-edge queries probe every row.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<N> {
    rows: HashMap<N, HashMap<N, Vec<EdgeId>>>,
    len: usize,
}

impl<N> AdjacencyMatrix<N> {
    /// Creates an empty adjacency matrix.
    #[must_use]
    pub fn new() -> Self {
        AdjacencyMatrix {
            rows: HashMap::new(),
            len: 0,
        }
    }
}

impl<N> Default for AdjacencyMatrix<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Hash + Eq> AdjacencyMatrix<N> {
    /// Returns `true` if at least one edge is registered from `from` to `to`.
    pub fn contains(&self, from: &N, to: &N) -> bool {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .is_some_and(|cell| !cell.is_empty())
    }
}

impl<N: Hash + Eq> Representation<N> for AdjacencyMatrix<N> {
    fn add(&mut self, from: N, to: N, edge: EdgeId) {
        self.rows
            .entry(from)
            .or_default()
            .entry(to)
            .or_default()
            .push(edge);
        self.len += 1;
    }

    fn edges<'a>(&'a self, from: Option<&'a N>, to: Option<&'a N>) -> EdgeIter<'a> {
        match (from, to) {
            (None, None) => unique(
                self.rows
                    .values()
                    .flat_map(HashMap::values)
                    .flatten()
                    .copied(),
            ),
            (Some(from), None) => unique(
                self.rows
                    .get(from)
                    .into_iter()
                    .flat_map(HashMap::values)
                    .flatten()
                    .copied(),
            ),
            (None, Some(to)) => unique(
                self.rows
                    .values()
                    .filter_map(move |row| row.get(to))
                    .flatten()
                    .copied(),
            ),
            (Some(from), Some(to)) => unique(
                self.rows
                    .get(from)
                    .and_then(|row| row.get(to))
                    .into_iter()
                    .flatten()
                    .copied(),
            ),
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
