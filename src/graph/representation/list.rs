//! Adjacency-list representation.

use std::{collections::HashMap, hash::Hash};

use crate::graph::{
    representation::{unique, EdgeIter, Representation},
    EdgeId,
};

/// Outgoing adjacency lists: `from -> [(to, edge)]`.
///
/// Enumerating the edges leaving a node costs `O(deg)`, which gives the
/// traversals their `O(V + E)` bounds. This is the representation the
/// traversals are tuned for and the default of [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone)]
pub struct AdjacencyList<N> {
    adjacency: HashMap<N, Vec<(N, EdgeId)>>,
    len: usize,
}

impl<N> AdjacencyList<N> {
    /// Creates an empty adjacency list.
    #[must_use]
    pub fn new() -> Self {
        AdjacencyList {
            adjacency: HashMap::new(),
            len: 0,
        }
    }
}

impl<N> Default for AdjacencyList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Hash + Eq> AdjacencyList<N> {
    /// Returns the number of registrations leaving `node`.
    pub fn out_degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }
}

impl<N: Hash + Eq> Representation<N> for AdjacencyList<N> {
    fn add(&mut self, from: N, to: N, edge: EdgeId) {
        self.adjacency.entry(from).or_default().push((to, edge));
        self.len += 1;
    }

    fn edges<'a>(&'a self, from: Option<&'a N>, to: Option<&'a N>) -> EdgeIter<'a> {
        let targets = move |(target, _): &&(N, EdgeId)| to.map_or(true, |to| to == target);

        match from {
            Some(from) => unique(
                self.adjacency
                    .get(from)
                    .into_iter()
                    .flatten()
                    .filter(targets)
                    .map(|(_, id)| *id),
            ),
            None => unique(
                self.adjacency
                    .values()
                    .flatten()
                    .filter(targets)
                    .map(|(_, id)| *id),
            ),
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
