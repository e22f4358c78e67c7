//! Pluggable edge storage strategies.
//!
//! A [`Representation`] is the index a [`Graph`](crate::graph::Graph) uses to
//! find edges by their endpoints. It stores [`EdgeId`]s keyed by the direction
//! they were registered in; the edge values themselves live in the graph.
//!
//! # Variants
//!
//! | Representation | Insert | Edges of a pair | Edges from a node | Best for |
//! |----------------|--------|-----------------|-------------------|----------|
//! | [`EdgeList`] | O(1) | O(E) | O(E) | Small graphs queried rarely |
//! | [`AdjacencyMatrix`] | O(1) | O(1) | O(deg) | Pair-existence checks |
//! | [`AdjacencyList`] | O(1) | O(deg) | O(deg) | Traversals |
//!
//! # Query Semantics
//!
//! [`Representation::edges`] takes two optional filters:
//!
//! - both `None` - every edge
//! - only `from` - edges registered outgoing from `from`
//! - only `to` - edges registered incoming to `to`
//! - both set - edges registered for the ordered pair `(from, to)`
//!
//! Each matching `EdgeId` is yielded once, even when an undirected edge was
//! registered under both endpoints. Parallel edges have distinct IDs and are
//! all yielded. Order is insertion order within a bucket; there is no global
//! order across buckets.

mod edgelist;
mod list;
mod matrix;

use std::{collections::HashSet, hash::Hash};

use strum::{Display, EnumIter, EnumString};

use crate::graph::EdgeId;

pub use edgelist::EdgeList;
pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;

/// Iterator over the edge IDs matched by a [`Representation`] query.
pub type EdgeIter<'a> = Box<dyn Iterator<Item = EdgeId> + 'a>;

/// A boxed representation chosen at runtime, usable wherever a concrete one is.
pub type DynRepresentation<N> = Box<dyn Representation<N> + Send + Sync>;

/// Storage strategy for the edges of a graph, indexed by endpoint.
///
/// # Required Methods
///
/// - [`add`](Representation::add) - Register an edge under an ordered pair
/// - [`edges`](Representation::edges) - Query registered edges
/// - [`len`](Representation::len) - Number of registrations
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{AdjacencyMatrix, EdgeId, Representation};
///
/// let mut matrix = AdjacencyMatrix::new();
/// matrix.add(1, 2, EdgeId::new(0));
/// matrix.add(1, 2, EdgeId::new(1));
///
/// let ids: Vec<EdgeId> = matrix.edges(Some(&1), Some(&2)).collect();
/// assert_eq!(ids, vec![EdgeId::new(0), EdgeId::new(1)]);
/// ```
pub trait Representation<N> {
    /// Registers `edge` as leading from `from` to `to`.
    ///
    /// Never fails. Registering the same pair repeatedly keeps every
    /// registration.
    fn add(&mut self, from: N, to: N, edge: EdgeId);

    /// Returns the IDs of the edges matching the given endpoint filters.
    ///
    /// The returned iterator is lazy and finite; calling `edges` again restarts
    /// the query.
    fn edges<'a>(&'a self, from: Option<&'a N>, to: Option<&'a N>) -> EdgeIter<'a>;

    /// Returns the number of registrations held.
    ///
    /// An undirected edge counts twice.
    fn len(&self) -> usize;

    /// Returns `true` if nothing was registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N, R: Representation<N> + ?Sized> Representation<N> for Box<R> {
    fn add(&mut self, from: N, to: N, edge: EdgeId) {
        (**self).add(from, to, edge);
    }

    fn edges<'a>(&'a self, from: Option<&'a N>, to: Option<&'a N>) -> EdgeIter<'a> {
        (**self).edges(from, to)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// The available [`Representation`] implementations, for runtime selection.
///
/// Parses from and displays as kebab-case names (`edge-list`, `adjacency-matrix`,
/// `adjacency-list`); the short aliases `matrix` and `list` are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum RepresentationKind {
    /// [`EdgeList`]
    EdgeList,
    /// [`AdjacencyMatrix`]
    #[strum(to_string = "adjacency-matrix", serialize = "matrix")]
    AdjacencyMatrix,
    /// [`AdjacencyList`]
    #[strum(to_string = "adjacency-list", serialize = "list")]
    AdjacencyList,
}

impl RepresentationKind {
    /// Creates an empty representation of this kind.
    #[must_use]
    pub fn create<N>(self) -> DynRepresentation<N>
    where
        N: Hash + Eq + Clone + Send + Sync + 'static,
    {
        match self {
            RepresentationKind::EdgeList => Box::new(EdgeList::new()),
            RepresentationKind::AdjacencyMatrix => Box::new(AdjacencyMatrix::new()),
            RepresentationKind::AdjacencyList => Box::new(AdjacencyList::new()),
        }
    }
}

/// Drops repeated IDs from a query, keeping the first occurrence.
fn unique<'a>(ids: impl Iterator<Item = EdgeId> + 'a) -> EdgeIter<'a> {
    let mut seen = HashSet::new();
    Box::new(ids.filter(move |id| seen.insert(*id)))
}
