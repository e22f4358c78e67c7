//! Single-source graph traversals.
//!
//! Every traversal is computed eagerly in its constructor and is immutable
//! afterwards. The result is a [`SearchTree`]: the source, a per-node label
//! (depth, hop count or distance) for each reached node, and the predecessor
//! through which each node other than the source was reached.
//!
//! # Algorithms
//!
//! - [`DepthFirstSearch`] - Reachability with an explicit stack
//! - [`BreadthFirstSearch`] - Unweighted hop counts
//! - [`ShortestPathFaster`] - Queue-based weighted relaxation (SPFA)
//! - [`BellmanFord`] - Pass-based weighted relaxation with negative-cycle detection
//!
//! # Unreachable Nodes
//!
//! A node the traversal never reached has no label and no predecessor.
//! [`Traversal::visited`] returns `false` for it, and both
//! [`Traversal::path`] and [`ShortestPaths::distance`] fail with
//! [`Error::UnreachableNode`]. No sentinel distance is ever returned.
//!
//! # Multiple Sources
//!
//! Finished traversals are `Send + Sync` whenever the node and weight types
//! are, and the graph is only read during construction. [`from_each_source`]
//! runs one traversal per source on the rayon thread pool.

mod bellman_ford;
mod bfs;
mod dfs;
mod spfa;

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use rayon::prelude::*;

use crate::{
    graph::{Edge, Graph, Representation, Weight},
    Error, Result,
};

pub use bellman_ford::BellmanFord;
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use spfa::ShortestPathFaster;

/// The outcome of a single-source traversal.
///
/// Holds a label for every reached node and the predecessor each non-source
/// node was last reached through. The label type depends on the traversal:
/// tree depth for DFS, hop count for BFS, path weight for SPFA and Bellman-Ford.
///
/// # Type Parameters
///
/// * `N` - Node key type
/// * `L` - Per-node label type
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree<N: Hash + Eq, L> {
    source: N,
    labels: HashMap<N, L>,
    predecessors: HashMap<N, N>,
}

impl<N: Hash + Eq + Clone + Debug, L> SearchTree<N, L> {
    pub(crate) fn new(source: N, label: L) -> Self {
        let mut labels = HashMap::new();
        labels.insert(source.clone(), label);

        SearchTree {
            source,
            labels,
            predecessors: HashMap::new(),
        }
    }

    /// Sets the label of `node` and records `predecessor` as its parent.
    pub(crate) fn update(&mut self, node: N, label: L, predecessor: N) {
        self.labels.insert(node.clone(), label);
        self.predecessors.insert(node, predecessor);
    }

    /// Returns the node the traversal started from.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Returns `true` if `node` was reached.
    pub fn contains(&self, node: &N) -> bool {
        self.labels.contains_key(node)
    }

    /// Returns the label of `node`, or `None` if it was never reached.
    pub fn label(&self, node: &N) -> Option<&L> {
        self.labels.get(node)
    }

    /// Returns the node through which `node` was reached.
    ///
    /// `None` for the source and for unreached nodes.
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node)
    }

    /// Returns the number of reached nodes, the source included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`; the source is reached by definition.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates the reached nodes in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.labels.keys()
    }

    /// Iterates the reached nodes with their labels in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = (&N, &L)> + '_ {
        self.labels.iter()
    }

    /// Reconstructs the path from the source to `node`.
    ///
    /// Walks the predecessor chain backwards from `node` and reverses it, so the
    /// result starts with the source and ends with `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreachableNode`] if `node` was never reached, and
    /// [`Error::NegativeCycle`] if the predecessor chain loops without reaching
    /// the source.
    pub fn path(&self, node: &N) -> Result<Vec<N>> {
        if !self.contains(node) {
            return Err(Error::UnreachableNode(format!("{node:?}")));
        }

        let mut path = vec![node.clone()];
        let mut current = node;
        while *current != self.source {
            let Some(previous) = self.predecessors.get(current) else {
                break;
            };
            if path.len() > self.labels.len() {
                return Err(Error::NegativeCycle);
            }

            path.push(previous.clone());
            current = previous;
        }

        path.reverse();
        Ok(path)
    }
}

impl<N: Hash + Eq + Clone + Debug, W: Weight> SearchTree<N, W> {
    /// Returns the distance of `to` through `from` over an edge of `cost`, if
    /// that is strictly shorter than the distance currently recorded for `to`.
    ///
    /// Returns `None` when `from` has no distance yet, and when the candidate
    /// is not finite (an infinite or NaN float weight never reaches a node).
    pub(crate) fn improvement(&self, from: &N, to: &N, cost: W) -> Result<Option<W>> {
        let Some(&base) = self.labels.get(from) else {
            return Ok(None);
        };

        let candidate = base.checked_add(cost).ok_or(Error::WeightOverflow)?;
        if !candidate.is_finite() {
            return Ok(None);
        }
        match self.labels.get(to) {
            Some(current) if *current <= candidate => Ok(None),
            _ => Ok(Some(candidate)),
        }
    }
}

/// Queries common to all traversals.
///
/// Implementers only provide [`tree`](Traversal::tree); every query is answered
/// from the computed [`SearchTree`].
pub trait Traversal<N: Hash + Eq + Clone + Debug> {
    /// The per-node label the traversal records.
    type Label: Copy;

    /// Returns the computed search tree.
    fn tree(&self) -> &SearchTree<N, Self::Label>;

    /// Returns the node the traversal started from.
    fn source(&self) -> &N {
        self.tree().source()
    }

    /// Returns `true` if `node` is reachable from the source.
    fn visited(&self, node: &N) -> bool {
        self.tree().contains(node)
    }

    /// Returns the node through which `node` was reached.
    fn predecessor(&self, node: &N) -> Option<&N> {
        self.tree().predecessor(node)
    }

    /// Returns the node sequence from the source to `node`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreachableNode`] if `node` was never reached.
    fn path(&self, node: &N) -> Result<Vec<N>> {
        self.tree().path(node)
    }

    /// Returns every reached node, the source included, in no particular order.
    fn reached(&self) -> Vec<&N> {
        self.tree().nodes().collect()
    }
}

/// Traversals whose label is a shortest distance from the source.
pub trait ShortestPaths<N: Hash + Eq + Clone + Debug>: Traversal<N> {
    /// Returns the shortest distance from the source to `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreachableNode`] if `node` was never reached.
    fn distance(&self, node: &N) -> Result<Self::Label> {
        self.tree()
            .label(node)
            .copied()
            .ok_or_else(|| Error::UnreachableNode(format!("{node:?}")))
    }

    /// Returns every reached node with its distance, in no particular order.
    fn distances(&self) -> Vec<(&N, Self::Label)> {
        self.tree()
            .labels()
            .map(|(node, label)| (node, *label))
            .collect()
    }
}

/// Runs one traversal per source in parallel.
///
/// The results keep the order of `sources`. The first error reported by any
/// traversal is returned instead.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{
///     from_each_source, AdjacencyList, BreadthFirstSearch, Edge, Graph, ShortestPaths,
/// };
///
/// let mut graph: Graph<u32> = Graph::directed(AdjacencyList::new());
/// graph.add(Edge::new(1, 2));
/// graph.add(Edge::new(2, 3));
///
/// let searches = from_each_source(vec![1, 2, 3], |source| {
///     Ok(BreadthFirstSearch::new(&graph, *source))
/// })?;
/// assert_eq!(searches[0].1.distance(&3)?, 2);
/// assert!(searches[2].1.distance(&1).is_err());
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn from_each_source<N, T, F>(sources: Vec<N>, build: F) -> Result<Vec<(N, T)>>
where
    N: Send,
    T: Send,
    F: Fn(&N) -> Result<T> + Sync,
{
    sources
        .into_par_iter()
        .map(|source| build(&source).map(|traversal| (source, traversal)))
        .collect()
}

/// Iterates the nodes reachable from `node` over a single edge.
///
/// Undirected edges are registered under both endpoints, so the neighbour is
/// whichever endpoint is not `node` (or `node` itself for a self-loop).
fn successors<'a, N, W, R>(
    graph: &'a Graph<N, W, R>,
    node: &'a N,
) -> impl Iterator<Item = (&'a N, &'a Edge<N, W>)> + 'a
where
    N: Hash + Eq + Clone,
    R: Representation<N>,
{
    graph.edges(Some(node), None).map(move |edge| {
        let next = if edge.u() == node { edge.v() } else { edge.u() };
        (next, edge)
    })
}

/// Yields the directions in which `edge` may be relaxed.
fn directions<N, W>(edge: &Edge<N, W>) -> impl Iterator<Item = (&N, &N)> + '_ {
    let reverse = (!edge.is_directed()).then(|| (edge.v(), edge.u()));
    std::iter::once((edge.u(), edge.v())).chain(reverse)
}
