use std::{fmt::Debug, hash::Hash};

use log::{debug, trace, warn};

use crate::{
    graph::{
        traversal::{directions, SearchTree, ShortestPaths, Traversal},
        Graph, Representation, ShortestPathConfig, Weight,
    },
    Error, Result,
};

/// Weighted single-source shortest paths with the Bellman-Ford algorithm.
///
/// Performs up to `|V| - 1` passes that relax every edge of the graph, in both
/// directions for undirected edges, followed by one verification pass. If any
/// edge can still be relaxed after that, a negative cycle is reachable from the
/// source and the traversal fails with [`Error::NegativeCycle`].
///
/// With [`ShortestPathConfig::early_termination`] set (the default), passes stop
/// as soon as one completes without an update; the distances are unaffected.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{Error, graph::{BellmanFord, Edge, EdgeList, Graph, ShortestPaths}};
///
/// let mut graph: Graph<u32, i32, _> = Graph::directed(EdgeList::new());
/// graph.add(Edge::new(1, 2).with_weight(4));
/// graph.add(Edge::new(2, 3).with_weight(-2));
///
/// let bellman_ford = BellmanFord::new(&graph, 1)?;
/// assert_eq!(bellman_ford.distance(&3)?, 2);
///
/// graph.add(Edge::new(3, 2).with_weight(1));
/// assert_eq!(BellmanFord::new(&graph, 1).unwrap_err(), Error::NegativeCycle);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BellmanFord<N: Hash + Eq, W> {
    tree: SearchTree<N, W>,
    passes: usize,
}

impl<N, W> BellmanFord<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Weight,
{
    /// Runs Bellman-Ford from `source` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCycle`] if a negative cycle is reachable and
    /// [`Error::WeightOverflow`] if an integer distance overflows.
    pub fn new<R>(graph: &Graph<N, W, R>, source: N) -> Result<Self>
    where
        R: Representation<N>,
    {
        Self::with_config(graph, source, ShortestPathConfig::default())
    }

    /// Runs Bellman-Ford from `source` with an explicit configuration.
    ///
    /// [`ShortestPathConfig::detect_negative_cycles`] does not apply; the
    /// verification pass always runs.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`new`](Self::new), returns
    /// [`Error::RelaxationLimit`] when the relaxation budget is exceeded and
    /// [`Error::InvalidArgument`] for an invalid configuration.
    ///
    /// # Complexity
    ///
    /// - Time: O(V * E)
    /// - Space: O(V)
    pub fn with_config<R>(
        graph: &Graph<N, W, R>,
        source: N,
        config: ShortestPathConfig,
    ) -> Result<Self>
    where
        R: Representation<N>,
    {
        config.validate()?;

        let mut tree = SearchTree::new(source, W::zero());
        let mut relaxations = 0;
        let mut passes = 0;

        for _ in 0..graph.node_count().saturating_sub(1) {
            passes += 1;
            let mut changed = false;

            for edge in graph.edges(None, None) {
                for (from, to) in directions(edge) {
                    let Some(distance) = tree.improvement(from, to, edge.cost())? else {
                        continue;
                    };

                    relaxations += 1;
                    if let Some(limit) = config.max_relaxations {
                        if relaxations > limit {
                            return Err(Error::RelaxationLimit(limit));
                        }
                    }

                    trace!("pass {passes}: relaxed {to:?} to {distance:?} via {from:?}");
                    tree.update(to.clone(), distance, from.clone());
                    changed = true;
                }
            }

            if !changed && config.early_termination {
                break;
            }
        }

        for edge in graph.edges(None, None) {
            for (from, to) in directions(edge) {
                if tree.improvement(from, to, edge.cost())?.is_some() {
                    warn!(
                        "negative cycle reachable from {:?} through {from:?} -> {to:?}",
                        tree.source()
                    );
                    return Err(Error::NegativeCycle);
                }
            }
        }

        debug!(
            "bellman-ford reached {} nodes in {passes} passes ({relaxations} relaxations)",
            tree.len()
        );
        Ok(BellmanFord { tree, passes })
    }

    /// Returns the number of relaxation passes performed before verification.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl<N: Hash + Eq + Clone + Debug, W: Weight> Traversal<N> for BellmanFord<N, W> {
    type Label = W;

    fn tree(&self) -> &SearchTree<N, W> {
        &self.tree
    }
}

impl<N: Hash + Eq + Clone + Debug, W: Weight> ShortestPaths<N> for BellmanFord<N, W> {}
