use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
};

use log::{debug, trace, warn};

use crate::{
    graph::{
        traversal::{successors, SearchTree, ShortestPaths, Traversal},
        Graph, Representation, ShortestPathConfig, Weight,
    },
    Error, Result,
};

/// Weighted single-source shortest paths with the Shortest Path Faster
/// Algorithm.
///
/// Starting with the source at distance zero, nodes are taken from a FIFO queue
/// and every outgoing edge is relaxed; a node whose distance improves is
/// enqueued unless it is already waiting. The traversal ends when the queue is
/// empty. Edges without a weight count as [`Weight::one`].
///
/// Negative weights are supported. A reachable negative cycle is reported as
/// [`Error::NegativeCycle`] by tracking how many edges each tentative shortest
/// path has: a simple path never has `|V|` of them. Disabling
/// [`ShortestPathConfig::detect_negative_cycles`] restores the classic
/// algorithm, which does not terminate on such a cycle unless
/// [`ShortestPathConfig::max_relaxations`] bounds it.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{AdjacencyList, Edge, Graph, ShortestPathFaster, ShortestPaths};
///
/// let mut graph: Graph<u32, i64> = Graph::directed(AdjacencyList::new());
/// graph.add(Edge::new(1, 2).with_weight(2));
/// graph.add(Edge::new(1, 3).with_weight(5));
/// graph.add(Edge::new(2, 3).with_weight(2));
///
/// let spfa = ShortestPathFaster::new(&graph, 1)?;
/// assert_eq!(spfa.distance(&3)?, 4);
/// assert!(spfa.distance(&4).is_err());
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathFaster<N: Hash + Eq, W> {
    tree: SearchTree<N, W>,
    relaxations: usize,
}

impl<N, W> ShortestPathFaster<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Weight,
{
    /// Runs SPFA from `source` with the default configuration.
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

    /// Runs SPFA from `source` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`new`](Self::new), returns
    /// [`Error::RelaxationLimit`] when the relaxation budget is exceeded and
    /// [`Error::InvalidArgument`] for an invalid configuration.
    pub fn with_config<R>(
        graph: &Graph<N, W, R>,
        source: N,
        config: ShortestPathConfig,
    ) -> Result<Self>
    where
        R: Representation<N>,
    {
        config.validate()?;

        let node_limit = graph.node_count().max(1);
        let mut tree = SearchTree::new(source.clone(), W::zero());
        let mut hops: HashMap<N, usize> = HashMap::new();
        let mut queued: HashSet<N> = HashSet::new();
        let mut queue = VecDeque::new();
        let mut relaxations = 0;

        hops.insert(source.clone(), 0);
        queued.insert(source.clone());
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            queued.remove(&node);
            let path_hops = hops.get(&node).copied().unwrap_or_default() + 1;

            for (next, edge) in successors(graph, &node) {
                let Some(distance) = tree.improvement(&node, next, edge.cost())? else {
                    continue;
                };

                relaxations += 1;
                if let Some(limit) = config.max_relaxations {
                    if relaxations > limit {
                        return Err(Error::RelaxationLimit(limit));
                    }
                }

                trace!("relaxed {next:?} to {distance:?} via {node:?}");
                tree.update(next.clone(), distance, node.clone());

                if config.detect_negative_cycles {
                    if path_hops >= node_limit {
                        warn!("negative cycle reachable from {:?} through {next:?}", tree.source());
                        return Err(Error::NegativeCycle);
                    }
                    hops.insert(next.clone(), path_hops);
                }

                if queued.insert(next.clone()) {
                    queue.push_back(next.clone());
                }
            }
        }

        debug!(
            "spfa reached {} nodes after {relaxations} relaxations",
            tree.len()
        );
        Ok(ShortestPathFaster { tree, relaxations })
    }

    /// Returns the number of successful relaxations performed.
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }
}

impl<N: Hash + Eq + Clone + Debug, W: Weight> Traversal<N> for ShortestPathFaster<N, W> {
    type Label = W;

    fn tree(&self) -> &SearchTree<N, W> {
        &self.tree
    }
}

impl<N: Hash + Eq + Clone + Debug, W: Weight> ShortestPaths<N> for ShortestPathFaster<N, W> {}
