use std::{collections::VecDeque, fmt::Debug, hash::Hash};

use log::debug;

use crate::graph::{
    traversal::{successors, SearchTree, ShortestPaths, Traversal},
    Graph, Representation,
};

/// Breadth-first hop counts from a single source.
///
/// Every edge counts as one hop regardless of its weight. Nodes are labelled
/// with their distance when first discovered and each is dequeued exactly once,
/// so the recorded hop counts are minimal.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{AdjacencyList, BreadthFirstSearch, Edge, Graph, ShortestPaths, Traversal};
///
/// let mut graph: Graph<&str> = Graph::undirected(AdjacencyList::new());
/// graph.add(Edge::new("a", "b"));
/// graph.add(Edge::new("b", "c"));
/// graph.add(Edge::new("a", "c"));
///
/// let bfs = BreadthFirstSearch::new(&graph, "a");
/// assert_eq!(bfs.distance(&"c")?, 1);
/// assert_eq!(bfs.path(&"c")?, vec!["a", "c"]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch<N: Hash + Eq> {
    tree: SearchTree<N, usize>,
}

impl<N: Hash + Eq + Clone + Debug> BreadthFirstSearch<N> {
    /// Computes hop counts to everything reachable from `source`.
    ///
    /// # Complexity
    ///
    /// - Time: O(V + E) plus the representation's per-node query cost
    /// - Space: O(V)
    pub fn new<W, R>(graph: &Graph<N, W, R>, source: N) -> Self
    where
        R: Representation<N>,
    {
        let mut tree = SearchTree::new(source.clone(), 0);
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            let hops = tree.label(&node).copied().unwrap_or_default();
            for (next, _) in successors(graph, &node) {
                if !tree.contains(next) {
                    tree.update(next.clone(), hops + 1, node.clone());
                    queue.push_back(next.clone());
                }
            }
        }

        debug!("breadth-first search reached {} nodes", tree.len());
        BreadthFirstSearch { tree }
    }
}

impl<N: Hash + Eq + Clone + Debug> Traversal<N> for BreadthFirstSearch<N> {
    type Label = usize;

    fn tree(&self) -> &SearchTree<N, usize> {
        &self.tree
    }
}

impl<N: Hash + Eq + Clone + Debug> ShortestPaths<N> for BreadthFirstSearch<N> {}
