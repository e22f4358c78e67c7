use std::{fmt::Debug, hash::Hash};

use log::debug;

use crate::graph::{
    traversal::{successors, SearchTree, Traversal},
    Graph, Representation,
};

/// Depth-first reachability from a single source.
///
/// The search uses an explicit stack rather than recursion, so arbitrarily deep
/// graphs do not exhaust the call stack. A node is marked when it is popped, so
/// discovery order and the predecessor tree are those of a recursive DFS
/// exploring neighbours in the representation's iteration order. A node may sit
/// on the stack more than once; stale entries are skipped.
///
/// The label recorded for each node is its depth in the resulting DFS tree. DFS
/// does not compute distances; use [`BreadthFirstSearch`](crate::graph::BreadthFirstSearch)
/// for hop counts.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{AdjacencyList, DepthFirstSearch, Edge, Graph, Traversal};
///
/// let mut graph: Graph<u32> = Graph::undirected(AdjacencyList::new());
/// for (u, v) in [(1, 2), (2, 3), (2, 5), (5, 1), (3, 4), (4, 5)] {
///     graph.add(Edge::new(u, v));
/// }
/// assert!(!DepthFirstSearch::new(&graph, 1).visited(&6));
///
/// graph.add(Edge::new(4, 6));
/// let dfs = DepthFirstSearch::new(&graph, 1);
/// assert!(dfs.visited(&6));
/// assert_eq!(dfs.order()[0], 1);
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstSearch<N: Hash + Eq> {
    tree: SearchTree<N, usize>,
    order: Vec<N>,
}

impl<N: Hash + Eq + Clone + Debug> DepthFirstSearch<N> {
    /// Explores everything reachable from `source`.
    ///
    /// `source` does not need to be a node of `graph`; in that case it is the
    /// only node reached.
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
        let mut order = Vec::new();
        // (node, parent, depth); the source has no parent and is marked already
        let mut stack: Vec<(N, Option<N>, usize)> = vec![(source, None, 0)];

        while let Some((node, parent, depth)) = stack.pop() {
            if let Some(parent) = parent {
                if tree.contains(&node) {
                    continue;
                }
                tree.update(node.clone(), depth, parent);
            }

            // Push in reverse so the first neighbour is explored first
            let next: Vec<N> = successors(graph, &node)
                .filter(|(next, _)| !tree.contains(next))
                .map(|(next, _)| next.clone())
                .collect();
            for next in next.into_iter().rev() {
                stack.push((next, Some(node.clone()), depth + 1));
            }

            order.push(node);
        }

        debug!("depth-first search reached {} nodes", order.len());
        DepthFirstSearch { tree, order }
    }

    /// Returns the reached nodes in the order they were explored, starting with
    /// the source.
    pub fn order(&self) -> &[N] {
        &self.order
    }

    /// Returns the depth of `node` in the DFS tree, or `None` if unreached.
    pub fn depth(&self, node: &N) -> Option<usize> {
        self.tree.label(node).copied()
    }
}

impl<N: Hash + Eq + Clone + Debug> Traversal<N> for DepthFirstSearch<N> {
    type Label = usize;

    fn tree(&self) -> &SearchTree<N, usize> {
        &self.tree
    }

    fn reached(&self) -> Vec<&N> {
        self.order.iter().collect()
    }
}
