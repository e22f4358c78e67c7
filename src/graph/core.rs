//! The graph container.
//!
//! [`Graph`] owns an edge arena and exactly one [`Representation`] indexing it.
//! Nodes are never added explicitly; every key that appears as an endpoint of
//! an added edge becomes a node, listed in order of first appearance.

use std::{collections::HashSet, fmt, hash::Hash};

use crate::{
    graph::{AdjacencyList, Edge, EdgeId, Representation},
    utils::DotWriter,
};

/// Whether a graph's edges may be followed in one or both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Edges lead from `u` to `v` only.
    Directed,
    /// Edges may be followed both ways.
    Undirected,
}

impl Direction {
    /// Returns `true` for [`Direction::Directed`].
    #[must_use]
    pub fn is_directed(self) -> bool {
        self == Direction::Directed
    }
}

/// A graph over hashable node keys with a pluggable edge representation.
///
/// `Graph` stores every added [`Edge`] in an arena indexed by [`EdgeId`] and
/// registers the ID with its representation: once under `u -> v` for a directed
/// graph, and additionally under `v -> u` for an undirected one. The graph's
/// direction is authoritative; [`add`](Self::add) overwrites the edge's own flag
/// with it.
///
/// The graph is insert-only. It is safe to share immutably across threads once
/// built, but concurrent mutation is not supported.
///
/// # Type Parameters
///
/// * `N` - Node key type
/// * `W` - Weight type of the edges (default `f64`)
/// * `R` - Representation (default [`AdjacencyList`])
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{AdjacencyMatrix, Edge, Graph};
///
/// let mut graph: Graph<u32, i64, _> = Graph::undirected(AdjacencyMatrix::new());
/// graph.add(Edge::new(1, 2).with_weight(4));
/// graph.add(Edge::new(2, 3).with_weight(1));
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.edges(Some(&2), Some(&1)).count(), 1);
/// assert_eq!(graph.edges(Some(&2), None).count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, W = f64, R = AdjacencyList<N>> {
    direction: Direction,
    representation: R,
    edges: Vec<Edge<N, W>>,
    nodes: Vec<N>,
    seen: HashSet<N>,
}

impl<N, W, R> Graph<N, W, R>
where
    N: Hash + Eq + Clone,
    R: Representation<N>,
{
    /// Creates an empty graph over `representation` with the given direction.
    #[must_use]
    pub fn new(representation: R, direction: Direction) -> Self {
        Graph {
            direction,
            representation,
            edges: Vec::new(),
            nodes: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed(representation: R) -> Self {
        Self::new(representation, Direction::Directed)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected(representation: R) -> Self {
        Self::new(representation, Direction::Undirected)
    }

    /// Adds an edge, registering both endpoints as nodes.
    ///
    /// Directed graphs register the edge once (`u -> v`); undirected graphs
    /// register it under both endpoints. Parallel edges are kept.
    ///
    /// # Arguments
    ///
    /// * `edge` - The edge to add; its direction flag is replaced by the graph's
    ///
    /// # Returns
    ///
    /// The `EdgeId` under which the edge is stored.
    pub fn add(&mut self, edge: Edge<N, W>) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        let edge = edge.with_directed(self.direction.is_directed());

        self.track(edge.u());
        self.track(edge.v());

        self.representation
            .add(edge.u().clone(), edge.v().clone(), id);
        if !self.direction.is_directed() {
            self.representation
                .add(edge.v().clone(), edge.u().clone(), id);
        }

        self.edges.push(edge);
        id
    }

    fn track(&mut self, node: &N) {
        if self.seen.insert(node.clone()) {
            self.nodes.push(node.clone());
        }
    }

    /// Returns the edges matching the given endpoint filters.
    ///
    /// Delegates to [`Representation::edges`]; see the representation module for
    /// the filter semantics. Each edge is yielded at most once per query.
    pub fn edges<'a>(
        &'a self,
        from: Option<&'a N>,
        to: Option<&'a N>,
    ) -> impl Iterator<Item = &'a Edge<N, W>> + 'a {
        self.representation
            .edges(from, to)
            .filter_map(move |id| self.edges.get(id.index()))
    }

    /// Returns the IDs of the edges matching the given endpoint filters.
    pub fn edge_ids<'a>(
        &'a self,
        from: Option<&'a N>,
        to: Option<&'a N>,
    ) -> impl Iterator<Item = EdgeId> + 'a {
        self.representation.edges(from, to)
    }

    /// Returns `true` if `node` is an endpoint of any added edge.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.seen.contains(node)
    }
}

impl<N, W, R> Graph<N, W, R> {
    /// Returns the graph's direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if the graph is directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.direction.is_directed()
    }

    /// Returns the underlying representation.
    #[must_use]
    pub fn representation(&self) -> &R {
        &self.representation
    }

    /// Returns the edge stored under `id`.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<N, W>> {
        self.edges.get(id.index())
    }

    /// Returns the edge stored under `id` for in-place flow updates.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<N, W>> {
        self.edges.get_mut(id.index())
    }

    /// Returns the number of edges added.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of distinct endpoints seen so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no edge was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates the nodes in order of first appearance.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Iterates every stored edge with its ID, in insertion order.
    pub fn all_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<N, W>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId::new(index), edge))
    }
}

impl<N: fmt::Display, W: fmt::Display + Copy, R> Graph<N, W, R> {
    /// Renders the graph in Graphviz DOT format.
    ///
    /// Directed graphs become a `digraph` with `->` edges, undirected ones a
    /// `graph` with `--` edges. Weighted edges are labelled with their weight.
    ///
    /// # Arguments
    ///
    /// * `name` - Optional graph name
    #[must_use]
    pub fn to_dot(&self, name: Option<&str>) -> String {
        let mut dot = DotWriter::new(name.unwrap_or("graph"), self.is_directed());
        for node in &self.nodes {
            dot.node(node);
        }
        for edge in &self.edges {
            let (u, v) = edge.endpoints();
            match edge.weight() {
                Some(weight) => dot.edge(u, v, Some(&weight)),
                None => dot.edge(u, v, None),
            }
        }
        dot.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        AdjacencyList, AdjacencyMatrix, Direction, Edge, EdgeId, EdgeList, Graph, Representation,
    };

    fn scenario_graph() -> Graph<u32> {
        let mut graph = Graph::undirected(AdjacencyList::new());
        for (u, v) in [(1, 2), (2, 3), (2, 5), (5, 1), (3, 4), (4, 5)] {
            graph.add(Edge::new(u, v));
        }
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph<u32> = Graph::directed(AdjacencyList::new());
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_directed());
        assert_eq!(graph.direction(), Direction::Directed);
    }

    #[test]
    fn test_nodes_in_first_appearance_order() {
        let graph = scenario_graph();
        let nodes: Vec<u32> = graph.nodes().copied().collect();
        assert_eq!(nodes, vec![1, 2, 3, 5, 4]);
        assert!(graph.contains_node(&4));
        assert!(!graph.contains_node(&6));
    }

    #[test]
    fn test_undirected_registers_both_directions() {
        let mut graph: Graph<&str, f64, _> = Graph::undirected(EdgeList::new());
        graph.add(Edge::new("u", "v"));

        assert_eq!(graph.edges(Some(&"u"), Some(&"v")).count(), 1);
        assert_eq!(graph.edges(Some(&"v"), Some(&"u")).count(), 1);
        assert_eq!(graph.edges(None, None).count(), 1);
        assert_eq!(graph.representation().len(), 2);
    }

    #[test]
    fn test_directed_registers_once() {
        let mut graph: Graph<&str, f64, _> = Graph::directed(AdjacencyMatrix::new());
        graph.add(Edge::new("u", "v"));

        assert_eq!(graph.edges(Some(&"u"), Some(&"v")).count(), 1);
        assert_eq!(graph.edges(Some(&"v"), Some(&"u")).count(), 0);
        assert_eq!(graph.representation().len(), 1);
    }

    #[test]
    fn test_add_normalizes_direction() {
        let mut directed: Graph<u32> = Graph::directed(AdjacencyList::new());
        let id = directed.add(Edge::new(1, 2));
        assert!(directed.edge(id).unwrap().is_directed());

        let mut undirected: Graph<u32> = Graph::undirected(AdjacencyList::new());
        let id = undirected.add(Edge::directed(1, 2));
        assert!(!undirected.edge(id).unwrap().is_directed());
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph: Graph<u32, i32> = Graph::directed(AdjacencyList::new());
        let first = graph.add(Edge::new(1, 2).with_weight(3));
        let second = graph.add(Edge::new(1, 2).with_weight(5));

        assert_ne!(first, second);
        let weights: Vec<Option<i32>> = graph
            .edges(Some(&1), Some(&2))
            .map(Edge::weight)
            .collect();
        assert_eq!(weights, vec![Some(3), Some(5)]);
    }

    #[test]
    fn test_edge_ids_and_lookup() {
        let graph = scenario_graph();
        let ids: Vec<EdgeId> = graph.edge_ids(Some(&4), None).collect();
        assert_eq!(ids.len(), 2);
        for id in ids {
            let edge = graph.edge(id).unwrap();
            assert!(edge.matches(Some(&4), None));
        }
        assert!(graph.edge(EdgeId::new(42)).is_none());
    }

    #[test]
    fn test_edge_mut_updates_flow() {
        let mut graph: Graph<u32, i32> = Graph::directed(AdjacencyList::new());
        let id = graph.add(Edge::flow_edge(1, 2, 0, 8).unwrap());

        graph.edge_mut(id).unwrap().set_flow(6);
        assert_eq!(graph.edge(id).unwrap().residual_capacity(), Some(2));
    }

    #[test]
    fn test_all_edges_in_insertion_order() {
        let graph = scenario_graph();
        let endpoints: Vec<(u32, u32)> = graph
            .all_edges()
            .map(|(_, edge)| (*edge.u(), *edge.v()))
            .collect();
        assert_eq!(endpoints[0], (1, 2));
        assert_eq!(endpoints[5], (4, 5));
    }

    #[test]
    fn test_to_dot_directed() {
        let mut graph: Graph<&str, i32> = Graph::directed(AdjacencyList::new());
        graph.add(Edge::new("a", "b").with_weight(3));
        graph.add(Edge::new("b", "c"));

        let dot = graph.to_dot(Some("demo"));
        assert!(dot.starts_with("digraph \"demo\" {"));
        assert!(dot.contains("  \"a\" -> \"b\" [label=\"3\"];"));
        assert!(dot.contains("  \"b\" -> \"c\";"));
        assert!(dot.ends_with('}'));
    }

    #[test]
    fn test_to_dot_undirected_escapes() {
        let mut graph: Graph<&str> = Graph::undirected(AdjacencyList::new());
        graph.add(Edge::new("List<T>", "x"));

        let dot = graph.to_dot(None);
        assert!(dot.starts_with("graph \"graph\" {"));
        assert!(dot.contains("\"List\\<T\\>\" -- \"x\""));
    }
}
