//! Edges and edge identifiers.
//!
//! This module provides [`Edge`], a connection between two node keys carrying
//! optional weight and flow attributes, and [`EdgeId`], the strongly-typed
//! index under which a [`Graph`](crate::graph::Graph) stores each edge.
//! Representations index `EdgeId`s rather than edge values, so an undirected
//! edge registered under both endpoints still refers to a single stored edge.

use std::fmt;

use crate::{graph::Weight, Error, Result};

/// A strongly-typed identifier for edges within a graph.
///
/// `EdgeId` wraps a `usize` index into the graph's edge storage. Edge IDs are
/// assigned sequentially starting from 0 by [`Graph::add`](crate::graph::Graph::add)
/// and should not typically be constructed manually.
///
/// # Thread Safety
///
/// `EdgeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    ///
    /// Primarily intended for representations and tests; normal usage obtains
    /// `EdgeId` values from [`Graph::add`](crate::graph::Graph::add).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// A connection between two nodes.
///
/// An edge has two endpoints `u` and `v`, a direction flag, and three optional
/// numeric attributes: a `weight` used by shortest-path traversals and a
/// `flow`/`capacity` pair for flow-network use. Edges are undirected unless
/// built with [`Edge::directed`] or [`Edge::with_directed`].
///
/// When an edge is added to a [`Graph`](crate::graph::Graph), its direction flag
/// is overwritten with the graph's mode.
///
/// # Type Parameters
///
/// * `N` - The node key type
/// * `W` - The numeric type of weight, flow and capacity (default `f64`)
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::Edge;
///
/// let edge: Edge<&str, i64> = Edge::new("a", "b").with_weight(7);
/// assert_eq!(edge.endpoints(), (&"a", &"b"));
/// assert_eq!(edge.weight(), Some(7));
/// assert_eq!(edge.other(&"b")?, &"a");
/// assert!(edge.matches(Some(&"b"), Some(&"a")));
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N, W = f64> {
    u: N,
    v: N,
    directed: bool,
    weight: Option<W>,
    flow: Option<W>,
    capacity: Option<W>,
}

impl<N, W> Edge<N, W> {
    /// Creates an undirected edge between `u` and `v` without attributes.
    #[must_use]
    pub fn new(u: N, v: N) -> Self {
        Edge {
            u,
            v,
            directed: false,
            weight: None,
            flow: None,
            capacity: None,
        }
    }

    /// Creates a directed edge `u -> v` without attributes.
    #[must_use]
    pub fn directed(u: N, v: N) -> Self {
        Edge::new(u, v).with_directed(true)
    }

    /// Sets the direction flag.
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets the edge weight.
    #[must_use]
    pub fn with_weight(mut self, weight: W) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns both endpoints as an ordered pair `(u, v)`.
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.u, &self.v)
    }

    /// Returns the first endpoint.
    pub fn u(&self) -> &N {
        &self.u
    }

    /// Returns the second endpoint.
    pub fn v(&self) -> &N {
        &self.v
    }

    /// Returns `true` if the edge may only be followed from `u` to `v`.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Consumes the edge, returning its endpoints.
    pub fn into_endpoints(self) -> (N, N) {
        (self.u, self.v)
    }
}

impl<N: PartialEq + fmt::Debug, W> Edge<N, W> {
    /// Returns `true` if this edge connects the given endpoints.
    ///
    /// `None` acts as a wildcard. A directed edge matches only `(u, v)`; an
    /// undirected edge also matches `(v, u)`.
    ///
    /// # Arguments
    ///
    /// * `from` - The required tail of the edge, or `None` for any
    /// * `to` - The required head of the edge, or `None` for any
    pub fn matches(&self, from: Option<&N>, to: Option<&N>) -> bool {
        let forward =
            from.map_or(true, |from| *from == self.u) && to.map_or(true, |to| *to == self.v);
        if forward || self.directed {
            return forward;
        }

        from.map_or(true, |from| *from == self.v) && to.map_or(true, |to| *to == self.u)
    }

    /// Returns the endpoint opposite to `vertex`.
    ///
    /// For a self-loop the opposite endpoint is the vertex itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if `vertex` is neither `u` nor `v`.
    pub fn other(&self, vertex: &N) -> Result<&N> {
        if *vertex == self.u {
            Ok(&self.v)
        } else if *vertex == self.v {
            Ok(&self.u)
        } else {
            Err(Error::InvalidEndpoint(format!("{vertex:?}")))
        }
    }
}

impl<N, W: Copy> Edge<N, W> {
    /// Returns the edge weight, if any.
    pub fn weight(&self) -> Option<W> {
        self.weight
    }

    /// Returns the current flow, if any.
    pub fn flow(&self) -> Option<W> {
        self.flow
    }

    /// Returns the capacity, if any.
    pub fn capacity(&self) -> Option<W> {
        self.capacity
    }
}

impl<N, W: Weight> Edge<N, W> {
    /// Creates an undirected flow edge carrying `flow` units out of `capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is negative or `flow`
    /// exceeds `capacity`.
    pub fn flow_edge(u: N, v: N, flow: W, capacity: W) -> Result<Self> {
        if capacity.is_negative() {
            return Err(invalid_argument!("capacity {:?} is negative", capacity));
        }
        if flow > capacity {
            return Err(invalid_argument!(
                "flow {:?} exceeds capacity {:?}",
                flow,
                capacity
            ));
        }

        let mut edge = Edge::new(u, v);
        edge.flow = Some(flow);
        edge.capacity = Some(capacity);
        Ok(edge)
    }

    /// Returns the weight used when traversing this edge.
    ///
    /// Edges without an explicit weight count as a single unit step.
    pub fn cost(&self) -> W {
        self.weight.unwrap_or_else(W::one)
    }

    /// Updates the flow in place.
    ///
    /// This is the only mutation an edge supports after construction; it exists
    /// for flow-network algorithms operating on
    /// [`Graph::edge_mut`](crate::graph::Graph::edge_mut).
    pub fn set_flow(&mut self, flow: W) {
        self.flow = Some(flow);
    }

    /// Returns `capacity - flow` when both attributes are set.
    ///
    /// Returns `None` if either attribute is missing or the subtraction cannot
    /// be represented (an unsigned flow exceeding its capacity).
    pub fn residual_capacity(&self) -> Option<W>
    where
        W: std::ops::Sub<Output = W>,
    {
        match (self.capacity, self.flow) {
            (Some(capacity), Some(flow)) if flow <= capacity => Some(capacity - flow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_edge_id_roundtrip() {
        let edge: EdgeId = 123usize.into();
        assert_eq!(edge.index(), 123);
        let value: usize = edge.into();
        assert_eq!(value, 123);
    }

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(42);
        assert_eq!(format!("{edge:?}"), "EdgeId(42)");
        assert_eq!(format!("{edge}"), "e42");
    }

    #[test]
    fn test_edge_id_hash() {
        let mut set: HashSet<EdgeId> = HashSet::new();
        set.insert(EdgeId::new(1));
        set.insert(EdgeId::new(2));
        set.insert(EdgeId::new(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_new_edge_is_undirected() {
        let edge: Edge<u32> = Edge::new(1, 2);
        assert!(!edge.is_directed());
        assert_eq!(edge.endpoints(), (&1, &2));
        assert_eq!(edge.weight(), None);
        assert_eq!(edge.flow(), None);
        assert_eq!(edge.capacity(), None);
    }

    #[test]
    fn test_other_endpoint() {
        let edge: Edge<u32> = Edge::new(1, 2);
        assert_eq!(edge.other(&1), Ok(&2));
        assert_eq!(edge.other(&2), Ok(&1));
    }

    #[test]
    fn test_other_invalid_endpoint() {
        let edge: Edge<u32> = Edge::new(1, 2);
        assert_eq!(edge.other(&3), Err(Error::InvalidEndpoint("3".into())));
    }

    #[test]
    fn test_other_self_loop() {
        let edge: Edge<&str> = Edge::new("a", "a");
        assert_eq!(edge.other(&"a"), Ok(&"a"));
    }

    #[test]
    fn test_matches_undirected() {
        let edge: Edge<u32> = Edge::new(1, 2);
        assert!(edge.matches(Some(&1), Some(&2)));
        assert!(edge.matches(Some(&2), Some(&1)));
        assert!(edge.matches(None, Some(&1)));
        assert!(edge.matches(Some(&2), None));
        assert!(edge.matches(None, None));
        assert!(!edge.matches(Some(&1), Some(&3)));
        assert!(!edge.matches(Some(&3), None));
    }

    #[test]
    fn test_matches_directed() {
        let edge: Edge<u32> = Edge::directed(1, 2);
        assert!(edge.matches(Some(&1), Some(&2)));
        assert!(!edge.matches(Some(&2), Some(&1)));
        assert!(edge.matches(Some(&1), None));
        assert!(!edge.matches(Some(&2), None));
        assert!(edge.matches(None, Some(&2)));
        assert!(!edge.matches(None, Some(&1)));
    }

    #[test]
    fn test_cost_defaults_to_unit() {
        let unweighted: Edge<u32, i64> = Edge::new(1, 2);
        let weighted: Edge<u32, i64> = Edge::new(1, 2).with_weight(-4);
        assert_eq!(unweighted.cost(), 1);
        assert_eq!(weighted.cost(), -4);
    }

    #[test]
    fn test_flow_edge() {
        let mut edge: Edge<u32, i32> = Edge::flow_edge(1, 2, 3, 10).unwrap();
        assert_eq!(edge.flow(), Some(3));
        assert_eq!(edge.capacity(), Some(10));
        assert_eq!(edge.residual_capacity(), Some(7));

        edge.set_flow(10);
        assert_eq!(edge.residual_capacity(), Some(0));
    }

    #[test]
    fn test_flow_edge_rejects_overflowing_flow() {
        let result: Result<Edge<u32, i32>> = Edge::flow_edge(1, 2, 11, 10);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_flow_edge_rejects_negative_capacity() {
        let result: Result<Edge<u32, f64>> = Edge::flow_edge(1, 2, -2.0, -1.0);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_weighted_flow_edge() {
        let edge: Edge<u32, u64> = Edge::flow_edge(1, 2, 0, 5).unwrap().with_weight(9);
        assert_eq!(edge.weight(), Some(9));
        assert_eq!(edge.residual_capacity(), Some(5));
    }
}
