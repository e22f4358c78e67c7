//! Graphs, edge representations and single-source traversals.
//!
//! This module contains everything needed to build a graph over arbitrary
//! hashable node keys and to query reachability and shortest paths on it.
//!
//! # Architecture
//!
//! - [`Edge`] - A connection between two node keys with optional weight, flow and capacity
//! - [`Representation`] - Pluggable edge index ([`EdgeList`], [`AdjacencyMatrix`], [`AdjacencyList`])
//! - [`Graph`] - Edge arena plus one representation, directed or undirected
//! - [`Traversal`] / [`ShortestPaths`] - Queries answered by the eagerly computed traversals
//!
//! # Traversals
//!
//! | Traversal | Label | Weights | Negative cycles |
//! |-----------|-------|---------|-----------------|
//! | [`DepthFirstSearch`] | tree depth | ignored | n/a |
//! | [`BreadthFirstSearch`] | hop count | ignored | n/a |
//! | [`ShortestPathFaster`] | distance | any | detected (configurable) |
//! | [`BellmanFord`] | distance | any | always detected |
//!
//! # Examples
//!
//! ```rust
//! use graphwalk::graph::{
//!     AdjacencyList, BellmanFord, DepthFirstSearch, Edge, Graph, ShortestPaths, Traversal,
//! };
//!
//! let mut graph: Graph<&str, i32> = Graph::directed(AdjacencyList::new());
//! graph.add(Edge::new("home", "work").with_weight(30));
//! graph.add(Edge::new("work", "gym").with_weight(10));
//! graph.add(Edge::new("home", "gym").with_weight(45));
//!
//! assert!(DepthFirstSearch::new(&graph, "home").visited(&"gym"));
//!
//! let routes = BellmanFord::new(&graph, "home")?;
//! assert_eq!(routes.distance(&"gym")?, 40);
//! assert_eq!(routes.path(&"gym")?, vec!["home", "work", "gym"]);
//! # Ok::<(), graphwalk::Error>(())
//! ```

mod config;
mod core;
mod edge;
mod representation;
mod traversal;
mod weight;

pub use config::ShortestPathConfig;
pub use core::{Direction, Graph};
pub use edge::{Edge, EdgeId};
pub use representation::{
    AdjacencyList, AdjacencyMatrix, DynRepresentation, EdgeIter, EdgeList, Representation,
    RepresentationKind,
};
pub use traversal::{
    from_each_source, BellmanFord, BreadthFirstSearch, DepthFirstSearch, SearchTree,
    ShortestPathFaster, ShortestPaths, Traversal,
};
pub use weight::Weight;
