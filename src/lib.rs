// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphwalk
//!
//! Generic graphs over arbitrary hashable node keys with interchangeable edge
//! representations, and the classic single-source traversals on top of them.
//!
//! ## Features
//!
//! - **Pluggable storage** - Edge list, adjacency matrix or adjacency list, selectable at compile time or at runtime
//! - **Directed and undirected graphs** - Undirected edges are indexed under both endpoints but stored once
//! - **Multigraphs** - Parallel edges and self-loops are kept
//! - **Eager traversals** - DFS, BFS, SPFA and Bellman-Ford compute everything in their constructor
//! - **Negative weights** - Negative cycles are reported instead of looping or returning garbage
//! - **Any numeric weight** - All primitive integers and floats, with overflow reported as an error
//!
//! ## Quick Start
//!
//! Add `graphwalk` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! graphwalk = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphwalk::prelude::*;
//!
//! let mut graph: Graph<u32, i64> = Graph::directed(AdjacencyList::new());
//! graph.add(Edge::new(1, 2).with_weight(2));
//! graph.add(Edge::new(1, 3).with_weight(5));
//! graph.add(Edge::new(2, 3).with_weight(2));
//!
//! let spfa = ShortestPathFaster::new(&graph, 1)?;
//! assert_eq!(spfa.distance(&3)?, 4);
//! assert_eq!(spfa.path(&3)?, vec![1, 2, 3]);
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ### Choosing a Representation at Runtime
//!
//! ```rust
//! use graphwalk::graph::{BreadthFirstSearch, Edge, Graph, RepresentationKind, ShortestPaths};
//!
//! let kind: RepresentationKind = "matrix".parse().unwrap();
//! let mut graph: Graph<&str, f64, _> = Graph::undirected(kind.create());
//! graph.add(Edge::new("a", "b"));
//! graph.add(Edge::new("b", "c"));
//!
//! let bfs = BreadthFirstSearch::new(&graph, "a");
//! assert_eq!(bfs.distance(&"c")?, 2);
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`graph`] - Edges, representations, the graph container and the traversals
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Building a graph never fails. Traversals either compute a complete result
//! or return an [`Error`]; queries for nodes the traversal never reached fail
//! with [`Error::UnreachableNode`]:
//!
//! ```rust
//! use graphwalk::{Error, graph::{BellmanFord, Edge, EdgeList, Graph, ShortestPaths}};
//!
//! let mut graph: Graph<u32, i32, _> = Graph::directed(EdgeList::new());
//! graph.add(Edge::new(1, 2).with_weight(-1));
//! graph.add(Edge::new(2, 1).with_weight(-1));
//!
//! match BellmanFord::new(&graph, 1) {
//!     Ok(result) => println!("distance to 2: {:?}", result.distance(&2)),
//!     Err(Error::NegativeCycle) => println!("no shortest paths exist"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Fuzzing
//! cargo +nightly fuzz run traversal --release
//! ```
#[macro_use]
pub(crate) mod error;
pub(crate) mod utils;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphwalk::prelude::*;
///
/// let mut graph: Graph<&str> = Graph::undirected(AdjacencyList::new());
/// graph.add(Edge::new("a", "b"));
/// assert!(DepthFirstSearch::new(&graph, "b").visited(&"a"));
/// ```
pub mod prelude;

/// Graph construction and traversal
///
/// # Key Components
///
/// ## Building Graphs
/// - [`graph::Edge`] - A connection between two node keys
/// - [`graph::Graph`] - The container, directed or undirected
/// - [`graph::Representation`] - The edge index strategy, see [`graph::RepresentationKind`]
///
/// ## Traversals
/// - [`graph::DepthFirstSearch`] and [`graph::BreadthFirstSearch`] - Unweighted
/// - [`graph::ShortestPathFaster`] and [`graph::BellmanFord`] - Weighted, see [`graph::ShortestPathConfig`]
pub mod graph;

/// `graphwalk` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphwalk` Error type
///
/// The single error type of this crate. Graph construction never fails; edge
/// queries and traversals report their failures through it.
pub use error::Error;
