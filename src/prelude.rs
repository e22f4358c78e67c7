//! # graphwalk Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphwalk library. The traversal traits are included so that their query
//! methods are in scope.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphwalk operations
pub use crate::Error;

/// The result type used throughout graphwalk
pub use crate::Result;

// ================================================================================================
// Graph Construction
// ================================================================================================

/// Edges, their identifiers and weights
pub use crate::graph::{Edge, EdgeId, Weight};

/// The graph container
pub use crate::graph::{Direction, Graph};

/// Edge representations
pub use crate::graph::{
    AdjacencyList, AdjacencyMatrix, EdgeList, Representation, RepresentationKind,
};

// ================================================================================================
// Traversals
// ================================================================================================

/// Query traits implemented by every traversal
pub use crate::graph::{ShortestPaths, Traversal};

/// The traversal algorithms
pub use crate::graph::{BellmanFord, BreadthFirstSearch, DepthFirstSearch, ShortestPathFaster};

/// Configuration for the weighted traversals
pub use crate::graph::ShortestPathConfig;
