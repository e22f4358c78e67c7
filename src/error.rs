use thiserror::Error;

macro_rules! invalid_argument {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which covers every failure this library can report.
///
/// Graph construction itself never fails; errors surface from edge endpoint
/// queries and from the traversals, which compute their results eagerly and
/// either succeed completely or report one of the variants below.
///
/// # Error Categories
///
/// ## Edge Errors
/// - [`Error::InvalidEndpoint`] - Queried the opposite endpoint of a vertex the edge does not touch
///
/// ## Traversal Errors
/// - [`Error::UnreachableNode`] - Distance or path requested for a node the traversal never reached
/// - [`Error::NegativeCycle`] - A negative-weight cycle is reachable from the source
/// - [`Error::RelaxationLimit`] - The configured relaxation budget was exhausted
/// - [`Error::WeightOverflow`] - Integer path weights overflowed
///
/// ## Input Errors
/// - [`Error::InvalidArgument`] - Malformed input rejected at construction
///
/// # Examples
///
/// ```rust
/// use graphwalk::{Error, graph::{AdjacencyList, BreadthFirstSearch, Edge, Graph, ShortestPaths}};
///
/// let mut graph: Graph<u32> = Graph::undirected(AdjacencyList::new());
/// graph.add(Edge::new(1, 2));
///
/// let bfs = BreadthFirstSearch::new(&graph, 1);
/// match bfs.distance(&3) {
///     Ok(hops) => println!("3 is {hops} hops away"),
///     Err(Error::UnreachableNode(node)) => println!("{node} is unreachable"),
///     Err(e) => println!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The vertex is not one of the edge's two endpoints.
    ///
    /// Raised by [`Edge::other`](crate::graph::Edge::other). The associated value
    /// is the `Debug` rendering of the offending vertex.
    #[error("The vertex {0} is not one of the endpoints")]
    InvalidEndpoint(String),

    /// The node was never reached by the traversal.
    ///
    /// Returned by distance and path queries. Recoverable: callers decide whether
    /// unreachability is expected. The associated value is the `Debug` rendering
    /// of the queried node.
    #[error("The node {0} is not reachable from the source")]
    UnreachableNode(String),

    /// A negative-weight cycle is reachable from the source.
    ///
    /// Distances are unbounded below in this case, so no partial result is
    /// returned.
    #[error("The graph contains a negative-weight cycle reachable from the source")]
    NegativeCycle,

    /// The relaxation budget configured in
    /// [`ShortestPathConfig::max_relaxations`](crate::graph::ShortestPathConfig::max_relaxations)
    /// was exhausted.
    ///
    /// The associated value is the budget that was reached.
    #[error("Reached the maximum number of relaxations allowed - {0}")]
    RelaxationLimit(usize),

    /// Adding two path weights overflowed the weight type.
    #[error("Path weight overflowed the weight type")]
    WeightOverflow,

    /// Malformed input was rejected.
    ///
    /// # Fields
    ///
    /// * `message` - Description of what was invalid
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid argument - {file}:{line}: {message}")]
    InvalidArgument {
        /// The message to be printed for the InvalidArgument error
        message: String,
        /// The source file in which this error occurred
        file: &'static str,
        /// The source line in which this error occurred
        line: u32,
    },
}
