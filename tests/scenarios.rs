//! End-to-end traversal scenarios using the public API.
//!
//! Each test builds a small graph through one or more representations and
//! checks the observable results of the traversals: reachability, distances,
//! predecessor paths and error reporting.

use graphwalk::{
    graph::{
        from_each_source, AdjacencyList, AdjacencyMatrix, BellmanFord, BreadthFirstSearch,
        DepthFirstSearch, Edge, EdgeList, Graph, RepresentationKind, ShortestPathConfig,
        ShortestPathFaster, ShortestPaths, Traversal,
    },
    Error, Result,
};
use strum::IntoEnumIterator;

const SCENARIO_EDGES: [(u32, u32); 6] = [(1, 2), (2, 3), (2, 5), (5, 1), (3, 4), (4, 5)];

#[test]
fn dfs_reaches_new_node_only_after_edge_is_added() {
    for kind in RepresentationKind::iter() {
        let mut graph: Graph<u32, f64, _> = Graph::undirected(kind.create());
        for (u, v) in SCENARIO_EDGES {
            graph.add(Edge::new(u, v));
        }
        assert!(!DepthFirstSearch::new(&graph, 1).visited(&6), "{kind}");

        graph.add(Edge::new(4, 6));
        assert!(DepthFirstSearch::new(&graph, 1).visited(&6), "{kind}");
    }
}

#[test]
fn spfa_weighted_directed_distances() -> Result<()> {
    let mut graph: Graph<u32, i64> = Graph::directed(AdjacencyList::new());
    graph.add(Edge::new(1, 2).with_weight(2));
    graph.add(Edge::new(1, 3).with_weight(5));
    graph.add(Edge::new(2, 3).with_weight(2));

    let spfa = ShortestPathFaster::new(&graph, 1)?;
    assert_eq!(spfa.distance(&1)?, 0);
    assert_eq!(spfa.distance(&2)?, 2);
    assert_eq!(spfa.distance(&3)?, 4);
    assert_eq!(spfa.distance(&4), Err(Error::UnreachableNode("4".into())));
    assert!(!spfa.visited(&4));
    assert_eq!(spfa.path(&4), Err(Error::UnreachableNode("4".into())));
    Ok(())
}

#[test]
fn bfs_identical_across_representations() {
    let edges = [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (5, 6), (4, 4), (1, 3)];
    let probe: Vec<u32> = (0..=7).collect();

    let mut results = Vec::new();
    for kind in RepresentationKind::iter() {
        let mut graph: Graph<u32, f64, _> = Graph::undirected(kind.create());
        for (u, v) in edges {
            graph.add(Edge::new(u, v));
        }

        let bfs = BreadthFirstSearch::new(&graph, 0);
        let observed: Vec<(bool, Option<usize>)> = probe
            .iter()
            .map(|node| (bfs.visited(node), bfs.distance(node).ok()))
            .collect();
        results.push(observed);
    }

    assert_eq!(results[0][4], (true, Some(3)));
    assert_eq!(results[0][5], (false, None));
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn negative_cycle_is_reported_by_both_weighted_traversals() {
    let mut graph: Graph<&str, i32, _> = Graph::directed(AdjacencyMatrix::new());
    graph.add(Edge::new("s", "a").with_weight(1));
    graph.add(Edge::new("a", "b").with_weight(-1));
    graph.add(Edge::new("b", "c").with_weight(-1));
    graph.add(Edge::new("c", "a").with_weight(1));

    assert_eq!(BellmanFord::new(&graph, "s").unwrap_err(), Error::NegativeCycle);
    assert_eq!(
        ShortestPathFaster::new(&graph, "s").unwrap_err(),
        Error::NegativeCycle
    );

    let capped = ShortestPathConfig::classic().with_max_relaxations(1_000);
    assert_eq!(
        ShortestPathFaster::with_config(&graph, "s", capped).unwrap_err(),
        Error::RelaxationLimit(1_000)
    );
}

#[test]
fn paths_follow_graph_edges() -> Result<()> {
    let mut graph: Graph<u32, u32, _> = Graph::undirected(EdgeList::new());
    for (u, v, w) in [(1, 2, 7), (1, 3, 9), (1, 6, 14), (2, 3, 10), (2, 4, 15)] {
        graph.add(Edge::new(u, v).with_weight(w));
    }
    for (u, v, w) in [(3, 4, 11), (3, 6, 2), (4, 5, 6), (5, 6, 9)] {
        graph.add(Edge::new(u, v).with_weight(w));
    }

    let bellman_ford = BellmanFord::new(&graph, 1)?;
    assert_eq!(bellman_ford.distance(&5)?, 20);
    assert_eq!(bellman_ford.path(&5)?, vec![1, 3, 6, 5]);

    for node in graph.nodes() {
        let path = bellman_ford.path(node)?;
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(node));

        let mut total = 0;
        for pair in path.windows(2) {
            let cheapest = graph
                .edges(Some(&pair[0]), Some(&pair[1]))
                .filter_map(Edge::weight)
                .min();
            total += cheapest.expect("consecutive path nodes are adjacent");
        }
        assert_eq!(total, bellman_ford.distance(node)?);
    }
    Ok(())
}

#[test]
fn undirected_edges_are_symmetric() {
    for kind in RepresentationKind::iter() {
        let mut graph: Graph<char, f64, _> = Graph::undirected(kind.create());
        graph.add(Edge::new('x', 'y'));

        assert_eq!(graph.edges(Some(&'x'), Some(&'y')).count(), 1, "{kind}");
        assert_eq!(graph.edges(Some(&'y'), Some(&'x')).count(), 1, "{kind}");
        assert_eq!(graph.edges(None, None).count(), 1, "{kind}");
    }
}

#[test]
fn edge_other_endpoint() {
    let edge: Edge<&str> = Edge::new("left", "right");
    assert_eq!(edge.other(&"left"), Ok(&"right"));
    assert_eq!(
        edge.other(&"middle"),
        Err(Error::InvalidEndpoint("\"middle\"".into()))
    );
}

#[test]
fn traversals_from_every_source_in_parallel() -> Result<()> {
    let mut graph: Graph<u32, i64> = Graph::directed(AdjacencyList::new());
    for node in 0..50 {
        graph.add(Edge::new(node, node + 1).with_weight(2));
    }

    let sources: Vec<u32> = (0..=50).collect();
    let searches = from_each_source(sources, |source| ShortestPathFaster::new(&graph, *source))?;

    assert_eq!(searches.len(), 51);
    for (source, spfa) in &searches {
        assert_eq!(spfa.source(), source);
        assert_eq!(spfa.distance(&50)?, i64::from(2 * (50 - source)));
        assert_eq!(spfa.reached().len(), 51 - *source as usize);
    }
    Ok(())
}
