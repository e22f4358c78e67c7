//! Seeded random cross-check of all representations.
//!
//! The same random multigraph is stored six ways: each representation once as
//! a directed graph holding every edge in both directions, and once as an
//! undirected graph. All six must agree on the node set, on DFS and BFS
//! reachability, and on BFS hop counts from every source.

use std::collections::HashSet;

use graphwalk::graph::{
    BreadthFirstSearch, DepthFirstSearch, DynRepresentation, Edge, Graph, RepresentationKind,
    ShortestPathFaster, ShortestPaths, Traversal,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

const NODE_COUNT: u32 = 100;
const EDGE_COUNT: usize = 100;

type DynGraph = Graph<u32, u32, DynRepresentation<u32>>;

fn random_graphs(rng: &mut ChaCha8Rng) -> (HashSet<u32>, Vec<DynGraph>) {
    let mut directed: Vec<DynGraph> = RepresentationKind::iter()
        .map(|kind| Graph::directed(kind.create()))
        .collect();
    let mut undirected: Vec<DynGraph> = RepresentationKind::iter()
        .map(|kind| Graph::undirected(kind.create()))
        .collect();
    let mut inserted = HashSet::new();

    for _ in 0..EDGE_COUNT {
        let u = rng.random_range(0..NODE_COUNT);
        let v = rng.random_range(0..NODE_COUNT);
        let weight = rng.random_range(1..10);
        inserted.insert(u);
        inserted.insert(v);

        for graph in &mut directed {
            graph.add(Edge::new(u, v).with_weight(weight));
            graph.add(Edge::new(v, u).with_weight(weight));
        }
        for graph in &mut undirected {
            graph.add(Edge::new(u, v).with_weight(weight));
        }
    }

    directed.extend(undirected);
    (inserted, directed)
}

#[test]
fn random_stress_representations_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x_4752_4150_4857_414C);

    for _case in 0..5 {
        let (inserted, graphs) = random_graphs(&mut rng);

        for graph in &graphs {
            let nodes: HashSet<u32> = graph.nodes().copied().collect();
            assert_eq!(nodes, inserted);
        }

        for source in 0..NODE_COUNT {
            let mut expected: Option<Vec<(bool, Option<usize>)>> = None;

            for graph in &graphs {
                let dfs = DepthFirstSearch::new(graph, source);
                let bfs = BreadthFirstSearch::new(graph, source);

                let observed: Vec<(bool, Option<usize>)> = (0..NODE_COUNT)
                    .map(|node| {
                        assert_eq!(dfs.visited(&node), bfs.visited(&node), "node {node}");
                        (bfs.visited(&node), bfs.distance(&node).ok())
                    })
                    .collect();

                match &expected {
                    None => expected = Some(observed),
                    Some(expected) => assert_eq!(expected, &observed, "source {source}"),
                }
            }
        }
    }
}

#[test]
fn random_stress_weighted_distances_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x_4752_4150_4857_414C ^ 0xDEAD_BEEF);
    let (_, graphs) = random_graphs(&mut rng);

    for source in (0..NODE_COUNT).step_by(7) {
        let mut expected: Option<Vec<Option<u32>>> = None;

        for graph in &graphs {
            let spfa = ShortestPathFaster::new(graph, source).unwrap();
            let observed: Vec<Option<u32>> = (0..NODE_COUNT)
                .map(|node| spfa.distance(&node).ok())
                .collect();

            match &expected {
                None => expected = Some(observed),
                Some(expected) => assert_eq!(expected, &observed, "source {source}"),
            }
        }
    }
}
