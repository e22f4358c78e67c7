#![no_main]

use graphwalk::prelude::*;
use libfuzzer_sys::fuzz_target;

// Layout: [flags, source, (u, v, weight)*]. Bit 0 of flags selects direction,
// bits 1..3 pick the representation.
fuzz_target!(|data: &[u8]| {
    let [flags, source, rest @ ..] = data else {
        return;
    };

    let kind = match (flags >> 1) % 3 {
        0 => RepresentationKind::EdgeList,
        1 => RepresentationKind::AdjacencyMatrix,
        _ => RepresentationKind::AdjacencyList,
    };
    let mut graph: Graph<u8, i32, _> = Graph::new(kind.create(), if flags & 1 == 1 {
        Direction::Directed
    } else {
        Direction::Undirected
    });
    for chunk in rest.chunks_exact(3) {
        graph.add(Edge::new(chunk[0], chunk[1]).with_weight(i32::from(chunk[2] as i8)));
    }

    let dfs = DepthFirstSearch::new(&graph, *source);
    let bfs = BreadthFirstSearch::new(&graph, *source);
    for node in graph.nodes() {
        assert_eq!(dfs.visited(node), bfs.visited(node));
    }

    let config = ShortestPathConfig::default().with_max_relaxations(1 << 16);
    let spfa = ShortestPathFaster::with_config(&graph, *source, config);
    let bellman_ford = BellmanFord::new(&graph, *source);
    if let (Ok(spfa), Ok(bellman_ford)) = (&spfa, &bellman_ford) {
        for node in graph.nodes() {
            assert_eq!(spfa.distance(node), bellman_ford.distance(node));
        }
    }
});
