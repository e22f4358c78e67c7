use std::str::FromStr;

use anyhow::{bail, Context};
use graphwalk::{
    graph::{
        BellmanFord, BreadthFirstSearch, DynRepresentation, Edge, Graph, RepresentationKind,
        ShortestPathConfig, ShortestPathFaster, ShortestPaths, Traversal,
    },
    Error,
};
use log::debug;

use crate::{
    app::GraphOptions,
    input::{self, GraphInput},
};

/// The graph type every subcommand works on.
pub type InputGraph = Graph<u64, i64, DynRepresentation<u64>>;

/// Shortest-path algorithm selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Spfa,
    BellmanFord,
}

impl Algorithm {
    /// The command line name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Spfa => "spfa",
            Algorithm::BellmanFord => "bellman-ford",
        }
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> anyhow::Result<Self> {
        match name {
            "bfs" => Ok(Algorithm::Bfs),
            "spfa" => Ok(Algorithm::Spfa),
            "bellman-ford" => Ok(Algorithm::BellmanFord),
            other => bail!("unknown algorithm '{other}' (expected bfs, spfa, or bellman-ford)"),
        }
    }
}

/// Algorithm choice plus the configuration of the weighted traversals.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub algorithm: Algorithm,
    pub config: ShortestPathConfig,
}

impl SearchOptions {
    pub fn parse(algorithm: &str, max_relaxations: Option<usize>) -> anyhow::Result<Self> {
        let config = ShortestPathConfig {
            max_relaxations,
            ..ShortestPathConfig::default()
        };
        config.validate()?;

        Ok(SearchOptions {
            algorithm: algorithm.parse()?,
            config,
        })
    }
}

/// A finished traversal, whichever algorithm produced it.
pub enum Search {
    Hops(BreadthFirstSearch<u64>),
    Spfa(ShortestPathFaster<u64, i64>),
    BellmanFord(BellmanFord<u64, i64>),
}

impl Search {
    /// Distance from the source, `None` if `node` is unreachable.
    ///
    /// BFS hop counts are widened to `i64` so every algorithm reports the same type.
    pub fn distance(&self, node: u64) -> anyhow::Result<Option<i64>> {
        match self {
            Search::Hops(bfs) => reachable(bfs.distance(&node))?
                .map(i64::try_from)
                .transpose()
                .context("hop count does not fit into i64"),
            Search::Spfa(spfa) => reachable(spfa.distance(&node)),
            Search::BellmanFord(bellman_ford) => reachable(bellman_ford.distance(&node)),
        }
    }

    /// Node sequence from the source to `node`, `None` if `node` is unreachable.
    pub fn path(&self, node: u64) -> anyhow::Result<Option<Vec<u64>>> {
        match self {
            Search::Hops(bfs) => reachable(bfs.path(&node)),
            Search::Spfa(spfa) => reachable(spfa.path(&node)),
            Search::BellmanFord(bellman_ford) => reachable(bellman_ford.path(&node)),
        }
    }
}

/// Map the unreachable-node error to `None`, keeping every other error.
fn reachable<T>(result: graphwalk::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::UnreachableNode(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Read, parse and build the graph described by `opts`.
pub fn load_graph(
    opts: &GraphOptions,
    header_len: usize,
    weighted: bool,
) -> anyhow::Result<(GraphInput, InputGraph)> {
    let text = input::read_input(opts.input.as_deref())?;
    let parsed = input::parse(&text, header_len, weighted)?;
    let graph = build_graph(&parsed, &opts.representation, opts.directed)?;
    Ok((parsed, graph))
}

/// Build a graph over the representation named `representation`.
pub fn build_graph(
    input: &GraphInput,
    representation: &str,
    directed: bool,
) -> anyhow::Result<InputGraph> {
    let kind = RepresentationKind::from_str(representation).with_context(|| {
        format!("unknown representation '{representation}' (expected edge-list, matrix, or list)")
    })?;

    let mut graph = if directed {
        Graph::directed(kind.create())
    } else {
        Graph::undirected(kind.create())
    };
    for line in &input.edges {
        let edge = Edge::new(line.u, line.v);
        graph.add(match line.weight {
            Some(weight) => edge.with_weight(weight),
            None => edge,
        });
    }

    debug!(
        "built {} graph over {kind}: {} nodes, {} edges",
        if directed { "directed" } else { "undirected" },
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Run the selected algorithm from `source`.
pub fn search(graph: &InputGraph, source: u64, opts: &SearchOptions) -> anyhow::Result<Search> {
    Ok(match opts.algorithm {
        Algorithm::Bfs => Search::Hops(BreadthFirstSearch::new(graph, source)),
        Algorithm::Spfa => Search::Spfa(
            ShortestPathFaster::with_config(graph, source, opts.config).context("spfa failed")?,
        ),
        Algorithm::BellmanFord => Search::BellmanFord(
            BellmanFord::with_config(graph, source, opts.config)
                .context("bellman-ford failed")?,
        ),
    })
}
