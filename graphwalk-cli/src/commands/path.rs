use anyhow::bail;
use serde::Serialize;

use crate::{
    app::{GlobalOptions, GraphOptions},
    commands::common::{load_graph, search, InputGraph, SearchOptions},
    output::print_output,
};

#[derive(Debug, Serialize)]
struct PathOutput {
    source: u64,
    target: u64,
    distance: i64,
    path: Vec<u64>,
}

pub fn run(
    graph_opts: &GraphOptions,
    source: u64,
    target: u64,
    search_opts: &SearchOptions,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let (_, graph) = load_graph(graph_opts, 2, true)?;
    let output = shortest_path(&graph, source, target, search_opts)?;

    print_output(&output, opts, |output| println!("{}", render(output)))
}

fn shortest_path(
    graph: &InputGraph,
    source: u64,
    target: u64,
    search_opts: &SearchOptions,
) -> anyhow::Result<PathOutput> {
    let result = search(graph, source, search_opts)?;

    let (Some(distance), Some(path)) = (result.distance(target)?, result.path(target)?) else {
        bail!("node {target} is not reachable from {source}");
    };

    Ok(PathOutput {
        source,
        target,
        distance,
        path,
    })
}

fn render(output: &PathOutput) -> String {
    let nodes: Vec<String> = output.path.iter().map(u64::to_string).collect();
    format!("{}\ndistance: {}", nodes.join(" -> "), output.distance)
}
