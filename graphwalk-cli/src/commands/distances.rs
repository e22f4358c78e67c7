use anyhow::bail;
use serde::Serialize;

use crate::{
    app::{GlobalOptions, GraphOptions},
    commands::common::{load_graph, search, InputGraph, SearchOptions},
    output::{print_json, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct NodeDistance {
    node: u64,
    /// `None` when the node is unreachable.
    distance: Option<i64>,
}

#[derive(Debug, Serialize)]
struct DistancesOutput {
    source: u64,
    algorithm: String,
    nodes: Vec<NodeDistance>,
}

pub fn run(
    graph_opts: &GraphOptions,
    source: u64,
    search_opts: &SearchOptions,
    format: &str,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let (input, graph) = load_graph(graph_opts, 2, true)?;
    let output = distances(&graph, input.node_count, source, search_opts)?;

    match format {
        "json" => print_json(&output),
        "text" => print_output(&output, opts, |output| println!("{}", render_text(output))),
        "table" => print_output(&output, opts, |output| println!("{}", render_table(output))),
        other => bail!("unknown format '{other}' (expected text, table, or json)"),
    }
}

/// Distances from `source` to every node `1..=node_count`.
fn distances(
    graph: &InputGraph,
    node_count: u64,
    source: u64,
    search_opts: &SearchOptions,
) -> anyhow::Result<DistancesOutput> {
    let result = search(graph, source, search_opts)?;

    let mut nodes = Vec::new();
    for node in 1..=node_count {
        nodes.push(NodeDistance {
            node,
            distance: result.distance(node)?,
        });
    }

    Ok(DistancesOutput {
        source,
        algorithm: search_opts.algorithm.name().to_string(),
        nodes,
    })
}

/// One distance per line, `-1` for unreachable nodes.
fn render_text(output: &DistancesOutput) -> String {
    let lines: Vec<String> = output
        .nodes
        .iter()
        .map(|entry| entry.distance.unwrap_or(-1).to_string())
        .collect();
    lines.join("\n")
}

fn render_table(output: &DistancesOutput) -> String {
    let mut tw = TabWriter::new(vec![("Node", Align::Left), ("Distance", Align::Right)]);
    for entry in &output.nodes {
        let distance = entry
            .distance
            .map_or_else(|| "unreachable".to_string(), |d| d.to_string());
        tw.row(vec![entry.node.to_string(), distance]);
    }
    tw.render()
}
