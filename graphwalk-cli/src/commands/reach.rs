use anyhow::Context;
use graphwalk::graph::{DepthFirstSearch, Traversal};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, GraphOptions},
    commands::common::{load_graph, InputGraph},
    input::GraphInput,
    output::print_output,
};

#[derive(Debug, Serialize)]
struct ReachOutput {
    source: u64,
    target: u64,
    reachable: bool,
}

pub fn run(graph_opts: &GraphOptions, opts: &GlobalOptions) -> anyhow::Result<()> {
    let (input, graph) = load_graph(graph_opts, 4, false)?;
    let output = reach(&input, &graph)?;

    print_output(&output, opts, |output| println!("{}", answer(output)))
}

/// Whether the target named in the header is reachable from its source.
fn reach(input: &GraphInput, graph: &InputGraph) -> anyhow::Result<ReachOutput> {
    let [source, target] = <[u64; 2]>::try_from(input.extra.as_slice())
        .context("header must end with the source and target nodes")?;

    let dfs = DepthFirstSearch::new(graph, source);
    Ok(ReachOutput {
        source,
        target,
        reachable: dfs.visited(&target),
    })
}

fn answer(output: &ReachOutput) -> &'static str {
    if output.reachable {
        "yes"
    } else {
        "no"
    }
}
