use crate::{app::GraphOptions, commands::common::load_graph};

pub fn run(graph_opts: &GraphOptions, name: &str) -> anyhow::Result<()> {
    let (_, graph) = load_graph(graph_opts, 2, true)?;
    println!("{}", graph.to_dot(Some(name)));
    Ok(())
}
