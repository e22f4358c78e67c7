mod app;
mod commands;
mod input;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })?;

    let cli = Cli::parse();

    // Show graphwalk info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("graphwalk", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Distances {
            graph,
            source,
            algorithm,
            max_relaxations,
            format,
        } => commands::distances::run(
            graph,
            *source,
            &commands::common::SearchOptions::parse(algorithm, *max_relaxations)?,
            format,
            &cli.global,
        ),
        Command::Reach { graph } => commands::reach::run(graph, &cli.global),
        Command::Path {
            graph,
            source,
            target,
            algorithm,
            max_relaxations,
        } => commands::path::run(
            graph,
            *source,
            *target,
            &commands::common::SearchOptions::parse(algorithm, *max_relaxations)?,
            &cli.global,
        ),
        Command::Dot { graph, name } => commands::dot::run(graph, name),
    }
}
