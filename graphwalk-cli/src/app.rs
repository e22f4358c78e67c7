use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// graphwalk - reachability, shortest paths and DOT export for edge-list input
#[derive(Debug, Parser)]
#[command(name = "graphwalk", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// How the input graph is stored and interpreted.
#[derive(Debug, Args)]
pub struct GraphOptions {
    /// Input file; reads standard input when omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Edge representation: edge-list, matrix, or list.
    #[arg(short, long, default_value = "list")]
    pub representation: String,

    /// Treat edges as directed (`u -> v` only).
    #[arg(short, long)]
    pub directed: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the distance from the source to every node `1..=N` (`-1` if unreachable).
    ///
    /// Input: `N M`, then `M` lines `u v [w]`.
    Distances {
        #[command(flatten)]
        graph: GraphOptions,

        /// Source node.
        #[arg(short, long, default_value_t = 1)]
        source: u64,

        /// Algorithm: bfs, spfa, or bellman-ford.
        #[arg(short, long, default_value = "spfa")]
        algorithm: String,

        /// Give up after this many relaxations (spfa and bellman-ford).
        #[arg(long, value_name = "COUNT")]
        max_relaxations: Option<usize>,

        /// Output format: text, table, json.
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Answer whether node `B` is reachable from node `A`.
    ///
    /// Input: `N M A B`, then `M` lines `u v`.
    Reach {
        #[command(flatten)]
        graph: GraphOptions,
    },

    /// Print the shortest path between two nodes.
    ///
    /// Input: `N M`, then `M` lines `u v [w]`.
    Path {
        #[command(flatten)]
        graph: GraphOptions,

        /// Source node.
        #[arg(short, long)]
        source: u64,

        /// Target node.
        #[arg(short, long)]
        target: u64,

        /// Algorithm: bfs, spfa, or bellman-ford.
        #[arg(short, long, default_value = "spfa")]
        algorithm: String,

        /// Give up after this many relaxations (spfa and bellman-ford).
        #[arg(long, value_name = "COUNT")]
        max_relaxations: Option<usize>,
    },

    /// Render the input graph in Graphviz DOT format.
    ///
    /// Input: `N M`, then `M` lines `u v [w]`.
    Dot {
        #[command(flatten)]
        graph: GraphOptions,

        /// Name of the emitted graph.
        #[arg(long, default_value = "graph")]
        name: String,
    },
}
