//! DOT format utilities for graph visualization.
//!
//! [`DotWriter`] assembles a Graphviz document statement by statement; every
//! identifier and label it receives is quoted and escaped with [`escape_dot`].

use std::fmt::{Display, Write};

/// Escapes a string for safe use inside a quoted DOT identifier or label.
///
/// Handles the characters with special meaning in DOT: quotes, backslashes,
/// line breaks and angle brackets.
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Incremental builder for a single DOT graph.
pub struct DotWriter {
    output: String,
    connector: &'static str,
}

impl DotWriter {
    /// Opens a `digraph` (directed) or `graph` (undirected) named `name`.
    pub fn new(name: &str, directed: bool) -> Self {
        let (keyword, connector) = if directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        DotWriter {
            output: format!("{keyword} \"{}\" {{\n", escape_dot(name)),
            connector,
        }
    }

    /// Declares a node.
    pub fn node(&mut self, node: &impl Display) {
        let _ = writeln!(self.output, "  \"{}\";", escape_dot(&node.to_string()));
    }

    /// Adds an edge statement with an optional label.
    pub fn edge(&mut self, from: &impl Display, to: &impl Display, label: Option<&dyn Display>) {
        let _ = write!(
            self.output,
            "  \"{}\" {} \"{}\"",
            escape_dot(&from.to_string()),
            self.connector,
            escape_dot(&to.to_string())
        );
        if let Some(label) = label {
            let _ = write!(self.output, " [label=\"{}\"]", escape_dot(&label.to_string()));
        }
        self.output.push_str(";\n");
    }

    /// Closes the graph and returns the document.
    pub fn finish(mut self) -> String {
        self.output.push('}');
        self.output
    }
}
