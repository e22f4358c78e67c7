use std::{io::Read, path::Path, str::FromStr};

use anyhow::{bail, Context};

/// One `u v [w]` line of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLine {
    pub u: u64,
    pub v: u64,
    pub weight: Option<i64>,
}

/// A parsed `N M [extra...]` header followed by `M` edge lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInput {
    pub node_count: u64,
    /// Header values after `N M`, such as the query nodes of `reach`.
    pub extra: Vec<u64>,
    pub edges: Vec<EdgeLine>,
}

/// Read the whole input from `path`, or from standard input when `None`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Parse a header of exactly `header_len` values followed by the edge lines.
///
/// Blank lines are skipped. A third value on an edge line is accepted as its
/// weight only when `weighted` is set.
pub fn parse(text: &str, header_len: usize, weighted: bool) -> anyhow::Result<GraphInput> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((line_no, header)) = lines.next() else {
        bail!("input is empty");
    };
    let values = header
        .split_whitespace()
        .map(|field| parse_field::<u64>(field, line_no))
        .collect::<anyhow::Result<Vec<u64>>>()?;
    if values.len() != header_len {
        bail!(
            "line {line_no}: expected {header_len} header values, found {}",
            values.len()
        );
    }

    let edge_count = usize::try_from(values[1])
        .with_context(|| format!("line {line_no}: edge count {} is too large", values[1]))?;

    let mut edges = Vec::new();
    for _ in 0..edge_count {
        let Some((line_no, line)) = lines.next() else {
            bail!("expected {edge_count} edges, found {}", edges.len());
        };
        edges.push(parse_edge(line, line_no, weighted)?);
    }

    if let Some((line_no, _)) = lines.next() {
        bail!("line {line_no}: unexpected data after {edge_count} edges");
    }

    Ok(GraphInput {
        node_count: values[0],
        extra: values[2..].to_vec(),
        edges,
    })
}

fn parse_edge(line: &str, line_no: usize, weighted: bool) -> anyhow::Result<EdgeLine> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [u, v] => Ok(EdgeLine {
            u: parse_field(u, line_no)?,
            v: parse_field(v, line_no)?,
            weight: None,
        }),
        [u, v, w] if weighted => Ok(EdgeLine {
            u: parse_field(u, line_no)?,
            v: parse_field(v, line_no)?,
            weight: Some(parse_field(w, line_no)?),
        }),
        _ => {
            let expected = if weighted { "u v [w]" } else { "u v" };
            bail!("line {line_no}: expected `{expected}`, found `{line}`")
        }
    }
}

fn parse_field<T>(field: &str, line_no: usize) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    field
        .parse()
        .with_context(|| format!("line {line_no}: invalid number `{field}`"))
}
