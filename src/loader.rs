//! Text loader for graph files.
//!
//! Format: a header line `<nodes> <edges>`, then exactly `<edges>` lines of
//! `<tail> <head> <weight>`. Node numbers start at
//! [`LoaderConfig::index_base`] (1 by default) and are shifted to zero-based
//! [`NodeId`]s. Blank lines at the end of the file are ignored; any other
//! line that does not match the format is an error carrying its line number.
//!
//! # Examples
//!
//! ```
//! use wgraph::loader::parse_graph;
//!
//! let g = parse_graph("3 2\n1 2 1.5\n2 3 2.0\n").unwrap();
//! assert_eq!(g.node_count(), 3);
//! assert_eq!(g.edge_count(), 2);
//! assert_eq!(g.neighbors(0)[0].node, 1);
//! ```

use std::path::Path;

use crate::config::LoaderConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, GraphBuilder, NodeId, MAX_NODES};

/// Reads graphs in the text format with a fixed [`LoaderConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphLoader {
    config: LoaderConfig,
}

impl GraphLoader {
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read and parse the graph file at `path`.
    ///
    /// # Errors
    ///
    /// [`GraphError::Io`] if the file cannot be read, otherwise see
    /// [`parse`](Self::parse).
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Graph> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading graph");
        let text = std::fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Parse a graph from its text form.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Capacity`] if the node count is too large
    /// - [`GraphError::MalformedInput`] for a missing or illegal header, a
    ///   syntax error, a node number out of range, a self-loop, a
    ///   non-finite weight, more or fewer edges than declared, or parallel
    ///   edges
    pub fn parse(&self, text: &str) -> Result<Graph> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let header = lines.first().copied().unwrap_or_default();
        let (nodes, declared) = parse_header(header)?;

        let base = i64::from(self.config.index_base);
        // The header count is untrusted; only the lines present bound it
        let mut edges = Vec::with_capacity(declared.min(lines.len().saturating_sub(1)));

        for (idx, line) in lines.iter().enumerate().skip(1) {
            let line_no = idx + 1;
            if edges.len() >= declared {
                return Err(GraphError::malformed_at(line_no, "too many edges"));
            }
            edges.push(parse_edge(line_no, line, nodes, base)?);
        }

        if edges.len() != declared {
            return Err(GraphError::malformed_at(
                lines.len() + 1,
                format!(
                    "unexpected EOF: {declared} edges expected, got {}",
                    edges.len()
                ),
            ));
        }

        let graph = GraphBuilder::new(nodes)
            .declared_edge_count(declared)
            .config(self.config.engine)
            .build(edges)?;
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }
}

/// Parse a graph in the default (1-based) format.
///
/// # Errors
///
/// See [`GraphLoader::parse`].
pub fn parse_graph(text: &str) -> Result<Graph> {
    GraphLoader::default().parse(text)
}

/// Read a graph file in the default (1-based) format.
///
/// # Errors
///
/// See [`GraphLoader::read`].
pub fn read_graph(path: impl AsRef<Path>) -> Result<Graph> {
    GraphLoader::default().read(path)
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let illegal = || GraphError::malformed_at(1, "node or edge count missing or illegal");

    let mut fields = line.split_whitespace();
    let nodes: i64 = fields.next().and_then(|f| f.parse().ok()).ok_or_else(illegal)?;
    let edges: i64 = fields.next().and_then(|f| f.parse().ok()).ok_or_else(illegal)?;
    if fields.next().is_some() || nodes < 1 || edges < 0 {
        return Err(illegal());
    }

    if nodes as u64 > MAX_NODES as u64 {
        return Err(GraphError::Capacity {
            requested: nodes as u64,
            max: MAX_NODES as u64,
        });
    }
    let edges = usize::try_from(edges).map_err(|_| illegal())?;
    Ok((nodes as usize, edges))
}

fn parse_edge(line_no: usize, line: &str, nodes: usize, base: i64) -> Result<Edge> {
    let syntax = || GraphError::malformed_at(line_no, format!("syntax error: {line}"));

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [tail, head, weight] = fields.as_slice() else {
        return Err(syntax());
    };
    let tail: i64 = tail.parse().map_err(|_| syntax())?;
    let head: i64 = head.parse().map_err(|_| syntax())?;

    let last = base + nodes as i64 - 1;
    if !(base..=last).contains(&tail) || !(base..=last).contains(&head) {
        return Err(GraphError::malformed_at(
            line_no,
            format!("node number outside {base}..{last}"),
        ));
    }
    if tail == head {
        return Err(GraphError::malformed_at(line_no, "loops not allowed"));
    }

    let weight: f64 = weight.parse().map_err(|_| syntax())?;
    if !weight.is_finite() {
        return Err(GraphError::malformed_at(
            line_no,
            format!("weight {weight} is not finite"),
        ));
    }

    // In range, so the shifted ids fit NodeId
    Ok(Edge::new(
        (tail - base) as NodeId,
        (head - base) as NodeId,
        weight,
    ))
}
