//! Undirected weighted graph with cache-friendly CSR adjacency.
//!
//! The store is built once through [`GraphBuilder`] and is immutable
//! afterwards. Algorithms borrow it read-only and write into caller-owned
//! buffers, so any number of threads may run queries against one `&Graph`
//! as long as each brings its own buffers.
//!
//! - [`traversal`]: breadth-first search and connected components
//! - [`shortest_path`]: Dijkstra with a lazy-deletion binary heap
//! - [`spanning`]: Kruskal minimum spanning forest
//! - [`verify`]: structural checks used as postconditions
//!
//! # Examples
//!
//! ```
//! use wgraph::graph::{Edge, Graph};
//!
//! let g = Graph::build(3, &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.5)]).unwrap();
//! assert_eq!(g.node_count(), 3);
//! assert_eq!(g.edge_count(), 2);
//! assert_eq!(g.neighbors(1).len(), 2);
//! ```

use std::fmt;

use crate::config::EngineConfig;
use crate::error::{GraphError, Result};

pub mod shortest_path;
pub mod spanning;
pub mod traversal;
pub mod verify;

pub use shortest_path::ShortestPathTree;
pub use spanning::{SpanningForest, UnionFind};
pub use traversal::BfsTree;

/// Graph node identifier (dense, zero-based).
pub type NodeId = u32;

/// Predecessor sentinel: the root of a tree, or a node that was not reached.
pub const INVALID_NODE: NodeId = NodeId::MAX;

/// BFS depth sentinel for unreached nodes.
pub const INVALID_DEPTH: u32 = u32::MAX;

/// Dijkstra distance sentinel for unreached nodes.
pub const INFINITE_DIST: f64 = f64::INFINITY;

/// Largest node count a graph can hold. `NodeId::MAX` is reserved for
/// [`INVALID_NODE`].
pub const MAX_NODES: usize = NodeId::MAX as usize - 1;

/// One endpoint's view of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// The node at the other end.
    pub node: NodeId,
    /// Edge weight.
    pub weight: f64,
}

/// Undirected weighted edge between `tail` and `head`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First endpoint.
    pub tail: NodeId,
    /// Second endpoint.
    pub head: NodeId,
    /// Edge weight.
    pub weight: f64,
}

impl Edge {
    /// Create an edge between `tail` and `head`.
    #[must_use]
    pub fn new(tail: NodeId, head: NodeId, weight: f64) -> Self {
        Self { tail, head, weight }
    }
}

impl From<(NodeId, NodeId, f64)> for Edge {
    fn from((tail, head, weight): (NodeId, NodeId, f64)) -> Self {
        Self::new(tail, head, weight)
    }
}

/// Node and edge counts of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummary {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of undirected edges.
    pub edges: usize,
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph with {} vertices and {} edges.",
            self.nodes, self.edges
        )
    }
}

/// Immutable undirected weighted graph.
///
/// Memory layout follows CSR: every undirected edge is stored as two
/// [`Neighbor`] records (one per endpoint) in a single flat vector, and
/// `offsets[v]..offsets[v + 1]` delimits the neighbors of `v`. Neighbor order
/// is the order in which edges were supplied to the builder.
#[derive(Debug, Clone)]
pub struct Graph {
    offsets: Vec<usize>,      // length = n_nodes + 1
    adjacency: Vec<Neighbor>, // length = 2 * n_edges
    n_nodes: usize,
    n_edges: usize,
    min_weight: f64, // +inf when the graph has no edges
    config: EngineConfig,
}

impl Graph {
    /// Build a graph with the default [`EngineConfig`].
    ///
    /// # Errors
    ///
    /// See [`GraphBuilder::build`].
    ///
    /// # Examples
    /// ```
    /// use wgraph::graph::{Edge, Graph};
    ///
    /// // Self-loops are rejected
    /// assert!(Graph::build(2, &[Edge::new(1, 1, 1.0)]).is_err());
    /// ```
    pub fn build(node_count: usize, edges: &[Edge]) -> Result<Self> {
        GraphBuilder::new(node_count).build(edges.iter().copied())
    }

    /// Get number of nodes in graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.n_nodes
    }

    /// Get number of undirected edges in graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// Neighbors of `node` in insertion order.
    ///
    /// Returns an empty slice for an out-of-range node.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        let v = node as usize;
        if v >= self.n_nodes {
            return &[];
        }
        &self.adjacency[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Weight of the edge between `tail` and `head`, if there is one.
    #[must_use]
    pub fn edge_weight(&self, tail: NodeId, head: NodeId) -> Option<f64> {
        self.neighbors(tail)
            .iter()
            .find(|nb| nb.node == head)
            .map(|nb| nb.weight)
    }

    /// Iterate over every undirected edge exactly once (`tail < head`).
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_nodes as NodeId).flat_map(move |tail| {
            self.neighbors(tail)
                .iter()
                .filter(move |nb| nb.node > tail)
                .map(move |nb| Edge::new(tail, nb.node, nb.weight))
        })
    }

    /// Whether any edge carries a negative weight.
    #[must_use]
    pub fn has_negative_weights(&self) -> bool {
        self.min_weight < 0.0
    }

    /// Whether two neighbor records of one node point at the same node.
    ///
    /// Sorts a copy of every neighbor list and scans for adjacent duplicates,
    /// O(E log E). The builder runs this once; a built graph always answers
    /// `false`.
    #[must_use]
    pub fn has_parallel_edges(&self) -> bool {
        has_parallel_edges(&self.offsets, &self.adjacency)
    }

    /// Node and edge counts.
    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.n_nodes,
            edges: self.n_edges,
        }
    }

    /// Engine options this graph runs its algorithms with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the engine options. The graph structure is untouched.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Panic unless `node` addresses a node of this graph.
    fn assert_node(&self, node: NodeId, what: &str) {
        assert!(
            (node as usize) < self.n_nodes,
            "{what} node {node} out of range (graph has {} nodes)",
            self.n_nodes
        );
    }

    /// Panic unless an output buffer is sized to the node count.
    fn assert_buffer(&self, name: &str, len: usize) {
        assert_eq!(
            len, self.n_nodes,
            "{name} buffer has length {len}, expected {}",
            self.n_nodes
        );
    }

    /// Turn a failed check into an error when verification is enabled.
    fn postcondition(
        &self,
        algorithm: &'static str,
        check: &'static str,
        holds: impl FnOnce() -> bool,
    ) -> Result<()> {
        if !self.config.verify_postconditions || holds() {
            return Ok(());
        }
        tracing::error!(algorithm, check, "postcondition violated");
        Err(GraphError::PostconditionViolated { algorithm, check })
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.summary().fmt(f)
    }
}

fn has_parallel_edges(offsets: &[usize], adjacency: &[Neighbor]) -> bool {
    let mut ids = Vec::new();
    offsets.windows(2).any(|w| {
        ids.clear();
        ids.extend(adjacency[w[0]..w[1]].iter().map(|nb| nb.node));
        ids.sort_unstable();
        ids.windows(2).any(|pair| pair[0] == pair[1])
    })
}

/// Validating constructor for [`Graph`].
///
/// # Examples
/// ```
/// use wgraph::graph::{Edge, GraphBuilder};
///
/// let g = GraphBuilder::new(3)
///     .declared_edge_count(2)
///     .build([Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)])
///     .unwrap();
/// assert_eq!(g.edge_count(), 2);
///
/// // Declared count does not match the edges supplied
/// let err = GraphBuilder::new(3)
///     .declared_edge_count(3)
///     .build([Edge::new(0, 1, 1.0)])
///     .unwrap_err();
/// assert!(err.is_malformed());
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    node_count: usize,
    declared_edges: Option<usize>,
    config: EngineConfig,
}

impl GraphBuilder {
    /// Start a builder for a graph with `node_count` nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            declared_edges: None,
            config: EngineConfig::default(),
        }
    }

    /// Require exactly `count` edges to be supplied to [`build`](Self::build).
    #[must_use]
    pub fn declared_edge_count(mut self, count: usize) -> Self {
        self.declared_edges = Some(count);
        self
    }

    /// Engine options for the built graph.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume `edges` and build the graph.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Capacity`] if the node count exceeds [`MAX_NODES`]
    /// - [`GraphError::MalformedInput`] if the node count is zero, an edge
    ///   endpoint is out of range, an edge is a self-loop, a weight is not
    ///   finite, the declared edge count does not match, or two edges join
    ///   the same pair of nodes
    pub fn build<I>(self, edges: I) -> Result<Graph>
    where
        I: IntoIterator<Item = Edge>,
    {
        let n_nodes = self.node_count;
        if n_nodes < 1 {
            return Err(GraphError::malformed("graph needs at least one node"));
        }
        if n_nodes > MAX_NODES {
            return Err(GraphError::Capacity {
                requested: n_nodes as u64,
                max: MAX_NODES as u64,
            });
        }

        // Adjacency lists first, flattened to CSR once all edges are in
        let mut adj_list: Vec<Vec<Neighbor>> = vec![Vec::new(); n_nodes];
        let mut n_edges = 0usize;
        let mut min_weight = f64::INFINITY;

        for edge in edges {
            if let Some(declared) = self.declared_edges {
                if n_edges >= declared {
                    return Err(GraphError::malformed(format!(
                        "too many edges: {declared} declared"
                    )));
                }
            }
            let Edge { tail, head, weight } = edge;
            if tail as usize >= n_nodes || head as usize >= n_nodes {
                return Err(GraphError::malformed(format!(
                    "edge ({tail}, {head}) references a node outside 0..{n_nodes}"
                )));
            }
            if tail == head {
                return Err(GraphError::malformed(format!(
                    "self-loop on node {tail} not allowed"
                )));
            }
            if !weight.is_finite() {
                return Err(GraphError::malformed(format!(
                    "edge ({tail}, {head}) has non-finite weight {weight}"
                )));
            }

            adj_list[tail as usize].push(Neighbor { node: head, weight });
            adj_list[head as usize].push(Neighbor { node: tail, weight });
            min_weight = min_weight.min(weight);
            n_edges += 1;
        }

        if let Some(declared) = self.declared_edges {
            if n_edges != declared {
                return Err(GraphError::malformed(format!(
                    "{declared} edges declared, got {n_edges}"
                )));
            }
        }

        let mut offsets = Vec::with_capacity(n_nodes + 1);
        let mut adjacency = Vec::with_capacity(2 * n_edges);
        offsets.push(0);
        for neighbors in &adj_list {
            adjacency.extend_from_slice(neighbors);
            offsets.push(adjacency.len());
        }

        if has_parallel_edges(&offsets, &adjacency) {
            return Err(GraphError::malformed("graph has parallel edges"));
        }

        tracing::debug!(nodes = n_nodes, edges = n_edges, "graph built");

        Ok(Graph {
            offsets,
            adjacency,
            n_nodes,
            n_edges,
            min_weight,
            config: self.config,
        })
    }
}


#[cfg(test)]
mod tests_verify_contract;
