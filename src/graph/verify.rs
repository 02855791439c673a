//! Structural checks over algorithm outputs.
//!
//! These are pure functions of the graph and the buffers they inspect. The
//! algorithms call them as postconditions when
//! [`EngineConfig::verify_postconditions`](crate::config::EngineConfig) is
//! set, and they are public so callers can check results independently.

use super::{Edge, Graph, NodeId, SpanningForest, UnionFind, INFINITE_DIST, INVALID_NODE};

/// Relative slack when comparing a recomputed weight sum.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

impl Graph {
    /// Whether `pred` describes a tree rooted at `root`.
    ///
    /// Walks depth-first from `root` along every edge `(tail, head)` with
    /// `pred[head] == tail`. Reaching a node twice means a cycle. With
    /// `require_spanning`, every node of the graph must be reached as well.
    ///
    /// # Panics
    ///
    /// Panics if `root` is out of range or `pred` has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wgraph::graph::{Edge, Graph, INVALID_NODE};
    ///
    /// let g = Graph::build(3, &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)]).unwrap();
    /// assert!(g.is_tree(0, &[INVALID_NODE, 0, 1], true));
    /// assert!(!g.is_tree(0, &[INVALID_NODE, 0, INVALID_NODE], true)); // 2 not reached
    /// assert!(!g.is_tree(0, &[1, 0, 1], false)); // 0 <-> 1 cycle
    /// ```
    #[must_use]
    pub fn is_tree(&self, root: NodeId, pred: &[NodeId], require_spanning: bool) -> bool {
        self.assert_node(root, "root");
        self.assert_buffer("pred", pred.len());

        let mut visited = vec![false; self.n_nodes];
        let mut stack = vec![root];
        visited[root as usize] = true;

        while let Some(tail) = stack.pop() {
            for nb in self.neighbors(tail) {
                let head = nb.node as usize;
                if pred[head] != tail {
                    continue;
                }
                if visited[head] {
                    return false;
                }
                visited[head] = true;
                stack.push(nb.node);
            }
        }

        !require_spanning || visited.iter().all(|&v| v)
    }

    /// Whether `dist` and `pred` form a shortest-path tree rooted at `root`.
    ///
    /// Requires `dist[root] == 0` and `pred[root] == INVALID_NODE`. For every
    /// other node `n` with a finite distance:
    /// - every neighbor `m` has a finite distance,
    /// - no neighbor offers a shorter path: `dist[m] + w(m, n) >= dist[n]`,
    /// - exactly one neighbor is `pred[n]`.
    ///
    /// Only valid for undirected graphs with non-negative weights.
    ///
    /// # Panics
    ///
    /// Panics if `root` is out of range or a buffer has the wrong length.
    #[must_use]
    pub fn is_shortest_path_tree(&self, root: NodeId, dist: &[f64], pred: &[NodeId]) -> bool {
        self.assert_node(root, "root");
        self.assert_buffer("dist", dist.len());
        self.assert_buffer("pred", pred.len());

        if dist[root as usize] != 0.0 || pred[root as usize] != INVALID_NODE {
            return false;
        }

        for head in 0..self.n_nodes {
            if dist[head] == INFINITE_DIST || head == root as usize {
                continue;
            }

            let mut found_pred = false;
            for nb in self.neighbors(head as NodeId) {
                let tail = nb.node as usize;
                if dist[tail] == INFINITE_DIST {
                    return false;
                }
                if dist[tail] + nb.weight < dist[head] {
                    return false;
                }
                if nb.node == pred[head] {
                    if found_pred {
                        return false;
                    }
                    found_pred = true;
                }
            }
            if !found_pred {
                return false;
            }
        }

        true
    }

    /// Whether `forest` is a spanning forest of this graph.
    ///
    /// Every forest edge must be a graph edge with the same weight, the
    /// edges must be acyclic, every graph edge must join two nodes of the
    /// same tree, `num_components` must match the number of trees, and
    /// `total_weight` must match the edge weights.
    ///
    /// Minimality is not checked.
    #[must_use]
    pub fn is_spanning_forest(&self, forest: &SpanningForest) -> bool {
        if forest.edges.len() + forest.num_components != self.n_nodes {
            return false;
        }

        // Sorted (low, high) pairs so each forest edge is a binary search
        let mut graph_edges: Vec<Edge> = self.edges().collect();
        graph_edges.sort_unstable_by_key(|edge| (edge.tail, edge.head));

        let mut uf = UnionFind::new(self.n_nodes);
        let mut weight_sum = 0.0;
        for edge in &forest.edges {
            let key = (edge.tail.min(edge.head), edge.tail.max(edge.head));
            let found = graph_edges
                .binary_search_by_key(&key, |e| (e.tail, e.head))
                .ok()
                .map(|idx| graph_edges[idx].weight);
            if found != Some(edge.weight) {
                return false;
            }
            if !uf.union(edge.tail as usize, edge.head as usize) {
                return false;
            }
            weight_sum += edge.weight;
        }

        let spans = graph_edges
            .iter()
            .all(|edge| uf.connected(edge.tail as usize, edge.head as usize));
        if !spans || uf.count() != forest.num_components {
            return false;
        }

        let scale = weight_sum.abs().max(forest.total_weight.abs()).max(1.0);
        (weight_sum - forest.total_weight).abs() <= WEIGHT_SUM_TOLERANCE * scale
    }
}
