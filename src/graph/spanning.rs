//! Minimum spanning forest (Kruskal) and the union-find it runs on.

use super::{Edge, Graph, NodeId};
use crate::error::Result;

/// Disjoint-set forest with union by size and path compression.
///
/// # Examples
/// ```
/// use wgraph::graph::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1));
/// assert!(!uf.union(1, 0)); // already joined
/// assert_eq!(uf.count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let next = self.parent[x];
            self.parent[x] = self.parent[next]; // Path halving
            x = next;
        }
        x
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        // Smaller set hangs below the larger one
        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        self.count -= 1;
        true
    }

    /// Whether `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Minimum-weight spanning forest of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest {
    /// Sum of the weights of `edges`.
    pub total_weight: f64,
    /// Number of trees in the forest, one per connected component.
    pub num_components: usize,
    /// Forest edges in the order Kruskal accepted them.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Compute a minimum spanning forest with Kruskal's algorithm.
    ///
    /// Edges are stable-sorted by weight, so ties keep their adjacency order
    /// and the result is reproducible. Works on disconnected graphs: the
    /// forest has one tree per component.
    ///
    /// # Errors
    ///
    /// [`GraphError::PostconditionViolated`](crate::error::GraphError) if
    /// verification is enabled and the result is not a spanning forest.
    ///
    /// # Complexity
    /// O(m log m), dominated by the sort
    ///
    /// # Examples
    /// ```
    /// use wgraph::graph::{Edge, Graph};
    ///
    /// let g = Graph::build(3, &[
    ///     Edge::new(0, 1, 1.0),
    ///     Edge::new(1, 2, 2.0),
    ///     Edge::new(0, 2, 5.0),
    /// ]).unwrap();
    /// let forest = g.minimum_spanning_forest().unwrap();
    /// assert_eq!(forest.total_weight, 3.0);
    /// assert_eq!(forest.num_components, 1);
    /// ```
    pub fn minimum_spanning_forest(&self) -> Result<SpanningForest> {
        let mut edges: Vec<Edge> = self.edges().collect();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut components = UnionFind::new(self.n_nodes);
        let mut forest = Vec::with_capacity(self.n_nodes.saturating_sub(1));
        let mut total_weight = 0.0;

        for edge in edges {
            if components.union(edge.tail as usize, edge.head as usize) {
                total_weight += edge.weight;
                forest.push(edge);
            }
        }

        let result = SpanningForest {
            total_weight,
            num_components: components.count(),
            edges: forest,
        };
        tracing::trace!(
            total_weight,
            num_components = result.num_components,
            "kruskal finished"
        );

        self.postcondition("kruskal", "is_spanning_forest", || {
            self.is_spanning_forest(&result)
        })?;
        Ok(result)
    }

    /// Nodes of each tree of `forest`, `None` if an edge is out of range.
    #[must_use]
    pub fn forest_components(&self, forest: &SpanningForest) -> Option<Vec<Vec<NodeId>>> {
        let mut uf = UnionFind::new(self.n_nodes);
        for edge in &forest.edges {
            if edge.tail as usize >= self.n_nodes || edge.head as usize >= self.n_nodes {
                return None;
            }
            uf.union(edge.tail as usize, edge.head as usize);
        }

        let mut by_root: Vec<Option<usize>> = vec![None; self.n_nodes];
        let mut groups: Vec<Vec<NodeId>> = Vec::new();
        for node in 0..self.n_nodes {
            let root = uf.find(node);
            let idx = *by_root[root].get_or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[idx].push(node as NodeId);
        }
        Some(groups)
    }
}
