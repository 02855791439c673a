//! Single-source shortest paths (Dijkstra, label setting).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Graph, NodeId, INFINITE_DIST, INVALID_NODE};
use crate::error::Result;

/// Priority queue entry.
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Owned result of a shortest-path computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    pub root: NodeId,
    /// Distance from the root, [`INFINITE_DIST`] if unreached.
    pub dist: Vec<f64>,
    /// Predecessor on a shortest path, [`INVALID_NODE`] for the root and
    /// unreached nodes.
    pub pred: Vec<NodeId>,
}

impl ShortestPathTree {
    /// Distance from the root to `target`, `None` if unreachable.
    #[must_use]
    pub fn distance_to(&self, target: NodeId) -> Option<f64> {
        self.dist
            .get(target as usize)
            .copied()
            .filter(|d| *d != INFINITE_DIST)
    }

    /// Nodes on the shortest path from the root to `target`, both included.
    ///
    /// Returns `None` if `target` is unreachable or the predecessor chain
    /// does not lead back to the root.
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
    /// let spt = g.shortest_path_tree(0).unwrap();
    /// assert_eq!(spt.path_to(2), Some(vec![0, 1, 2]));
    /// assert_eq!(spt.distance_to(2), Some(3.0));
    /// ```
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.root {
            current = *self.pred.get(current as usize)?;
            // A chain longer than the node count has a cycle
            if current == INVALID_NODE || path.len() > self.pred.len() {
                return None;
            }
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

impl Graph {
    /// Distance and predecessor buffers pre-filled with sentinels.
    #[must_use]
    pub fn dijkstra_buffers(&self) -> (Vec<f64>, Vec<NodeId>) {
        (
            vec![INFINITE_DIST; self.n_nodes],
            vec![INVALID_NODE; self.n_nodes],
        )
    }

    /// Compute shortest distances from `start` with Dijkstra's algorithm.
    ///
    /// With `reinitialize`, `dist` is reset to [`INFINITE_DIST`] and `pred`
    /// to [`INVALID_NODE`] first. Without it, the current contents are used
    /// as a warm start: distances are only ever lowered, never raised, so a
    /// warm start is only meaningful from the same `start` on this graph.
    ///
    /// Stale heap entries are skipped on pop instead of decreasing keys.
    ///
    /// # Errors
    ///
    /// [`GraphError::PostconditionViolated`](crate::error::GraphError) if
    /// verification is enabled and the result is not a shortest-path tree.
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of range, a buffer has the wrong length, or
    /// the graph contains a negative edge weight.
    ///
    /// # Complexity
    /// * Time: O((n + m) log n)
    /// * Space: O(m) for the heap
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
    /// let (mut dist, mut pred) = g.dijkstra_buffers();
    /// g.shortest_paths(0, &mut dist, &mut pred, true).unwrap();
    /// assert_eq!(dist, vec![0.0, 1.0, 3.0]); // 0->1->2 beats 0->2
    /// ```
    pub fn shortest_paths(
        &self,
        start: NodeId,
        dist: &mut [f64],
        pred: &mut [NodeId],
        reinitialize: bool,
    ) -> Result<()> {
        self.assert_node(start, "start");
        self.assert_buffer("dist", dist.len());
        self.assert_buffer("pred", pred.len());
        assert!(
            !self.has_negative_weights(),
            "Dijkstra's algorithm requires non-negative edge weights. \
             Found negative weight {}",
            self.min_weight
        );

        if reinitialize {
            dist.fill(INFINITE_DIST);
            pred.fill(INVALID_NODE);
        }
        dist[start as usize] = 0.0;
        pred[start as usize] = INVALID_NODE;

        let mut heap = BinaryHeap::new();
        heap.push(State {
            cost: 0.0,
            node: start,
        });
        let mut settled = 0usize;

        while let Some(State { cost, node }) = heap.pop() {
            // Skip if we've already found a better path
            if cost > dist[node as usize] {
                continue;
            }
            settled += 1;

            for nb in self.neighbors(node) {
                let next_cost = cost + nb.weight;
                let head = nb.node as usize;

                if next_cost < dist[head] {
                    dist[head] = next_cost;
                    pred[head] = node;
                    heap.push(State {
                        cost: next_cost,
                        node: nb.node,
                    });
                }
            }
        }
        tracing::trace!(start, settled, reinitialize, "dijkstra finished");

        self.postcondition("dijkstra", "is_tree", || self.is_tree(start, pred, false))?;
        self.postcondition("dijkstra", "is_shortest_path_tree", || {
            self.is_shortest_path_tree(start, dist, pred)
        })
    }

    /// Shortest paths from `start` into freshly allocated buffers.
    ///
    /// # Errors
    ///
    /// See [`shortest_paths`](Self::shortest_paths).
    pub fn shortest_path_tree(&self, start: NodeId) -> Result<ShortestPathTree> {
        let (mut dist, mut pred) = self.dijkstra_buffers();
        self.shortest_paths(start, &mut dist, &mut pred, true)?;
        Ok(ShortestPathTree {
            root: start,
            dist,
            pred,
        })
    }
}
