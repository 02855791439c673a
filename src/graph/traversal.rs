//! Breadth-first search and connected-component counting.

use std::collections::VecDeque;

use super::{Graph, NodeId, INVALID_DEPTH, INVALID_NODE};
use crate::error::Result;

/// Owned result of a breadth-first search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    pub root: NodeId,
    /// Hop count from the root, [`INVALID_DEPTH`] if unreached.
    pub depth: Vec<u32>,
    /// BFS-tree parent, [`INVALID_NODE`] for the root and unreached nodes.
    pub pred: Vec<NodeId>,
    /// Largest depth reached (eccentricity of the root in its component).
    pub max_depth: u32,
}

impl BfsTree {
    /// Whether `node` was reached from the root.
    #[must_use]
    pub fn is_reached(&self, node: NodeId) -> bool {
        self.depth
            .get(node as usize)
            .is_some_and(|&d| d != INVALID_DEPTH)
    }

    /// Number of nodes in the root's component.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.depth.iter().filter(|&&d| d != INVALID_DEPTH).count()
    }
}

impl Graph {
    /// Depth and predecessor buffers pre-filled with sentinels.
    #[must_use]
    pub fn bfs_buffers(&self) -> (Vec<u32>, Vec<NodeId>) {
        (
            vec![INVALID_DEPTH; self.n_nodes],
            vec![INVALID_NODE; self.n_nodes],
        )
    }

    /// Breadth-first search from `start`.
    ///
    /// `depth` and `pred` must be sized to [`node_count`](Self::node_count)
    /// and hold sentinels for every node that should be explored (see
    /// [`bfs_buffers`](Self::bfs_buffers)). Neighbors are visited in
    /// adjacency order. Nodes outside the component of `start` keep their
    /// sentinels.
    ///
    /// # Returns
    /// The maximum depth reached.
    ///
    /// # Errors
    ///
    /// [`GraphError::PostconditionViolated`](crate::error::GraphError) if
    /// verification is enabled and `pred` is not a tree rooted at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of range or a buffer has the wrong length.
    ///
    /// # Complexity
    /// O(n + m)
    ///
    /// # Examples
    /// ```
    /// use wgraph::graph::{Edge, Graph};
    ///
    /// let g = Graph::build(3, &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)]).unwrap();
    /// let (mut depth, mut pred) = g.bfs_buffers();
    /// assert_eq!(g.bfs(0, &mut depth, &mut pred).unwrap(), 2);
    /// assert_eq!(depth, vec![0, 1, 2]);
    /// ```
    pub fn bfs(&self, start: NodeId, depth: &mut [u32], pred: &mut [NodeId]) -> Result<u32> {
        self.assert_node(start, "start");
        self.assert_buffer("depth", depth.len());
        self.assert_buffer("pred", pred.len());

        let max_depth = self.bfs_fill(start, depth, pred);
        tracing::trace!(start, max_depth, "bfs finished");

        self.postcondition("bfs", "is_tree", || self.is_tree(start, pred, false))?;
        Ok(max_depth)
    }

    /// Breadth-first search into freshly allocated buffers.
    ///
    /// # Errors
    ///
    /// See [`bfs`](Self::bfs).
    pub fn bfs_tree(&self, start: NodeId) -> Result<BfsTree> {
        let (mut depth, mut pred) = self.bfs_buffers();
        let max_depth = self.bfs(start, &mut depth, &mut pred)?;
        Ok(BfsTree {
            root: start,
            depth,
            pred,
            max_depth,
        })
    }

    /// Count connected components by running BFS from every node that no
    /// earlier run reached.
    ///
    /// # Complexity
    /// O(n + m) in total
    ///
    /// # Examples
    /// ```
    /// use wgraph::graph::{Edge, Graph};
    ///
    /// // (0,1) and (2,3) plus isolated node 4
    /// let g = Graph::build(5, &[Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)]).unwrap();
    /// assert_eq!(g.component_count(), 3);
    /// ```
    #[must_use]
    pub fn component_count(&self) -> usize {
        let (mut depth, mut pred) = self.bfs_buffers();
        let mut count = 0;

        for node in 0..self.n_nodes {
            if depth[node] == INVALID_DEPTH {
                self.bfs_fill(node as NodeId, &mut depth, &mut pred);
                count += 1;
            }
        }

        count
    }

    /// BFS core without argument checks or verification.
    fn bfs_fill(&self, start: NodeId, depth: &mut [u32], pred: &mut [NodeId]) -> u32 {
        let mut queue = VecDeque::new();
        let mut max_depth = 0;

        depth[start as usize] = 0;
        queue.push_back(start);

        while let Some(tail) = queue.pop_front() {
            let next = depth[tail as usize] + 1;

            for nb in self.neighbors(tail) {
                let head = nb.node as usize;
                if depth[head] == INVALID_DEPTH {
                    depth[head] = next;
                    pred[head] = tail;
                    max_depth = next;
                    queue.push_back(nb.node);
                }
            }
        }

        max_depth
    }
}
