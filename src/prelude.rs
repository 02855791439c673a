//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use wgraph::prelude::*;
//! ```

pub use crate::config::{EngineConfig, LoaderConfig};
pub use crate::error::{GraphError, Result};
pub use crate::graph::{
    BfsTree, Edge, Graph, GraphBuilder, Neighbor, NodeId, ShortestPathTree, SpanningForest,
    INFINITE_DIST, INVALID_DEPTH, INVALID_NODE,
};
pub use crate::loader::{parse_graph, read_graph, GraphLoader};
