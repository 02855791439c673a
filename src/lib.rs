//! wgraph: undirected weighted-graph engine with self-verifying algorithms.
//!
//! A graph is built once, validated, and never mutated afterwards. Every
//! algorithm reads the graph and writes into caller-owned buffers; the
//! verification routines check those buffers before results are returned.
//!
//! # Quick Start
//!
//! ```
//! use wgraph::prelude::*;
//!
//! // 1-based text format: header, then one edge per line
//! let g = parse_graph("4 4\n1 2 1.0\n2 3 2.0\n3 4 1.0\n1 4 5.0\n").unwrap();
//!
//! let bfs = g.bfs_tree(0).unwrap();
//! assert_eq!(bfs.max_depth, 2);
//!
//! let spt = g.shortest_path_tree(0).unwrap();
//! assert_eq!(spt.dist, vec![0.0, 1.0, 3.0, 4.0]);
//!
//! let forest = g.minimum_spanning_forest().unwrap();
//! assert_eq!(forest.total_weight, 4.0);
//! assert_eq!(forest.num_components, g.component_count());
//! ```
//!
//! # Modules
//!
//! - [`graph`]: graph store, BFS, Dijkstra, Kruskal, verification
//! - [`loader`]: text graph format
//! - [`config`]: engine and loader options
//! - [`error`]: error type and `Result` alias

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod prelude;

pub use error::{GraphError, Result};
