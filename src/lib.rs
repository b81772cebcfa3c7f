//! adjgraph: in-memory adjacency-list graph.
//!
//! One [`Graph`] type covers four variants (directed or undirected, weighted
//! or unweighted), selected by a [`GraphConfig`] and switchable in place.
//! [`Bfs`] and [`Dfs`] are lazy traversal producers borrowed from a graph.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{TextReader, TextWriter};
pub use graph::{Bfs, Dfs, Graph, GraphBuilder, Neighbours, TraversalDirection, VertexId};
pub use types::{Edge, GraphConfig, GraphError, GraphResult, DEFAULT_WEIGHT};
