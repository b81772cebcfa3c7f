//! Adjacency-list graph, its construction, reconfiguration and traversal.

pub mod adjacency_graph;
pub mod builder;
pub mod reconfigure;
pub mod traversal;

pub use adjacency_graph::{Graph, Neighbours, VertexId};
pub use builder::GraphBuilder;
pub use traversal::{Bfs, Dfs, TraversalDirection};
