//! All data types for the adjgraph library.

pub mod config;
pub mod edge;
pub mod error;

pub use config::GraphConfig;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Weight attached to every edge when an unweighted graph becomes weighted.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Header words of the text format.
pub const HEADER_DIRECTED: &str = "directed";
pub const HEADER_UNDIRECTED: &str = "undirected";
pub const HEADER_WEIGHTED: &str = "weighted";
pub const HEADER_UNWEIGHTED: &str = "unweighted";
