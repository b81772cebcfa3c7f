//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
///
/// Vertex identifiers are carried in their `Display` form so the error type
/// stays independent of the graph's identifier type.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex already present.
    #[error("Vertex {0} already in graph")]
    DuplicateVertex(String),

    /// Vertex not present.
    #[error("Vertex {0} not in graph")]
    UnknownVertex(String),

    /// An edge already exists for the ordered pair.
    #[error("Edge {start} -> {terminal} already exists")]
    DuplicateEdge { start: String, terminal: String },

    /// No edge exists for the ordered pair.
    #[error("Edge {start} -> {terminal} does not exist")]
    EdgeNotFound { start: String, terminal: String },

    /// Weight operation on an unweighted graph.
    #[error("Graph is unweighted")]
    UnweightedGraph,

    /// Edge without a weight added to a weighted graph.
    #[error("Edge {start} -> {terminal} requires a weight")]
    WeightRequired { start: String, terminal: String },

    /// Weight is NaN or infinite.
    #[error("Weight must be finite: {0}")]
    InvalidWeight(f64),

    /// Structural invariant broken.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    /// Identifier whose rendering cannot be read back from a text dump.
    #[error("Vertex identifier {0:?} cannot be written to a text dump")]
    InvalidIdentifier(String),

    /// Malformed text dump.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn duplicate_edge(start: impl ToString, terminal: impl ToString) -> Self {
        Self::DuplicateEdge {
            start: start.to_string(),
            terminal: terminal.to_string(),
        }
    }

    pub(crate) fn edge_not_found(start: impl ToString, terminal: impl ToString) -> Self {
        Self::EdgeNotFound {
            start: start.to_string(),
            terminal: terminal.to_string(),
        }
    }

    pub(crate) fn weight_required(start: impl ToString, terminal: impl ToString) -> Self {
        Self::WeightRequired {
            start: start.to_string(),
            terminal: terminal.to_string(),
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
