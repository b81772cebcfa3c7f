//! Graph variant configuration.

use serde::{Deserialize, Serialize};

use super::{HEADER_DIRECTED, HEADER_UNDIRECTED, HEADER_UNWEIGHTED, HEADER_WEIGHTED};

/// The two orthogonal flags that select a graph variant.
///
/// The default is directed and unweighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphConfig {
    pub directed: bool,
    pub weighted: bool,
}

impl GraphConfig {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }

    pub fn directed_unweighted() -> Self {
        Self::new(true, false)
    }

    pub fn directed_weighted() -> Self {
        Self::new(true, true)
    }

    pub fn undirected_unweighted() -> Self {
        Self::new(false, false)
    }

    pub fn undirected_weighted() -> Self {
        Self::new(false, true)
    }

    /// Parse a `"<directed|undirected> <weighted|unweighted>"` header.
    pub fn from_header(header: &str) -> Option<Self> {
        let mut words = header.split_whitespace();
        let directed = match words.next()? {
            HEADER_DIRECTED => true,
            HEADER_UNDIRECTED => false,
            _ => return None,
        };
        let weighted = match words.next()? {
            HEADER_WEIGHTED => true,
            HEADER_UNWEIGHTED => false,
            _ => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(Self { directed, weighted })
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::directed_unweighted()
    }
}

impl std::fmt::Display for GraphConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = if self.directed {
            HEADER_DIRECTED
        } else {
            HEADER_UNDIRECTED
        };
        let w = if self.weighted {
            HEADER_WEIGHTED
        } else {
            HEADER_UNWEIGHTED
        };
        write!(f, "{} {}", d, w)
    }
}
