//! Adjacency entries.

use serde::Serialize;

/// One outgoing entry in a vertex's adjacency sequence.
///
/// A graph stores only one kind of entry at a time, selected by its
/// `weighted` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Edge<V> {
    /// Neighbor identifier alone.
    Unweighted(V),
    /// Neighbor identifier and the edge weight.
    Weighted(V, f64),
}

impl<V> Edge<V> {
    /// The neighbor this entry points at.
    pub fn target(&self) -> &V {
        match self {
            Self::Unweighted(v) | Self::Weighted(v, _) => v,
        }
    }

    /// The weight, if this is a weighted entry.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Self::Unweighted(_) => None,
            Self::Weighted(_, w) => Some(*w),
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::Weighted(..))
    }

    /// Consume the entry, returning the neighbor identifier.
    pub fn into_target(self) -> V {
        match self {
            Self::Unweighted(v) | Self::Weighted(v, _) => v,
        }
    }

    /// Same neighbor, weight attached or replaced.
    pub fn with_weight(self, weight: f64) -> Self {
        Self::Weighted(self.into_target(), weight)
    }

    /// Same neighbor, weight stripped.
    pub fn without_weight(self) -> Self {
        Self::Unweighted(self.into_target())
    }

    /// Build an entry of the kind a graph with the given flag stores.
    pub(crate) fn from_parts(target: V, weight: Option<f64>) -> Self {
        match weight {
            Some(w) => Self::Weighted(target, w),
            None => Self::Unweighted(target),
        }
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unweighted(v) => write!(f, "{}", v),
            Self::Weighted(v, w) => write!(f, "{} (weight: {})", v, w),
        }
    }
}
