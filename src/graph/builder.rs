//! Fluent API for building Graph instances.

use crate::types::{GraphConfig, GraphResult};

use super::adjacency_graph::{Graph, VertexId};

/// Fluent builder for constructing a Graph.
///
/// Vertices and edges are recorded as given and validated together by
/// [`GraphBuilder::build`], which fails on the first rejected insertion.
pub struct GraphBuilder<V = String> {
    config: GraphConfig,
    vertices: Vec<V>,
    edges: Vec<(V, V, Option<f64>)>,
}

impl<V: VertexId> GraphBuilder<V> {
    /// Create a new builder for a directed, unweighted graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.config.directed = directed;
        self
    }

    pub fn weighted(mut self, weighted: bool) -> Self {
        self.config.weighted = weighted;
        self
    }

    /// Add a vertex.
    pub fn vertex(mut self, id: impl Into<V>) -> Self {
        self.vertices.push(id.into());
        self
    }

    /// Add several vertices.
    pub fn vertices<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        self.vertices.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add an unweighted edge between two declared vertices.
    pub fn edge(mut self, start: impl Into<V>, terminal: impl Into<V>) -> Self {
        self.edges.push((start.into(), terminal.into(), None));
        self
    }

    /// Add a weighted edge between two declared vertices.
    pub fn weighted_edge(mut self, start: impl Into<V>, terminal: impl Into<V>, weight: f64) -> Self {
        self.edges.push((start.into(), terminal.into(), Some(weight)));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::with_config(self.config);
        for vertex in self.vertices {
            graph.add_vertex(vertex)?;
        }
        for (start, terminal, weight) in self.edges {
            match weight {
                Some(w) => graph.add_weighted_edge(&start, &terminal, w)?,
                None => graph.add_edge(&start, &terminal)?,
            }
        }
        Ok(graph)
    }
}

impl<V: VertexId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
