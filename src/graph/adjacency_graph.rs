//! Core graph structure: an insertion-ordered map from vertex to its
//! outgoing adjacency sequence.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};
use log::debug;

use crate::types::{Edge, GraphConfig, GraphError, GraphResult};

/// Bounds every vertex identifier satisfies.
pub trait VertexId: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> VertexId for T {}

/// In-memory adjacency-list graph.
///
/// Undirected graphs store every edge twice, once in each endpoint's
/// sequence, except self-loops which are stored once.
#[derive(Debug, Clone)]
pub struct Graph<V = String> {
    /// Vertex -> outgoing entries, in insertion order.
    pub(crate) adjacency: IndexMap<V, Vec<Edge<V>>>,
    pub(crate) config: GraphConfig,
}

impl<V: VertexId> Graph<V> {
    /// Create an empty directed, unweighted graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph of the given variant.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: IndexMap::new(),
            config,
        }
    }

    /// Create a graph from a pre-populated adjacency mapping.
    ///
    /// Every key becomes a vertex and every entry an edge. On undirected
    /// graphs a mirror may be listed explicitly (with the same weight) or
    /// left out, in which case it is added.
    pub fn from_adjacency<I>(config: GraphConfig, adjacency: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (V, Vec<Edge<V>>)>,
    {
        let entries: Vec<(V, Vec<Edge<V>>)> = adjacency.into_iter().collect();
        let mut graph = Self::with_config(config);

        for (vertex, _) in &entries {
            graph.add_vertex(vertex.clone())?;
        }

        let mut listed: HashSet<(V, V)> = HashSet::new();
        for (start, edges) in entries {
            for edge in edges {
                let weight = edge.weight();
                let terminal = edge.into_target();
                if !listed.insert((start.clone(), terminal.clone())) {
                    return Err(GraphError::duplicate_edge(&start, &terminal));
                }
                graph.append_entry(&start, &terminal, weight)?;
            }
        }
        graph
            .pair_mirrors()
            .map_err(|(start, terminal)| GraphError::duplicate_edge(start, terminal))?;

        Ok(graph)
    }

    /// Append a single adjacency entry, leaving its mirror alone.
    ///
    /// Callers that build undirected graphs this way must finish with
    /// [`pair_mirrors`](Self::pair_mirrors).
    pub(crate) fn append_entry(
        &mut self,
        start: &V,
        terminal: &V,
        weight: Option<f64>,
    ) -> GraphResult<()> {
        let (s, s_key) = self.resolve(start)?;
        let (_, t_key) = self.resolve(terminal)?;
        self.check_entry(s, &s_key, &t_key, weight)?;
        self.adjacency[s].push(Edge::from_parts(t_key, weight));
        Ok(())
    }

    /// On undirected graphs, append every missing mirror to the end of its
    /// terminal's sequence. Entries that already have a mirror keep their
    /// position. Returns the first pair whose mirror carries another weight.
    pub(crate) fn pair_mirrors(&mut self) -> Result<(), (V, V)> {
        if self.config.directed {
            return Ok(());
        }
        let entries: Vec<(V, V, Option<f64>)> = self
            .adjacency
            .iter()
            .flat_map(|(v, edges)| {
                edges
                    .iter()
                    .map(move |e| (v.clone(), e.target().clone(), e.weight()))
            })
            .collect();

        for (start, terminal, weight) in entries {
            if start == terminal {
                continue;
            }
            match self.entry(&terminal, &start).map(Edge::weight) {
                Some(w) if w == weight => {}
                Some(_) => return Err((start, terminal)),
                None => {
                    if let Some(edges) = self.adjacency.get_mut(&terminal) {
                        edges.push(Edge::from_parts(start, weight));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    /// Number of vertices.
    pub fn get_v(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored adjacency entries. Undirected edges count twice,
    /// undirected self-loops once.
    pub fn get_e(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains_vertex<Q>(&self, id: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.adjacency.contains_key(id)
    }

    /// Snapshot of all vertex identifiers, in insertion order.
    pub fn get_vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Iterate over every vertex with its outgoing entries.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[Edge<V>])> {
        self.adjacency.iter().map(|(v, edges)| (v, edges.as_slice()))
    }

    /// Add a vertex with no edges.
    pub fn add_vertex(&mut self, id: impl Into<V>) -> GraphResult<()> {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id.to_string()));
        }
        debug!("add vertex {}", id);
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex<Q>(&mut self, id: &Q) -> GraphResult<()>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let (_, removed, outgoing) = self
            .adjacency
            .shift_remove_full(id)
            .ok_or_else(|| GraphError::UnknownVertex(id.to_string()))?;

        let mut incoming = 0;
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|e| e.target() != &removed);
            incoming += before - edges.len();
        }

        debug!(
            "remove vertex {} ({} outgoing, {} incoming entries dropped)",
            removed,
            outgoing.len(),
            incoming
        );
        Ok(())
    }

    /// Add an unweighted edge. Fails with `WeightRequired` on weighted graphs.
    pub fn add_edge<Q>(&mut self, start: &Q, terminal: &Q) -> GraphResult<()>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        self.insert_edge(start, terminal, None)
    }

    /// Add a weighted edge. Fails with `UnweightedGraph` on unweighted graphs.
    pub fn add_weighted_edge<Q>(&mut self, start: &Q, terminal: &Q, weight: f64) -> GraphResult<()>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        self.insert_edge(start, terminal, Some(weight))
    }

    fn insert_edge<Q>(&mut self, start: &Q, terminal: &Q, weight: Option<f64>) -> GraphResult<()>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let (s, s_key) = self.resolve(start)?;
        let (t, t_key) = self.resolve(terminal)?;

        self.check_entry(s, &s_key, &t_key, weight)?;

        debug!("add edge {} -> {}", s_key, t_key);
        self.adjacency[s].push(Edge::from_parts(t_key, weight));
        if !self.config.directed && s != t {
            self.adjacency[t].push(Edge::from_parts(s_key, weight));
        }
        Ok(())
    }

    /// Weight policy and duplicate checks for a new entry at index `s`.
    fn check_entry(&self, s: usize, start: &V, terminal: &V, weight: Option<f64>) -> GraphResult<()> {
        match (self.config.weighted, weight) {
            (true, None) => return Err(GraphError::weight_required(start, terminal)),
            (false, Some(_)) => return Err(GraphError::UnweightedGraph),
            (_, Some(w)) if !w.is_finite() => return Err(GraphError::InvalidWeight(w)),
            _ => {}
        }

        // Mirrors only exist alongside their primary, so one check covers both.
        if find(&self.adjacency[s], terminal).is_some() {
            return Err(GraphError::duplicate_edge(start, terminal));
        }
        Ok(())
    }

    /// Remove an edge, and its mirror on undirected graphs.
    pub fn remove_edge<Q>(&mut self, start: &Q, terminal: &Q) -> GraphResult<()>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let (s, s_key) = self.resolve(start)?;
        let (t, t_key) = self.resolve(terminal)?;

        let pos = find(&self.adjacency[s], &t_key)
            .ok_or_else(|| GraphError::edge_not_found(start, terminal))?;

        debug!("remove edge {} -> {}", s_key, t_key);
        self.adjacency[s].remove(pos);
        if !self.config.directed && s != t {
            if let Some(mirror) = find(&self.adjacency[t], &s_key) {
                self.adjacency[t].remove(mirror);
            }
        }
        Ok(())
    }

    /// Whether `start` has an outgoing entry for `terminal`.
    pub fn is_edge<Q>(&self, start: &Q, terminal: &Q) -> GraphResult<bool>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let (s, _) = self.resolve(start)?;
        let (_, t_key) = self.resolve(terminal)?;
        Ok(find(&self.adjacency[s], &t_key).is_some())
    }

    pub fn get_weight<Q>(&self, start: &Q, terminal: &Q) -> GraphResult<f64>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        if !self.config.weighted {
            return Err(GraphError::UnweightedGraph);
        }
        let (s, _) = self.resolve(start)?;
        let (_, t_key) = self.resolve(terminal)?;
        let edges = &self.adjacency[s];
        let pos = find(edges, &t_key).ok_or_else(|| GraphError::edge_not_found(start, terminal))?;
        edges[pos].weight().ok_or(GraphError::UnweightedGraph)
    }

    /// Replace the weight of an edge. On undirected graphs both stored
    /// entries are located before either is written.
    pub fn set_weight<Q>(&mut self, start: &Q, terminal: &Q, weight: f64) -> GraphResult<()>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        if !self.config.weighted {
            return Err(GraphError::UnweightedGraph);
        }
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight(weight));
        }
        let (s, s_key) = self.resolve(start)?;
        let (t, t_key) = self.resolve(terminal)?;

        let pos = find(&self.adjacency[s], &t_key)
            .ok_or_else(|| GraphError::edge_not_found(start, terminal))?;
        let mirror = if !self.config.directed && s != t {
            let mirror = find(&self.adjacency[t], &s_key).ok_or_else(|| {
                GraphError::InvariantViolation(format!(
                    "edge {} -> {} has no mirror",
                    s_key, t_key
                ))
            })?;
            Some(mirror)
        } else {
            None
        };

        debug!("set weight {} -> {} = {}", s_key, t_key, weight);
        self.adjacency[s][pos] = Edge::Weighted(t_key, weight);
        if let Some(mirror) = mirror {
            self.adjacency[t][mirror] = Edge::Weighted(s_key, weight);
        }
        Ok(())
    }

    /// Independent copy of the outgoing adjacency sequence.
    pub fn neighbours<Q>(&self, id: &Q) -> GraphResult<Vec<Edge<V>>>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let (i, _) = self.resolve(id)?;
        Ok(self.adjacency[i].clone())
    }

    /// Lazy single-pass view over the live adjacency sequence.
    ///
    /// The view borrows the graph, so the graph cannot be mutated until it
    /// is dropped.
    pub fn neighbours_v2<Q>(&self, id: &Q) -> GraphResult<Neighbours<'_, V>>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let (i, _) = self.resolve(id)?;
        Ok(Neighbours {
            inner: self.adjacency[i].iter(),
        })
    }

    /// Vertices with an outgoing entry for `id`, in insertion order.
    /// Full scan; no reverse index is kept.
    pub fn inbound_neighbours<Q>(&self, id: &Q) -> GraphResult<Vec<V>>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let (_, key) = self.resolve(id)?;
        Ok(self.incoming(&key).cloned().collect())
    }

    pub fn out_degree<Q>(&self, id: &Q) -> GraphResult<usize>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let (i, _) = self.resolve(id)?;
        Ok(self.adjacency[i].len())
    }

    /// Check that the stored structure satisfies every graph invariant:
    /// no dangling targets, one entry per ordered pair, mirrored entries
    /// with equal weights on undirected graphs, and entry kinds matching
    /// the `weighted` flag.
    pub fn validate(&self) -> GraphResult<()> {
        let violation = |msg: String| Err(GraphError::InvariantViolation(msg));

        for (vertex, edges) in &self.adjacency {
            let mut targets: HashSet<&V> = HashSet::with_capacity(edges.len());
            for edge in edges {
                let target = edge.target();
                if edge.is_weighted() != self.config.weighted {
                    return violation(format!("entry {} -> {} has wrong kind", vertex, target));
                }
                if let Some(w) = edge.weight() {
                    if !w.is_finite() {
                        return violation(format!("entry {} -> {} has weight {}", vertex, target, w));
                    }
                }
                if !self.adjacency.contains_key(target) {
                    return violation(format!("entry {} -> {} is dangling", vertex, target));
                }
                if !targets.insert(target) {
                    return violation(format!("entry {} -> {} is duplicated", vertex, target));
                }
                if !self.config.directed && target != vertex {
                    match self.entry(target, vertex) {
                        Some(mirror) if mirror.weight() == edge.weight() => {}
                        Some(_) => {
                            return violation(format!(
                                "mirror of {} -> {} has a different weight",
                                vertex, target
                            ))
                        }
                        None => {
                            return violation(format!("entry {} -> {} has no mirror", vertex, target))
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Look up a vertex, returning its index and an owned copy of its key.
    fn resolve<Q>(&self, id: &Q) -> GraphResult<(usize, V)>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        self.adjacency
            .get_full(id)
            .map(|(i, key, _)| (i, key.clone()))
            .ok_or_else(|| GraphError::UnknownVertex(id.to_string()))
    }

    /// The stored key for a vertex, borrowed for the graph's lifetime.
    pub(crate) fn key<Q>(&self, id: &Q) -> GraphResult<&V>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        self.adjacency
            .get_key_value(id)
            .map(|(key, _)| key)
            .ok_or_else(|| GraphError::UnknownVertex(id.to_string()))
    }

    /// Outgoing entries of a vertex; empty if absent.
    pub(crate) fn outgoing(&self, vertex: &V) -> &[Edge<V>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertices whose sequence contains `target`.
    pub(crate) fn incoming<'a>(&'a self, target: &'a V) -> impl Iterator<Item = &'a V> + 'a {
        self.adjacency
            .iter()
            .filter(move |(_, edges)| edges.iter().any(|e| e.target() == target))
            .map(|(v, _)| v)
    }

    pub(crate) fn entry(&self, start: &V, terminal: &V) -> Option<&Edge<V>> {
        self.outgoing(start).iter().find(|e| e.target() == terminal)
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn find<V: PartialEq>(edges: &[Edge<V>], target: &V) -> Option<usize> {
    edges.iter().position(|e| e.target() == target)
}

/// Borrowed single-pass iterator over one vertex's adjacency sequence.
///
/// Returned by [`Graph::neighbours_v2`].
#[derive(Debug)]
pub struct Neighbours<'a, V> {
    inner: std::slice::Iter<'a, Edge<V>>,
}

impl<'a, V> Iterator for Neighbours<'a, V> {
    type Item = &'a Edge<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Neighbours<'_, V> {}
