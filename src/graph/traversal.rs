//! Lazy graph traversal producers (BFS, DFS).
//!
//! Both producers borrow the graph for their whole lifetime, yield
//! `(vertex, depth)` pairs one at a time and are single pass: construct a
//! fresh producer to traverse again. Dropping a producer early is the only
//! cancellation needed.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::Hash;

use indexmap::Equivalent;
use log::debug;

use crate::types::{Edge, GraphResult};

use super::adjacency_graph::{Graph, VertexId};

/// Direction for graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalDirection {
    /// Follow outgoing edges (start -> terminal).
    #[default]
    Forward,
    /// Follow incoming edges (terminal <- start).
    Backward,
    /// Follow edges in both directions.
    Both,
}

/// Neighbours reachable in one step, in adjacency order (outgoing first).
fn step<'g, V: VertexId>(
    graph: &'g Graph<V>,
    vertex: &'g V,
    direction: TraversalDirection,
) -> Vec<&'g V> {
    let mut next = Vec::new();
    if direction != TraversalDirection::Backward {
        next.extend(graph.outgoing(vertex).iter().map(Edge::target));
    }
    if direction != TraversalDirection::Forward {
        next.extend(graph.incoming(vertex));
    }
    next
}

/// Breadth-first producer.
///
/// Vertices are marked visited when enqueued, so each reachable vertex is
/// yielded exactly once, at its shortest hop distance from the source.
pub struct Bfs<'g, V> {
    graph: &'g Graph<V>,
    direction: TraversalDirection,
    queue: VecDeque<(&'g V, usize)>,
    /// Doubles as the visited set.
    distances: HashMap<&'g V, usize>,
}

impl<'g, V: VertexId> Bfs<'g, V> {
    pub fn new<Q>(graph: &'g Graph<V>, source: &Q) -> GraphResult<Self>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        Self::with_direction(graph, source, TraversalDirection::Forward)
    }

    pub fn with_direction<Q>(
        graph: &'g Graph<V>,
        source: &Q,
        direction: TraversalDirection,
    ) -> GraphResult<Self>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let source = graph.key(source)?;
        debug!("bfs from {} ({:?})", source, direction);

        let mut queue = VecDeque::new();
        queue.push_back((source, 0));
        let mut distances = HashMap::new();
        distances.insert(source, 0);

        Ok(Self {
            graph,
            direction,
            queue,
            distances,
        })
    }

    /// Hop distance of a vertex already discovered (yielded or queued).
    pub fn distance(&self, vertex: &V) -> Option<usize> {
        self.distances.get(vertex).copied()
    }
}

impl<'g, V: VertexId> Iterator for Bfs<'g, V> {
    type Item = (&'g V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, depth) = self.queue.pop_front()?;
        for neighbour in step(self.graph, vertex, self.direction) {
            if !self.distances.contains_key(neighbour) {
                self.distances.insert(neighbour, depth + 1);
                self.queue.push_back((neighbour, depth + 1));
            }
        }
        Some((vertex, depth))
    }
}

/// Depth-first producer over an explicit stack.
///
/// A vertex may sit on the stack several times; stale copies are skipped
/// when popped. Neighbours are pushed in adjacency order, so the last one
/// listed is explored first.
pub struct Dfs<'g, V> {
    graph: &'g Graph<V>,
    direction: TraversalDirection,
    stack: Vec<(&'g V, usize)>,
    visited: HashSet<&'g V>,
}

impl<'g, V: VertexId> Dfs<'g, V> {
    pub fn new<Q>(graph: &'g Graph<V>, source: &Q) -> GraphResult<Self>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        Self::with_direction(graph, source, TraversalDirection::Forward)
    }

    pub fn with_direction<Q>(
        graph: &'g Graph<V>,
        source: &Q,
        direction: TraversalDirection,
    ) -> GraphResult<Self>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        let source = graph.key(source)?;
        debug!("dfs from {} ({:?})", source, direction);

        Ok(Self {
            graph,
            direction,
            stack: vec![(source, 0)],
            visited: HashSet::new(),
        })
    }

    pub fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }
}

impl<'g, V: VertexId> Iterator for Dfs<'g, V> {
    type Item = (&'g V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (vertex, depth) = self.stack.pop()?;
            if !self.visited.insert(vertex) {
                continue;
            }
            for neighbour in step(self.graph, vertex, self.direction) {
                if !self.visited.contains(neighbour) {
                    self.stack.push((neighbour, depth + 1));
                }
            }
            return Some((vertex, depth));
        }
    }
}

impl<V: VertexId> Graph<V> {
    /// Breadth-first traversal along outgoing edges.
    pub fn bfs<Q>(&self, source: &Q) -> GraphResult<Bfs<'_, V>>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        Bfs::new(self, source)
    }

    /// Depth-first traversal along outgoing edges.
    pub fn dfs<Q>(&self, source: &Q) -> GraphResult<Dfs<'_, V>>
    where
        Q: ?Sized + Hash + Equivalent<V> + Display,
    {
        Dfs::new(self, source)
    }
}
