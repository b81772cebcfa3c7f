//! Variant reconfiguration: rewrites the whole adjacency structure so it
//! satisfies the invariants of the new `directed` / `weighted` setting.

use std::collections::HashSet;

use log::{info, warn};

use crate::types::{Edge, DEFAULT_WEIGHT};

use super::adjacency_graph::{Graph, VertexId};

impl<V: VertexId> Graph<V> {
    /// Switch between directed and undirected storage.
    ///
    /// Becoming undirected adds the missing mirror of every edge. Where two
    /// opposite edges disagree on weight, the one met first (vertex insertion
    /// order, then adjacency order) wins.
    ///
    /// Becoming directed keeps both stored directions as independent
    /// directed edges.
    pub fn change_if_directed(&mut self, directed: bool) {
        if self.config.directed == directed {
            return;
        }
        if directed {
            info!("graph now directed, keeping {} stored entries", self.get_e());
            self.config.directed = true;
            return;
        }

        let snapshot: Vec<(V, V, Option<f64>)> = self
            .adjacency
            .iter()
            .flat_map(|(u, edges)| {
                edges
                    .iter()
                    .map(move |e| (u.clone(), e.target().clone(), e.weight()))
            })
            .collect();

        let mut settled: HashSet<(V, V)> = HashSet::new();
        let mut added = 0;
        for (u, v, weight) in snapshot {
            if u == v || settled.contains(&(u.clone(), v.clone())) {
                continue;
            }
            let Some(edges) = self.adjacency.get_mut(&v) else {
                continue;
            };
            match edges.iter().position(|e| e.target() == &u) {
                Some(pos) => {
                    if edges[pos].weight() != weight {
                        warn!(
                            "edge {} -> {} weight {:?} overwritten by {} -> {} weight {:?}",
                            v,
                            u,
                            edges[pos].weight(),
                            u,
                            v,
                            weight
                        );
                        edges[pos] = Edge::from_parts(u.clone(), weight);
                    }
                }
                None => {
                    edges.push(Edge::from_parts(u.clone(), weight));
                    added += 1;
                }
            }
            settled.insert((v, u));
        }

        info!("graph now undirected, {} mirror entries added", added);
        self.config.directed = false;
    }

    /// Switch between weighted and unweighted entries.
    ///
    /// Becoming weighted attaches [`DEFAULT_WEIGHT`] to every edge; becoming
    /// unweighted strips all weights.
    pub fn change_if_weighted(&mut self, weighted: bool) {
        if self.config.weighted == weighted {
            return;
        }
        for edges in self.adjacency.values_mut() {
            let old = std::mem::take(edges);
            *edges = old
                .into_iter()
                .map(|e| {
                    if weighted {
                        e.with_weight(DEFAULT_WEIGHT)
                    } else {
                        e.without_weight()
                    }
                })
                .collect();
        }
        info!(
            "graph now {}",
            if weighted { "weighted" } else { "unweighted" }
        );
        self.config.weighted = weighted;
    }
}
