//! Phase 1 tests: storage, queries and mutation on the default
//! (directed, unweighted) graph.

use adjgraph::graph::{Graph, GraphBuilder};
use adjgraph::types::{Edge, GraphConfig, GraphError};

// ==================== Helpers ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn targets(edges: &[Edge<String>]) -> Vec<&str> {
    edges.iter().map(|e| e.target().as_str()).collect()
}

/// Vertices A, B, C with A -> B and B -> C.
fn abc_graph() -> Graph {
    init_logging();
    let mut g: Graph = Graph::new();
    g.add_vertex("A").unwrap();
    g.add_vertex("B").unwrap();
    g.add_vertex("C").unwrap();
    g.add_edge("A", "B").unwrap();
    g.add_edge("B", "C").unwrap();
    g
}

// ==================== Reference Scenarios ====================

#[test]
fn test_scenario_build_and_query() {
    let g = abc_graph();

    assert_eq!(g.get_v(), 3);
    assert_eq!(g.get_e(), 2);
    assert!(g.is_edge("A", "B").unwrap());
    assert!(g.is_edge("B", "C").unwrap());
    assert!(!g.is_edge("A", "C").unwrap());

    assert_eq!(targets(&g.neighbours("A").unwrap()), ["B"]);
    assert_eq!(targets(&g.neighbours("B").unwrap()), ["C"]);
    assert!(g.neighbours("C").unwrap().is_empty());

    assert_eq!(g.inbound_neighbours("C").unwrap(), ["B"]);
    assert_eq!(g.inbound_neighbours("B").unwrap(), ["A"]);
    assert!(g.inbound_neighbours("A").unwrap().is_empty());
}

#[test]
fn test_scenario_remove_edge() {
    let mut g = abc_graph();
    g.remove_edge("A", "B").unwrap();

    assert!(!g.is_edge("A", "B").unwrap());
    assert_eq!(g.get_e(), 1);
}

#[test]
fn test_scenario_remove_vertex() {
    let mut g = abc_graph();
    g.remove_edge("A", "B").unwrap();
    g.remove_vertex("B").unwrap();

    assert_eq!(g.get_v(), 2);
    assert!(!g.get_vertices().contains(&"B".to_string()));
    assert_eq!(g.get_e(), 0);
    g.validate().unwrap();
}

#[test]
fn test_scenario_duplicate_edge() {
    let mut g = abc_graph();
    match g.add_edge("A", "B") {
        Err(GraphError::DuplicateEdge { start, terminal }) => {
            assert_eq!(start, "A");
            assert_eq!(terminal, "B");
        }
        other => panic!("Expected DuplicateEdge, got {:?}", other),
    }
    assert_eq!(g.get_e(), 2);
}

// ==================== Vertex Tests ====================

#[test]
fn test_duplicate_vertex_rejected() {
    let mut g = abc_graph();
    assert!(matches!(
        g.add_vertex("A"),
        Err(GraphError::DuplicateVertex(id)) if id == "A"
    ));
    assert_eq!(g.get_v(), 3);
}

#[test]
fn test_add_then_remove_vertex_restores_count() {
    let mut g = abc_graph();
    let before = g.get_v();
    g.add_vertex("Z").unwrap();
    assert_eq!(g.get_v(), before + 1);
    g.remove_vertex("Z").unwrap();
    assert_eq!(g.get_v(), before);
    assert!(!g.contains_vertex("Z"));
}

#[test]
fn test_remove_vertex_drops_incoming_edges() {
    let mut g = abc_graph();
    g.add_edge("C", "B").unwrap();
    g.remove_vertex("B").unwrap();

    assert_eq!(g.get_e(), 0);
    assert!(g.neighbours("A").unwrap().is_empty());
    assert!(g.neighbours("C").unwrap().is_empty());
    g.validate().unwrap();
}

#[test]
fn test_remove_unknown_vertex() {
    let mut g = abc_graph();
    assert!(matches!(
        g.remove_vertex("Q"),
        Err(GraphError::UnknownVertex(id)) if id == "Q"
    ));
}

#[test]
fn test_vertices_keep_insertion_order() {
    let mut g: Graph = Graph::new();
    for id in ["delta", "alpha", "charlie", "bravo"] {
        g.add_vertex(id).unwrap();
    }
    g.remove_vertex("alpha").unwrap();
    assert_eq!(g.get_vertices(), ["delta", "charlie", "bravo"]);
}

// ==================== Edge Tests ====================

#[test]
fn test_edge_with_unknown_endpoint() {
    let mut g = abc_graph();
    assert!(matches!(
        g.add_edge("A", "Q"),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        g.add_edge("Q", "A"),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(g.is_edge("Q", "A"), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(
        g.remove_edge("A", "Q"),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn test_remove_missing_edge() {
    let mut g = abc_graph();
    assert!(matches!(
        g.remove_edge("A", "C"),
        Err(GraphError::EdgeNotFound { .. })
    ));
    assert_eq!(g.get_e(), 2);
}

#[test]
fn test_directed_edges_are_one_way() {
    let g = abc_graph();
    assert!(g.is_edge("A", "B").unwrap());
    assert!(!g.is_edge("B", "A").unwrap());
}

#[test]
fn test_self_loop_allowed() {
    let mut g = abc_graph();
    g.add_edge("A", "A").unwrap();
    assert!(g.is_edge("A", "A").unwrap());
    assert_eq!(g.get_e(), 3);
    assert_eq!(g.inbound_neighbours("A").unwrap(), ["A"]);
    g.remove_edge("A", "A").unwrap();
    assert_eq!(g.get_e(), 2);
}

#[test]
fn test_edge_count_tracks_adds_and_removes() {
    let mut g: Graph = Graph::new();
    for id in ["a", "b", "c", "d"] {
        g.add_vertex(id).unwrap();
    }
    let pairs = [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("a", "c")];
    for (s, t) in pairs {
        g.add_edge(s, t).unwrap();
    }
    g.remove_edge("b", "c").unwrap();
    assert_eq!(g.get_e(), pairs.len() - 1);
}

#[test]
fn test_weight_ops_on_unweighted_graph() {
    let mut g = abc_graph();
    assert!(matches!(
        g.get_weight("A", "B"),
        Err(GraphError::UnweightedGraph)
    ));
    assert!(matches!(
        g.set_weight("A", "B", 2.0),
        Err(GraphError::UnweightedGraph)
    ));
    assert!(matches!(
        g.add_weighted_edge("A", "C", 2.0),
        Err(GraphError::UnweightedGraph)
    ));
    assert!(!g.is_edge("A", "C").unwrap());
}

// ==================== Neighbour Views ====================

#[test]
fn test_neighbours_is_a_snapshot() {
    let mut g = abc_graph();
    let mut snapshot = g.neighbours("A").unwrap();
    snapshot.push(Edge::Unweighted("C".to_string()));
    assert_eq!(g.out_degree("A").unwrap(), 1);

    g.add_edge("A", "C").unwrap();
    assert_eq!(targets(&snapshot), ["B", "C"]);
    assert_eq!(targets(&g.neighbours("A").unwrap()), ["B", "C"]);
}

#[test]
fn test_neighbours_v2_is_lazy_view() {
    let mut g = abc_graph();
    g.add_edge("A", "C").unwrap();

    let mut view = g.neighbours_v2("A").unwrap();
    assert_eq!(view.len(), 2);
    assert_eq!(view.next().map(|e| e.target().as_str()), Some("B"));
    assert_eq!(view.next().map(|e| e.target().as_str()), Some("C"));
    assert!(view.next().is_none());
    assert!(view.next().is_none());
}

#[test]
fn test_neighbours_of_unknown_vertex() {
    let g = abc_graph();
    assert!(matches!(g.neighbours("Q"), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(
        g.neighbours_v2("Q").map(|it| it.count()),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        g.inbound_neighbours("Q"),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn test_inbound_neighbours_in_insertion_order() {
    let mut g: Graph = Graph::new();
    for id in ["x", "a", "b", "c"] {
        g.add_vertex(id).unwrap();
    }
    g.add_edge("c", "x").unwrap();
    g.add_edge("a", "x").unwrap();
    assert_eq!(g.inbound_neighbours("x").unwrap(), ["a", "c"]);
}

// ==================== Construction ====================

#[test]
fn test_instances_do_not_share_storage() {
    let mut first: Graph = Graph::new();
    first.add_vertex("only-here").unwrap();
    let second: Graph = Graph::new();
    assert_eq!(second.get_v(), 0);
    assert!(!second.contains_vertex("only-here"));
}

#[test]
fn test_from_adjacency() {
    let g: Graph = Graph::from_adjacency(
        GraphConfig::default(),
        vec![
            ("A".to_string(), vec![Edge::Unweighted("B".to_string())]),
            ("B".to_string(), vec![Edge::Unweighted("C".to_string())]),
            ("C".to_string(), vec![]),
        ],
    )
    .unwrap();
    assert_eq!(g.get_v(), 3);
    assert_eq!(g.get_e(), 2);
    assert!(g.is_edge("B", "C").unwrap());
    g.validate().unwrap();
}

#[test]
fn test_from_adjacency_rejects_dangling_edge() {
    let result: Result<Graph, _> = Graph::from_adjacency(
        GraphConfig::default(),
        vec![("A".to_string(), vec![Edge::Unweighted("B".to_string())])],
    );
    assert!(matches!(result, Err(GraphError::UnknownVertex(id)) if id == "B"));
}

#[test]
fn test_from_adjacency_rejects_repeated_pair() {
    let result: Result<Graph, _> = Graph::from_adjacency(
        GraphConfig::default(),
        vec![
            (
                "A".to_string(),
                vec![
                    Edge::Unweighted("B".to_string()),
                    Edge::Unweighted("B".to_string()),
                ],
            ),
            ("B".to_string(), vec![]),
        ],
    );
    assert!(matches!(result, Err(GraphError::DuplicateEdge { .. })));
}

#[test]
fn test_from_adjacency_rejects_weighted_entries_on_unweighted_graph() {
    let result: Result<Graph, _> = Graph::from_adjacency(
        GraphConfig::default(),
        vec![
            ("A".to_string(), vec![Edge::Weighted("B".to_string(), 1.0)]),
            ("B".to_string(), vec![]),
        ],
    );
    assert!(matches!(result, Err(GraphError::UnweightedGraph)));
}

#[test]
fn test_builder() {
    let g: Graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("A", "B")
        .edge("B", "C")
        .build()
        .unwrap();
    assert_eq!(g.get_v(), 3);
    assert_eq!(g.get_e(), 2);
    assert!(g.is_directed());
    assert!(!g.is_weighted());
}

#[test]
fn test_builder_reports_first_error() {
    let result: Result<Graph, _> = GraphBuilder::new().vertex("A").edge("A", "B").build();
    assert!(matches!(result, Err(GraphError::UnknownVertex(id)) if id == "B"));
}

#[test]
fn test_integer_identifiers() {
    let mut g: Graph<u32> = Graph::new();
    for id in 0..4u32 {
        g.add_vertex(id).unwrap();
    }
    g.add_edge(&0u32, &1u32).unwrap();
    g.add_edge(&1u32, &3u32).unwrap();
    assert_eq!(g.inbound_neighbours(&3u32).unwrap(), [1u32]);
    assert!(matches!(g.add_vertex(2u32), Err(GraphError::DuplicateVertex(id)) if id == "2"));
}
