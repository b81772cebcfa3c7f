//! CLI command implementations.
//!
//! Every command reads the text dump at `path`, applies one operation and,
//! for mutations, writes the dump back in place.

use std::path::Path;

use crate::format::{TextReader, TextWriter};
use crate::graph::{Bfs, Dfs, Graph, TraversalDirection};
use crate::types::{GraphConfig, GraphResult};

/// Traversal strategy for `cmd_traverse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    BreadthFirst,
    DepthFirst,
}

impl TraversalOrder {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

fn load(path: &Path) -> GraphResult<Graph> {
    TextReader::read_from_file(path)
}

fn store(graph: &Graph, path: &Path) -> GraphResult<()> {
    TextWriter::write_to_file(graph, path)
}

/// Create a new empty graph file.
pub fn cmd_create(path: &Path, config: GraphConfig) -> GraphResult<()> {
    let graph: Graph = Graph::with_config(config);
    store(&graph, path)?;
    println!("Created {} ({})", path.display(), config);
    Ok(())
}

/// Print the text dump.
pub fn cmd_show(path: &Path) -> GraphResult<()> {
    let graph = load(path)?;
    print!("{}", graph);
    Ok(())
}

/// Display summary information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let isolated = graph.iter().filter(|(_, edges)| edges.is_empty()).count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "vertices": graph.get_v(),
            "edges": graph.get_e(),
            "isolated": isolated,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Variant: {}", graph.config());
        println!("Vertices: {}", graph.get_v());
        println!("Edges: {}", graph.get_e());
        println!("Without outgoing edges: {}", isolated);
    }
    Ok(())
}

/// Add a vertex.
pub fn cmd_add_vertex(path: &Path, id: &str, json: bool) -> GraphResult<()> {
    let mut graph = load(path)?;
    graph.add_vertex(id)?;
    store(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"added": id, "vertices": graph.get_v()}));
    } else {
        println!("Added vertex {} to {}", id, path.display());
    }
    Ok(())
}

/// Remove a vertex and its incident edges.
pub fn cmd_remove_vertex(path: &Path, id: &str, json: bool) -> GraphResult<()> {
    let mut graph = load(path)?;
    graph.remove_vertex(id)?;
    store(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"removed": id, "vertices": graph.get_v(), "edges": graph.get_e()})
        );
    } else {
        println!("Removed vertex {} from {}", id, path.display());
    }
    Ok(())
}

/// Add an edge; `weight` must be given exactly when the graph is weighted.
pub fn cmd_add_edge(
    path: &Path,
    start: &str,
    terminal: &str,
    weight: Option<f64>,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    match weight {
        Some(w) => graph.add_weighted_edge(start, terminal, w)?,
        None => graph.add_edge(start, terminal)?,
    }
    store(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "terminal": terminal, "weight": weight})
        );
    } else {
        match weight {
            Some(w) => println!("Linked {} -> {} (weight: {})", start, terminal, w),
            None => println!("Linked {} -> {}", start, terminal),
        }
    }
    Ok(())
}

/// Remove an edge.
pub fn cmd_remove_edge(path: &Path, start: &str, terminal: &str, json: bool) -> GraphResult<()> {
    let mut graph = load(path)?;
    graph.remove_edge(start, terminal)?;
    store(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "terminal": terminal, "removed": true})
        );
    } else {
        println!("Unlinked {} -> {}", start, terminal);
    }
    Ok(())
}

/// Print the weight of an edge.
pub fn cmd_weight(path: &Path, start: &str, terminal: &str, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let weight = graph.get_weight(start, terminal)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "terminal": terminal, "weight": weight})
        );
    } else {
        println!("{}", weight);
    }
    Ok(())
}

/// Replace the weight of an edge.
pub fn cmd_set_weight(
    path: &Path,
    start: &str,
    terminal: &str,
    weight: f64,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    graph.set_weight(start, terminal, weight)?;
    store(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "terminal": terminal, "weight": weight})
        );
    } else {
        println!("Set {} -> {} (weight: {})", start, terminal, weight);
    }
    Ok(())
}

/// List outgoing entries, or inbound neighbours with `inbound`.
pub fn cmd_neighbours(path: &Path, id: &str, inbound: bool, json: bool) -> GraphResult<()> {
    let graph = load(path)?;

    if inbound {
        let sources = graph.inbound_neighbours(id)?;
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&sources).unwrap_or_default()
            );
        } else {
            for v in &sources {
                println!("{}", v);
            }
        }
    } else {
        let edges = graph.neighbours(id)?;
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&edges).unwrap_or_default()
            );
        } else {
            for edge in &edges {
                println!("{}", edge);
            }
        }
    }
    Ok(())
}

/// Run a traversal from `source`.
pub fn cmd_traverse(
    path: &Path,
    source: &str,
    order: TraversalOrder,
    direction: TraversalDirection,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path)?;
    let visited: Vec<(&String, usize)> = match order {
        TraversalOrder::BreadthFirst => Bfs::with_direction(&graph, source, direction)?.collect(),
        TraversalOrder::DepthFirst => Dfs::with_direction(&graph, source, direction)?.collect(),
    };

    if json {
        let steps: Vec<serde_json::Value> = visited
            .iter()
            .map(|(v, depth)| serde_json::json!({"vertex": v, "depth": depth}))
            .collect();
        let out = serde_json::json!({
            "order": order.name(),
            "source": source,
            "visited": steps,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for (v, depth) in &visited {
            let indent = "  ".repeat(*depth);
            println!("{}[depth {}] {}", indent, depth, v);
        }
    }
    Ok(())
}

/// Reconfigure the graph variant in place.
pub fn cmd_convert(
    path: &Path,
    directed: Option<bool>,
    weighted: Option<bool>,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    let before = graph.config();
    if let Some(d) = directed {
        graph.change_if_directed(d);
    }
    if let Some(w) = weighted {
        graph.change_if_weighted(w);
    }
    store(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"from": before, "to": graph.config(), "edges": graph.get_e()})
        );
    } else {
        println!("Converted {} -> {}", before, graph.config());
    }
    Ok(())
}
