//! Parses the text format back into a graph.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::graph::{Graph, VertexId};
use crate::types::{GraphConfig, GraphError, GraphResult};

use super::WEIGHT_OPEN;

/// Reader for the text format.
pub struct TextReader;

/// One edge line, held until every vertex is registered.
struct Record<V> {
    line: usize,
    start: V,
    terminal: V,
    weight: Option<f64>,
}

impl TextReader {
    /// Read a text dump from a file.
    pub fn read_from_file<V>(path: &Path) -> GraphResult<Graph<V>>
    where
        V: VertexId + FromStr,
    {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Read a text dump from any reader.
    pub fn read_from<V>(reader: &mut impl Read) -> GraphResult<Graph<V>>
    where
        V: VertexId + FromStr,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse a text dump.
    ///
    /// Blank lines are ignored. Vertex identifiers may not contain
    /// whitespace. Vertices are registered in the order of their own first
    /// line and entries are appended in listed order, so a rendered graph
    /// parses back with the same vertex and neighbour order. On undirected
    /// graphs each edge is normally listed from both endpoints with the
    /// same weight; a missing mirror is appended.
    pub fn parse<V>(text: &str) -> GraphResult<Graph<V>>
    where
        V: VertexId + FromStr,
    {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (line, header) = lines.next().ok_or(GraphError::Parse {
            line: 1,
            reason: "missing header".to_string(),
        })?;
        let config = GraphConfig::from_header(header).ok_or_else(|| GraphError::Parse {
            line,
            reason: format!("unrecognised header {:?}", header),
        })?;

        let mut graph = Graph::with_config(config);
        let mut records: Vec<Record<V>> = Vec::new();

        for (line, content) in lines {
            let (ids, weight) = split_weight(content, line)?;
            let mut tokens = ids.split_whitespace();
            let start: V = parse_vertex(tokens.next(), line)?;
            ensure_vertex(&mut graph, &start);

            let Some(token) = tokens.next() else {
                if weight.is_some() {
                    return Err(GraphError::Parse {
                        line,
                        reason: "weight without terminal vertex".to_string(),
                    });
                }
                continue;
            };
            let terminal: V = parse_vertex(Some(token), line)?;
            if let Some(extra) = tokens.next() {
                return Err(GraphError::Parse {
                    line,
                    reason: format!("unexpected token {:?}", extra),
                });
            }
            records.push(Record {
                line,
                start,
                terminal,
                weight,
            });
        }

        // Terminals that never got a line of their own.
        for record in &records {
            ensure_vertex(&mut graph, &record.terminal);
        }

        let mut listed: HashMap<(V, V), usize> = HashMap::with_capacity(records.len());
        for record in records {
            let Record {
                line,
                start,
                terminal,
                weight,
            } = record;
            if listed.contains_key(&(start.clone(), terminal.clone())) {
                return Err(GraphError::Parse {
                    line,
                    reason: GraphError::duplicate_edge(&start, &terminal).to_string(),
                });
            }
            graph
                .append_entry(&start, &terminal, weight)
                .map_err(|e| GraphError::Parse {
                    line,
                    reason: e.to_string(),
                })?;
            listed.insert((start, terminal), line);
        }

        graph.pair_mirrors().map_err(|(start, terminal)| {
            let line = [
                (start.clone(), terminal.clone()),
                (terminal.clone(), start.clone()),
            ]
            .iter()
            .filter_map(|pair| listed.get(pair).copied())
            .max()
            .unwrap_or(1);
            GraphError::Parse {
                line,
                reason: format!(
                    "edges {} -> {} and {} -> {} have different weights",
                    start, terminal, terminal, start
                ),
            }
        })?;

        Ok(graph)
    }
}

impl<V> FromStr for Graph<V>
where
    V: VertexId + FromStr,
{
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        TextReader::parse(s)
    }
}

/// Split `"a b (weight: w)"` into `"a b"` and `Some(w)`.
fn split_weight(content: &str, line: usize) -> GraphResult<(&str, Option<f64>)> {
    let Some(open) = content.find(WEIGHT_OPEN) else {
        return Ok((content, None));
    };
    let raw = content[open + WEIGHT_OPEN.len()..]
        .trim()
        .strip_suffix(')')
        .ok_or_else(|| GraphError::Parse {
            line,
            reason: "unterminated weight".to_string(),
        })?;
    let weight: f64 = raw.trim().parse().map_err(|_| GraphError::Parse {
        line,
        reason: format!("invalid weight {:?}", raw.trim()),
    })?;
    Ok((&content[..open], Some(weight)))
}

fn parse_vertex<V: FromStr>(token: Option<&str>, line: usize) -> GraphResult<V> {
    let token = token.ok_or_else(|| GraphError::Parse {
        line,
        reason: "missing vertex".to_string(),
    })?;
    token.parse().map_err(|_| GraphError::Parse {
        line,
        reason: format!("invalid vertex identifier {:?}", token),
    })
}

fn ensure_vertex<V: VertexId>(graph: &mut Graph<V>, vertex: &V) {
    if !graph.contains_vertex(vertex) {
        // Cannot fail: absence checked above.
        let _ = graph.add_vertex(vertex.clone());
    }
}
