//! Renders a graph in the human-readable text format.
//!
//! ```text
//! <directed|undirected> <weighted|unweighted>
//! <start> <terminal>[ (weight: <w>)]
//! <isolated-vertex-id>
//! ```

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::graph::{Graph, VertexId};
use crate::types::{GraphError, GraphResult};

use super::WEIGHT_OPEN;

/// Renders the dump. Identifiers that [`TextWriter::check_identifiers`]
/// rejects are printed as-is and will not parse back faithfully.
impl<V: VertexId> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.config())?;
        for (vertex, edges) in self.iter() {
            if edges.is_empty() {
                writeln!(f, "{}", vertex)?;
            }
            for edge in edges {
                writeln!(f, "{} {}", vertex, edge)?;
            }
        }
        Ok(())
    }
}

/// Writer for the text format.
pub struct TextWriter;

impl TextWriter {
    /// Write a graph to a file, replacing its contents.
    ///
    /// Identifiers are checked before the file is opened, so a rejected
    /// graph leaves an existing file untouched.
    pub fn write_to_file<V: VertexId>(graph: &Graph<V>, path: &Path) -> GraphResult<()> {
        Self::check_identifiers(graph)?;
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to<V: VertexId>(graph: &Graph<V>, writer: &mut impl Write) -> GraphResult<()> {
        Self::check_identifiers(graph)?;
        write!(writer, "{}", graph)?;
        Ok(())
    }

    /// Fail with `InvalidIdentifier` on the first vertex whose rendering is
    /// empty, contains whitespace, or contains the weight marker.
    pub fn check_identifiers<V: VertexId>(graph: &Graph<V>) -> GraphResult<()> {
        for (vertex, _) in graph.iter() {
            let text = vertex.to_string();
            if text.is_empty() || text.contains(char::is_whitespace) || text.contains(WEIGHT_OPEN) {
                return Err(GraphError::InvalidIdentifier(text));
            }
        }
        Ok(())
    }
}
