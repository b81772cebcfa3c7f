//! Text file I/O for the human-readable graph dump.

pub mod reader;
pub mod writer;

pub use reader::TextReader;
pub use writer::TextWriter;

/// Opens the weight suffix of an edge line.
pub(crate) const WEIGHT_OPEN: &str = "(weight:";
