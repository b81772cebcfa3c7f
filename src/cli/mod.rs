//! Command-line interface support for the `adjg` binary.

pub mod commands;

pub use commands::TraversalOrder;
