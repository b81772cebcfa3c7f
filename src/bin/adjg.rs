//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::cli::TraversalOrder;
use adjgraph::graph::TraversalDirection;
use adjgraph::types::{GraphConfig, GraphError};

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg: inspect and edit adjacency-list graph dumps"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
        /// Store edges in both directions
        #[arg(long)]
        undirected: bool,
        /// Carry a weight on every edge
        #[arg(long)]
        weighted: bool,
    },
    /// Print the graph in text form
    Show {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Display summary information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Add a vertex
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex identifier
        id: String,
    },
    /// Remove a vertex and every edge touching it
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex identifier
        id: String,
    },
    /// Add an edge between two vertices
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Terminal vertex
        terminal: String,
        /// Edge weight (weighted graphs only)
        #[arg(long)]
        weight: Option<f64>,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Terminal vertex
        terminal: String,
    },
    /// Print the weight of an edge
    Weight {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Terminal vertex
        terminal: String,
    },
    /// Replace the weight of an edge
    SetWeight {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Terminal vertex
        terminal: String,
        /// New weight
        weight: f64,
    },
    /// List the neighbours of a vertex
    Neighbours {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex identifier
        id: String,
        /// List vertices with an edge into this one instead
        #[arg(long)]
        inbound: bool,
    },
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Direction: forward, backward, or both
        #[arg(long, default_value = "forward")]
        direction: String,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Direction: forward, backward, or both
        #[arg(long, default_value = "forward")]
        direction: String,
    },
    /// Change the graph variant in place
    Convert {
        /// Path to the graph file
        file: PathBuf,
        /// Make the graph directed (true) or undirected (false)
        #[arg(long)]
        directed: Option<bool>,
        /// Make the graph weighted (true) or unweighted (false)
        #[arg(long)]
        weighted: Option<bool>,
    },
}

fn parse_direction(direction: &str) -> TraversalDirection {
    match direction {
        "forward" => TraversalDirection::Forward,
        "backward" => TraversalDirection::Backward,
        "both" => TraversalDirection::Both,
        other => {
            eprintln!("Invalid direction: {}", other);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Create {
            file,
            undirected,
            weighted,
        } => commands::cmd_create(&file, GraphConfig::new(!undirected, weighted)),
        Commands::Show { file } => commands::cmd_show(&file),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddVertex { file, id } => commands::cmd_add_vertex(&file, &id, json),
        Commands::RemoveVertex { file, id } => commands::cmd_remove_vertex(&file, &id, json),
        Commands::AddEdge {
            file,
            start,
            terminal,
            weight,
        } => commands::cmd_add_edge(&file, &start, &terminal, weight, json),
        Commands::RemoveEdge {
            file,
            start,
            terminal,
        } => commands::cmd_remove_edge(&file, &start, &terminal, json),
        Commands::Weight {
            file,
            start,
            terminal,
        } => commands::cmd_weight(&file, &start, &terminal, json),
        Commands::SetWeight {
            file,
            start,
            terminal,
            weight,
        } => commands::cmd_set_weight(&file, &start, &terminal, weight, json),
        Commands::Neighbours { file, id, inbound } => {
            commands::cmd_neighbours(&file, &id, inbound, json)
        }
        Commands::Bfs {
            file,
            source,
            direction,
        } => commands::cmd_traverse(
            &file,
            &source,
            TraversalOrder::BreadthFirst,
            parse_direction(&direction),
            json,
        ),
        Commands::Dfs {
            file,
            source,
            direction,
        } => commands::cmd_traverse(
            &file,
            &source,
            TraversalOrder::DepthFirst,
            parse_direction(&direction),
            json,
        ),
        Commands::Convert {
            file,
            directed,
            weighted,
        } => commands::cmd_convert(&file, directed, weighted, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::InvalidWeight(_)
            | GraphError::WeightRequired { .. }
            | GraphError::UnweightedGraph
            | GraphError::InvalidIdentifier(_) => 3,
            GraphError::UnknownVertex(_) | GraphError::EdgeNotFound { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
