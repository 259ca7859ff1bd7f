//! # wayfind CLI Module
//!
//! This module implements the CLI interface for wayfind.
//!
//! ## Available Commands
//!
//! - `search` - Run one search and print the route
//! - `compare` - Run every mode on the same endpoints
//! - `status` - Show graph size
//! - `neighbors` - List the outgoing roads of a node

mod commands;

use crate::config::{Config, SearchOverrides};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wayfind_core::{SearchMode, WayfindError};

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// wayfind - best-first path search over road networks
///
/// Loads a node book and an edge list, then runs A*, UCS, greedy, BFS, DFS
/// or iterative deepening between two named nodes.
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Node book (JSON object: name -> {x, y, ...})
    #[arg(short = 'N', long, global = true)]
    pub nodes: Option<PathBuf>,

    /// Edge list (JSON array of {source, target, value})
    #[arg(short = 'E', long, global = true)]
    pub edges: Option<PathBuf>,

    /// Add the reverse of every listed edge
    #[arg(long, global = true)]
    pub mirror_edges: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Search tuning flags shared by `search` and `compare`.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct SearchFlags {
    /// Scale applied to the heuristic in A* mode
    #[arg(short, long)]
    pub weight: Option<f64>,

    /// Maximum number of edges on an explored path (required by ids)
    #[arg(short, long)]
    pub depth_limit: Option<usize>,

    /// Disable best-cost pruning
    #[arg(long)]
    pub no_pruning: bool,
}

impl From<SearchFlags> for SearchOverrides {
    fn from(flags: SearchFlags) -> Self {
        Self {
            heuristic_weight: flags.weight,
            depth_limit: flags.depth_limit,
            no_pruning: flags.no_pruning,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two nodes
    Search {
        /// Search mode (a_star, ucs, gs, bfs, dfs, ids)
        #[arg(short, long, default_value = "a_star")]
        mode: SearchMode,

        /// Start node
        #[arg(short, long)]
        from: String,

        /// Goal node
        #[arg(short, long)]
        to: String,

        #[command(flatten)]
        flags: SearchFlags,

        /// Write every engine step to this file as JSON
        #[arg(long)]
        trace: Option<PathBuf>,
    },

    /// Run every search mode on the same endpoints
    Compare {
        /// Start node
        #[arg(short, long)]
        from: String,

        /// Goal node
        #[arg(short, long)]
        to: String,

        #[command(flatten)]
        flags: SearchFlags,
    },

    /// Show graph status
    Status,

    /// List the outgoing edges of a node
    Neighbors {
        /// Node name
        #[arg(short = 'n', long)]
        node: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), WayfindError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let source = config.graph_source(cli.nodes, cli.edges, cli.mirror_edges)?;
    let graph = load_graph(&source)?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Search {
            mode,
            from,
            to,
            flags,
            trace,
        }) => {
            let request = config.request(&from, &to, mode, flags.into());
            cmd_search(&graph, &request, trace.as_deref(), json_mode)
        }
        Some(Commands::Compare { from, to, flags }) => {
            cmd_compare(&graph, &config, &from, &to, flags.into(), json_mode)
        }
        Some(Commands::Status) => cmd_status(&graph, &source, json_mode),
        Some(Commands::Neighbors { node }) => cmd_neighbors(&graph, &node, json_mode),
        None => {
            // No subcommand - show status by default
            cmd_status(&graph, &source, json_mode)
        }
    }
}
