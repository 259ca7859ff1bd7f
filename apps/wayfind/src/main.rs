//! # wayfind
//!
//! Best-first path search over road networks, from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Shortest route with A*
//! wayfind --nodes data/romania_nodes.json --edges data/romania_edges.json \
//!     --mirror-edges search --mode a_star --from Arad --to Bucharest
//!
//! # Every mode side by side, settings from a config file
//! wayfind --config wayfind.toml compare --from Lugoj --to Neamt
//!
//! # Record every engine step for replay
//! wayfind --config wayfind.toml search -m dfs -f Arad -t Bucharest --trace steps.json
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayfind::cli;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing: WAYFIND_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("WAYFIND_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "wayfind=debug"
    } else {
        "wayfind=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the wayfind startup banner.
fn print_banner() {
    println!(
        r#"
  wayfind v{}
  A* • UCS • Greedy • BFS • DFS • IDS
"#,
        env!("CARGO_PKG_VERSION")
    );
}
