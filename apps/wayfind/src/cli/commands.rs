//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::{Config, GraphSource, SearchOverrides};
use crate::observer::TracingObserver;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use wayfind_core::{
    CostPolicy, Graph, GraphStore, SearchMode, SearchReport, SearchRequest, SearchStats,
    StepRecorder, WayfindError, read_graph, search,
};

// =============================================================================
// PATH VALIDATION
// =============================================================================

/// Validate an input path: it must resolve to an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, WayfindError> {
    let canonical = path.canonicalize().map_err(|e| {
        WayfindError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(WayfindError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output path: its parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, WayfindError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        WayfindError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(WayfindError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| WayfindError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

/// Load the graph named by a merged graph source.
pub fn load_graph(source: &GraphSource) -> Result<Graph, WayfindError> {
    let nodes = validate_file_path(&source.nodes)?;
    let edges = validate_file_path(&source.edges)?;

    let graph = read_graph(&nodes, &edges, source.mirror_edges)?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        mirror_edges = source.mirror_edges,
        "graph loaded"
    );
    Ok(graph)
}

// =============================================================================
// SEARCH SUMMARY
// =============================================================================

/// Printable result of one search call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSummary {
    pub mode: SearchMode,
    pub root: String,
    pub end: String,
    pub found: bool,
    pub path: Option<Vec<String>>,
    pub cost: Option<f64>,
    pub distance: Option<f64>,
    pub hops: Option<usize>,
    pub stats: SearchStats,
    pub elapsed_ms: f64,
}

impl SearchSummary {
    pub fn new(request: &SearchRequest, report: &SearchReport, elapsed: Duration) -> Self {
        let route = report.outcome.route();
        Self {
            mode: request.mode,
            root: request.root.clone(),
            end: request.end.clone(),
            found: route.is_some(),
            path: route.map(|r| r.path.clone()),
            cost: route.map(|r| r.cost),
            distance: route.map(|r| r.distance),
            hops: route.map(|r| r.hops()),
            stats: report.stats,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    fn print_text(&self) {
        println!("{} search {} -> {}", self.mode, self.root, self.end);
        match (&self.path, self.cost, self.distance) {
            (Some(path), Some(cost), Some(distance)) => {
                println!("  Path:     {}", path.join(" -> "));
                println!("  Cost:     {}", cost);
                println!("  Distance: {}", distance);
            }
            _ => println!("  No path found from {} to {}", self.root, self.end),
        }
        println!(
            "  Expanded: {} (generated {}, pruned {}, evicted {})",
            self.stats.expanded, self.stats.generated, self.stats.pruned, self.stats.evicted
        );
        if self.mode == SearchMode::Ids {
            println!("  Passes:   {}", self.stats.iterations);
        }
        println!("  Time:     {:.3} ms", self.elapsed_ms);
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

// =============================================================================
// SEARCH COMMAND
// =============================================================================

/// Run one search, logging progress, and summarise it.
///
/// With a recorder the run's steps are captured as well.
pub fn run_search(
    graph: &Graph,
    request: &SearchRequest,
    recorder: Option<&mut StepRecorder>,
) -> Result<SearchSummary, WayfindError> {
    let policy = CostPolicy::default();
    let mut observer = TracingObserver::new();

    let started = Instant::now();
    let report = match recorder {
        Some(recorder) => search(graph, request, &policy, &mut (observer, recorder))?,
        None => search(graph, request, &policy, &mut observer)?,
    };
    Ok(SearchSummary::new(request, &report, started.elapsed()))
}

/// Write recorded steps to a JSON file.
pub fn write_trace(path: &Path, recorder: &StepRecorder) -> Result<PathBuf, WayfindError> {
    let output = validate_output_path(path)?;
    let json = serde_json::to_string_pretty(recorder.steps())
        .map_err(|e| WayfindError::SerializationError(e.to_string()))?;
    std::fs::write(&output, json).map_err(|e| {
        WayfindError::IoError(format!("Cannot write trace '{}': {}", output.display(), e))
    })?;
    Ok(output)
}

/// Find a route between two nodes.
pub fn cmd_search(
    graph: &Graph,
    request: &SearchRequest,
    trace: Option<&Path>,
    json_mode: bool,
) -> Result<(), WayfindError> {
    let summary = match trace {
        Some(path) => {
            let mut recorder = StepRecorder::new();
            let summary = run_search(graph, request, Some(&mut recorder))?;
            let written = write_trace(path, &recorder)?;
            tracing::info!(
                steps = recorder.steps().len(),
                path = %written.display(),
                "trace written"
            );
            summary
        }
        None => run_search(graph, request, None)?,
    };

    if json_mode {
        print_json(&summary);
    } else {
        summary.print_text();
    }
    Ok(())
}

// =============================================================================
// COMPARE COMMAND
// =============================================================================

/// Run every mode on the same endpoints.
///
/// IDS needs a depth bound; without one from the flags or the file it gets
/// the longest possible simple path, one less than the node count.
pub fn compare_modes(
    graph: &Graph,
    config: &Config,
    root: &str,
    end: &str,
    overrides: SearchOverrides,
) -> Result<Vec<SearchSummary>, WayfindError> {
    SearchMode::ALL
        .iter()
        .map(|&mode| {
            let mut request = config.request(root, end, mode, overrides);
            if mode == SearchMode::Ids && request.depth_limit.is_none() {
                request.depth_limit = Some(graph.node_count().saturating_sub(1).max(1));
            }
            run_search(graph, &request, None)
        })
        .collect()
}

/// Run every search mode and print one line per mode.
pub fn cmd_compare(
    graph: &Graph,
    config: &Config,
    root: &str,
    end: &str,
    overrides: SearchOverrides,
    json_mode: bool,
) -> Result<(), WayfindError> {
    let summaries = compare_modes(graph, config, root, end, overrides)?;

    if json_mode {
        print_json(&summaries);
        return Ok(());
    }

    println!("Comparing search modes {} -> {}", root, end);
    println!(
        "{:<8} {:>10} {:>6} {:>10} {:>9} {:>10}",
        "mode", "cost", "hops", "distance", "expanded", "time (ms)"
    );
    for s in &summaries {
        let cost = s.cost.map_or_else(|| "-".to_string(), |c| c.to_string());
        let hops = s.hops.map_or_else(|| "-".to_string(), |h| h.to_string());
        let distance = s.distance.map_or_else(|| "-".to_string(), |d| d.to_string());
        println!(
            "{:<8} {:>10} {:>6} {:>10} {:>9} {:>10.3}",
            s.mode.name(),
            cost,
            hops,
            distance,
            s.stats.expanded,
            s.elapsed_ms
        );
    }
    Ok(())
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show graph status.
pub fn cmd_status(
    graph: &Graph,
    source: &GraphSource,
    json_mode: bool,
) -> Result<(), WayfindError> {
    if json_mode {
        let output = serde_json::json!({
            "nodes_file": source.nodes.to_string_lossy(),
            "edges_file": source.edges.to_string_lossy(),
            "mirror_edges": source.mirror_edges,
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
        });
        print_json(&output);
        return Ok(());
    }

    println!("wayfind Graph Status");
    println!("====================");
    println!("Nodes file:   {}", source.nodes.display());
    println!("Edges file:   {}", source.edges.display());
    println!("Mirrored:     {}", source.mirror_edges);
    println!();
    println!("Nodes:        {}", graph.node_count());
    println!("Edges:        {}", graph.edge_count());

    Ok(())
}

// =============================================================================
// NEIGHBORS COMMAND
// =============================================================================

/// List the outgoing edges of a node.
pub fn cmd_neighbors(graph: &Graph, node: &str, json_mode: bool) -> Result<(), WayfindError> {
    let location = graph.node(node)?;
    let neighbors = graph.neighbors_out(node)?;

    if json_mode {
        let edges: Vec<_> = neighbors
            .values()
            .map(|e| serde_json::json!({ "target": e.target, "weight": e.weight }))
            .collect();
        let output = serde_json::json!({
            "node": location,
            "neighbors": edges,
        });
        print_json(&output);
        return Ok(());
    }

    println!("{} ({}, {})", location.name, location.x, location.y);
    if neighbors.is_empty() {
        println!("  no outgoing edges");
    }
    for edge in neighbors.values() {
        println!("  -> {} (weight: {})", edge.target, edge.weight);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_without_directory_uses_cwd() {
        let resolved = validate_output_path(Path::new("trace.json")).expect("cwd exists");
        assert_eq!(resolved.file_name().and_then(|n| n.to_str()), Some("trace.json"));
    }

    #[test]
    fn directory_is_not_an_input_file() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            validate_file_path(&dir),
            Err(WayfindError::IoError(_))
        ));
    }
}
