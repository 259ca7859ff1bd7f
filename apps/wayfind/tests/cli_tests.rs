//! Integration tests for the wayfind command layer: configuration files,
//! graph loading, the mode battery and trace output.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use std::path::{Path, PathBuf};
use wayfind::cli::{
    Cli, cmd_neighbors, cmd_search, compare_modes, execute, load_graph, run_search, write_trace,
};
use wayfind::config::{Config, GraphSource, SearchOverrides};
use wayfind_core::{GraphStore, SearchMode, StepRecorder, WayfindError};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn romania_source() -> GraphSource {
    GraphSource {
        nodes: data_dir().join("romania_nodes.json"),
        edges: data_dir().join("romania_edges.json"),
        mirror_edges: true,
    }
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("wayfind.toml");
    std::fs::write(&path, body).unwrap();
    path
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_config_relative_paths_resolve_next_to_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        data_dir().join("romania_nodes.json"),
        dir.path().join("nodes.json"),
    )
    .unwrap();
    std::fs::copy(
        data_dir().join("romania_edges.json"),
        dir.path().join("edges.json"),
    )
    .unwrap();
    let path = write_config(
        dir.path(),
        "[graph]\nnodes = \"nodes.json\"\nedges = \"edges.json\"\nmirror_edges = true\n",
    );

    let config = Config::load(&path).unwrap();
    let source = config.graph_source(None, None, false).unwrap();
    assert_eq!(source.nodes, dir.path().join("nodes.json"));
    assert!(source.mirror_edges);

    let graph = load_graph(&source).unwrap();
    assert_eq!(graph.node_count(), 20);
    assert_eq!(graph.edge_count(), 46);
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(WayfindError::IoError(_))));
}

#[test]
fn test_config_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[search\npruning = maybe\n");
    assert!(matches!(
        Config::load(&path),
        Err(WayfindError::SerializationError(_))
    ));
}

// =============================================================================
// GRAPH LOADING
// =============================================================================

#[test]
fn test_load_graph_missing_file() {
    let mut source = romania_source();
    source.edges = data_dir().join("no_such_edges.json");
    assert!(matches!(load_graph(&source), Err(WayfindError::IoError(_))));
}

#[test]
fn test_load_graph_without_mirroring_is_one_way() {
    let mut source = romania_source();
    source.mirror_edges = false;
    let graph = load_graph(&source).unwrap();

    assert_eq!(graph.edge_count(), 23);
    assert!(graph.edge("Arad", "Sibiu").is_ok());
    assert!(graph.edge("Sibiu", "Arad").is_err());
}

// =============================================================================
// SEARCH AND COMPARE
// =============================================================================

#[test]
fn test_run_search_summary() {
    let graph = load_graph(&romania_source()).unwrap();
    let request = Config::default().request(
        "Arad",
        "Bucharest",
        SearchMode::AStar,
        SearchOverrides::default(),
    );

    let summary = run_search(&graph, &request, None).unwrap();
    assert!(summary.found);
    assert_eq!(summary.cost, Some(418.0));
    assert_eq!(summary.distance, Some(418.0));
    assert_eq!(summary.hops, Some(4));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["mode"], "a_star");
    assert_eq!(json["path"][0], "Arad");
}

#[test]
fn test_compare_runs_every_mode() {
    let graph = load_graph(&romania_source()).unwrap();
    let summaries = compare_modes(
        &graph,
        &Config::default(),
        "Lugoj",
        "Neamt",
        SearchOverrides::default(),
    )
    .unwrap();

    let modes: Vec<_> = summaries.iter().map(|s| s.mode).collect();
    assert_eq!(modes, SearchMode::ALL.to_vec());
    assert!(summaries.iter().all(|s| s.found));

    let cost = |mode| summaries.iter().find(|s| s.mode == mode).unwrap().cost;
    assert_eq!(cost(SearchMode::AStar), Some(910.0));
    assert_eq!(cost(SearchMode::Ucs), Some(910.0));
    assert_eq!(cost(SearchMode::Bfs), Some(9.0));
    assert_eq!(cost(SearchMode::Ids), Some(9.0));
}

#[test]
fn test_compare_with_too_small_depth_limit() {
    let graph = load_graph(&romania_source()).unwrap();
    let summaries = compare_modes(
        &graph,
        &Config::default(),
        "Lugoj",
        "Neamt",
        SearchOverrides {
            depth_limit: Some(3),
            ..SearchOverrides::default()
        },
    )
    .unwrap();

    assert!(summaries.iter().all(|s| !s.found && s.path.is_none()));
}

#[test]
fn test_file_depth_limit_bounds_ids_only() {
    let graph = load_graph(&romania_source()).unwrap();
    let config = Config::parse("[search]\ndepth_limit = 3\n").unwrap();

    let request = config.request("Lugoj", "Neamt", SearchMode::AStar, SearchOverrides::default());
    let summary = run_search(&graph, &request, None).unwrap();
    assert!(summary.found);
    assert_eq!(summary.cost, Some(910.0));

    let summaries =
        compare_modes(&graph, &config, "Lugoj", "Neamt", SearchOverrides::default()).unwrap();
    for s in &summaries {
        assert_eq!(s.found, s.mode != SearchMode::Ids, "{}", s.mode);
    }
}

#[test]
fn test_search_unknown_node_fails() {
    let graph = load_graph(&romania_source()).unwrap();
    let request = Config::default().request(
        "Arad",
        "Atlantis",
        SearchMode::Ucs,
        SearchOverrides::default(),
    );
    assert!(matches!(
        cmd_search(&graph, &request, None, true),
        Err(WayfindError::InvalidEndpoints { .. })
    ));
    assert!(matches!(
        cmd_neighbors(&graph, "Atlantis", true),
        Err(WayfindError::NodeNotFound(_))
    ));
}

// =============================================================================
// TRACE OUTPUT
// =============================================================================

#[test]
fn test_trace_file_contains_steps() {
    let dir = tempfile::tempdir().unwrap();
    let graph = load_graph(&romania_source()).unwrap();
    let request = Config::default().request(
        "Arad",
        "Bucharest",
        SearchMode::Bfs,
        SearchOverrides::default(),
    );

    let mut recorder = StepRecorder::new();
    run_search(&graph, &request, Some(&mut recorder)).unwrap();
    let written = write_trace(&dir.path().join("steps.json"), &recorder).unwrap();

    let text = std::fs::read_to_string(written).unwrap();
    let steps: serde_json::Value = serde_json::from_str(&text).unwrap();
    let steps = steps.as_array().unwrap();
    assert_eq!(steps.first().unwrap()["kind"], "start");
    assert_eq!(steps.last().unwrap()["kind"], "finish");
    assert_eq!(steps.last().unwrap()["path"][3], "Bucharest");
}

#[test]
fn test_trace_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let graph = load_graph(&romania_source()).unwrap();
    let request = Config::default().request(
        "Arad",
        "Bucharest",
        SearchMode::Ucs,
        SearchOverrides::default(),
    );
    let target = dir.path().join("missing").join("steps.json");

    assert!(matches!(
        cmd_search(&graph, &request, Some(&target), true),
        Err(WayfindError::IoError(_))
    ));
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn test_execute_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let nodes = data_dir().join("romania_nodes.json");
    let edges = data_dir().join("romania_edges.json");
    let config = write_config(
        dir.path(),
        &format!(
            "[graph]\nnodes = {:?}\nedges = {:?}\nmirror_edges = true\n\n[search]\ndepth_limit = 12\n",
            nodes.display().to_string(),
            edges.display().to_string()
        ),
    );
    let trace = dir.path().join("trace.json");

    let cli = Cli::parse_from([
        "wayfind",
        "--quiet",
        "--json-mode",
        "--config",
        config.to_str().unwrap(),
        "search",
        "--mode",
        "ids",
        "--from",
        "Arad",
        "--to",
        "Bucharest",
        "--trace",
        trace.to_str().unwrap(),
    ]);
    execute(cli).unwrap();
    assert!(trace.exists());
}

#[test]
fn test_execute_requires_graph_files() {
    let cli = Cli::parse_from(["wayfind", "--quiet", "status"]);
    assert!(matches!(execute(cli), Err(WayfindError::Configuration(_))));
}

#[test]
fn test_ids_without_limit_is_a_configuration_error() {
    let source = romania_source();
    let cli = Cli::parse_from([
        "wayfind",
        "--nodes",
        source.nodes.to_str().unwrap(),
        "--edges",
        source.edges.to_str().unwrap(),
        "--mirror-edges",
        "search",
        "-m",
        "ids",
        "-f",
        "Arad",
        "-t",
        "Bucharest",
    ]);
    assert!(matches!(execute(cli), Err(WayfindError::Configuration(_))));
}

#[test]
fn test_unknown_mode_rejected_by_parser() {
    let result = Cli::try_parse_from(["wayfind", "search", "-m", "dls", "-f", "A", "-t", "B"]);
    assert!(result.is_err());
}
