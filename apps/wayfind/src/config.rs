//! # Configuration
//!
//! Optional TOML file with graph sources and search defaults.
//!
//! ```toml
//! [graph]
//! nodes = "data/romania_nodes.json"
//! edges = "data/romania_edges.json"
//! mirror_edges = true
//!
//! [search]
//! heuristic_weight = 1.0
//! depth_limit = 10
//! pruning = true
//! ```
//!
//! Precedence: command-line flags, then the file, then built-in defaults.
//! Relative paths in the file are resolved against the file's directory.
//! The file's `depth_limit` is the default bound for `ids` only; other modes
//! are bounded only by `--depth-limit`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use wayfind_core::primitives::{DEFAULT_HEURISTIC_WEIGHT, DEFAULT_PRUNING};
use wayfind_core::{SearchMode, SearchRequest, WayfindError};

/// Maximum accepted size of a configuration file (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// FILE SCHEMA
// =============================================================================

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub graph: GraphSection,
    pub search: SearchSection,
}

/// `[graph]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphSection {
    /// Node book path.
    pub nodes: Option<PathBuf>,
    /// Edge list path.
    pub edges: Option<PathBuf>,
    /// Add the reverse of every listed edge.
    pub mirror_edges: bool,
}

/// `[search]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub heuristic_weight: f64,
    pub depth_limit: Option<usize>,
    pub pruning: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            heuristic_weight: DEFAULT_HEURISTIC_WEIGHT,
            depth_limit: None,
            pruning: DEFAULT_PRUNING,
        }
    }
}

impl Config {
    /// Parse configuration text. Paths are kept as written.
    pub fn parse(text: &str) -> Result<Self, WayfindError> {
        toml::from_str(text)
            .map_err(|e| WayfindError::SerializationError(format!("invalid config: {}", e)))
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, WayfindError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            WayfindError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(WayfindError::SerializationError(format!(
                "Config size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            WayfindError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        let mut config = Self::parse(&text)?;
        if let Some(base) = path.parent() {
            config.graph.resolve_relative_to(base);
        }
        Ok(config)
    }
}

impl GraphSection {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.nodes, &mut self.edges].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

// =============================================================================
// MERGED SETTINGS
// =============================================================================

/// Where the graph comes from, after merging flags and file.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSource {
    pub nodes: PathBuf,
    pub edges: PathBuf,
    pub mirror_edges: bool,
}

/// Search flags given on the command line; `None` defers to the file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchOverrides {
    pub heuristic_weight: Option<f64>,
    pub depth_limit: Option<usize>,
    pub no_pruning: bool,
}

impl Config {
    /// Merge graph flags over the `[graph]` table.
    pub fn graph_source(
        &self,
        nodes: Option<PathBuf>,
        edges: Option<PathBuf>,
        mirror_edges: bool,
    ) -> Result<GraphSource, WayfindError> {
        let nodes = nodes.or_else(|| self.graph.nodes.clone()).ok_or_else(|| {
            WayfindError::Configuration(
                "no node book given: pass --nodes or set graph.nodes".to_string(),
            )
        })?;
        let edges = edges.or_else(|| self.graph.edges.clone()).ok_or_else(|| {
            WayfindError::Configuration(
                "no edge list given: pass --edges or set graph.edges".to_string(),
            )
        })?;

        Ok(GraphSource {
            nodes,
            edges,
            mirror_edges: mirror_edges || self.graph.mirror_edges,
        })
    }

    /// Build a search request, merging flags over the `[search]` table.
    ///
    /// `search.depth_limit` only fills in a missing bound for `ids`.
    pub fn request(
        &self,
        root: &str,
        end: &str,
        mode: SearchMode,
        overrides: SearchOverrides,
    ) -> SearchRequest {
        let mut request = SearchRequest::new(root, end, mode)
            .with_heuristic_weight(
                overrides
                    .heuristic_weight
                    .unwrap_or(self.search.heuristic_weight),
            )
            .with_pruning(self.search.pruning && !overrides.no_pruning);
        request.depth_limit = match mode {
            SearchMode::Ids => overrides.depth_limit.or(self.search.depth_limit),
            _ => overrides.depth_limit,
        };
        request
    }
}
