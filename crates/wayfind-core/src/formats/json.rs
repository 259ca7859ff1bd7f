//! # JSON Road Network Format
//!
//! Two documents describe a network:
//!
//! - Node book: an object mapping each node name to its coordinates plus
//!   any extra attributes.
//!
//!   ```json
//!   { "Arad": { "x": 91, "y": 492 }, "Sibiu": { "x": 207, "y": 457, "pop": 147245 } }
//!   ```
//!
//! - Edge list: an array of directed edges. `value` is the weight; when it
//!   is absent, `null` or the string `"null"` the edge has unit weight.
//!   Numeric strings are accepted.
//!
//!   ```json
//!   [ { "source": "Arad", "target": "Sibiu", "value": 140 } ]
//!   ```
//!
//! Input length and record counts are checked before the graph is built.

use crate::graph::mirror_edges;
use crate::primitives::{MAX_EDGES, MAX_NODES, MAX_SOURCE_BYTES};
use crate::{Edge, Graph, Node, WayfindError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

// =============================================================================
// WIRE SHAPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct NodeEntry {
    x: f64,
    y: f64,
    #[serde(flatten)]
    attributes: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WeightValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct EdgeEntry {
    source: String,
    target: String,
    #[serde(default)]
    value: Option<WeightValue>,
}

impl EdgeEntry {
    fn into_edge(self) -> Result<Edge, WayfindError> {
        let weight = match self.value {
            None => 1.0,
            Some(WeightValue::Number(weight)) => weight,
            Some(WeightValue::Text(text)) if text.trim().eq_ignore_ascii_case("null") => 1.0,
            Some(WeightValue::Text(text)) => text.trim().parse::<f64>().map_err(|_| {
                WayfindError::SerializationError(format!(
                    "edge {:?} -> {:?}: weight {:?} is not a number",
                    self.source, self.target, text
                ))
            })?,
        };
        Ok(Edge::new(self.source, self.target, weight))
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn check_size(what: &str, len: usize) -> Result<(), WayfindError> {
    if len > MAX_SOURCE_BYTES {
        return Err(WayfindError::SerializationError(format!(
            "{what} is {len} bytes, exceeds maximum allowed {MAX_SOURCE_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Parse a node book into nodes ordered by name.
pub fn parse_node_book(source: &str) -> Result<Vec<Node>, WayfindError> {
    check_size("node book", source.len())?;

    let book: BTreeMap<String, NodeEntry> = serde_json::from_str(source)
        .map_err(|e| WayfindError::SerializationError(format!("invalid node book: {e}")))?;

    if book.len() > MAX_NODES {
        return Err(WayfindError::SerializationError(format!(
            "node book has {} nodes, exceeds maximum allowed {MAX_NODES}",
            book.len()
        )));
    }

    Ok(book
        .into_iter()
        .map(|(name, entry)| Node {
            name,
            x: entry.x,
            y: entry.y,
            attributes: entry.attributes,
        })
        .collect())
}

/// Parse an edge list, keeping the listed order.
pub fn parse_edge_list(source: &str) -> Result<Vec<Edge>, WayfindError> {
    check_size("edge list", source.len())?;

    let entries: Vec<EdgeEntry> = serde_json::from_str(source)
        .map_err(|e| WayfindError::SerializationError(format!("invalid edge list: {e}")))?;

    if entries.len() > MAX_EDGES {
        return Err(WayfindError::SerializationError(format!(
            "edge list has {} edges, exceeds maximum allowed {MAX_EDGES}",
            entries.len()
        )));
    }

    entries.into_iter().map(EdgeEntry::into_edge).collect()
}

/// Build a graph from a node book and an edge list.
///
/// With `mirror` set, every edge also gets its reverse.
pub fn load_graph(nodes: &str, edges: &str, mirror: bool) -> Result<Graph, WayfindError> {
    let nodes = parse_node_book(nodes)?;
    let mut edges = parse_edge_list(edges)?;
    if mirror {
        edges = mirror_edges(edges);
    }
    Graph::from_parts(nodes, edges)
}

// =============================================================================
// FILE I/O
// =============================================================================

fn read_source(path: &Path) -> Result<String, WayfindError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| WayfindError::IoError(format!("{}: {e}", path.display())))?;
    let len = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_size(&path.display().to_string(), len)?;

    std::fs::read_to_string(path)
        .map_err(|e| WayfindError::IoError(format!("{}: {e}", path.display())))
}

/// Read both documents from disk and build the graph.
pub fn read_graph(nodes: &Path, edges: &Path, mirror: bool) -> Result<Graph, WayfindError> {
    let nodes = read_source(nodes)?;
    let edges = read_source(edges)?;
    load_graph(&nodes, &edges, mirror)
}

// =============================================================================
// TESTS
// =============================================================================
