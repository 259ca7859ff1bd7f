//! # Core Type Definitions
//!
//! This module contains the static topology types and the error type shared
//! by every layer of wayfind:
//! - Graph elements (`Node`, `Edge`)
//! - Error types (`WayfindError`)
//!
//! Topology types carry no search state. Whatever a search learns about a
//! node (best cost so far, how often it was admitted) lives in the scratch
//! table owned by that search run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// =============================================================================
// NODE
// =============================================================================

/// A named location in the road network.
///
/// `x` and `y` are planar coordinates consumed by heuristics. Any other
/// attribute found at load time (labels, sizes, colours) is kept verbatim in
/// `attributes` and ignored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node name; the key used everywhere in the graph.
    pub name: String,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Display-only attributes carried through from the source data.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Node {
    /// Create a node at the given coordinates.
    #[must_use]
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            attributes: BTreeMap::new(),
        }
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// A directed, weighted road segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Name of the node the edge leaves.
    pub source: String,
    /// Name of the node the edge enters.
    pub target: String,
    /// Traversal cost. Non-negative and finite once inside a `Graph`.
    pub weight: f64,
}

impl Edge {
    /// Create a new directed edge.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// The same edge traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            weight: self.weight,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in wayfind.
///
/// Every variant is a caller or data error and is surfaced immediately.
/// A search that finds no path is NOT an error; it reports
/// `SearchOutcome::Exhausted` instead.
#[derive(Debug, Error)]
pub enum WayfindError {
    /// The requested node was not found in the graph.
    #[error("Node not found: {0:?}")]
    NodeNotFound(String),

    /// The requested edge was not found in the graph.
    #[error("Edge not found: {0:?} -> {1:?}")]
    EdgeNotFound(String, String),

    /// The search endpoints are unusable.
    #[error("Invalid endpoints {root:?} -> {end:?}: {reason}")]
    InvalidEndpoints {
        root: String,
        end: String,
        reason: &'static str,
    },

    /// The search mode name is not one of the supported modes.
    #[error("Unsupported search mode: {0:?}")]
    UnsupportedMode(String),

    /// The search parameters are inconsistent (e.g. IDS without a depth bound).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The node or edge set violates a graph invariant.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
