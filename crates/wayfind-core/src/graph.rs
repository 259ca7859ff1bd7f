//! # Graph Store
//!
//! The static road-network storage for wayfind.
//!
//! This module implements the `GraphStore` trait.
//! All indices use `BTreeMap` so neighbor iteration order is deterministic,
//! which keeps DFS and tie-breaking reproducible from run to run.

use crate::{Edge, Node, WayfindError};
use std::collections::BTreeMap;

// =============================================================================
// GRAPHSTORE TRAIT
// =============================================================================

/// Read-only topology access used by the search engine.
///
/// Lookups of unknown names fail with `NodeNotFound` / `EdgeNotFound`.
/// A node that exists but has no edges in the requested direction yields an
/// empty map, never an error.
pub trait GraphStore {
    /// Look up a node by name.
    fn node(&self, name: &str) -> Result<&Node, WayfindError>;

    /// Check whether a node with this name exists.
    fn contains(&self, name: &str) -> bool;

    /// Outgoing edges of a node, keyed by target name.
    fn neighbors_out(&self, name: &str) -> Result<&BTreeMap<String, Edge>, WayfindError>;

    /// Incoming edges of a node, keyed by source name.
    fn neighbors_in(&self, name: &str) -> Result<&BTreeMap<String, Edge>, WayfindError>;

    /// The edge from `source` to `target`.
    fn edge(&self, source: &str, target: &str) -> Result<&Edge, WayfindError>;

    /// Get the total number of nodes.
    fn node_count(&self) -> usize;

    /// Total weighted length of a path given as node names.
    ///
    /// A path with fewer than two nodes has length zero.
    fn path_distance(&self, path: &[String]) -> Result<f64, WayfindError> {
        path.windows(2).try_fold(0.0, |total, pair| {
            Ok(total + self.edge(&pair[0], &pair[1])?.weight)
        })
    }
}

// =============================================================================
// GRAPH IMPLEMENTATION
// =============================================================================

/// The in-memory graph.
///
/// Built once from a node list and an edge list; there is no mutation API.
/// Every node has an entry in both adjacency indices, possibly empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Node storage: name -> Node
    nodes: BTreeMap<String, Node>,

    /// Forward index: source -> (target -> edge)
    outgoing: BTreeMap<String, BTreeMap<String, Edge>>,

    /// Reverse index: target -> (source -> edge)
    incoming: BTreeMap<String, BTreeMap<String, Edge>>,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph and both adjacency indices in O(V + E) insertions.
    ///
    /// Rejects duplicate node names, duplicate edges, edges that reference an
    /// unknown node, and weights that are negative or not finite.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, WayfindError> {
        let mut graph = Self::new();

        for node in nodes {
            if graph.nodes.contains_key(&node.name) {
                return Err(WayfindError::InvalidGraph(format!(
                    "duplicate node {:?}",
                    node.name
                )));
            }
            graph.outgoing.insert(node.name.clone(), BTreeMap::new());
            graph.incoming.insert(node.name.clone(), BTreeMap::new());
            graph.nodes.insert(node.name.clone(), node);
        }

        for edge in edges {
            graph.insert_edge(edge)?;
        }

        Ok(graph)
    }

    fn insert_edge(&mut self, edge: Edge) -> Result<(), WayfindError> {
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(WayfindError::InvalidGraph(format!(
                "edge {:?} -> {:?} has invalid weight {}",
                edge.source, edge.target, edge.weight
            )));
        }

        let targets = self
            .outgoing
            .get_mut(&edge.source)
            .ok_or_else(|| WayfindError::NodeNotFound(edge.source.clone()))?;
        if targets.contains_key(&edge.target) {
            return Err(WayfindError::InvalidGraph(format!(
                "duplicate edge {:?} -> {:?}",
                edge.source, edge.target
            )));
        }

        let sources = self
            .incoming
            .get_mut(&edge.target)
            .ok_or_else(|| WayfindError::NodeNotFound(edge.target.clone()))?;

        sources.insert(edge.source.clone(), edge.clone());
        targets.insert(edge.target.clone(), edge);
        Ok(())
    }

    /// Get all nodes in name order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all edges ordered by (source, target).
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing.values().flat_map(BTreeMap::values)
    }

    /// Get the total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(BTreeMap::len).sum()
    }
}

impl GraphStore for Graph {
    fn node(&self, name: &str) -> Result<&Node, WayfindError> {
        self.nodes
            .get(name)
            .ok_or_else(|| WayfindError::NodeNotFound(name.to_string()))
    }

    fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    fn neighbors_out(&self, name: &str) -> Result<&BTreeMap<String, Edge>, WayfindError> {
        self.outgoing
            .get(name)
            .ok_or_else(|| WayfindError::NodeNotFound(name.to_string()))
    }

    fn neighbors_in(&self, name: &str) -> Result<&BTreeMap<String, Edge>, WayfindError> {
        self.incoming
            .get(name)
            .ok_or_else(|| WayfindError::NodeNotFound(name.to_string()))
    }

    fn edge(&self, source: &str, target: &str) -> Result<&Edge, WayfindError> {
        self.neighbors_out(source)?
            .get(target)
            .ok_or_else(|| WayfindError::EdgeNotFound(source.to_string(), target.to_string()))
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Add the reverse of every edge, turning a one-way listing into a
/// symmetric road network.
///
/// A reverse edge that is already listed explicitly is not duplicated.
#[must_use]
pub fn mirror_edges(edges: Vec<Edge>) -> Vec<Edge> {
    let listed: std::collections::BTreeSet<(String, String)> = edges
        .iter()
        .map(|e| (e.source.clone(), e.target.clone()))
        .collect();

    let mut mirrored = Vec::with_capacity(edges.len().saturating_mul(2));
    for edge in edges {
        let back = (edge.target.clone(), edge.source.clone());
        let reverse = (!listed.contains(&back)).then(|| edge.reversed());
        mirrored.push(edge);
        mirrored.extend(reverse);
    }
    mirrored
}

// =============================================================================
// TESTS
// =============================================================================
