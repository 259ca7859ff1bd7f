//! # Engine Primitives
//!
//! Compiled-in defaults and limits for wayfind.

/// Default scale applied to h(n) in A* mode.
///
/// - `0.0` turns A* into uniform-cost search.
/// - Large values approach greedy search.
pub const DEFAULT_HEURISTIC_WEIGHT: f64 = 1.0;

/// Best-cost pruning ("Dijkstra relaxation") is on unless disabled.
pub const DEFAULT_PRUNING: bool = true;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum size in bytes of a node book or edge list accepted by the loader.
///
/// Road networks for this engine are small; anything larger is rejected
/// before parsing.
pub const MAX_SOURCE_BYTES: usize = 16 * 1024 * 1024;

/// Maximum number of nodes accepted by the loader.
pub const MAX_NODES: usize = 100_000;

/// Maximum number of edge records accepted by the loader (before mirroring).
pub const MAX_EDGES: usize = 1_000_000;
