//! # wayfind-core
//!
//! The deterministic path-search engine for wayfind.
//!
//! One generic best-first loop runs six strategies over a static directed
//! road network: A*, uniform-cost, greedy best-first, breadth-first,
//! depth-first and iterative deepening. Strategies differ only in how the
//! frontier orders its records, how g(n) is accumulated and whether h(n)
//! contributes to the priority.
//!
//! ## Constraints
//!
//! - The graph is immutable once built; searches only borrow it.
//! - Per-node search state lives in a scratch table owned by each run.
//! - Every index is a `BTreeMap`, so expansion order is reproducible.
//! - No logging and no I/O beyond the optional file loader in `formats`.

// =============================================================================
// MODULES
// =============================================================================

pub mod cost;
pub mod engine;
pub mod formats;
pub mod frontier;
pub mod graph;
pub mod mode;
pub mod observer;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Edge, Node, WayfindError};

// =============================================================================
// RE-EXPORTS: Search Engine
// =============================================================================

pub use cost::{AccumulatedCost, CostPolicy, Euclidean, Heuristic, RealCost};
pub use engine::{
    Route, SearchOutcome, SearchReport, SearchRequest, SearchStats, find_path, search,
};
pub use frontier::{Discipline, Frontier, PathRecord, is_circular_path};
pub use graph::{Graph, GraphStore, mirror_edges};
pub use mode::{GoalTest, SearchMode};
pub use observer::{SearchObserver, SearchStep, StepRecorder};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{load_graph, read_graph};
