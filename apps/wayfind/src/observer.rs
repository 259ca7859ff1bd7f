//! # Tracing Observer
//!
//! Forwards engine events to `tracing`: one info line when a search starts
//! and finishes, debug lines per expansion and deepening pass, trace lines
//! per admitted edge.

use wayfind_core::{Edge, PathRecord, SearchObserver, SearchOutcome, SearchRequest};

/// Logs search progress under the `wayfind::search` target.
#[derive(Debug, Default)]
pub struct TracingObserver {
    expanded: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

impl SearchObserver for TracingObserver {
    fn on_start(&mut self, request: &SearchRequest) {
        self.expanded = 0;
        tracing::info!(
            target: "wayfind::search",
            mode = %request.mode,
            root = %request.root,
            end = %request.end,
            depth_limit = ?request.depth_limit,
            pruning = request.pruning,
            "search started"
        );
    }

    fn on_iteration(&mut self, depth_limit: usize) {
        tracing::debug!(target: "wayfind::search", depth_limit, "deepening pass");
    }

    fn on_expand(&mut self, record: &PathRecord) {
        self.expanded += 1;
        tracing::debug!(
            target: "wayfind::search",
            node = %record.node,
            g = record.g,
            f = record.f,
            depth = record.depth(),
            "expand"
        );
    }

    fn on_edge(&mut self, edge: &Edge) {
        tracing::trace!(
            target: "wayfind::search",
            source = %edge.source,
            target_node = %edge.target,
            weight = edge.weight,
            "edge"
        );
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        match outcome {
            SearchOutcome::Found(route) => tracing::info!(
                target: "wayfind::search",
                cost = route.cost,
                hops = route.hops(),
                expanded = self.expanded,
                "goal reached"
            ),
            SearchOutcome::Exhausted => tracing::info!(
                target: "wayfind::search",
                expanded = self.expanded,
                "search exhausted without reaching the goal"
            ),
        }
    }
}
