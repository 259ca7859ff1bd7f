//! # Search Observers
//!
//! Hooks through which a renderer, logger or test can follow a search step
//! by step. The engine calls the observer but never depends on it: every
//! method has a no-op default and none can influence the result.

use crate::Edge;
use crate::engine::{SearchOutcome, SearchRequest};
use crate::frontier::PathRecord;
use serde::Serialize;

/// Receives engine events in the order they happen.
pub trait SearchObserver {
    /// A search run is about to seed its frontier.
    fn on_start(&mut self, _request: &SearchRequest) {}

    /// An iterative-deepening pass with this depth bound is starting.
    fn on_iteration(&mut self, _depth_limit: usize) {}

    /// A record was popped and is being expanded. Its path gives the
    /// current path edges.
    fn on_expand(&mut self, _record: &PathRecord) {}

    /// An edge produced an admitted successor.
    fn on_edge(&mut self, _edge: &Edge) {}

    /// The run reached a terminal state.
    fn on_finish(&mut self, _outcome: &SearchOutcome) {}
}

/// Observer that ignores everything.
impl SearchObserver for () {}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_start(&mut self, request: &SearchRequest) {
        (**self).on_start(request);
    }

    fn on_iteration(&mut self, depth_limit: usize) {
        (**self).on_iteration(depth_limit);
    }

    fn on_expand(&mut self, record: &PathRecord) {
        (**self).on_expand(record);
    }

    fn on_edge(&mut self, edge: &Edge) {
        (**self).on_edge(edge);
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        (**self).on_finish(outcome);
    }
}

/// Two observers fed the same events, first one first.
impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn on_start(&mut self, request: &SearchRequest) {
        self.0.on_start(request);
        self.1.on_start(request);
    }

    fn on_iteration(&mut self, depth_limit: usize) {
        self.0.on_iteration(depth_limit);
        self.1.on_iteration(depth_limit);
    }

    fn on_expand(&mut self, record: &PathRecord) {
        self.0.on_expand(record);
        self.1.on_expand(record);
    }

    fn on_edge(&mut self, edge: &Edge) {
        self.0.on_edge(edge);
        self.1.on_edge(edge);
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        self.0.on_finish(outcome);
        self.1.on_finish(outcome);
    }
}

/// One recorded engine event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchStep {
    /// Run started.
    Start { root: String, end: String, mode: String },
    /// Iterative-deepening pass started.
    Iteration { depth_limit: usize },
    /// Node expanded along `path`.
    Expand { node: String, g: f64, f: f64, path: Vec<String> },
    /// Edge expanded.
    Edge { source: String, target: String },
    /// Run finished; `path` is absent when the search was exhausted.
    Finish { path: Option<Vec<String>>, cost: Option<f64> },
}

/// Observer that records every event, e.g. to replay a search as an
/// animation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StepRecorder {
    steps: Vec<SearchStep>,
}

impl StepRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }

    /// Consume the recorder, returning the steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<SearchStep> {
        self.steps
    }

    /// Names of expanded nodes in expansion order.
    pub fn expansion_order(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            SearchStep::Expand { node, .. } => Some(node.as_str()),
            _ => None,
        })
    }
}

impl SearchObserver for StepRecorder {
    fn on_start(&mut self, request: &SearchRequest) {
        self.steps.push(SearchStep::Start {
            root: request.root.clone(),
            end: request.end.clone(),
            mode: request.mode.name().to_string(),
        });
    }

    fn on_iteration(&mut self, depth_limit: usize) {
        self.steps.push(SearchStep::Iteration { depth_limit });
    }

    fn on_expand(&mut self, record: &PathRecord) {
        self.steps.push(SearchStep::Expand {
            node: record.node.clone(),
            g: record.g,
            f: record.f,
            path: record.path.clone(),
        });
    }

    fn on_edge(&mut self, edge: &Edge) {
        self.steps.push(SearchStep::Edge {
            source: edge.source.clone(),
            target: edge.target.clone(),
        });
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        let (path, cost) = match outcome {
            SearchOutcome::Found(route) => (Some(route.path.clone()), Some(route.cost)),
            SearchOutcome::Exhausted => (None, None),
        };
        self.steps.push(SearchStep::Finish { path, cost });
    }
}
