//! # Search Engine
//!
//! One best-first loop drives every search mode:
//!
//! ```text
//! READY ──seed──▶ EXPANDING ──goal──▶ FOUND
//!                     │
//!                     └──frontier empty──▶ EXHAUSTED
//! ```
//!
//! Each iteration pops one record, expands its outgoing edges, rejects
//! successors that would close a cycle, cuts off expansion at the depth
//! bound, scores survivors with the cost policy, applies best-cost pruning,
//! and either finishes on the goal or queues the successor.
//!
//! Iterative deepening is a driver around depth-first runs with bounds
//! 1, 2, …, L.
//!
//! Per-node search state lives in a scratch table owned by the run, so the
//! graph is only ever borrowed immutably and consecutive searches over the
//! same graph cannot influence each other.

use crate::WayfindError;
use crate::cost::CostPolicy;
use crate::frontier::{Frontier, PathRecord};
use crate::graph::GraphStore;
use crate::mode::{GoalTest, SearchMode};
use crate::observer::SearchObserver;
use crate::primitives::{DEFAULT_HEURISTIC_WEIGHT, DEFAULT_PRUNING};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// REQUEST
// =============================================================================

/// Parameters of a single search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Start node name.
    pub root: String,
    /// Goal node name.
    pub end: String,
    /// Strategy.
    pub mode: SearchMode,
    /// Scale applied to h(n) in A* mode.
    pub heuristic_weight: f64,
    /// Maximum number of edges on an explored path. Required by IDS, where
    /// it is the largest bound tried.
    pub depth_limit: Option<usize>,
    /// Best-cost pruning with eviction of dominated queued paths.
    pub pruning: bool,
}

impl SearchRequest {
    /// Request with default weight, no depth bound and pruning enabled.
    #[must_use]
    pub fn new(root: impl Into<String>, end: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            root: root.into(),
            end: end.into(),
            mode,
            heuristic_weight: DEFAULT_HEURISTIC_WEIGHT,
            depth_limit: None,
            pruning: DEFAULT_PRUNING,
        }
    }

    /// Set the heuristic weight.
    #[must_use]
    pub fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }

    /// Set the depth bound.
    #[must_use]
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = Some(depth_limit);
        self
    }

    /// Enable or disable best-cost pruning.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Check the request against a graph before any search work happens.
    pub fn validate<G: GraphStore + ?Sized>(&self, graph: &G) -> Result<(), WayfindError> {
        let fault = if self.root == self.end {
            Some("root and end are the same node")
        } else if !graph.contains(&self.root) {
            Some("root is not in the graph")
        } else if !graph.contains(&self.end) {
            Some("end is not in the graph")
        } else {
            None
        };
        if let Some(reason) = fault {
            return Err(WayfindError::InvalidEndpoints {
                root: self.root.clone(),
                end: self.end.clone(),
                reason,
            });
        }

        if !self.heuristic_weight.is_finite() || self.heuristic_weight < 0.0 {
            return Err(WayfindError::Configuration(format!(
                "heuristic weight must be finite and non-negative, got {}",
                self.heuristic_weight
            )));
        }

        match (self.mode, self.depth_limit) {
            (_, Some(0)) => Err(WayfindError::Configuration(
                "depth limit must be at least 1".to_string(),
            )),
            (SearchMode::Ids, None) => Err(WayfindError::Configuration(
                "iterative deepening requires a depth limit".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// A path to the goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Node names from root to goal.
    pub path: Vec<String>,
    /// Real cost g of the path under the mode's cost metric (hops for
    /// BFS/DFS/IDS, summed weights otherwise).
    pub cost: f64,
    /// Summed edge weights along the path, whatever the mode.
    pub distance: f64,
}

impl Route {
    /// Number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Terminal state of a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The goal was reached.
    Found(Route),
    /// Every reachable state was explored without reaching the goal.
    Exhausted,
}

impl SearchOutcome {
    /// Whether a route was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The route, if found.
    #[must_use]
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(route) => Some(route),
            Self::Exhausted => None,
        }
    }

    /// The path, if found.
    #[must_use]
    pub fn path(&self) -> Option<&[String]> {
        self.route().map(|r| r.path.as_slice())
    }

    /// The cost, if found.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.route().map(|r| r.cost)
    }
}

/// Counters collected over a search call (summed over IDS passes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Records popped from the frontier.
    pub expanded: usize,
    /// Successors admitted by every check.
    pub generated: usize,
    /// Successors rejected because they would revisit a node on their path.
    pub cycles_rejected: usize,
    /// Successors rejected by best-cost pruning.
    pub pruned: usize,
    /// Queued records evicted because a cheaper path to their node appeared.
    pub evicted: usize,
    /// Expansions skipped because the path already reached the depth bound.
    pub depth_cutoffs: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
    /// Engine passes (1, or the number of depth bounds tried by IDS).
    pub iterations: usize,
}

/// Outcome of a search call together with its statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchReport {
    /// The path, if found.
    #[must_use]
    pub fn path(&self) -> Option<&[String]> {
        self.outcome.path()
    }

    /// The cost, if found.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.outcome.cost()
    }
}

// =============================================================================
// SCRATCH TABLE
// =============================================================================

/// What one run knows about a node it has reached.
#[derive(Debug, Clone, Copy)]
struct NodeScratch {
    /// Lowest g with which the node has been admitted.
    best_cost: f64,
    /// How many successors ending at this node were admitted.
    admissions: u32,
}

/// Verdict of the best-cost check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    Rejected,
    Admitted { evict: bool },
}

/// Per-run side table: node name -> scratch.
#[derive(Debug, Default)]
struct ScratchTable {
    entries: BTreeMap<String, NodeScratch>,
}

impl ScratchTable {
    /// Best-cost check for a successor ending at `name` with cost `g`.
    ///
    /// Priority modes start every node at +inf and admit only strict
    /// improvements. Depth-first modes start a node at the g of its first
    /// arrival and also admit that first, equal-cost arrival. An admitted
    /// improvement asks for eviction when an earlier path to the node was
    /// admitted before.
    fn admit(&mut self, name: &str, g: f64, depth_first: bool) -> Admission {
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert(NodeScratch {
                best_cost: if depth_first { g } else { f64::INFINITY },
                admissions: 0,
            });

        let admission = if g < entry.best_cost {
            entry.best_cost = g;
            Admission::Admitted {
                evict: entry.admissions > 0,
            }
        } else if depth_first && g == entry.best_cost && entry.admissions == 0 {
            Admission::Admitted { evict: false }
        } else {
            return Admission::Rejected;
        };

        entry.admissions = entry.admissions.saturating_add(1);
        admission
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// Run a search.
///
/// Invalid endpoints, a bad heuristic weight, a zero depth bound, and IDS
/// without a depth bound are rejected before the frontier is seeded. Running
/// out of states is not an error: it yields `SearchOutcome::Exhausted`.
pub fn search<G, O>(
    graph: &G,
    request: &SearchRequest,
    policy: &CostPolicy<'_>,
    observer: &mut O,
) -> Result<SearchReport, WayfindError>
where
    G: GraphStore + ?Sized,
    O: SearchObserver + ?Sized,
{
    request.validate(graph)?;
    observer.on_start(request);

    let mut stats = SearchStats::default();
    let outcome = match request.mode {
        SearchMode::Ids => {
            let bound = request.depth_limit.ok_or_else(|| {
                WayfindError::Configuration("iterative deepening requires a depth limit".into())
            })?;
            // An acyclic path never has more edges than there are other nodes.
            let bound = bound.min(graph.node_count().saturating_sub(1).max(1));

            let mut outcome = SearchOutcome::Exhausted;
            for depth_limit in 1..=bound {
                stats.iterations += 1;
                observer.on_iteration(depth_limit);
                outcome = run(
                    graph,
                    request,
                    Some(depth_limit),
                    policy,
                    observer,
                    &mut stats,
                )?;
                if outcome.is_found() {
                    break;
                }
            }
            outcome
        }
        _ => {
            stats.iterations = 1;
            run(
                graph,
                request,
                request.depth_limit,
                policy,
                observer,
                &mut stats,
            )?
        }
    };

    observer.on_finish(&outcome);
    Ok(SearchReport { outcome, stats })
}

/// Search with the default cost policy and no observer.
pub fn find_path<G: GraphStore + ?Sized>(
    graph: &G,
    request: &SearchRequest,
) -> Result<SearchOutcome, WayfindError> {
    search(graph, request, &CostPolicy::default(), &mut ()).map(|report| report.outcome)
}

/// One pass of the best-first loop with a fresh frontier and scratch table.
fn run<G, O>(
    graph: &G,
    request: &SearchRequest,
    depth_limit: Option<usize>,
    policy: &CostPolicy<'_>,
    observer: &mut O,
    stats: &mut SearchStats,
) -> Result<SearchOutcome, WayfindError>
where
    G: GraphStore + ?Sized,
    O: SearchObserver + ?Sized,
{
    let mode = request.mode;
    let goal = graph.node(&request.end)?;
    let mut frontier = Frontier::new(mode.discipline());
    let mut scratch = ScratchTable::default();

    frontier.insert(PathRecord::root(request.root.as_str()));
    stats.max_frontier = stats.max_frontier.max(frontier.len());

    while let Some(record) = frontier.pop() {
        stats.expanded += 1;

        if mode.goal_test() == GoalTest::OnPop && record.node == request.end {
            return found(graph, record);
        }

        observer.on_expand(&record);

        // Every successor of this record would sit one edge deeper.
        if depth_limit.is_some_and(|limit| record.depth() >= limit) {
            stats.depth_cutoffs += 1;
            continue;
        }

        for (target, edge) in graph.neighbors_out(&record.node)? {
            if record.visits(target) {
                stats.cycles_rejected += 1;
                continue;
            }

            let g = policy.g(record.g, edge.weight, mode.counts_depth());
            let h = if mode.uses_heuristic() {
                let node = graph.node(target)?;
                policy.h(node.x, node.y, goal.x, goal.y)
            } else {
                0.0
            };
            let f = mode.priority(g, h, request.heuristic_weight);

            if request.pruning {
                match scratch.admit(target, g, mode.is_depth_first()) {
                    Admission::Rejected => {
                        stats.pruned += 1;
                        continue;
                    }
                    Admission::Admitted { evict: true } => {
                        if frontier.remove_by_node_name(target).is_some() {
                            stats.evicted += 1;
                        }
                    }
                    Admission::Admitted { evict: false } => {}
                }
            }

            let successor = record.successor(target, g, h, f);
            stats.generated += 1;
            observer.on_edge(edge);

            if mode.goal_test() == GoalTest::OnGenerate && successor.node == request.end {
                return found(graph, successor);
            }

            frontier.insert(successor);
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }
    }

    Ok(SearchOutcome::Exhausted)
}

fn found<G: GraphStore + ?Sized>(
    graph: &G,
    record: PathRecord,
) -> Result<SearchOutcome, WayfindError> {
    let distance = graph.path_distance(&record.path)?;
    Ok(SearchOutcome::Found(Route {
        cost: record.g,
        distance,
        path: record.path,
    }))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mirror_edges;
    use crate::observer::StepRecorder;
    use crate::{Edge, Graph, Node};

    fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    /// A–B 1, B–C 1, A–C 5, C–D 3, all two-way, nodes on a line.
    fn line_graph() -> Graph {
        Graph::from_parts(
            vec![
                Node::new("A", 0.0, 0.0),
                Node::new("B", 1.0, 0.0),
                Node::new("C", 2.0, 0.0),
                Node::new("D", 3.0, 0.0),
            ],
            mirror_edges(vec![
                Edge::new("A", "B", 1.0),
                Edge::new("B", "C", 1.0),
                Edge::new("A", "C", 5.0),
                Edge::new("C", "D", 3.0),
            ]),
        )
        .expect("graph")
    }

    #[test]
    fn scratch_priority_modes_need_strict_improvement() {
        let mut scratch = ScratchTable::default();
        assert_eq!(
            scratch.admit("X", 5.0, false),
            Admission::Admitted { evict: false }
        );
        assert_eq!(scratch.admit("X", 5.0, false), Admission::Rejected);
        assert_eq!(scratch.admit("X", 7.0, false), Admission::Rejected);
        assert_eq!(
            scratch.admit("X", 2.0, false),
            Admission::Admitted { evict: true }
        );
    }

    #[test]
    fn scratch_depth_first_admits_first_tie_only() {
        let mut scratch = ScratchTable::default();
        assert_eq!(
            scratch.admit("X", 3.0, true),
            Admission::Admitted { evict: false }
        );
        // Same depth again, node already admitted: rejected
        assert_eq!(scratch.admit("X", 3.0, true), Admission::Rejected);
        assert_eq!(scratch.admit("X", 4.0, true), Admission::Rejected);
        assert_eq!(
            scratch.admit("X", 1.0, true),
            Admission::Admitted { evict: true }
        );
        assert_eq!(scratch.admit("X", 1.0, true), Admission::Rejected);
    }

    #[test]
    fn a_star_prefers_cheaper_detour() {
        let graph = line_graph();
        let outcome =
            find_path(&graph, &SearchRequest::new("A", "C", SearchMode::AStar)).expect("search");
        assert_eq!(outcome.path(), Some(names(&["A", "B", "C"]).as_slice()));
        assert_eq!(outcome.cost(), Some(2.0));
    }

    #[test]
    fn bfs_prefers_fewest_hops() {
        let graph = line_graph();
        let outcome =
            find_path(&graph, &SearchRequest::new("A", "C", SearchMode::Bfs)).expect("search");
        let route = outcome.route().expect("found");
        assert_eq!(route.path, names(&["A", "C"]));
        assert_eq!(route.cost, 1.0);
        assert_eq!(route.distance, 5.0);
    }

    #[test]
    fn evicts_dominated_queued_path() {
        let graph = line_graph();
        let report = search(
            &graph,
            &SearchRequest::new("A", "C", SearchMode::Ucs),
            &CostPolicy::default(),
            &mut (),
        )
        .expect("search");
        // A->C (5) queued first, then replaced by A->B->C (2)
        assert_eq!(report.stats.evicted, 1);
        assert_eq!(report.cost(), Some(2.0));
    }

    #[test]
    fn without_pruning_both_paths_stay_queued() {
        let graph = line_graph();
        let report = search(
            &graph,
            &SearchRequest::new("A", "C", SearchMode::Ucs).with_pruning(false),
            &CostPolicy::default(),
            &mut (),
        )
        .expect("search");
        assert_eq!(report.stats.evicted, 0);
        assert_eq!(report.stats.pruned, 0);
        assert_eq!(report.cost(), Some(2.0));
    }

    #[test]
    fn depth_limit_cuts_off_deeper_paths() {
        let graph = line_graph();
        let outcome = find_path(
            &graph,
            &SearchRequest::new("A", "D", SearchMode::Bfs).with_depth_limit(1),
        )
        .expect("search");
        assert_eq!(outcome, SearchOutcome::Exhausted);

        let outcome = find_path(
            &graph,
            &SearchRequest::new("A", "D", SearchMode::Bfs).with_depth_limit(2),
        )
        .expect("search");
        assert_eq!(outcome.path(), Some(names(&["A", "C", "D"]).as_slice()));
    }

    #[test]
    fn ids_reports_each_iteration() {
        let graph = line_graph();
        let mut recorder = StepRecorder::new();
        let report = search(
            &graph,
            &SearchRequest::new("A", "D", SearchMode::Ids).with_depth_limit(5),
            &CostPolicy::default(),
            &mut recorder,
        )
        .expect("search");

        assert_eq!(report.stats.iterations, 2);
        assert_eq!(report.cost(), Some(2.0));
        let passes = recorder
            .steps()
            .iter()
            .filter(|s| matches!(s, crate::observer::SearchStep::Iteration { .. }))
            .count();
        assert_eq!(passes, 2);
    }

    #[test]
    fn ids_bound_is_clamped_to_node_count() {
        let graph = line_graph();
        let report = search(
            &graph,
            &SearchRequest::new("D", "A", SearchMode::Ids).with_depth_limit(1_000),
            &CostPolicy::default(),
            &mut (),
        )
        .expect("search");
        assert!(report.outcome.is_found());
        assert!(report.stats.iterations <= 3);
    }

    #[test]
    fn validation_errors() {
        let graph = line_graph();

        let same = SearchRequest::new("A", "A", SearchMode::AStar);
        assert!(matches!(
            same.validate(&graph),
            Err(WayfindError::InvalidEndpoints { .. })
        ));

        let missing = SearchRequest::new("A", "Z", SearchMode::AStar);
        assert!(matches!(
            missing.validate(&graph),
            Err(WayfindError::InvalidEndpoints { reason, .. }) if reason.contains("end")
        ));

        let ids = SearchRequest::new("A", "D", SearchMode::Ids);
        assert!(matches!(
            ids.validate(&graph),
            Err(WayfindError::Configuration(_))
        ));

        let zero = SearchRequest::new("A", "D", SearchMode::Dfs).with_depth_limit(0);
        assert!(matches!(
            zero.validate(&graph),
            Err(WayfindError::Configuration(_))
        ));

        let negative = SearchRequest::new("A", "D", SearchMode::AStar).with_heuristic_weight(-1.0);
        assert!(matches!(
            negative.validate(&graph),
            Err(WayfindError::Configuration(_))
        ));
    }
}
