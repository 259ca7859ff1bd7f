//! # Cost Policy
//!
//! The two substitutable scoring functions of a search:
//!
//! - `RealCost`: g(n), the cost accumulated from the root
//! - `Heuristic`: h(n), the estimated remaining cost to the goal
//!
//! Both traits are implemented for plain closures, so callers can pass
//! `|prev, weight, depth_mode| ...` or `|x1, y1, x2, y2| ...` directly.
//! How g and h combine into the priority f is decided by the search mode,
//! not here.

/// Accumulates the real path cost g(n) one edge at a time.
pub trait RealCost {
    /// Cost of the successor reached from a path of cost `prev_cost` over an
    /// edge of `edge_weight`. `depth_mode` is set for the hop-counted modes.
    fn g(&self, prev_cost: f64, edge_weight: f64, depth_mode: bool) -> f64;
}

/// Estimates the remaining cost h(n) from one coordinate pair to another.
pub trait Heuristic {
    /// Estimate for a node at `(x1, y1)` with the goal at `(x2, y2)`.
    fn h(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64;
}

impl<F> RealCost for F
where
    F: Fn(f64, f64, bool) -> f64,
{
    fn g(&self, prev_cost: f64, edge_weight: f64, depth_mode: bool) -> f64 {
        self(prev_cost, edge_weight, depth_mode)
    }
}

impl<F> Heuristic for F
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    fn h(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        self(x1, y1, x2, y2)
    }
}

/// Default g(n): one per hop in depth mode, edge weight otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccumulatedCost;

impl RealCost for AccumulatedCost {
    fn g(&self, prev_cost: f64, edge_weight: f64, depth_mode: bool) -> f64 {
        if depth_mode {
            prev_cost + 1.0
        } else {
            prev_cost + edge_weight
        }
    }
}

/// Default h(n): straight-line distance between the two points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn h(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        (x2 - x1).hypot(y2 - y1)
    }
}

/// The pair of scoring functions handed to a search.
pub struct CostPolicy<'a> {
    real: Box<dyn RealCost + 'a>,
    heuristic: Box<dyn Heuristic + 'a>,
}

impl<'a> CostPolicy<'a> {
    /// Build a policy from any g and h implementations.
    pub fn new(real: impl RealCost + 'a, heuristic: impl Heuristic + 'a) -> Self {
        Self {
            real: Box::new(real),
            heuristic: Box::new(heuristic),
        }
    }

    /// Replace the g function, keeping the heuristic.
    #[must_use]
    pub fn with_real_cost(mut self, real: impl RealCost + 'a) -> Self {
        self.real = Box::new(real);
        self
    }

    /// Replace the heuristic, keeping the g function.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: impl Heuristic + 'a) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    /// Evaluate g(n).
    pub fn g(&self, prev_cost: f64, edge_weight: f64, depth_mode: bool) -> f64 {
        self.real.g(prev_cost, edge_weight, depth_mode)
    }

    /// Evaluate h(n).
    pub fn h(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        self.heuristic.h(x1, y1, x2, y2)
    }
}

impl Default for CostPolicy<'_> {
    fn default() -> Self {
        Self::new(AccumulatedCost, Euclidean)
    }
}

impl std::fmt::Debug for CostPolicy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostPolicy").finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
