//! # Search Modes
//!
//! The six search strategies are one engine run under different policies.
//! Each `SearchMode` fixes:
//!
//! | Mode | g | h | f | Frontier |
//! |---|---|---|---|---|
//! | `a_star` | weighted | heuristic | g + w·h | descending, pop best |
//! | `ucs` | weighted | 0 | g | descending, pop best |
//! | `gs` | weighted | heuristic | h | descending, pop best |
//! | `bfs` | hops | 0 | g | FIFO |
//! | `dfs` | hops | 0 | g | FILO |
//! | `ids` | hops | 0 | g | FILO, depth 1..=L |

use crate::WayfindError;
use crate::frontier::Discipline;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// A*: f = g + weight·h.
    AStar,
    /// Uniform-cost search: f = g.
    Ucs,
    /// Greedy search: f = h.
    Gs,
    /// Breadth-first search over hop counts.
    Bfs,
    /// Depth-first search over hop counts.
    Dfs,
    /// Iterative deepening: depth-first with growing depth bounds.
    Ids,
}

/// When the goal check happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTest {
    /// Finish as soon as the goal is generated as a successor.
    OnGenerate,
    /// Queue the goal like any node and finish when it is popped.
    OnPop,
}

impl SearchMode {
    /// Every mode, in the order the demo battery runs them.
    pub const ALL: [SearchMode; 6] = [
        SearchMode::AStar,
        SearchMode::Ucs,
        SearchMode::Gs,
        SearchMode::Bfs,
        SearchMode::Dfs,
        SearchMode::Ids,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "a_star",
            Self::Ucs => "ucs",
            Self::Gs => "gs",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ids => "ids",
        }
    }

    /// Whether g counts hops instead of summing edge weights.
    #[must_use]
    pub const fn counts_depth(self) -> bool {
        matches!(self, Self::Bfs | Self::Dfs | Self::Ids)
    }

    /// Whether the mode explores deepest-first, which relaxes the
    /// dominance check for equal-cost first admissions.
    #[must_use]
    pub const fn is_depth_first(self) -> bool {
        matches!(self, Self::Dfs | Self::Ids)
    }

    /// Whether h must be evaluated at all.
    #[must_use]
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Self::AStar | Self::Gs)
    }

    /// Frontier ordering for this mode.
    #[must_use]
    pub const fn discipline(self) -> Discipline {
        match self {
            Self::AStar | Self::Ucs | Self::Gs => Discipline::Descending,
            Self::Bfs => Discipline::Fifo,
            Self::Dfs | Self::Ids => Discipline::Filo,
        }
    }

    /// When the goal is recognised.
    #[must_use]
    pub const fn goal_test(self) -> GoalTest {
        if self.counts_depth() {
            GoalTest::OnGenerate
        } else {
            GoalTest::OnPop
        }
    }

    /// Combine g and h into the priority f.
    ///
    /// `h` is expected to be zero for modes that do not use a heuristic.
    #[must_use]
    pub fn priority(self, g: f64, h: f64, heuristic_weight: f64) -> f64 {
        match self {
            Self::AStar => g + h * heuristic_weight,
            Self::Gs => h,
            Self::Ucs | Self::Bfs | Self::Dfs | Self::Ids => g,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchMode {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a_star" | "astar" | "a*" => Ok(Self::AStar),
            "ucs" => Ok(Self::Ucs),
            "gs" | "greedy" => Ok(Self::Gs),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "ids" => Ok(Self::Ids),
            _ => Err(WayfindError::UnsupportedMode(s.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
