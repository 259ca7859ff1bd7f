//! # Frontier
//!
//! The open set of a search: path records waiting to be expanded.
//!
//! The frontier is a plain vector whose tail is always the next record to
//! expand. Insertion placement encodes the discipline:
//!
//! - `Descending`: sorted by f, largest at the head, so the tail is the
//!   cheapest record. Binary search finds the slot.
//! - `Ascending`: sorted by f, smallest at the head, so the tail is the most
//!   expensive record.
//! - `Fifo`: insert at the head; the tail is the oldest record.
//! - `Filo`: insert at the tail; the tail is the newest record.
//!
//! Among records of equal priority the one inserted first is popped first.

use serde::Serialize;
use std::cmp::Ordering;

// =============================================================================
// PATH RECORD
// =============================================================================

/// One unit of search state: a node together with the path that reached it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRecord {
    /// Node at the end of the path.
    pub node: String,
    /// Accumulated real cost g.
    pub g: f64,
    /// Heuristic estimate h.
    pub h: f64,
    /// Priority f.
    pub f: f64,
    /// Node names from the root to `node`, without repeats.
    pub path: Vec<String>,
}

impl PathRecord {
    /// The seed record for a search: cost zero, path `[root]`.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: vec![name.clone()],
            node: name,
            g: 0.0,
            h: 0.0,
            f: 0.0,
        }
    }

    /// Number of edges on the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the path already passes through `name`.
    #[must_use]
    pub fn visits(&self, name: &str) -> bool {
        self.path.iter().any(|n| n == name)
    }

    /// Successor record reached over one more edge.
    ///
    /// No cycle check; callers test `visits` first.
    #[must_use]
    pub fn successor(&self, target: &str, g: f64, h: f64, f: f64) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(target.to_string());
        Self {
            node: target.to_string(),
            g,
            h,
            f,
            path,
        }
    }

    /// Consecutive (source, target) pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

/// True when a sequence of node names repeats any name.
#[must_use]
pub fn is_circular_path(path: &[String]) -> bool {
    let unique: std::collections::BTreeSet<&str> = path.iter().map(String::as_str).collect();
    unique.len() != path.len()
}

// =============================================================================
// FRONTIER
// =============================================================================

/// How records are placed, and therefore which record is popped next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Sorted by f, pop smallest first.
    Descending,
    /// Sorted by f, pop largest first.
    Ascending,
    /// Queue: pop oldest first.
    Fifo,
    /// Stack: pop newest first.
    Filo,
}

/// Ordered collection of path records.
#[derive(Debug, Clone)]
pub struct Frontier {
    discipline: Discipline,
    records: Vec<PathRecord>,
}

impl Frontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            records: Vec::new(),
        }
    }

    /// Insert a record according to the discipline.
    ///
    /// Priority disciplines binary-search for the slot (O(log n)
    /// comparisons, O(n) shift). A new record lands on the head side of any
    /// records with equal f.
    pub fn insert(&mut self, record: PathRecord) {
        let index = match self.discipline {
            Discipline::Descending => self
                .records
                .partition_point(|r| r.f.total_cmp(&record.f) == Ordering::Greater),
            Discipline::Ascending => self
                .records
                .partition_point(|r| r.f.total_cmp(&record.f) == Ordering::Less),
            Discipline::Fifo => 0,
            Discipline::Filo => self.records.len(),
        };
        self.records.insert(index, record);
    }

    /// Remove and return the next record to expand.
    pub fn pop(&mut self) -> Option<PathRecord> {
        self.records.pop()
    }

    /// The record `pop` would return, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&PathRecord> {
        self.records.last()
    }

    /// Remove the first record ending at `name`. No-op if there is none.
    pub fn remove_by_node_name(&mut self, name: &str) -> Option<PathRecord> {
        let index = self.records.iter().position(|r| r.node == name)?;
        Some(self.records.remove(index))
    }

    /// Number of queued records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the search has run out of work.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Queued records from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &PathRecord> {
        self.records.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
