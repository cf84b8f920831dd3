//! Layout strategies: choose which reads follow which.
//!
//! A layout turns an [`OverlapMatrix`] into a set of [`Arc`]s in which every
//! read has at most one successor and at most one predecessor, so the arcs
//! form disjoint simple paths. Two strategies implement [`LayoutStrategy`]:
//!
//! - [`GreedyLayout`]: repeatedly takes the best remaining overlap, subject to
//!   degree and cycle constraints. May produce several paths.
//! - [`TspLayout`]: reduces the matrix to an asymmetric TSP cost matrix and
//!   converts the solver's tour into a single path through every read.
//!
//! The matrix is moved into the strategy, which owns and mutates it for the
//! duration of the run.

pub mod cycle;
pub mod greedy;
pub mod solver;
pub mod tsp;

use serde::Serialize;
use thiserror::Error;

use crate::core::matrix::OverlapMatrix;
use crate::core::types::Arc;

pub use cycle::CycleDetector;
pub use greedy::GreedyLayout;
pub use solver::{LocalSearchSolver, SolverError, SolverOptions, TspSolution, TspSolver};
pub use tsp::{CostMatrix, TspLayout};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("TSP solver failed: {0}")]
    Solver(#[from] SolverError),
}

/// Counters describing what a layout run did with its candidate edges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    /// Selection rounds executed
    pub rounds: usize,
    /// Arcs in the result
    pub accepted: usize,
    /// Best candidate had no overlap at all
    pub zero_overlap: usize,
    /// Best candidate overlapped by the full read length
    pub contained_overlap: usize,
    /// Source already had a successor or destination a predecessor
    pub degree_conflict: usize,
    /// Accepting the candidate would have closed a cycle
    pub cycle: usize,
    /// Rounds in which no valid cell remained
    pub exhausted: usize,
}

impl LayoutStats {
    /// Total candidates that were considered and rejected
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.zero_overlap + self.contained_overlap + self.degree_conflict + self.cycle
    }
}

/// Result of one layout run
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Accepted arcs in acceptance order
    pub arcs: Vec<Arc>,
    pub stats: LayoutStats,
}

/// A strategy that orders reads from their overlap matrix
pub trait LayoutStrategy {
    /// Compute a layout, consuming the matrix.
    ///
    /// `read_length` is the nominal length shared by every read.
    ///
    /// # Errors
    ///
    /// Strategies that delegate to an external optimizer return its failure
    /// as `LayoutError`. The greedy strategy never fails.
    fn layout(&self, matrix: OverlapMatrix, read_length: usize) -> Result<Layout, LayoutError>;
}
