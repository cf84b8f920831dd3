//! Approximate asymmetric TSP solving.
//!
//! [`TspSolver`] is the boundary consumed by [`TspLayout`](super::TspLayout).
//! [`LocalSearchSolver`] is the in-tree implementation: a nearest-neighbour
//! starting tour refined by first-improvement local search with relocate and
//! swap moves. Tours are closed (the edge from the last node back to the
//! first is part of the cost) and always start at node 0.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::tsp::CostMatrix;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Cost matrix is empty")]
    EmptyProblem,

    #[error("Solver returned an invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("Solver failed: {0}")]
    Failed(String),
}

/// Pass-through options for a TSP solver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Wall-clock budget for the search, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_processing_time: Option<f64>,

    /// Maximum number of improving moves to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl SolverOptions {
    /// The time budget as a `Duration`; negative or non-finite values mean no budget
    #[must_use]
    pub fn time_budget(&self) -> Option<Duration> {
        self.max_processing_time
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

/// A visiting order and its closed-tour cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TspSolution {
    pub order: Vec<usize>,
    pub total_cost: i64,
}

/// An approximate asymmetric TSP solver
pub trait TspSolver {
    /// Find a low-cost tour over every node of `costs`.
    ///
    /// # Errors
    ///
    /// Implementations report any failure as `SolverError`; callers do not
    /// retry.
    fn solve(&self, costs: &CostMatrix, options: &SolverOptions)
        -> Result<TspSolution, SolverError>;
}

impl<F> TspSolver for F
where
    F: Fn(&CostMatrix, &SolverOptions) -> Result<TspSolution, SolverError>,
{
    fn solve(
        &self,
        costs: &CostMatrix,
        options: &SolverOptions,
    ) -> Result<TspSolution, SolverError> {
        self(costs, options)
    }
}

/// Deterministic local-search ATSP heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSearchSolver;

impl LocalSearchSolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TspSolver for LocalSearchSolver {
    fn solve(
        &self,
        costs: &CostMatrix,
        options: &SolverOptions,
    ) -> Result<TspSolution, SolverError> {
        let n = costs.size();
        if n == 0 {
            return Err(SolverError::EmptyProblem);
        }
        if n == 1 {
            return Ok(TspSolution {
                order: vec![0],
                total_cost: 0,
            });
        }

        let started = Instant::now();
        let deadline = options.time_budget().map(|budget| started + budget);
        let timed_out = || deadline.is_some_and(|d| Instant::now() >= d);
        let out_of_moves = |moves: usize| options.max_iterations.is_some_and(|max| moves >= max);

        let mut tour = nearest_neighbour_tour(costs);
        let mut best = tour_cost(costs, &tour);
        let mut moves = 0;

        'search: loop {
            let mut improved = false;

            // Relocate: move the node at position i to position j
            for i in 1..n {
                if timed_out() || out_of_moves(moves) {
                    break 'search;
                }
                for j in 1..n {
                    if i == j {
                        continue;
                    }
                    let mut candidate = tour.clone();
                    let node = candidate.remove(i);
                    candidate.insert(j, node);
                    let cost = tour_cost(costs, &candidate);
                    if cost < best {
                        tour = candidate;
                        best = cost;
                        moves += 1;
                        improved = true;
                        break;
                    }
                }
            }

            // Swap: exchange the nodes at positions i and k
            for i in 1..n {
                if timed_out() || out_of_moves(moves) {
                    break 'search;
                }
                for k in i + 1..n {
                    tour.swap(i, k);
                    let cost = tour_cost(costs, &tour);
                    if cost < best {
                        best = cost;
                        moves += 1;
                        improved = true;
                    } else {
                        tour.swap(i, k);
                    }
                }
            }

            if !improved {
                break;
            }
        }

        debug!(
            nodes = n,
            moves,
            total_cost = best,
            elapsed_ms = started.elapsed().as_millis(),
            "Local search finished"
        );

        Ok(TspSolution {
            order: tour,
            total_cost: best,
        })
    }
}

/// Greedy tour from node 0, always stepping to the cheapest unvisited node
/// (lowest index on ties)
fn nearest_neighbour_tour(costs: &CostMatrix) -> Vec<usize> {
    let n = costs.size();
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    tour.push(0);

    while tour.len() < n {
        let next = (0..n)
            .filter(|&j| !visited[j])
            .min_by_key(|&j| (costs.get(current, j), j));
        let Some(next) = next else { break };
        visited[next] = true;
        tour.push(next);
        current = next;
    }
    tour
}

/// Cost of the closed tour, including the edge back to the first node
#[must_use]
pub fn tour_cost(costs: &CostMatrix, tour: &[usize]) -> i64 {
    if tour.len() < 2 {
        return 0;
    }
    let open: i64 = tour
        .windows(2)
        .map(|w| costs.get(w[0], w[1]))
        .fold(0, i64::saturating_add);
    open.saturating_add(costs.get(tour[tour.len() - 1], tour[0]))
}
