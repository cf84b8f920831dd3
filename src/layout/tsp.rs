use serde::Serialize;
use tracing::debug;

use super::solver::{LocalSearchSolver, SolverError, SolverOptions, TspSolver};
use super::{Layout, LayoutError, LayoutStats, LayoutStrategy};
use crate::core::matrix::OverlapMatrix;
use crate::core::types::Arc;

/// Square transition-cost table handed to a [`TspSolver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostMatrix {
    size: usize,
    cells: Vec<i64>,
}

impl CostMatrix {
    /// Cost of a forbidden transition. Small enough that a tour's worth of
    /// them still fits in an `i64`.
    pub const FORBIDDEN: i64 = i64::MAX / 4;

    /// Convert overlaps to costs: `C[i][j] = max_overlap - M[i][j]`, with
    /// self-transitions forbidden. `max_overlap` ignores the diagonal and is
    /// `0` when the matrix has no valid cell.
    #[must_use]
    pub fn from_overlaps(overlaps: &OverlapMatrix) -> Self {
        let size = overlaps.size();
        let max_overlap = overlaps.max_valid().unwrap_or(0);

        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(if i == j {
                    Self::FORBIDDEN
                } else {
                    max_overlap - overlaps.get(i, j)
                });
            }
        }
        Self { size, cells }
    }

    /// Build a cost matrix from rows. Returns `None` if the rows are not square.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.size + col]
    }
}

/// Layout by reduction to an approximate asymmetric TSP.
///
/// Always yields a single chain through every read: the solver's visiting
/// order becomes `n - 1` arcs between consecutive reads, each weighted by the
/// overlap of that pair in the input matrix. Solver failures are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct TspLayout<S = LocalSearchSolver> {
    solver: S,
    options: SolverOptions,
}

impl TspLayout<LocalSearchSolver> {
    #[must_use]
    pub fn new(options: SolverOptions) -> Self {
        Self::with_solver(LocalSearchSolver::new(), options)
    }
}

impl<S: TspSolver> TspLayout<S> {
    pub fn with_solver(solver: S, options: SolverOptions) -> Self {
        Self { solver, options }
    }
}

impl<S: TspSolver> LayoutStrategy for TspLayout<S> {
    fn layout(&self, matrix: OverlapMatrix, _read_length: usize) -> Result<Layout, LayoutError> {
        let n = matrix.size();
        let costs = CostMatrix::from_overlaps(&matrix);
        let solution = self.solver.solve(&costs, &self.options)?;
        check_permutation(&solution.order, n)?;

        let arcs: Vec<Arc> = solution
            .order
            .windows(2)
            .map(|w| {
                let weight = usize::try_from(matrix.get(w[0], w[1])).unwrap_or(0);
                Arc::new(w[0], w[1], weight)
            })
            .collect();

        debug!(
            reads = n,
            arcs = arcs.len(),
            total_cost = solution.total_cost,
            "TSP layout finished"
        );

        let stats = LayoutStats {
            rounds: 1,
            accepted: arcs.len(),
            ..LayoutStats::default()
        };
        Ok(Layout { arcs, stats })
    }
}

fn check_permutation(order: &[usize], n: usize) -> Result<(), SolverError> {
    if order.len() != n {
        return Err(SolverError::InvalidPermutation(format!(
            "expected {n} entries, got {}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for &node in order {
        if node >= n {
            return Err(SolverError::InvalidPermutation(format!(
                "index {node} out of range for {n} reads"
            )));
        }
        if seen[node] {
            return Err(SolverError::InvalidPermutation(format!(
                "index {node} visited twice"
            )));
        }
        seen[node] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TspSolution;
    use crate::overlap::build_overlap_matrix;

    fn scenario() -> OverlapMatrix {
        OverlapMatrix::from_rows(vec![vec![-1, 3, 2], vec![0, -1, 3], vec![0, 0, -1]]).unwrap()
    }

    #[test]
    fn test_cost_matrix_from_overlaps() {
        let costs = CostMatrix::from_overlaps(&scenario());
        assert_eq!(costs.get(0, 1), 0);
        assert_eq!(costs.get(0, 2), 1);
        assert_eq!(costs.get(1, 0), 3);
        assert_eq!(costs.get(2, 1), 3);
        for i in 0..3 {
            assert_eq!(costs.get(i, i), CostMatrix::FORBIDDEN);
        }
    }

    #[test]
    fn test_tsp_layout_scenario() {
        let layout = TspLayout::new(SolverOptions::default())
            .layout(scenario(), 4)
            .unwrap();
        assert_eq!(layout.arcs, vec![Arc::new(0, 1, 3), Arc::new(1, 2, 3)]);
        assert_eq!(layout.stats.accepted, 2);
    }

    #[test]
    fn test_tsp_layout_spans_every_read() {
        let reads = ["GATTAC", "TTACAG", "ACAGGT", "AGGTCC", "GTCCAT"];
        let matrix = build_overlap_matrix(&reads).unwrap();
        let layout = TspLayout::new(SolverOptions::default())
            .layout(matrix, 6)
            .unwrap();

        assert_eq!(layout.arcs.len(), reads.len() - 1);
        let mut nodes: Vec<usize> = std::iter::once(layout.arcs[0].source)
            .chain(layout.arcs.iter().map(|a| a.destination))
            .collect();
        nodes.sort_unstable();
        assert_eq!(nodes, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_read_has_no_arcs() {
        let layout = TspLayout::new(SolverOptions::default())
            .layout(OverlapMatrix::new(1), 4)
            .unwrap();
        assert!(layout.arcs.is_empty());
    }

    #[test]
    fn test_solver_error_propagates() {
        let failing = |_: &CostMatrix, _: &SolverOptions| {
            Err::<TspSolution, _>(SolverError::Failed("no convergence".into()))
        };
        let result =
            TspLayout::with_solver(failing, SolverOptions::default()).layout(scenario(), 4);
        match result {
            Err(LayoutError::Solver(SolverError::Failed(msg))) => assert_eq!(msg, "no convergence"),
            other => panic!("expected solver failure, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_permutation_rejected() {
        let repeating = |_: &CostMatrix, _: &SolverOptions| {
            Ok::<_, SolverError>(TspSolution {
                order: vec![0, 1, 1],
                total_cost: 0,
            })
        };
        let result =
            TspLayout::with_solver(repeating, SolverOptions::default()).layout(scenario(), 4);
        assert!(matches!(
            result,
            Err(LayoutError::Solver(SolverError::InvalidPermutation(_)))
        ));
    }
}
