use tracing::{debug, trace};

use super::cycle::CycleDetector;
use super::{Layout, LayoutError, LayoutStats, LayoutStrategy};
use crate::core::matrix::OverlapMatrix;
use crate::core::types::Arc;

/// Why the best candidate of a round was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    ZeroOverlap,
    Contained,
    Degree,
    Cycle,
}

/// Greedy best-overlap-first layout.
///
/// Runs exactly `n` rounds. Each round takes the largest remaining cell,
/// scanning rows then columns in ascending order so that ties go to the first
/// maximum seen. The candidate `(i, j, v)` is accepted when `v` is neither
/// `0` nor the full read length, `i` has no successor yet, `j` has no
/// predecessor yet, and the arc would not close a cycle. Row `i` and column
/// `j` are then invalidated whether or not the arc was accepted.
///
/// The row-major tie-break decides which of several equal overlaps wins and
/// therefore the exact output; it is kept stable for reproducibility. Full
/// length overlaps are treated as contained reads and never joined.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyLayout;

impl GreedyLayout {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run the greedy rounds. Never fails; an empty arc list is a valid result.
    #[must_use]
    pub fn run(&self, mut matrix: OverlapMatrix, read_length: usize) -> Layout {
        let n = matrix.size();
        let contained = i64::try_from(read_length).unwrap_or(i64::MAX);

        let mut out_degree = vec![0u32; n];
        let mut in_degree = vec![0u32; n];
        let mut cycles = CycleDetector::new(n);
        let mut arcs = Vec::new();
        let mut stats = LayoutStats::default();

        for round in 0..n {
            stats.rounds += 1;

            let Some((i, j, value)) = select_best(&matrix) else {
                trace!(round, "No valid cells left");
                stats.exhausted += 1;
                continue;
            };

            let rejection = if value == 0 {
                Some(Rejection::ZeroOverlap)
            } else if value == contained {
                Some(Rejection::Contained)
            } else if out_degree[i] != 0 || in_degree[j] != 0 {
                Some(Rejection::Degree)
            } else if cycles.closes_cycle(i, j) {
                Some(Rejection::Cycle)
            } else {
                None
            };

            match rejection {
                None => {
                    // value is in 1..read_length here
                    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                    let weight = value as usize;
                    arcs.push(Arc::new(i, j, weight));
                    out_degree[i] += 1;
                    in_degree[j] += 1;
                    cycles.link(i, j);
                    stats.accepted += 1;
                    trace!(round, source = i, destination = j, weight, "Accepted arc");
                }
                Some(reason) => {
                    match reason {
                        Rejection::ZeroOverlap => stats.zero_overlap += 1,
                        Rejection::Contained => stats.contained_overlap += 1,
                        Rejection::Degree => stats.degree_conflict += 1,
                        Rejection::Cycle => stats.cycle += 1,
                    }
                    trace!(round, source = i, destination = j, value, ?reason, "Rejected arc");
                }
            }

            matrix.invalidate_row(i);
            matrix.invalidate_col(j);
        }

        debug!(
            accepted = stats.accepted,
            rejected = stats.rejected(),
            cycles = stats.cycle,
            contained = stats.contained_overlap,
            "Greedy layout finished"
        );

        Layout { arcs, stats }
    }
}

impl LayoutStrategy for GreedyLayout {
    fn layout(&self, matrix: OverlapMatrix, read_length: usize) -> Result<Layout, LayoutError> {
        Ok(self.run(matrix, read_length))
    }
}

/// First strictly-greatest off-diagonal cell in row-major order.
/// Cells holding `OverlapMatrix::INVALID` are never selected.
fn select_best(matrix: &OverlapMatrix) -> Option<(usize, usize, i64)> {
    let n = matrix.size();
    let mut best = None;
    let mut best_value = OverlapMatrix::INVALID;

    for i in 0..n {
        for (j, &value) in matrix.row(i).iter().enumerate() {
            if i != j && value > best_value {
                best_value = value;
                best = Some((i, j, value));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlap::build_overlap_matrix;

    fn matrix(rows: Vec<Vec<i64>>) -> OverlapMatrix {
        OverlapMatrix::from_rows(rows).unwrap()
    }

    /// Deterministic pseudo-random reads sampled from one pseudo-random genome
    fn sampled_reads(genome_len: usize, read_len: usize, step: usize, seed: u64) -> Vec<Vec<u8>> {
        let mut state = seed;
        let genome: Vec<u8> = (0..genome_len)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                b"ACGT"[(state >> 62) as usize]
            })
            .collect();

        (0..=genome_len - read_len)
            .step_by(step)
            .map(|start| genome[start..start + read_len].to_vec())
            .collect()
    }

    #[test]
    fn test_three_read_scenario() {
        let m = matrix(vec![vec![-1, 3, 2], vec![0, -1, 3], vec![0, 0, -1]]);
        let layout = GreedyLayout::new().run(m, 4);

        assert_eq!(layout.arcs, vec![Arc::new(0, 1, 3), Arc::new(1, 2, 3)]);
        assert_eq!(layout.stats.rounds, 3);
        assert_eq!(layout.stats.accepted, 2);
        assert_eq!(layout.stats.zero_overlap, 1);
    }

    #[test]
    fn test_tie_break_is_row_major() {
        // Every off-diagonal cell ties; (0, 1) is scanned first
        let m = matrix(vec![vec![-1, 2, 2], vec![2, -1, 2], vec![2, 2, -1]]);
        let layout = GreedyLayout::new().run(m, 4);

        assert_eq!(layout.arcs[0], Arc::new(0, 1, 2));
        // Row 0 and column 1 are gone; next first max is (1, 0), which would
        // close 0 -> 1 -> 0. Its row and column removal leaves nothing.
        assert_eq!(layout.stats.cycle, 1);
        assert_eq!(layout.stats.exhausted, 1);
        assert_eq!(layout.arcs, vec![Arc::new(0, 1, 2)]);
    }

    #[test]
    fn test_rejects_reverse_arc() {
        let m = build_overlap_matrix(&["ABCD", "CDAB"]).unwrap();
        let layout = GreedyLayout::new().run(m, 4);

        assert_eq!(layout.arcs, vec![Arc::new(0, 1, 2)]);
        assert_eq!(layout.stats.cycle, 1);
    }

    #[test]
    fn test_rejects_contained_overlap() {
        let m = build_overlap_matrix(&["AAAA", "AAAA"]).unwrap();
        let layout = GreedyLayout::new().run(m, 4);

        assert!(layout.arcs.is_empty());
        assert_eq!(layout.stats.contained_overlap, 2);
    }

    #[test]
    fn test_single_read_is_exhausted() {
        let layout = GreedyLayout::new().run(OverlapMatrix::new(1), 4);
        assert!(layout.arcs.is_empty());
        assert_eq!(layout.stats.rounds, 1);
        assert_eq!(layout.stats.exhausted, 1);
    }

    #[test]
    fn test_no_overlaps_gives_empty_layout() {
        let m = build_overlap_matrix(&["AAAA", "CCCC", "GGGG"]).unwrap();
        let layout = GreedyLayout::new().run(m, 4);
        assert!(layout.arcs.is_empty());
        assert_eq!(layout.stats.accepted, 0);
    }

    #[test]
    fn test_output_is_disjoint_simple_paths() {
        for seed in [1, 7, 42, 1234] {
            let reads = sampled_reads(300, 20, 7, seed);
            let n = reads.len();
            let m = build_overlap_matrix(&reads).unwrap();
            let layout = GreedyLayout::new().run(m, 20);

            let mut out_seen = vec![false; n];
            let mut in_seen = vec![false; n];
            let mut successor = vec![None; n];
            for arc in &layout.arcs {
                assert!(!out_seen[arc.source], "duplicate source {}", arc.source);
                assert!(!in_seen[arc.destination], "duplicate destination {}", arc.destination);
                assert!(arc.weight > 0 && arc.weight < 20);
                out_seen[arc.source] = true;
                in_seen[arc.destination] = true;
                successor[arc.source] = Some(arc.destination);
            }

            // Following successors from any node never revisits a node
            for start in 0..n {
                let mut visited = vec![false; n];
                let mut current = start;
                visited[current] = true;
                while let Some(next) = successor[current] {
                    assert!(!visited[next], "cycle through {next} (seed {seed})");
                    visited[next] = true;
                    current = next;
                }
            }

            assert_eq!(layout.stats.rounds, n);
            assert_eq!(layout.stats.accepted, layout.arcs.len());
        }
    }

    #[test]
    fn test_strategy_trait_matches_run() {
        let m = matrix(vec![vec![-1, 3, 2], vec![0, -1, 3], vec![0, 0, -1]]);
        let via_trait = GreedyLayout::new().layout(m.clone(), 4).unwrap();
        let direct = GreedyLayout::new().run(m, 4);
        assert_eq!(via_trait.arcs, direct.arcs);
        assert_eq!(via_trait.stats, direct.stats);
    }
}
