use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::config::AssemblyConfig;
use super::consensus::build_contigs;
use super::path::reorganize;
use crate::core::contig::{n50, Contig};
use crate::core::matrix::OverlapMatrix;
use crate::core::read::ReadSet;
use crate::core::types::LayoutKind;
use crate::layout::{GreedyLayout, LayoutError, LayoutStats, LayoutStrategy, TspLayout};
use crate::overlap::{build_overlap_matrix, OverlapError};

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error(transparent)]
    Overlap(#[from] OverlapError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Failed to start worker threads: {0}")]
    ThreadPool(String),
}

/// Output of one assembly run
#[derive(Debug, Clone, Serialize)]
pub struct Assembly {
    pub contigs: Vec<Contig>,
    pub strategy: LayoutKind,
    pub stats: LayoutStats,
    /// Reads dropped because their arcs formed a cycle with no start node
    pub orphaned: Vec<usize>,
    pub read_count: usize,
    pub read_length: usize,
}

impl Assembly {
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.contigs.iter().map(Contig::len).sum()
    }

    #[must_use]
    pub fn longest(&self) -> usize {
        self.contigs.iter().map(Contig::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn n50(&self) -> usize {
        n50(&self.contigs)
    }
}

/// Runs overlap, layout, reorganization and consensus for a read set
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: AssemblyConfig,
}

impl Assembler {
    #[must_use]
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Build the overlap matrix, on a dedicated pool if `threads` is set.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::ThreadPool` if the pool cannot be created, or
    /// `AssemblyError::Overlap` for an empty read collection.
    pub fn compute_overlaps(&self, reads: &ReadSet) -> Result<OverlapMatrix, AssemblyError> {
        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| AssemblyError::ThreadPool(e.to_string()))?;
                Ok(pool.install(|| build_overlap_matrix(reads.reads()))?)
            }
            None => Ok(build_overlap_matrix(reads.reads())?),
        }
    }

    /// Assemble the reads into contigs.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::Overlap` for an empty read collection,
    /// `AssemblyError::ThreadPool` if workers cannot be started, and
    /// `AssemblyError::Layout` if the TSP solver fails.
    pub fn assemble(&self, reads: &ReadSet) -> Result<Assembly, AssemblyError> {
        let started = Instant::now();
        let matrix = self.compute_overlaps(reads)?;
        debug!(elapsed_ms = started.elapsed().as_millis(), "Overlap stage done");

        let stage = Instant::now();
        let layout = self
            .strategy()
            .layout(matrix, reads.read_length())?;
        debug!(
            elapsed_ms = stage.elapsed().as_millis(),
            strategy = %self.config.strategy,
            arcs = layout.arcs.len(),
            "Layout stage done"
        );

        let stage = Instant::now();
        let reorganized = reorganize(&layout.arcs);
        let mut contigs = build_contigs(reads.reads(), &reorganized.chains);

        if self.config.include_singletons {
            let covered: HashSet<usize> = contigs
                .iter()
                .flat_map(|c| c.reads.iter().copied())
                .collect();
            contigs.extend(
                reads
                    .reads()
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !covered.contains(i))
                    .map(|(i, read)| Contig::new(read.sequence.clone(), vec![i])),
            );
        }
        debug!(elapsed_ms = stage.elapsed().as_millis(), "Consensus stage done");

        let assembly = Assembly {
            contigs,
            strategy: self.config.strategy,
            stats: layout.stats,
            orphaned: reorganized.orphaned,
            read_count: reads.len(),
            read_length: reads.read_length(),
        };

        info!(
            reads = assembly.read_count,
            contigs = assembly.contigs.len(),
            total_length = assembly.total_length(),
            n50 = assembly.n50(),
            "Assembly complete"
        );

        Ok(assembly)
    }

    fn strategy(&self) -> Box<dyn LayoutStrategy> {
        match self.config.strategy {
            LayoutKind::Greedy => Box::new(GreedyLayout::new()),
            LayoutKind::Tsp => Box::new(TspLayout::new(self.config.tsp.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> ReadSet {
        ReadSet::from_sequences(["ABCD", "BCDE", "CDEF"]).unwrap()
    }

    #[test]
    fn test_greedy_end_to_end() {
        let assembly = Assembler::default().assemble(&scenario()).unwrap();

        assert_eq!(assembly.contigs.len(), 1);
        assert_eq!(assembly.contigs[0].sequence, b"ABCDEF");
        assert_eq!(assembly.contigs[0].reads, vec![0, 1, 2]);
        assert_eq!(assembly.stats.accepted, 2);
        assert_eq!(assembly.stats.zero_overlap, 1);
        assert!(assembly.orphaned.is_empty());
        // 12 symbols of reads minus 6 symbols of overlap
        assert_eq!(assembly.total_length(), 6);
    }

    #[test]
    fn test_tsp_end_to_end() {
        let config = AssemblyConfig {
            strategy: LayoutKind::Tsp,
            ..AssemblyConfig::default()
        };
        let assembly = Assembler::new(config).assemble(&scenario()).unwrap();
        assert_eq!(assembly.contigs.len(), 1);
        assert_eq!(assembly.contigs[0].sequence, b"ABCDEF");
    }

    #[test]
    fn test_tsp_always_one_contig() {
        let reads = ReadSet::from_sequences(["AAAA", "CCCC", "GGGG"]).unwrap();
        let config = AssemblyConfig {
            strategy: LayoutKind::Tsp,
            ..AssemblyConfig::default()
        };
        let assembly = Assembler::new(config).assemble(&reads).unwrap();
        assert_eq!(assembly.contigs.len(), 1);
        assert_eq!(assembly.total_length(), 12);
    }

    #[test]
    fn test_no_overlaps_yields_no_contigs() {
        let reads = ReadSet::from_sequences(["AAAA", "CCCC", "GGGG"]).unwrap();
        let assembly = Assembler::default().assemble(&reads).unwrap();
        assert!(assembly.contigs.is_empty());
    }

    #[test]
    fn test_include_singletons() {
        let reads = ReadSet::from_sequences(["ABCD", "BCDE", "WXYZ"]).unwrap();
        let config = AssemblyConfig {
            include_singletons: true,
            ..AssemblyConfig::default()
        };
        let assembly = Assembler::new(config).assemble(&reads).unwrap();

        assert_eq!(assembly.contigs.len(), 2);
        assert_eq!(assembly.contigs[0].sequence, b"ABCDE");
        assert_eq!(assembly.contigs[1].sequence, b"WXYZ");
        assert_eq!(assembly.contigs[1].reads, vec![2]);
    }

    #[test]
    fn test_fixed_thread_pool() {
        let config = AssemblyConfig {
            threads: Some(2),
            ..AssemblyConfig::default()
        };
        let assembler = Assembler::new(config);
        let matrix = assembler.compute_overlaps(&scenario()).unwrap();
        assert_eq!(matrix.get(0, 1), 3);
        assert_eq!(matrix.get(1, 2), 3);
    }

    #[test]
    fn test_reconstructs_tiled_sequence() {
        let genome = b"ATGCGTACGTTAGCCGATAGGCTTACGATCGGATCCATGAAC";
        let read_len = 12;
        let reads: Vec<Vec<u8>> = (0..=genome.len() - read_len)
            .step_by(3)
            .map(|s| genome[s..s + read_len].to_vec())
            .collect();
        let set = ReadSet::from_sequences(reads).unwrap();

        let assembly = Assembler::default().assemble(&set).unwrap();
        assert_eq!(assembly.contigs.len(), 1);
        assert_eq!(assembly.contigs[0].sequence, genome.to_vec());
    }
}
