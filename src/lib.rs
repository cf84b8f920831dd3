//! # olc-assembler
//!
//! Overlap–Layout–Consensus assembly of fixed-length reads.
//!
//! Given a set of reads sampled from a longer sequence, `olc-assembler`
//! reconstructs that sequence in three stages:
//!
//! 1. **Overlap**: score the longest suffix/prefix match of every ordered
//!    pair of reads, producing an [`OverlapMatrix`].
//! 2. **Layout**: choose which read follows which. The greedy strategy takes
//!    the best remaining overlap while keeping every read to one successor
//!    and one predecessor and refusing cycles; the TSP strategy orders all
//!    reads along an approximate traveling-salesman tour.
//! 3. **Consensus**: split the layout into chains and merge the reads of each
//!    chain into a [`Contig`].
//!
//! ## Example
//!
//! ```rust
//! use olc_assembler::{Assembler, AssemblyConfig, ReadSet};
//!
//! let reads = ReadSet::from_sequences(["ABCD", "BCDE", "CDEF"]).unwrap();
//! let assembly = Assembler::new(AssemblyConfig::default())
//!     .assemble(&reads)
//!     .unwrap();
//!
//! assert_eq!(assembly.contigs[0].sequence, b"ABCDEF");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Reads, overlap matrix, arcs, chains and contigs
//! - [`overlap`]: Overlap scoring and matrix construction
//! - [`layout`]: Greedy and TSP layout strategies
//! - [`assembly`]: Chains, consensus, configuration and the pipeline
//! - [`parsing`]: Read ingestion and FASTA output
//! - [`cli`]: Command-line interface implementation

pub mod assembly;
pub mod cli;
pub mod core;
pub mod layout;
pub mod overlap;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use assembly::{Assembler, Assembly, AssemblyConfig, AssemblyError};
pub use core::contig::Contig;
pub use core::matrix::OverlapMatrix;
pub use core::read::{Read, ReadSet};
pub use core::types::*;
pub use layout::{GreedyLayout, Layout, LayoutStrategy, TspLayout};
