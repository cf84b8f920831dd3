//! From layout arcs to contigs, and the pipeline that drives a whole run.
//!
//! - [`path`]: split an arc list into ordered chains
//! - [`consensus`]: merge the reads of a chain into one contig
//! - [`config`]: [`AssemblyConfig`] and its JSON loader
//! - [`pipeline`]: [`Assembler`], running overlap → layout → chains → contigs
//!
//! ## Example
//!
//! ```rust
//! use olc_assembler::{Assembler, AssemblyConfig, ReadSet};
//!
//! let reads = ReadSet::from_sequences(["ABCD", "BCDE", "CDEF"]).unwrap();
//! let assembly = Assembler::new(AssemblyConfig::default()).assemble(&reads).unwrap();
//!
//! assert_eq!(assembly.contigs.len(), 1);
//! assert_eq!(assembly.contigs[0].sequence, b"ABCDEF");
//! ```

pub mod config;
pub mod consensus;
pub mod path;
pub mod pipeline;

pub use config::{AssemblyConfig, ConfigError};
pub use consensus::{build_consensus, build_contigs};
pub use path::{reorganize, Reorganized};
pub use pipeline::{Assembler, Assembly, AssemblyError};
