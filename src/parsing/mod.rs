//! Input and output at the edges of an assembly run.
//!
//! - [`reads`]: load a validated [`ReadSet`](crate::core::read::ReadSet) from
//!   FASTA, FASTQ, or one-read-per-line text (optionally gzip-compressed)
//! - [`fasta`]: write contigs as FASTA records
//!
//! ## Example
//!
//! ```rust,no_run
//! use olc_assembler::parsing::reads::parse_reads_file;
//! use std::path::Path;
//!
//! let reads = parse_reads_file(Path::new("reads.fa"), None).unwrap();
//! println!("{} reads of length {}", reads.len(), reads.read_length());
//! ```

pub mod fasta;
pub mod reads;
