//! Command-line interface for olc-assembler.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **assemble**: Assemble reads into contigs and write them as FASTA
//! - **overlap**: Print the pairwise overlap matrix of a read set
//!
//! ## Usage
//!
//! ```text
//! # Greedy assembly of a FASTA read set
//! olc-assembler assemble reads.fa -o contigs.fa
//!
//! # TSP layout with a 10 second solver budget
//! olc-assembler assemble reads.txt -o contigs.fa --strategy tsp --tsp-time-limit 10
//!
//! # JSON summary for scripting
//! olc-assembler assemble reads.fq.gz -o contigs.fa --format json
//!
//! # Inspect overlaps
//! olc-assembler overlap reads.txt --format tsv
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::read::ReadSet;
use crate::parsing::reads::{parse_reads_file, parse_reads_stdin, ReadFormat};

pub mod assemble;
pub mod overlap;

#[derive(Parser)]
#[command(name = "olc-assembler")]
#[command(version)]
#[command(about = "Assemble fixed-length reads into contigs by Overlap-Layout-Consensus")]
#[command(
    long_about = "olc-assembler reconstructs longer sequences from overlapping fixed-length reads.\n\nIt scores every suffix/prefix overlap, lays reads out either greedily or through an approximate traveling-salesman tour, and merges each resulting path into a contig."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble reads into contigs
    Assemble(assemble::AssembleArgs),

    /// Print the pairwise overlap matrix
    Overlap(overlap::OverlapArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load reads from a path, or from stdin when the path is `-`
///
/// Stdin has no extension to detect from and defaults to plain text.
pub(crate) fn load_reads(input: &Path, format: Option<ReadFormat>) -> anyhow::Result<ReadSet> {
    let reads = if input == Path::new("-") {
        parse_reads_stdin(format.unwrap_or(ReadFormat::Text))?
    } else {
        parse_reads_file(input, format)?
    };
    Ok(reads)
}
