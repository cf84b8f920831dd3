//! Read ingestion from FASTA, FASTQ or plain text.
//!
//! Supported inputs:
//! - `.fa`, `.fasta`, `.fna` (FASTA, via noodles)
//! - `.fq`, `.fastq` (FASTQ, via noodles)
//! - anything else: plain text with one read per non-empty line
//!
//! Each of these may carry a `.gz` or `.bgz` suffix for gzip compression.

use std::io::{BufRead, BufReader, Read as _};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::{fasta, fastq};
use thiserror::Error;
use tracing::debug;

use crate::core::read::{Read, ReadSet, ReadSetError};
use crate::utils::validation::{check_read_limit, clean_read_line, MAX_READS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid read file: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    ReadSet(#[from] ReadSetError),
}

/// Layout of a read file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReadFormat {
    Fasta,
    Fastq,
    /// One read per non-empty line
    Text,
}

impl ReadFormat {
    /// Guess the format from the file name, ignoring a trailing `.gz`/`.bgz`
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        let name = path.to_string_lossy().to_lowercase();
        let stem = name
            .strip_suffix(".gz")
            .or_else(|| name.strip_suffix(".bgz"))
            .unwrap_or(&name);

        match Path::new(stem).extension().and_then(|e| e.to_str()) {
            Some("fa" | "fasta" | "fna") => Self::Fasta,
            Some("fq" | "fastq") => Self::Fastq,
            _ => Self::Text,
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load and validate reads from a file.
///
/// The format is detected from the extension unless `format` is given.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// for malformed FASTA/FASTQ records, or `ParseError::ReadSet` if the reads
/// are empty, of unequal length, or too many.
pub fn parse_reads_file(path: &Path, format: Option<ReadFormat>) -> Result<ReadSet, ParseError> {
    let format = format.unwrap_or_else(|| ReadFormat::detect(path));
    let file = std::fs::File::open(path)?;

    let reads = if is_gzipped(path) {
        parse_reads_reader(BufReader::new(MultiGzDecoder::new(file)), format)?
    } else {
        parse_reads_reader(BufReader::new(file), format)?
    };

    debug!(path = %path.display(), ?format, reads = reads.len(), "Loaded reads");
    Ok(reads)
}

/// Load and validate reads from standard input
///
/// # Errors
///
/// Same as [`parse_reads_file`].
pub fn parse_reads_stdin(format: ReadFormat) -> Result<ReadSet, ParseError> {
    let mut buf = Vec::new();
    std::io::stdin().lock().read_to_end(&mut buf)?;
    parse_reads_reader(buf.as_slice(), format)
}

/// Parse reads from any buffered reader
///
/// # Errors
///
/// Same as [`parse_reads_file`].
pub fn parse_reads_reader<R: BufRead>(reader: R, format: ReadFormat) -> Result<ReadSet, ParseError> {
    let reads = match format {
        ReadFormat::Fasta => read_fasta(reader)?,
        ReadFormat::Fastq => read_fastq(reader)?,
        ReadFormat::Text => read_text(reader)?,
    };
    Ok(ReadSet::new(reads)?)
}

fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<Read>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut reads = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if check_read_limit(reads.len() + 1).is_some() {
            return Err(ReadSetError::TooManyReads(MAX_READS + 1).into());
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        reads.push(Read::new(name, record.sequence().as_ref().to_vec()));
    }

    Ok(reads)
}

fn read_fastq<R: BufRead>(reader: R) -> Result<Vec<Read>, ParseError> {
    let mut fastq_reader = fastq::io::Reader::new(reader);
    let mut reads = Vec::new();

    for result in fastq_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTQ record: {e}")))?;

        if check_read_limit(reads.len() + 1).is_some() {
            return Err(ReadSetError::TooManyReads(MAX_READS + 1).into());
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        reads.push(Read::new(name, record.sequence().to_vec()));
    }

    Ok(reads)
}

fn read_text<R: BufRead>(reader: R) -> Result<Vec<Read>, ParseError> {
    let mut reads = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let sequence = clean_read_line(&line);
        if sequence.is_empty() {
            continue;
        }
        if sequence.starts_with('>') || sequence.starts_with('@') {
            return Err(ParseError::InvalidFormat(
                "text input looks like FASTA/FASTQ; use a .fa/.fq extension or --input-format"
                    .to_string(),
            ));
        }

        if check_read_limit(reads.len() + 1).is_some() {
            return Err(ReadSetError::TooManyReads(MAX_READS + 1).into());
        }

        reads.push(Read::new(
            format!("read_{}", reads.len() + 1),
            sequence.as_bytes(),
        ));
    }

    Ok(reads)
}
