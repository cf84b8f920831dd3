use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::validation::check_read_limit;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadSetError {
    #[error("No reads provided")]
    Empty,

    #[error("Read {index} is empty")]
    EmptyRead { index: usize },

    #[error("Read {index} has length {found}, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Too many reads: {0} exceeds the maximum allowed")]
    TooManyReads(usize),
}

/// A single input read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Read {
    /// Record name from the input file (or a generated `read_<k>` name)
    pub name: String,

    /// Symbols of the read. The alphabet is not interpreted.
    pub sequence: Vec<u8>,
}

impl Read {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl AsRef<[u8]> for Read {
    fn as_ref(&self) -> &[u8] {
        &self.sequence
    }
}

/// A non-empty collection of reads that all share the same length
#[derive(Debug, Clone)]
pub struct ReadSet {
    reads: Vec<Read>,
    read_length: usize,
}

impl ReadSet {
    /// Validate and wrap a collection of reads.
    ///
    /// # Errors
    ///
    /// Returns `ReadSetError::Empty` for an empty collection,
    /// `ReadSetError::EmptyRead` if any read has no symbols,
    /// `ReadSetError::LengthMismatch` if lengths differ, or
    /// `ReadSetError::TooManyReads` if the read limit is exceeded.
    pub fn new(reads: Vec<Read>) -> Result<Self, ReadSetError> {
        let first = reads.first().ok_or(ReadSetError::Empty)?;
        let read_length = first.len();

        if check_read_limit(reads.len()).is_some() {
            return Err(ReadSetError::TooManyReads(reads.len()));
        }

        for (index, read) in reads.iter().enumerate() {
            if read.is_empty() {
                return Err(ReadSetError::EmptyRead { index });
            }
            if read.len() != read_length {
                return Err(ReadSetError::LengthMismatch {
                    index,
                    expected: read_length,
                    found: read.len(),
                });
            }
        }

        Ok(Self { reads, read_length })
    }

    /// Build a read set from bare sequences, naming them `read_1`, `read_2`, ...
    ///
    /// # Errors
    ///
    /// Same as [`ReadSet::new`].
    pub fn from_sequences<I, S>(sequences: I) -> Result<Self, ReadSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        let reads = sequences
            .into_iter()
            .enumerate()
            .map(|(i, seq)| Read::new(format!("read_{}", i + 1), seq))
            .collect();
        Self::new(reads)
    }

    #[must_use]
    pub fn reads(&self) -> &[Read] {
        &self.reads
    }

    /// Nominal read length shared by every read
    #[must_use]
    pub fn read_length(&self) -> usize {
        self.read_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Read> {
        self.reads.get(index)
    }
}
