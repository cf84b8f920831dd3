use serde::{Deserialize, Serialize};

/// A merged output sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// Merged symbols
    #[serde(with = "symbols")]
    pub sequence: Vec<u8>,

    /// Indices of the reads merged into this contig, in layout order
    pub reads: Vec<usize>,
}

impl Contig {
    pub fn new(sequence: Vec<u8>, reads: Vec<usize>) -> Self {
        Self { sequence, reads }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Lossy text view of the sequence
    #[must_use]
    pub fn sequence_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.sequence)
    }
}

/// Contig sequences serialize as text rather than byte arrays
mod symbols {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(seq: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(seq))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }
}

/// N50 of a set of contig lengths: the length `x` such that contigs of length
/// `>= x` cover at least half of the total length
#[must_use]
pub fn n50(contigs: &[Contig]) -> usize {
    let mut lengths: Vec<usize> = contigs.iter().map(Contig::len).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));

    let total: usize = lengths.iter().sum();
    let mut running = 0;
    for len in lengths {
        running += len;
        if running * 2 >= total {
            return len;
        }
    }
    0
}
