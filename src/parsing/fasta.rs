//! Contig output as FASTA using noodles.
//!
//! Records are named `contig_<k>` (1-based, in assembly order) and carry a
//! `len=<length> reads=<count>` description.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use noodles::fasta;

use crate::core::contig::Contig;

/// Write contigs as FASTA records to any writer
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_contigs<W: Write>(mut writer: W, contigs: &[Contig]) -> std::io::Result<()> {
    let mut fasta_writer = fasta::io::Writer::new(&mut writer);

    for (i, contig) in contigs.iter().enumerate() {
        let name = format!("contig_{}", i + 1);
        let description = format!("len={} reads={}", contig.len(), contig.reads.len());
        let definition = fasta::record::Definition::new(name, Some(description.into()));
        let sequence = fasta::record::Sequence::from(contig.sequence.clone());
        fasta_writer.write_record(&fasta::Record::new(definition, sequence))?;
    }

    drop(fasta_writer);
    writer.flush()
}

/// Write contigs to a FASTA file, replacing any existing file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_contigs_file(path: &Path, contigs: &[Contig]) -> std::io::Result<()> {
    let file = File::create(path)?;
    write_contigs(BufWriter::new(file), contigs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::reads::{parse_reads_file, ReadFormat};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_contigs() {
        let contigs = vec![
            Contig::new(b"ABCDEF".to_vec(), vec![0, 1, 2]),
            Contig::new(b"WXYZ".to_vec(), vec![3]),
        ];

        let mut out = Vec::new();
        write_contigs(&mut out, &contigs).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            ">contig_1 len=6 reads=3\nABCDEF\n>contig_2 len=4 reads=1\nWXYZ\n"
        );
    }

    #[test]
    fn test_write_empty() {
        let mut out = Vec::new();
        write_contigs(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_written_file_reads_back() {
        let contigs = vec![
            Contig::new(b"ACGTACGT".to_vec(), vec![0, 1]),
            Contig::new(b"TTGGCCAA".to_vec(), vec![2, 3]),
        ];
        let temp = NamedTempFile::with_suffix(".fa").unwrap();
        write_contigs_file(temp.path(), &contigs).unwrap();

        let reads = parse_reads_file(temp.path(), Some(ReadFormat::Fasta)).unwrap();
        assert_eq!(reads.len(), 2);
        assert_eq!(reads.reads()[0].name, "contig_1");
        assert_eq!(reads.reads()[1].sequence, b"TTGGCCAA");
    }
}
