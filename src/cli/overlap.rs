use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::assembly::{Assembler, AssemblyConfig};
use crate::cli::{load_reads, OutputFormat};
use crate::core::matrix::OverlapMatrix;
use crate::core::read::ReadSet;
use crate::parsing::reads::ReadFormat;

#[derive(Args)]
pub struct OverlapArgs {
    /// Input reads (FASTA, FASTQ, or one read per line; optionally gzipped)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected from the extension by default)
    #[arg(long)]
    pub input_format: Option<ReadFormat>,

    /// Worker threads for overlap computation (default: all cores)
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,
}

/// Execute overlap subcommand
///
/// # Errors
///
/// Returns an error if the reads cannot be loaded or the matrix cannot be built.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: OverlapArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reads = load_reads(&args.input, args.input_format)
        .with_context(|| format!("Failed to load reads from {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Computing overlaps for {} reads of length {}",
            reads.len(),
            reads.read_length()
        );
    }

    let config = AssemblyConfig {
        threads: args.threads.map(|t| t as usize),
        ..AssemblyConfig::default()
    };
    let matrix = Assembler::new(config).compute_overlaps(&reads)?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&reads, &matrix)),
        OutputFormat::Json => print_json(&reads, &matrix)?,
        OutputFormat::Tsv => print!("{}", render_tsv(&reads, &matrix)),
    }

    Ok(())
}

/// Right-aligned grid with read indices along both axes
fn render_text(reads: &ReadSet, matrix: &OverlapMatrix) -> String {
    let n = matrix.size();
    let width = (0..n)
        .flat_map(|i| matrix.row(i).iter().map(ToString::to_string))
        .map(|s| s.len())
        .chain(std::iter::once(n.saturating_sub(1).to_string().len()))
        .max()
        .unwrap_or(1)
        .max(2);

    let mut out = String::new();
    out.push_str(&format!(
        "Overlap matrix ({} reads, length {})\n",
        reads.len(),
        reads.read_length()
    ));
    out.push_str(&" ".repeat(width));
    for j in 0..n {
        out.push_str(&format!(" {j:>width$}"));
    }
    out.push('\n');
    for i in 0..n {
        out.push_str(&format!("{i:>width$}"));
        for value in matrix.row(i) {
            out.push_str(&format!(" {value:>width$}"));
        }
        out.push('\n');
    }
    out
}

/// Header row of read names, then one row per read
fn render_tsv(reads: &ReadSet, matrix: &OverlapMatrix) -> String {
    let names: Vec<&str> = reads.reads().iter().map(|r| r.name.as_str()).collect();

    let mut out = String::new();
    out.push_str("read\t");
    out.push_str(&names.join("\t"));
    out.push('\n');
    for (i, name) in names.iter().enumerate() {
        let cells: Vec<String> = matrix.row(i).iter().map(ToString::to_string).collect();
        out.push_str(name);
        out.push('\t');
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

fn print_json(reads: &ReadSet, matrix: &OverlapMatrix) -> anyhow::Result<()> {
    let names: Vec<&str> = reads.reads().iter().map(|r| r.name.as_str()).collect();
    let output = serde_json::json!({
        "read_count": reads.len(),
        "read_length": reads.read_length(),
        "reads": names,
        "matrix": matrix.to_rows(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlap::build_overlap_matrix;

    fn scenario() -> (ReadSet, OverlapMatrix) {
        let reads = ReadSet::from_sequences(["ABCD", "BCDE", "CDEF"]).unwrap();
        let matrix = build_overlap_matrix(reads.reads()).unwrap();
        (reads, matrix)
    }

    #[test]
    fn test_render_tsv() {
        let (reads, matrix) = scenario();
        assert_eq!(
            render_tsv(&reads, &matrix),
            "read\tread_1\tread_2\tread_3\n\
             read_1\t-1\t3\t2\n\
             read_2\t0\t-1\t3\n\
             read_3\t0\t0\t-1\n"
        );
    }

    #[test]
    fn test_render_text() {
        let (reads, matrix) = scenario();
        let text = render_text(&reads, &matrix);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Overlap matrix (3 reads, length 4)");
        assert_eq!(lines[1], "    0  1  2");
        assert_eq!(lines[2], " 0 -1  3  2");
        assert_eq!(lines[4], " 2  0  0 -1");
    }
}
