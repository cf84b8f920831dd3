use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::assembly::{Assembler, Assembly, AssemblyConfig};
use crate::cli::{load_reads, OutputFormat};
use crate::core::types::LayoutKind;
use crate::parsing::fasta::write_contigs_file;
use crate::parsing::reads::ReadFormat;
use crate::utils::validation::validate_output_path;

#[derive(Args)]
pub struct AssembleArgs {
    /// Input reads (FASTA, FASTQ, or one read per line; optionally gzipped)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected from the extension by default)
    #[arg(long)]
    pub input_format: Option<ReadFormat>,

    /// Output FASTA file for the contigs
    #[arg(short, long, required = true)]
    pub output: PathBuf,

    /// Layout strategy (overrides the config file)
    #[arg(short, long, value_enum)]
    pub strategy: Option<LayoutKind>,

    /// Wall-clock budget for the TSP solver, in seconds
    #[arg(long)]
    pub tsp_time_limit: Option<f64>,

    /// Maximum improving moves for the TSP solver
    #[arg(long)]
    pub tsp_max_iterations: Option<usize>,

    /// Worker threads for overlap computation (default: all cores)
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,

    /// Also write reads that joined no other read as single-read contigs
    #[arg(long)]
    pub include_singletons: bool,

    /// JSON config file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute assemble subcommand
///
/// # Errors
///
/// Returns an error if the config or reads cannot be loaded, the layout
/// solver fails, or the contigs cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    validate_output_path(&args.output)?;

    let reads = load_reads(&args.input, args.input_format)
        .with_context(|| format!("Failed to load reads from {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Loaded {} reads of length {} from {}",
            reads.len(),
            reads.read_length(),
            args.input.display()
        );
        eprintln!("Layout strategy: {}", config.strategy);
    }

    let assembly = Assembler::new(config).assemble(&reads)?;

    write_contigs_file(&args.output, &assembly.contigs)
        .with_context(|| format!("Failed to write contigs to {}", args.output.display()))?;

    if !assembly.orphaned.is_empty() {
        eprintln!(
            "Warning: {} reads formed a cycle with no start and were left out of every contig.",
            assembly.orphaned.len()
        );
    }
    if assembly.contigs.is_empty() {
        eprintln!("Warning: No reads could be joined; no contigs were written.");
    }

    match format {
        OutputFormat::Text => print_text_summary(&args, &assembly),
        OutputFormat::Json => print_json_summary(&args, &assembly)?,
        OutputFormat::Tsv => print_tsv_summary(&assembly),
    }

    Ok(())
}

/// Merge the optional config file with command-line overrides
fn build_config(args: &AssembleArgs) -> anyhow::Result<AssemblyConfig> {
    let mut config = match &args.config {
        Some(path) => AssemblyConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AssemblyConfig::default(),
    };

    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(threads) = args.threads {
        config.threads = Some(threads as usize);
    }
    if args.include_singletons {
        config.include_singletons = true;
    }
    if let Some(secs) = args.tsp_time_limit {
        config.tsp.max_processing_time = Some(secs);
    }
    if let Some(max) = args.tsp_max_iterations {
        config.tsp.max_iterations = Some(max);
    }

    Ok(config)
}

fn print_text_summary(args: &AssembleArgs, assembly: &Assembly) {
    println!("Assembly Results");
    println!("{}", "=".repeat(60));

    println!("\nInput: {}", args.input.display());
    println!("  Reads: {}", assembly.read_count);
    println!("  Read length: {}", assembly.read_length);
    println!("  Strategy: {}", assembly.strategy);

    let stats = &assembly.stats;
    println!("\nLayout:");
    println!("  Rounds: {}", stats.rounds);
    println!("  Accepted arcs: {}", stats.accepted);
    if assembly.strategy == LayoutKind::Greedy {
        println!("  Rejected (no overlap): {}", stats.zero_overlap);
        println!("  Rejected (contained): {}", stats.contained_overlap);
        println!("  Rejected (degree): {}", stats.degree_conflict);
        println!("  Rejected (cycle): {}", stats.cycle);
    }
    if !assembly.orphaned.is_empty() {
        println!("  Orphaned reads: {:?}", assembly.orphaned);
    }

    println!("\nContigs: {}", assembly.contigs.len());
    println!("  Total length: {}", assembly.total_length());
    println!("  Longest: {}", assembly.longest());
    println!("  N50: {}", assembly.n50());

    println!("\nOutput: {}", args.output.display());
}

fn print_json_summary(args: &AssembleArgs, assembly: &Assembly) -> anyhow::Result<()> {
    let contigs: Vec<_> = assembly
        .contigs
        .iter()
        .enumerate()
        .map(|(i, c)| {
            serde_json::json!({
                "name": format!("contig_{}", i + 1),
                "length": c.len(),
                "reads": c.reads,
            })
        })
        .collect();

    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "output": args.output.display().to_string(),
        "read_count": assembly.read_count,
        "read_length": assembly.read_length,
        "strategy": assembly.strategy,
        "layout": assembly.stats,
        "orphaned": assembly.orphaned,
        "contig_count": assembly.contigs.len(),
        "total_length": assembly.total_length(),
        "longest": assembly.longest(),
        "n50": assembly.n50(),
        "contigs": contigs,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(assembly: &Assembly) {
    println!("reads\tread_length\tstrategy\taccepted_arcs\tcontigs\ttotal_length\tlongest\tn50");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        assembly.read_count,
        assembly.read_length,
        assembly.strategy,
        assembly.stats.accepted,
        assembly.contigs.len(),
        assembly.total_length(),
        assembly.longest(),
        assembly.n50(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: AssembleArgs,
    }

    fn parse(argv: &[&str]) -> AssembleArgs {
        TestCli::parse_from(std::iter::once("test").chain(argv.iter().copied())).args
    }

    #[test]
    fn test_defaults_without_flags() {
        let args = parse(&["reads.txt", "-o", "out.fa"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config, AssemblyConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&[
            "reads.txt",
            "-o",
            "out.fa",
            "--strategy",
            "tsp",
            "--tsp-time-limit",
            "2.5",
            "--threads",
            "3",
            "--include-singletons",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.strategy, LayoutKind::Tsp);
        assert_eq!(config.tsp.max_processing_time, Some(2.5));
        assert_eq!(config.threads, Some(3));
        assert!(config.include_singletons);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = TestCli::try_parse_from(["test", "reads.txt", "-o", "out.fa", "-t", "0"]);
        assert!(result.is_err());
    }
}
