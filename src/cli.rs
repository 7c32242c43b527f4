//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A parallel k-mer counter for DNA sequences in FASTA files.
#[derive(Parser, Debug)]
#[command(name = "ktally")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// K-mer length
    #[arg(value_parser = parse_k)]
    pub k: usize,

    /// Path to a FASTA file ("-" or omitted reads stdin)
    #[arg(default_value = "-")]
    pub path: PathBuf,

    /// Number of worker threads (defaults to the available parallelism)
    #[arg(short, long, value_parser = parse_threads)]
    pub threads: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,

    /// Minimum count threshold (k-mers below this are excluded)
    #[arg(short, long, default_value = "1")]
    pub min_count: u64,

    /// Sort output lexicographically by k-mer
    #[arg(short, long)]
    pub sort: bool,

    /// Emit a count-of-counts histogram instead of per-k-mer counts
    #[arg(long)]
    pub histogram: bool,

    /// Suppress informational output (only output k-mer counts)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for k-mer counts.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Tab-separated values (kmer\tcount)
    #[default]
    Tsv,
    /// FASTA-like format (>{count}\n{kmer})
    Fasta,
    /// JSON array format
    Json,
}

fn parse_k(s: &str) -> Result<usize, String> {
    let k: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if k == 0 {
        return Err("k-mer length must be at least 1".to_string());
    }
    Ok(k)
}

fn parse_threads(s: &str) -> Result<usize, String> {
    let threads: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if threads == 0 {
        return Err("worker count must be at least 1".to_string());
    }
    Ok(threads)
}
