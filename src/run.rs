//! K-mer counting and output.
//!
//! Ties the pipeline together: read sequences, aggregate counts across
//! workers, and write the final table to stdout.

use crate::{
    aggregate::aggregate,
    cli::OutputFormat,
    count::KmerCounts,
    error::{InvalidWorkerCountError, KtallyError},
    histogram::KmerHistogram,
    input::Input,
    reader::read,
};
use rayon::prelude::*;
use serde::Serialize;
use std::{
    collections::HashMap,
    io::{stdout, BufWriter, Write},
    num::NonZeroUsize,
    path::Path,
    thread,
};

/// A k-mer with its count, used for JSON serialization.
#[derive(Serialize)]
struct KmerCount {
    kmer: String,
    count: u64,
}

/// Options controlling how the final count table is emitted.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Output format.
    pub format: OutputFormat,
    /// K-mers counted fewer times than this are excluded.
    pub min_count: u64,
    /// Sort output lexicographically by k-mer.
    pub sort: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            min_count: 1,
            sort: false,
        }
    }
}

/// The worker count used when the caller does not choose one.
#[must_use]
pub fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Counts k-mers in a FASTA file and returns them as a `HashMap`.
///
/// This is the main library API for counting without writing to stdout.
/// Uses one worker per available core; see [`count_kmers_with_workers`] to
/// pick the worker count.
///
/// # Errors
///
/// Returns [`KtallyError::FileOpen`] if the file cannot be opened and
/// [`KtallyError::SequenceRead`] if a record cannot be parsed.
pub fn count_kmers<P>(path: P, k: usize) -> Result<HashMap<String, u64>, KtallyError>
where
    P: AsRef<Path>,
{
    count_kmers_with_workers(&Input::from_path(path.as_ref()), k, default_workers())
}

/// Counts k-mers from an input source with an explicit worker count.
///
/// The returned (k-mer, count) pairs do not depend on `workers`. A zero
/// worker count is rejected before any input is read.
pub fn count_kmers_with_workers(
    input: &Input,
    k: usize,
    workers: usize,
) -> Result<HashMap<String, u64>, KtallyError> {
    if workers == 0 {
        return Err(InvalidWorkerCountError { requested: workers }.into());
    }

    let sequences = read(input)?;
    let counts = aggregate(&sequences, k, workers)?;
    Ok(into_string_counts(counts))
}

/// Counts k-mers in a FASTA file and writes the table to stdout in the
/// default (TSV) format.
pub fn run<P>(path: P, k: usize) -> Result<(), KtallyError>
where
    P: AsRef<Path>,
{
    let counts = count_kmers(path, k)?;
    output_counts(counts, &OutputOptions::default())
}

/// Writes the count table to stdout.
///
/// Emits one k-mer per line (or one JSON array) in map iteration order
/// unless `options.sort` is set.
pub fn output_counts(
    counts: HashMap<String, u64>,
    options: &OutputOptions,
) -> Result<(), KtallyError> {
    let mut filtered: Vec<_> = counts
        .into_iter()
        .filter(|(_, count)| *count >= options.min_count)
        .collect();

    if options.sort {
        filtered.par_sort_unstable_by(|a, b| a.0.cmp(&b.0));
    }

    let mut buf = BufWriter::new(stdout());
    match options.format {
        OutputFormat::Tsv => {
            for (kmer, count) in filtered {
                writeln!(buf, "{kmer}\t{count}")?;
            }
        }
        OutputFormat::Fasta => {
            for (kmer, count) in filtered {
                writeln!(buf, ">{count}\n{kmer}")?;
            }
        }
        OutputFormat::Json => {
            let json_data: Vec<KmerCount> = filtered
                .into_iter()
                .map(|(kmer, count)| KmerCount { kmer, count })
                .collect();
            serde_json::to_writer_pretty(&mut buf, &json_data)?;
            writeln!(buf)?;
        }
    }

    buf.flush()?;
    Ok(())
}

/// Writes a count-of-counts histogram to stdout, ascending by count.
pub fn output_histogram(histogram: &KmerHistogram) -> Result<(), KtallyError> {
    let mut buf = BufWriter::new(stdout());
    for (count, frequency) in histogram {
        writeln!(buf, "{count}\t{frequency}")?;
    }
    buf.flush()?;
    Ok(())
}

/// Converts the internal table into the string-keyed map the public API
/// exposes, in parallel.
fn into_string_counts(counts: KmerCounts) -> HashMap<String, u64> {
    counts
        .into_iter()
        .par_bridge()
        .map(|(kmer, count)| (kmer.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count_sequence;
    use bytes::Bytes;

    #[test]
    fn string_conversion_keeps_counts() {
        let counts = count_sequence(&Bytes::from_static(b"AAAA"), 2);
        let strings = into_string_counts(counts);
        assert_eq!(strings.get("AA"), Some(&3));
        assert_eq!(strings.len(), 1);
    }

    #[test]
    fn default_workers_is_positive() {
        assert!(default_workers() >= 1);
    }

    #[test]
    fn default_output_options() {
        let options = OutputOptions::default();
        assert_eq!(options.min_count, 1);
        assert!(!options.sort);
    }
}
