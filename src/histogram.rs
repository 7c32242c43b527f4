//! K-mer frequency histogram computation (count of counts).
//!
//! Histograms summarize a count table by how many distinct k-mers share
//! each count value; they underpin genome size estimation and error-rate
//! eyeballing.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use ktally::histogram::compute_histogram;
//!
//! let counts: HashMap<String, u64> = [
//!     ("ACG".to_string(), 1),
//!     ("CGT".to_string(), 1),
//!     ("GTA".to_string(), 2),
//! ].into();
//!
//! let histogram = compute_histogram(counts.values());
//!
//! // 2 k-mers appear once, 1 appears twice
//! assert_eq!(histogram.get(&1), Some(&2));
//! assert_eq!(histogram.get(&2), Some(&1));
//! ```

use std::collections::BTreeMap;

/// K-mer frequency histogram: count -> number of distinct k-mers with that
/// count. `BTreeMap` so iteration runs in ascending count order.
pub type KmerHistogram = BTreeMap<u64, u64>;

/// Summary statistics over a [`KmerHistogram`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramStats {
    /// Total k-mer occurrences (sum of all k-mer counts).
    pub total_kmers: u64,
    /// Number of distinct k-mers.
    pub distinct_kmers: u64,
    /// The count value shared by the most k-mers.
    pub mode_count: u64,
    /// How many k-mers share the mode count.
    pub mode_frequency: u64,
    /// Average count per distinct k-mer.
    pub mean_count: f64,
}

/// Builds a histogram from the count values of a k-mer table.
pub fn compute_histogram<'a, I>(counts: I) -> KmerHistogram
where
    I: IntoIterator<Item = &'a u64>,
{
    let mut histogram = BTreeMap::new();
    for &count in counts {
        *histogram.entry(count).or_insert(0) += 1;
    }
    histogram
}

/// Computes summary statistics for a histogram.
#[must_use]
pub fn histogram_stats(histogram: &KmerHistogram) -> HistogramStats {
    let distinct: u64 = histogram.values().sum();
    let total: u64 = histogram.iter().map(|(c, f)| c * f).sum();

    let (mode_count, mode_frequency) = histogram
        .iter()
        .max_by_key(|(_, f)| *f)
        .map_or((0, 0), |(&c, &f)| (c, f));

    HistogramStats {
        total_kmers: total,
        distinct_kmers: distinct,
        mode_count,
        mode_frequency,
        #[allow(clippy::cast_precision_loss)]
        mean_count: if distinct > 0 {
            total as f64 / distinct as f64
        } else {
            0.0
        },
    }
}
