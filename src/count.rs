//! Single-sequence k-mer counting.
//!
//! [`count_sequence`] is a pure function of its inputs, which is what
//! permits each worker to count its partition with no synchronization.

use bytes::Bytes;
use rustc_hash::FxHashMap;

use crate::kmer::Kmer;

/// A k-mer count table.
///
/// Workers build local instances during scanning; the aggregator owns the
/// single global instance. Counts start at 0 and are increment-only.
pub type KmerCounts = FxHashMap<Kmer, u64>;

/// Counts every valid k-mer window in one sequence.
///
/// Slides a width-`k` window over every start position, normalizing each
/// window and incrementing its count on success. Rejected windows are
/// skipped without advancing past the windows that overlap them. A `k` of 0
/// or larger than the sequence yields an empty table rather than an error.
#[must_use]
pub fn count_sequence(seq: &Bytes, k: usize) -> KmerCounts {
    let mut counts = KmerCounts::default();
    if k == 0 || seq.len() < k {
        return counts;
    }

    let mut i = 0;
    while i <= seq.len() - k {
        let sub = seq.slice(i..i + k);
        if let Ok(kmer) = Kmer::normalize(sub) {
            *counts.entry(kmer).or_insert(0) += 1;
        }
        i += 1;
    }

    counts
}

/// Folds `src` into `dst`, summing counts per k-mer.
///
/// Used both for accumulating per-sequence tables into a worker-local table
/// and for merging worker-local tables into the global one.
pub fn merge_into(dst: &mut KmerCounts, src: KmerCounts) {
    for (kmer, count) in src {
        *dst.entry(kmer).or_insert(0) += count;
    }
}
