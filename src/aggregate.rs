//! Parallel aggregation of per-worker counts into one global table.

use std::{
    sync::{Mutex, PoisonError},
    thread,
};

use bytes::Bytes;

use crate::{
    count::{count_sequence, merge_into, KmerCounts},
    error::InvalidWorkerCountError,
    partition::plan,
};

/// Counts k-mers across `sequences` using `worker_count` worker threads.
///
/// One scoped thread per planned partition, bound to it for its whole
/// lifetime. Each worker scans its borrowed, read-only slice into a local
/// table with no synchronization, then folds the local table into the
/// global one under the single mutex. The lock is held only for the merge,
/// never while scanning. Returns once every worker has counted and merged.
///
/// The resulting (k-mer, count) pairs are invariant to `worker_count` and
/// to partitioning; only map iteration order varies between runs.
pub fn aggregate(
    sequences: &[Bytes],
    k: usize,
    worker_count: usize,
) -> Result<KmerCounts, InvalidWorkerCountError> {
    let ranges = plan(sequences.len(), worker_count)?;

    let global = Mutex::new(KmerCounts::default());

    thread::scope(|scope| {
        for range in ranges {
            let chunk = &sequences[range];
            let global = &global;
            scope.spawn(move || {
                let mut local = KmerCounts::default();
                for seq in chunk {
                    merge_into(&mut local, count_sequence(seq, k));
                }

                // Counts are increment-only, so a map recovered from a
                // poisoned lock is still structurally sound.
                let mut shared = global.lock().unwrap_or_else(PoisonError::into_inner);
                merge_into(&mut shared, local);
            });
        }
    });

    Ok(global.into_inner().unwrap_or_else(PoisonError::into_inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::Kmer;

    fn seqs(raw: &[&[u8]]) -> Vec<Bytes> {
        raw.iter().map(|s| Bytes::copy_from_slice(s)).collect()
    }

    fn get(counts: &KmerCounts, kmer: &[u8]) -> Option<u64> {
        counts
            .get(&Kmer::normalize(Bytes::copy_from_slice(kmer)).unwrap())
            .copied()
    }

    #[test]
    fn zero_workers_is_an_error() {
        assert_eq!(
            aggregate(&seqs(&[b"ACGT"]), 2, 0),
            Err(InvalidWorkerCountError { requested: 0 })
        );
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(aggregate(&[], 3, 4).unwrap().is_empty());
    }

    #[test]
    fn counts_span_sequences() {
        // each "ATAT" contributes AT twice and TA once
        let sequences = seqs(&[b"ATAT", b"ATAT"]);
        let counts = aggregate(&sequences, 2, 2).unwrap();
        assert_eq!(get(&counts, b"AT"), Some(4));
        assert_eq!(get(&counts, b"TA"), Some(2));
    }

    #[test]
    fn more_workers_than_sequences() {
        let sequences = seqs(&[b"AAAA"]);
        let counts = aggregate(&sequences, 2, 8).unwrap();
        assert_eq!(get(&counts, b"AA"), Some(3));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn worker_count_does_not_change_results() {
        let sequences = seqs(&[
            b"ACGTACGTACGT",
            b"acgtacgt",
            b"GATTACA",
            b"AC GT",
            b"TTTT",
            b"NNNACGT",
            b"A",
        ]);
        let reference = aggregate(&sequences, 3, 1).unwrap();
        for workers in [2, 3, 4, 7, 16] {
            assert_eq!(aggregate(&sequences, 3, workers).unwrap(), reference);
        }
    }

    #[test]
    fn merge_survives_overlapping_vocabularies() {
        // Many workers, every sequence producing the same small vocabulary
        let sequences: Vec<Bytes> = (0..100).map(|_| Bytes::from_static(b"ACACAC")).collect();
        let counts = aggregate(&sequences, 2, 16).unwrap();
        assert_eq!(get(&counts, b"AC"), Some(300));
        assert_eq!(get(&counts, b"CA"), Some(200));
    }
}
