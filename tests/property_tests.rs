//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold across all valid inputs,
//! catching edge cases that might be missed by example-based tests.

use bytes::Bytes;
use ktally::aggregate::aggregate;
use ktally::count::count_sequence;
use ktally::partition::plan;
use proptest::prelude::*;

/// Strategy for raw sequence bytes: nucleotides in both cases, `N`, and the
/// whitespace artifacts that malformed line-joining produces.
fn raw_sequence() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![
            Just(b'A'),
            Just(b'C'),
            Just(b'G'),
            Just(b'T'),
            Just(b'a'),
            Just(b'c'),
            Just(b'g'),
            Just(b't'),
            Just(b'N'),
            Just(b' '),
            Just(b'\r'),
            Just(b'\n'),
        ],
        0..40,
    )
}

fn sequence_list() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(raw_sequence(), 0..12)
}

/// The number of windows the counter should accept in one sequence.
fn valid_windows(seq: &[u8], k: usize) -> u64 {
    if k == 0 || seq.len() < k {
        return 0;
    }
    seq.windows(k)
        .filter(|window| !window.iter().any(|&b| matches!(b, b' ' | b'\r' | b'\n')))
        .count() as u64
}

proptest! {
    /// Results are invariant to the worker count; only iteration order may
    /// differ, which map equality ignores.
    #[test]
    fn worker_count_invariance(
        raw in sequence_list(),
        k in 1usize..=8,
        workers in 1usize..=16,
    ) {
        let sequences: Vec<Bytes> = raw.into_iter().map(Bytes::from).collect();
        let reference = aggregate(&sequences, k, 1).unwrap();
        let pooled = aggregate(&sequences, k, workers).unwrap();
        prop_assert_eq!(pooled, reference);
    }

    /// Every accepted window is counted exactly once: summed counts equal
    /// the number of whitespace-free windows across all sequences.
    #[test]
    fn totals_equal_valid_window_count(
        raw in sequence_list(),
        k in 1usize..=8,
        workers in 1usize..=8,
    ) {
        let expected: u64 = raw.iter().map(|seq| valid_windows(seq, k)).sum();
        let sequences: Vec<Bytes> = raw.into_iter().map(Bytes::from).collect();
        let counts = aggregate(&sequences, k, workers).unwrap();
        prop_assert_eq!(counts.values().sum::<u64>(), expected);
    }

    /// Planned ranges tile `[0, n)` exactly: contiguous, disjoint, in
    /// order, with the last range ending at n.
    #[test]
    fn partition_covers_exactly(n in 0usize..500, t in 1usize..64) {
        let ranges = plan(n, t).unwrap();
        prop_assert_eq!(ranges.len(), t);

        let mut next = 0;
        for range in &ranges {
            prop_assert_eq!(range.start, next);
            prop_assert!(range.start <= range.end);
            next = range.end;
        }
        prop_assert_eq!(next, n);
    }

    /// Counting is case-insensitive: a sequence and its lowercase form
    /// produce identical tables.
    #[test]
    fn case_folding_invariance(raw in raw_sequence(), k in 1usize..=8) {
        let lower: Vec<u8> = raw.iter().map(u8::to_ascii_lowercase).collect();
        let counts = count_sequence(&Bytes::from(raw), k);
        let counts_lower = count_sequence(&Bytes::from(lower), k);
        prop_assert_eq!(counts, counts_lower);
    }
}
