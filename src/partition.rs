//! Partition planning: assigning contiguous slices of the sequence list to
//! workers.

use std::ops::Range;

use crate::error::InvalidWorkerCountError;

/// Plans one half-open index range per worker over `sequence_count`
/// sequences.
///
/// Ranges are contiguous and disjoint and their union is exactly
/// `[0, sequence_count)`. Division remainders always land in the last
/// range, never get redistributed; with more workers than sequences the
/// leading ranges are empty and their workers perform a no-op merge.
pub fn plan(
    sequence_count: usize,
    worker_count: usize,
) -> Result<Vec<Range<usize>>, InvalidWorkerCountError> {
    if worker_count == 0 {
        return Err(InvalidWorkerCountError { requested: 0 });
    }

    let per_worker = sequence_count / worker_count;
    let ranges = (0..worker_count)
        .map(|i| {
            let start = i * per_worker;
            let end = if i == worker_count - 1 {
                sequence_count
            } else {
                (i + 1) * per_worker
            };
            start..end
        })
        .collect();

    Ok(ranges)
}
