//! The k-mer value type and window normalization.

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

/// Marker for a window that cannot become a k-mer.
///
/// Rejection is not a failure: the caller skips the window and keeps
/// scanning. It never surfaces past the counting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("window contains whitespace")]
pub struct Rejected;

/// A normalized, fixed-length substring of a DNA sequence.
///
/// Holds the uppercase-folded window bytes. Never mutated after creation,
/// so it is freely shareable across workers.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kmer(Bytes);

impl Kmer {
    /// Validates and case-folds one window extracted from a sequence.
    ///
    /// Windows containing a space, carriage return, or line feed are
    /// rejected; these arise from malformed line-joining in the source and
    /// must never appear inside a k-mer. Lowercase ASCII letters are folded
    /// to uppercase; every other byte (already-uppercase letters, `N`,
    /// digits) passes through unchanged.
    ///
    /// Pure function: identical input always yields identical output, which
    /// is what permits unsynchronized reuse across workers. When nothing
    /// needs folding the input view is reused without copying.
    pub fn normalize(sub: Bytes) -> Result<Self, Rejected> {
        if sub.iter().any(|&b| matches!(b, b' ' | b'\r' | b'\n')) {
            return Err(Rejected);
        }

        if sub.iter().any(u8::is_ascii_lowercase) {
            Ok(Self(sub.iter().map(u8::to_ascii_uppercase).collect()))
        } else {
            Ok(Self(sub))
        }
    }

    /// The normalized window bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
