//! A parallel k-mer counter for DNA sequences in FASTA files.
//!
//! ktally reads FASTA records, slides a fixed-width window over every
//! sequence, case-folds each window, and tallies occurrences across a pool
//! of worker threads. Each worker counts its own contiguous slice of the
//! sequence list into a private table and folds it into the global table
//! under a single mutex, so scanning never contends on shared state.
//!
//! Windows containing whitespace artifacts from malformed input are skipped
//! rather than counted; lowercase (soft-masked) residues count the same as
//! their uppercase forms.
//!
//! # Example
//!
//! ```no_run
//! use ktally::run::count_kmers;
//!
//! let counts = count_kmers("genome.fa", 21)?;
//! for (kmer, count) in &counts {
//!     println!("{kmer}\t{count}");
//! }
//! # Ok::<(), ktally::error::KtallyError>(())
//! ```

pub mod aggregate;
pub mod cli;
pub mod count;
pub mod error;
pub mod histogram;
pub mod input;
pub mod kmer;
pub mod partition;
pub(crate) mod reader;
pub mod run;
