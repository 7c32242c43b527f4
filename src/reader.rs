//! FASTA input: reads records into raw sequence byte strings.

use std::{
    fs::File,
    io::{self, BufRead},
};

use bio::io::fasta;
use bytes::Bytes;

use crate::{error::KtallyError, input::Input};

/// Reads every record's sequence from the given input source.
///
/// Record boundaries, headers, and comment lines belong to the FASTA
/// parser. The returned sequences are raw: they may still carry mixed case
/// and embedded whitespace artifacts, which the normalizer deals with
/// window by window.
pub(crate) fn read(input: &Input) -> Result<Vec<Bytes>, KtallyError> {
    match input {
        Input::File(path) => {
            let file = File::open(path).map_err(|source| KtallyError::FileOpen {
                source,
                path: path.clone(),
            })?;
            records_to_bytes(fasta::Reader::new(file))
        }
        Input::Stdin => records_to_bytes(fasta::Reader::new(io::stdin())),
    }
}

/// Copies each record's sequence into an owned `Bytes`.
fn records_to_bytes<B: BufRead>(reader: fasta::Reader<B>) -> Result<Vec<Bytes>, KtallyError> {
    reader
        .records()
        .map(|record| {
            let record = record.map_err(|source| KtallyError::SequenceRead { source })?;
            Ok(Bytes::copy_from_slice(record.seq()))
        })
        .collect()
}
