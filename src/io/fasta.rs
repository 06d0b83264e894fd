//! Reading sequence pairs from (optionally gzipped) FASTA files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::debug;

use crate::errors::NwError;

/// A named sequence read from a FASTA file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedSequence {
    pub name: String,
    pub sequence: String,
}

/// Read all records from a FASTA file. Files ending in `.gz` are decompressed on the fly.
pub fn read_sequences(path: impl AsRef<Path>) -> Result<Vec<NamedSequence>, NwError> {
    let p = path.as_ref();
    let is_gzipped = p
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let file = File::open(p)
        .map_err(|source| NwError::FileReadError { source })?;

    let reader_inner: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    read_sequences_from(reader_inner)
}

pub fn read_sequences_from(reader: impl BufRead) -> Result<Vec<NamedSequence>, NwError> {
    let mut reader = fasta::io::Reader::new(reader);

    let mut sequences = Vec::new();
    for result in reader.records() {
        let record = result?;

        let name = std::str::from_utf8(record.name())
            .map_err(|_| NwError::InvalidSymbols)?
            .to_string();
        let sequence = std::str::from_utf8(record.sequence().as_ref())
            .map_err(|_| NwError::InvalidSymbols)?
            .to_string();

        debug!(name = %name, length = sequence.len(), "Read sequence");
        sequences.push(NamedSequence { name, sequence });
    }

    Ok(sequences)
}

/// Read the first two records of a FASTA file, to be aligned against each other.
pub fn load_sequence_pair(path: impl AsRef<Path>) -> Result<(NamedSequence, NamedSequence), NwError> {
    first_two(read_sequences(path)?)
}

fn first_two(sequences: Vec<NamedSequence>) -> Result<(NamedSequence, NamedSequence), NwError> {
    let found = sequences.len();
    let mut iter = sequences.into_iter();

    match (iter.next(), iter.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(NwError::MissingSequences(found)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{first_two, read_sequences_from};
    use crate::errors::NwError;

    #[test]
    fn test_read_records() {
        let data = b">seq1 first\nGATT\nACA\n>seq2\nGCATGCU\n>seq3\nAC\n";
        let sequences = read_sequences_from(Cursor::new(&data[..])).unwrap();

        assert_eq!(sequences.len(), 3);
        assert_eq!(sequences[0].name, "seq1");
        assert_eq!(sequences[0].sequence, "GATTACA");
        assert_eq!(sequences[1].sequence, "GCATGCU");

        let (first, second) = first_two(sequences).unwrap();
        assert_eq!(first.name, "seq1");
        assert_eq!(second.name, "seq2");
    }

    #[test]
    fn test_pair_requires_two_records() {
        let data = b">only\nACGT\n";
        let sequences = read_sequences_from(Cursor::new(&data[..])).unwrap();

        assert!(matches!(first_two(sequences), Err(NwError::MissingSequences(1))));
        assert!(matches!(first_two(Vec::new()), Err(NwError::MissingSequences(0))));
    }
}
