use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum NwError {
    /// A grid's shape does not match the shape implied by its sequences, given as (rows, cols)
    InvalidDimensions { expected: (usize, usize), actual: (usize, usize) },

    /// A row of a grid has a different length than the first row
    RaggedRows { row: usize, expected: usize, actual: usize },

    /// A cell of a direction grid holds directions no traceback can follow
    InvalidDirections { row: usize, col: usize },

    /// Fewer than two sequences were available for a pairwise alignment
    MissingSequences(usize),

    /// Sequence data could not be decoded as text
    InvalidSymbols,

    /// Error variant when we couldn't read from a file
    FileReadError { source: io::Error },

    /// Error variant when we could not (de)serialize a matrix to its binary representation
    SerializationError { source: bincode::Error },

    /// Error variant when we could not (de)serialize a matrix as JSON
    JsonError { source: serde_json::Error },

    /// Other IO errors
    IOError(io::Error),

    /// Other miscellaneous errors
    Other,
}

impl Error for NwError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source } => Some(source),
            Self::SerializationError { ref source } => Some(source),
            Self::JsonError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for NwError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<bincode::Error> for NwError {
    fn from(value: bincode::Error) -> Self {
        Self::SerializationError {
            source: value
        }
    }
}

impl From<serde_json::Error> for NwError {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonError {
            source: value
        }
    }
}

impl Display for NwError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InvalidDimensions { expected, actual } =>
                write!(f, "Expected a {}x{} grid, but got {}x{}!", expected.0, expected.1, actual.0, actual.1),
            Self::RaggedRows { row, expected, actual } =>
                write!(f, "Row {row} has {actual} columns, expected {expected}!"),
            Self::InvalidDirections { row, col } =>
                write!(f, "Invalid traceback directions at cell ({row}, {col})!"),
            Self::MissingSequences(found) =>
                write!(f, "Pairwise alignment requires two sequences, but only {found} were found!"),
            Self::InvalidSymbols =>
                write!(f, "Sequence is not valid UTF-8!"),
            Self::FileReadError { source: _ } =>
                write!(f, "Could not read from file!"),
            Self::SerializationError { source: _ } =>
                write!(f, "Could not (de)serialize the matrix in binary format!"),
            Self::JsonError { source: _ } =>
                write!(f, "Could not (de)serialize the matrix as JSON!"),
            Self::IOError(ref err) =>
                err.fmt(f),
            Self::Other =>
                write!(f, "nwmatrix error!")
        }
    }
}
