//! Alignment matrix serialization to disk using serde

use std::io::{Read, Write};

use tracing::debug;

use crate::aligner::matrix::AlignmentMatrix;
use crate::aligner::scoring::ScoreType;
use crate::errors::NwError;

pub fn save_matrix<S: ScoreType>(matrix: &AlignmentMatrix<S>, out: impl Write) -> Result<(), NwError> {
    bincode::serialize_into(out, matrix)?;

    Ok(())
}

/// Load a matrix saved with [`save_matrix`]. The grid shapes are checked against the stored
/// sequences before the matrix is handed out.
pub fn load_matrix<S: ScoreType>(reader: impl Read) -> Result<AlignmentMatrix<S>, NwError> {
    let matrix: AlignmentMatrix<S> = bincode::deserialize_from(reader)?;
    matrix.validate()?;

    debug!(rows = matrix.rows(), cols = matrix.cols(), "Loaded alignment matrix");

    Ok(matrix)
}

pub fn write_json<S: ScoreType>(matrix: &AlignmentMatrix<S>, mut out: impl Write) -> Result<(), NwError> {
    serde_json::to_writer_pretty(&mut out, matrix)?;
    writeln!(out)?;

    Ok(())
}

pub fn read_json<S: ScoreType>(reader: impl Read) -> Result<AlignmentMatrix<S>, NwError> {
    let matrix: AlignmentMatrix<S> = serde_json::from_reader(reader)?;
    matrix.validate()?;

    Ok(matrix)
}
