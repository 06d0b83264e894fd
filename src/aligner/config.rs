use serde::{Deserialize, Serialize};

use crate::aligner::scoring::{GapLinear, ScoreType};

/// Everything needed to build an alignment matrix: the two sequences and the scoring scheme
///
/// `seq1` spans the columns of the matrix, `seq2` the rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "S: ScoreType")]
pub struct AlignmentInput<S> {
    pub seq1: String,
    pub seq2: String,
    pub scoring: GapLinear<S>,
}

impl<S: ScoreType> AlignmentInput<S> {
    pub fn new(seq1: impl Into<String>, seq2: impl Into<String>, scoring: GapLinear<S>) -> Self {
        Self { seq1: seq1.into(), seq2: seq2.into(), scoring }
    }
}
