//! Needleman-Wunsch score matrix construction

use num::traits::Saturating;
use num::Zero;
use tracing::{debug, debug_span};

use crate::aligner::config::AlignmentInput;
use crate::aligner::direction::{Direction, DirectionSet};
use crate::aligner::matrix::{AlignmentMatrix, DirectionGrid, Grid, ScoreMatrix};
use crate::aligner::scoring::{AlignmentScoring, GapLinear, ScoreType};

/// Builds the dynamic programming score matrix and the optimal predecessor directions of each
/// cell for a pair of sequences.
///
/// The matrix has `len(seq2) + 1` rows and `len(seq1) + 1` columns. Cell `(i, j)` holds the
/// optimal global alignment score of `seq2[..i]` against `seq1[..j]`.
#[derive(Copy, Clone, Debug)]
pub struct AlignmentMatrixBuilder<C> {
    scoring: C,
}

impl<C> AlignmentMatrixBuilder<C>
where
    C: AlignmentScoring,
{
    pub fn new(scoring: C) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &C {
        &self.scoring
    }

    /// Compute both grids in a single row-major pass. Every cell only depends on cells in
    /// the previous row or earlier in the same row, which are final by the time we get there.
    pub fn build<T>(&self, seq1: &[T], seq2: &[T]) -> (ScoreMatrix<C::Score>, DirectionGrid)
    where
        T: PartialEq,
    {
        let rows = seq2.len() + 1;
        let cols = seq1.len() + 1;
        let gap = self.scoring.gap();

        let _span = debug_span!("build_matrix", rows, cols).entered();

        let mut scores = Grid::new(rows, cols, C::Score::zero());
        let mut directions = Grid::new(rows, cols, DirectionSet::EMPTY);

        for i in 1..rows {
            scores.set(i, 0, scores[(i - 1, 0)].saturating_add(gap));
            directions.set(i, 0, DirectionSet::single(Direction::Up));
        }

        for j in 1..cols {
            scores.set(0, j, scores[(0, j - 1)].saturating_add(gap));
            directions.set(0, j, DirectionSet::single(Direction::Left));
        }

        for i in 1..rows {
            for j in 1..cols {
                let substitution = self.scoring.substitution(&seq1[j - 1], &seq2[i - 1]);

                let candidates = [
                    (Direction::Diagonal, scores[(i - 1, j - 1)].saturating_add(substitution)),
                    (Direction::Up, scores[(i - 1, j)].saturating_add(gap)),
                    (Direction::Left, scores[(i, j - 1)].saturating_add(gap)),
                ];

                let best = candidates.iter()
                    .map(|(_, score)| *score)
                    .max()
                    .unwrap_or(C::Score::zero());

                let optimal: DirectionSet = candidates.iter()
                    .filter(|(_, score)| *score == best)
                    .map(|(direction, _)| *direction)
                    .collect();

                scores.set(i, j, best);
                directions.set(i, j, optimal);
            }
        }

        debug!(score = %scores[(rows - 1, cols - 1)], "Score matrix complete.");

        (scores, directions)
    }
}

impl<S> AlignmentMatrixBuilder<GapLinear<S>>
where
    S: ScoreType,
{
    /// Build the complete alignment matrix for the given input. Sequences are compared
    /// character by character.
    pub fn build_input(&self, input: &AlignmentInput<S>) -> AlignmentMatrix<S> {
        let seq1: Vec<char> = input.seq1.chars().collect();
        let seq2: Vec<char> = input.seq2.chars().collect();

        let (scores, directions) = self.build(&seq1, &seq2);

        AlignmentMatrix::new_unchecked(input.seq1.clone(), input.seq2.clone(), self.scoring, scores, directions)
    }
}

/// Compute the score matrix and direction grid for `seq1` (columns) and `seq2` (rows) with
/// the given match, mismatch and gap scores.
pub fn build<T, S>(
    seq1: &[T],
    seq2: &[T],
    match_score: S,
    mismatch_score: S,
    gap_penalty: S
) -> (ScoreMatrix<S>, DirectionGrid)
where
    T: PartialEq,
    S: ScoreType,
{
    AlignmentMatrixBuilder::new(GapLinear::new(match_score, mismatch_score, gap_penalty))
        .build(seq1, seq2)
}
