//! Recovering alignments from a direction grid

use crate::aligner::alignment::{AlignedPair, Alignment};
use crate::aligner::direction::Direction;
use crate::aligner::matrix::{AlignmentMatrix, DirectionGrid};
use crate::aligner::scoring::{AlignmentScoring, ScoreType};

/// Follow the direction grid from the bottom-right cell back to the origin, taking the
/// highest priority direction (diagonal, up, left) at every cell.
///
/// The returned alignment is in forward order.
pub fn traceback<S: ScoreType>(matrix: &AlignmentMatrix<S>) -> Alignment {
    let directions = matrix.directions();
    let mut alignment = Alignment::with_capacity(matrix.rows() + matrix.cols());

    let mut curr = (matrix.rows() - 1, matrix.cols() - 1);
    while let Some(direction) = directions[curr].first() {
        let Some((pi, pj)) = direction.step(curr.0, curr.1) else {
            break;
        };

        // Entering cell (i, j) from its predecessor consumes seq1[j - 1] and/or seq2[i - 1]
        let pair = match direction {
            Direction::Diagonal => AlignedPair::new(Some(pj), Some(pi)),
            Direction::Up => AlignedPair::new(None, Some(pi)),
            Direction::Left => AlignedPair::new(Some(pj), None),
        };
        alignment.push(pair);

        curr = (pi, pj);
    }

    alignment.reverse();
    alignment
}

/// Score of an alignment under the scoring scheme of the given matrix
pub fn alignment_score<S: ScoreType>(matrix: &AlignmentMatrix<S>, alignment: &[AlignedPair]) -> S {
    let seq1: Vec<char> = matrix.seq1().chars().collect();
    let seq2: Vec<char> = matrix.seq2().chars().collect();
    let scoring = matrix.scoring();

    alignment.iter()
        .map(|pair| match (pair.seq1_pos(), pair.seq2_pos()) {
            (Some(p1), Some(p2)) => scoring.substitution(&seq1[p1], &seq2[p2]),
            (None, None) => S::zero(),
            _ => scoring.gap(),
        })
        .fold(S::zero(), |acc, score| acc.saturating_add(score))
}

/// Number of distinct optimal alignments, i.e., paths from the bottom-right cell to the origin
/// through the direction grid. Saturates at `u128::MAX`.
pub fn count_optimal_alignments(directions: &DirectionGrid) -> u128 {
    let (rows, cols) = directions.shape();
    if rows == 0 || cols == 0 {
        return 0;
    }

    // paths[i * cols + j]: number of paths from (i, j) to the origin
    let mut paths = vec![0u128; rows * cols];
    paths[0] = 1;

    for i in 0..rows {
        for j in 0..cols {
            if i == 0 && j == 0 {
                continue;
            }

            let count = directions[(i, j)].iter()
                .filter_map(|d| d.step(i, j))
                .map(|(pi, pj)| paths[pi * cols + pj])
                .fold(0u128, |acc, n| acc.saturating_add(n));

            paths[i * cols + j] = count;
        }
    }

    paths[rows * cols - 1]
}

/// Render an alignment as three lines: the first sequence, a match line (`|` for matches,
/// `*` for mismatches) and the second sequence. Gaps are shown as `-`.
pub fn print_alignment(seq1: &str, seq2: &str, alignment: &[AlignedPair]) -> String {
    let seq1: Vec<char> = seq1.chars().collect();
    let seq2: Vec<char> = seq2.chars().collect();

    let mut seq1_chars = String::with_capacity(alignment.len());
    let mut aln_chars = String::with_capacity(alignment.len());
    let mut seq2_chars = String::with_capacity(alignment.len());

    for pair in alignment {
        match (pair.seq1_pos(), pair.seq2_pos()) {
            (Some(p1), Some(p2)) => {
                seq1_chars.push(seq1[p1]);
                aln_chars.push(if seq1[p1] == seq2[p2] { '|' } else { '*' });
                seq2_chars.push(seq2[p2]);
            },
            (Some(p1), None) => {
                seq1_chars.push(seq1[p1]);
                aln_chars.push(' ');
                seq2_chars.push('-');
            },
            (None, Some(p2)) => {
                seq1_chars.push('-');
                aln_chars.push(' ');
                seq2_chars.push(seq2[p2]);
            },
            (None, None) => (),
        }
    }

    format!("{seq1_chars}\n{aln_chars}\n{seq2_chars}")
}
