//! Fixed-shape grids holding the dynamic programming results

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::aligner::direction::DirectionSet;
use crate::aligner::scoring::{GapLinear, ScoreType};
use crate::errors::NwError;

/// A two-dimensional grid stored in row-major order
///
/// The shape is fixed at construction. Element `(i, j)` is row `i`, column `j`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Optimal prefix alignment scores, `(len(seq2) + 1) x (len(seq1) + 1)`
pub type ScoreMatrix<S> = Grid<S>;

/// Optimal predecessor directions, parallel to a [`ScoreMatrix`]
pub type DirectionGrid = Grid<DirectionSet>;

impl<T: Clone> Grid<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self { rows, cols, data: vec![fill; rows * cols] }
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self[(i, j)].clone());
            }
        }

        Self { rows: self.cols, cols: self.rows, data }
    }
}

impl<T> Grid<T> {
    /// Build a grid from row-major data, which must hold exactly `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, NwError> {
        let grid = Self { rows, cols, data };
        grid.check_storage()?;

        Ok(grid)
    }

    /// Build a grid from a vector of rows, all of which must have equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, NwError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_cols {
                return Err(NwError::RaggedRows { row: i, expected: num_cols, actual: row.len() });
            }

            data.extend(row);
        }

        Ok(Self { rows: num_rows, cols: num_cols, data })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.data.get(i * self.cols + j)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.rows && j < self.cols, "Cell ({i}, {j}) outside of {}x{} grid!", self.rows, self.cols);
        self.data[i * self.cols + j] = value;
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item=&[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone
    {
        self.iter_rows()
            .map(|r| r.to_vec())
            .collect()
    }

    /// Check the grid's bookkeeping agrees with its data, e.g., after deserialization.
    fn check_storage(&self) -> Result<(), NwError> {
        if self.rows.checked_mul(self.cols) != Some(self.data.len()) {
            // Report the shape the data would have with the stored number of columns
            let actual_rows = if self.cols > 0 { self.data.len() / self.cols } else { 0 };
            return Err(NwError::InvalidDimensions {
                expected: (self.rows, self.cols),
                actual: (actual_rows, self.cols),
            });
        }

        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "Cell ({i}, {j}) outside of {}x{} grid!", self.rows, self.cols);
        &self.data[i * self.cols + j]
    }
}

/// A complete alignment matrix: the inputs together with the score and direction grids
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "S: ScoreType")]
pub struct AlignmentMatrix<S> {
    seq1: String,
    seq2: String,
    scoring: GapLinear<S>,
    scores: ScoreMatrix<S>,
    directions: DirectionGrid,
}

impl<S: ScoreType> AlignmentMatrix<S> {
    /// Assemble an alignment matrix from separately obtained parts, checking that both grids
    /// have the shape implied by the sequences.
    pub fn from_parts(
        seq1: String,
        seq2: String,
        scoring: GapLinear<S>,
        scores: ScoreMatrix<S>,
        directions: DirectionGrid
    ) -> Result<Self, NwError> {
        let matrix = Self { seq1, seq2, scoring, scores, directions };
        matrix.validate()?;

        Ok(matrix)
    }

    /// Used by the builder, which produces grids of the right shape by construction.
    pub(crate) fn new_unchecked(
        seq1: String,
        seq2: String,
        scoring: GapLinear<S>,
        scores: ScoreMatrix<S>,
        directions: DirectionGrid
    ) -> Self {
        Self { seq1, seq2, scoring, scores, directions }
    }

    /// Expected grid shape: one row per symbol of `seq2` and one column per symbol of
    /// `seq1`, plus the boundary row and column.
    pub fn expected_shape(&self) -> (usize, usize) {
        (self.seq2.chars().count() + 1, self.seq1.chars().count() + 1)
    }

    pub fn validate(&self) -> Result<(), NwError> {
        self.scores.check_storage()?;
        self.directions.check_storage()?;

        let expected = self.expected_shape();
        for shape in [self.scores.shape(), self.directions.shape()] {
            if shape != expected {
                return Err(NwError::InvalidDimensions { expected, actual: shape })
            }
        }

        self.check_directions()
    }

    /// Every cell except the origin needs at least one direction, and all of them must lead
    /// to a cell inside the grid. Otherwise a traceback would stop before reaching (0, 0).
    fn check_directions(&self) -> Result<(), NwError> {
        for (i, row) in self.directions.iter_rows().enumerate() {
            for (j, dirs) in row.iter().enumerate() {
                let at_origin = i == 0 && j == 0;

                if !dirs.is_valid()
                    || dirs.is_empty() != at_origin
                    || dirs.iter().any(|d| d.step(i, j).is_none())
                {
                    return Err(NwError::InvalidDirections { row: i, col: j });
                }
            }
        }

        Ok(())
    }

    pub fn seq1(&self) -> &str {
        &self.seq1
    }

    pub fn seq2(&self) -> &str {
        &self.seq2
    }

    pub fn scoring(&self) -> &GapLinear<S> {
        &self.scoring
    }

    pub fn scores(&self) -> &ScoreMatrix<S> {
        &self.scores
    }

    pub fn directions(&self) -> &DirectionGrid {
        &self.directions
    }

    pub fn rows(&self) -> usize {
        self.scores.rows()
    }

    pub fn cols(&self) -> usize {
        self.scores.cols()
    }

    /// The global alignment score, i.e., the bottom-right cell
    pub fn score(&self) -> S {
        self.scores[(self.rows() - 1, self.cols() - 1)]
    }

    pub fn score_at(&self, i: usize, j: usize) -> Option<S> {
        self.scores.get(i, j).copied()
    }

    pub fn directions_at(&self, i: usize, j: usize) -> Option<DirectionSet> {
        self.directions.get(i, j).copied()
    }

    /// Number of cells where more than one predecessor attains the optimum
    pub fn num_tied_cells(&self) -> usize {
        self.directions.iter_rows()
            .flatten()
            .filter(|d| d.len() > 1)
            .count()
    }

    pub fn into_parts(self) -> (ScoreMatrix<S>, DirectionGrid) {
        (self.scores, self.directions)
    }
}

#[cfg(test)]
mod tests {
    use super::{AlignmentMatrix, Grid};
    use crate::aligner::direction::{Direction, DirectionSet};
    use crate::aligner::scoring::GapLinear;
    use crate::errors::NwError;

    #[test]
    fn test_grid_shape_checks() {
        let grid = Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid[(1, 0)], 4);
        assert_eq!(grid.row(0), &[1, 2, 3]);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);

        assert!(matches!(
            Grid::from_vec(2, 3, vec![1, 2, 3, 4]),
            Err(NwError::InvalidDimensions { expected: (2, 3), .. })
        ));

        assert!(matches!(
            Grid::<u8>::from_vec(usize::MAX, 2, vec![]),
            Err(NwError::InvalidDimensions { expected: (usize::MAX, 2), actual: (0, 2) })
        ));

        assert!(matches!(
            Grid::from_rows(vec![vec![1, 2], vec![3]]),
            Err(NwError::RaggedRows { row: 1, expected: 2, actual: 1 })
        ));
    }

    #[test]
    #[should_panic]
    fn test_grid_index_out_of_bounds() {
        let grid = Grid::new(2, 2, 0i32);
        let _value: i32 = grid[(0, 2)];
    }

    #[test]
    fn test_transpose() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let transposed = grid.transpose();

        assert_eq!(transposed.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(transposed.transpose(), grid);
    }

    #[test]
    fn test_from_parts_checks_shape() {
        let scores = Grid::from_rows(vec![vec![0, -2], vec![-2, 1]]).unwrap();
        let directions = Grid::from_rows(vec![
            vec![DirectionSet::EMPTY, DirectionSet::single(Direction::Left)],
            vec![DirectionSet::single(Direction::Up), DirectionSet::single(Direction::Diagonal)],
        ]).unwrap();

        let matrix = AlignmentMatrix::from_parts(
            "A".to_string(), "A".to_string(), GapLinear::default(), scores.clone(), directions.clone()
        ).unwrap();
        assert_eq!(matrix.score(), 1);
        assert_eq!(matrix.num_tied_cells(), 0);

        let result = AlignmentMatrix::from_parts(
            "AC".to_string(), "A".to_string(), GapLinear::default(), scores, directions
        );
        assert!(matches!(
            result,
            Err(NwError::InvalidDimensions { expected: (2, 3), actual: (2, 2) })
        ));
    }

    #[test]
    fn test_from_parts_checks_directions() {
        let scores = Grid::from_rows(vec![vec![0, -2], vec![-2, 1]]).unwrap();
        let from_directions = |directions: Vec<Vec<DirectionSet>>| AlignmentMatrix::from_parts(
            "A".to_string(), "A".to_string(), GapLinear::default(), scores.clone(),
            Grid::from_rows(directions).unwrap()
        );

        let left = DirectionSet::single(Direction::Left);
        let up = DirectionSet::single(Direction::Up);
        let diag = DirectionSet::single(Direction::Diagonal);

        assert!(from_directions(vec![vec![DirectionSet::EMPTY, left], vec![up, diag]]).is_ok());

        // Empty interior cell
        assert!(matches!(
            from_directions(vec![vec![DirectionSet::EMPTY, left], vec![up, DirectionSet::EMPTY]]),
            Err(NwError::InvalidDirections { row: 1, col: 1 })
        ));

        // Stepping up out of the first row
        assert!(matches!(
            from_directions(vec![vec![DirectionSet::EMPTY, up], vec![up, diag]]),
            Err(NwError::InvalidDirections { row: 0, col: 1 })
        ));

        // Direction at the origin
        assert!(matches!(
            from_directions(vec![vec![left, left], vec![up, diag]]),
            Err(NwError::InvalidDirections { row: 0, col: 0 })
        ));
    }
}
