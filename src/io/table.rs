//! Tab-separated rendering of alignment matrices, with arrow glyphs for the directions

use std::fmt::Display;
use std::io::Write;

use itertools::Itertools;

use crate::aligner::direction::{Direction, DirectionSet};
use crate::aligner::matrix::AlignmentMatrix;
use crate::aligner::scoring::ScoreType;
use crate::errors::NwError;

/// Characters used to draw directions
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GlyphStyle {
    /// ↖ ↑ ←
    #[default]
    Unicode,

    /// \ | -
    Ascii,
}

impl GlyphStyle {
    pub fn glyph(&self, direction: Direction) -> char {
        match (self, direction) {
            (Self::Unicode, Direction::Diagonal) => '↖',
            (Self::Unicode, Direction::Up) => '↑',
            (Self::Unicode, Direction::Left) => '←',
            (Self::Ascii, Direction::Diagonal) => '\\',
            (Self::Ascii, Direction::Up) => '|',
            (Self::Ascii, Direction::Left) => '-',
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct TableOptions {
    pub glyphs: GlyphStyle,

    /// Add a header row with the symbols of the first sequence, and a leading column with
    /// the symbols of the second sequence.
    pub labels: bool,
}

/// All glyphs of a direction set, in diagonal, up, left order
pub fn direction_glyphs(directions: DirectionSet, style: GlyphStyle) -> String {
    directions.iter()
        .map(|d| style.glyph(d))
        .collect()
}

/// A single cell: the score, a space, and the direction glyphs
pub fn format_cell(score: impl Display, directions: DirectionSet, style: GlyphStyle) -> String {
    format!("{} {}", score, direction_glyphs(directions, style))
}

/// Write the matrix as tab-separated rows, row 0 first.
pub fn write_table<S, W>(writer: &mut W, matrix: &AlignmentMatrix<S>, options: &TableOptions) -> Result<(), NwError>
where
    S: ScoreType,
    W: Write + ?Sized,
{
    let scores = matrix.scores();
    let directions = matrix.directions();

    // Row labels: '-' for the empty prefix, then the symbols of seq2
    let mut row_labels = std::iter::once('-').chain(matrix.seq2().chars());

    if options.labels {
        let header = ["".to_string(), "-".to_string()].into_iter()
            .chain(matrix.seq1().chars().map(String::from))
            .join("\t");
        writeln!(writer, "{header}")?;
    }

    for i in 0..matrix.rows() {
        let cells = scores.row(i).iter()
            .zip(directions.row(i))
            .map(|(score, dirs)| format_cell(score, *dirs, options.glyphs))
            .join("\t");

        if options.labels {
            let label = row_labels.next().unwrap_or(' ');
            writeln!(writer, "{label}\t{cells}")?;
        } else {
            writeln!(writer, "{cells}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{direction_glyphs, format_cell, write_table, GlyphStyle, TableOptions};
    use crate::aligner::builder::AlignmentMatrixBuilder;
    use crate::aligner::config::AlignmentInput;
    use crate::aligner::direction::{Direction, DirectionSet};
    use crate::aligner::scoring::GapLinear;

    fn render(seq1: &str, seq2: &str, scoring: GapLinear<i32>, options: TableOptions) -> String {
        let input = AlignmentInput::new(seq1, seq2, scoring);
        let matrix = AlignmentMatrixBuilder::new(scoring).build_input(&input);

        let mut out = Vec::<u8>::new();
        write_table(&mut out, &matrix, &options).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_glyph_order() {
        let all = DirectionSet::from_iter([Direction::Left, Direction::Up, Direction::Diagonal]);
        assert_eq!(direction_glyphs(all, GlyphStyle::Unicode), "↖↑←");
        assert_eq!(direction_glyphs(all, GlyphStyle::Ascii), "\\|-");
        assert_eq!(direction_glyphs(DirectionSet::EMPTY, GlyphStyle::Unicode), "");

        assert_eq!(format_cell(-3, DirectionSet::single(Direction::Up), GlyphStyle::Unicode), "-3 ↑");
        assert_eq!(format_cell(0, DirectionSet::EMPTY, GlyphStyle::Unicode), "0 ");
    }

    #[test]
    fn test_single_match_table() {
        let table = render("A", "A", GapLinear::default(), TableOptions::default());
        assert_eq!(table, "0 \t-2 ←\n-2 ↑\t1 ↖\n");
    }

    #[test]
    fn test_column_vector_table() {
        let table = render("", "AB", GapLinear::default(), TableOptions::default());
        assert_eq!(table, "0 \n-2 ↑\n-4 ↑\n");
    }

    #[test]
    fn test_tie_table() {
        let table = render("A", "C", GapLinear::new(0, 0, 0), TableOptions::default());
        assert_eq!(table, "0 \t0 ←\n0 ↑\t0 ↖↑←\n");
    }

    #[test]
    fn test_labelled_table() {
        let options = TableOptions { glyphs: GlyphStyle::Ascii, labels: true };
        let table = render("A", "A", GapLinear::default(), options);

        assert_eq!(table, "\t-\tA\n-\t0 \t-2 -\nA\t-2 |\t1 \\\n");
    }
}
