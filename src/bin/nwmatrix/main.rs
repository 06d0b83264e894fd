use std::fs::{self, File};
use std::io::{self, stdout, BufReader, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use nwmatrix::aligner::scoring::GapLinear;
use nwmatrix::aligner::traceback::{count_optimal_alignments, print_alignment, traceback};
use nwmatrix::aligner::{AlignmentInput, AlignmentMatrix, AlignmentMatrixBuilder};
use nwmatrix::errors::NwError;
use nwmatrix::io::fasta::load_sequence_pair;
use nwmatrix::io::table::{write_table, GlyphStyle, TableOptions};
use nwmatrix::io::{load_matrix, save_matrix, write_json};

mod cli;
mod prompt;

use cli::{BuildArgs, CliArgs, CliSubcommand, OutputArgs, OutputType, StatsArgs, ViewArgs};

trait Output: Write + IsTerminal {}
impl<T> Output for T where T: Write + IsTerminal {}

/// Log to stderr. Verbosity flags pick the default level, `RUST_LOG` overrides it.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log).init();
}

fn open_output(output_args: &OutputArgs) -> Result<Box<dyn Output>> {
    let writer: Box<dyn Output> = if let Some(path) = &output_args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)
            .with_context(|| format!("Could not create output file {path:?}"))?;
        Box::new(file) as Box<dyn Output>
    } else {
        Box::new(stdout()) as Box<dyn Output>
    };

    Ok(writer)
}

fn write_output(matrix: &AlignmentMatrix<i32>, output_args: &OutputArgs, leading_newline: bool) -> Result<()> {
    let mut writer = open_output(output_args)?;
    let is_terminal = writer.is_terminal();

    render_output(&mut writer, is_terminal, &mut io::stderr(), matrix, output_args, leading_newline)?;
    writer.flush()?;

    Ok(())
}

/// Render the matrix in the requested format to `out`. Binary data is never written to a
/// terminal. Only the table has room for the alignment, other formats write it to `side`.
fn render_output(
    out: &mut dyn Write,
    out_is_terminal: bool,
    side: &mut dyn Write,
    matrix: &AlignmentMatrix<i32>,
    output_args: &OutputArgs,
    leading_newline: bool,
) -> Result<()> {
    let alignment = output_args.traceback.then(|| traceback(matrix));

    match output_args.output_type.unwrap_or(OutputType::Table) {
        OutputType::Table => {
            let options = TableOptions {
                glyphs: if output_args.ascii { GlyphStyle::Ascii } else { GlyphStyle::Unicode },
                labels: output_args.labels,
            };

            if leading_newline {
                writeln!(out)?;
            }

            write_table(&mut *out, matrix, &options)?;

            if let Some(aln) = &alignment {
                writeln!(out)?;
                writeln!(out, "{}", print_alignment(matrix.seq1(), matrix.seq2(), aln))?;
            }
        },
        OutputType::Json => write_json(matrix, &mut *out)?,
        OutputType::Binary => {
            if !out_is_terminal {
                save_matrix(matrix, &mut *out)?
            } else {
                warn!("Not writing binary matrix data to terminal standard output!");
            }
        },
    }

    if let (Some(aln), Some(OutputType::Json | OutputType::Binary)) = (&alignment, output_args.output_type) {
        writeln!(side, "{}", print_alignment(matrix.seq1(), matrix.seq2(), aln))?;
    }

    Ok(())
}

fn build_subcommand(build_args: &BuildArgs) -> Result<()> {
    let defaults = GapLinear::<i32>::default();
    let mut match_score = build_args.match_score.unwrap_or(defaults.match_score());
    let mut mismatch_score = build_args.mismatch_score.unwrap_or(defaults.mismatch_score());
    let mut gap_penalty = build_args.gap_penalty.unwrap_or(defaults.gap_penalty());

    let mut interactive = false;
    let (seq1, seq2) = if let Some(path) = &build_args.fasta {
        let (first, second) = load_sequence_pair(path)
            .with_context(|| format!("Could not read a sequence pair from {path:?}"))?;
        info!(seq1 = %first.name, seq2 = %second.name, "Loaded sequences from FASTA");

        (first.sequence, second.sequence)
    } else if let (Some(seq1), Some(seq2)) = (&build_args.seq1, &build_args.seq2) {
        (seq1.clone(), seq2.clone())
    } else {
        interactive = true;

        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut prompt_out = io::stderr();

        let seq1 = prompt::prompt_line(&mut reader, &mut prompt_out, "Enter sequence 1: ")?;
        let seq2 = prompt::prompt_line(&mut reader, &mut prompt_out, "Enter sequence 2: ")?;
        match_score = prompt::prompt_score(&mut reader, &mut prompt_out, "Enter match score: ", match_score)?;
        mismatch_score = prompt::prompt_score(&mut reader, &mut prompt_out, "Enter mismatch score: ", mismatch_score)?;
        gap_penalty = prompt::prompt_score(&mut reader, &mut prompt_out, "Enter gap penalty: ", gap_penalty)?;

        (seq1, seq2)
    };

    let scoring = GapLinear::new(match_score, mismatch_score, gap_penalty);
    let input = AlignmentInput::new(seq1, seq2, scoring);
    let matrix = AlignmentMatrixBuilder::new(scoring).build_input(&input);

    info!(rows = matrix.rows(), cols = matrix.cols(), score = matrix.score(), "Built alignment matrix");

    write_output(&matrix, &build_args.output, interactive)
}

fn load_matrix_file(path: &std::path::Path) -> Result<AlignmentMatrix<i32>> {
    let file_in = File::open(path)
        .map(BufReader::new)
        .with_context(|| format!("Could not open matrix file {path:?}"))?;

    load_matrix(file_in)
        .with_context(|| format!("Could not load alignment matrix from {path:?}"))
}

fn view_subcommand(view_args: &ViewArgs) -> Result<()> {
    let matrix = load_matrix_file(&view_args.matrix)?;

    write_output(&matrix, &view_args.output, false)
}

fn stats_subcommand(stats_args: &StatsArgs) -> Result<()> {
    let matrix = load_matrix_file(&stats_args.matrix)?;

    println!("seq1_length: {}", matrix.seq1().chars().count());
    println!("seq2_length: {}", matrix.seq2().chars().count());
    println!("rows: {}", matrix.rows());
    println!("cols: {}", matrix.cols());
    println!("score: {}", matrix.score());
    println!("tied_cells: {}", matrix.num_tied_cells());
    println!("optimal_alignments: {}", count_optimal_alignments(matrix.directions()));

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match &args.command {
        Some(CliSubcommand::Build(v)) => build_subcommand(v)?,
        Some(CliSubcommand::View(v)) => view_subcommand(v)?,
        Some(CliSubcommand::Stats(v)) => stats_subcommand(v)?,
        None => return Err(NwError::Other).with_context(|| "No subcommand given.".to_string()),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use nwmatrix::aligner::scoring::GapLinear;
    use nwmatrix::aligner::{AlignmentInput, AlignmentMatrix, AlignmentMatrixBuilder};
    use nwmatrix::io::{load_matrix, read_json};

    use super::render_output;
    use crate::cli::{OutputArgs, OutputType};

    const SINGLE_MATCH_TABLE: &str = "0 \t-2 ←\n-2 ↑\t1 ↖\n";

    fn single_match() -> AlignmentMatrix<i32> {
        let input = AlignmentInput::new("A", "A", GapLinear::default());
        AlignmentMatrixBuilder::new(input.scoring).build_input(&input)
    }

    fn output_args(output_type: Option<OutputType>, traceback: bool) -> OutputArgs {
        OutputArgs { output: None, output_type, ascii: false, labels: false, traceback }
    }

    /// Render to in-memory buffers, returning what ended up on the output and on the side channel
    fn render(matrix: &AlignmentMatrix<i32>, args: &OutputArgs, is_terminal: bool, leading_newline: bool) -> (Vec<u8>, String) {
        let mut out = Vec::<u8>::new();
        let mut side = Vec::<u8>::new();
        render_output(&mut out, is_terminal, &mut side, matrix, args, leading_newline).unwrap();

        (out, String::from_utf8(side).unwrap())
    }

    #[test]
    fn test_table_leading_newline() {
        let matrix = single_match();
        let args = output_args(None, false);

        let (out, side) = render(&matrix, &args, true, false);
        assert_eq!(String::from_utf8(out).unwrap(), SINGLE_MATCH_TABLE);
        assert!(side.is_empty());

        let (out, _) = render(&matrix, &args, true, true);
        assert_eq!(String::from_utf8(out).unwrap(), format!("\n{SINGLE_MATCH_TABLE}"));
    }

    #[test]
    fn test_table_with_traceback() {
        let matrix = single_match();
        let (out, side) = render(&matrix, &output_args(Some(OutputType::Table), true), true, false);

        assert_eq!(String::from_utf8(out).unwrap(), format!("{SINGLE_MATCH_TABLE}\nA\n|\nA\n"));
        assert!(side.is_empty());
    }

    #[test]
    fn test_json_traceback_on_side_channel() {
        let matrix = single_match();
        let (out, side) = render(&matrix, &output_args(Some(OutputType::Json), true), true, false);

        let parsed: AlignmentMatrix<i32> = read_json(&out[..]).unwrap();
        assert_eq!(parsed, matrix);
        assert_eq!(side, "A\n|\nA\n");
    }

    #[test]
    fn test_binary_refused_on_terminal() {
        let matrix = single_match();
        let (out, side) = render(&matrix, &output_args(Some(OutputType::Binary), false), true, false);

        assert!(out.is_empty());
        assert!(side.is_empty());
    }

    #[test]
    fn test_binary_renders_again() {
        let matrix = single_match();
        let (out, _) = render(&matrix, &output_args(Some(OutputType::Binary), false), false, false);

        let loaded: AlignmentMatrix<i32> = load_matrix(&out[..]).unwrap();
        assert_eq!(loaded, matrix);

        let (table, _) = render(&loaded, &output_args(None, false), true, false);
        assert_eq!(String::from_utf8(table).unwrap(), SINGLE_MATCH_TABLE);
    }
}
