use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// The various output formats supported by nwmatrix
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// Tab-separated "<score> <arrows>" cells, one line per matrix row
    Table,

    /// The full matrix (sequences, scoring, scores and directions) as JSON
    Json,

    /// Binary matrix file, which can be rendered again with `nwmatrix view`
    Binary,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliSubcommand {
    /// Build the Needleman-Wunsch score matrix for two sequences
    Build(BuildArgs),

    /// Render a previously saved binary matrix
    View(ViewArgs),

    /// Print matrix statistics
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// First sequence, spanning the matrix columns. If neither sequences nor a FASTA file
    /// are given, sequences and scores are asked for interactively.
    #[arg(requires = "seq2")]
    #[clap(help_heading = "Inputs")]
    pub seq1: Option<String>,

    /// Second sequence, spanning the matrix rows
    #[clap(help_heading = "Inputs")]
    pub seq2: Option<String>,

    /// Read the two sequences from the first two records of this FASTA file (optionally gzipped)
    #[arg(short = 'f', long, conflicts_with_all = ["seq1", "seq2"])]
    #[clap(help_heading = "Inputs")]
    pub fasta: Option<PathBuf>,

    /// Score for two identical symbols [default: 1]
    #[arg(short = 'a', long = "match", allow_negative_numbers = true)]
    #[clap(help_heading = "Scoring")]
    pub match_score: Option<i32>,

    /// Score for two different symbols [default: -1]
    #[arg(short = 'b', long = "mismatch", allow_negative_numbers = true)]
    #[clap(help_heading = "Scoring")]
    pub mismatch_score: Option<i32>,

    /// Score for aligning a symbol against a gap [default: -2]
    #[arg(short = 'g', long = "gap", allow_negative_numbers = true)]
    #[clap(help_heading = "Scoring")]
    pub gap_penalty: Option<i32>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long)]
    #[clap(help_heading = "Outputs")]
    pub output_type: Option<OutputType>,

    /// Draw directions with ASCII characters instead of arrows
    #[arg(long)]
    #[clap(help_heading = "Outputs")]
    pub ascii: bool,

    /// Label rows and columns with the sequence symbols
    #[arg(long)]
    #[clap(help_heading = "Outputs")]
    pub labels: bool,

    /// Also print one optimal alignment, traced back through the direction grid
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub traceback: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Binary matrix file written by `nwmatrix build -O binary`
    pub matrix: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Binary matrix file written by `nwmatrix build -O binary`
    pub matrix: PathBuf,
}
