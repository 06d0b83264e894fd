pub mod alignment;
pub mod builder;
pub mod config;
pub mod direction;
pub mod matrix;
pub mod scoring;
pub mod traceback;

pub use builder::{build, AlignmentMatrixBuilder};
pub use config::AlignmentInput;
pub use direction::{Direction, DirectionSet};
pub use matrix::{AlignmentMatrix, DirectionGrid, Grid, ScoreMatrix};
