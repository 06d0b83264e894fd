pub mod fasta;
pub mod matrix;
pub mod table;

pub use matrix::{save_matrix, load_matrix, write_json, read_json};
