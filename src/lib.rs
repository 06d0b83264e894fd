pub mod errors;
pub mod aligner;
pub mod io;
