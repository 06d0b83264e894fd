pub mod gap_linear;

use std::fmt::{Debug, Display};

use num::{PrimInt, Signed};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use gap_linear::GapLinear;

/// Integer types usable as alignment scores
///
/// Scores may be negative (mismatches and gaps are usually penalties), so only signed
/// primitive integers qualify.
pub trait ScoreType: PrimInt + Signed + Default + Debug + Display + Serialize + DeserializeOwned { }

impl<T> ScoreType for T
where
    T: PrimInt + Signed + Default + Debug + Display + Serialize + DeserializeOwned
{ }

/// A scoring scheme for global pairwise alignment
pub trait AlignmentScoring: Copy {
    type Score: ScoreType;

    /// Score for aligning symbol `a` against symbol `b`
    fn substitution<T: PartialEq + ?Sized>(&self, a: &T, b: &T) -> Self::Score;

    /// Score added for every symbol aligned against a gap
    fn gap(&self) -> Self::Score;
}
