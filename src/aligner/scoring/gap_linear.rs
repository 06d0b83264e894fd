use serde::{Deserialize, Serialize};

use crate::aligner::scoring::{AlignmentScoring, ScoreType};

/// Match/mismatch scoring with a linear gap penalty
///
/// No constraint is placed on the signs of the scores, the recurrence maximizes whatever it
/// is given.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "S: ScoreType")]
pub struct GapLinear<S> {
    score_match: S,
    score_mismatch: S,
    score_gap: S,
}

impl<S: ScoreType> GapLinear<S> {
    pub fn new(score_match: S, score_mismatch: S, score_gap: S) -> Self {
        Self { score_match, score_mismatch, score_gap }
    }

    #[inline]
    pub fn match_score(&self) -> S {
        self.score_match
    }

    #[inline]
    pub fn mismatch_score(&self) -> S {
        self.score_mismatch
    }

    #[inline]
    pub fn gap_penalty(&self) -> S {
        self.score_gap
    }
}

impl<S: ScoreType> Default for GapLinear<S> {
    fn default() -> Self {
        Self::new(S::one(), -S::one(), -(S::one() + S::one()))
    }
}

impl<S: ScoreType> AlignmentScoring for GapLinear<S> {
    type Score = S;

    #[inline]
    fn substitution<T: PartialEq + ?Sized>(&self, a: &T, b: &T) -> S {
        if a == b {
            self.score_match
        } else {
            self.score_mismatch
        }
    }

    #[inline]
    fn gap(&self) -> S {
        self.score_gap
    }
}
