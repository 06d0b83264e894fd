/// One column of a pairwise alignment. The first element is the position in the first
/// sequence, the second element the position in the second sequence.
///
/// In case of an insertion or deletion, one of the elements is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair(pub(crate) Option<usize>, pub(crate) Option<usize>);

impl AlignedPair {
    pub fn new(seq1_pos: Option<usize>, seq2_pos: Option<usize>) -> Self {
        AlignedPair(seq1_pos, seq2_pos)
    }

    #[inline(always)]
    pub fn seq1_pos(&self) -> Option<usize> {
        self.0
    }

    #[inline(always)]
    pub fn seq2_pos(&self) -> Option<usize> {
        self.1
    }

    pub fn is_aligned(&self) -> bool {
        self.0.is_some() && self.1.is_some()
    }

    pub fn is_indel(&self) -> bool {
        !self.is_aligned()
    }
}

pub type Alignment = Vec<AlignedPair>;
