use nwalign_core_rs::num::PrimUInt;

/// `Op` represents a single column of a global alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Gap in the first sequence, only the second sequence advances (v)
    GapFirst,
    /// Gap in the second sequence, only the first sequence advances (^)
    GapSecond,
    /// Symbols are identical up to the letter case (=)
    Match,
    /// Symbols are different (X)
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation is represented by a diagonal movement in the alignment matrix.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch)
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Advances the given sequence positions by `len` columns of the operation.
    pub fn apply<Len, Seq1Idx, Seq2Idx>(&self, seq1: &mut Seq1Idx, seq2: &mut Seq2Idx, len: Len)
    where
        Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
        Seq1Idx: PrimUInt,
        Seq2Idx: PrimUInt,
    {
        match self {
            Op::GapFirst => *seq2 = *seq2 + len.into(),
            Op::GapSecond => *seq1 = *seq1 + len.into(),
            Op::Match | Op::Mismatch => {
                *seq1 = *seq1 + len.into();
                *seq2 = *seq2 + len.into();
            }
        };
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    /// Returns an error if the character does not represent a valid operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
