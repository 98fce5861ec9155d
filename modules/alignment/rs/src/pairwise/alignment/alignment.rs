use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};

use crate::Score;

use super::op::Op;
use super::step::Step;

/// A global alignment of two sequences.
///
/// The alignment is stored both as collapsed operations and as three rendered lines of equal
/// length: the first sequence with gaps, the match line (`|` for matches, ` ` otherwise), and the
/// second sequence with gaps.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    steps: Vec<Step<u32>>,
    seq1: Vec<u8>,
    matches: Vec<u8>,
    seq2: Vec<u8>,
}

impl<S: Score> Alignment<S> {
    /// Assemble an alignment from per-column operations and rendered lines.
    pub(crate) fn from_columns(
        score: S,
        ops: &[Op],
        seq1: Vec<u8>,
        matches: Vec<u8>,
        seq2: Vec<u8>,
    ) -> Self {
        debug_assert!(ops.len() == seq1.len() && seq1.len() == matches.len());
        debug_assert!(seq1.len() == seq2.len());

        let mut steps: Vec<_> = ops.iter().map(|op| Step::unit(*op)).collect();
        Step::collapse(&mut steps);
        Self {
            score,
            steps,
            seq1,
            matches,
            seq2,
        }
    }

    /// Checks if the alignment is empty, i.e. it has no columns.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.seq1.len()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Per-column operations, e.g. to walk the alignment path from the origin.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.steps
            .iter()
            .flat_map(|step| std::iter::repeat_n(*step.op(), *step.len() as usize))
    }

    /// The three rendered lines: first sequence, match line, second sequence.
    ///
    /// Symbols are single bytes, each rendered as one character (bytes above 0x7F map to the
    /// Latin-1 range), so all three lines keep one character per column.
    pub fn lines(&self) -> [String; 3] {
        [&self.seq1, &self.matches, &self.seq2]
            .map(|line| line.iter().map(|symbol| *symbol as char).collect())
    }
}

impl<S: Score> Display for Alignment<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [seq1, matches, seq2] = self.lines();
        write!(f, "{}\n{}\n{}", seq1, matches, seq2)
    }
}
