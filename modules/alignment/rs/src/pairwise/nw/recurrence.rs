use crate::pairwise::scoring::{symbols, Scheme};
use crate::Alignable;

use super::trace::Trace;

/// The Needleman-Wunsch recurrence for a fixed pair of padded sequences.
/// Fill strategies differ only in the order of evaluation and in where scores are kept.
pub(crate) struct Recurrence<'a, A1: ?Sized, A2: ?Sized, Sym: symbols::Scorer> {
    seq1: &'a A1,
    seq2: &'a A2,
    scheme: &'a Scheme<Sym>,
    last_row: usize,
    last_col: usize,
}

impl<'a, A1, A2, Sym> Recurrence<'a, A1, A2, Sym>
where
    A1: Alignable<Symbol = u8> + ?Sized,
    A2: Alignable<Symbol = u8> + ?Sized,
    Sym: symbols::Scorer,
{
    /// Both sequences must be padded (non-empty).
    pub fn new(seq1: &'a A1, seq2: &'a A2, scheme: &'a Scheme<Sym>) -> Self {
        debug_assert!(!seq1.is_empty() && !seq2.is_empty());
        Self {
            seq1,
            seq2,
            scheme,
            last_row: seq1.len() - 1,
            last_col: seq2.len() - 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.last_row + 1
    }

    pub fn cols(&self) -> usize {
        self.last_col + 1
    }

    /// Predecessors of the cell (i, k) in the order diagonal, up, left.
    #[inline(always)]
    pub fn predecessors(&self, i: usize, k: usize) -> [Option<(usize, usize)>; 3] {
        [
            (i > 0 && k > 0).then(|| (i - 1, k - 1)),
            (i > 0).then(|| (i - 1, k)),
            (k > 0).then(|| (i, k - 1)),
        ]
    }

    /// Best score and move for the cell (i, k). `score` must return the final score of any
    /// predecessor cell.
    #[inline(always)]
    pub fn cell(
        &self,
        i: usize,
        k: usize,
        score: impl Fn(usize, usize) -> Sym::Score,
    ) -> (Sym::Score, Trace) {
        let gaps = self.scheme.gaps();
        let [diagonal, up, left] = self.predecessors(i, k);

        let diagonal = diagonal
            .map(|(r, c)| score(r, c) + self.scheme.pair(self.seq1.at(i), self.seq2.at(k)));
        let up = up.map(|(r, c)| score(r, c) + gaps.up(k, self.last_col));
        let left = left.map(|(r, c)| score(r, c) + gaps.left(i, self.last_row));

        Trace::best(diagonal, up, left)
    }
}
