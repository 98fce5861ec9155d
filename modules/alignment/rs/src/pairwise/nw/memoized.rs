use eyre::Result;

use crate::pairwise::scoring::{symbols, Scheme};
use crate::pairwise::sequence;
use crate::{Alignable, Score};

use super::matrix::Matrix;
use super::recurrence::Recurrence;
use super::trace::Trace;

/// State of a cell in the top-down evaluation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Memo<S: Score> {
    Pending,
    Done(S, Trace),
}

impl<S: Score> Matrix<S> {
    /// Compute the matrix top-down, starting from the bottom-right cell and resolving only the
    /// cells it depends on. The result is identical to [`Matrix::fill`].
    ///
    /// Cells are resolved with an explicit work stack, so long sequences do not overflow the
    /// call stack.
    pub fn fill_memoized<A1, A2, Sym>(seq1: &A1, seq2: &A2, scheme: &Scheme<Sym>) -> Result<Self>
    where
        A1: Alignable<Symbol = u8> + ?Sized,
        A2: Alignable<Symbol = u8> + ?Sized,
        Sym: symbols::Scorer<Score = S>,
    {
        sequence::ensure_padded(seq1, seq2)?;

        let recurrence = Recurrence::new(seq1, seq2, scheme);
        let (rows, cols) = (recurrence.rows(), recurrence.cols());
        log::debug!("Filling {}x{} alignment matrix top-down", rows, cols);

        let mut memo = vec![Memo::Pending; rows * cols];
        let mut stack = vec![(rows - 1, cols - 1)];
        while let Some(&(i, k)) = stack.last() {
            if memo[i * cols + k] != Memo::Pending {
                stack.pop();
                continue;
            }

            // Resolve all predecessors before the cell itself
            let mut ready = true;
            for (r, c) in recurrence.predecessors(i, k).into_iter().flatten() {
                if memo[r * cols + c] == Memo::Pending {
                    stack.push((r, c));
                    ready = false;
                }
            }
            if !ready {
                continue;
            }

            let (score, trace) = recurrence.cell(i, k, |r, c| match memo[r * cols + c] {
                Memo::Done(score, _) => score,
                Memo::Pending => unreachable!("predecessors are resolved before the cell"),
            });
            memo[i * cols + k] = Memo::Done(score, trace);
            stack.pop();
        }

        // Every cell is reachable from the bottom-right corner
        let (scores, traces) = memo
            .into_iter()
            .map(|cell| match cell {
                Memo::Done(score, trace) => (score, trace),
                Memo::Pending => (S::zero(), Trace::Origin),
            })
            .unzip();

        let matrix = Self::from_parts(rows, cols, scores, traces);
        log::debug!("Optimal global alignment score: {}", matrix.score());
        Ok(matrix)
    }
}
