use eyre::Result;

use crate::pairwise::scoring::{symbols, Scheme};
use crate::pairwise::sequence;
use crate::{Alignable, Score};

use super::recurrence::Recurrence;
use super::trace::Trace;

/// Fully computed score and traceback matrices of a global alignment.
///
/// Rows correspond to the padded first sequence, columns to the padded second sequence.
/// Both matrices are stored row-major in flat vectors.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Matrix<S: Score> {
    rows: usize,
    cols: usize,
    scores: Vec<S>,
    traces: Vec<Trace>,
}

impl<S: Score> Matrix<S> {
    pub(crate) fn from_parts(rows: usize, cols: usize, scores: Vec<S>, traces: Vec<Trace>) -> Self {
        debug_assert_eq!(scores.len(), rows * cols);
        debug_assert_eq!(traces.len(), rows * cols);
        Self {
            rows,
            cols,
            scores,
            traces,
        }
    }

    /// Compute the matrix bottom-up, row by row.
    ///
    /// Both sequences must be padded, i.e. start with the [`sequence::SENTINEL`]; otherwise
    /// the call fails before any computation.
    pub fn fill<A1, A2, Sym>(seq1: &A1, seq2: &A2, scheme: &Scheme<Sym>) -> Result<Self>
    where
        A1: Alignable<Symbol = u8> + ?Sized,
        A2: Alignable<Symbol = u8> + ?Sized,
        Sym: symbols::Scorer<Score = S>,
    {
        sequence::ensure_padded(seq1, seq2)?;

        let recurrence = Recurrence::new(seq1, seq2, scheme);
        let (rows, cols) = (recurrence.rows(), recurrence.cols());
        log::debug!("Filling {}x{} alignment matrix bottom-up", rows, cols);

        let mut scores = vec![S::zero(); rows * cols];
        let mut traces = vec![Trace::Origin; rows * cols];
        for i in 0..rows {
            for k in 0..cols {
                let (score, trace) = recurrence.cell(i, k, |r, c| scores[r * cols + c]);
                scores[i * cols + k] = score;
                traces[i * cols + k] = trace;
            }
        }

        let matrix = Self::from_parts(rows, cols, scores, traces);
        log::debug!("Optimal global alignment score: {}", matrix.score());
        Ok(matrix)
    }

    /// Number of rows: the length of the padded first sequence.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns: the length of the padded second sequence.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The optimal global alignment score, i.e. the score of the bottom-right cell.
    pub fn score(&self) -> S {
        self.scores[self.rows * self.cols - 1]
    }

    /// Score of the cell (i, k), if it exists.
    pub fn at(&self, i: usize, k: usize) -> Option<S> {
        self.index(i, k).map(|ind| self.scores[ind])
    }

    /// Recorded move of the cell (i, k), if it exists.
    pub fn trace(&self, i: usize, k: usize) -> Option<Trace> {
        self.index(i, k).map(|ind| self.traces[ind])
    }

    #[inline(always)]
    fn index(&self, i: usize, k: usize) -> Option<usize> {
        (i < self.rows && k < self.cols).then(|| i * self.cols + k)
    }
}
