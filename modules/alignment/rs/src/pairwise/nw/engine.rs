use derive_getters::Getters;
use eyre::Result;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::{symbols, Scheme};
use crate::pairwise::sequence::{self, EmptyPolicy};

use super::linear;
use super::matrix::Matrix;
use super::traceback;

/// How the alignment matrix is computed.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Strategy {
    /// Row by row, starting from the origin
    #[default]
    BottomUp,
    /// Top-down with memoization, starting from the bottom-right cell
    Memoized,
}

/// Global alignment engine.
///
/// The engine holds only immutable configuration: every call builds, consumes, and drops its own
/// matrix. A single engine can be reused for any number of independent alignments.
#[derive(Clone, Debug, Getters)]
pub struct Engine<Sym: symbols::Scorer> {
    scheme: Scheme<Sym>,
    strategy: Strategy,
    on_empty: EmptyPolicy,
}

impl<Sym: symbols::Scorer> Engine<Sym> {
    pub(crate) fn new(scheme: Scheme<Sym>, strategy: Strategy, on_empty: EmptyPolicy) -> Self {
        Self {
            scheme,
            strategy,
            on_empty,
        }
    }

    /// Optimal global alignment score.
    /// The bottom-up strategy skips the traceback matrix and runs in linear memory.
    pub fn score(&self, seq1: impl AsRef<[u8]>, seq2: impl AsRef<[u8]>) -> Result<Sym::Score> {
        let (seq1, seq2) = sequence::normalize(seq1.as_ref(), seq2.as_ref(), self.on_empty);
        match self.strategy {
            Strategy::BottomUp => linear::score_only(&seq1, &seq2, &self.scheme),
            Strategy::Memoized => Ok(Matrix::fill_memoized(&seq1, &seq2, &self.scheme)?.score()),
        }
    }

    /// Fully computed alignment matrix of the (padded) sequences.
    pub fn matrix(
        &self,
        seq1: impl AsRef<[u8]>,
        seq2: impl AsRef<[u8]>,
    ) -> Result<Matrix<Sym::Score>> {
        let (seq1, seq2) = sequence::normalize(seq1.as_ref(), seq2.as_ref(), self.on_empty);
        self.fill(&seq1, &seq2)
    }

    /// Optimal global alignment together with its score.
    pub fn align(
        &self,
        seq1: impl AsRef<[u8]>,
        seq2: impl AsRef<[u8]>,
    ) -> Result<Alignment<Sym::Score>> {
        let (seq1, seq2) = sequence::normalize(seq1.as_ref(), seq2.as_ref(), self.on_empty);
        let matrix = self.fill(&seq1, &seq2)?;
        traceback::reconstruct(&matrix, &seq1, &seq2)
    }

    fn fill(&self, seq1: &[u8], seq2: &[u8]) -> Result<Matrix<Sym::Score>> {
        match self.strategy {
            Strategy::BottomUp => Matrix::fill(seq1, seq2, &self.scheme),
            Strategy::Memoized => Matrix::fill_memoized(seq1, seq2, &self.scheme),
        }
    }
}
