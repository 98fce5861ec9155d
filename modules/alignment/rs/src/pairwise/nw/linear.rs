use eyre::Result;

use crate::pairwise::scoring::{symbols, Scheme};
use crate::pairwise::sequence;
use crate::{Alignable, Score};

use super::recurrence::Recurrence;

/// Optimal global alignment score without the traceback.
///
/// Only two rows of the score matrix are kept in memory, so the memory footprint is linear in the
/// length of the second sequence. The result is always equal to `Matrix::fill(..)?.score()`.
pub fn score_only<A1, A2, S, Sym>(seq1: &A1, seq2: &A2, scheme: &Scheme<Sym>) -> Result<S>
where
    A1: Alignable<Symbol = u8> + ?Sized,
    A2: Alignable<Symbol = u8> + ?Sized,
    S: Score,
    Sym: symbols::Scorer<Score = S>,
{
    sequence::ensure_padded(seq1, seq2)?;

    let recurrence = Recurrence::new(seq1, seq2, scheme);
    let (rows, cols) = (recurrence.rows(), recurrence.cols());
    log::debug!("Scoring {}x{} alignment in linear memory", rows, cols);

    let mut previous = vec![S::zero(); cols];
    let mut current = vec![S::zero(); cols];
    for i in 0..rows {
        for k in 0..cols {
            let (score, _) = recurrence.cell(i, k, |r, c| {
                if r == i {
                    current[c]
                } else {
                    previous[c]
                }
            });
            current[k] = score;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    // After the last swap the final row is in `previous`
    let score = previous[cols - 1];
    log::debug!("Optimal global alignment score: {}", score);
    Ok(score)
}
