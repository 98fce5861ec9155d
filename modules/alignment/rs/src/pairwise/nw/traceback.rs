use eyre::{eyre, Result};

use crate::pairwise::alignment::{Alignment, Op};
use crate::pairwise::sequence::GAP;
use crate::{Alignable, Score};

use super::matrix::Matrix;
use super::trace::Trace;

/// Reconstruct the optimal alignment by walking the recorded moves from the bottom-right cell
/// back to the origin.
///
/// `seq1` and `seq2` must be the padded sequences the matrix was filled with.
pub fn reconstruct<S, A1, A2>(matrix: &Matrix<S>, seq1: &A1, seq2: &A2) -> Result<Alignment<S>>
where
    S: Score,
    A1: Alignable<Symbol = u8> + ?Sized,
    A2: Alignable<Symbol = u8> + ?Sized,
{
    if seq1.len() != matrix.rows() || seq2.len() != matrix.cols() {
        return Err(eyre!(
            "Sequences of lengths {} and {} don't match the {}x{} alignment matrix",
            seq1.len(),
            seq2.len(),
            matrix.rows(),
            matrix.cols()
        ));
    }

    let (mut i, mut k) = (matrix.rows() - 1, matrix.cols() - 1);
    let capacity = i + k;
    let (mut line1, mut matches, mut line2) = (
        Vec::with_capacity(capacity),
        Vec::with_capacity(capacity),
        Vec::with_capacity(capacity),
    );
    let mut ops = Vec::with_capacity(capacity);

    // Columns are collected backwards and reversed at the end
    while i > 0 || k > 0 {
        match matrix.trace(i, k) {
            Some(Trace::Diagonal) => {
                let (s1, s2) = (*seq1.at(i), *seq2.at(k));
                line1.push(s1);
                line2.push(s2);
                if s1.eq_ignore_ascii_case(&s2) {
                    matches.push(b'|');
                    ops.push(Op::Match);
                } else {
                    matches.push(b' ');
                    ops.push(Op::Mismatch);
                }
                i -= 1;
                k -= 1;
            }
            Some(Trace::Up) => {
                line1.push(*seq1.at(i));
                matches.push(b' ');
                line2.push(GAP);
                ops.push(Op::GapSecond);
                i -= 1;
            }
            Some(Trace::Left) => {
                line1.push(GAP);
                matches.push(b' ');
                line2.push(*seq2.at(k));
                ops.push(Op::GapFirst);
                k -= 1;
            }
            Some(Trace::Origin) | None => {
                return Err(eyre!("Broken traceback at the cell ({}, {})", i, k));
            }
        }
    }
    log::trace!("Traceback finished after {} steps", ops.len());

    line1.reverse();
    matches.reverse();
    line2.reverse();
    ops.reverse();

    Ok(Alignment::from_columns(
        matrix.score(),
        &ops,
        line1,
        matches,
        line2,
    ))
}
