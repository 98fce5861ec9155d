//! Human-readable dumps for debugging small alignments.

use std::fmt::Write;

use itertools::Itertools;

use crate::{Alignable, Score};

use super::matrix::Matrix;

/// Padded sequences longer than this are never dumped.
pub const MAX_DUMP_ROWS: usize = 30;
pub const MAX_DUMP_COLS: usize = 20;

/// Dump the score matrix as a table: the header lists the symbols of the second sequence,
/// each row starts with the symbol of the first sequence.
///
/// Returns `None` when the matrix is too large to be readable or when the (padded) sequences
/// don't match its dimensions.
pub fn matrix<S, A1, A2>(matrix: &Matrix<S>, seq1: &A1, seq2: &A2) -> Option<String>
where
    S: Score,
    A1: Alignable<Symbol = u8> + ?Sized,
    A2: Alignable<Symbol = u8> + ?Sized,
{
    if seq1.len() > MAX_DUMP_ROWS || seq2.len() > MAX_DUMP_COLS {
        return None;
    }
    if seq1.len() != matrix.rows() || seq2.len() != matrix.cols() {
        return None;
    }

    let mut dump = String::new();
    let header = (0..seq2.len())
        .map(|k| format!(" {} ", *seq2.at(k) as char))
        .join("");
    writeln!(dump, "   {}", header).ok()?;

    for i in 0..seq1.len() {
        write!(dump, "{} ", *seq1.at(i) as char).ok()?;
        for k in 0..seq2.len() {
            write!(dump, "{:>3}", matrix.at(i, k)?).ok()?;
        }
        writeln!(dump).ok()?;
    }
    Some(dump)
}
