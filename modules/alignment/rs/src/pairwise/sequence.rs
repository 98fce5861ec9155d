//! Sequences are aligned in a "padded" form: a synthetic sentinel symbol is placed at position 0
//! and stands for "before the sequence starts". Row 0 and column 0 of the DP matrix correspond to
//! the sentinel, so the base case needs no special handling.

use eyre::{eyre, Result};

use crate::Alignable;

/// Leading symbol of every padded sequence.
pub const SENTINEL: u8 = b'.';

/// Gap symbol in rendered alignments.
pub const GAP: u8 = b'_';

/// What to do when one of the raw sequences is empty.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum EmptyPolicy {
    /// Both sequences collapse to the bare sentinel: the score is zero and the alignment is empty.
    #[default]
    Collapse,
    /// The non-empty sequence is aligned against a run of (edge) gaps.
    GapRun,
}

/// Returns true if the sequence starts with the sentinel.
pub fn is_padded<A: Alignable<Symbol = u8> + ?Sized>(seq: &A) -> bool {
    !seq.is_empty() && *seq.at(0) == SENTINEL
}

/// Fails unless both sequences start with the sentinel.
pub fn ensure_padded<A1, A2>(seq1: &A1, seq2: &A2) -> Result<()>
where
    A1: Alignable<Symbol = u8> + ?Sized,
    A2: Alignable<Symbol = u8> + ?Sized,
{
    match (is_padded(seq1), is_padded(seq2)) {
        (true, true) => Ok(()),
        (false, true) => Err(eyre!(
            "The first sequence is not padded: it must start with the '{}' sentinel",
            SENTINEL as char
        )),
        (true, false) => Err(eyre!(
            "The second sequence is not padded: it must start with the '{}' sentinel",
            SENTINEL as char
        )),
        (false, false) => Err(eyre!(
            "Neither sequence is padded: both must start with the '{}' sentinel",
            SENTINEL as char
        )),
    }
}

/// Prepends the sentinel unless the sequence already starts with it.
pub fn pad(raw: &[u8]) -> Vec<u8> {
    if raw.first() == Some(&SENTINEL) {
        return raw.to_vec();
    }
    let mut padded = Vec::with_capacity(raw.len() + 1);
    padded.push(SENTINEL);
    padded.extend_from_slice(raw);
    padded
}

/// Pads a pair of raw sequences, resolving empty inputs according to the `policy`.
pub fn normalize(seq1: &[u8], seq2: &[u8], policy: EmptyPolicy) -> (Vec<u8>, Vec<u8>) {
    if policy == EmptyPolicy::Collapse && (seq1.is_empty() || seq2.is_empty()) {
        if !seq1.is_empty() || !seq2.is_empty() {
            log::warn!(
                "One of the sequences is empty (lengths: {} and {}), both are collapsed to the sentinel",
                seq1.len(),
                seq2.len()
            );
        }
        return (vec![SENTINEL], vec![SENTINEL]);
    }
    (pad(seq1), pad(seq2))
}
