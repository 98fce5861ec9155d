use crate::Score;

/// The move that produced the best score of a DP cell.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Trace {
    /// The origin cell (0, 0) has no predecessor
    #[default]
    Origin,
    /// Match/mismatch: both sequences advance
    Diagonal,
    /// Gap in the second sequence: only the first sequence advances
    Up,
    /// Gap in the first sequence: only the second sequence advances
    Left,
}

impl Trace {
    /// Pick the best among the available candidate moves.
    /// Earlier candidates win ties: diagonal, then up, then left.
    /// Without any candidate (the origin) the result is a zero score.
    #[inline(always)]
    pub(crate) fn best<S: Score>(diagonal: Option<S>, up: Option<S>, left: Option<S>) -> (S, Trace) {
        let mut best: Option<(S, Trace)> = None;
        for (candidate, trace) in [
            (diagonal, Trace::Diagonal),
            (up, Trace::Up),
            (left, Trace::Left),
        ] {
            let Some(score) = candidate else { continue };
            match best {
                Some((current, _)) if current >= score => {}
                _ => best = Some((score, trace)),
            }
        }
        best.unwrap_or((S::zero(), Trace::Origin))
    }
}
