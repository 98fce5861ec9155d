use std::marker::PhantomData;

use impl_tools::autoimpl;

use crate::pairwise::scoring::Score;

/// Scoring policy for a pair of aligned symbols.
///
/// Implementations must be pure and total: the same pair always yields the same score, regardless
/// of where the symbols are located in the sequences. Scores can be negative.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>)]
pub trait Scorer {
    type Score: Score;

    fn score(&self, s1: &u8, s2: &u8) -> Self::Score;
}

/// Case-sensitive identity scoring.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Equality<S: Score> {
    pub equal: S,
    pub different: S,
}

impl<S: Score> Scorer for Equality<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, a: &u8, b: &u8) -> Self::Score {
        if a == b { self.equal } else { self.different }
    }
}

impl<S: Score> Equality<S> {
    pub fn new(equal: S, different: S) -> Self {
        Self { equal, different }
    }
}

/// Identity scoring under ASCII case folding, e.g. `a` and `A` are the same symbol.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct CaseInsensitive<S: Score> {
    pub equal: S,
    pub different: S,
}

impl<S: Score> Scorer for CaseInsensitive<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, a: &u8, b: &u8) -> Self::Score {
        if a.eq_ignore_ascii_case(b) {
            self.equal
        } else {
            self.different
        }
    }
}

impl<S: Score> CaseInsensitive<S> {
    pub fn new(equal: S, different: S) -> Self {
        Self { equal, different }
    }
}

impl<S: Score> Default for CaseInsensitive<S> {
    /// Match = 1, mismatch = 0
    fn default() -> Self {
        Self::new(S::one(), S::zero())
    }
}

/// Scoring policy backed by an arbitrary function, e.g. a substitution matrix lookup.
#[derive(Copy, Clone)]
pub struct FnScorer<S: Score, F: Fn(&u8, &u8) -> S> {
    func: F,
    _phantom: PhantomData<S>,
}

impl<S: Score, F: Fn(&u8, &u8) -> S> Scorer for FnScorer<S, F> {
    type Score = S;

    #[inline(always)]
    fn score(&self, a: &u8, b: &u8) -> Self::Score {
        (self.func)(a, b)
    }
}

pub fn from_fn<S: Score, F: Fn(&u8, &u8) -> S>(func: F) -> FnScorer<S, F> {
    FnScorer {
        func,
        _phantom: Default::default(),
    }
}
