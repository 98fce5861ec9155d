use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

pub use crate::Score;

pub mod gaps;
pub mod symbols;

/// Complete scoring scheme of a global alignment: symbol pairs are scored by the `symbols`
/// policy, gap moves are charged according to the `gaps` penalties.
#[derive(Clone, Debug, Default, Getters, Dissolve, Constructor)]
pub struct Scheme<S: symbols::Scorer> {
    symbols: S,
    gaps: gaps::Penalties<S::Score>,
}

impl<S: symbols::Scorer> Scheme<S> {
    /// Score of aligning symbol `s1` against symbol `s2`.
    #[inline(always)]
    pub fn pair(&self, s1: &u8, s2: &u8) -> S::Score {
        self.symbols.score(s1, s2)
    }
}

pub fn compose<S: symbols::Scorer>(symbols: S, gaps: gaps::Penalties<S::Score>) -> Scheme<S> {
    Scheme::new(symbols, gaps)
}
