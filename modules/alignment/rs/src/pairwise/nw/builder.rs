use crate::pairwise::scoring::gaps::Penalties;
use crate::pairwise::scoring::symbols::{self, CaseInsensitive};
use crate::pairwise::scoring::Scheme;
use crate::pairwise::sequence::EmptyPolicy;
use crate::Score;

use super::engine::{Engine, Strategy};

/// Configures an alignment [`Engine`].
///
/// Defaults: case-insensitive identity scoring (match = 1, mismatch = 0), zero gap penalties,
/// bottom-up fill, and empty inputs collapsed to an empty alignment.
#[derive(Clone, Debug)]
pub struct EngineBuilder<Sym: symbols::Scorer> {
    symbols: Sym,
    gaps: Penalties<Sym::Score>,
    strategy: Strategy,
    on_empty: EmptyPolicy,
}

impl<S: Score> Default for EngineBuilder<CaseInsensitive<S>> {
    fn default() -> Self {
        Self::new(CaseInsensitive::default())
    }
}

impl<Sym: symbols::Scorer> EngineBuilder<Sym> {
    pub fn new(symbols: Sym) -> Self {
        Self {
            symbols,
            gaps: Penalties::default(),
            strategy: Strategy::default(),
            on_empty: EmptyPolicy::default(),
        }
    }

    /// Replace the scoring policy for symbol pairs.
    pub fn symbols(mut self, symbols: Sym) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn penalties(mut self, gaps: Penalties<Sym::Score>) -> Self {
        self.gaps = gaps;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn on_empty(mut self, policy: EmptyPolicy) -> Self {
        self.on_empty = policy;
        self
    }

    pub fn build(self) -> Engine<Sym> {
        log::debug!(
            "Building alignment engine: gaps {:?}, strategy {:?}, empty inputs {:?}",
            self.gaps,
            self.strategy,
            self.on_empty
        );
        Engine::new(
            Scheme::new(self.symbols, self.gaps),
            self.strategy,
            self.on_empty,
        )
    }
}
