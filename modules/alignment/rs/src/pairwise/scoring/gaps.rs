use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::pairwise::scoring::Score;

/// Linear gap penalties of a global alignment.
///
/// Gaps that hang off either end of the alignment (first/last row or column of the DP matrix)
/// are charged `edge`; all other gaps are charged `interior`. Both values are added to the score
/// as is, e.g. use negative numbers to penalize gaps.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default, Getters, Dissolve, Constructor)]
pub struct Penalties<S: Score> {
    interior: S,
    edge: S,
}

impl<S: Score> Penalties<S> {
    /// Same penalty for interior and edge gaps.
    pub fn uniform(penalty: S) -> Self {
        Self::new(penalty, penalty)
    }

    /// Penalty for a gap in the second sequence (a move that consumes only the first sequence)
    /// made in the column `col` of a matrix whose last column is `last_col`.
    #[inline(always)]
    pub fn up(&self, col: usize, last_col: usize) -> S {
        if col == 0 || col == last_col {
            self.edge
        } else {
            self.interior
        }
    }

    /// Penalty for a gap in the first sequence (a move that consumes only the second sequence)
    /// made in the row `row` of a matrix whose last row is `last_row`.
    #[inline(always)]
    pub fn left(&self, row: usize, last_row: usize) -> S {
        if row == 0 || row == last_row {
            self.edge
        } else {
            self.interior
        }
    }
}
