//! Needleman-Wunsch global alignment.
//!
//! Both sequences are padded with a sentinel (see [`crate::pairwise::sequence`]), so the DP matrix
//! has exactly (n+1) × (m+1) cells. Cell (i, k) holds the best score of aligning the first i
//! symbols of the first sequence against the first k symbols of the second one. Each cell is the
//! maximum over three moves:
//! - diagonal: `score(i-1, k-1) + policy(A[i], B[k])`
//! - up (gap in the second sequence): `score(i-1, k) + gap`, charged as an edge gap in the
//!   first/last column
//! - left (gap in the first sequence): `score(i, k-1) + gap`, charged as an edge gap in the
//!   first/last row
//!
//! Ties are broken in the order diagonal > up > left, so every matrix has exactly one traceback.

pub use builder::EngineBuilder;
pub use engine::{Engine, Strategy};
pub use linear::score_only;
pub use matrix::Matrix;
pub use trace::Trace;

mod builder;
mod engine;
mod linear;
mod matrix;
mod memoized;
mod recurrence;
pub mod render;
mod trace;
pub mod traceback;
