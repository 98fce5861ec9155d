pub use alignment::{Alignment, Op, Step};

pub mod alignment;
pub mod nw;
pub mod scoring;
pub mod sequence;
