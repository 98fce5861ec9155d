pub use nwalign_core_rs::alignment::Alignable;
pub use nwalign_core_rs::num::Score;

pub mod pairwise;
