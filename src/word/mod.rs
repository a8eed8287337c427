//! Secret word preparation: per-position guess sets and the initial mask.

pub mod decompose;
pub mod mask;

pub use decompose::{decompose, GuessSet};
pub use mask::build_mask;
