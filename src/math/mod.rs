//! Mathematical utilities: sample spacing and axis labels.

pub mod spacing;

pub use spacing::*;
