//! Input/output helpers.
//!
//! - sensitivity grid CSV export (`export`)
//! - grid JSON read/write (`grid`)

pub mod export;
pub mod grid;

pub use export::*;
pub use grid::*;
