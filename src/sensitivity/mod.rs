//! Sensitivity analysis.
//!
//! Responsibilities:
//!
//! - derive the effective E/S/G triple for each swept row
//! - evaluate the credit score over the full financial × ESG grid (parallel)

pub mod grid;

pub use grid::*;
