//! Reporting utilities: score report, rating legend, and grid tables.

pub mod format;

pub use format::*;
