//! Credit scoring: aggregation, weight handling, and rating classification.
//!
//! All functions here are pure; they take every input explicitly and never
//! fail.

pub mod aggregate;
pub mod rating;
pub mod weights;

pub use aggregate::*;
pub use rating::*;
pub use weights::*;
