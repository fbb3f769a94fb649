//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - scoring inputs (`CompanyScores`, `WeightSet`, `WeightScheme`)
//! - scoring outputs (`Rating`, `WeightAdvisory`, `SensitivityGrid`)
//! - run configuration and the portable grid file (`ScoringConfig`, `GridFile`)

pub mod types;

pub use types::*;
