//! Run configuration.
//!
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults (`ScoringInputs::default`)
//! 2. a TOML scoring profile (`--config` or `ESGC_CONFIG`, optionally from `.env`)
//! 3. explicit CLI flags

pub mod inputs;
pub mod profile;

pub use inputs::*;
pub use profile::*;
