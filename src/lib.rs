//! `esg-credit` library crate.
//!
//! The binary (`esgc`) is a thin wrapper around this library so that:
//!
//! - the scoring core is testable without spawning processes
//! - the core can be embedded in another front-end (it takes every input
//!   explicitly and returns every output as a value)
//!
//! Core: [`scoring`] (ESG blend, credit score, rating, weight schemes) and
//! [`sensitivity`] (the financial × ESG score grid). Everything else is host
//! plumbing for the CLI and TUI.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod scoring;
pub mod sensitivity;
pub mod tui;
