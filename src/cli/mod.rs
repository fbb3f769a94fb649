//! Command-line parsing for the ESG credit scorer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the scoring code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::profile::overlay;
use crate::config::{ScoringInputs, ScoringProfile};
use crate::domain::{SensitivityAxis, WeightScheme};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "esgc", version, about = "ESG multi-factor credit risk scorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a company, print the report and a sensitivity heatmap, optionally export.
    Score(ScoreArgs),
    /// Print the sensitivity grid only (useful for scripting).
    Grid(ScoreArgs),
    /// Plot a previously exported grid JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// Flags seed the initial inputs; everything can then be adjusted live.
    Tui(ScoreArgs),
}

/// Scoring inputs and output options.
///
/// Input flags are optional so that a scoring profile can supply them; anything
/// given here overrides the profile.
#[derive(Debug, Parser, Clone, Default)]
pub struct ScoreArgs {
    /// Scoring profile (TOML). Defaults to `$ESGC_CONFIG` when set.
    #[arg(short = 'c', long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Financial score (0-100).
    #[arg(short = 'f', long)]
    pub financial: Option<f64>,

    /// Environmental score (0-100).
    #[arg(short = 'e', long = "e")]
    pub e: Option<f64>,

    /// Social score (0-100).
    #[arg(short = 's', long = "s")]
    pub s: Option<f64>,

    /// Governance score (0-100).
    #[arg(short = 'g', long = "g")]
    pub g: Option<f64>,

    /// Weight of the financial score (0-1); the ESG weight is `1 - w`.
    #[arg(short = 'w', long = "w-financial")]
    pub w_financial: Option<f64>,

    /// How E/S/G weights are entered.
    #[arg(long, value_enum)]
    pub scheme: Option<WeightScheme>,

    /// Environmental weight α (0-1).
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Social weight β (0-1). Capped at `1 - α` under the derived scheme.
    #[arg(long)]
    pub beta: Option<f64>,

    /// Governance weight γ (0-1). Ignored under the derived scheme.
    #[arg(long)]
    pub gamma: Option<f64>,

    /// ESG dimension swept along the heatmap rows.
    #[arg(short = 'a', long, value_enum)]
    pub axis: Option<SensitivityAxis>,

    /// Samples per heatmap axis.
    #[arg(short = 'n', long)]
    pub resolution: Option<usize>,

    /// Disable the terminal heatmap.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the sensitivity grid to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export scores, weights, and grid to JSON.
    #[arg(long = "export-grid")]
    pub export_grid: Option<PathBuf>,
}

impl ScoreArgs {
    /// Overlay explicitly given flags onto `inputs`.
    pub fn apply_to(&self, inputs: &mut ScoringInputs) {
        overlay(&mut inputs.financial, self.financial);
        overlay(&mut inputs.e, self.e);
        overlay(&mut inputs.s, self.s);
        overlay(&mut inputs.g, self.g);
        overlay(&mut inputs.w_financial, self.w_financial);
        overlay(&mut inputs.scheme, self.scheme);
        overlay(&mut inputs.alpha, self.alpha);
        overlay(&mut inputs.beta, self.beta);
        overlay(&mut inputs.gamma, self.gamma);
        overlay(&mut inputs.axis, self.axis);
        overlay(&mut inputs.resolution, self.resolution);
    }

    /// Defaults, then the profile (if any), then explicit flags.
    pub fn layered_inputs(&self, profile: Option<&ScoringProfile>) -> ScoringInputs {
        let mut inputs = ScoringInputs::default();
        if let Some(profile) = profile {
            profile.apply_to(&mut inputs);
        }
        self.apply_to(&mut inputs);
        inputs
    }
}

/// Options for plotting a saved grid.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Grid JSON file produced by `esgc score --export-grid`.
    #[arg(long, value_name = "JSON")]
    pub grid: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
