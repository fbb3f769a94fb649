//! Shared scoring pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! inputs -> ESG blend -> credit score -> rating -> weight advisory -> sensitivity grid
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use tracing::debug;

use crate::domain::{CompanyScores, Rating, ScoringConfig, SensitivityGrid, WeightAdvisory, WeightSet};
use crate::scoring::{classify, score_company, weight_advisory};
use crate::sensitivity::build_sensitivity_grid;

/// All computed outputs of a single scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOutput {
    pub scores: CompanyScores,
    pub weights: WeightSet,
    pub esg_blend: f64,
    pub credit_score: f64,
    pub rating: Rating,
    /// Present only when independently entered E/S/G weights do not sum to one.
    pub advisory: Option<WeightAdvisory>,
    pub grid: SensitivityGrid,
    /// Raw `[E, S, G]` inputs, passed through for radar-style display.
    pub radar: [f64; 3],
}

/// Execute the full scoring pipeline and return the computed outputs.
pub fn run_scoring(config: &ScoringConfig) -> ScoringOutput {
    let scores = config.scores;
    let weights = config.weights;

    let (esg_blend, credit_score) = score_company(&scores, &weights);
    let rating = classify(credit_score);
    let advisory = weight_advisory(&weights.esg);
    let grid = build_sensitivity_grid(&scores, &weights, config.axis, config.resolution);

    debug!(
        esg_blend,
        credit_score,
        rating = rating.label(),
        advisory = advisory.is_some(),
        "scored company"
    );

    ScoringOutput {
        scores,
        weights,
        esg_blend,
        credit_score,
        rating,
        advisory,
        grid,
        radar: scores.radar(),
    }
}
