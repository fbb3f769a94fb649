//! Sensitivity grid over financial score × one ESG dimension.
//!
//! Both axes are full linear sweeps over `[0, 100]`, independent of the
//! company's current financial score and of the swept ESG score. The ESG
//! scores that are not swept are held at the company's values, so the grid is a
//! 2-D slice through the score surface at the current point.
//!
//! Rows are evaluated in parallel. Each cell depends only on its own
//! `(row, col)` samples and the ordered `collect` places row `i` at index `i`,
//! so the result is identical to a sequential row-major evaluation.

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{CompanyScores, SensitivityAxis, SensitivityGrid, WeightSet};
use crate::math::{lin_space, truncated_label};
use crate::scoring::{credit_score, esg_blend};

/// Lower end of both swept axes.
pub const SWEEP_MIN: f64 = 0.0;
/// Upper end of both swept axes.
pub const SWEEP_MAX: f64 = 100.0;

/// The `(E, S, G)` triple used for a row whose swept value is `y`.
pub fn effective_esg(axis: SensitivityAxis, held: &CompanyScores, y: f64) -> (f64, f64, f64) {
    match axis {
        SensitivityAxis::E => (y, held.s, held.g),
        SensitivityAxis::S => (held.e, y, held.g),
        SensitivityAxis::G => (held.e, held.s, y),
        SensitivityAxis::Joint => (y, y, y),
    }
}

/// Build the `resolution × resolution` sensitivity grid.
///
/// `held.financial` is not used: the financial score is always swept along the
/// columns.
pub fn build_sensitivity_grid(
    held: &CompanyScores,
    weights: &WeightSet,
    axis: SensitivityAxis,
    resolution: usize,
) -> SensitivityGrid {
    let row_samples = lin_space(SWEEP_MIN, SWEEP_MAX, resolution);
    let col_samples = lin_space(SWEEP_MIN, SWEEP_MAX, resolution);

    let w = &weights.esg;
    let w_financial = weights.financial.financial();
    let w_esg = weights.financial.esg();

    let values: Vec<Vec<f64>> = row_samples
        .par_iter()
        .map(|&y| {
            let (e, s, g) = effective_esg(axis, held, y);
            let esg = esg_blend(e, s, g, w.alpha, w.beta, w.gamma);
            col_samples
                .iter()
                .map(|&f| credit_score(f, esg, w_financial, w_esg))
                .collect()
        })
        .collect();

    debug!(
        axis = ?axis,
        resolution,
        cells = resolution.saturating_mul(resolution),
        "built sensitivity grid"
    );

    SensitivityGrid {
        axis,
        resolution,
        row_labels: row_samples.iter().map(|&v| truncated_label(v)).collect(),
        col_labels: col_samples.iter().map(|&v| truncated_label(v)).collect(),
        row_samples,
        col_samples,
        values,
    }
}
