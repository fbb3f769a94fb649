//! Weighted aggregation of sub-scores into a credit score.
//!
//! Both formulas are plain weighted sums:
//!
//! - `esg = α·E + β·S + γ·G`
//! - `credit = w_financial·financial + w_esg·esg`
//!
//! No clamping happens here. With scores in `[0, 100]` and weights summing to
//! one the results stay in `[0, 100]`; otherwise they are still well-defined.

use crate::domain::{CompanyScores, WeightSet};

/// Blend the three ESG sub-scores.
pub fn esg_blend(e: f64, s: f64, g: f64, alpha: f64, beta: f64, gamma: f64) -> f64 {
    alpha * e + beta * s + gamma * g
}

/// Combine the financial score with an ESG blend.
pub fn credit_score(financial: f64, esg_blend_value: f64, w_financial: f64, w_esg: f64) -> f64 {
    w_financial * financial + w_esg * esg_blend_value
}

/// Score a company: returns `(esg_blend, credit_score)`.
pub fn score_company(scores: &CompanyScores, weights: &WeightSet) -> (f64, f64) {
    let w = &weights.esg;
    let esg = esg_blend(scores.e, scores.s, scores.g, w.alpha, w.beta, w.gamma);
    let credit = credit_score(
        scores.financial,
        esg,
        weights.financial.financial(),
        weights.financial.esg(),
    );
    (esg, credit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use crate::domain::{EsgWeights, FinancialWeight, WeightScheme};

    fn weights(w1: f64, alpha: f64, beta: f64, gamma: f64) -> WeightSet {
        WeightSet {
            financial: FinancialWeight::new(w1),
            esg: EsgWeights {
                alpha,
                beta,
                gamma,
                scheme: WeightScheme::Independent,
            },
        }
    }

    #[test]
    fn uniform_inputs_score_80_aa() {
        let scores = CompanyScores::new(80.0, 80.0, 80.0, 80.0);
        let (esg, credit) = score_company(&scores, &weights(0.7, 0.33, 0.33, 0.34));
        assert_abs_diff_eq!(esg, 80.0, epsilon = 1e-9);
        assert_abs_diff_eq!(credit, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn weak_governance_drags_score_down() {
        let scores = CompanyScores::new(75.0, 80.0, 70.0, 5.0);
        let (esg, credit) = score_company(&scores, &weights(0.7, 0.33, 0.33, 0.34));
        assert_abs_diff_eq!(esg, 51.2, epsilon = 1e-9);
        assert_abs_diff_eq!(credit, 67.86, epsilon = 1e-9);
    }

    #[test]
    fn non_normalized_weights_still_compute() {
        let esg = esg_blend(100.0, 100.0, 100.0, 0.5, 0.5, 0.5);
        assert_abs_diff_eq!(esg, 150.0, epsilon = 1e-12);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let scores = CompanyScores::new(61.3, 12.5, 99.0, 47.25);
        let w = weights(0.42, 0.2, 0.5, 0.3);
        assert_eq!(score_company(&scores, &w), score_company(&scores, &w));
    }

    proptest! {
        #[test]
        fn credit_score_is_weighted_sum(
            f in 0.0..=100.0f64,
            esg in 0.0..=100.0f64,
            w1 in 0.0..=1.0f64,
        ) {
            let w2 = 1.0 - w1;
            let v = credit_score(f, esg, w1, w2);
            prop_assert!((v - (w1 * f + w2 * esg)).abs() < 1e-9);
            prop_assert!(v >= f.min(esg) - 1e-9 && v <= f.max(esg) + 1e-9);
        }

        #[test]
        fn esg_blend_is_convex(
            e in 0.0..=100.0f64,
            s in 0.0..=100.0f64,
            g in 0.0..=100.0f64,
            alpha in 0.0..=1.0f64,
            u in 0.0..=1.0f64,
        ) {
            let beta = (1.0 - alpha) * u;
            let gamma = 1.0 - alpha - beta;
            let v = esg_blend(e, s, g, alpha, beta, gamma);
            let lo = e.min(s).min(g);
            let hi = e.max(s).max(g);
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "{v} not in [{lo}, {hi}]");
        }
    }
}
