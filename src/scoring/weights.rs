//! E/S/G weight construction and the sum-to-one advisory.
//!
//! Two input schemes are supported:
//!
//! - `derived`: the caller supplies `α` and `β`; `β` is capped at `1 - α` and
//!   `γ = 1 - α - β`. The weights sum to one by construction.
//! - `independent`: the caller supplies all three. Nothing is rejected; a sum
//!   that is not close to one only yields a [`WeightAdvisory`].

use crate::domain::{EsgWeights, WeightAdvisory, WeightScheme};

/// Relative tolerance for the sum-to-one check.
const SUM_RTOL: f64 = 1e-5;
/// Absolute tolerance for the sum-to-one check.
const SUM_ATOL: f64 = 1e-8;

impl EsgWeights {
    /// Build weights where `γ` is derived from `α` and `β`.
    ///
    /// `α` is clamped to `[0, 1]` and `β` to `[0, 1 - α]`.
    pub fn derived(alpha: f64, beta: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let remaining = 1.0 - alpha;
        let beta = beta.clamp(0.0, remaining);
        Self {
            alpha,
            beta,
            gamma: remaining - beta,
            scheme: WeightScheme::Derived,
        }
    }

    /// Take all three weights as given.
    pub fn independent(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            scheme: WeightScheme::Independent,
        }
    }

    /// Build weights under `scheme`. `gamma` is ignored for [`WeightScheme::Derived`].
    pub fn from_scheme(scheme: WeightScheme, alpha: f64, beta: f64, gamma: f64) -> Self {
        match scheme {
            WeightScheme::Derived => Self::derived(alpha, beta),
            WeightScheme::Independent => Self::independent(alpha, beta, gamma),
        }
    }
}

/// Check the sum-to-one invariant.
///
/// Derived weights cannot violate it, so they never produce an advisory.
pub fn weight_advisory(weights: &EsgWeights) -> Option<WeightAdvisory> {
    match weights.scheme {
        WeightScheme::Derived => None,
        WeightScheme::Independent => {
            let sum = weights.sum();
            if is_close_to_one(sum) {
                None
            } else {
                Some(WeightAdvisory { sum })
            }
        }
    }
}

fn is_close_to_one(v: f64) -> bool {
    (v - 1.0).abs() <= SUM_ATOL + SUM_RTOL
}
