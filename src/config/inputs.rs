//! Raw scoring inputs, as a user would enter them.
//!
//! `ScoringInputs` mirrors the input widgets of an interactive scoring page:
//! four scores, the financial weight, and the E/S/G weights under a chosen
//! scheme. It is resolved into a [`ScoringConfig`] once all layers (defaults,
//! profile, CLI flags) have been applied.

use crate::domain::{
    CompanyScores, DEFAULT_RESOLUTION, EsgWeights, FinancialWeight, ScoringConfig, SensitivityAxis,
    WeightScheme, WeightSet,
};
use crate::error::AppError;

/// Smallest resolution the host accepts for a sweep.
pub const MIN_RESOLUTION: usize = 2;
/// Largest resolution the host accepts for a sweep.
pub const MAX_RESOLUTION: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringInputs {
    pub financial: f64,
    pub e: f64,
    pub s: f64,
    pub g: f64,
    pub w_financial: f64,
    pub scheme: WeightScheme,
    pub alpha: f64,
    pub beta: f64,
    /// Only read under [`WeightScheme::Independent`].
    pub gamma: f64,
    pub axis: SensitivityAxis,
    pub resolution: usize,
}

impl Default for ScoringInputs {
    fn default() -> Self {
        Self {
            financial: 80.0,
            e: 80.0,
            s: 80.0,
            g: 80.0,
            w_financial: 0.7,
            scheme: WeightScheme::Derived,
            alpha: 0.33,
            beta: 0.33,
            gamma: 0.34,
            axis: SensitivityAxis::E,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl ScoringInputs {
    /// Check the ranges an input form would enforce.
    ///
    /// The scoring core accepts any finite value; these bounds exist so the
    /// host never feeds it something a user could not have entered.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, v) in [
            ("financial", self.financial),
            ("e", self.e),
            ("s", self.s),
            ("g", self.g),
        ] {
            check_range(name, v, 0.0, 100.0)?;
        }
        for (name, v) in [
            ("w-financial", self.w_financial),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            check_range(name, v, 0.0, 1.0)?;
        }
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(AppError::usage(format!(
                "Resolution must be within [{MIN_RESOLUTION}, {MAX_RESOLUTION}] (got {}).",
                self.resolution
            )));
        }
        Ok(())
    }

    pub fn scores(&self) -> CompanyScores {
        CompanyScores::new(self.financial, self.e, self.s, self.g)
    }

    pub fn weights(&self) -> WeightSet {
        WeightSet {
            financial: FinancialWeight::new(self.w_financial),
            esg: EsgWeights::from_scheme(self.scheme, self.alpha, self.beta, self.gamma),
        }
    }

    /// Validate and resolve into a pipeline configuration.
    pub fn to_config(&self) -> Result<ScoringConfig, AppError> {
        self.validate()?;
        Ok(ScoringConfig {
            scores: self.scores(),
            weights: self.weights(),
            axis: self.axis,
            resolution: self.resolution,
        })
    }
}

fn check_range(name: &str, v: f64, min: f64, max: f64) -> Result<(), AppError> {
    if v.is_finite() && (min..=max).contains(&v) {
        Ok(())
    } else {
        Err(AppError::usage(format!(
            "Invalid {name}: {v} (must be within [{min}, {max}])."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve() {
        let config = ScoringInputs::default().to_config().unwrap();
        assert_eq!(config.resolution, 20);
        assert_eq!(config.weights.esg.scheme, WeightScheme::Derived);
        assert!((config.weights.esg.gamma - 0.34).abs() < 1e-12);
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        let inputs = ScoringInputs {
            e: 120.0,
            ..ScoringInputs::default()
        };
        let err = inputs.to_config().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("Invalid e"));

        let inputs = ScoringInputs {
            resolution: 1,
            ..ScoringInputs::default()
        };
        assert!(inputs.validate().is_err());

        let inputs = ScoringInputs {
            resolution: usize::MAX,
            ..ScoringInputs::default()
        };
        let err = inputs.to_config().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().starts_with("Resolution must be within [2, 100]"));

        let inputs = ScoringInputs {
            resolution: MAX_RESOLUTION,
            ..ScoringInputs::default()
        };
        assert!(inputs.validate().is_ok());

        let inputs = ScoringInputs {
            w_financial: f64::NAN,
            ..ScoringInputs::default()
        };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn gamma_only_used_when_independent() {
        let mut inputs = ScoringInputs {
            alpha: 0.5,
            beta: 0.5,
            gamma: 0.5,
            ..ScoringInputs::default()
        };
        assert_eq!(inputs.weights().esg.gamma, 0.0);

        inputs.scheme = WeightScheme::Independent;
        assert_eq!(inputs.weights().esg.gamma, 0.5);
    }
}
