//! Scoring profiles (TOML).
//!
//! A profile stores a company's inputs so a run can be repeated without
//! retyping every flag. Every table and every key is optional:
//!
//! ```toml
//! [scores]
//! financial = 75.0
//! e = 80.0
//! s = 70.0
//! g = 5.0
//!
//! [weights]
//! financial = 0.7
//! scheme = "independent"
//! alpha = 0.33
//! beta = 0.33
//! gamma = 0.34
//!
//! [grid]
//! axis = "joint"
//! resolution = 20
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::config::ScoringInputs;
use crate::domain::{SensitivityAxis, WeightScheme};
use crate::error::AppError;

/// Environment variable naming a default profile path.
pub const PROFILE_ENV: &str = "ESGC_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringProfile {
    pub scores: ScoresSection,
    pub weights: WeightsSection,
    pub grid: GridSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoresSection {
    pub financial: Option<f64>,
    pub e: Option<f64>,
    pub s: Option<f64>,
    pub g: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightsSection {
    pub financial: Option<f64>,
    pub scheme: Option<WeightScheme>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSection {
    pub axis: Option<SensitivityAxis>,
    pub resolution: Option<usize>,
}

impl ScoringProfile {
    /// Parse a profile from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::usage(format!("Invalid scoring profile: {e}")))
    }

    /// Load a profile from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::usage(format!("Failed to read scoring profile '{}': {e}", path.display()))
        })?;
        let profile = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded scoring profile");
        Ok(profile)
    }

    /// Overlay every value present in the profile onto `inputs`.
    pub fn apply_to(&self, inputs: &mut ScoringInputs) {
        let s = &self.scores;
        overlay(&mut inputs.financial, s.financial);
        overlay(&mut inputs.e, s.e);
        overlay(&mut inputs.s, s.s);
        overlay(&mut inputs.g, s.g);

        let w = &self.weights;
        overlay(&mut inputs.w_financial, w.financial);
        overlay(&mut inputs.scheme, w.scheme);
        overlay(&mut inputs.alpha, w.alpha);
        overlay(&mut inputs.beta, w.beta);
        overlay(&mut inputs.gamma, w.gamma);

        overlay(&mut inputs.axis, self.grid.axis);
        overlay(&mut inputs.resolution, self.grid.resolution);
    }
}

/// Pick the profile path: an explicit `--config` wins over `ESGC_CONFIG`.
///
/// `.env` in the working directory is loaded first so the variable can live
/// there.
pub fn resolve_profile_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    dotenvy::dotenv().ok();
    std::env::var_os(PROFILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub(crate) fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_profile() {
        let profile = ScoringProfile::from_toml_str(
            r#"
            [scores]
            financial = 75.0
            e = 80.0
            s = 70.0
            g = 5.0

            [weights]
            financial = 0.7
            scheme = "independent"
            alpha = 0.5
            beta = 0.5
            gamma = 0.5

            [grid]
            axis = "joint"
            resolution = 12
            "#,
        )
        .unwrap();

        let mut inputs = ScoringInputs::default();
        profile.apply_to(&mut inputs);
        assert_eq!(inputs.financial, 75.0);
        assert_eq!(inputs.g, 5.0);
        assert_eq!(inputs.scheme, WeightScheme::Independent);
        assert_eq!(inputs.gamma, 0.5);
        assert_eq!(inputs.axis, SensitivityAxis::Joint);
        assert_eq!(inputs.resolution, 12);
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let profile = ScoringProfile::from_toml_str("[scores]\ne = 10.0\n").unwrap();
        let mut inputs = ScoringInputs::default();
        profile.apply_to(&mut inputs);
        assert_eq!(inputs.e, 10.0);
        assert_eq!(inputs.s, 80.0);
        assert_eq!(inputs.scheme, WeightScheme::Derived);
        assert_eq!(inputs.resolution, 20);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ScoringProfile::from_toml_str("[scores]\nesg = 10.0\n").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().starts_with("Invalid scoring profile"));
    }

    #[test]
    fn explicit_path_wins() {
        let p = Path::new("company.toml");
        assert_eq!(resolve_profile_path(Some(p)), Some(PathBuf::from("company.toml")));
    }
}
