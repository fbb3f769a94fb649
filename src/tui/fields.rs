//! Adjustable input fields ("sliders") of the TUI input panel.

use crate::config::{MAX_RESOLUTION, MIN_RESOLUTION, ScoringInputs};
use crate::domain::WeightScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Financial,
    E,
    S,
    G,
    WFinancial,
    Scheme,
    Alpha,
    Beta,
    Gamma,
    Axis,
    Resolution,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Financial,
        Field::E,
        Field::S,
        Field::G,
        Field::WFinancial,
        Field::Scheme,
        Field::Alpha,
        Field::Beta,
        Field::Gamma,
        Field::Axis,
        Field::Resolution,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Financial => "Financial score",
            Field::E => "E score",
            Field::S => "S score",
            Field::G => "G score",
            Field::WFinancial => "Financial w1",
            Field::Scheme => "Weight scheme",
            Field::Alpha => "E weight α",
            Field::Beta => "S weight β",
            Field::Gamma => "G weight γ",
            Field::Axis => "Heatmap axis",
            Field::Resolution => "Resolution",
        }
    }

    /// Text shown next to the label. `derived_gamma` is the γ actually in use.
    pub fn display_value(self, inputs: &ScoringInputs, derived_gamma: Option<f64>) -> String {
        match self {
            Field::Financial => format!("{:.0}", inputs.financial),
            Field::E => format!("{:.0}", inputs.e),
            Field::S => format!("{:.0}", inputs.s),
            Field::G => format!("{:.0}", inputs.g),
            Field::WFinancial => format!("{:.2}", inputs.w_financial),
            Field::Scheme => match inputs.scheme {
                WeightScheme::Derived => "derived".to_string(),
                WeightScheme::Independent => "independent".to_string(),
            },
            Field::Alpha => format!("{:.2}", inputs.alpha),
            Field::Beta => format!("{:.2}", inputs.beta),
            Field::Gamma => match inputs.scheme {
                WeightScheme::Derived => {
                    format!("{:.2} (1-α-β)", derived_gamma.unwrap_or(1.0 - inputs.alpha - inputs.beta))
                }
                WeightScheme::Independent => format!("{:.2}", inputs.gamma),
            },
            Field::Axis => inputs.axis.display_name().to_string(),
            Field::Resolution => inputs.resolution.to_string(),
        }
    }

    /// Move the field by `steps` increments.
    ///
    /// Returns `false` when the field cannot be edited (γ under the derived
    /// scheme).
    pub fn adjust(self, inputs: &mut ScoringInputs, steps: i32) -> bool {
        let derived = inputs.scheme == WeightScheme::Derived;
        match self {
            Field::Financial => inputs.financial = step_score(inputs.financial, steps),
            Field::E => inputs.e = step_score(inputs.e, steps),
            Field::S => inputs.s = step_score(inputs.s, steps),
            Field::G => inputs.g = step_score(inputs.g, steps),
            Field::WFinancial => inputs.w_financial = step_weight(inputs.w_financial, steps, 1.0),
            Field::Scheme => {
                inputs.scheme = match inputs.scheme {
                    WeightScheme::Derived => WeightScheme::Independent,
                    WeightScheme::Independent => WeightScheme::Derived,
                };
            }
            Field::Alpha => {
                inputs.alpha = step_weight(inputs.alpha, steps, 1.0);
                if derived {
                    inputs.beta = inputs.beta.min(beta_cap(inputs.alpha));
                }
            }
            Field::Beta => {
                let cap = if derived { beta_cap(inputs.alpha) } else { 1.0 };
                inputs.beta = step_weight(inputs.beta, steps, cap);
            }
            Field::Gamma => {
                if derived {
                    return false;
                }
                inputs.gamma = step_weight(inputs.gamma, steps, 1.0);
            }
            Field::Axis => {
                inputs.axis = if steps >= 0 { inputs.axis.next() } else { inputs.axis.prev() };
            }
            Field::Resolution => {
                let next = inputs.resolution as i64 + i64::from(steps);
                inputs.resolution = next.clamp(MIN_RESOLUTION as i64, MAX_RESOLUTION as i64) as usize;
            }
        }
        true
    }
}

fn step_score(v: f64, steps: i32) -> f64 {
    (v + f64::from(steps)).round().clamp(0.0, 100.0)
}

/// Weights move in hundredths and stay on that grid.
fn step_weight(v: f64, steps: i32, max: f64) -> f64 {
    let next = ((v * 100.0).round() + f64::from(steps)) / 100.0;
    next.clamp(0.0, max)
}

fn beta_cap(alpha: f64) -> f64 {
    ((1.0 - alpha) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SensitivityAxis;

    #[test]
    fn scores_clamp_to_range() {
        let mut inputs = ScoringInputs::default();
        Field::E.adjust(&mut inputs, 50);
        assert_eq!(inputs.e, 100.0);
        Field::E.adjust(&mut inputs, -500);
        assert_eq!(inputs.e, 0.0);
    }

    #[test]
    fn derived_beta_is_capped_by_alpha() {
        let mut inputs = ScoringInputs::default();
        Field::Alpha.adjust(&mut inputs, 47);
        assert_eq!(inputs.alpha, 0.8);
        assert_eq!(inputs.beta, 0.2);

        Field::Beta.adjust(&mut inputs, 10);
        assert_eq!(inputs.beta, 0.2);

        assert!(!Field::Gamma.adjust(&mut inputs, 1));
        assert_eq!(Field::Gamma.display_value(&inputs, Some(0.0)), "0.00 (1-α-β)");
    }

    #[test]
    fn independent_weights_move_freely() {
        let mut inputs = ScoringInputs {
            scheme: WeightScheme::Independent,
            ..ScoringInputs::default()
        };
        assert!(Field::Gamma.adjust(&mut inputs, 16));
        assert_eq!(inputs.gamma, 0.5);
        Field::Beta.adjust(&mut inputs, 80);
        assert_eq!(inputs.beta, 1.0);
    }

    #[test]
    fn axis_and_resolution_cycle() {
        let mut inputs = ScoringInputs::default();
        Field::Axis.adjust(&mut inputs, -1);
        assert_eq!(inputs.axis, SensitivityAxis::Joint);
        Field::Resolution.adjust(&mut inputs, -100);
        assert_eq!(inputs.resolution, 2);
        Field::Resolution.adjust(&mut inputs, 1000);
        assert_eq!(inputs.resolution, 100);
    }
}
