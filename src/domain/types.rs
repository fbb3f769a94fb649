//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring
//! - exported to JSON/CSV
//! - reloaded later for plotting

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Point-in-time scores for a single company.
///
/// Each score is expected in `[0, 100]`. The scoring functions do not enforce
/// this; out-of-range values simply propagate through the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompanyScores {
    pub financial: f64,
    pub e: f64,
    pub s: f64,
    pub g: f64,
}

impl CompanyScores {
    pub fn new(financial: f64, e: f64, s: f64, g: f64) -> Self {
        Self { financial, e, s, g }
    }

    /// The raw ESG triple `[E, S, G]` (radar-style display).
    pub fn radar(&self) -> [f64; 3] {
        [self.e, self.s, self.g]
    }
}

impl Default for CompanyScores {
    fn default() -> Self {
        Self::new(80.0, 80.0, 80.0, 80.0)
    }
}

/// Split between the financial score and the ESG blend.
///
/// Only `w_financial` is stored; `w_esg = 1 - w_financial`, so the pair always
/// sums to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialWeight {
    w_financial: f64,
}

impl FinancialWeight {
    pub fn new(w_financial: f64) -> Self {
        Self { w_financial }
    }

    pub fn financial(self) -> f64 {
        self.w_financial
    }

    pub fn esg(self) -> f64 {
        1.0 - self.w_financial
    }
}

impl Default for FinancialWeight {
    fn default() -> Self {
        Self::new(0.7)
    }
}

/// How the E/S/G weights are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeightScheme {
    /// `alpha` and `beta` are inputs, `beta` is capped at `1 - alpha` and
    /// `gamma = 1 - alpha - beta`. The weights always sum to one.
    #[default]
    Derived,
    /// `alpha`, `beta`, `gamma` are independent inputs; a sum other than one
    /// raises a [`WeightAdvisory`] but scoring still proceeds.
    Independent,
}

/// E/S/G blend weights (`alpha`, `beta`, `gamma`).
///
/// Construct through [`EsgWeights::derived`] or [`EsgWeights::independent`]
/// (see `scoring::weights`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EsgWeights {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub scheme: WeightScheme,
}

impl EsgWeights {
    pub fn sum(&self) -> f64 {
        self.alpha + self.beta + self.gamma
    }
}

impl Default for EsgWeights {
    fn default() -> Self {
        Self {
            alpha: 0.33,
            beta: 0.33,
            gamma: 0.34,
            scheme: WeightScheme::Derived,
        }
    }
}

/// Full weight configuration for one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightSet {
    pub financial: FinancialWeight,
    pub esg: EsgWeights,
}

/// Non-fatal notice that the E/S/G weights do not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightAdvisory {
    pub sum: f64,
}

impl std::fmt::Display for WeightAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The sum of α+β+γ must be 1 (currently {:.2})", self.sum)
    }
}

/// Letter rating, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "BBB")]
    Bbb,
    #[serde(rename = "BB")]
    Bb,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "CCC or below")]
    CccOrBelow,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Rating::Aaa,
        Rating::Aa,
        Rating::A,
        Rating::Bbb,
        Rating::Bb,
        Rating::B,
        Rating::CccOrBelow,
    ];

    /// Display label (S&P style).
    pub fn label(self) -> &'static str {
        match self {
            Rating::Aaa => "AAA",
            Rating::Aa => "AA",
            Rating::A => "A",
            Rating::Bbb => "BBB",
            Rating::Bb => "BB",
            Rating::B => "B",
            Rating::CccOrBelow => "CCC or below",
        }
    }

    /// Inclusive lower score bound of the bucket (`None` for the bottom bucket).
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            Rating::Aaa => Some(90.0),
            Rating::Aa => Some(80.0),
            Rating::A => Some(70.0),
            Rating::Bbb => Some(60.0),
            Rating::Bb => Some(50.0),
            Rating::B => Some(40.0),
            Rating::CccOrBelow => None,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which ESG sub-score varies along the grid rows.
///
/// The sub-scores that are not swept stay at the company's current values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityAxis {
    /// Environmental score.
    #[default]
    E,
    /// Social score.
    S,
    /// Governance score.
    G,
    /// E, S and G all set to the row value.
    Joint,
}

impl SensitivityAxis {
    pub const ALL: [SensitivityAxis; 4] = [
        SensitivityAxis::E,
        SensitivityAxis::S,
        SensitivityAxis::G,
        SensitivityAxis::Joint,
    ];

    /// Human-readable label for axis titles.
    pub fn display_name(self) -> &'static str {
        match self {
            SensitivityAxis::E => "E Score",
            SensitivityAxis::S => "S Score",
            SensitivityAxis::G => "G Score",
            SensitivityAxis::Joint => "Same as ESG Weight",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SensitivityAxis::E => SensitivityAxis::S,
            SensitivityAxis::S => SensitivityAxis::G,
            SensitivityAxis::G => SensitivityAxis::Joint,
            SensitivityAxis::Joint => SensitivityAxis::E,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SensitivityAxis::E => SensitivityAxis::Joint,
            SensitivityAxis::S => SensitivityAxis::E,
            SensitivityAxis::G => SensitivityAxis::S,
            SensitivityAxis::Joint => SensitivityAxis::G,
        }
    }
}

/// Credit scores over a 2-D sweep.
///
/// `values[i][j]` is the score at ESG value `row_samples[i]` and financial
/// score `col_samples[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrid {
    pub axis: SensitivityAxis,
    pub resolution: usize,
    pub row_samples: Vec<f64>,
    pub col_samples: Vec<f64>,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl SensitivityGrid {
    pub fn rows(&self) -> usize {
        self.values.len()
    }

    pub fn cols(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Smallest and largest finite cell value.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.values.iter().flatten().copied().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

/// Default sweep resolution.
pub const DEFAULT_RESOLUTION: usize = 20;

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from the scoring profile and CLI flags (plus defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub scores: CompanyScores,
    pub weights: WeightSet,
    pub axis: SensitivityAxis,
    pub resolution: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            scores: CompanyScores::default(),
            weights: WeightSet::default(),
            axis: SensitivityAxis::default(),
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// A saved grid file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFile {
    pub tool: String,
    pub generated: chrono::DateTime<chrono::Utc>,
    pub scores: CompanyScores,
    pub weights: WeightSet,
    pub credit_score: f64,
    pub rating: Rating,
    pub grid: SensitivityGrid,
}
