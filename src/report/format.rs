//! Formatted terminal output: score report and grid table.
//!
//! We keep formatting code in one place so:
//! - the scoring code stays clean and testable
//! - output changes are localized (snapshot tests below)

use crate::app::pipeline::ScoringOutput;
use crate::domain::{Rating, SensitivityGrid, WeightScheme};

/// Format the full score report (inputs, weights, result, advisory, radar values).
pub fn format_score_report(out: &ScoringOutput) -> String {
    let mut report = String::new();
    let w = &out.weights;

    report.push_str("=== esgc - ESG Multi-Factor Credit Score ===\n");
    report.push_str(&format!(
        "Scores: financial={:.2} | E={:.2} | S={:.2} | G={:.2}\n",
        out.scores.financial, out.scores.e, out.scores.s, out.scores.g
    ));
    report.push_str(&format!(
        "Weights: financial (w1)={:.2} | ESG (w2)={:.2}\n",
        w.financial.financial(),
        w.financial.esg()
    ));
    let scheme = match w.esg.scheme {
        WeightScheme::Derived => "derived γ",
        WeightScheme::Independent => "independent",
    };
    report.push_str(&format!(
        "ESG weights ({scheme}): α={:.2} β={:.2} γ={:.2}\n",
        w.esg.alpha, w.esg.beta, w.esg.gamma
    ));
    if let Some(advisory) = &out.advisory {
        report.push_str(&format!("warning: {advisory}\n"));
    }

    report.push_str("\nResult:\n");
    report.push_str(&format!("- ESG blend   : {:.2}\n", out.esg_blend));
    report.push_str(&format!("- Credit score: {:.2}\n", out.credit_score));
    report.push_str(&format!("- Rating      : {}\n", out.rating));

    report.push_str(&format!(
        "\nESG radar: Environmental={:.1} Social={:.1} Governance={:.1}\n",
        out.radar[0], out.radar[1], out.radar[2]
    ));

    report
}

/// One-line legend of rating buckets.
pub fn format_rating_legend() -> String {
    let parts: Vec<String> = Rating::ALL
        .iter()
        .map(|r| match r.lower_bound() {
            Some(lb) => format!("{}>={lb:.0}", r.label()),
            None => format!("{}<40", r.label()),
        })
        .collect();
    parts.join("  ")
}

/// Format the grid as a labelled table (rows = ESG axis, columns = financial score).
pub fn format_grid_table(grid: &SensitivityGrid) -> String {
    let mut out = String::new();
    let corner = format!("{}\\F", short_axis(grid));

    out.push_str(&format!("{corner:>6}"));
    for label in &grid.col_labels {
        out.push_str(&format!(" {label:>6}"));
    }
    out.push('\n');

    for (label, row) in grid.row_labels.iter().zip(&grid.values) {
        out.push_str(&format!("{label:>6}"));
        for v in row {
            out.push_str(&format!(" {v:>6.2}"));
        }
        out.push('\n');
    }

    out
}

fn short_axis(grid: &SensitivityGrid) -> &'static str {
    match grid.axis {
        crate::domain::SensitivityAxis::E => "E",
        crate::domain::SensitivityAxis::S => "S",
        crate::domain::SensitivityAxis::G => "G",
        crate::domain::SensitivityAxis::Joint => "ESG",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_scoring;
    use crate::domain::{
        CompanyScores, EsgWeights, FinancialWeight, ScoringConfig, SensitivityAxis, WeightSet,
    };

    fn output(esg: EsgWeights, resolution: usize) -> ScoringOutput {
        run_scoring(&ScoringConfig {
            scores: CompanyScores::new(75.0, 80.0, 70.0, 5.0),
            weights: WeightSet {
                financial: FinancialWeight::new(0.7),
                esg,
            },
            axis: SensitivityAxis::E,
            resolution,
        })
    }

    #[test]
    fn report_contains_result_lines() {
        let txt = format_score_report(&output(EsgWeights::independent(0.33, 0.33, 0.34), 3));
        assert!(txt.contains("- ESG blend   : 51.20\n"));
        assert!(txt.contains("- Credit score: 67.86\n"));
        assert!(txt.contains("- Rating      : BBB\n"));
        assert!(txt.contains("Weights: financial (w1)=0.70 | ESG (w2)=0.30\n"));
        assert!(!txt.contains("warning:"));
    }

    #[test]
    fn report_shows_advisory() {
        let txt = format_score_report(&output(EsgWeights::independent(0.5, 0.5, 0.5), 3));
        assert!(txt.contains("warning: The sum of α+β+γ must be 1 (currently 1.50)\n"));
    }

    #[test]
    fn legend_lists_all_buckets() {
        assert_eq!(
            format_rating_legend(),
            "AAA>=90  AA>=80  A>=70  BBB>=60  BB>=50  B>=40  CCC or below<40"
        );
    }

    #[test]
    fn grid_table_snapshot() {
        let out = run_scoring(&ScoringConfig {
            scores: CompanyScores::new(0.0, 0.0, 0.0, 0.0),
            weights: WeightSet {
                financial: FinancialWeight::new(0.5),
                esg: EsgWeights::derived(1.0, 0.0),
            },
            axis: SensitivityAxis::E,
            resolution: 2,
        });
        let expected = concat!(
            "   E\\F      0    100\n",
            "     0   0.00  50.00\n",
            "   100  50.00 100.00\n",
        );
        assert_eq!(format_grid_table(&out.grid), expected);
    }
}
