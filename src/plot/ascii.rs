//! ASCII heatmap for terminal output.
//!
//! This is intentionally "dumb" (fixed-size character grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Cells are shaded with a ten-step ramp from low (` `) to high (`@`) score,
//! scaled to the grid's own min/max. Grid row 0 (ESG value 0) is the top line,
//! financial score increases left to right.

use crate::domain::{GridFile, SensitivityGrid};

/// Shade ramp, lowest score first.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Width of the row-label gutter (excluding the ` |` separator).
const LABEL_WIDTH: usize = 4;

/// Render a heatmap for an in-memory grid.
pub fn render_ascii_heatmap(grid: &SensitivityGrid, width: usize, height: usize) -> String {
    let mut out = String::new();

    let Some((lo, hi)) = grid.value_range() else {
        out.push_str(&format!("Heatmap: rows={} | (empty grid)\n", grid.axis.display_name()));
        return out;
    };

    out.push_str(&format!(
        "Heatmap: rows={} [{}..{}] | cols=Financial Score [{}..{}] | score=[{lo:.2}, {hi:.2}]\n",
        grid.axis.display_name(),
        first(&grid.row_labels),
        last(&grid.row_labels),
        first(&grid.col_labels),
        last(&grid.col_labels),
    ));

    let width = width.max(2);
    let height = height.max(2);
    let rows = grid.rows();
    let cols = grid.cols();

    for r in 0..height {
        let i = (r * rows / height).min(rows - 1);
        let label = if r == 0 {
            first(&grid.row_labels)
        } else if r == height - 1 {
            last(&grid.row_labels)
        } else {
            ""
        };
        out.push_str(&format!("{label:>pad$} |", pad = LABEL_WIDTH));

        let row = &grid.values[i];
        for x in 0..width {
            let j = (x * cols / width).min(cols.saturating_sub(1));
            out.push(row.get(j).map_or('?', |&v| shade(v, lo, hi)));
        }
        out.push('\n');
    }

    out.push_str(&" ".repeat(LABEL_WIDTH + 1));
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push('\n');

    let left = first(&grid.col_labels);
    let right = last(&grid.col_labels);
    let pad = width.saturating_sub(left.len() + right.len()).max(1);
    out.push_str(&" ".repeat(LABEL_WIDTH + 2));
    out.push_str(left);
    out.push_str(&" ".repeat(pad));
    out.push_str(right);
    out.push('\n');

    out
}

/// Render a heatmap from a saved grid JSON file.
pub fn render_ascii_heatmap_from_file(file: &GridFile, width: usize, height: usize) -> String {
    let mut out = format!(
        "Saved by {} at {} | credit score {:.2} ({})\n",
        file.tool,
        file.generated.format("%Y-%m-%d %H:%M:%S UTC"),
        file.credit_score,
        file.rating,
    );
    out.push_str(&render_ascii_heatmap(&file.grid, width, height));
    out
}

fn shade(v: f64, lo: f64, hi: f64) -> char {
    if !v.is_finite() {
        return '?';
    }
    let span = hi - lo;
    let u = if span > 0.0 { ((v - lo) / span).clamp(0.0, 1.0) } else { 1.0 };
    let idx = (u * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[idx.min(RAMP.len() - 1)] as char
}

fn first(labels: &[String]) -> &str {
    labels.first().map_or("", String::as_str)
}

fn last(labels: &[String]) -> &str {
    labels.last().map_or("", String::as_str)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::{CompanyScores, EsgWeights, FinancialWeight, Rating, SensitivityAxis, WeightSet};
    use crate::sensitivity::build_sensitivity_grid;

    fn two_by_two() -> SensitivityGrid {
        let weights = WeightSet {
            financial: FinancialWeight::new(0.5),
            esg: EsgWeights::derived(1.0, 0.0),
        };
        build_sensitivity_grid(
            &CompanyScores::new(0.0, 0.0, 0.0, 0.0),
            &weights,
            SensitivityAxis::E,
            2,
        )
    }

    #[test]
    fn heatmap_golden_snapshot_small() {
        let txt = render_ascii_heatmap(&two_by_two(), 4, 2);
        let expected = concat!(
            "Heatmap: rows=E Score [0..100] | cols=Financial Score [0..100] | score=[0.00, 100.00]\n",
            "   0 |  ++\n",
            " 100 |++@@\n",
            "     +----\n",
            "      0 100\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn flat_grid_uses_top_shade() {
        let weights = WeightSet {
            financial: FinancialWeight::new(1.0),
            esg: EsgWeights::derived(1.0, 0.0),
        };
        let mut grid = build_sensitivity_grid(&CompanyScores::default(), &weights, SensitivityAxis::E, 3);
        for row in &mut grid.values {
            row.fill(42.0);
        }
        let txt = render_ascii_heatmap(&grid, 3, 3);
        assert!(txt.lines().nth(1).unwrap().ends_with("@@@"));
    }

    #[test]
    fn empty_grid_renders_header_only() {
        let weights = WeightSet::default();
        let grid = build_sensitivity_grid(&CompanyScores::default(), &weights, SensitivityAxis::G, 0);
        assert_eq!(render_ascii_heatmap(&grid, 10, 5), "Heatmap: rows=G Score | (empty grid)\n");
    }

    #[test]
    fn saved_file_gets_provenance_header() {
        let file = GridFile {
            tool: "esgc".to_string(),
            generated: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            scores: CompanyScores::new(75.0, 80.0, 70.0, 5.0),
            weights: WeightSet::default(),
            credit_score: 67.86,
            rating: Rating::Bbb,
            grid: two_by_two(),
        };
        let txt = render_ascii_heatmap_from_file(&file, 4, 2);
        let expected = concat!(
            "Saved by esgc at 2024-03-01 09:30:00 UTC | credit score 67.86 (BBB)\n",
            "Heatmap: rows=E Score [0..100] | cols=Financial Score [0..100] | score=[0.00, 100.00]\n",
            "   0 |  ++\n",
            " 100 |++@@\n",
            "     +----\n",
            "      0 100\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn short_rows_render_as_unknown() {
        let mut grid = two_by_two();
        grid.values[1].truncate(1);
        let txt = render_ascii_heatmap(&grid, 4, 2);
        assert_eq!(txt.lines().nth(2), Some(" 100 |@@??"));
    }
}
