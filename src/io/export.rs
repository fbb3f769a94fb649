//! Export the sensitivity grid to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts:
//! the header holds the financial-score labels, each line starts with the ESG
//! row label followed by that row's credit scores.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::SensitivityGrid;
use crate::error::AppError;

/// Write the grid to a CSV file.
pub fn write_grid_csv(path: &Path, grid: &SensitivityGrid) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut w = BufWriter::new(file);

    write_grid_csv_to(&mut w, grid)
        .map_err(|e| AppError::usage(format!("Failed to write export CSV: {e}")))?;
    w.flush()
        .map_err(|e| AppError::usage(format!("Failed to write export CSV: {e}")))?;

    info!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "exported grid CSV");
    Ok(())
}

/// Write the grid as CSV to any writer.
pub fn write_grid_csv_to<W: Write>(w: &mut W, grid: &SensitivityGrid) -> std::io::Result<()> {
    write!(w, "{}", axis_column(grid))?;
    for label in &grid.col_labels {
        write!(w, ",{label}")?;
    }
    writeln!(w)?;

    for (label, row) in grid.row_labels.iter().zip(&grid.values) {
        write!(w, "{label}")?;
        for v in row {
            write!(w, ",{v:.6}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn axis_column(grid: &SensitivityGrid) -> String {
    format!("{:?}", grid.axis).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompanyScores, EsgWeights, FinancialWeight, SensitivityAxis, WeightSet};
    use crate::sensitivity::build_sensitivity_grid;

    fn small_grid(axis: SensitivityAxis) -> SensitivityGrid {
        let weights = WeightSet {
            financial: FinancialWeight::new(0.5),
            esg: EsgWeights::derived(1.0, 0.0),
        };
        build_sensitivity_grid(&CompanyScores::new(0.0, 0.0, 0.0, 0.0), &weights, axis, 2)
    }

    #[test]
    fn csv_layout() {
        let mut buf = Vec::new();
        write_grid_csv_to(&mut buf, &small_grid(SensitivityAxis::Joint)).unwrap();
        let txt = String::from_utf8(buf).unwrap();
        assert_eq!(
            txt,
            "joint,0,100\n0,0.000000,50.000000\n100,50.000000,100.000000\n"
        );
    }

    #[test]
    fn writes_file() {
        let path = std::env::temp_dir().join(format!("esgc_export_{}.csv", std::process::id()));
        write_grid_csv(&path, &small_grid(SensitivityAxis::E)).unwrap();
        let txt = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(txt.starts_with("e,0,100\n"));
        assert_eq!(txt.lines().count(), 3);
    }

    #[test]
    fn missing_directory_is_usage_error() {
        let path = std::env::temp_dir().join("esgc_missing_dir").join("nested").join("grid.csv");
        let err = write_grid_csv(&path, &small_grid(SensitivityAxis::E)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
