//! Read/write grid JSON files.
//!
//! Grid JSON is the "portable" representation of one scoring run:
//! - the inputs (scores and weights)
//! - the point result (credit score and rating)
//! - the full sensitivity grid with its axis samples and labels
//!
//! The schema is defined by `domain::GridFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::app::pipeline::ScoringOutput;
use crate::domain::{GridFile, SensitivityGrid};
use crate::error::AppError;

/// Tool name stamped into saved files.
pub const TOOL_NAME: &str = "esgc";

/// Build the file representation of a scoring run.
pub fn grid_file_from_output(out: &ScoringOutput) -> GridFile {
    GridFile {
        tool: TOOL_NAME.to_string(),
        generated: Utc::now(),
        scores: out.scores,
        weights: out.weights,
        credit_score: out.credit_score,
        rating: out.rating,
        grid: out.grid.clone(),
    }
}

/// Write a grid JSON file.
pub fn write_grid_json(path: &Path, out: &ScoringOutput) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create grid JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &grid_file_from_output(out))
        .map_err(|e| AppError::usage(format!("Failed to write grid JSON: {e}")))?;

    info!(path = %path.display(), "exported grid JSON");
    Ok(())
}

/// Read a grid JSON file.
pub fn read_grid_json(path: &Path) -> Result<GridFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open grid JSON '{}': {e}", path.display())))?;
    let grid: GridFile =
        serde_json::from_reader(file).map_err(|e| AppError::usage(format!("Invalid grid JSON: {e}")))?;
    check_grid_shape(&grid.grid).map_err(|e| AppError::usage(format!("Invalid grid JSON: {e}")))?;
    Ok(grid)
}

/// Rows must line up with the row samples and labels, and every row must
/// have one cell per column label.
fn check_grid_shape(grid: &SensitivityGrid) -> Result<(), String> {
    let rows = grid.values.len();
    if grid.row_samples.len() != rows || grid.row_labels.len() != rows {
        return Err(format!(
            "{rows} rows but {} row samples and {} row labels",
            grid.row_samples.len(),
            grid.row_labels.len()
        ));
    }
    let cols = grid.col_labels.len();
    if grid.col_samples.len() != cols {
        return Err(format!(
            "{cols} column labels but {} column samples",
            grid.col_samples.len()
        ));
    }
    if let Some((i, row)) = grid.values.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(format!("row {i} has {} cells, expected {cols}", row.len()));
    }
    Ok(())
}
