//! Score → letter rating.

use crate::domain::Rating;

/// Classify a credit score.
///
/// Thresholds are checked from the top with `>=`, first match wins, so a score
/// sitting exactly on a boundary gets the higher bucket. Anything that fails
/// every check (scores below 40, negative scores, NaN) is `CCC or below`.
pub fn classify(score: f64) -> Rating {
    for rating in Rating::ALL {
        if let Some(lower) = rating.lower_bound() {
            if score >= lower {
                return rating;
            }
        }
    }
    Rating::CccOrBelow
}
