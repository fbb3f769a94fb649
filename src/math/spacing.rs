//! Sample spacing for sensitivity sweeps.

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
///
/// Point `k` is computed as `min + (max - min) * k / (steps - 1)` so both
/// endpoints are reproduced exactly. `steps == 1` yields `[min]` and
/// `steps == 0` yields an empty vector.
pub fn lin_space(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let denom = (steps - 1) as f64;
            (0..steps)
                .map(|k| min + (max - min) * k as f64 / denom)
                .collect()
        }
    }
}

/// Display label for a sample: the value truncated toward zero.
pub fn truncated_label(v: f64) -> String {
    format!("{}", v.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lin_space_includes_endpoints() {
        let v = lin_space(0.0, 100.0, 20);
        assert_eq!(v.len(), 20);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[19], 100.0);
        assert!((v[1] - 100.0 / 19.0).abs() < 1e-12);
    }

    #[test]
    fn lin_space_degenerate_sizes() {
        assert!(lin_space(0.0, 100.0, 0).is_empty());
        assert_eq!(lin_space(0.0, 100.0, 1), vec![0.0]);
        assert_eq!(lin_space(0.0, 100.0, 2), vec![0.0, 100.0]);
    }

    #[test]
    fn labels_truncate() {
        assert_eq!(truncated_label(5.263_157_894_736_842), "5");
        assert_eq!(truncated_label(94.736_842_105_263_16), "94");
        assert_eq!(truncated_label(100.0), "100");
        assert_eq!(truncated_label(0.0), "0");
    }
}
